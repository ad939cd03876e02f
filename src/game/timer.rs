//! Round countdown
//!
//! The countdown only counts: the caller ticks it once per second and reacts to
//! `Tick::Expired`.

/// Time limits offered on the welcome and results screens, in seconds
pub const TIME_LIMITS: [u32; 4] = [30, 60, 90, 120];

/// Time limit used when none is chosen
pub const DEFAULT_TIME_LIMIT: u32 = 90;

/// Result of a single one-second tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Seconds left after this tick
    Running(u32),
    Expired,
}

/// Seconds remaining in a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    limit: u32,
    remaining: u32,
}

impl Countdown {
    #[must_use]
    pub const fn new(limit: u32) -> Self {
        Self {
            limit,
            remaining: limit,
        }
    }

    /// Advance one second; expiry is reported when the count reaches zero
    ///
    /// Ticking an expired countdown keeps reporting `Expired`.
    pub const fn tick(&mut self) -> Tick {
        if self.remaining == 0 {
            return Tick::Expired;
        }
        self.remaining -= 1;
        if self.remaining == 0 {
            Tick::Expired
        } else {
            Tick::Running(self.remaining)
        }
    }

    /// Stop the countdown immediately
    pub const fn stop(&mut self) {
        self.remaining = 0;
    }

    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    #[must_use]
    pub const fn elapsed(&self) -> u32 {
        self.limit - self.remaining
    }

    #[must_use]
    pub const fn is_expired(&self) -> bool {
        self.remaining == 0
    }

    /// Fraction of the limit still left, in `[0, 1]`
    #[must_use]
    pub fn fraction_remaining(&self) -> f64 {
        if self.limit == 0 {
            0.0
        } else {
            f64::from(self.remaining) / f64::from(self.limit)
        }
    }
}

/// Map a menu choice (`1`..=`4`) to its time limit
#[must_use]
pub fn time_limit_for_choice(choice: usize) -> Option<u32> {
    choice
        .checked_sub(1)
        .and_then(|i| TIME_LIMITS.get(i))
        .copied()
}
