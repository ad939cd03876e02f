use grid_boggle::core::{
    ADJACENCY, Grid, GridGenerator, LetterFrequencies, Position, TILE_COUNT, VOWEL_INDEX, is_vowel,
};
use grid_boggle::dictionary::Dictionary;
use grid_boggle::game::{
    Countdown, Round, RoundSummary, SessionStats, Tick, Verdict, find_words, score_word,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn generator() -> GridGenerator {
    GridGenerator::new(&Dictionary::embedded().letter_frequencies())
}

fn grid_letters() -> impl Strategy<Value = String> {
    "[A-Z]{9}"
}

fn summary() -> impl Strategy<Value = RoundSummary> {
    (
        0u32..5000,
        proptest::collection::vec("[A-Z]{3,9}", 0..6),
        prop::sample::select(vec![30u32, 60, 90, 120]),
    )
        .prop_map(|(score, words, time_limit)| RoundSummary {
            score,
            words,
            time_limit,
        })
}

proptest! {
    #[test]
    fn vowel_in_centre_consonants_elsewhere(seed in any::<u64>()) {
        let grid = generator().generate(&mut StdRng::seed_from_u64(seed));
        for (i, &letter) in grid.letters().iter().enumerate() {
            prop_assert!(letter.is_ascii_uppercase());
            prop_assert_eq!(is_vowel(letter), i == VOWEL_INDEX);
        }
    }

    #[test]
    fn uniform_fallback_still_places_vowel(seed in any::<u64>()) {
        let grid = GridGenerator::new(&LetterFrequencies::default())
            .generate(&mut StdRng::seed_from_u64(seed));
        prop_assert!(is_vowel(grid.center() as u8));
        prop_assert_eq!(grid.letters().iter().filter(|&&b| is_vowel(b)).count(), 1);
    }

    #[test]
    fn same_seed_same_grid(seed in any::<u64>()) {
        let generator = generator();
        let a = generator.generate(&mut StdRng::seed_from_u64(seed));
        let b = generator.generate(&mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(a, b);
    }

    #[test]
    fn adjacency_symmetric_and_irreflexive(a in 0usize..TILE_COUNT, b in 0usize..TILE_COUNT) {
        let pa = Position::from_index(a).unwrap();
        let pb = Position::from_index(b).unwrap();
        prop_assert_eq!(pa.is_adjacent(pb), pb.is_adjacent(pa));
        prop_assert_eq!(ADJACENCY[a] & (1 << b) != 0, pa.is_adjacent(pb));
        if a == b {
            prop_assert!(!pa.is_adjacent(pb));
        }
    }

    #[test]
    fn score_follows_length(word in "[a-z]{0,12}") {
        let expected = match word.len() {
            3..=9 => 100 * word.len() as u32,
            _ => 0,
        };
        prop_assert_eq!(score_word(&word), expected);
    }

    #[test]
    fn traced_paths_are_valid(letters in grid_letters(), start in 0usize..TILE_COUNT, len in 1usize..=TILE_COUNT) {
        let grid: Grid = letters.parse().unwrap();
        // Walk any chain of fresh neighbours to build a word the grid can spell
        let mut path = vec![Position::from_index(start).unwrap()];
        while path.len() < len {
            let last = path[path.len() - 1];
            let Some(next) = last.neighbors().find(|n| !path.contains(n)) else {
                break;
            };
            path.push(next);
        }
        let word: String = path.iter().map(|&p| grid.letter(p)).collect();

        let traced = grid.trace(&word).unwrap();
        prop_assert_eq!(traced.len(), word.len());
        for pair in traced.windows(2) {
            prop_assert!(pair[0].is_adjacent(pair[1]));
        }
        for (i, p) in traced.iter().enumerate() {
            prop_assert!(!traced[i + 1..].contains(p));
            prop_assert_eq!(grid.letter(*p), word.chars().nth(i).unwrap());
        }
    }

    #[test]
    fn finder_results_trace_and_are_words(seed in any::<u64>()) {
        let dictionary = Dictionary::embedded();
        let grid = generator().generate(&mut StdRng::seed_from_u64(seed));
        for word in find_words(&grid, &dictionary) {
            prop_assert!(dictionary.is_valid_word(word));
            prop_assert!(grid.trace(word).is_some());
            prop_assert!(score_word(word) > 0);
        }
    }

    #[test]
    fn duplicates_never_rescore(repeats in 1usize..5) {
        let dictionary = Dictionary::new(["cat"]);
        let grid: Grid = "CATSEPRNT".parse().unwrap();
        let mut round = Round::new(&dictionary, grid.clone(), 60);
        let path = grid.trace("cat").unwrap();

        for attempt in 0..repeats {
            for &p in &path {
                round.press(p);
            }
            let verdict = round.commit().unwrap();
            if attempt == 0 {
                prop_assert!(verdict.is_accepted());
            } else {
                prop_assert_eq!(verdict, Verdict::AlreadyFound("CAT".to_string()));
            }
        }
        prop_assert_eq!(round.score(), 300);
        prop_assert_eq!(round.found_words().len(), 1);
    }

    #[test]
    fn countdown_stays_expired(limit in 1u32..200) {
        let mut countdown = Countdown::new(limit);
        let mut expirations = 0;
        for _ in 0..limit + 5 {
            if countdown.tick() == Tick::Expired {
                expirations += 1;
            }
        }
        prop_assert!(countdown.is_expired());
        prop_assert_eq!(countdown.remaining(), 0);
        // Ticks after expiry keep reporting it
        prop_assert_eq!(expirations, 6);
    }

    #[test]
    fn session_bests_never_decrease(rounds in proptest::collection::vec(summary(), 1..8)) {
        let mut stats = SessionStats::new();
        let mut previous = stats.clone();
        for round in &rounds {
            stats.record(round);
            prop_assert!(stats.best_score() >= previous.best_score());
            prop_assert!(stats.best_word_count() >= previous.best_word_count());
            prop_assert!(stats.best_word_points() >= previous.best_word_points());
            prop_assert!(stats.best_score() >= round.score);
            previous = stats.clone();
        }
        prop_assert_eq!(stats.rounds_played(), rounds.len());
    }
}
