//! Sequence properties checked over randomly generated lists
//!
//! Lists come from a fixed-seed generator so failures are reproducible.

use redline_runtime::RandomGenerator;
use redline_runtime::list_ops::{append, find, len, reverse, sort};

fn random_lists(seed: u64, count: usize) -> Vec<Vec<i64>> {
    let mut rng = RandomGenerator::from_seed(seed);
    (0..count)
        .map(|_| {
            let size = rng.int(0, 40) as usize;
            (0..size).map(|_| rng.int(-20, 20)).collect()
        })
        .collect()
}

#[test]
fn test_appended_value_always_found() {
    let mut rng = RandomGenerator::from_seed(1);
    for mut seq in random_lists(100, 200) {
        let v = rng.int(-30, 30);
        append(&mut seq, v);
        let at = find(&seq, &v);
        assert!(at >= 0);
        assert_eq!(seq[at as usize], v);
    }
}

#[test]
fn test_double_reverse_is_identity() {
    for original in random_lists(200, 200) {
        let mut seq = original.clone();
        reverse(&mut seq);
        reverse(&mut seq);
        assert_eq!(len(&seq), len(&original));
        assert_eq!(seq, original);
    }
}

#[test]
fn test_sort_orders_and_preserves_elements() {
    for original in random_lists(300, 200) {
        let mut seq = original.clone();
        sort(&mut seq);
        assert_eq!(len(&seq), len(&original));
        assert!(seq.windows(2).all(|w| w[0] <= w[1]));

        // Same multiset of elements
        let mut expected = original.clone();
        expected.sort_unstable();
        assert_eq!(seq, expected);
    }
}

#[test]
fn test_find_reports_first_occurrence() {
    for seq in random_lists(400, 100) {
        for (i, v) in seq.iter().enumerate() {
            let at = find(&seq, v) as usize;
            assert!(at <= i);
            assert_eq!(&seq[at], v);
            assert!(!seq[..at].contains(v));
        }
    }
}
