//! Integration tests for the sequence and validation helpers
//!
//! These tests exercise the public API the way a downstream crate would,
//! checking the algebraic properties the helpers promise rather than
//! individual cases.

use utilbelt_common::{
    dedup, difference, difference_hashed, intersect, intersect_hashed, is_valid_email,
    is_valid_password, shuffle, FixedRandomPort,
};

fn samples() -> Vec<Vec<i32>> {
    vec![
        vec![],
        vec![1],
        vec![1, 1, 1],
        vec![1, 2, 2, 3, 1],
        vec![9, -1, 4, 4, 0, -1, 9, 7],
        (0..50).map(|i| (i * 7) % 11).collect(),
    ]
}

#[test]
fn test_dedup_is_idempotent_and_order_preserving() {
    for s in samples() {
        let once = dedup(&s);
        assert_eq!(dedup(&once), once, "dedup not idempotent for {:?}", s);

        // Every kept element is the first occurrence in the input
        let mut last_pos = None;
        for item in &once {
            let pos = s.iter().position(|x| x == item);
            assert!(pos > last_pos, "order not preserved for {:?}", s);
            last_pos = pos;
        }
    }
}

#[test]
fn test_hashed_variants_agree_with_naive() {
    let all = samples();
    for a in &all {
        for b in &all {
            assert_eq!(intersect(a, b), intersect_hashed(a, b));
            assert_eq!(difference(a, b), difference_hashed(a, b));
        }
    }
}

#[test]
fn test_intersection_and_difference_partition_the_input() {
    let all = samples();
    for a in &all {
        for b in &all {
            let both = intersect(a, b);
            let only_a = difference(a, b);
            assert_eq!(both.len() + only_a.len(), a.len());
        }
        assert!(difference(a, a).is_empty());
        assert!(intersect(a, &[]).is_empty());
    }
}

#[test]
fn test_shuffle_keeps_length_and_elements() {
    let rng = FixedRandomPort::new(vec![3, 0, 7, 1, 2, 5]);
    for s in samples() {
        let mut shuffled = shuffle(&s, &rng);
        assert_eq!(shuffled.len(), s.len());

        let mut sorted = s.clone();
        sorted.sort_unstable();
        shuffled.sort_unstable();
        assert_eq!(shuffled, sorted);
    }
}

#[test]
fn test_validators_on_documented_examples() {
    assert!(is_valid_email("a@b.co"));
    assert!(!is_valid_email("a@b"));
    assert!(!is_valid_email("not-an-email"));

    assert!(is_valid_password("Abcdefg1"));
    assert!(!is_valid_password("abcdefg1"));
    assert!(!is_valid_password("Abc1"));
}
