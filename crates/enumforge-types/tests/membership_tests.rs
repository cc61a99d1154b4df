use crate::membership::{Membership, Strategy};

fn synthesize(values: &[i32]) -> Membership {
    let lo = *values.iter().min().unwrap();
    let hi = *values.iter().max().unwrap();
    Membership::synthesize(values, lo, hi)
}

fn assert_equivalent(values: &[i32], expected: Strategy) {
    let membership = synthesize(values);
    assert_eq!(membership.strategy(), expected);
    let lo = *values.iter().min().unwrap();
    let hi = *values.iter().max().unwrap();
    for x in lo - 5..=hi + 5 {
        assert_eq!(
            membership.contains(x),
            values.contains(&x),
            "{expected:?} disagrees on {x}"
        );
    }
}

#[test]
fn dense_range_uses_range_check() {
    assert_equivalent(&[0, 1, 2, 3, 4, 5], Strategy::Range);
}

#[test]
fn dense_range_in_any_declaration_order() {
    assert_equivalent(&[3, 1, 0, 5, 2, 4], Strategy::Range);
    assert_equivalent(&[-2, -1, 0], Strategy::Range);
}

#[test]
fn sparse_small_set_uses_disjunction() {
    // 4 of the 20 values in 0..20
    assert_equivalent(&[0, 7, 13, 19], Strategy::Disjunction);
}

#[test]
fn largest_disjunction_has_nineteen_members() {
    let values: Vec<i32> = (0..19).map(|i| i * 2).collect();
    assert_equivalent(&values, Strategy::Disjunction);
}

#[test]
fn sparse_large_set_uses_hash_set() {
    let values: Vec<i32> = (0..25).map(|i| i * 3 - 10).collect();
    assert_equivalent(&values, Strategy::Set);

    let values: Vec<i32> = (0..20).map(|i| i * 2).collect();
    assert_equivalent(&values, Strategy::Set);
}

#[test]
fn large_dense_range_still_uses_range_check() {
    let values: Vec<i32> = (100..150).collect();
    assert_equivalent(&values, Strategy::Range);
}

#[test]
fn single_value_is_a_range() {
    assert_equivalent(&[42], Strategy::Range);
}

#[test]
fn extreme_bounds_do_not_overflow() {
    let membership = Membership::synthesize(&[i32::MIN, i32::MAX], i32::MIN, i32::MAX);
    assert_eq!(membership.strategy(), Strategy::Disjunction);
    assert!(membership.contains(i32::MIN));
    assert!(membership.contains(i32::MAX));
    assert!(!membership.contains(0));
}
