use enumforge_common::{BaseWidth, BuildOptions, DecodeError, DefinitionError, InvalidValueError};

use crate::{FlagSetBuilder, FlagSetType};

fn fruit() -> FlagSetType {
    FlagSetBuilder::new("Fruit")
        .entry("apple = 1 << 0")
        .entry("orange = 1 << 1")
        .entry("kiwi = 1 << 2")
        .build()
        .unwrap()
}

#[test]
fn union_and_subset_of_declared_flags() {
    let ty = fruit();
    assert_eq!(ty.mask(), 7);
    let apple = ty.member("apple").unwrap();
    let kiwi = ty.member("kiwi").unwrap();
    let both = apple.union(kiwi);
    assert_eq!(both.to_integer(), 5);
    assert!(apple.is_subset_of(both));
    assert!(both.contains(kiwi));
    assert!(!both.is_subset_of(apple));
}

#[test]
fn rejects_values_outside_the_mask() {
    let ty = fruit();
    assert_eq!(
        ty.from_integer(8).unwrap_err(),
        InvalidValueError::new("Fruit", 8)
    );
    assert!(ty.from_integer(-1).is_err());
    assert!(ty.from_integer(9).is_err());
    assert!(!ty.contains(1i128 << 64));
}

#[test]
fn accepts_undeclared_combinations() {
    let ty = fruit();
    for x in 0..=7u64 {
        let value = ty.from_integer(x).unwrap();
        assert_eq!(value.to_integer(), x);
        assert_eq!(ty.from_integer(value.to_integer()).unwrap(), value);
    }
}

#[test]
fn submask_rule_with_gaps_in_the_mask() {
    let ty = FlagSetBuilder::new("Sparse")
        .value("low", 1)
        .value("high", 8)
        .build()
        .unwrap();
    assert_eq!(ty.mask(), 9);
    assert!(ty.from_integer(9).is_ok());
    // Below the mask but not a submask of it.
    assert!(ty.from_integer(2).is_err());
    assert!(ty.from_integer(6).is_err());
}

#[test]
fn set_algebra_laws_hold_for_declared_flags() {
    let ty = FlagSetBuilder::new("Perm")
        .member("read")
        .member("write")
        .member("exec")
        .member("admin")
        .build()
        .unwrap();
    let flags: Vec<_> = ty.instances().collect();
    for &a in &flags {
        for &b in &flags {
            let union = a.union(b);
            assert!(a.is_subset_of(union));
            assert!(b.is_subset_of(union));
            let meet = a.intersect(b);
            assert!(meet.is_subset_of(a));
            assert!(meet.is_subset_of(b));
            if a != b {
                assert_eq!(a.to_integer() & b.to_integer(), 0);
                assert_eq!(union.difference(a), b);
                assert!(meet.is_empty());
            }
            assert!(ty.from_integer(union.to_integer()).is_ok());
        }
    }
}

#[test]
fn operators_match_named_methods() {
    let ty = fruit();
    let apple = ty.member("apple").unwrap();
    let orange = ty.member("orange").unwrap();
    let all = ty.full();
    assert_eq!(apple | orange, apple.union(orange));
    assert_eq!(all & orange, orange);
    assert_eq!((all - orange).to_integer(), 5);
    assert_eq!(apple - apple, ty.empty());
}

#[test]
fn instances_are_atoms_only() {
    let ty = fruit();
    let atoms: Vec<u64> = ty.instances().map(|f| f.to_integer()).collect();
    assert_eq!(atoms, [1, 2, 4]);
    assert_eq!(ty.instances().len(), 3);
    // Restartable.
    assert_eq!(ty.instances().count(), 3);
}

#[test]
fn flags_split_a_value_into_atoms() {
    let ty = fruit();
    let value = ty.from_integer(5).unwrap();
    let parts: Vec<u64> = value.flags().map(|f| f.to_integer()).collect();
    assert_eq!(parts, [1, 4]);
    assert_eq!(ty.empty().flags().count(), 0);
    assert_eq!(format!("{value:?}"), "Fruit(apple | kiwi; 0x5)");
}

#[test]
fn encodes_in_base_width() {
    let ty = FlagSetBuilder::new("Small")
        .base("u16")
        .member("a")
        .value("b", "1 << 15")
        .build()
        .unwrap();
    assert_eq!(ty.base(), BaseWidth::U16);
    let value = ty.full();
    let bytes = value.encode();
    assert_eq!(bytes.as_slice(), 0x8001u16.to_ne_bytes());
    assert_eq!(ty.decode(&bytes).unwrap(), value);

    assert_eq!(
        ty.decode(&0x0002u16.to_ne_bytes()),
        Err(DecodeError::Invalid(InvalidValueError::new("Small", 2)))
    );
    assert!(matches!(
        ty.decode(&[0, 0, 0, 0]),
        Err(DecodeError::Length { expected: 2, found: 4, .. })
    ));
}

#[test]
fn default_base_comes_from_options() {
    assert_eq!(fruit().base(), BaseWidth::U32);
    let options = BuildOptions {
        default_flag_base: BaseWidth::U8,
        ..BuildOptions::default()
    };
    let ty = FlagSetBuilder::new("Tiny")
        .member("a")
        .with_options(options)
        .build()
        .unwrap();
    assert_eq!(ty.base(), BaseWidth::U8);
    assert_eq!(ty.full().encode().len(), 1);
}

#[test]
fn definition_errors_abort_the_build() {
    let err = FlagSetBuilder::new("Fruit")
        .member("apple")
        .value("again", 1)
        .build()
        .unwrap_err();
    assert!(matches!(err, DefinitionError::BitOverlap { .. }));

    let err = FlagSetBuilder::new("Fruit")
        .base("i32")
        .member("apple")
        .build()
        .unwrap_err();
    assert!(matches!(err, DefinitionError::InvalidBaseType { .. }));

    let err = FlagSetBuilder::new("Fruit")
        .value("pair", 6)
        .build()
        .unwrap_err();
    assert!(matches!(err, DefinitionError::NotSingleBit { value: 6, .. }));
}

#[test]
fn values_lead_back_to_their_descriptor() {
    let ty = fruit();
    let both = ty.member("apple").unwrap() | ty.member("kiwi").unwrap();
    let descriptor = both.descriptor();
    assert!(std::ptr::eq(descriptor, &ty));
    assert_eq!(descriptor.table().names().collect::<Vec<_>>(), ["apple", "orange", "kiwi"]);
    assert_eq!(descriptor.table().values().collect::<Vec<_>>(), [1, 2, 4]);
}
