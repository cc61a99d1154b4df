use enumforge_common::{BaseWidth, DefinitionError, StandardIdentifiers};
use enumforge_decl::{Declaration, LiteralResolver, validate};

use crate::bits::{AssignedBits, assign_bits, resolve_base};

fn assign_in(base: BaseWidth, entries: &[&str]) -> Result<AssignedBits, DefinitionError> {
    let decl = Declaration::from_entries("Perm", entries.iter().copied());
    let validated = validate(&decl, &StandardIdentifiers::new())?;
    assign_bits(&validated, base, &LiteralResolver)
}

fn assign(entries: &[&str]) -> Result<AssignedBits, DefinitionError> {
    assign_in(BaseWidth::U32, entries)
}

fn bits(assigned: &AssignedBits) -> Vec<u64> {
    assigned.members.iter().map(|(_, b)| *b).collect()
}

#[test]
fn bare_members_take_successive_bits() {
    let assigned = assign(&["read", "write", "exec"]).unwrap();
    assert_eq!(bits(&assigned), [1, 2, 4]);
    assert_eq!(assigned.mask, 7);
}

#[test]
fn bare_members_continue_above_highest_bit() {
    let assigned = assign(&["a = 1 << 4", "b", "c = 1", "d"]).unwrap();
    assert_eq!(bits(&assigned), [16, 32, 1, 64]);
    assert_eq!(assigned.mask, 0b111_0001);
}

#[test]
fn declared_bits_are_pairwise_disjoint() {
    let assigned = assign(&["a", "b = 8", "c", "d = 2", "e"]).unwrap();
    for (i, (_, x)) in assigned.members.iter().enumerate() {
        for (_, y) in &assigned.members[i + 1..] {
            assert_eq!(x & y, 0);
        }
    }
}

#[test]
fn explicit_values_need_exactly_one_bit() {
    for entry in ["both = 3", "none = 0", "many = 0xff"] {
        let err = assign(&[entry]).unwrap_err();
        assert!(matches!(err, DefinitionError::NotSingleBit { .. }), "{entry}: {err:?}");
    }
}

#[test]
fn overlapping_explicit_bit_is_rejected() {
    let err = assign(&["read", "write", "again = 2"]).unwrap_err();
    assert_eq!(
        err,
        DefinitionError::BitOverlap {
            type_name: "Perm".to_string(),
            member: "again".to_string(),
            value: 2,
            mask: 3,
        }
    );
}

#[test]
fn negative_and_oversized_values_are_rejected() {
    let err = assign(&["neg = -1"]).unwrap_err();
    assert!(matches!(err, DefinitionError::ValueOutOfRange { value: -1, .. }));

    let err = assign_in(BaseWidth::U8, &["wide = 1 << 8"]).unwrap_err();
    assert!(matches!(
        err,
        DefinitionError::ValueOutOfRange { value: 256, repr: "u8", .. }
    ));
}

#[test]
fn auto_bits_stop_at_base_width() {
    let names: Vec<String> = (0..9).map(|i| format!("f{i}")).collect();
    let entries: Vec<&str> = names.iter().map(String::as_str).collect();

    let assigned = assign_in(BaseWidth::U8, &entries[..8]).unwrap();
    assert_eq!(assigned.mask, 0xff);

    let err = assign_in(BaseWidth::U8, &entries).unwrap_err();
    assert_eq!(
        err,
        DefinitionError::BitCursorOverflow {
            type_name: "Perm".to_string(),
            member: "f8".to_string(),
            bits: 8,
        }
    );
}

#[test]
fn auto_bits_after_top_bit_overflow_in_u64() {
    let err = assign_in(BaseWidth::U64, &["top = 1 << 63", "next"]).unwrap_err();
    assert!(matches!(err, DefinitionError::BitCursorOverflow { bits: 64, .. }));
}

#[test]
fn base_names_resolve_or_fail() {
    let ids = StandardIdentifiers::new();
    let decl = Declaration::from_entries("Perm", ["read"]).with_base("uint16");
    let validated = validate(&decl, &ids).unwrap();
    assert_eq!(resolve_base(&validated, BaseWidth::U32), Ok(BaseWidth::U16));

    let decl = Declaration::from_entries("Perm", ["read"]);
    let validated = validate(&decl, &ids).unwrap();
    assert_eq!(resolve_base(&validated, BaseWidth::U64), Ok(BaseWidth::U64));

    let decl = Declaration::from_entries("Perm", ["read"]).with_base("int32");
    let validated = validate(&decl, &ids).unwrap();
    assert_eq!(
        resolve_base(&validated, BaseWidth::U32),
        Err(DefinitionError::InvalidBaseType {
            type_name: "Perm".to_string(),
            base: "int32".to_string(),
        })
    );
}
