use crate::{ExplicitValue, MemberDecl, MemberSpec, SchemaValue};

#[test]
fn parses_bare_entries() {
    assert_eq!(MemberSpec::parse("apple"), Some(MemberSpec::bare("apple")));
    assert_eq!(MemberSpec::parse("  kiwi  "), Some(MemberSpec::bare("kiwi")));
}

#[test]
fn parses_assigned_entries() {
    let spec = MemberSpec::parse("orange = 1 << 1").unwrap();
    assert_eq!(spec.name, "orange");
    assert_eq!(
        spec.explicit_value,
        Some(ExplicitValue::Expr("1 << 1".to_string()))
    );
    assert!(spec.is_explicit());
}

#[test]
fn rejects_malformed_entries() {
    for entry in ["", "   ", "= 3", "apple =", "a = b = c", "a == 1"] {
        assert_eq!(MemberSpec::parse(entry), None, "entry `{entry}`");
    }
}

#[test]
fn spec_to_decl_keeps_large_unsigned_values() {
    let decl: MemberDecl = MemberSpec::with_value("top", u64::MAX).into();
    assert_eq!(
        decl,
        MemberDecl::Spec {
            name: "top".to_string(),
            value: Some(SchemaValue::Unsigned(u64::MAX)),
        }
    );
}
