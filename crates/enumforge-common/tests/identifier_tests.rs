use crate::identifier::{IdentifierCheck, StandardIdentifiers, is_identifier_text};

#[test]
fn accepts_plain_identifiers() {
    for name in ["apple", "Apple", "_private", "kiwi2", "snake_case", "Größe"] {
        assert!(is_identifier_text(name), "expected `{name}` to be accepted");
    }
}

#[test]
fn rejects_non_identifiers() {
    for name in ["", "_", "1st", "a-b", "a b", "x=1", "kiwi!", " apple"] {
        assert!(!is_identifier_text(name), "expected `{name}` to be rejected");
    }
}

#[test]
fn reserved_words_only_rejected_on_request() {
    let lenient = StandardIdentifiers::new();
    let strict = StandardIdentifiers::rejecting_reserved();
    assert!(lenient.is_identifier("match"));
    assert!(!strict.is_identifier("match"));
    assert!(strict.is_identifier("matches"));
}

#[test]
fn closures_act_as_identifier_checks() {
    let upper_only = |name: &str| name.chars().all(|c| c.is_ascii_uppercase());
    assert!(upper_only.is_identifier("RED"));
    assert!(!upper_only.is_identifier("Red"));
}
