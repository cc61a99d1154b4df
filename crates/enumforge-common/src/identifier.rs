//! Identifier legality.
//!
//! Type and member names must be identifiers in whatever namespace the caller
//! eventually binds them into. The rule is injected through [`IdentifierCheck`];
//! [`StandardIdentifiers`] is the default used by every builder.

/// Decides whether a string may be used as a type or member name.
pub trait IdentifierCheck {
    fn is_identifier(&self, name: &str) -> bool;
}

impl<F> IdentifierCheck for F
where
    F: Fn(&str) -> bool,
{
    fn is_identifier(&self, name: &str) -> bool {
        self(name)
    }
}

/// Words rejected when [`StandardIdentifiers::reject_reserved`] is set.
const RESERVED_WORDS: &[&str] = &[
    "as", "break", "const", "continue", "crate", "else", "enum", "extern", "false", "fn", "for",
    "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub", "ref", "return",
    "self", "Self", "static", "struct", "super", "trait", "true", "type", "unsafe", "use", "where",
    "while",
];

/// Letter or `_` followed by letters, digits, or `_`.
///
/// Letters and digits are Unicode-aware (`char::is_alphabetic` and
/// `char::is_alphanumeric`), so `Größe` is accepted while `1st`, `a-b`, and the
/// empty string are not. A lone `_` is rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardIdentifiers {
    pub reject_reserved: bool,
}

impl StandardIdentifiers {
    pub const fn new() -> Self {
        Self {
            reject_reserved: false,
        }
    }

    pub const fn rejecting_reserved() -> Self {
        Self {
            reject_reserved: true,
        }
    }
}

impl IdentifierCheck for StandardIdentifiers {
    fn is_identifier(&self, name: &str) -> bool {
        if !is_identifier_text(name) {
            return false;
        }
        !(self.reject_reserved && RESERVED_WORDS.contains(&name))
    }
}

#[inline]
fn is_identifier_start(ch: char) -> bool {
    ch == '_' || ch.is_alphabetic()
}

#[inline]
fn is_identifier_part(ch: char) -> bool {
    ch == '_' || ch.is_alphanumeric()
}

/// Syntactic check only; reserved words pass.
pub fn is_identifier_text(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !is_identifier_start(first) {
        return false;
    }
    if first == '_' && name.len() == 1 {
        return false;
    }
    chars.all(is_identifier_part)
}
