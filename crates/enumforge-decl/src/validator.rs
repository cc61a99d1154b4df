//! Declaration validation.
//!
//! Checks run in a fixed order and stop at the first violation:
//! 1. the type name is an identifier;
//! 2. the member list is non-empty;
//! 3. each entry is well formed (`name` or `name = expr`);
//! 4. each member name is an identifier;
//! 5. no member name repeats.
//!
//! Values are not inspected here; the value and bit assignors resolve and
//! check them.

use rustc_hash::FxHashSet;
use tracing::trace;

use enumforge_common::{DefinitionError, IdentifierCheck};

use crate::member::{Declaration, MemberDecl, MemberSpec};

/// A declaration that passed validation. Member order is preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedDeclaration {
    pub type_name: String,
    pub base: Option<String>,
    pub members: Vec<MemberSpec>,
}

pub fn validate(
    decl: &Declaration,
    identifiers: &dyn IdentifierCheck,
) -> Result<ValidatedDeclaration, DefinitionError> {
    let type_name = decl.type_name.as_str();
    if !identifiers.is_identifier(type_name) {
        return Err(DefinitionError::InvalidTypeName {
            name: type_name.to_string(),
        });
    }

    if decl.entries.is_empty() {
        return Err(DefinitionError::EmptyMemberList {
            type_name: type_name.to_string(),
        });
    }

    let mut members = Vec::with_capacity(decl.entries.len());
    let mut seen: FxHashSet<String> = FxHashSet::default();
    for entry in &decl.entries {
        let spec = to_member_spec(type_name, entry)?;
        if !identifiers.is_identifier(&spec.name) {
            return Err(DefinitionError::InvalidMemberName {
                type_name: type_name.to_string(),
                name: spec.name,
            });
        }
        if !seen.insert(spec.name.clone()) {
            return Err(DefinitionError::DuplicateMember {
                type_name: type_name.to_string(),
                name: spec.name,
            });
        }
        members.push(spec);
    }

    trace!(type_name, members = members.len(), "declaration validated");
    Ok(ValidatedDeclaration {
        type_name: type_name.to_string(),
        base: decl.base.clone(),
        members,
    })
}

fn to_member_spec(type_name: &str, entry: &MemberDecl) -> Result<MemberSpec, DefinitionError> {
    match entry {
        MemberDecl::Text(text) => {
            MemberSpec::parse(text).ok_or_else(|| DefinitionError::MalformedEntry {
                type_name: type_name.to_string(),
                entry: text.clone(),
            })
        }
        MemberDecl::Spec { name, value } => Ok(MemberSpec {
            name: name.trim().to_string(),
            explicit_value: value.clone().map(Into::into),
        }),
    }
}
