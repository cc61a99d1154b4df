//! Value assignment for enumerations.
//!
//! A cursor starts just below zero. A bare member takes `cursor + 1`; an
//! explicit member resolves its value, which must fit in `i32`, and moves the
//! cursor there so following bare members continue from it:
//!
//! ```text
//! enum Fruit { apple, orange = 10, kiwi }   // apple = 0, orange = 10, kiwi = 11
//! ```
//!
//! Every value must be distinct. The check covers the whole table, so an
//! explicit value that collides with an earlier auto-assigned one (or the
//! reverse) is caught as well as two equal explicit values.

use rustc_hash::FxHashMap;
use tracing::trace;

use enumforge_common::DefinitionError;
use enumforge_common::limits::AUTO_VALUE_START;
use enumforge_decl::{ConstantResolver, ValidatedDeclaration};

const REPR: &str = "i32";

/// Output of value assignment: members in declaration order plus extrema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignedValues {
    pub members: Vec<(String, i32)>,
    pub lo: i32,
    pub hi: i32,
}

pub fn assign_values(
    decl: &ValidatedDeclaration,
    resolver: &dyn ConstantResolver,
) -> Result<AssignedValues, DefinitionError> {
    let type_name = decl.type_name.as_str();
    let mut cursor: i64 = AUTO_VALUE_START;
    let mut members: Vec<(String, i32)> = Vec::with_capacity(decl.members.len());
    let mut owners: FxHashMap<i32, usize> = FxHashMap::default();

    for spec in &decl.members {
        let value = match &spec.explicit_value {
            None => {
                let next = cursor + 1;
                i32::try_from(next).map_err(|_| DefinitionError::CursorOverflow {
                    type_name: type_name.to_string(),
                    member: spec.name.clone(),
                    repr: REPR,
                })?
            }
            Some(explicit) => {
                let raw = explicit.resolve(resolver).map_err(|err| {
                    DefinitionError::NonIntegerValue {
                        type_name: type_name.to_string(),
                        member: spec.name.clone(),
                        expr: explicit.text(),
                        reason: err.reason,
                    }
                })?;
                i32::try_from(raw).map_err(|_| DefinitionError::ValueOutOfRange {
                    type_name: type_name.to_string(),
                    member: spec.name.clone(),
                    value: raw,
                    repr: REPR,
                })?
            }
        };
        cursor = i64::from(value);

        if let Some(&previous) = owners.get(&value) {
            return Err(DefinitionError::DuplicateValue {
                type_name: type_name.to_string(),
                member: spec.name.clone(),
                previous: members[previous].0.clone(),
                value: value.into(),
            });
        }
        owners.insert(value, members.len());
        trace!(type_name, member = %spec.name, value, "assigned enum value");
        members.push((spec.name.clone(), value));
    }

    // Validation guarantees at least one member.
    let lo = members.iter().map(|(_, v)| *v).min().unwrap_or_default();
    let hi = members.iter().map(|(_, v)| *v).max().unwrap_or_default();
    Ok(AssignedValues { members, lo, hi })
}
