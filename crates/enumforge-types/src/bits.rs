//! Bit assignment for flag sets.
//!
//! The running mask starts empty. A bare member takes the bit just above the
//! highest bit in use (or bit 0 when nothing is used yet). An explicit member
//! must resolve to a single set bit that no earlier member owns. Both paths
//! fail when the bit does not fit in the base width.

use tracing::trace;

use enumforge_common::{BaseWidth, DefinitionError};
use enumforge_decl::{ConstantResolver, ValidatedDeclaration};

/// Output of bit assignment: members in declaration order plus their union.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignedBits {
    pub members: Vec<(String, u64)>,
    pub mask: u64,
}

/// Base width named by the declaration, or `default` when it names none.
pub fn resolve_base(
    decl: &ValidatedDeclaration,
    default: BaseWidth,
) -> Result<BaseWidth, DefinitionError> {
    match decl.base.as_deref() {
        None => Ok(default),
        Some(name) => {
            BaseWidth::from_type_name(name).ok_or_else(|| DefinitionError::InvalidBaseType {
                type_name: decl.type_name.clone(),
                base: name.to_string(),
            })
        }
    }
}

/// Bit following the highest bit of `mask`, or `None` past bit 63.
fn next_auto_bit(mask: u64) -> Option<u64> {
    if mask == 0 {
        return Some(1);
    }
    let highest = 63 - mask.leading_zeros();
    if highest == 63 {
        None
    } else {
        Some(1u64 << (highest + 1))
    }
}

pub fn assign_bits(
    decl: &ValidatedDeclaration,
    base: BaseWidth,
    resolver: &dyn ConstantResolver,
) -> Result<AssignedBits, DefinitionError> {
    let type_name = decl.type_name.as_str();
    let mut mask: u64 = 0;
    let mut members = Vec::with_capacity(decl.members.len());

    for spec in &decl.members {
        let bit = match &spec.explicit_value {
            None => next_auto_bit(mask)
                .filter(|&bit| bit <= base.max_value())
                .ok_or_else(|| DefinitionError::BitCursorOverflow {
                    type_name: type_name.to_string(),
                    member: spec.name.clone(),
                    bits: base.bits(),
                })?,
            Some(explicit) => {
                let raw = explicit.resolve(resolver).map_err(|err| {
                    DefinitionError::NonIntegerValue {
                        type_name: type_name.to_string(),
                        member: spec.name.clone(),
                        expr: explicit.text(),
                        reason: err.reason,
                    }
                })?;
                let value = u64::try_from(raw)
                    .ok()
                    .filter(|&v| v <= base.max_value())
                    .ok_or_else(|| DefinitionError::ValueOutOfRange {
                        type_name: type_name.to_string(),
                        member: spec.name.clone(),
                        value: raw,
                        repr: base.name(),
                    })?;
                if value.count_ones() != 1 {
                    return Err(DefinitionError::NotSingleBit {
                        type_name: type_name.to_string(),
                        member: spec.name.clone(),
                        value,
                    });
                }
                if value & mask != 0 {
                    return Err(DefinitionError::BitOverlap {
                        type_name: type_name.to_string(),
                        member: spec.name.clone(),
                        value,
                        mask,
                    });
                }
                value
            }
        };
        mask |= bit;
        trace!(type_name, member = %spec.name, bit, "assigned flag bit");
        members.push((spec.name.clone(), bit));
    }

    Ok(AssignedBits { members, mask })
}
