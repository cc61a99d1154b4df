//! Enumeration and flag-set types built from validated declarations.
//!
//! This crate is organized into several submodules:
//! - `assign` - auto-increment value assignment for enumerations
//! - `bits` - single-bit assignment and overlap checks for flag sets
//! - `membership` - membership predicate selection for enumerations
//! - `table` - immutable name/value tables exposed to outside layers
//! - `enumeration` - `EnumType` descriptors and `Enumeration` values
//! - `flagset` - `FlagSetType` descriptors and `FlagSet` values
//! - `registry` - every type of a schema, built in one pass

pub mod assign;
pub mod bits;
pub mod enumeration;
pub mod flagset;
pub mod membership;
pub mod registry;
pub mod table;

pub use enumeration::{EnumBuilder, EnumType, Enumeration};
pub use flagset::{FlagSet, FlagSetBuilder, FlagSetType};
pub use membership::{Membership, Strategy};
pub use registry::{Registry, RegistryError, TypeEntry};
pub use table::MemberTable;

#[cfg(test)]
#[path = "../tests/assign_tests.rs"]
mod assign_tests;
#[cfg(test)]
#[path = "../tests/bits_tests.rs"]
mod bits_tests;
#[cfg(test)]
#[path = "../tests/membership_tests.rs"]
mod membership_tests;
#[cfg(test)]
#[path = "../tests/enumeration_tests.rs"]
mod enumeration_tests;
#[cfg(test)]
#[path = "../tests/flagset_tests.rs"]
mod flagset_tests;
#[cfg(test)]
#[path = "../tests/registry_tests.rs"]
mod registry_tests;
