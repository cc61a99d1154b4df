//! Closed, integer-backed enumeration and flag-set types.
//!
//! Types are built once from a declarative member list and never change
//! afterwards:
//!
//! - [`EnumType`]: distinct `i32` values, auto-incremented from the previous
//!   member unless given explicitly. A raw integer converts only if it is one
//!   of the declared values.
//! - [`FlagSetType`]: disjoint single-bit flags. Any combination of declared
//!   bits converts, whether or not a member names it.
//!
//! ```ignore
//! use enumforge::{EnumBuilder, FlagSetBuilder};
//!
//! let fruit = EnumBuilder::new("Fruit").entry("apple = 1").member("orange").build()?;
//! assert_eq!(fruit.from_integer(2)?.name(), "orange");
//!
//! let perm = FlagSetBuilder::new("Perm").member("read").member("write").build()?;
//! let rw = perm.member("read").unwrap() | perm.member("write").unwrap();
//! assert_eq!(rw.to_integer(), 3);
//! ```
//!
//! The workspace crates are re-exported here:
//! - `enumforge_common` - errors, identifier rules, base widths, options
//! - `enumforge_decl` - declarations, constant resolution, validation, schemas
//! - `enumforge_types` - the builders, descriptors, and value types

pub mod tracing_config;
pub use tracing_config::{LogFormat, init_tracing};

pub use enumforge_common::{
    BaseWidth, BuildOptions, DecodeError, DefinitionError, IdentifierCheck, InvalidValueError,
    StandardIdentifiers, limits,
};
pub use enumforge_decl::{
    ConstantResolver, Declaration, EnumSchema, ExplicitValue, FlagSchema, LiteralResolver,
    MemberDecl, MemberSpec, ResolveError, ResolvedOnly, Schema,
};
pub use enumforge_types::{
    EnumBuilder, EnumType, Enumeration, FlagSet, FlagSetBuilder, FlagSetType, MemberTable,
    Registry, RegistryError, Strategy, TypeEntry,
};

pub mod common {
    pub use enumforge_common::*;
}

pub mod decl {
    pub use enumforge_decl::*;
}

pub mod types {
    pub use enumforge_types::*;
}
