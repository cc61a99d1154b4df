//! Declaration surface for enumforge.
//!
//! - `member` - declaration entries (`MemberSpec`, `MemberDecl`, `Declaration`)
//! - `resolver` - constant resolution seam (`ConstantResolver`, `LiteralResolver`)
//! - `validator` - fail-fast declaration checks
//! - `schema` - JSON schema files listing many declarations

pub mod member;
pub mod resolver;
pub mod schema;
pub mod validator;

pub use member::{Declaration, ExplicitValue, MemberDecl, MemberSpec, SchemaValue};
pub use resolver::{ConstantResolver, LiteralResolver, ResolveError, ResolvedOnly};
pub use schema::{EnumSchema, FlagSchema, Schema};
pub use validator::{ValidatedDeclaration, validate};

#[cfg(test)]
#[path = "../tests/member_tests.rs"]
mod member_tests;
#[cfg(test)]
#[path = "../tests/resolver_tests.rs"]
mod resolver_tests;
#[cfg(test)]
#[path = "../tests/schema_tests.rs"]
mod schema_tests;
#[cfg(test)]
#[path = "../tests/validator_tests.rs"]
mod validator_tests;
