//! Declarative schema files.
//!
//! A schema lists every enumeration and flag set a caller wants built, in one
//! JSON document:
//!
//! ```json
//! {
//!   "options": { "defaultFlagBase": "u16" },
//!   "enums": [ { "name": "Fruit", "members": ["apple = 1", "orange", "kiwi"] } ],
//!   "flags": [ { "name": "Perm", "base": "u8", "members": ["read", { "name": "exec", "value": 4 }] } ]
//! }
//! ```
//!
//! Members may be entry text or `{ "name", "value" }` objects; `value` is an
//! integer or expression text handed to the constant resolver.

use serde::{Deserialize, Serialize};

use enumforge_common::BuildOptions;

use crate::member::{Declaration, MemberDecl};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Schema {
    pub options: BuildOptions,
    pub enums: Vec<EnumSchema>,
    pub flags: Vec<FlagSchema>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnumSchema {
    pub name: String,
    #[serde(default)]
    pub members: Vec<MemberDecl>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FlagSchema {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    #[serde(default)]
    pub members: Vec<MemberDecl>,
}

impl Schema {
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl From<&EnumSchema> for Declaration {
    fn from(schema: &EnumSchema) -> Self {
        Self {
            type_name: schema.name.clone(),
            base: None,
            entries: schema.members.clone(),
        }
    }
}

impl From<&FlagSchema> for Declaration {
    fn from(schema: &FlagSchema) -> Self {
        Self {
            type_name: schema.name.clone(),
            base: schema.base.clone(),
            entries: schema.members.clone(),
        }
    }
}
