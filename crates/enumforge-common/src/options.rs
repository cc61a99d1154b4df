//! Builder configuration.

use serde::{Deserialize, Serialize};

use crate::identifier::StandardIdentifiers;
use crate::width::BaseWidth;

/// Options shared by the enumeration and flag-set builders.
///
/// Deserializable so a schema file can carry them in an `options` block; every
/// field falls back to its default when omitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct BuildOptions {
    /// Base width for flag sets that do not name one.
    pub default_flag_base: BaseWidth,
    /// Reject reserved words as type and member names.
    pub reject_reserved_words: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            default_flag_base: BaseWidth::U32,
            reject_reserved_words: false,
        }
    }
}

impl BuildOptions {
    /// Identifier rule implied by these options.
    pub fn identifiers(&self) -> StandardIdentifiers {
        StandardIdentifiers {
            reject_reserved: self.reject_reserved_words,
        }
    }
}
