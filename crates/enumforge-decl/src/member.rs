//! Declaration entries.
//!
//! A declaration is a type name plus an ordered list of entries. Entries arrive
//! either already structured ([`MemberSpec`]) or as raw text (`"kiwi"`,
//! `"kiwi = 3"`) that is split here and checked by the validator.

use serde::{Deserialize, Serialize};

use crate::resolver::{ConstantResolver, ResolveError};

/// An explicit member value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ExplicitValue {
    /// Already resolved by the caller or a build step.
    Int(i128),
    /// Constant expression text, resolved by the injected [`ConstantResolver`].
    Expr(String),
}

impl ExplicitValue {
    pub fn resolve(&self, resolver: &dyn ConstantResolver) -> Result<i128, ResolveError> {
        match self {
            Self::Int(value) => Ok(*value),
            Self::Expr(expr) => resolver.resolve(expr),
        }
    }

    /// Source text of the value, for diagnostics.
    pub fn text(&self) -> String {
        match self {
            Self::Int(value) => value.to_string(),
            Self::Expr(expr) => expr.clone(),
        }
    }
}

impl From<i128> for ExplicitValue {
    fn from(value: i128) -> Self {
        Self::Int(value)
    }
}

impl From<i64> for ExplicitValue {
    fn from(value: i64) -> Self {
        Self::Int(value.into())
    }
}

impl From<i32> for ExplicitValue {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<u64> for ExplicitValue {
    fn from(value: u64) -> Self {
        Self::Int(value.into())
    }
}

impl From<&str> for ExplicitValue {
    fn from(expr: &str) -> Self {
        Self::Expr(expr.to_string())
    }
}

impl From<String> for ExplicitValue {
    fn from(expr: String) -> Self {
        Self::Expr(expr)
    }
}

/// One well-formed member: a name and an optional explicit value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberSpec {
    pub name: String,
    pub explicit_value: Option<ExplicitValue>,
}

impl MemberSpec {
    pub fn bare(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            explicit_value: None,
        }
    }

    pub fn with_value(name: impl Into<String>, value: impl Into<ExplicitValue>) -> Self {
        Self {
            name: name.into(),
            explicit_value: Some(value.into()),
        }
    }

    /// Split entry text into a name and an optional value expression.
    ///
    /// Returns `None` when the text is neither `name` nor `name = expr`: an
    /// empty entry, an empty side of `=`, or more than one `=`. The name itself
    /// is not checked here.
    pub fn parse(entry: &str) -> Option<Self> {
        let mut parts = entry.splitn(3, '=');
        let name = parts.next()?.trim();
        if name.is_empty() {
            return None;
        }
        match (parts.next(), parts.next()) {
            (None, _) => Some(Self::bare(name)),
            (Some(expr), None) => {
                let expr = expr.trim();
                if expr.is_empty() {
                    return None;
                }
                Some(Self::with_value(name, ExplicitValue::Expr(expr.to_string())))
            }
            (Some(_), Some(_)) => None,
        }
    }

    pub fn is_explicit(&self) -> bool {
        self.explicit_value.is_some()
    }
}

/// Value form accepted in schema files: a JSON integer or expression text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemaValue {
    Signed(i64),
    Unsigned(u64),
    Expr(String),
}

impl From<SchemaValue> for ExplicitValue {
    fn from(value: SchemaValue) -> Self {
        match value {
            SchemaValue::Signed(v) => Self::Int(v.into()),
            SchemaValue::Unsigned(v) => Self::Int(v.into()),
            SchemaValue::Expr(expr) => Self::Expr(expr),
        }
    }
}

/// A declaration entry before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged, deny_unknown_fields)]
pub enum MemberDecl {
    /// Raw entry text, `name` or `name = expr`.
    Text(String),
    /// Structured entry.
    Spec {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<SchemaValue>,
    },
}

impl From<MemberSpec> for MemberDecl {
    fn from(spec: MemberSpec) -> Self {
        let value = spec.explicit_value.map(|value| match value {
            ExplicitValue::Int(v) => match i64::try_from(v) {
                Ok(v) => SchemaValue::Signed(v),
                Err(_) => u64::try_from(v)
                    .map(SchemaValue::Unsigned)
                    .unwrap_or_else(|_| SchemaValue::Expr(v.to_string())),
            },
            ExplicitValue::Expr(expr) => SchemaValue::Expr(expr),
        });
        Self::Spec {
            name: spec.name,
            value,
        }
    }
}

impl From<&str> for MemberDecl {
    fn from(entry: &str) -> Self {
        Self::Text(entry.to_string())
    }
}

/// A type declaration: name, optional base type name, and ordered entries.
///
/// `base` only applies to flag sets; enumerations ignore it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Declaration {
    pub type_name: String,
    pub base: Option<String>,
    pub entries: Vec<MemberDecl>,
}

impl Declaration {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            base: None,
            entries: Vec::new(),
        }
    }

    /// Build a declaration from raw entry texts.
    pub fn from_entries<I, S>(type_name: impl Into<String>, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            type_name: type_name.into(),
            base: None,
            entries: entries
                .into_iter()
                .map(|e| MemberDecl::Text(e.into()))
                .collect(),
        }
    }

    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self
    }

    pub fn push(&mut self, entry: impl Into<MemberDecl>) {
        self.entries.push(entry.into());
    }
}
