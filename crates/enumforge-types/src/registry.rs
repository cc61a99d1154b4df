//! Building every type declared in a schema.
//!
//! The registry is filled in one pass and never changes afterwards. A failing
//! declaration aborts the whole build, so callers never see a registry with
//! some of a schema's types missing.

use std::sync::Arc;

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use thiserror::Error;
use tracing::{debug, info_span};

use enumforge_common::DefinitionError;
use enumforge_decl::{ConstantResolver, Declaration, Schema};

use crate::enumeration::EnumType;
use crate::flagset::FlagSetType;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error(transparent)]
    Definition(#[from] DefinitionError),

    /// Two declarations in one schema share a type name.
    #[error("type `{name}` is declared more than once")]
    DuplicateType { name: String },

    #[error("invalid schema: {0}")]
    Schema(#[from] serde_json::Error),
}

/// A built type of either kind.
#[derive(Debug, Clone)]
pub enum TypeEntry {
    Enum(Arc<EnumType>),
    Flags(Arc<FlagSetType>),
}

#[derive(Debug, Clone, Default)]
pub struct Registry {
    types: IndexMap<String, TypeEntry, FxBuildHasher>,
}

impl Registry {
    /// Build every enumeration, then every flag set, in schema order.
    pub fn build(schema: &Schema, resolver: &dyn ConstantResolver) -> Result<Self, RegistryError> {
        let _span = info_span!(
            "build_registry",
            enums = schema.enums.len(),
            flags = schema.flags.len()
        )
        .entered();

        let mut types: IndexMap<String, TypeEntry, FxBuildHasher> = IndexMap::default();
        for decl in &schema.enums {
            let ty = EnumType::from_declaration(&Declaration::from(decl), &schema.options, resolver)?;
            insert_unique(&mut types, TypeEntry::Enum(Arc::new(ty)))?;
        }
        for decl in &schema.flags {
            let ty =
                FlagSetType::from_declaration(&Declaration::from(decl), &schema.options, resolver)?;
            insert_unique(&mut types, TypeEntry::Flags(Arc::new(ty)))?;
        }

        debug!(types = types.len(), "registry built");
        Ok(Self { types })
    }

    /// Parse a JSON schema and build it.
    pub fn from_json(text: &str, resolver: &dyn ConstantResolver) -> Result<Self, RegistryError> {
        let schema = Schema::from_json(text)?;
        Self::build(&schema, resolver)
    }

    pub fn get(&self, name: &str) -> Option<&TypeEntry> {
        self.types.get(name)
    }

    pub fn enumeration(&self, name: &str) -> Option<Arc<EnumType>> {
        match self.types.get(name)? {
            TypeEntry::Enum(ty) => Some(Arc::clone(ty)),
            TypeEntry::Flags(_) => None,
        }
    }

    pub fn flag_set(&self, name: &str) -> Option<Arc<FlagSetType>> {
        match self.types.get(name)? {
            TypeEntry::Flags(ty) => Some(Arc::clone(ty)),
            TypeEntry::Enum(_) => None,
        }
    }

    /// Type names in build order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.types.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl TypeEntry {
    pub fn name(&self) -> &str {
        match self {
            Self::Enum(ty) => ty.name(),
            Self::Flags(ty) => ty.name(),
        }
    }
}

fn insert_unique(
    types: &mut IndexMap<String, TypeEntry, FxBuildHasher>,
    entry: TypeEntry,
) -> Result<(), RegistryError> {
    let name = entry.name().to_string();
    if types.contains_key(&name) {
        return Err(RegistryError::DuplicateType { name });
    }
    types.insert(name, entry);
    Ok(())
}
