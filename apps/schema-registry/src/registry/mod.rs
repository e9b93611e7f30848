//! Schema Registry
//!
//! Process-wide store from type tag to [`SchemaSpec`].
//!
//! - One `DashMap<String, Arc<SchemaSpec>>`; registrations on different tags
//!   land on different shards and do not contend
//! - Specs are published whole behind an `Arc`, so a lookup never observes a
//!   partially built schema
//! - Re-registering a tag replaces the entry (last writer wins)
//! - No implicit population: built-ins are registered explicitly through
//!   [`catalog::register_builtin_schemas`]

pub mod catalog;

use std::sync::{Arc, OnceLock};

use dashmap::DashMap;
use thiserror::Error;

use crate::error::ErrorCode;
use crate::observability;
use crate::schema::SchemaSpec;

/// No schema is registered for a type tag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Schema not registered: {type_tag}")]
pub struct SchemaNotRegistered {
    /// The unknown type tag.
    pub type_tag: String,
}

/// Registry of schemas keyed by type tag.
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    schemas: DashMap<String, Arc<SchemaSpec>>,
}

impl SchemaRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `spec` under its own type tag, replacing any previous entry.
    ///
    /// Returns the replaced schema, if any.
    pub fn register(&self, spec: SchemaSpec) -> Option<Arc<SchemaSpec>> {
        let type_tag = spec.type_tag().to_owned();
        let columns = spec.len();
        let spec = Arc::new(spec);
        let previous = self.schemas.insert(type_tag.clone(), Arc::clone(&spec));

        match &previous {
            Some(old) => tracing::warn!(
                type_tag = %type_tag,
                columns,
                changed = ?old.diff(&spec),
                "Schema override replaced registered layout"
            ),
            None => tracing::info!(type_tag = %type_tag, columns, "Schema registered"),
        }
        observability::record_schema_registration(&type_tag, previous.is_some());
        observability::update_registered_schemas(self.schemas.len());

        previous
    }

    /// Currently registered schema for `type_tag`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaNotRegistered`] when nothing is registered under
    /// `type_tag`. No fallback schema is synthesized.
    pub fn lookup(&self, type_tag: &str) -> Result<Arc<SchemaSpec>, SchemaNotRegistered> {
        self.schemas
            .get(type_tag)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| {
                tracing::debug!(
                    type_tag,
                    error_code = ErrorCode::SchemaNotRegistered.reason(),
                    "Lookup of unregistered schema"
                );
                SchemaNotRegistered {
                    type_tag: type_tag.to_owned(),
                }
            })
    }

    /// Whether `type_tag` is registered.
    pub fn contains(&self, type_tag: &str) -> bool {
        self.schemas.contains_key(type_tag)
    }

    /// Registered type tags, sorted.
    pub fn type_tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = self.schemas.iter().map(|e| e.key().clone()).collect();
        tags.sort_unstable();
        tags
    }

    /// Number of registered schemas.
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

static GLOBAL: OnceLock<Arc<SchemaRegistry>> = OnceLock::new();

/// The process-wide registry, created empty on first use.
pub fn global() -> Arc<SchemaRegistry> {
    Arc::clone(GLOBAL.get_or_init(|| Arc::new(SchemaRegistry::new())))
}
