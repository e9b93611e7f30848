//! Schema Registry binary.
//!
//! Loads configuration, registers the schema catalog and prints the column
//! descriptors of every registered layout as JSON.
//!
//! # Usage
//!
//! ```text
//! schema-registry [CONFIG_PATH]
//! ```
//!
//! The path defaults to `SCHEMA_REGISTRY_CONFIG`, then
//! `config/schema-registry.yaml`.

use std::collections::BTreeMap;

use anyhow::Context;
use schema_registry::config::{self, Config, DEFAULT_CONFIG_PATH};
use schema_registry::registry;
use schema_registry::schema::ColumnDescriptor;
use schema_registry::telemetry;

fn main() -> anyhow::Result<()> {
    let config = parse_config()?;
    telemetry::init_logging(&config.observability.logging)?;

    tracing::info!("Starting Schema Registry");

    let registry = registry::global();
    let registered = config::apply_catalog(&config.catalog, &registry)
        .context("failed to register schema catalog")?;

    let mut layouts: BTreeMap<String, Vec<ColumnDescriptor>> = BTreeMap::new();
    for type_tag in registry.type_tags() {
        let spec = registry.lookup(&type_tag)?;
        layouts.insert(type_tag, spec.column_descriptors());
    }

    println!("{}", serde_json::to_string_pretty(&layouts)?);
    tracing::info!(registered, schemas = layouts.len(), "Schema catalog printed");
    Ok(())
}

fn parse_config() -> anyhow::Result<Config> {
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("SCHEMA_REGISTRY_CONFIG").ok());

    match path {
        Some(path) => config::load_config(Some(&path))
            .with_context(|| format!("failed to load config from '{path}'")),
        None if std::path::Path::new(DEFAULT_CONFIG_PATH).exists() => {
            config::load_config(None).context("failed to load default config")
        }
        None => Ok(Config::default()),
    }
}
