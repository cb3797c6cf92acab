//! Configuration file support for price-lens.
//!
//! Provides YAML-based configuration through `price-lens.config.yml`
//! files, including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use crate::application::dto::OutputFormat;
use crate::pricing::domain::{store_by_id, SortKey};
use crate::shared::Result;

const CONFIG_FILENAME: &str = "price-lens.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Default output format ("json" or "table")
    pub format: Option<String>,
    /// Default store filter (catalog id or "all")
    pub store: Option<String>,
    /// Default sort key
    pub sort: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref format) = config.format {
        if OutputFormat::from_str(format).is_err() {
            bail!(
                "Invalid config: format must be 'json' or 'table', got {:?}.\n\n\
                 💡 Hint: Remove the 'format' entry to fall back to the default.",
                format
            );
        }
    }

    if let Some(ref store) = config.store {
        if store != "all" && store_by_id(store).is_none() {
            bail!(
                "Invalid config: store {:?} is not in the catalog.\n\n\
                 💡 Hint: Use 'all' or one of the known store ids (e.g. \"amazon\", \"kabum\").",
                store
            );
        }
    }

    if let Some(ref sort) = config.sort {
        if SortKey::from_str(sort).is_err() {
            bail!(
                "Invalid config: sort {:?} is not a known key.\n\n\
                 💡 Hint: Use one of 'price_asc', 'price_desc', 'rating', 'store', 'shipping'.",
                sort
            );
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for field in config.unknown_fields.keys() {
        eprintln!("⚠️  Warning: unknown config field '{}' ignored", field);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "format: table\nstore: kabum\nsort: rating\n");

        let config = load_config_from_path(&path).unwrap();
        assert_eq!(config.format.as_deref(), Some("table"));
        assert_eq!(config.store.as_deref(), Some("kabum"));
        assert_eq!(config.sort.as_deref(), Some("rating"));
        assert!(config.unknown_fields.is_empty());
    }

    #[test]
    fn test_discover_missing_config_is_none() {
        let dir = TempDir::new().unwrap();
        assert!(discover_config(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_discover_finds_config() {
        let dir = TempDir::new().unwrap();
        write_config(&dir, "format: json\n");
        let config = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.format.as_deref(), Some("json"));
    }

    #[test]
    fn test_invalid_format_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "format: markdown\n");
        let error = load_config_from_path(&path).unwrap_err();
        assert!(format!("{}", error).contains("format must be 'json' or 'table'"));
    }

    #[test]
    fn test_unknown_store_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "store: ebay\n");
        let error = load_config_from_path(&path).unwrap_err();
        assert!(format!("{}", error).contains("not in the catalog"));
    }

    #[test]
    fn test_unknown_sort_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "sort: newest\n");
        let error = load_config_from_path(&path).unwrap_err();
        assert!(format!("{}", error).contains("not a known key"));
    }

    #[test]
    fn test_unknown_fields_are_collected_not_fatal() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "format: json\ncurrency: BRL\n");
        let config = load_config_from_path(&path).unwrap();
        assert!(config.unknown_fields.contains_key("currency"));
    }

    #[test]
    fn test_malformed_yaml_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "format: [unclosed\n");
        assert!(load_config_from_path(&path).is_err());
    }
}
