//! Taxonomy selection.

use std::path::Path;

use gamri_core::taxonomy::{Taxonomy, TaxonomyPreset};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TaxonomyConfig {
    /// Built-in taxonomy used when `path` is empty.
    #[serde(default)]
    pub preset: TaxonomyPreset,

    /// TOML taxonomy file; overrides `preset` when set.
    #[serde(default)]
    pub path: String,
}

impl TaxonomyConfig {
    /// Whether a taxonomy file is configured.
    pub fn has_file(&self) -> bool {
        !self.path.is_empty()
    }

    /// Build the active taxonomy. Relative file paths resolve against `root`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the file cannot be read or is
    /// not a valid taxonomy.
    pub fn resolve(&self, root: &Path) -> Result<Taxonomy, ConfigError> {
        if !self.has_file() {
            return Ok(Taxonomy::preset(self.preset));
        }

        let path = root.join(&self.path);
        let text = std::fs::read_to_string(&path).map_err(|e| ConfigError::InvalidValue {
            field: "taxonomy.path".into(),
            reason: format!("cannot read {}: {e}", path.display()),
        })?;
        Taxonomy::from_toml_str(&text).map_err(|e| ConfigError::InvalidValue {
            field: "taxonomy.path".into(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_is_used_without_file() {
        let config = TaxonomyConfig {
            preset: TaxonomyPreset::Coarse,
            path: String::new(),
        };
        let taxonomy = config.resolve(Path::new(".")).unwrap();
        assert_eq!(taxonomy, Taxonomy::coarse());
    }

    #[test]
    fn file_overrides_preset() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("taxonomy.toml"),
            Taxonomy::coarse().to_toml_string().unwrap(),
        )
        .unwrap();
        let config = TaxonomyConfig {
            preset: TaxonomyPreset::Fine,
            path: "taxonomy.toml".into(),
        };
        assert_eq!(config.resolve(dir.path()).unwrap(), Taxonomy::coarse());
    }

    #[test]
    fn missing_file_is_invalid_value() {
        let config = TaxonomyConfig {
            path: "nope.toml".into(),
            ..Default::default()
        };
        let err = config.resolve(Path::new("/nonexistent")).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }
}
