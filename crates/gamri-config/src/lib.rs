//! # gamri-config
//!
//! Layered configuration loading for gamri using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`GAMRI_*` prefix, `__` as separator)
//! 2. Project-level `.gamri/config.toml`
//! 3. User-level `~/.config/gamri/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `GAMRI_GENERATOR__API_KEY` -> `generator.api_key`,
//! `GAMRI_STORE__YEAR_ORDER` -> `store.year_order`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use gamri_config::GamriConfig;
//!
//! let config = GamriConfig::load_with_dotenv(std::path::Path::new(".")).expect("config");
//!
//! if config.generator.is_configured() {
//!     println!("model: {}", config.generator.model);
//! }
//! ```

mod error;
mod general;
mod generator;
mod store;
mod taxonomy;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use generator::GeneratorConfig;
pub use store::StoreConfig;
pub use taxonomy::TaxonomyConfig;

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use gamri_core::columns::ColumnMap;
use serde::{Deserialize, Serialize};

/// Directory holding project-local gamri state.
pub const PROJECT_DIR: &str = ".gamri";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GamriConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub columns: ColumnMap,
    #[serde(default)]
    pub taxonomy: TaxonomyConfig,
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl GamriConfig {
    /// Load configuration for a project root from TOML files and environment.
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or the store table
    /// name is not a plain identifier.
    pub fn load(project_root: &Path) -> Result<Self, ConfigError> {
        let config: Self = Self::figment(project_root).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading `<project_root>/.env` (or the
    /// nearest `.env` from the current directory).
    ///
    /// Process environment variables always win over `.env` values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] as [`Self::load`] does.
    pub fn load_with_dotenv(project_root: &Path) -> Result<Self, ConfigError> {
        let env_path = project_root.join(".env");
        if env_path.exists() {
            let _ = dotenvy::from_path(&env_path);
        } else {
            let _ = dotenvy::dotenv();
        }
        Self::load(project_root)
    }

    /// Build the figment provider chain for a project root.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment(project_root: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = Self::project_config_path(project_root);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("GAMRI_").split("__"))
    }

    /// Path to the project-local config file.
    #[must_use]
    pub fn project_config_path(project_root: &Path) -> PathBuf {
        project_root.join(PROJECT_DIR).join("config.toml")
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("gamri").join("config.toml"))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.store.table_is_valid() {
            return Err(ConfigError::InvalidValue {
                field: "store.table".into(),
                reason: format!("'{}' is not a plain table identifier", self.store.table),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use gamri_core::taxonomy::TaxonomyPreset;
    use gamri_core::year::YearOrder;

    use super::*;

    #[test]
    fn default_config_loads() {
        let config = GamriConfig::default();
        assert!(!config.generator.is_configured());
        assert_eq!(config.store.year_order, YearOrder::Descending);
        assert_eq!(config.taxonomy.preset, TaxonomyPreset::Fine);
        assert!(!config.taxonomy.has_file());
    }

    #[test]
    fn figment_builds_without_files() {
        let dir = tempfile::tempdir().unwrap();
        let config: GamriConfig = GamriConfig::figment(dir.path())
            .extract()
            .expect("should extract defaults");
        assert_eq!(config.store.table, "cases");
        assert_eq!(config.general.default_limit, 20);
        assert_eq!(config.columns, ColumnMap::default());
    }
}
