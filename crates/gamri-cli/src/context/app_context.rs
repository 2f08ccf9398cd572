use std::path::PathBuf;

use anyhow::{Context, bail};
use gamri_config::GamriConfig;
use gamri_core::errors::CoreError;
use gamri_core::loader::LoadOptions;
use gamri_core::record::CaseRecord;
use gamri_core::taxonomy::Taxonomy;
use gamri_db::ActivityLog;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: GamriConfig,
    pub project_root: PathBuf,
    pub taxonomy: Taxonomy,
    pub activity: ActivityLog,
}

impl AppContext {
    /// Resolve the taxonomy and open the activity log.
    ///
    /// An activity log that cannot be opened is replaced by a disabled one;
    /// commands never fail because of logging.
    pub async fn init(project_root: PathBuf, config: GamriConfig) -> anyhow::Result<Self> {
        let taxonomy = config
            .taxonomy
            .resolve(&project_root)
            .context("failed to resolve taxonomy")?;

        let activity_path = config.store.activity_path_in(&project_root);
        let activity = match ActivityLog::open_local(&activity_path.to_string_lossy()).await {
            Ok(log) => log,
            Err(error) => {
                tracing::warn!(
                    %error,
                    path = %activity_path.display(),
                    "activity log unavailable; continuing without it"
                );
                ActivityLog::disabled()
            }
        };

        tracing::debug!(
            root = %project_root.display(),
            taxonomy = %taxonomy.version,
            "application context ready"
        );

        Ok(Self {
            config,
            project_root,
            taxonomy,
            activity,
        })
    }

    /// Load, clean, order and label every case. Empty when the store is absent.
    pub async fn load_cases(&self) -> anyhow::Result<Vec<CaseRecord>> {
        let path = self.config.store.cases_path_in(&self.project_root);
        let options = LoadOptions {
            columns: self.config.columns.clone(),
            year_order: self.config.store.year_order,
        };
        gamri_db::load_cases(&path, &self.config.store.table, &self.taxonomy, &options)
            .await
            .with_context(|| format!("failed to read cases from {}", path.display()))
    }

    /// Like [`Self::load_cases`], but an empty case set is an error.
    pub async fn require_cases(&self) -> anyhow::Result<Vec<CaseRecord>> {
        let cases = self.load_cases().await?;
        if cases.is_empty() {
            bail!(
                "no case data: {} has no usable rows in table '{}'",
                self.config.store.cases_path_in(&self.project_root).display(),
                self.config.store.table
            );
        }
        Ok(cases)
    }

    /// Reject labels that are not part of the active taxonomy.
    pub fn require_category(&self, label: &str) -> anyhow::Result<()> {
        if self.taxonomy.contains_label(label) {
            return Ok(());
        }
        let known = self.taxonomy.labels().collect::<Vec<_>>().join(", ");
        bail!(
            "{}; known categories: {known}",
            CoreError::UnknownCategory(label.to_string())
        )
    }
}
