use gamri_config::GamriConfig;

/// Config sections reachable through `GAMRI_<SECTION>__<KEY>`.
const SECTIONS: [&str; 5] = ["STORE", "COLUMNS", "TAXONOMY", "GENERATOR", "GENERAL"];

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &GamriConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &GamriConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env
        .into_iter()
        .map(|(key, _)| key)
        .filter(|key| key.starts_with("GAMRI_"))
        .collect::<Vec<_>>();

    let mut warnings = Vec::new();

    for key in &env_keys {
        let Some(section) = SECTIONS
            .iter()
            .find(|section| key.starts_with(&format!("GAMRI_{section}_")))
        else {
            continue;
        };
        if !key.starts_with(&format!("GAMRI_{section}__")) {
            warnings.push(format!(
                "{key} is ignored. Use double underscores to reach the [{}] section (example: GAMRI_{section}__{}).",
                section.to_ascii_lowercase(),
                &key[format!("GAMRI_{section}_").len()..]
            ));
        }
    }

    if !config.generator.is_configured() && has_env_prefix(&env_keys, "GAMRI_GENERATOR") {
        warnings.push(
            "Generator config has no API key while GAMRI_GENERATOR* env vars exist. Use double underscores (example: GAMRI_GENERATOR__API_KEY)."
                .to_string(),
        );
    }

    warnings
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}

#[cfg(test)]
mod tests {
    use gamri_config::{GamriConfig, GeneratorConfig};
    use pretty_assertions::assert_eq;

    use super::collect_unconfigured_warnings;

    fn env(keys: &[&str]) -> Vec<(String, String)> {
        keys.iter().map(|key| ((*key).to_string(), "x".to_string())).collect()
    }

    #[test]
    fn warns_for_single_underscore_keys() {
        let warnings = collect_unconfigured_warnings(
            &GamriConfig::default(),
            env(&["GAMRI_STORE_TABLE", "GAMRI_STORE__CASES_PATH", "GAMRI_LOG"]),
        );
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("GAMRI_STORE__TABLE"));
    }

    #[test]
    fn warns_when_generator_env_did_not_configure_key() {
        let warnings = collect_unconfigured_warnings(
            &GamriConfig::default(),
            env(&["GAMRI_GENERATOR_API_KEY"]),
        );
        assert_eq!(warnings.len(), 2);
    }

    #[test]
    fn does_not_warn_when_generator_is_configured() {
        let config = GamriConfig {
            generator: GeneratorConfig {
                api_key: "key".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        let warnings =
            collect_unconfigured_warnings(&config, env(&["GAMRI_GENERATOR__API_KEY"]));
        assert!(warnings.is_empty());
    }
}
