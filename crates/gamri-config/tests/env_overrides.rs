use figment::Jail;
use gamri_config::GamriConfig;
use gamri_core::year::YearOrder;

#[test]
fn env_vars_fill_nested_sections() {
    Jail::expect_with(|jail| {
        jail.set_env("GAMRI_GENERATOR__API_KEY", "key_from_env");
        jail.set_env("GAMRI_STORE__YEAR_ORDER", "ascending");

        let config = GamriConfig::load(jail.directory()).expect("config loads");
        assert_eq!(config.generator.api_key, "key_from_env");
        assert!(config.generator.is_configured());
        assert_eq!(config.store.year_order, YearOrder::Ascending);
        Ok(())
    });
}

#[test]
fn env_beats_project_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".gamri")?;
        jail.create_file(
            ".gamri/config.toml",
            r#"
[generator]
model = "from-toml"
"#,
        )?;
        jail.set_env("GAMRI_GENERATOR__MODEL", "from-env");

        let config = GamriConfig::load(jail.directory()).expect("config loads");
        assert_eq!(config.generator.model, "from-env");
        Ok(())
    });
}

#[test]
fn dotenv_file_is_read_for_project() {
    Jail::expect_with(|jail| {
        // dotenvy leaves the variable set, so use a key no other test reads.
        jail.create_file(".env", "GAMRI_GENERATOR__TIMEOUT_SECS=7\n")?;

        let config = GamriConfig::load_with_dotenv(jail.directory()).expect("config loads");
        assert_eq!(config.generator.timeout_secs, 7);
        Ok(())
    });
}
