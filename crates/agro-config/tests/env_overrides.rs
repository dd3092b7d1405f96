use agro_config::{AgroConfig, api_key_overrides};
use agro_core::enums::Language;
use figment::Jail;
use pretty_assertions::assert_eq;

#[test]
fn agro_env_vars_map_to_nested_keys() {
    Jail::expect_with(|jail| {
        jail.set_env("AGRO_GEMINI__MODEL", "gemini-1.5-pro");
        jail.set_env("AGRO_GENERAL__LANGUAGE", "es");
        jail.set_env("AGRO_EXTRACTION__ENFORCE_DATE_ORDER", "true");

        let config = AgroConfig::load_with_overrides(&[]).expect("config loads");
        assert_eq!(config.gemini.model, "gemini-1.5-pro");
        assert_eq!(config.general.language, Language::Es);
        assert!(config.extraction.enforce_date_order);
        Ok(())
    });
}

#[test]
fn external_overrides_fill_config_values() {
    Jail::expect_with(|_jail| {
        let overrides = vec![("gemini.api_key".to_string(), "from-external".to_string())];

        let config = AgroConfig::load_with_overrides(&overrides).expect("config loads");
        assert_eq!(config.gemini.api_key, "from-external");
        Ok(())
    });
}

#[test]
fn process_env_beats_external_overrides() {
    Jail::expect_with(|jail| {
        jail.set_env("AGRO_GEMINI__API_KEY", "from-env");
        let overrides = vec![("gemini.api_key".to_string(), "from-external".to_string())];

        let config = AgroConfig::load_with_overrides(&overrides).expect("config loads");
        assert_eq!(config.gemini.api_key, "from-env");
        Ok(())
    });
}

#[test]
fn external_overrides_beat_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".agro")?;
        jail.create_file(
            ".agro/config.toml",
            r#"
[gemini]
api_key = "from-toml"
"#,
        )?;
        let overrides = vec![("gemini.api_key".to_string(), "from-external".to_string())];

        let config = AgroConfig::load_with_overrides(&overrides).expect("config loads");
        assert_eq!(config.gemini.api_key, "from-external");
        Ok(())
    });
}

#[test]
fn gemini_key_var_wins_over_google_key_var() {
    Jail::expect_with(|jail| {
        jail.set_env("GOOGLE_API_KEY", "google");
        assert_eq!(
            api_key_overrides(),
            vec![("gemini.api_key".to_string(), "google".to_string())]
        );

        jail.set_env("GEMINI_API_KEY", "gemini");
        let config = AgroConfig::load().expect("config loads");
        assert_eq!(config.gemini.api_key, "gemini");
        Ok(())
    });
}
