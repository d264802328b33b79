//! Integration tests for TOML configuration loading.
//!
//! Uses `figment::Jail` for sandboxed working directories and env vars.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use gd_config::{ConfigError, GoodDatesConfig};
use pretty_assertions::assert_eq;

#[test]
fn loads_export_section_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[export]
directory = "/tmp/calendars"
filename = "launch.ics"
"#,
        )?;

        let config: GoodDatesConfig =
            Figment::from(Serialized::defaults(GoodDatesConfig::default()))
                .merge(Toml::file("config.toml"))
                .extract()?;

        assert_eq!(config.export.directory, "/tmp/calendars");
        assert_eq!(config.export.filename, "launch.ics");
        assert_eq!(config.calendar.cluster_max_gap_days, 3);
        Ok(())
    });
}

#[test]
fn partial_section_keeps_field_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r"
[calendar]
cluster_max_gap_days = 5
",
        )?;

        let config: GoodDatesConfig =
            Figment::from(Serialized::defaults(GoodDatesConfig::default()))
                .merge(Toml::file("config.toml"))
                .extract()?;

        assert_eq!(config.calendar.cluster_max_gap_days, 5);
        assert_eq!(config.calendar.default_color, "#4f46e5");
        assert_eq!(config.export.filename, "good-date.ics");
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".gooddates")?;
        jail.create_file(
            ".gooddates/config.toml",
            r##"
[calendar]
default_color = "#123abc"
"##,
        )?;

        let config = GoodDatesConfig::load().map_err(|e| e.to_string())?;
        assert_eq!(config.calendar.default_color, "#123abc");
        Ok(())
    });
}

#[test]
fn env_beats_project_local_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".gooddates")?;
        jail.create_file(
            ".gooddates/config.toml",
            r#"
[export]
directory = "from-toml"
"#,
        )?;
        jail.set_env("GOODDATES_EXPORT__DIRECTORY", "from-env");

        let config = GoodDatesConfig::load().map_err(|e| e.to_string())?;
        assert_eq!(config.export.directory, "from-env");
        Ok(())
    });
}

#[test]
fn invalid_filename_in_toml_is_rejected() {
    Jail::expect_with(|jail| {
        jail.create_dir(".gooddates")?;
        jail.create_file(
            ".gooddates/config.toml",
            r#"
[export]
filename = "good-date.txt"
"#,
        )?;

        let err = GoodDatesConfig::load().unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "export.filename"),
            "unexpected error: {err}"
        );
        Ok(())
    });
}

#[test]
fn wrong_type_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_dir(".gooddates")?;
        jail.create_file(
            ".gooddates/config.toml",
            r#"
[calendar]
cluster_max_gap_days = "three"
"#,
        )?;

        let err = GoodDatesConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::Figment(_)));
        Ok(())
    });
}
