//! Tests for the TOML settings file.

use std::io::Write;
use std::path::PathBuf;

use super::toml::SettingsFile;
use super::{ConfigError, load_settings};
use crate::settings::{Mode, Settings, SettingsError};

mod parsing {
    use super::*;

    #[test]
    fn parse_empty_file() {
        let file = SettingsFile::parse("").unwrap();

        assert!(file.is_empty());
    }

    #[test]
    fn parse_flat_keys() {
        let file = SettingsFile::parse(
            r#"
            lang = "S"
            quality = 720
            "#,
        )
        .unwrap();

        assert_eq!(file.len(), 2);
    }

    #[test]
    fn reject_invalid_toml() {
        let result = SettingsFile::parse("lang = ");

        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }
}

mod applying {
    use super::*;

    fn applied(content: &str) -> Result<Settings, ConfigError> {
        let mut settings = Settings::default();
        SettingsFile::parse(content)?.apply(&mut settings)?;
        Ok(settings)
    }

    #[test]
    fn apply_scalar_values() {
        let settings = applied(
            r#"
            lang = "S"
            quality = 720
            checksums = false
            mode = "m3u"
            "#,
        )
        .unwrap();

        assert_eq!(settings.lang, "S");
        assert_eq!(settings.quality, 720);
        assert!(!settings.checksums);
        assert_eq!(settings.mode, Some(Mode::M3u));
    }

    #[test]
    fn apply_string_arrays() {
        let settings = applied(r#"exclude_categories = ["VODMusicVideos", "VODSJJMeetings"]"#).unwrap();

        assert_eq!(
            settings.exclude_categories,
            vec!["VODMusicVideos".to_string(), "VODSJJMeetings".to_string()]
        );
    }

    #[test]
    fn untouched_fields_keep_defaults() {
        let settings = applied(r#"lang = "X""#).unwrap();

        assert_eq!(
            Settings {
                lang: "X".to_string(),
                ..Settings::default()
            },
            settings
        );
    }

    #[test]
    fn reject_unknown_key() {
        let err = applied("colour = true").unwrap_err();

        assert!(matches!(
            err,
            ConfigError::Setting {
                ref key,
                source: SettingsError::UnknownField { .. },
            } if key == "colour"
        ));
    }

    #[test]
    fn reject_type_mismatch() {
        let err = applied(r#"quality = "high""#).unwrap_err();

        assert!(matches!(
            err,
            ConfigError::Setting {
                source: SettingsError::TypeMismatch { .. },
                ..
            }
        ));
    }

    #[test]
    fn reject_nested_table() {
        let err = applied("[download]\nrate = 1").unwrap_err();

        assert!(matches!(
            err,
            ConfigError::UnsupportedValue { ref key, found: "table" } if key == "download"
        ));
    }

    #[test]
    fn reject_mixed_array() {
        let err = applied(r#"include_categories = ["a", 1]"#).unwrap_err();

        assert!(matches!(err, ConfigError::UnsupportedValue { .. }));
    }

    #[test]
    fn reject_float() {
        let err = applied("quality = 7.5").unwrap_err();

        assert!(matches!(
            err,
            ConfigError::UnsupportedValue { found: "float", .. }
        ));
    }
}

mod loading {
    use super::*;

    #[test]
    fn no_path_gives_defaults() {
        let settings = load_settings(None).unwrap();

        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "lang = \"S\"\nquiet = 2").unwrap();

        let settings = load_settings(Some(file.path())).unwrap();

        assert_eq!(settings.lang, "S");
        assert_eq!(settings.quiet, 2);
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path: PathBuf = dir.path().join("absent.toml");

        let err = load_settings(Some(&path)).unwrap_err();

        assert!(matches!(err, ConfigError::FileRead { path: ref p, .. } if *p == path));
    }
}
