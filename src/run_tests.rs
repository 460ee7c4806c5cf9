//! Tests for the run module.

use std::io::Write;

use super::*;
use jwb_args::config::Cli;
use jwb_args::languages::{FetchError, HttpError, Language, LanguageSource};

struct FixedLanguages;

impl LanguageSource for FixedLanguages {
    fn fetch(&self) -> Result<Vec<Language>, FetchError> {
        Ok(vec![Language::new("E", "English"), Language::new("S", "Spanish")])
    }
}

struct OfflineLanguages;

impl LanguageSource for OfflineLanguages {
    fn fetch(&self) -> Result<Vec<Language>, FetchError> {
        Err(FetchError::Http(HttpError::Connection("offline".into())))
    }
}

fn run(args: &[&str], languages: &dyn LanguageSource) -> (Result<Terminate, RunError>, String) {
    let cli = Cli::parse_from_iter(std::iter::once("jwb-args").chain(args.iter().copied()));
    let mut out = Vec::new();
    let result = execute(&cli, languages, &mut out);
    (result, String::from_utf8(out).unwrap())
}

fn json(output: &str) -> serde_json::Value {
    serde_json::from_str(output).unwrap()
}

mod complete {
    use super::*;

    #[test]
    fn index_defaults_are_printed_as_json() {
        let (result, output) = run(&["index"], &FixedLanguages);

        assert_eq!(result.unwrap(), Terminate::SUCCESS);
        let settings = json(&output);
        assert_eq!(settings["lang"], "E");
        assert_eq!(settings["quality"], 1080);
        assert_eq!(settings["work_dir"], ".");
        assert_eq!(settings["mode"], serde_json::Value::Null);
    }

    #[test]
    fn index_arguments_reach_the_settings() {
        let (result, output) = run(
            &["index", "--mode", "m3u", "--lang", "S", "--free", "2", "out"],
            &FixedLanguages,
        );

        assert!(result.is_ok());
        let settings = json(&output);
        assert_eq!(settings["mode"], "m3u");
        assert_eq!(settings["lang"], "S");
        assert_eq!(settings["keep_free"], 2 * 1024 * 1024);
        assert_eq!(settings["work_dir"], "out");
    }

    #[test]
    fn stream_command_keeps_remainder() {
        let (result, output) = run(&["stream", "--forever", "mpv", "--fs"], &FixedLanguages);

        assert!(result.is_ok());
        let settings = json(&output);
        assert_eq!(settings["stream_forever"], true);
        assert_eq!(settings["command"], serde_json::json!(["mpv", "--fs"]));
    }
}

mod terminal {
    use super::*;

    #[test]
    fn help_prints_listing_for_the_command() {
        let (result, output) = run(&["stream", "--help"], &FixedLanguages);

        assert_eq!(result.unwrap(), Terminate::SUCCESS);
        assert!(output.starts_with("usage: jwb-stream"));
        assert!(output.contains("--forever"));
        assert!(!output.contains("--ntfs"));
    }

    #[test]
    fn languages_lists_codes_without_settings() {
        let (result, output) = run(&["index", "--languages"], &FixedLanguages);

        assert_eq!(result.unwrap(), Terminate::SUCCESS);
        assert!(output.contains("  E  English"));
        assert!(!output.contains("\"lang\""));
    }
}

mod errors {
    use super::*;

    #[test]
    fn unknown_flag_is_usage_error() {
        let (result, output) = run(&["index", "--bogus"], &FixedLanguages);

        let err = result.unwrap_err();
        assert!(err.is_usage());
        assert!(!err.is_network());
        assert!(matches!(err, RunError::Parse { ref usage, .. } if usage.starts_with("usage: jwb-index")));
        assert!(output.is_empty());
    }

    #[test]
    fn flag_of_other_command_is_rejected() {
        let (result, _) = run(&["stream", "--ntfs"], &FixedLanguages);

        assert!(result.unwrap_err().is_usage());
    }

    #[test]
    fn unreachable_language_list_is_network_error() {
        let (result, _) = run(&["index", "--lang", "S"], &OfflineLanguages);

        let err = result.unwrap_err();
        assert!(err.is_network());
        assert!(!err.is_usage());
    }

    #[test]
    fn default_language_needs_no_network() {
        let (result, _) = run(&["index", "--lang", "E"], &OfflineLanguages);

        assert!(result.is_ok());
    }

    #[test]
    fn run_error_displays_parse_message() {
        let (result, _) = run(&["index", "--quality", "high"], &FixedLanguages);

        let message = result.unwrap_err().to_string();
        assert!(message.starts_with("argument --quality/-Q:"), "{message}");
    }
}

mod config_file {
    use super::*;

    fn config_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();
        file
    }

    #[test]
    fn file_values_are_applied() {
        let file = config_file("quality = 480\nsub_dir = \"videos\"");
        let path = file.path().to_str().unwrap();

        let (result, output) = run(&["--config", path, "index"], &FixedLanguages);

        assert!(result.is_ok());
        let settings = json(&output);
        assert_eq!(settings["quality"], 480);
        assert_eq!(settings["sub_dir"], "videos");
    }

    #[test]
    fn arguments_override_file_values() {
        let file = config_file("quality = 480");
        let path = file.path().to_str().unwrap();

        let (result, output) = run(&["--config", path, "index", "--quality", "720"], &FixedLanguages);

        assert!(result.is_ok());
        assert_eq!(json(&output)["quality"], 720);
    }

    #[test]
    fn unknown_key_is_config_error() {
        let file = config_file("volume = 11");
        let path = file.path().to_str().unwrap();

        let (result, _) = run(&["--config", path, "index"], &FixedLanguages);

        let err = result.unwrap_err();
        assert!(matches!(err, RunError::Config(_)));
        assert!(!err.is_usage());
    }
}
