//! The closed-world settings container.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::Serialize;

use super::defaults;
use super::error::SettingsError;
use super::value::{Download, Mode, UnknownKeyword, Value};

/// Settings produced by parsing one invocation.
///
/// The field set is fixed at compile time. Name-based writes go through
/// [`Settings::set`], which rejects any name outside [`Settings::FIELDS`],
/// so a typo'd or stale key fails immediately instead of creating a new
/// attribute.
///
/// Fields are public for reading by downstream consumers. Once parsing has
/// finished the value should be treated as immutable configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[allow(clippy::struct_excessive_bools)] // settings toggles are naturally boolean
pub struct Settings {
    /// Directory to save data in
    pub work_dir: PathBuf,
    /// Verbosity reduction, one per `--quiet`
    pub quiet: u32,
    /// Whether the language list was requested
    pub list_languages: bool,

    /// Language code
    pub lang: String,
    /// Maximum video quality
    pub quality: u32,
    /// Prefer videos with hard-coded subtitles
    pub hard_subtitles: bool,
    /// Only index media newer than this epoch timestamp
    pub min_date: Option<i64>,
    /// Categories to index
    pub include_categories: Vec<String>,
    /// Categories to exclude from download
    pub exclude_categories: Vec<String>,

    /// Disk space to keep free, in bytes
    pub keep_free: u64,
    /// Warn when the space limit seems wrong
    pub warning: bool,

    /// What to download, if anything
    pub download: Option<Download>,
    /// Download subtitles
    pub download_subtitles: bool,
    /// Give subtitles human-readable file names
    pub friendly_subtitle_filenames: bool,
    /// Path to curl; `None` means use the built-in HTTP client
    pub curl_path: Option<String>,
    /// Maximum download rate, passed to curl
    pub rate_limit: String,
    /// Check md5 checksums of downloads
    pub checksums: bool,

    /// Video player command and its arguments
    pub command: Option<Vec<String>>,
    /// Re-run when the last video finishes
    pub stream_forever: bool,

    /// Sub directory for output files
    pub sub_dir: String,
    /// Output mode
    pub mode: Option<Mode>,
    /// NTFS/FAT friendly file names
    pub safe_filenames: bool,
    /// Prepend the category key to names (filesystem mode)
    pub include_keyname: bool,
    /// Remove all old symlinks (filesystem mode)
    pub clean_all_symlinks: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            work_dir: PathBuf::from(defaults::WORK_DIR),
            quiet: 0,
            list_languages: false,
            lang: defaults::LANG.to_string(),
            quality: defaults::QUALITY,
            hard_subtitles: false,
            min_date: None,
            include_categories: defaults::include_categories(),
            exclude_categories: Vec::new(),
            keep_free: 0,
            warning: true,
            download: None,
            download_subtitles: false,
            friendly_subtitle_filenames: false,
            curl_path: Some(defaults::CURL_PATH.to_string()),
            rate_limit: defaults::RATE_LIMIT.to_string(),
            checksums: true,
            command: None,
            stream_forever: false,
            sub_dir: String::new(),
            mode: None,
            safe_filenames: false,
            include_keyname: false,
            clean_all_symlinks: false,
        }
    }
}

impl Settings {
    /// Every declared field name, in declaration order.
    pub const FIELDS: &'static [&'static str] = &[
        "work_dir",
        "quiet",
        "list_languages",
        "lang",
        "quality",
        "hard_subtitles",
        "min_date",
        "include_categories",
        "exclude_categories",
        "keep_free",
        "warning",
        "download",
        "download_subtitles",
        "friendly_subtitle_filenames",
        "curl_path",
        "rate_limit",
        "checksums",
        "command",
        "stream_forever",
        "sub_dir",
        "mode",
        "safe_filenames",
        "include_keyname",
        "clean_all_symlinks",
    ];

    /// Returns true if `name` is a declared field.
    #[must_use]
    pub fn has_field(name: &str) -> bool {
        Self::FIELDS.contains(&name)
    }

    fn resolve(name: &str) -> Result<&'static str, SettingsError> {
        Self::FIELDS
            .iter()
            .copied()
            .find(|f| *f == name)
            .ok_or_else(|| SettingsError::unknown(name))
    }

    /// Writes `value` into the field called `field`.
    ///
    /// Repeated writes overwrite; the last write wins.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::UnknownField`] if `field` is not declared,
    /// and a type or range error if the value does not fit the field.
    pub fn set(&mut self, field: &str, value: Value) -> Result<(), SettingsError> {
        let field = Self::resolve(field)?;
        match field {
            "work_dir" => self.work_dir = PathBuf::from(text(field, value)?),
            "quiet" => self.quiet = number(field, value)?,
            "list_languages" => self.list_languages = boolean(field, value)?,
            "lang" => self.lang = text(field, value)?,
            "quality" => self.quality = number(field, value)?,
            "hard_subtitles" => self.hard_subtitles = boolean(field, value)?,
            "min_date" => self.min_date = optional(field, value, number)?,
            "include_categories" => self.include_categories = list(field, value)?,
            "exclude_categories" => self.exclude_categories = list(field, value)?,
            "keep_free" => self.keep_free = number(field, value)?,
            "warning" => self.warning = boolean(field, value)?,
            "download" => self.download = optional(field, value, keyword)?,
            "download_subtitles" => self.download_subtitles = boolean(field, value)?,
            "friendly_subtitle_filenames" => {
                self.friendly_subtitle_filenames = boolean(field, value)?;
            }
            "curl_path" => self.curl_path = optional(field, value, text)?,
            "rate_limit" => self.rate_limit = text(field, value)?,
            "checksums" => self.checksums = boolean(field, value)?,
            "command" => self.command = optional(field, value, list)?,
            "stream_forever" => self.stream_forever = boolean(field, value)?,
            "sub_dir" => self.sub_dir = text(field, value)?,
            "mode" => self.mode = optional(field, value, keyword)?,
            "safe_filenames" => self.safe_filenames = boolean(field, value)?,
            "include_keyname" => self.include_keyname = boolean(field, value)?,
            "clean_all_symlinks" => self.clean_all_symlinks = boolean(field, value)?,
            _ => return Err(SettingsError::unknown(field)),
        }
        Ok(())
    }

    /// Reads the current value of the field called `field`.
    ///
    /// Absent optional values are returned as [`Value::Unset`].
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::UnknownField`] if `field` is not declared.
    pub fn get(&self, field: &str) -> Result<Value, SettingsError> {
        let value = match Self::resolve(field)? {
            "work_dir" => Value::Text(self.work_dir.to_string_lossy().into_owned()),
            "quiet" => Value::Int(i64::from(self.quiet)),
            "list_languages" => Value::Bool(self.list_languages),
            "lang" => Value::from(self.lang.as_str()),
            "quality" => Value::Int(i64::from(self.quality)),
            "hard_subtitles" => Value::Bool(self.hard_subtitles),
            "min_date" => Value::from(self.min_date),
            "include_categories" => Value::List(self.include_categories.clone()),
            "exclude_categories" => Value::List(self.exclude_categories.clone()),
            "keep_free" => i64::try_from(self.keep_free).map_or(Value::Int(i64::MAX), Value::Int),
            "warning" => Value::Bool(self.warning),
            "download" => Value::from(self.download),
            "download_subtitles" => Value::Bool(self.download_subtitles),
            "friendly_subtitle_filenames" => Value::Bool(self.friendly_subtitle_filenames),
            "curl_path" => Value::from(self.curl_path.clone()),
            "rate_limit" => Value::from(self.rate_limit.as_str()),
            "checksums" => Value::Bool(self.checksums),
            "command" => self.command.clone().map_or(Value::Unset, Value::List),
            "stream_forever" => Value::Bool(self.stream_forever),
            "sub_dir" => Value::from(self.sub_dir.as_str()),
            "mode" => Value::from(self.mode),
            "safe_filenames" => Value::Bool(self.safe_filenames),
            "include_keyname" => Value::Bool(self.include_keyname),
            "clean_all_symlinks" => Value::Bool(self.clean_all_symlinks),
            other => return Err(SettingsError::unknown(other)),
        };
        Ok(value)
    }
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = self.mode.map_or("none", Mode::as_str);
        let download = self.download.map_or("none", Download::as_str);

        write!(
            f,
            "Settings {{ work_dir: {}, mode: {}, lang: {}, quality: {}, categories: [{}], \
             exclude: [{}], download: {}, keep_free: {}B, quiet: {} }}",
            self.work_dir.display(),
            mode,
            self.lang,
            self.quality,
            self.include_categories.join(","),
            self.exclude_categories.join(","),
            download,
            self.keep_free,
            self.quiet,
        )
    }
}

const fn mismatch(field: &'static str, expected: &'static str, found: &Value) -> SettingsError {
    SettingsError::TypeMismatch {
        field,
        expected,
        found: found.kind(),
    }
}

fn boolean(field: &'static str, value: Value) -> Result<bool, SettingsError> {
    match value {
        Value::Bool(b) => Ok(b),
        other => Err(mismatch(field, "bool", &other)),
    }
}

fn number<T: TryFrom<i64>>(field: &'static str, value: Value) -> Result<T, SettingsError> {
    match value {
        Value::Int(n) => T::try_from(n).map_err(|_| SettingsError::OutOfRange { field, value: n }),
        other => Err(mismatch(field, "integer", &other)),
    }
}

fn text(field: &'static str, value: Value) -> Result<String, SettingsError> {
    match value {
        Value::Text(s) => Ok(s),
        other => Err(mismatch(field, "text", &other)),
    }
}

fn list(field: &'static str, value: Value) -> Result<Vec<String>, SettingsError> {
    match value {
        Value::List(items) => Ok(items),
        other => Err(mismatch(field, "list", &other)),
    }
}

fn keyword<T>(field: &'static str, value: Value) -> Result<T, SettingsError>
where
    T: FromStr<Err = UnknownKeyword>,
{
    text(field, value)?
        .parse()
        .map_err(|source| SettingsError::Keyword { field, source })
}

/// Maps `Unset` to `None` and everything else through `inner`.
fn optional<T>(
    field: &'static str,
    value: Value,
    inner: fn(&'static str, Value) -> Result<T, SettingsError>,
) -> Result<Option<T>, SettingsError> {
    if value.is_unset() {
        Ok(None)
    } else {
        inner(field, value).map(Some)
    }
}
