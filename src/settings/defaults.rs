//! Default values for settings fields.
//!
//! Centralized constants to avoid magic values scattered across the codebase.

/// Default working directory.
pub const WORK_DIR: &str = ".";

/// Default language code (English).
pub const LANG: &str = "E";

/// Default maximum video quality.
pub const QUALITY: u32 = 1080;

/// Default category indexed when none is given.
pub const INCLUDE_CATEGORY: &str = "VideoOnDemand";

/// Category set by `--latest`.
pub const LATEST_CATEGORY: &str = "LatestVideos";

/// Default path to the curl binary.
pub const CURL_PATH: &str = "curl";

/// Default download rate limit passed to curl.
pub const RATE_LIMIT: &str = "1M";

/// Bytes in one mebibyte, the unit of `--free`.
pub const MIB: i64 = 1024 * 1024;

/// Default category list as owned strings.
#[must_use]
pub fn include_categories() -> Vec<String> {
    vec![INCLUDE_CATEGORY.to_string()]
}
