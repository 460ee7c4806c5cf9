//! The predefined argument table.
//!
//! Pure data: each entry names its aliases, destination, arity, validation
//! and coercion. Invocations pick a subset by canonical name.

use crate::coerce::builtin;
use crate::settings::{Download, Mode, Value, defaults};

use super::{Arity, SchemaEntry, ValueKind};

/// Qualities accepted by `--quality`.
pub const QUALITIES: [i64; 4] = [240, 360, 480, 720];

/// Every predefined entry.
#[must_use]
pub fn entries() -> Vec<SchemaEntry> {
    let mut all = general();
    all.extend(index_filters());
    all.extend(transfer());
    all.extend(output());
    all.extend(positionals());
    all
}

fn general() -> Vec<SchemaEntry> {
    vec![
        SchemaEntry::new(&["--quiet", "-q"], Arity::Count)
            .with_help("less info, can be used multiple times"),
        SchemaEntry::new(&["--mode", "-m"], Arity::One)
            .with_choices(Mode::ALL.iter().copied())
            .with_help("output mode"),
        SchemaEntry::new(&["--lang", "-l"], Arity::OptionalOne)
            .with_constant(defaults::LANG)
            .with_value_action(builtin::verify_language)
            .with_help("language code"),
        SchemaEntry::new(&["--languages"], Arity::Flag)
            .with_terminal_action(builtin::print_languages)
            .with_help("display a list of valid language codes"),
    ]
}

fn index_filters() -> Vec<SchemaEntry> {
    vec![
        SchemaEntry::new(&["--quality", "-Q"], Arity::One)
            .with_kind(ValueKind::Integer)
            .with_choices(QUALITIES)
            .with_help("maximum video quality"),
        SchemaEntry::toggle(&["--hard-subtitles"], true)
            .with_help("prefer videos with hard-coded subtitles"),
        SchemaEntry::new(&["--category", "-c"], Arity::One)
            .with_dest("include_categories")
            .with_metavar("CODE")
            .with_value_action(builtin::split_list)
            .with_help("comma separated list of categories to index"),
        SchemaEntry::new(&["--exclude"], Arity::One)
            .with_dest("exclude_categories")
            .with_metavar("CODE")
            .with_value_action(builtin::split_list)
            .with_help("comma separated list of categories to exclude from download"),
        SchemaEntry::new(&["--latest"], Arity::Flag)
            .with_dest("include_categories")
            .with_constant(Value::list([defaults::LATEST_CATEGORY]))
            .with_help("index the \"Latest Videos\" section"),
        SchemaEntry::new(&["--since"], Arity::One)
            .with_dest("min_date")
            .with_metavar("YYYY-MM-DD")
            .with_value_action(builtin::date_to_timestamp)
            .with_help("only index media newer than this date"),
    ]
}

fn transfer() -> Vec<SchemaEntry> {
    vec![
        SchemaEntry::toggle(&["--no-checksum"], false)
            .with_dest("checksums")
            .with_help("don't check md5 checksum"),
        SchemaEntry::new(&["--free"], Arity::One)
            .with_dest("keep_free")
            .with_kind(ValueKind::Integer)
            .with_metavar("MiB")
            .with_value_action(builtin::mib_to_bytes)
            .with_help("disk space in MiB to keep free (deletes older MP4 files)"),
        SchemaEntry::toggle(&["--no-warning"], false)
            .with_dest("warning")
            .with_help("do not warn when space limit seems wrong"),
        SchemaEntry::new(&["--limit-rate"], Arity::One)
            .with_dest("rate_limit")
            .with_help("maximum download rate, passed to curl (0 = no limit)"),
        SchemaEntry::new(&["--curl-path"], Arity::One)
            .with_metavar("PATH")
            .with_help("path to the curl binary"),
        SchemaEntry::new(&["--no-curl"], Arity::Flag)
            .with_dest("curl_path")
            .with_help("use the built-in HTTP client instead of external curl"),
        SchemaEntry::new(&["--download", "-d"], Arity::OptionalOne)
            .with_constant(Download::Media)
            .with_choices(Download::ALL.iter().copied())
            .with_help("download media files or subtitles"),
        SchemaEntry::toggle(&["--forever"], true)
            .with_dest("stream_forever")
            .with_help("re-run program when the last video finishes"),
    ]
}

fn output() -> Vec<SchemaEntry> {
    vec![
        SchemaEntry::toggle(&["--clean-symlinks"], true)
            .with_dest("clean_all_symlinks")
            .with_help("remove all old symlinks (only valid with --mode=filesystem)"),
        SchemaEntry::toggle(&["--ntfs"], true)
            .with_dest("safe_filenames")
            .with_help("remove special characters from file names (NTFS/FAT compatibility)"),
    ]
}

fn positionals() -> Vec<SchemaEntry> {
    vec![
        SchemaEntry::new(&["work_dir"], Arity::OptionalOne)
            .with_metavar("DIR")
            .with_help("directory to save data in"),
        SchemaEntry::new(&["command"], Arity::Remainder)
            .with_metavar("COMMAND")
            .with_help("video player command"),
    ]
}
