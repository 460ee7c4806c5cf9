//! Shared test fixtures.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::languages::{FetchError, HttpError, Language, LanguageSource};

/// In-memory language source that counts fetches.
#[derive(Debug)]
pub struct StaticLanguages {
    languages: Vec<Language>,
    calls: AtomicUsize,
}

impl StaticLanguages {
    pub fn new(entries: &[(&str, &str)]) -> Self {
        Self {
            languages: entries
                .iter()
                .map(|(code, name)| Language::new(*code, *name))
                .collect(),
            calls: AtomicUsize::new(0),
        }
    }

    /// English, Spanish and German.
    pub fn standard() -> Self {
        Self::new(&[("E", "English"), ("S", "Spanish"), ("X", "German")])
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl LanguageSource for StaticLanguages {
    fn fetch(&self) -> Result<Vec<Language>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.languages.clone())
    }
}

/// Language source whose every fetch fails.
#[derive(Debug, Default)]
pub struct UnreachableLanguages;

impl LanguageSource for UnreachableLanguages {
    fn fetch(&self) -> Result<Vec<Language>, FetchError> {
        Err(FetchError::Http(HttpError::Connection(
            "network unreachable".into(),
        )))
    }
}
