//! Remote language list.
//!
//! This module provides:
//! - The language source contract ([`LanguageSource`], [`Language`])
//! - The HTTP-backed implementation ([`RemoteLanguages`])
//! - HTTP plumbing ([`HttpClient`], [`HttpRequest`], [`HttpResponse`])
//! - Production HTTP client implementation ([`ReqwestClient`])
//! - Error handling ([`FetchError`], [`HttpError`])

mod client;
mod error;
mod http;
mod remote;

#[cfg(test)]
mod client_tests;
#[cfg(test)]
mod remote_tests;

pub use client::ReqwestClient;
pub use error::{FetchError, HttpError};
pub use http::{HttpClient, HttpRequest, HttpResponse};
pub use remote::{
    DEFAULT_TIMEOUT, LANGUAGES_URL, Language, LanguageSource, RemoteLanguages, decode_languages,
};
