//! Tests for the remote language source.

use super::*;
use std::sync::{Arc, Mutex};
use std::time::Duration;

const BODY: &str = r#"{
    "languages": [
        {"code": "E", "name": "English", "locale": "en", "isRTL": false},
        {"code": "S", "name": "Spanish", "locale": "es", "isRTL": false},
        {"code": "X", "name": "German", "locale": "de", "isRTL": false}
    ]
}"#;

/// Mock HTTP client returning one canned result and recording the request.
struct MockClient {
    response: Mutex<Option<Result<HttpResponse, HttpError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockClient {
    fn new(response: Result<HttpResponse, HttpError>) -> Self {
        Self {
            response: Mutex::new(Some(response)),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn ok(body: &str) -> Self {
        Self::new(Ok(HttpResponse::new(
            ::http::StatusCode::OK,
            body.as_bytes().to_vec(),
        )))
    }
}

impl HttpClient for MockClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.requests.lock().unwrap().push(req);
        self.response
            .lock()
            .unwrap()
            .take()
            .unwrap_or(Err(HttpError::Timeout))
    }
}

impl HttpClient for Arc<MockClient> {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        (**self).request(req).await
    }
}

/// Client that never answers.
struct HangingClient;

impl HttpClient for HangingClient {
    async fn request(&self, _req: HttpRequest) -> Result<HttpResponse, HttpError> {
        std::future::pending().await
    }
}

fn source<C: HttpClient>(client: C) -> RemoteLanguages<C> {
    RemoteLanguages::with_url(
        client,
        url::Url::parse("https://example.com/languages").unwrap(),
    )
    .unwrap()
}

mod decoding {
    use super::*;

    #[test]
    fn decodes_codes_and_names_in_order() {
        let languages = decode_languages(BODY.as_bytes()).unwrap();

        assert_eq!(
            languages,
            vec![
                Language::new("E", "English"),
                Language::new("S", "Spanish"),
                Language::new("X", "German"),
            ]
        );
    }

    #[test]
    fn missing_languages_key_fails() {
        assert!(decode_languages(br#"{"langs": []}"#).is_err());
    }

    #[test]
    fn entry_without_name_fails() {
        assert!(decode_languages(br#"{"languages": [{"code": "E"}]}"#).is_err());
    }
}

mod fetching {
    use super::*;

    #[test]
    fn fetch_returns_decoded_list() {
        let languages = source(MockClient::ok(BODY)).fetch().unwrap();

        assert_eq!(languages.len(), 3);
        assert_eq!(languages[1].code, "S");
    }

    #[test]
    fn fetch_sends_get_with_json_accept() {
        let client = Arc::new(MockClient::ok(BODY));
        source(Arc::clone(&client)).fetch().unwrap();

        let requests = client.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, ::http::Method::GET);
        assert_eq!(requests[0].url.as_str(), "https://example.com/languages");
        assert_eq!(
            requests[0].headers.get(::http::header::ACCEPT).unwrap(),
            "application/json"
        );
    }

    #[test]
    fn non_success_status_fails() {
        let client = MockClient::new(Ok(HttpResponse::new(
            ::http::StatusCode::SERVICE_UNAVAILABLE,
            Vec::new(),
        )));

        let err = source(client).fetch().unwrap_err();

        assert!(matches!(
            err,
            FetchError::Status(::http::StatusCode::SERVICE_UNAVAILABLE)
        ));
    }

    #[test]
    fn connection_error_is_propagated() {
        let client = MockClient::new(Err(HttpError::Connection("refused".into())));

        let err = source(client).fetch().unwrap_err();

        assert!(matches!(err, FetchError::Http(HttpError::Connection(_))));
    }

    #[test]
    fn malformed_body_fails_to_decode() {
        let err = source(MockClient::ok("<html>")).fetch().unwrap_err();

        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn default_timeout_is_thirty_seconds() {
        assert_eq!(source(HangingClient).timeout(), DEFAULT_TIMEOUT);
    }

    #[test]
    fn source_can_fetch_repeatedly() {
        let client = Arc::new(MockClient::ok(BODY));
        let remote = source(Arc::clone(&client));

        assert!(remote.fetch().is_ok());
        // The mock only holds one response; the second call sees its fallback.
        assert!(matches!(
            remote.fetch(),
            Err(FetchError::Http(HttpError::Timeout))
        ));
        assert_eq!(client.requests.lock().unwrap().len(), 2);
    }

    #[test]
    fn hanging_request_times_out() {
        let remote = source(HangingClient).with_timeout(Duration::from_millis(20));

        let err = remote.fetch().unwrap_err();

        assert!(matches!(err, FetchError::Timeout { after } if after == Duration::from_millis(20)));
    }
}

mod parsing {
    use super::*;
    use crate::coerce::{Context, Terminate};
    use crate::parser::{Grammar, Outcome};
    use crate::schema::Registry;
    use crate::settings::Settings;

    fn parse_with(remote: &RemoteLanguages<MockClient>, tokens: &[&str]) -> (Outcome, String) {
        let registry = Registry::predefined().unwrap();
        let grammar = Grammar::activate(&registry, &["--lang", "--languages"]).unwrap();
        let mut out = Vec::new();
        let outcome = {
            let mut ctx = Context::new(remote, &mut out);
            grammar
                .parse(tokens.iter().copied(), Settings::default(), &mut ctx)
                .unwrap()
        };
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn lang_is_checked_against_fetched_list() {
        let remote = source(MockClient::ok(BODY));

        let (outcome, _) = parse_with(&remote, &["--lang", "S"]);

        let Outcome::Complete(settings) = outcome else {
            panic!("expected complete parse, got {outcome:?}");
        };
        assert_eq!(settings.lang, "S");
    }

    #[test]
    fn languages_flag_lists_fetched_codes() {
        let remote = source(MockClient::ok(BODY));

        let (outcome, output) = parse_with(&remote, &["--languages"]);

        assert!(matches!(outcome, Outcome::Terminate(Terminate::SUCCESS)));
        assert!(output.contains("  S  Spanish"));
    }

    #[test]
    fn unlisted_lang_fails_after_fetch() {
        let remote = source(MockClient::ok(BODY));
        let registry = Registry::predefined().unwrap();
        let grammar = Grammar::activate(&registry, &["--lang"]).unwrap();
        let mut out = Vec::new();
        let mut ctx = Context::new(&remote, &mut out);

        let err = grammar
            .parse(["--lang", "XX"], Settings::default(), &mut ctx)
            .unwrap_err();

        assert!(err.to_string().contains("XX: invalid language code"), "{err}");
    }
}
