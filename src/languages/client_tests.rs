//! Tests for `ReqwestClient`.
//!
//! These cover construction only; requests against a live server are not
//! made in unit tests.

use super::*;

mod reqwest_client {
    use super::*;

    #[test]
    fn new_creates_client() {
        let client = ReqwestClient::new();
        let _ = format!("{client:?}");
    }

    #[test]
    fn from_client_accepts_custom_client() {
        let custom = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(5))
            .build()
            .unwrap();
        let client = ReqwestClient::from_client(custom);

        assert!(format!("{client:?}").contains("ReqwestClient"));
    }

    #[test]
    fn client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ReqwestClient>();
    }

    #[test]
    fn remote_source_uses_default_endpoint() {
        let source = RemoteLanguages::new(ReqwestClient::default()).unwrap();

        assert_eq!(source.url().as_str(), LANGUAGES_URL);
    }
}

mod http_types {
    use super::*;

    #[test]
    fn get_request_has_no_headers() {
        let url = url::Url::parse("https://example.com/languages").unwrap();
        let req = HttpRequest::get(url.clone());

        assert_eq!(req.method, ::http::Method::GET);
        assert_eq!(req.url, url);
        assert!(req.headers.is_empty());
    }

    #[test]
    fn response_success_follows_status() {
        assert!(HttpResponse::new(::http::StatusCode::OK, vec![]).is_success());
        assert!(!HttpResponse::new(::http::StatusCode::BAD_GATEWAY, vec![]).is_success());
    }
}
