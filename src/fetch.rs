//! Corpus download
//!
//! One blocking GET against the configured URL. Transport failures and
//! non-success statuses are distinct errors; there are no retries and no
//! partial-text fallback.

use std::time::Duration;

use crate::error::WordCountError;

/// How long an unresponsive server may stall before the run aborts.
const FETCH_TIMEOUT: Duration = Duration::from_secs(60);

/// Download the corpus at `url` as UTF-8 text.
///
/// Returns [`WordCountError::Http`] for a non-success status and
/// [`WordCountError::Fetch`] for transport failures.
pub fn fetch_text(url: &str) -> Result<String, WordCountError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()?;
    let response = client.get(url).send()?;

    let status = response.status();
    if !status.is_success() {
        return Err(WordCountError::Http {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    let text = response.text()?;
    log::info!("downloaded {} bytes from {url}", text.len());
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Start a mock server on a private runtime so the blocking client can
    /// be driven from the test thread. The runtime must stay alive for the
    /// duration of the test.
    fn mock_server_with(status: u16, body: &str) -> (tokio::runtime::Runtime, MockServer) {
        let rt = tokio::runtime::Runtime::new().expect("test runtime");
        let server = rt.block_on(async {
            let server = MockServer::start().await;
            Mock::given(method("GET"))
                .and(path("/corpus.txt"))
                .respond_with(ResponseTemplate::new(status).set_body_string(body))
                .mount(&server)
                .await;
            server
        });
        (rt, server)
    }

    #[test]
    fn test_fetch_returns_body() {
        let (_rt, server) = mock_server_with(200, "The cat sat.");
        let url = format!("{}/corpus.txt", server.uri());
        assert_eq!(fetch_text(&url).unwrap(), "The cat sat.");
    }

    #[test]
    fn test_non_success_status_carries_status_and_url() {
        let (_rt, server) = mock_server_with(404, "not here");
        let url = format!("{}/corpus.txt", server.uri());
        match fetch_text(&url) {
            Err(WordCountError::Http { status, url: seen }) => {
                assert_eq!(status, 404);
                assert_eq!(seen, url);
            }
            other => panic!("expected HTTP error, got {other:?}"),
        }
    }

    #[test]
    fn test_transport_failure_is_fetch_error() {
        // Nothing listens on port 1.
        match fetch_text("http://127.0.0.1:1/corpus.txt") {
            Err(WordCountError::Fetch(_)) => {}
            other => panic!("expected transport error, got {other:?}"),
        }
    }
}
