//! Remote image retrieval for the report header.
//!
//! Redirects are followed by hand so the hop count can be capped; reqwest's own redirect
//! handling is disabled on the client.

use reqwest::header::{LOCATION, USER_AGENT};
use reqwest::{Client, Url};
use std::time::Duration;

/// Some image hosts answer 403 to requests without a browser-like agent.
const USER_AGENT_VALUE: &str = "Mozilla/5.0 (Rust) Rail-QR-App/1.0";

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to fetch image from {url}, status code: {status}")]
    UpstreamStatus { url: String, status: u16 },

    #[error("Failed to fetch image from {url}: {source}")]
    UpstreamTransport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Too many redirects fetching {url} (limit {limit})")]
    TooManyRedirects { url: String, limit: usize },
}

#[derive(Clone)]
pub struct ImageFetcher {
    client: Client,
    max_redirects: usize,
}

impl ImageFetcher {
    pub fn new(timeout: Duration, max_redirects: usize) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self {
            client,
            max_redirects,
        })
    }

    /// Downloads `url` into memory.
    ///
    /// Relative `Location` headers are resolved against the URL that produced them. A 3xx
    /// without `Location` is treated like any other non-2xx status.
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let mut current = parse_url(url)?;

        for _ in 0..=self.max_redirects {
            let response = self
                .client
                .get(current.clone())
                .header(USER_AGENT, USER_AGENT_VALUE)
                .send()
                .await
                .map_err(|source| FetchError::UpstreamTransport {
                    url: current.to_string(),
                    source,
                })?;

            let status = response.status();
            if status.is_redirection() {
                let location = response
                    .headers()
                    .get(LOCATION)
                    .and_then(|value| value.to_str().ok());
                if let Some(location) = location {
                    current = current
                        .join(location)
                        .map_err(|_| FetchError::InvalidUrl(location.to_string()))?;
                    continue;
                }
            }

            if !status.is_success() {
                return Err(FetchError::UpstreamStatus {
                    url: current.to_string(),
                    status: status.as_u16(),
                });
            }

            let body = response
                .bytes()
                .await
                .map_err(|source| FetchError::UpstreamTransport {
                    url: current.to_string(),
                    source,
                })?;
            return Ok(body.to_vec());
        }

        Err(FetchError::TooManyRedirects {
            url: url.to_string(),
            limit: self.max_redirects,
        })
    }
}

fn parse_url(raw: &str) -> Result<Url, FetchError> {
    let url = Url::parse(raw).map_err(|_| FetchError::InvalidUrl(raw.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        _ => Err(FetchError::InvalidUrl(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_and_non_http_urls() {
        assert!(matches!(parse_url("not a url"), Err(FetchError::InvalidUrl(_))));
        assert!(matches!(
            parse_url("ftp://example.com/a.png"),
            Err(FetchError::InvalidUrl(_))
        ));
        assert!(parse_url("https://example.com/a.png").is_ok());
    }
}
