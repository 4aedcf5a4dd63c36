// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::time::Duration;

/// Default upper bound for a single feed request
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP response with status and decoded text body
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body, decoded using the declared charset
    pub body: String,
}

/// HTTP client abstraction for testability
///
/// Requests are blocking; the resolver issues them one at a time.
pub trait HttpClient {
    /// Fetch a URL and return its status together with the decoded body
    fn get_text(&self, url: &str) -> Result<HttpResponse, reqwest::Error>;
}

/// Default HTTP client implementation using reqwest's blocking client
#[derive(Clone)]
pub struct ReqwestClient {
    client: reqwest::blocking::Client,
}

impl ReqwestClient {
    /// Create a new ReqwestClient with default settings
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Create a new ReqwestClient whose requests give up after `timeout`
    pub fn with_timeout(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }

    /// Create a new ReqwestClient with a custom reqwest client
    pub fn with_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient for ReqwestClient {
    fn get_text(&self, url: &str) -> Result<HttpResponse, reqwest::Error> {
        let response = self.client.get(url).send()?;
        let status = response.status().as_u16();
        let body = response.text()?;

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reqwest_client_can_be_created() {
        let _client = ReqwestClient::new();
        let _client_default = ReqwestClient::default();
    }

    #[test]
    fn reqwest_client_accepts_timeout() {
        let client = ReqwestClient::with_timeout(Duration::from_secs(5)).unwrap();
        let _cloned = client.clone();
    }

    #[test]
    fn invalid_url_is_reported_as_error() {
        let client = ReqwestClient::new();
        assert!(client.get_text("not a url").is_err());
    }
}
