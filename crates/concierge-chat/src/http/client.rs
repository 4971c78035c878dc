//! HTTP transport struct and response decoding.

use crate::{ExchangeError, ExchangeReply};

use super::config::HttpConfig;

/// Longest slice of an error body kept in `ExchangeError::Status`.
const ERROR_BODY_PREVIEW: usize = 200;

/// Sends exchanges to the chat endpoint over HTTP.
pub struct HttpTransport {
    pub(crate) config: HttpConfig,
    pub(crate) http: reqwest::Client,
}

impl HttpTransport {
    pub fn new(config: HttpConfig) -> Result<Self, ExchangeError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.timeout)
            .build()
            .map_err(|e| ExchangeError::Network(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    pub fn url(&self) -> &str {
        &self.config.url
    }

    /// Decode a successful response body.
    pub(crate) fn parse_reply(body: &str) -> Result<ExchangeReply, ExchangeError> {
        serde_json::from_str(body).map_err(|e| ExchangeError::Parse(e.to_string()))
    }

    /// Build the error for a non-success status.
    pub(crate) fn status_error(status: reqwest::StatusCode, body: &str) -> ExchangeError {
        ExchangeError::Status {
            status: status.as_u16(),
            body: body.chars().take(ERROR_BODY_PREVIEW).collect(),
        }
    }
}

impl From<reqwest::Error> for ExchangeError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ExchangeError::Timeout
        } else {
            ExchangeError::Network(e.to_string())
        }
    }
}
