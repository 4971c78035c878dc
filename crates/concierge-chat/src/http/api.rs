//! ChatTransport trait implementation for HttpTransport.

use async_trait::async_trait;
use tracing::debug;

use crate::{ChatTransport, ExchangeError, ExchangeReply, ExchangeRequest};

use super::client::HttpTransport;

#[async_trait]
impl ChatTransport for HttpTransport {
    async fn send(&self, request: &ExchangeRequest<'_>) -> Result<ExchangeReply, ExchangeError> {
        debug!(url = %self.config.url, session = %request.session_id, "Chat request");

        let response = self
            .http
            .post(&self.config.url)
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(Self::status_error(status, &body));
        }

        Self::parse_reply(&body)
    }
}
