/*
[INPUT]:  HTTP configuration (timeouts) and prepared request builders
[OUTPUT]: Configured reqwest client and decoded JSON responses
[POS]:    HTTP layer - core client plumbing shared by all services
[UPDATE]: When adding connection options or changing response handling
*/

use std::time::Duration;

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::http::{NcloudError, Result};

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Build the shared reqwest client from a configuration
pub(crate) fn build_http_client(config: &ClientConfig) -> Result<Client> {
    let client = Client::builder()
        .timeout(config.timeout)
        .connect_timeout(config.connect_timeout)
        .build()?;
    Ok(client)
}

/// Dispatch a request, check the expected status code and decode the
/// JSON response body.
///
/// Any other status code is surfaced as `UnexpectedStatus` together with
/// the raw body text; a well-formed status with a malformed body is a
/// `Serialization` error.
pub(crate) async fn send_json<T: DeserializeOwned>(
    builder: RequestBuilder,
    expected: StatusCode,
) -> Result<T> {
    let response = builder.send().await?;
    let status = response.status();
    debug!(%status, "api gateway response");

    if status != expected {
        let body = response.text().await.unwrap_or_default();
        return Err(NcloudError::UnexpectedStatus { status, body });
    }

    let bytes = response.bytes().await?;
    let decoded = serde_json::from_slice(&bytes)?;
    Ok(decoded)
}
