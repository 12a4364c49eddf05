/*
[INPUT]:  SMS requests, service id and signed gateway headers
[OUTPUT]: Send-message responses with delivery status checks
[POS]:    SENS service - HTTP client for the SMS v2 endpoint
[UPDATE]: When SENS endpoints or auth requirements change
*/

use std::sync::Arc;

use reqwest::{Client, Method, StatusCode, Url};
use tracing::debug;

use crate::http::client::{build_http_client, send_json};
use crate::http::{ApigwSigner, ClientConfig, Clock, NcloudError, Result, SystemClock};
use crate::sens::types::{SendSmsRequest, SendSmsResponse};

/// Base URL for the SENS API
pub const SENS_BASE_URL: &str = "https://sens.apigw.ntruss.com";

/// Status name SENS reports for an accepted send request
const STATUS_NAME_SUCCESS: &str = "success";

/// Client for the SENS SMS v2 API
///
/// Every request is scoped to a service id registered in the SENS
/// console; the id becomes part of the endpoint path and therefore of
/// the signed canonical string.
#[derive(Debug, Clone)]
pub struct SmsClient {
    http_client: Client,
    base_url: Url,
    signer: ApigwSigner,
    clock: Arc<dyn Clock>,
    service_id: String,
}

impl SmsClient {
    /// Create a new client with default configuration
    pub fn new(
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
        service_id: impl Into<String>,
    ) -> Result<Self> {
        Self::with_config(ClientConfig::default(), access_key, secret_key, service_id)
    }

    /// Create a new client with custom configuration
    pub fn with_config(
        config: ClientConfig,
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
        service_id: impl Into<String>,
    ) -> Result<Self> {
        Self::with_base_url(config, SENS_BASE_URL, access_key, secret_key, service_id)
    }

    /// Create a new client against an explicit base URL
    pub fn with_base_url(
        config: ClientConfig,
        base_url: &str,
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
        service_id: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            http_client: build_http_client(&config)?,
            base_url: Url::parse(base_url)?,
            signer: ApigwSigner::new(access_key, secret_key),
            clock: Arc::new(SystemClock),
            service_id: service_id.into(),
        })
    }

    /// Replace the timestamp source
    ///
    /// Exists mainly so tests can pin the timestamp and assert exact
    /// signature headers.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Endpoint path for this client's service id
    pub fn messages_endpoint(&self) -> String {
        format!("/sms/v2/services/{}/messages", self.service_id)
    }

    /// Send SMS/LMS/MMS messages
    ///
    /// POST /sms/v2/services/{serviceId}/messages, JSON body, signed
    /// gateway headers. The API acknowledges with 202 Accepted; a
    /// decoded response whose `statusName` is not "success" is still an
    /// error.
    pub async fn send_sms(&self, request: SendSmsRequest) -> Result<SendSmsResponse> {
        let endpoint = self.messages_endpoint();
        let url = self.base_url.join(&endpoint)?;
        debug!(%url, messages = request.messages.len(), "send sms");

        let timestamp = self.clock.now_millis();
        let builder = self.http_client.post(url).json(&request);
        let builder = self.signer.apply(builder, &Method::POST, &endpoint, timestamp);

        let response: SendSmsResponse = send_json(builder, StatusCode::ACCEPTED).await?;
        if response.status_name != STATUS_NAME_SUCCESS {
            return Err(NcloudError::Status {
                code: response.status_code,
                name: response.status_name,
            });
        }
        Ok(response)
    }
}
