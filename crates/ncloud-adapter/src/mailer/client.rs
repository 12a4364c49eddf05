/*
[INPUT]:  Mail requests, attachment files and signed gateway headers
[OUTPUT]: Mail creation and file upload responses
[POS]:    Mailer service - HTTP client for the Cloud Outbound Mailer API
[UPDATE]: When mailer endpoints or auth requirements change
*/

use std::sync::Arc;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, StatusCode, Url};
use tracing::debug;

use crate::http::client::{build_http_client, send_json};
use crate::http::{ApigwSigner, ClientConfig, Clock, Result, SystemClock};
use crate::mailer::types::{CreateFileResponse, CreateMailRequest, CreateMailResponse, FileUpload};

/// Base URL for the Cloud Outbound Mailer API
pub const MAILER_BASE_URL: &str = "https://mail.apigw.ntruss.com";
/// Attachment upload endpoint path
pub const ENDPOINT_FILES: &str = "/api/v1/files";
/// Mail creation endpoint path
pub const ENDPOINT_MAILS: &str = "/api/v1/mails";

/// Multipart field name the API expects attachments under
const FILE_LIST_FIELD: &str = "fileList";

/// Client for the Cloud Outbound Mailer API
#[derive(Debug, Clone)]
pub struct MailerClient {
    http_client: Client,
    base_url: Url,
    signer: ApigwSigner,
    clock: Arc<dyn Clock>,
}

impl MailerClient {
    /// Create a new client with default configuration
    pub fn new(access_key: impl Into<String>, secret_key: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::default(), access_key, secret_key)
    }

    /// Create a new client with custom configuration
    pub fn with_config(
        config: ClientConfig,
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Result<Self> {
        Self::with_base_url(config, MAILER_BASE_URL, access_key, secret_key)
    }

    /// Create a new client against an explicit base URL
    pub fn with_base_url(
        config: ClientConfig,
        base_url: &str,
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            http_client: build_http_client(&config)?,
            base_url: Url::parse(base_url)?,
            signer: ApigwSigner::new(access_key, secret_key),
            clock: Arc::new(SystemClock),
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

    /// Send a createMail request
    ///
    /// POST /api/v1/mails, JSON body, signed gateway headers.
    /// The API acknowledges with 201 Created.
    pub async fn create_mail(&self, request: CreateMailRequest) -> Result<CreateMailResponse> {
        let url = self.base_url.join(ENDPOINT_MAILS)?;
        debug!(%url, recipients = request.recipients.len(), "create mail");

        let timestamp = self.clock.now_millis();
        let builder = self.http_client.post(url).json(&request);
        let builder = self
            .signer
            .apply(builder, &Method::POST, ENDPOINT_MAILS, timestamp);

        send_json(builder, StatusCode::CREATED).await
    }

    /// Upload attachment files
    ///
    /// POST /api/v1/files, multipart/form-data with every file under the
    /// `fileList` field, signed gateway headers. The API acknowledges
    /// with 201 Created and returns the file ids to reference from a
    /// subsequent createMail request.
    pub async fn create_files(&self, files: Vec<FileUpload>) -> Result<CreateFileResponse> {
        let url = self.base_url.join(ENDPOINT_FILES)?;
        debug!(%url, files = files.len(), "upload attachment files");

        let mut form = Form::new();
        for file in files {
            let part = Part::bytes(file.content)
                .file_name(file.name)
                .mime_str("application/octet-stream")?;
            form = form.part(FILE_LIST_FIELD, part);
        }

        let timestamp = self.clock.now_millis();
        let builder = self.http_client.post(url).multipart(form);
        let builder = self
            .signer
            .apply(builder, &Method::POST, ENDPOINT_FILES, timestamp);

        send_json(builder, StatusCode::CREATED).await
    }
}
