/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request/response structs with serialization support
[POS]:    Data layer - mailer request and response types
[UPDATE]: When the mailer API schema changes
*/

use serde::{Deserialize, Serialize};

use super::recipient::RecipientType;

/// In-band error payload the mailer API attaches to failed requests
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error_code: String,
    #[serde(default)]
    pub message: String,
}

/// Body of a createMail request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMailRequest {
    pub sender_address: String,
    pub sender_name: String,
    pub title: String,
    pub body: String,
    pub recipients: Vec<Recipient>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub attach_file_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipient {
    pub address: String,
    pub name: String,
    #[serde(rename = "type")]
    pub recipient_type: RecipientType,
    /// Template substitution values, position matched
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub parameters: Vec<String>,
}

/// Response to a createMail request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMailResponse {
    pub request_id: String,
    pub count: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiErrorBody>,
}

/// An attachment to upload before referencing it from a mail request
#[derive(Debug, Clone, PartialEq)]
pub struct FileUpload {
    pub name: String,
    pub content: Vec<u8>,
}

impl FileUpload {
    pub fn new(name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Response to a createFile upload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFileResponse {
    pub temp_request_id: String,
    #[serde(default)]
    pub files: Vec<FileInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiErrorBody>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileInfo {
    pub file_name: String,
    pub file_size: u64,
    pub file_id: String,
}
