/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request/response structs with serialization support
[POS]:    Data layer - SENS SMS request and response types
[UPDATE]: When the SENS API schema changes
*/

use serde::{Deserialize, Serialize};

/// Country code the SENS service defaults to
pub const COUNTRY_CODE_KOREA: &str = "82";

/// Message class, sized by content length and media
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SmsType {
    Sms,
    Lms,
    Mms,
}

/// Regulatory content category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SmsContentType {
    #[serde(rename = "COMM")]
    Common,
    #[serde(rename = "AD")]
    Advertisement,
}

/// Body of a send-messages request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendSmsRequest {
    #[serde(rename = "type")]
    pub sms_type: SmsType,
    pub content_type: SmsContentType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    /// Registered sending number
    pub from: String,
    /// Subject shared by all messages (LMS/MMS only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Content shared by all messages
    pub content: String,
    pub messages: Vec<SmsMessage>,
    /// Reservation time, "yyyy-MM-dd HH:mm"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserve_time: Option<String>,
    /// Reservation time zone, e.g. "Asia/Seoul"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserve_time_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmsMessage {
    /// Receiving number
    pub to: String,
    /// Per-message subject override (LMS/MMS only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Per-message content override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Response to a send-messages request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendSmsResponse {
    pub request_id: String,
    pub request_time: String,
    pub status_code: String,
    pub status_name: String,
}
