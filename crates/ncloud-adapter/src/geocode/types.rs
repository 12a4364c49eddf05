/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - geocoding response types
[UPDATE]: When the geocoding API schema changes
*/

use serde::{Deserialize, Serialize};

/// Result status reported in the response body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GeocodeStatus {
    Ok,
    InvalidRequest,
    SystemError,
    #[serde(other)]
    Unknown,
}

impl GeocodeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GeocodeStatus::Ok => "OK",
            GeocodeStatus::InvalidRequest => "INVALID_REQUEST",
            GeocodeStatus::SystemError => "SYSTEM_ERROR",
            GeocodeStatus::Unknown => "UNKNOWN",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeocodeResponse {
    pub status: GeocodeStatus,
    #[serde(default)]
    pub error_message: String,
    #[serde(default)]
    pub meta: Meta,
    #[serde(default)]
    pub addresses: Vec<Address>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    pub total_count: i64,
    #[serde(default)]
    pub page: i64,
    pub count: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub road_address: String,
    pub jibun_address: String,
    pub english_address: String,
    /// Longitude
    pub x: String,
    /// Latitude
    pub y: String,
    /// Distance from the requested coordinate, if one was given
    #[serde(default)]
    pub distance: f64,
    #[serde(default)]
    pub address_elements: Vec<AddressElement>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressElement {
    pub types: Vec<String>,
    pub long_name: String,
    pub short_name: String,
    #[serde(default)]
    pub code: String,
}
