/*
[INPUT]:  SMS requests and gateway credentials
[OUTPUT]: Typed calls against the SENS SMS v2 API
[POS]:    SENS service - client and message types
[UPDATE]: When SENS endpoints or the message schema change
*/

pub mod client;
pub mod types;

pub use client::SmsClient;
pub use types::{
    SendSmsRequest, SendSmsResponse, SmsContentType, SmsMessage, SmsType, COUNTRY_CODE_KOREA,
};
