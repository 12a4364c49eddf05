//! Send an SMS through the SENS SMS v2 API.
//!
//! Usage:
//!   NCP_ACCESS_KEY=... NCP_SECRET_KEY=... SENS_SERVICE_ID=... SMS_FROM=... SMS_TO=... \
//!     cargo run --example send_sms

use ncloud_adapter::sens::COUNTRY_CODE_KOREA;
use ncloud_adapter::{SendSmsRequest, SmsClient, SmsContentType, SmsMessage, SmsType};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let access_key = std::env::var("NCP_ACCESS_KEY")?;
    let secret_key = std::env::var("NCP_SECRET_KEY")?;
    let service_id = std::env::var("SENS_SERVICE_ID")?;
    let from = std::env::var("SMS_FROM")?;
    let to = std::env::var("SMS_TO")?;

    let client = SmsClient::new(access_key, secret_key, service_id)?;

    let request = SendSmsRequest {
        sms_type: SmsType::Sms,
        content_type: SmsContentType::Common,
        country_code: Some(COUNTRY_CODE_KOREA.to_string()),
        from,
        subject: None,
        content: "hello from rust".to_string(),
        messages: vec![SmsMessage {
            to,
            subject: None,
            content: None,
        }],
        reserve_time: None,
        reserve_time_zone: None,
        schedule_code: None,
    };

    let response = client.send_sms(request).await?;
    println!(
        "request id: {}, status: {}",
        response.request_id, response.status_name
    );
    Ok(())
}
