//! Upload an attachment and send a mail through the Cloud Outbound Mailer API.
//!
//! Usage:
//!   NCP_ACCESS_KEY=... NCP_SECRET_KEY=... cargo run --example send_mail

use ncloud_adapter::{CreateMailRequest, FileUpload, MailerClient, Recipient, RecipientType};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let access_key = std::env::var("NCP_ACCESS_KEY")?;
    let secret_key = std::env::var("NCP_SECRET_KEY")?;

    let client = MailerClient::new(access_key, secret_key)?;

    let uploaded = client
        .create_files(vec![FileUpload::new("hello.txt", b"hello from rust".to_vec())])
        .await?;
    println!("uploaded files: {:?}", uploaded.files);

    let request = CreateMailRequest {
        sender_address: "no-reply@example.com".to_string(),
        sender_name: "Example".to_string(),
        title: "Hello".to_string(),
        body: "Sent through the outbound mailer adapter.".to_string(),
        recipients: vec![Recipient {
            address: "someone@example.com".to_string(),
            name: "Someone".to_string(),
            recipient_type: RecipientType::Recipient,
            parameters: vec![],
        }],
        attach_file_ids: uploaded.files.into_iter().map(|f| f.file_id).collect(),
    };

    let response = client.create_mail(request).await?;
    println!("request id: {}, count: {}", response.request_id, response.count);
    Ok(())
}
