/*
[INPUT]:  Mail requests, attachment uploads and gateway credentials
[OUTPUT]: Typed calls against the Cloud Outbound Mailer API
[POS]:    Mailer service - client, recipient types and request/response types
[UPDATE]: When mailer endpoints or the mail schema change
*/

pub mod client;
pub mod recipient;
pub mod types;

pub use client::MailerClient;
pub use recipient::RecipientType;
pub use types::{
    ApiErrorBody, CreateFileResponse, CreateMailRequest, CreateMailResponse, FileInfo, FileUpload,
    Recipient,
};
