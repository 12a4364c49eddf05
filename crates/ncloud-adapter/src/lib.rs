/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Naver Cloud adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod geocode;
pub mod http;
pub mod mailer;
pub mod sens;

// Re-export commonly used types from http
pub use http::{
    ApigwSigner,
    ClientConfig,
    Clock,
    FixedClock,
    NcloudError,
    Result,
    SystemClock,
};

// Re-export commonly used types from geocode
pub use geocode::{
    Filter,
    GeocodeClient,
    GeocodeQuery,
    GeocodeResponse,
    Lang,
};

// Re-export commonly used types from mailer
pub use mailer::{
    CreateFileResponse,
    CreateMailRequest,
    CreateMailResponse,
    FileUpload,
    MailerClient,
    Recipient,
    RecipientType,
};

// Re-export commonly used types from sens
pub use sens::{
    SendSmsRequest,
    SendSmsResponse,
    SmsClient,
    SmsContentType,
    SmsMessage,
    SmsType,
};
