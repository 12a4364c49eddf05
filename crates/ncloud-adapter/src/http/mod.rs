/*
[INPUT]:  HTTP client configuration and API gateway credentials
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - shared plumbing for all service clients
[UPDATE]: When adding shared request helpers or changing client behavior
*/

pub mod client;
pub mod clock;
pub mod error;
pub mod signature;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{NcloudError, Result};
pub use signature::ApigwSigner;

pub use client::ClientConfig;
