/*
[INPUT]:  System time
[OUTPUT]: Epoch-millisecond timestamps for the gateway timestamp header
[POS]:    HTTP layer - time source abstraction
[UPDATE]: When timestamp precision or header format changes
*/

use std::fmt;

use chrono::Utc;

/// Supplies the current time used to fill the `x-ncp-apigw-timestamp`
/// header of each signed request.
///
/// Abstracted mainly so tests can pin the timestamp and assert exact
/// signature values.
pub trait Clock: Send + Sync + fmt::Debug {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> i64;
}

/// Clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Clock that always returns the same timestamp.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.0
    }
}
