//! HTTP existence probing.
//!
//! Uses the curl crate (libcurl) to send a HEAD request for a candidate image
//! and reduce the response to a [`ProbeOutcome`]. Only a final `200` counts as
//! present; everything else (other statuses, timeouts, connection failures)
//! is absence. There is no retry.

mod classify;

use std::time::Duration;

pub use classify::{classify_curl_error, classify_status};

/// Default upper bound for one probe, connect included.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(5);
/// Default connect timeout.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(3);

/// What a single existence check found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// Server answered `200 OK`.
    Found,
    /// Server answered with any other status.
    Missing(u32),
    /// Connect or total timeout elapsed.
    TimedOut,
    /// DNS, TLS, connection, or protocol failure.
    Failed(String),
}

impl ProbeOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, ProbeOutcome::Found)
    }
}

/// Something that can tell whether a URL exists. Implemented by [`HeadProber`]
/// for real traffic; tests substitute their own.
pub trait Probe {
    fn probe(&self, url: &str) -> ProbeOutcome;
}

impl<P: Probe + ?Sized> Probe for &P {
    fn probe(&self, url: &str) -> ProbeOutcome {
        (**self).probe(url)
    }
}

/// HEAD prober backed by a fresh curl easy handle per request.
#[derive(Debug, Clone)]
pub struct HeadProber {
    timeout: Duration,
    connect_timeout: Duration,
}

impl Default for HeadProber {
    fn default() -> Self {
        Self::new(DEFAULT_PROBE_TIMEOUT, DEFAULT_CONNECT_TIMEOUT)
    }
}

impl HeadProber {
    /// `connect_timeout` is clamped to `timeout`.
    pub fn new(timeout: Duration, connect_timeout: Duration) -> Self {
        Self {
            timeout,
            connect_timeout: connect_timeout.min(timeout),
        }
    }

    fn head(&self, url: &str) -> Result<u32, curl::Error> {
        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.nobody(true)?; // HEAD request
        easy.follow_location(true)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;
        easy.perform()?;
        easy.response_code()
    }
}

impl Probe for HeadProber {
    fn probe(&self, url: &str) -> ProbeOutcome {
        let outcome = match self.head(url) {
            Ok(code) => classify_status(code),
            Err(e) => classify_curl_error(&e),
        };
        tracing::debug!(url, ?outcome, "HEAD probe");
        outcome
    }
}
