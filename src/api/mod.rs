//! Character API Client
//!
//! HTTP access to the public character API, organized by resource.

mod character;

use gloo_net::http::Request;
use send_wrapper::SendWrapper;
use serde::de::DeserializeOwned;
use thiserror::Error;
use web_sys::{AbortController, AbortSignal};

pub use character::*;

/// Message shown to the user for any failed data fetch
pub const FETCH_FAILED_MESSAGE: &str = "Failed to load character data";

/// Why a fetch failed. Variants only differ in what gets logged.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("server responded with {status} {status_text}")]
    Status { status: u16, status_text: String },
    #[error("request failed: {0}")]
    Network(String),
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    pub fn user_message(&self) -> &'static str {
        FETCH_FAILED_MESSAGE
    }
}

// ========================
// Request Sequencing
// ========================

/// Sequence number of one fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Tracks the most recent fetch so late responses can be dropped
#[derive(Debug, Default, Clone, Copy)]
pub struct RequestTracker {
    latest: u64,
}

impl RequestTracker {
    /// Start a new request, superseding every earlier ticket
    pub fn advance(&mut self) {
        self.latest += 1;
    }

    pub fn current(&self) -> RequestTicket {
        RequestTicket(self.latest)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.latest
    }
}

/// Abort handle for one in-flight request
///
/// Wrapped in `SendWrapper` so it can be moved into Leptos cleanup hooks.
/// Outside a browser no controller exists and the handle is inert.
pub struct AbortHandle(Option<SendWrapper<AbortController>>);

impl AbortHandle {
    pub fn new() -> Self {
        Self(AbortController::new().ok().map(SendWrapper::new))
    }

    pub fn signal(&self) -> Option<AbortSignal> {
        self.0.as_ref().map(|controller| controller.signal())
    }

    pub fn abort(&self) {
        if let Some(controller) = &self.0 {
            controller.abort();
        }
    }
}

// ========================
// Transport
// ========================

async fn get_json<T: DeserializeOwned>(url: &str, signal: Option<&AbortSignal>) -> Result<T, FetchError> {
    let response = Request::get(url)
        .abort_signal(signal)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status {
            status: response.status(),
            status_text: response.status_text(),
        });
    }

    let body = response.text().await.map_err(|e| FetchError::Network(e.to_string()))?;
    Ok(serde_json::from_str(&body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracker_supersedes_older_tickets() {
        let mut tracker = RequestTracker::default();
        tracker.advance();
        let first = tracker.current();
        assert!(tracker.is_current(first));

        tracker.advance();
        let second = tracker.current();
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
    }

    #[test]
    fn test_every_error_maps_to_one_message() {
        let decode = serde_json::from_str::<u32>("nope").unwrap_err();
        let errors = [
            FetchError::Status { status: 500, status_text: "Internal Server Error".into() },
            FetchError::Network("connection reset".into()),
            FetchError::Decode(decode),
        ];
        for err in &errors {
            assert_eq!(err.user_message(), "Failed to load character data");
        }
        assert_eq!(errors[0].to_string(), "server responded with 500 Internal Server Error");
    }
}
