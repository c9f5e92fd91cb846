//! Typed HTTP clients for the four AI backends
//!
//! Each client wraps one remote API behind a long-lived, connection-pooled
//! reqwest::Client with a bounded timeout. Single attempt, no retry: the
//! invoker decides what happens on failure.

use reqwest::Client;
use std::time::Duration;

pub mod conversational;
pub mod document;
pub mod generative;
pub mod sentiment;

pub use conversational::ConversationalClient;
pub use document::DocumentClient;
pub use generative::GenerativeClient;
pub use sentiment::SentimentClient;

/// Per-call deadline for every backend request.
pub(crate) const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared client construction (pooling + timeout).
pub(crate) fn build_http_client() -> Client {
    Client::builder()
        .pool_idle_timeout(Duration::from_secs(90))
        .pool_max_idle_per_host(8)
        .timeout(REQUEST_TIMEOUT)
        .build()
        .expect("Failed to build HTTP client")
}
