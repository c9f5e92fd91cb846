//! Financial Insight Orchestrator
//!
//! The AI layer of a personal-finance assistant:
//! - Routes user messages and documents to external AI backends
//!   (conversational, sentiment/NLU, generative, document-analysis)
//! - Carries conversation context across turns via caller-owned handles
//! - Degrades gracefully to synthetic output when a backend is
//!   unconfigured or unreachable — the caller never sees an error
//! - Scores financial health from income, expenses, and savings
//!
//! DEGRADE LADDER:
//! LIVE BACKEND → LOCAL ANALYZER → SYNTHETIC CATALOG

pub mod api;
pub mod backends;
pub mod config;
pub mod error;
pub mod health;
pub mod invoker;
pub mod local;
pub mod models;
pub mod orchestrator;
pub mod session;
pub mod synthetic;

pub use error::Result;

// Re-export common types
pub use config::{BackendConfig, BackendRegistry};
pub use models::*;
pub use orchestrator::InsightOrchestrator;
