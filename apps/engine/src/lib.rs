#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod ai;
pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod hint;
pub mod services;


// Re-exports for public API
pub use config::engine::EngineConfig;
pub use error::{AppError, ErrorPayload};
pub use errors::{DomainError, ErrorCode};
pub use services::match_registry::MatchRegistry;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
