//! Application initialization and resource setup.
//!
//! This module provides functions to initialize shared resources:
//! - HTTP client (timeout and user agent from `Config`)
//! - Logger (`env_logger`, plain or JSON)

mod client;
mod logger;

// Re-export public API
pub(crate) use client::build_client;
pub use client::init_client;
pub use logger::init_logger_with;
