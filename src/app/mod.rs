//! Application module
//!
//! Host-program plumbing that sits outside the pure core:
//! - Configuration read from the environment
//! - Logging setup

pub mod config;
pub mod logging;

pub use config::AppConfig;
pub use logging::init_logging;
