//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! optional config file (TOML)
//!     → loader.rs (read & deserialize)
//!     → validation.rs (semantic checks)
//!     → CheckerConfig (validated, immutable)
//!     → handed to the batch runner at startup
//! ```
//!
//! # Design Decisions
//! - Every field has a default; running without a file uses `CheckerConfig::default()`
//! - Validation separates syntactic (serde) from semantic checks
//! - Config is read once per run, there is no reload

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::ApiConfig;
pub use schema::CheckerConfig;
pub use schema::FilesConfig;
pub use schema::ObservabilityConfig;
pub use schema::RetryConfig;
pub use schema::SchedulerConfig;
