//! GSM Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared types, utilities, and error handling for the GSM build pipeline.
//!
//! # Overview
//!
//! This crate provides common functionality used across all GSM workspace members:
//!
//! - **Error Handling**: Custom error types and result types
//! - **Logging**: Tracing initialization with env-based configuration
//! - **Types**: The curation-record type handed from table loading to the kernel
//!
//! # Example
//!
//! ```no_run
//! use gsm_common::types::CurationRecord;
//!
//! let record = CurationRecord::new(
//!     "R0001",
//!     vec![("Name".to_string(), "hexokinase".to_string())],
//! );
//! assert_eq!(record.get("Name"), Some("hexokinase"));
//! ```

pub mod error;
pub mod logging;
pub mod types;

// Re-export commonly used types
pub use error::{GsmError, Result};
