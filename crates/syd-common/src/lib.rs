//! Syft Datasets Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared types, formatting helpers, and logging for the Syft Datasets tools.
//!
//! # Overview
//!
//! - **Types**: The `Dataset` record as served by the datasets backend
//! - **Formatting**: Byte sizes, relative ages, and email domains for display
//! - **Logging**: `tracing` subscriber setup shared by every binary
//! - **Error Handling**: Common error and result types
//!
//! # Example
//!
//! ```
//! use syd_common::format::{domain_from_email, format_byte_size};
//!
//! assert_eq!(format_byte_size(1536), "1.5 KB");
//! assert_eq!(domain_from_email("alice@openmined.org"), "openmined.org");
//! ```

pub mod error;
pub mod format;
pub mod logging;
pub mod types;

// Re-export commonly used types
pub use error::{Result, SydError};
pub use types::{Dataset, DatasetId};
