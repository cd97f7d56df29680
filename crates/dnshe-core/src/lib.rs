//! Core types for the DNSHE free-subdomain renewal tool.
//!
//! This crate provides the foundational types used across the workspace:
//!
//! - **Types**: Strongly-typed representations of DNSHE API requests and
//!   responses, plus the per-run report model
//! - **Errors**: Normalized API error classification with [`DnsheError`]

mod error;
pub mod types;

pub use error::{DnsheError, Result};
pub use types::*;
