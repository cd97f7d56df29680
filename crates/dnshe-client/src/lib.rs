//! HTTP client for the DNSHE subdomain API.
//!
//! This crate provides the [`ApiClient`] used to list and renew free
//! subdomains. Every call is a single attempt with a bounded timeout;
//! transport failures and error responses come back as classified
//! [`DnsheError`] values rather than panics or raw status codes.

pub mod api;
mod client;

pub use client::{ApiClient, ApiClientBuilder};
pub use dnshe_core::{DnsheError, Result};
