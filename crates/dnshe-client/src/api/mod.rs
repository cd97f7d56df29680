//! Per-resource API facades.

mod subdomains;

pub use subdomains::SubdomainsApi;
