//! Strongly-typed DNSHE API payloads and the per-run report model.

mod account;
mod report;
mod subdomain;

pub use account::*;
pub use report::*;
pub use subdomain::*;
