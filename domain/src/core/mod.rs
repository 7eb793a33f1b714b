//! Core domain concepts shared across all subdomains.
//!
//! - [`path::PathRole`] / [`path::PathKind`]: the three launch paths and their expected kind
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod path;
