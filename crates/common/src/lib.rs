//! Shared runtime helpers for the service provider registry crates.

pub mod utils;
