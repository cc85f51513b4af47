//! Service layer for SAML service provider configuration records.
//! - Separates store semantics (validation, versioning, read-back) from data access.
//! - Reuses the entity and statement helpers of the `models` crate.
//! - Clock and id generation are injectable through `runtime`.

pub mod runtime;
pub mod service_provider;
#[cfg(test)]
pub mod test_support;

pub use service_provider::{ServiceProviderError, ServiceProviderStore};
