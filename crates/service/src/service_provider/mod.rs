//! SAML service provider persistence: domain, repository, store.
//!
//! Records are scoped by identity zone; within a zone an entity ID names at
//! most one service provider.

pub mod domain;
pub mod errors;
pub mod repository;
pub mod repo;
pub mod service;

pub use domain::{SamlServiceProvider, SamlServiceProviderDefinition};
pub use errors::ServiceProviderError;
pub use repo::seaorm::SeaOrmServiceProviderRepository;
pub use service::ServiceProviderStore;
