//! Shared setup for store tests running against a real SQL engine.

#![allow(dead_code)]

use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use migration::MigratorTrait;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use service::runtime::{SequentialIds, SteppingClock};
use service::service_provider::{
    SamlServiceProvider, SamlServiceProviderDefinition, SeaOrmServiceProviderRepository, ServiceProviderStore,
};

pub fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap()
}

/// In-memory SQLite database with the workspace migrations applied
pub async fn create_test_db() -> DatabaseConnection {
    // a single pooled connection keeps the in-memory database alive
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1).min_connections(1).sqlx_logging(false);
    let db = Database::connect(opts).await.expect("Failed to create test database");
    migration::Migrator::up(&db, None).await.expect("Failed to run test migrations");
    db
}

pub async fn create_test_store() -> ServiceProviderStore<SeaOrmServiceProviderRepository> {
    common::utils::logging::init_test_logging();
    let repo = Arc::new(SeaOrmServiceProviderRepository::new(create_test_db().await));
    ServiceProviderStore::new(repo)
        .with_clock(Arc::new(SteppingClock::new(start(), Duration::seconds(1))))
        .with_id_generator(Arc::new(SequentialIds::new("sp")))
}

pub fn provider(name: &str, entity_id: &str, zone_id: &str) -> SamlServiceProvider {
    let mut config = SamlServiceProviderDefinition {
        meta_data_location: Some(format!("https://{entity_id}.example.com/saml/metadata")),
        name_id: Some("urn:oasis:names:tc:SAML:1.1:nameid-format:emailAddress".into()),
        metadata_trust_check: true,
        ..Default::default()
    };
    config.attribute_mappings.insert("email".into(), "mail".into());
    SamlServiceProvider::new(name, entity_id, zone_id, config)
}
