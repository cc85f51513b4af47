#![cfg(test)]
use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::runtime::{SequentialIds, SteppingClock};
use crate::service_provider::repository::mock::MockServiceProviderRepository;
use crate::service_provider::{SamlServiceProvider, SamlServiceProviderDefinition, ServiceProviderStore};

/// First reading of the test clock; every later reading is one second on.
pub fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

/// Store over an in-memory repository with deterministic ids (`sp-1`, `sp-2`, ...)
/// and a clock that ticks one second per reading.
pub fn mock_store() -> (ServiceProviderStore<MockServiceProviderRepository>, Arc<MockServiceProviderRepository>) {
    common::utils::logging::init_test_logging();
    let repo = Arc::new(MockServiceProviderRepository::default());
    let store = ServiceProviderStore::new(repo.clone())
        .with_clock(Arc::new(SteppingClock::new(start(), Duration::seconds(1))))
        .with_id_generator(Arc::new(SequentialIds::new("sp")));
    (store, repo)
}

pub fn provider(name: &str, entity_id: &str, zone_id: &str) -> SamlServiceProvider {
    let config = SamlServiceProviderDefinition {
        meta_data_location: Some(format!("https://{entity_id}.example.com/saml/metadata")),
        ..Default::default()
    };
    SamlServiceProvider::new(name, entity_id, zone_id, config)
}
