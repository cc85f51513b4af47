use async_trait::async_trait;

use models::service_provider::{Changes, Model};

use super::errors::ServiceProviderError;

/// Statement-level access to the `service_provider` table.
///
/// Selects hand back every matching row; deciding whether a result is usable
/// (exactly one row, for instance) is up to the caller.
#[async_trait]
pub trait ServiceProviderRepository: Send + Sync {
    /// Fails with `AlreadyExists` when `(entity_id, identity_zone_id)` is taken.
    async fn insert(&self, row: Model) -> Result<(), ServiceProviderError>;
    async fn update(&self, id: &str, changes: Changes) -> Result<u64, ServiceProviderError>;
    async fn delete(&self, id: &str) -> Result<u64, ServiceProviderError>;
    async fn delete_by_entity_id(&self, entity_id: &str, zone_id: &str) -> Result<u64, ServiceProviderError>;
    async fn delete_by_zone(&self, zone_id: &str) -> Result<u64, ServiceProviderError>;

    async fn find_by_id(&self, id: &str) -> Result<Vec<Model>, ServiceProviderError>;
    async fn find_by_entity_id(&self, entity_id: &str, zone_id: &str) -> Result<Vec<Model>, ServiceProviderError>;
    async fn find_by_zone(&self, zone_id: &str, active_only: bool) -> Result<Vec<Model>, ServiceProviderError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::{Mutex, MutexGuard};

    #[derive(Default)]
    pub struct MockServiceProviderRepository {
        rows: Mutex<BTreeMap<String, Model>>, // key: id
        failure: Mutex<Option<ServiceProviderError>>,
    }

    impl MockServiceProviderRepository {
        /// Make the next repository call fail with `err`.
        pub fn fail_next(&self, err: ServiceProviderError) {
            *self.failure.lock().unwrap_or_else(|p| p.into_inner()) = Some(err);
        }

        /// Snapshot of every stored row, ordered by id.
        pub fn rows(&self) -> Vec<Model> {
            self.rows.lock().unwrap_or_else(|p| p.into_inner()).values().cloned().collect()
        }

        fn begin(&self) -> Result<MutexGuard<'_, BTreeMap<String, Model>>, ServiceProviderError> {
            if let Some(err) = self.failure.lock().unwrap_or_else(|p| p.into_inner()).take() {
                return Err(err);
            }
            Ok(self.rows.lock().unwrap_or_else(|p| p.into_inner()))
        }

        fn remove_where(&self, pred: impl Fn(&Model) -> bool) -> Result<u64, ServiceProviderError> {
            let mut rows = self.begin()?;
            let before = rows.len();
            rows.retain(|_, m| !pred(&*m));
            Ok((before - rows.len()) as u64)
        }

        fn select_where(&self, pred: impl Fn(&Model) -> bool) -> Result<Vec<Model>, ServiceProviderError> {
            let rows = self.begin()?;
            Ok(rows.values().filter(|m| pred(*m)).cloned().collect())
        }
    }

    #[async_trait]
    impl ServiceProviderRepository for MockServiceProviderRepository {
        async fn insert(&self, row: Model) -> Result<(), ServiceProviderError> {
            let mut rows = self.begin()?;
            if rows.contains_key(&row.id) {
                return Err(ServiceProviderError::AlreadyExists(format!("duplicate key (id)=({})", row.id)));
            }
            if rows.values().any(|m| m.entity_id == row.entity_id && m.identity_zone_id == row.identity_zone_id) {
                return Err(ServiceProviderError::AlreadyExists(format!(
                    "duplicate key (entity_id, identity_zone_id)=({}, {}) violates unique constraint \"entity_in_zone\"",
                    row.entity_id, row.identity_zone_id
                )));
            }
            rows.insert(row.id.clone(), row);
            Ok(())
        }

        async fn update(&self, id: &str, changes: Changes) -> Result<u64, ServiceProviderError> {
            let mut rows = self.begin()?;
            match rows.get_mut(id) {
                Some(m) => {
                    m.version = changes.version;
                    m.last_modified = changes.last_modified;
                    m.name = changes.name;
                    m.config = changes.config;
                    m.active = changes.active;
                    Ok(1)
                }
                None => Ok(0),
            }
        }

        async fn delete(&self, id: &str) -> Result<u64, ServiceProviderError> {
            self.remove_where(|m| m.id == id)
        }

        async fn delete_by_entity_id(&self, entity_id: &str, zone_id: &str) -> Result<u64, ServiceProviderError> {
            self.remove_where(|m| m.entity_id == entity_id && m.identity_zone_id == zone_id)
        }

        async fn delete_by_zone(&self, zone_id: &str) -> Result<u64, ServiceProviderError> {
            self.remove_where(|m| m.identity_zone_id == zone_id)
        }

        async fn find_by_id(&self, id: &str) -> Result<Vec<Model>, ServiceProviderError> {
            self.select_where(|m| m.id == id)
        }

        async fn find_by_entity_id(&self, entity_id: &str, zone_id: &str) -> Result<Vec<Model>, ServiceProviderError> {
            self.select_where(|m| m.entity_id == entity_id && m.identity_zone_id == zone_id)
        }

        async fn find_by_zone(&self, zone_id: &str, active_only: bool) -> Result<Vec<Model>, ServiceProviderError> {
            self.select_where(|m| m.identity_zone_id == zone_id && (!active_only || m.active))
        }
    }
}
