use std::sync::Arc;

use tracing::{info, instrument, warn};

use models::service_provider::{Changes, Model};

use super::domain::SamlServiceProvider;
use super::errors::ServiceProviderError;
use super::repository::ServiceProviderRepository;
use crate::runtime::{Clock, IdGenerator, SystemClock, UuidGenerator};

/// CRUD over SAML service providers, partitioned by identity zone.
///
/// Every operation is one repository statement; `create` and `update` read the
/// row back so callers observe store-assigned fields.
pub struct ServiceProviderStore<R: ServiceProviderRepository> {
    repo: Arc<R>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
}

impl<R: ServiceProviderRepository> ServiceProviderStore<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo, clock: Arc::new(SystemClock), ids: Arc::new(UuidGenerator) }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    #[instrument(skip(self))]
    pub async fn retrieve(&self, id: &str) -> Result<SamlServiceProvider, ServiceProviderError> {
        let rows = self.repo.find_by_id(id).await?;
        single_result(rows, "service provider by id")?.try_into()
    }

    /// Lookup by the zone-unique entity ID.
    #[instrument(skip(self))]
    pub async fn retrieve_by_origin(&self, entity_id: &str, zone_id: &str) -> Result<SamlServiceProvider, ServiceProviderError> {
        let rows = self.repo.find_by_entity_id(entity_id, zone_id).await?;
        single_result(rows, "service provider by entity id")?.try_into()
    }

    #[instrument(skip(self))]
    pub async fn retrieve_active(&self, zone_id: &str) -> Result<Vec<SamlServiceProvider>, ServiceProviderError> {
        map_rows(self.repo.find_by_zone(zone_id, true).await?)
    }

    /// Every provider in the zone, or only the active ones. Order is whatever
    /// the store returns.
    #[instrument(skip(self))]
    pub async fn retrieve_all(&self, active_only: bool, zone_id: &str) -> Result<Vec<SamlServiceProvider>, ServiceProviderError> {
        if active_only {
            return self.retrieve_active(zone_id).await;
        }
        map_rows(self.repo.find_by_zone(zone_id, false).await?)
    }

    /// Persist a new provider under a freshly generated id.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::service_provider::{ServiceProviderStore, SamlServiceProvider, SamlServiceProviderDefinition};
    /// use service::service_provider::repository::mock::MockServiceProviderRepository;
    /// let store = ServiceProviderStore::new(Arc::new(MockServiceProviderRepository::default()));
    /// let sp = SamlServiceProvider::new("Login", "cloudfoundry-saml-login", "uaa", SamlServiceProviderDefinition::default());
    /// let created = tokio_test::block_on(store.create(sp)).unwrap();
    /// assert_eq!(created.config.sp_entity_id, "cloudfoundry-saml-login");
    /// assert_eq!(created.config.zone_id, "uaa");
    /// assert!(created.created.is_some());
    /// ```
    #[instrument(skip(self, provider), fields(entity_id = %provider.entity_id, zone_id = %provider.identity_zone_id))]
    pub async fn create(&self, mut provider: SamlServiceProvider) -> Result<SamlServiceProvider, ServiceProviderError> {
        validate(&mut provider)?;
        let id = self.ids.next_id();
        let now = self.clock.now();
        let row = Model {
            id: id.clone(),
            version: provider.version,
            created: now.into(),
            last_modified: now.into(),
            name: provider.name,
            entity_id: provider.entity_id,
            config: Some(provider.config.to_column()?),
            identity_zone_id: provider.identity_zone_id,
            active: provider.active,
        };
        if let Err(e) = self.repo.insert(row).await {
            if let ServiceProviderError::AlreadyExists(msg) = &e {
                warn!(reason = %msg, "service_provider_duplicate");
            }
            return Err(e);
        }
        let created = self.retrieve(&id).await?;
        info!(id = %created.id, "service_provider_created");
        Ok(created)
    }

    /// Replace name, config and active flag of the provider with `provider.id`,
    /// bumping its version.
    #[instrument(skip(self, provider), fields(id = %provider.id, zone_id = %provider.identity_zone_id))]
    pub async fn update(&self, mut provider: SamlServiceProvider) -> Result<SamlServiceProvider, ServiceProviderError> {
        validate(&mut provider)?;
        let id = provider.id.trim().to_string();
        if id.is_empty() {
            return Err(ServiceProviderError::InvalidArgument("service provider id must be set for update".into()));
        }
        let version = provider
            .version
            .checked_add(1)
            .ok_or_else(|| ServiceProviderError::InvalidArgument("service provider version overflow".into()))?;
        let changes = Changes {
            version,
            last_modified: self.clock.now().into(),
            name: provider.name,
            config: Some(provider.config.to_column()?),
            active: provider.active,
        };
        let rows = self.repo.update(&id, changes).await?;
        let updated = self.retrieve(&id).await?;
        info!(id = %updated.id, version = updated.version, rows, "service_provider_updated");
        Ok(updated)
    }

    /// Idempotent: deleting a missing id is not an error.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<(), ServiceProviderError> {
        let rows = self.repo.delete(id).await?;
        info!(rows, "service_provider_deleted");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn delete_by_entity_id(&self, entity_id: &str, zone_id: &str) -> Result<u64, ServiceProviderError> {
        let rows = self.repo.delete_by_entity_id(entity_id, zone_id).await?;
        info!(rows, "service_provider_deleted");
        Ok(rows)
    }

    /// Remove every provider of a zone being torn down.
    #[instrument(skip(self))]
    pub async fn delete_by_identity_zone(&self, zone_id: &str) -> Result<u64, ServiceProviderError> {
        let rows = self.repo.delete_by_zone(zone_id).await?;
        info!(rows, "service_providers_purged");
        Ok(rows)
    }
}

/// Checks applied before every write. The nested config is rewritten to carry
/// the record's own entity ID and zone.
pub fn validate(provider: &mut SamlServiceProvider) -> Result<(), ServiceProviderError> {
    if provider.identity_zone_id.trim().is_empty() {
        return Err(ServiceProviderError::IntegrityViolation("Identity zone ID must be set.".into()));
    }
    provider.config.sp_entity_id = provider.entity_id.clone();
    provider.config.zone_id = provider.identity_zone_id.clone();
    Ok(())
}

fn single_result(mut rows: Vec<Model>, what: &str) -> Result<Model, ServiceProviderError> {
    let found = rows.len();
    match rows.pop() {
        Some(row) if found == 1 => Ok(row),
        _ => Err(ServiceProviderError::incorrect_result_size(what, found)),
    }
}

fn map_rows(rows: Vec<Model>) -> Result<Vec<SamlServiceProvider>, ServiceProviderError> {
    rows.into_iter().map(SamlServiceProvider::try_from).collect()
}
