use sea_orm::{DatabaseConnection, SqlErr};
use tracing::debug;

use configs::DatabaseConfig;
use models::service_provider::{self, Changes, Model};

use crate::service_provider::errors::ServiceProviderError;
use crate::service_provider::repository::ServiceProviderRepository;

/// SeaORM-backed repository implementation.
pub struct SeaOrmServiceProviderRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmServiceProviderRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }

    /// Open a pool from a validated `[database]` section.
    pub async fn connect(cfg: &DatabaseConfig) -> anyhow::Result<Self> {
        let db = models::db::connect_with_config(cfg).await?;
        Ok(Self { db })
    }
}

#[async_trait::async_trait]
impl ServiceProviderRepository for SeaOrmServiceProviderRepository {
    async fn insert(&self, row: Model) -> Result<(), ServiceProviderError> {
        match service_provider::insert_row(row).exec_without_returning(&self.db).await {
            Ok(_) => Ok(()),
            Err(e) => match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(msg)) => Err(ServiceProviderError::AlreadyExists(msg)),
                _ => Err(e.into()),
            },
        }
    }

    async fn update(&self, id: &str, changes: Changes) -> Result<u64, ServiceProviderError> {
        let res = service_provider::update_by_id(id, changes).exec(&self.db).await?;
        debug!(%id, rows = res.rows_affected, "service_provider_row_updated");
        Ok(res.rows_affected)
    }

    async fn delete(&self, id: &str) -> Result<u64, ServiceProviderError> {
        Ok(service_provider::delete_by_id(id).exec(&self.db).await?.rows_affected)
    }

    async fn delete_by_entity_id(&self, entity_id: &str, zone_id: &str) -> Result<u64, ServiceProviderError> {
        Ok(service_provider::delete_by_entity_id(entity_id, zone_id).exec(&self.db).await?.rows_affected)
    }

    async fn delete_by_zone(&self, zone_id: &str) -> Result<u64, ServiceProviderError> {
        Ok(service_provider::delete_in_zone(zone_id).exec(&self.db).await?.rows_affected)
    }

    async fn find_by_id(&self, id: &str) -> Result<Vec<Model>, ServiceProviderError> {
        Ok(service_provider::select_by_id(id).all(&self.db).await?)
    }

    async fn find_by_entity_id(&self, entity_id: &str, zone_id: &str) -> Result<Vec<Model>, ServiceProviderError> {
        Ok(service_provider::select_by_entity_id(entity_id, zone_id).all(&self.db).await?)
    }

    async fn find_by_zone(&self, zone_id: &str, active_only: bool) -> Result<Vec<Model>, ServiceProviderError> {
        Ok(service_provider::select_in_zone(zone_id, active_only).all(&self.db).await?)
    }
}
