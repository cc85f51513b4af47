use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Zone listings filter on identity_zone_id (and active)
        manager
            .create_index(
                Index::create()
                    .name("idx_service_provider_zone")
                    .table(ServiceProvider::Table)
                    .col(ServiceProvider::IdentityZoneId)
                    .col(ServiceProvider::Active)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_service_provider_zone").table(ServiceProvider::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ServiceProvider { Table, IdentityZoneId, Active }
