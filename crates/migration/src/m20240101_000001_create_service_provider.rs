//! Create `service_provider` table.
//! One row per SAML service provider, partitioned by identity zone.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServiceProvider::Table)
                    .if_not_exists()
                    .col(string_len(ServiceProvider::Id, 36).primary_key())
                    .col(integer(ServiceProvider::Version).not_null().default(0))
                    .col(timestamp_with_time_zone(ServiceProvider::Created).not_null())
                    .col(timestamp_with_time_zone(ServiceProvider::Lastmodified).not_null())
                    .col(string_len(ServiceProvider::Name, 255).not_null())
                    .col(string_len(ServiceProvider::EntityId, 255).not_null())
                    .col(text_null(ServiceProvider::Config))
                    .col(string_len(ServiceProvider::IdentityZoneId, 36).not_null())
                    .col(boolean(ServiceProvider::Active).not_null().default(true))
                    .to_owned(),
            )
            .await?;

        // An entity ID names at most one service provider per zone
        manager
            .create_index(
                Index::create()
                    .name("entity_in_zone")
                    .table(ServiceProvider::Table)
                    .col(ServiceProvider::EntityId)
                    .col(ServiceProvider::IdentityZoneId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ServiceProvider::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ServiceProvider {
    Table,
    Id,
    Version,
    Created,
    Lastmodified,
    Name,
    EntityId,
    Config,
    IdentityZoneId,
    Active,
}
