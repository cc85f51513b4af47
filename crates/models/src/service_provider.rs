//! `service_provider` table: one SAML service provider per row, partitioned by
//! identity zone. Columns keep the positional order
//! `id, version, created, lastmodified, name, entity_id, config, identity_zone_id, active`.

use sea_orm::entity::prelude::*;
use sea_orm::{sea_query::Expr, DeleteMany, Insert, Select, Set, UpdateMany};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "service_provider")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub version: i32,
    pub created: DateTimeWithTimeZone,
    #[sea_orm(column_name = "lastmodified")]
    pub last_modified: DateTimeWithTimeZone,
    pub name: String,
    pub entity_id: String,
    /// Serialized SAML service provider definition (JSON text).
    #[sea_orm(column_type = "Text", nullable)]
    pub config: Option<String>,
    pub identity_zone_id: String,
    pub active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Mutable columns written by an update; everything else is fixed at insert.
#[derive(Clone, Debug, PartialEq)]
pub struct Changes {
    pub version: i32,
    pub last_modified: DateTimeWithTimeZone,
    pub name: String,
    pub config: Option<String>,
    pub active: bool,
}

/// Insert carrying all nine columns, whatever the row's values are.
pub fn insert_row(row: Model) -> Insert<ActiveModel> {
    Entity::insert(ActiveModel {
        id: Set(row.id),
        version: Set(row.version),
        created: Set(row.created),
        last_modified: Set(row.last_modified),
        name: Set(row.name),
        entity_id: Set(row.entity_id),
        config: Set(row.config),
        identity_zone_id: Set(row.identity_zone_id),
        active: Set(row.active),
    })
}

pub fn select_by_id(id: &str) -> Select<Entity> {
    Entity::find().filter(Column::Id.eq(id))
}

pub fn select_by_entity_id(entity_id: &str, zone_id: &str) -> Select<Entity> {
    Entity::find()
        .filter(Column::EntityId.eq(entity_id))
        .filter(Column::IdentityZoneId.eq(zone_id))
}

pub fn select_in_zone(zone_id: &str, active_only: bool) -> Select<Entity> {
    let select = Entity::find().filter(Column::IdentityZoneId.eq(zone_id));
    if active_only {
        select.filter(Column::Active.eq(true))
    } else {
        select
    }
}

pub fn update_by_id(id: &str, changes: Changes) -> UpdateMany<Entity> {
    Entity::update_many()
        .col_expr(Column::Version, Expr::value(changes.version))
        .col_expr(Column::LastModified, Expr::value(changes.last_modified))
        .col_expr(Column::Name, Expr::value(changes.name))
        .col_expr(Column::Config, Expr::value(changes.config))
        .col_expr(Column::Active, Expr::value(changes.active))
        .filter(Column::Id.eq(id))
}

pub fn delete_by_id(id: &str) -> DeleteMany<Entity> {
    Entity::delete_many().filter(Column::Id.eq(id))
}

pub fn delete_by_entity_id(entity_id: &str, zone_id: &str) -> DeleteMany<Entity> {
    Entity::delete_many()
        .filter(Column::EntityId.eq(entity_id))
        .filter(Column::IdentityZoneId.eq(zone_id))
}

pub fn delete_in_zone(zone_id: &str) -> DeleteMany<Entity> {
    Entity::delete_many().filter(Column::IdentityZoneId.eq(zone_id))
}
