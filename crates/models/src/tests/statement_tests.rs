use crate::service_provider::{self, Changes};
use chrono::{TimeZone, Utc};
use sea_orm::{DbBackend, QueryTrait};

#[test]
fn zone_listing_adds_active_filter_only_when_asked() {
    let all = service_provider::select_in_zone("uaa", false).build(DbBackend::Postgres).to_string();
    let active = service_provider::select_in_zone("uaa", true).build(DbBackend::Postgres).to_string();

    assert!(all.contains(r#""identity_zone_id" = 'uaa'"#));
    assert!(!all.contains(r#""active" = TRUE"#));
    assert!(active.contains(r#""service_provider"."active" = TRUE"#));
}

#[test]
fn select_lists_all_nine_columns_in_order() {
    let sql = service_provider::select_by_id("sp-1").build(DbBackend::Postgres).to_string();
    let columns = [
        "\"id\"", "\"version\"", "\"created\"", "\"lastmodified\"", "\"name\"",
        "\"entity_id\"", "\"config\"", "\"identity_zone_id\"", "\"active\"",
    ];
    let mut last = 0;
    for col in columns {
        let at = sql[last..].find(col).map(|i| i + last);
        assert!(at.is_some(), "{col} missing or out of order in {sql}");
        last = at.unwrap_or(last);
    }
    assert!(sql.ends_with(r#"WHERE "service_provider"."id" = 'sp-1'"#));
}

#[test]
fn update_touches_only_mutable_columns() {
    let changes = Changes {
        version: 3,
        last_modified: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap().into(),
        name: "renamed".into(),
        config: Some("{}".into()),
        active: false,
    };
    let sql = service_provider::update_by_id("sp-1", changes).build(DbBackend::Postgres).to_string();
    assert!(sql.starts_with(r#"UPDATE "service_provider" SET "version" = 3"#));
    for col in ["\"lastmodified\" =", "\"name\" = 'renamed'", "\"config\" = '{}'", "\"active\" = FALSE"] {
        assert!(sql.contains(col), "{col} missing in {sql}");
    }
    assert!(!sql.contains("\"created\""));
    assert!(!sql.contains("\"entity_id\""));
    assert!(sql.ends_with(r#"WHERE "service_provider"."id" = 'sp-1'"#));
}

#[test]
fn deletes_are_scoped() {
    let by_origin = service_provider::delete_by_entity_id("cloudfoundry-saml-login", "uaa")
        .build(DbBackend::Postgres)
        .to_string();
    assert!(by_origin.contains(r#""entity_id" = 'cloudfoundry-saml-login'"#));
    assert!(by_origin.contains(r#""identity_zone_id" = 'uaa'"#));

    let by_zone = service_provider::delete_in_zone("uaa").build(DbBackend::Postgres).to_string();
    assert_eq!(by_zone, r#"DELETE FROM "service_provider" WHERE "service_provider"."identity_zone_id" = 'uaa'"#);
}

#[test]
fn insert_writes_every_column() {
    let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let row = service_provider::Model {
        id: "sp-1".into(),
        version: 0,
        created: at.into(),
        last_modified: at.into(),
        name: "Login".into(),
        entity_id: "cloudfoundry-saml-login".into(),
        config: None,
        identity_zone_id: "uaa".into(),
        active: true,
    };
    let sql = service_provider::insert_row(row).build(DbBackend::Postgres).to_string();
    assert!(sql.starts_with(
        r#"INSERT INTO "service_provider" ("id", "version", "created", "lastmodified", "name", "entity_id", "config", "identity_zone_id", "active")"#
    ), "{sql}");
    assert!(sql.contains("NULL"));
}
