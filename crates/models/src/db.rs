use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

pub use configs::DatabaseConfig;

/// Pool options derived from a `[database]` section.
pub fn connect_options(cfg: &DatabaseConfig) -> ConnectOptions {
    let mut opts = ConnectOptions::new(cfg.url.clone());
    opts.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(cfg.connect_timeout())
        .acquire_timeout(cfg.acquire_timeout())
        .idle_timeout(cfg.idle_timeout())
        .max_lifetime(cfg.max_lifetime())
        .sqlx_logging(cfg.sqlx_logging);
    opts
}

/// Validate the section and open a pool with it.
pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    cfg.validate()?;
    let db = Database::connect(connect_options(cfg)).await?;
    info!(
        max_connections = cfg.max_connections,
        min_connections = cfg.min_connections,
        "database_connected"
    );
    Ok(db)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::ConnectionTrait;

    #[test]
    fn options_follow_the_config() {
        let cfg = DatabaseConfig { url: "postgres://localhost/uaa".into(), max_connections: 7, ..Default::default() };
        let opts = connect_options(&cfg);
        assert_eq!(opts.get_url(), "postgres://localhost/uaa");
        assert_eq!(opts.get_max_connections(), Some(7));
        assert_eq!(opts.get_min_connections(), Some(2));
        assert_eq!(opts.get_acquire_timeout(), Some(cfg.acquire_timeout()));
    }

    #[tokio::test]
    async fn invalid_config_is_rejected_before_connecting() {
        let cfg = DatabaseConfig::default();
        assert!(connect_with_config(&cfg).await.is_err());
    }

    #[tokio::test]
    async fn connects_to_sqlite() -> anyhow::Result<()> {
        let cfg = DatabaseConfig {
            url: "sqlite::memory:".into(),
            max_connections: 1,
            min_connections: 1,
            ..Default::default()
        };
        let db = connect_with_config(&cfg).await?;
        assert_eq!(db.get_database_backend(), sea_orm::DatabaseBackend::Sqlite);
        Ok(())
    }
}
