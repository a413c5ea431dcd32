use std::time::Duration;

use crate::db::{connect_options, DatabaseConfig};

#[test]
fn memory_sqlite_keeps_its_single_connection_alive() {
    let cfg = DatabaseConfig { url: "sqlite::memory:".into(), max_connections: 8, ..Default::default() };
    let opt = connect_options(&cfg);
    assert_eq!(opt.get_max_connections(), Some(1));
    assert_eq!(opt.get_min_connections(), Some(1));
    assert_eq!(opt.get_idle_timeout(), None);
    assert_eq!(opt.get_max_lifetime(), None);
}

#[test]
fn server_databases_get_configured_timeouts() {
    let cfg = DatabaseConfig { url: "postgres://localhost/accounts".into(), ..Default::default() };
    let opt = connect_options(&cfg);
    assert_eq!(opt.get_max_connections(), Some(cfg.max_connections));
    assert_eq!(opt.get_idle_timeout(), Some(Duration::from_secs(cfg.idle_timeout_secs)));
    assert_eq!(opt.get_max_lifetime(), Some(Duration::from_secs(cfg.max_lifetime_secs)));
}

#[tokio::test]
async fn memory_database_survives_between_queries() -> anyhow::Result<()> {
    let db = super::setup_test_db().await?;
    let ctx = super::ctx();
    crate::customer::insert(&db, super::new_customer("Alice", "1111111111"), &ctx).await?;
    assert!(crate::customer::find_by_mobile_number(&db, "1111111111").await?.is_some());
    Ok(())
}
