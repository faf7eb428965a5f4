use std::env;

use anyhow::{Context, Result};
use deadpool_postgres::{Config, Pool, PoolConfig, Runtime};
use tokio_postgres::NoTls;

/// Builds the process-wide connection pool. Connections are opened lazily, one
/// per borrowed session; the pool itself lives for the whole process.
pub fn get_pg_pool() -> Result<Pool> {
    let mut cfg = Config::new();
    cfg.host = Some(env::var("PG_HOST").unwrap_or_else(|_| "0.0.0.0".into()));
    cfg.port = env::var("PG_PORT")
        .ok()
        .map(|p| p.parse())
        .transpose()
        .context("PG_PORT must be a port number")?;
    cfg.user = Some(env::var("PG_USER").unwrap_or_else(|_| "app".into()));
    cfg.password = Some(env::var("PG_PASS").unwrap_or_else(|_| "pass".into()));
    cfg.dbname = Some(env::var("PG_DB").unwrap_or_else(|_| "social".into()));

    if cfg.pool.is_none() {
        cfg.pool = Some(PoolConfig::default());
    }
    if let Some(ref mut pcfg) = cfg.pool {
        pcfg.max_size = 16;
    }

    cfg.create_pool(Some(Runtime::Tokio1), NoTls)
        .context("failed to create postgres pool")
}

/// Listening address, `PORT` env override with the historical default.
pub fn bind_address() -> String {
    let port = env::var("PORT").unwrap_or_else(|_| "9999".into());
    format!("0.0.0.0:{port}")
}
