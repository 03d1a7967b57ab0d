use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use boxops_core::config::{required_var, var_or};

/// API service configuration loaded from environment variables.
#[derive(Debug)]
pub struct ApiConfig {
    /// PostgreSQL connection URL. Env var: `DATABASE_URL`.
    pub database_url: String,
    /// Listen address (default 0.0.0.0). Env var: `BIND_ADDR`.
    pub bind_addr: IpAddr,
    /// TCP port for the HTTP server (default 3000). Env var: `PORT`.
    pub port: u16,
    /// Upper bound on pooled connections (default 10). Env var: `DB_MAX_CONNECTIONS`.
    pub db_max_connections: u32,
    /// Apply pending migrations before serving (default false). Env var: `RUN_MIGRATIONS`.
    pub run_migrations: bool,
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            database_url: required_var("DATABASE_URL")?,
            bind_addr: var_or("BIND_ADDR", IpAddr::V4(Ipv4Addr::UNSPECIFIED))?,
            port: var_or("PORT", 3000)?,
            db_max_connections: var_or("DB_MAX_CONNECTIONS", 10)?,
            run_migrations: var_or("RUN_MIGRATIONS", false)?,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}
