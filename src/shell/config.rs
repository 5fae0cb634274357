use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub http_addr: SocketAddr,
    pub carryover_interval: Duration,
    pub token_cache_capacity: u64,
}

fn var_or<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .with_context(|| format!("{name} has an invalid value: {raw}")),
        Err(_) => Ok(default),
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let http_addr = var_or("ATTENDANCE_HTTP_ADDR", SocketAddr::from(([0, 0, 0, 0], 8080)))?;
        let carryover_secs: u64 = var_or("ATTENDANCE_CARRYOVER_INTERVAL_SECS", 86_400)?;
        if carryover_secs == 0 {
            anyhow::bail!("ATTENDANCE_CARRYOVER_INTERVAL_SECS must be greater than zero");
        }
        let token_cache_capacity = var_or("ATTENDANCE_TOKEN_CACHE_CAPACITY", 100_000)?;

        Ok(Config {
            http_addr,
            carryover_interval: Duration::from_secs(carryover_secs),
            token_cache_capacity,
        })
    }
}
