use std::net::SocketAddr;

use anyhow::Context;

pub const DEFAULT_ADDR: &str = "0.0.0.0:8376";
pub const ADDR_VAR: &str = "ROOMKEEPER_ADDR";

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
}

impl Config {
    /// Reads `.env` if there is one, then the environment.
    pub fn from_env() -> anyhow::Result<Config> {
        dotenv::dotenv().ok();
        Self::from_addr(dotenv::var(ADDR_VAR).ok().as_deref())
    }

    pub fn from_addr(addr: Option<&str>) -> anyhow::Result<Config> {
        let addr = addr.unwrap_or(DEFAULT_ADDR);
        Ok(
            Config {
                addr: addr.parse::<SocketAddr>().with_context(|| format!("{ADDR_VAR}={addr} is not a socket address"))?,
            }
        )
    }
}
