//! Runtime configuration from the environment (and `.env` via dotenvy)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::voyages::ScheduleStore;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    /// JSON timetable to load instead of the built-in reference table
    pub timetable_path: Option<PathBuf>,
}

impl Config {
    /// Read `HOST`, `PORT` and `TIMETABLE_PATH`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let host: IpAddr = host
            .parse()
            .with_context(|| format!("HOST must be an IP address, got '{host}'"))?;

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("PORT must be a number between 0 and 65535, got '{raw}'"))?,
            None => DEFAULT_PORT,
        };

        let timetable_path = lookup("TIMETABLE_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            host,
            port,
            timetable_path,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Build the timetable this instance serves
    pub fn load_schedule(&self) -> Result<ScheduleStore> {
        match &self.timetable_path {
            Some(path) => ScheduleStore::from_json_file(path)
                .with_context(|| format!("Failed to load timetable from {}", path.display())),
            None => Ok(ScheduleStore::reference()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: DEFAULT_PORT,
            timetable_path: None,
        }
    }
}
