use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

use crate::ticket::DrawMode;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub sync: SyncConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

fn default_port() -> u16 {
    8080
}

/// Ticket engine configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EngineConfig {
    /// Virtual "today" that synthesized timelines count back from.
    #[serde(default = "default_reference_date")]
    pub reference_date: NaiveDate,
    #[serde(default)]
    pub draw_mode: DrawMode,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            reference_date: default_reference_date(),
            draw_mode: DrawMode::default(),
        }
    }
}

fn default_reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 21).unwrap_or_default()
}

/// Pending sync counter configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SyncConfig {
    #[serde(default)]
    pub backend: SyncBackend,
    #[serde(default = "default_sync_path")]
    pub path: PathBuf,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            backend: SyncBackend::default(),
            path: default_sync_path(),
        }
    }
}

fn default_sync_path() -> PathBuf {
    PathBuf::from("courrier.db")
}

/// Where the pending sync counter is kept
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SyncBackend {
    #[default]
    Sqlite,
    Memory,
}

/// Sanitized config for API responses
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConfig {
    pub server: ServerConfig,
    pub engine: SanitizedEngineConfig,
    pub sync: SanitizedSyncConfig,
}

#[derive(Debug, Clone, Serialize)]
pub struct SanitizedEngineConfig {
    pub reference_date: String,
    pub draw_mode: String,
}

/// Sanitized sync config (storage path hidden)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedSyncConfig {
    pub backend: String,
}

impl From<&Config> for SanitizedConfig {
    fn from(config: &Config) -> Self {
        Self {
            server: config.server.clone(),
            engine: SanitizedEngineConfig {
                reference_date: config.engine.reference_date.to_string(),
                draw_mode: config.engine.draw_mode.as_str().to_string(),
            },
            sync: SanitizedSyncConfig {
                backend: match config.sync.backend {
                    SyncBackend::Sqlite => "sqlite".to_string(),
                    SyncBackend::Memory => "memory".to_string(),
                },
            },
        }
    }
}
