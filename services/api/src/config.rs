use std::net::SocketAddr;

use anyhow::{Context, Result};
use devurn_urn::{DetectPolicy, HexTieBreak, PenPairTieBreak};

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub log_level: String,
    pub detect_policy: DetectPolicy,
    pub cors_permissive: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let listen_addr = std::env::var("DEVURN_LISTEN_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .context("DEVURN_LISTEN_ADDR must be a socket address (host:port).")?;

        let log_level = std::env::var("DEVURN_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let bare_hex16 = std::env::var("DEVURN_DETECT_HEX16")
            .ok()
            .map(|v| v.parse::<HexTieBreak>())
            .transpose()
            .context("DEVURN_DETECT_HEX16 must be 'mac' or 'ow'.")?
            .unwrap_or_default();

        let pen_pair = std::env::var("DEVURN_DETECT_PEN_PAIR")
            .ok()
            .map(|v| v.parse::<PenPairTieBreak>())
            .transpose()
            .context("DEVURN_DETECT_PEN_PAIR must be 'org' or 'os'.")?
            .unwrap_or_default();

        let cors_permissive = std::env::var("DEVURN_CORS_PERMISSIVE")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(true);

        Ok(Self {
            listen_addr,
            log_level,
            detect_policy: DetectPolicy {
                bare_hex16,
                pen_pair,
            },
            cors_permissive,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            log_level: "info".to_string(),
            detect_policy: DetectPolicy::default(),
            cors_permissive: true,
        }
    }
}
