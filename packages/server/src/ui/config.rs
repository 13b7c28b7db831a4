//! Server configuration.

use std::path::PathBuf;

use clap::ValueEnum;

use crate::domain::RelayPolicy;

/// Which entry documents the static site serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SiteLayout {
    /// Files from the static directory; unmatched paths fall back to `index.html`.
    #[default]
    Spa,
    /// `/` serves `mobile.html`, `/screen` serves `index.html`.
    Lottery,
}

/// Runtime configuration assembled by the binary from CLI flags and env vars.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub site_layout: SiteLayout,
    pub policy: RelayPolicy,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            static_dir: PathBuf::from("public"),
            site_layout: SiteLayout::default(),
            policy: RelayPolicy::default(),
        }
    }
}
