//! Configuration for staffdir
//!
//! Layered lowest to highest: built-in defaults, `~/.staffdir/config.toml`,
//! environment variables. CLI flags are applied on top by the binary.

use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DirectoryError, Result};
use crate::pagination::PageSize;

/// Default number of employees created by `seed`
pub const DEFAULT_SEED_COUNT: usize = 102;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    pub server: ServerSection,
    pub database: DatabaseSection,
    pub listing: ListingSection,
    pub seed: SeedSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    pub bind: SocketAddr,
    /// Allow any CORS origin instead of localhost only
    pub cors_permissive: bool,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 8000)),
            cors_permissive: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSection {
    pub url: String,
    pub max_connections: u32,
}

impl Default for DatabaseSection {
    fn default() -> Self {
        Self {
            url: "sqlite://staffdir.db".to_string(),
            max_connections: 5,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingSection {
    pub page_size: PageSize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedSection {
    pub count: usize,
}

impl Default for SeedSection {
    fn default() -> Self {
        Self {
            count: DEFAULT_SEED_COUNT,
        }
    }
}

impl DirectoryConfig {
    /// Load from the default config path (if present) plus environment.
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        let mut config = if path.exists() {
            Self::load_from(&path)?
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Self::default()
        };

        config.apply_overrides(|key| env::var(key).ok())?;
        Ok(config)
    }

    /// Parse a TOML config file. Missing sections keep their defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| DirectoryError::toml(path, e))
    }

    /// Get config file path: ~/.staffdir/config.toml
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".staffdir/config.toml")
    }

    /// Apply `STAFFDIR_*` / `DATABASE_URL` overrides from `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(bind) = lookup("STAFFDIR_BIND") {
            self.server.bind = bind
                .parse()
                .map_err(|_| DirectoryError::config(format!("STAFFDIR_BIND: invalid address '{}'", bind)))?;
        }

        if let Some(url) = lookup("DATABASE_URL") {
            self.database.url = url;
        }

        if let Some(size) = lookup("STAFFDIR_PAGE_SIZE") {
            let n: u32 = size.trim().parse().map_err(|_| {
                DirectoryError::config(format!("STAFFDIR_PAGE_SIZE: not a number '{}'", size))
            })?;
            self.listing.page_size = PageSize::new(n)?;
        }

        if let Some(count) = lookup("STAFFDIR_SEED_COUNT") {
            self.seed.count = count.trim().parse().map_err(|_| {
                DirectoryError::config(format!("STAFFDIR_SEED_COUNT: not a number '{}'", count))
            })?;
        }

        Ok(())
    }
}
