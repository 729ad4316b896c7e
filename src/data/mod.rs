//! Data sources: presence CSV and users XML, behind a TTL cache.

pub mod cache;
pub mod csv_loader;
pub mod xml_loader;

pub use cache::TtlCache;

use crate::config::Config;
use crate::errors::AppResult;
use crate::models::{PresenceData, UserDirectory};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

/// Read-only access to both data files, shared by the CLI and the HTTP layer.
pub struct DataStore {
    csv_path: PathBuf,
    xml_path: PathBuf,
    presence: TtlCache<PresenceData>,
    users: TtlCache<UserDirectory>,
}

impl DataStore {
    pub fn new(csv_path: impl Into<PathBuf>, xml_path: impl Into<PathBuf>, ttl: Duration) -> Self {
        Self {
            csv_path: csv_path.into(),
            xml_path: xml_path.into(),
            presence: TtlCache::new(ttl),
            users: TtlCache::new(ttl),
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(
            cfg.data_csv_path(),
            cfg.data_xml_path(),
            Duration::from_secs(cfg.cache_ttl_secs),
        )
    }

    pub fn csv_path(&self) -> &Path {
        &self.csv_path
    }

    pub fn xml_path(&self) -> &Path {
        &self.xml_path
    }

    pub fn presence(&self) -> AppResult<Arc<PresenceData>> {
        self.presence
            .get_or_load(|| csv_loader::load_presence(&self.csv_path))
    }

    pub fn users(&self) -> AppResult<Arc<UserDirectory>> {
        self.users.get_or_load(|| xml_loader::load_users(&self.xml_path))
    }
}
