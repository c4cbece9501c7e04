use crate::error::{Result, SitodoError};
use crate::motivation::{default_few_items_threshold, MotivationConfig};
use crate::paths;
use crate::store::{MemoryStore, RedbStore, TodoListStore};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// ServerConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

// ---------------------------------------------------------------------------
// StorageConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
    #[default]
    Redb,
    Memory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,
    /// Database file, relative to the project root unless absolute.
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

fn default_store_path() -> PathBuf {
    PathBuf::from(paths::DEFAULT_DB_FILE)
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            path: default_store_path(),
        }
    }
}

/// Open the store described by `storage`.
pub fn open_store(root: &Path, storage: &StorageConfig) -> Result<Arc<dyn TodoListStore>> {
    match storage.backend {
        StorageBackend::Redb => {
            let path = paths::store_path(root, storage);
            Ok(Arc::new(RedbStore::open(&path)?))
        }
        StorageBackend::Memory => Ok(Arc::new(MemoryStore::new())),
    }
}

// ---------------------------------------------------------------------------
// Config (top-level)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub motivation: MotivationConfig,
}

impl Config {
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            return Err(SitodoError::NotInitialized);
        }
        let data = std::fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&data)?;
        Ok(cfg)
    }

    /// Like [`Config::load`], but falls back to defaults when the project has
    /// not been initialized.
    pub fn load_or_default(root: &Path) -> Result<Self> {
        match Self::load(root) {
            Err(SitodoError::NotInitialized) => Ok(Self::default()),
            other => other,
        }
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::config_path(root);
        let data = serde_yaml::to_string(self)?;
        crate::io::atomic_write(&path, data.as_bytes())
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();
        let m = &self.motivation;

        let messages = [
            ("empty_message", &m.empty_message),
            ("no_finished_message", &m.no_finished_message),
            ("half_finished_message", &m.half_finished_message),
            ("some_finished_message", &m.some_finished_message),
            ("all_finished_message", &m.all_finished_message),
            ("few_items_message", &m.few_items_message),
            ("many_items_message", &m.many_items_message),
        ];
        for (key, value) in messages {
            if value.trim().is_empty() {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Warning,
                    message: format!("motivation.{key} is empty"),
                });
            }
        }

        if m.many_items_threshold == 0 {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: "motivation.many_items_threshold is 0: every non-empty list counts as many items"
                    .to_string(),
            });
        }

        if m.few_items_threshold != default_few_items_threshold() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: format!(
                    "motivation.few_items_threshold={} has no effect on message selection",
                    m.few_items_threshold
                ),
            });
        }

        if self.storage.backend == StorageBackend::Redb && self.storage.path.as_os_str().is_empty() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: "storage.path is empty: the redb backend needs a database file".to_string(),
            });
        }

        if self.server.port == 0 {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: "server.port is 0: the OS will pick a free port".to_string(),
            });
        }

        warnings
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let yaml = serde_yaml::to_string(&cfg).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, cfg);
        assert_eq!(parsed.server.port, 8080);
        assert_eq!(parsed.motivation.many_items_threshold, 10);
    }

    #[test]
    fn empty_yaml_uses_defaults() {
        let cfg: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn storage_backend_yaml_is_snake_case() {
        let cfg: Config = serde_yaml::from_str("storage:\n  backend: memory\n").unwrap();
        assert_eq!(cfg.storage.backend, StorageBackend::Memory);
        assert_eq!(cfg.storage.path, PathBuf::from(".sitodo/sitodo.db"));
    }

    #[test]
    fn load_missing_is_not_initialized() {
        let dir = TempDir::new().unwrap();
        let err = Config::load(dir.path()).unwrap_err();
        assert!(matches!(err, SitodoError::NotInitialized));
    }

    #[test]
    fn load_or_default_tolerates_missing_file() {
        let dir = TempDir::new().unwrap();
        let cfg = Config::load_or_default(dir.path()).unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn save_then_load() {
        let dir = TempDir::new().unwrap();
        let mut cfg = Config::default();
        cfg.server.port = 9000;
        cfg.motivation.few_items_message = "Just a few.".into();
        cfg.save(dir.path()).unwrap();

        let loaded = Config::load(dir.path()).unwrap();
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn validate_default_config_no_warnings() {
        assert!(Config::default().validate().is_empty());
    }

    #[test]
    fn validate_empty_message_warning() {
        let mut cfg = Config::default();
        cfg.motivation.half_finished_message = "  ".into();
        let warnings = cfg.validate();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message.contains("half_finished_message"));
    }

    #[test]
    fn validate_flags_unused_few_items_threshold() {
        let mut cfg = Config::default();
        cfg.motivation.few_items_threshold = 3;
        let warnings = cfg.validate();
        assert!(warnings
            .iter()
            .any(|w| w.message.contains("few_items_threshold=3")));
    }

    #[test]
    fn validate_zero_many_threshold_warning() {
        let mut cfg = Config::default();
        cfg.motivation.many_items_threshold = 0;
        assert!(cfg
            .validate()
            .iter()
            .any(|w| w.message.contains("many_items_threshold")));
    }

    #[test]
    fn validate_empty_redb_path_is_error() {
        let mut cfg = Config::default();
        cfg.storage.path = PathBuf::new();
        let warnings = cfg.validate();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].level, WarnLevel::Error);
        assert!(warnings[0].message.contains("storage.path"));

        cfg.storage.backend = StorageBackend::Memory;
        assert!(cfg.validate().is_empty());
    }

    #[test]
    fn open_store_memory_backend() {
        let dir = TempDir::new().unwrap();
        let storage = StorageConfig {
            backend: StorageBackend::Memory,
            ..StorageConfig::default()
        };
        let store = open_store(dir.path(), &storage).unwrap();
        assert!(store.find(1).unwrap().is_none());
        assert!(!dir.path().join(".sitodo").exists());
    }

    #[test]
    fn open_store_redb_backend_creates_file() {
        let dir = TempDir::new().unwrap();
        let store = open_store(dir.path(), &StorageConfig::default()).unwrap();
        assert!(store.find(1).unwrap().is_none());
        assert!(dir.path().join(".sitodo/sitodo.db").exists());
    }
}
