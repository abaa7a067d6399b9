//! Configuration management for fanlog

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::logging::{
    ConsoleSink, Logger, MemorySink, OverflowPolicy, SinkHandle, DEFAULT_CAPACITY,
};

/// Logger configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Logger name, used verbatim; `root` when unset or empty
    #[serde(default)]
    pub name: Option<String>,

    /// Records kept by the in-memory sink (default: 100)
    #[serde(default = "default_memory_capacity")]
    pub memory_capacity: usize,

    /// Drop new records instead of evicting old ones once the memory sink is full
    #[serde(default)]
    pub memory_drop_when_full: bool,

    /// Attach a console sink on stdout (default: true)
    #[serde(default = "default_console")]
    pub console: bool,

    /// Color console lines by level (default: false)
    #[serde(default)]
    pub color: bool,
}

fn default_memory_capacity() -> usize {
    DEFAULT_CAPACITY
}

fn default_console() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: None,
            memory_capacity: default_memory_capacity(),
            memory_drop_when_full: false,
            console: default_console(),
            color: false,
        }
    }
}

impl Config {
    /// Load configuration from the default file, or return defaults if not found
    pub fn load() -> Result<Self> {
        Self::load_from(&config_file_path())
    }

    /// Load configuration from `path`, or return defaults if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path).context("Failed to read config file")?;
            Self::from_toml_str(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config file")
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content).context("Failed to write config file")?;
        Ok(())
    }

    /// Build a logger from this configuration
    ///
    /// The memory sink is always attached last and is returned as well so the
    /// caller can inspect retained records.
    pub fn build_logger(&self) -> (Logger, Arc<MemorySink>) {
        let mut logger = self
            .name
            .as_deref()
            .filter(|name| !name.is_empty())
            .map_or_else(Logger::new, |name| Logger::named(name));

        if self.console {
            let console = ConsoleSink::stdout();
            let console = if self.color { console.colored() } else { console };
            logger.add_sink(Arc::new(console));
        }

        let policy = if self.memory_drop_when_full {
            OverflowPolicy::DropNewest
        } else {
            OverflowPolicy::EvictOldest
        };
        let memory = Arc::new(MemorySink::with_policy(self.memory_capacity, policy));
        logger.add_sink(Arc::clone(&memory) as SinkHandle);

        (logger, memory)
    }
}

/// Directory holding fanlog's `config.toml` (~/.fanlog)
///
/// Without a home directory the binary still runs, reading `./.fanlog` instead.
pub fn config_dir() -> PathBuf {
    try_config_dir().unwrap_or_else(|| {
        tracing::warn!("Could not determine home directory, using current directory for config");
        PathBuf::from(".fanlog")
    })
}

/// `~/.fanlog`, or None when no home directory is known
pub fn try_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".fanlog"))
}

/// The file `Config::load` reads
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.name, None);
        assert_eq!(config.memory_capacity, 100);
        assert!(config.console);
        assert!(!config.color);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_toml() {
        let config = Config::from_toml_str("name = \"ingest\"\nmemory_capacity = 10\n").unwrap();
        assert_eq!(config.name.as_deref(), Some("ingest"));
        assert_eq!(config.memory_capacity, 10);
        assert!(config.console);
    }

    #[test]
    fn test_invalid_toml() {
        assert!(Config::from_toml_str("memory_capacity = \"lots\"").is_err());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        let mut config = Config::default();
        config.name = Some("api".to_string());
        config.color = true;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_from(&temp_dir.path().join("missing.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_build_logger() {
        let config = Config {
            name: Some("svc::Ingest".to_string()),
            memory_capacity: 5,
            memory_drop_when_full: false,
            console: false,
            color: false,
        };

        let (logger, memory) = config.build_logger();
        assert_eq!(logger.name(), "svc::Ingest");
        assert_eq!(logger.sink_count(), 1);
        assert_eq!(memory.capacity(), 5);

        logger.info("ready");
        assert_eq!(memory.get(0).unwrap().raw_msg(), "ready");
    }

    #[test]
    fn test_configured_name_is_kept_verbatim() {
        let config =
            Config::from_toml_str("name = \"http::client<Tls>\"\nconsole = false\n").unwrap();
        let (logger, memory) = config.build_logger();
        assert_eq!(logger.name(), "http::client<Tls>");

        logger.warn("retrying");
        let record = memory.get(0).unwrap();
        assert_eq!(record.logger_name(), "http::client<Tls>");
        assert!(record.log().contains("]:[http::client<Tls>] retrying"));
    }

    #[test]
    fn test_empty_configured_name_is_root() {
        let config = Config::from_toml_str("name = \"\"\nconsole = false\n").unwrap();
        assert_eq!(config.build_logger().0.name(), "root");
    }

    #[test]
    fn test_huge_memory_capacity_builds() {
        let config = Config::from_toml_str(
            "memory_capacity = 9223372036854775807\nconsole = false\n",
        )
        .unwrap();
        let (logger, memory) = config.build_logger();
        assert_eq!(memory.capacity(), 9_223_372_036_854_775_807);

        logger.info("one");
        assert_eq!(memory.size(), 1);
    }

    #[test]
    fn test_memory_drop_when_full() {
        let config = Config::from_toml_str(
            "memory_capacity = 2\nmemory_drop_when_full = true\nconsole = false\n",
        )
        .unwrap();
        let (logger, memory) = config.build_logger();
        assert_eq!(memory.policy(), OverflowPolicy::DropNewest);

        logger.info("a");
        logger.info("b");
        logger.info("c");
        let kept: Vec<String> = memory
            .records()
            .iter()
            .map(|r| r.raw_msg().to_string())
            .collect();
        assert_eq!(kept, vec!["a", "b"]);
    }

    #[test]
    fn test_build_logger_with_console() {
        let (logger, _memory) = Config::default().build_logger();
        assert_eq!(logger.name(), "root");
        assert_eq!(logger.sink_count(), 2);
    }

    #[test]
    fn test_config_dir_does_not_panic() {
        let dir = config_dir();
        assert!(dir.ends_with(".fanlog"));
        assert!(config_file_path().ends_with("config.toml"));
    }
}
