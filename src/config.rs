//! Configuration management for codepush-fs
//!
//! Maps every storage root to a base directory on the local disk.

use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::storage::Directory;

const ENV_PREFIX: &str = "CODEPUSH_FS";
const DEFAULT_CONFIG_FILE: &str = "config";
const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Complete configuration
#[derive(Debug, Deserialize, Clone)]
pub struct CacheConfig {
    /// Log filter used when `RUST_LOG` is unset
    pub log_level: String,

    pub storage: StorageRoots,
}

/// Base directory for each storage root
#[derive(Debug, Deserialize, Clone)]
pub struct StorageRoots {
    pub documents: PathBuf,
    pub data: PathBuf,
    pub library: PathBuf,
    pub cache: PathBuf,
    pub external: PathBuf,
    pub external_storage: PathBuf,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            storage: StorageRoots::under(Path::new("./storage")),
        }
    }
}

impl CacheConfig {
    /// Load configuration from `path` (or the default file) with
    /// environment overrides.
    ///
    /// An explicit `path` must exist; the default file is optional.
    pub fn load_from(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let settings = Self::with_defaults(Config::builder())?
            .add_source(file)
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        let config: CacheConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn with_defaults(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError> {
        let defaults = Self::default();
        let mut builder = builder.set_default("log_level", defaults.log_level)?;

        for directory in Directory::ALL {
            let key = format!("storage.{}", StorageRoots::key(directory));
            let value = defaults.storage.root_for(directory).to_string_lossy().to_string();
            builder = builder.set_default(key, value)?;
        }

        Ok(builder)
    }

    /// Validation for all configuration values.
    ///
    /// `log_level` takes env_logger directives (`info`,
    /// `warn,codepush_fs=debug`). Each directive must spell out its level;
    /// a bare module name is rejected.
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        let directives = self.log_level.split('/').next().unwrap_or_default();
        for directive in directives.split(',').map(str::trim).filter(|d| !d.is_empty()) {
            let level = directive.rsplit('=').next().unwrap_or(directive);
            if !LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
                return Err(config::ConfigError::Message(format!(
                    "log_level directive `{directive}` must end in one of {LOG_LEVELS:?}"
                )));
            }
        }

        for directory in Directory::ALL {
            if self.storage.root_for(directory).as_os_str().is_empty() {
                return Err(config::ConfigError::Message(format!(
                    "storage.{} cannot be empty",
                    StorageRoots::key(directory)
                )));
            }
        }

        Ok(())
    }
}

impl StorageRoots {
    /// One subdirectory per root below `base`
    pub fn under(base: &Path) -> Self {
        Self {
            documents: base.join("documents"),
            data: base.join("data"),
            library: base.join("library"),
            cache: base.join("cache"),
            external: base.join("external"),
            external_storage: base.join("external_storage"),
        }
    }

    /// Base directory configured for `directory`
    pub fn root_for(&self, directory: Directory) -> &Path {
        match directory {
            Directory::Documents => &self.documents,
            Directory::Data => &self.data,
            Directory::Library => &self.library,
            Directory::Cache => &self.cache,
            Directory::External => &self.external,
            Directory::ExternalStorage => &self.external_storage,
        }
    }

    fn key(directory: Directory) -> &'static str {
        match directory {
            Directory::Documents => "documents",
            Directory::Data => "data",
            Directory::Library => "library",
            Directory::Cache => "cache",
            Directory::External => "external",
            Directory::ExternalStorage => "external_storage",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = CacheConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.storage.root_for(Directory::Data), Path::new("./storage/data"));
    }

    #[test]
    fn test_load_from_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "log_level = \"debug\"\n[storage]\ndata = \"/var/lib/app/data\"").unwrap();

        let config = CacheConfig::load_from(Some(file.path())).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.storage.data, PathBuf::from("/var/lib/app/data"));
        assert_eq!(config.storage.cache, PathBuf::from("./storage/cache"));
    }

    #[test]
    fn test_missing_explicit_file_fails() {
        let result = CacheConfig::load_from(Some(Path::new("/nonexistent/codepush.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_unknown_log_level() {
        let config = CacheConfig {
            log_level: "loud".into(),
            ..CacheConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_module_directives() {
        for filter in ["warn,codepush_fs=debug", "codepush_fs::storage=trace", "INFO"] {
            let config = CacheConfig {
                log_level: filter.into(),
                ..CacheConfig::default()
            };
            assert!(config.validate().is_ok(), "{filter}");
        }

        let config = CacheConfig {
            log_level: "codepush_fs=loud".into(),
            ..CacheConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_root() {
        let mut config = CacheConfig::default();
        config.storage.library = PathBuf::new();
        assert!(config.validate().is_err());
    }
}
