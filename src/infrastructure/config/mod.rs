use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::domain::error::{AppError, Result};
use crate::domain::import_config::ImportConfig;

pub const DEFAULT_CONFIG_FILE: &str = "payroll-import.toml";
pub const ENV_PREFIX: &str = "PAYROLL_IMPORT_";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// tracing filter directive used when RUST_LOG is unset
    pub log_level: String,
    pub import: ImportConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            import: ImportConfig::default(),
        }
    }
}

pub struct ConfigService;

impl ConfigService {
    /// Defaults, then `payroll-import.toml` (if present), then `PAYROLL_IMPORT_*`
    pub fn load() -> Result<AppConfig> {
        Self::extract(Path::new(DEFAULT_CONFIG_FILE))
    }

    /// Same layering, but the named file must exist
    pub fn load_from(path: &Path) -> Result<AppConfig> {
        if !path.is_file() {
            return Err(AppError::ConfigError(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        Self::extract(path)
    }

    fn extract(path: &Path) -> Result<AppConfig> {
        let config: AppConfig = Self::figment(path)
            .extract()
            .map_err(|e| AppError::ConfigError(e.to_string()))?;

        config.import.validate().map_err(AppError::ConfigError)?;
        Ok(config)
    }

    fn figment(path: &Path) -> Figment {
        Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }
}
