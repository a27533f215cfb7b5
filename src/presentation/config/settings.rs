use std::path::Path;

use config::{Config, File};
use serde::Deserialize;

use super::Environment;
use crate::application::services::{DelayWindow, SessionPolicy};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub simulator: SimulatorSettings,
    pub session: SessionSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SimulatorSettings {
    pub min_delay_ms: u64,
    pub max_delay_ms: u64,
}

impl Default for SimulatorSettings {
    fn default() -> Self {
        let window = DelayWindow::default();
        Self {
            min_delay_ms: window.min_ms,
            max_delay_ms: window.max_ms,
        }
    }
}

impl SimulatorSettings {
    pub fn delay_window(&self) -> DelayWindow {
        DelayWindow::new(self.min_delay_ms, self.max_delay_ms)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    pub greeting_on_start: bool,
    pub allow_back_with_history: bool,
}

impl Default for SessionSettings {
    fn default() -> Self {
        let policy = SessionPolicy::default();
        Self {
            greeting_on_start: policy.greeting_on_start,
            allow_back_with_history: policy.allow_back_with_history,
        }
    }
}

impl SessionSettings {
    pub fn policy(&self) -> SessionPolicy {
        SessionPolicy {
            greeting_on_start: self.greeting_on_start,
            allow_back_with_history: self.allow_back_with_history,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid environment: {0}")]
    Environment(String),
    #[error("configuration: {0}")]
    Config(#[from] config::ConfigError),
}

impl Settings {
    /// Layers `base`, the environment file and `APP__*` variables, in that
    /// order. Missing files are skipped.
    pub fn load(config_dir: &Path, environment: Environment) -> Result<Self, SettingsError> {
        let settings = Config::builder()
            .add_source(File::from(config_dir.join("base")).required(false))
            .add_source(File::from(config_dir.join(environment.as_str())).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Loads from `./config` for the environment named by `APP_ENVIRONMENT`.
    pub fn from_env() -> Result<(Self, Environment), SettingsError> {
        let environment = Environment::from_env().map_err(SettingsError::Environment)?;
        let settings = Self::load(Path::new("config"), environment)?;
        Ok((settings, environment))
    }
}
