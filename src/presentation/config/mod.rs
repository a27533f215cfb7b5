mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    LoggingSettings, ServerSettings, SessionSettings, Settings, SettingsError, SimulatorSettings,
};
