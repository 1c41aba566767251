mod migrate;
mod persistence;
mod systems;
pub mod types;

pub use migrate::migrate_config;
pub use persistence::{
    load_or_default, read_config, write_config, ConfigError, ConfigFilePath, SkipConfigLoad,
};
pub use systems::{load_config_at_startup, ConfigPlugin};
pub use types::{RipenessConfig, SeedPolicy, CURRENT_VERSION, DEFAULT_CONFIG_PATH};
