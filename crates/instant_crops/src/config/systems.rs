use bevy::prelude::*;
use std::path::PathBuf;

use super::persistence::{load_or_default, ConfigFilePath, SkipConfigLoad};
use super::types::{RipenessConfig, DEFAULT_CONFIG_PATH};

/// System: read, migrate, and write back the config file at startup.
///
/// When [`SkipConfigLoad`] is present the filesystem is left alone and the
/// built-in defaults (from `init_resource`) stay active.
pub fn load_config_at_startup(
    path: Res<ConfigFilePath>,
    skip: Option<Res<SkipConfigLoad>>,
    mut config: ResMut<RipenessConfig>,
) {
    if skip.is_some() {
        return;
    }
    *config = load_or_default(&path.0);
    info!(
        "Loaded ripeness config: {} seeds, version {}",
        config.seeds.len(),
        config.version
    );
}

pub struct ConfigPlugin {
    /// Location of the JSON config file.
    pub path: PathBuf,
}

impl Default for ConfigPlugin {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }
}

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ConfigFilePath(self.path.clone()))
            .init_resource::<RipenessConfig>()
            .add_systems(Startup, load_config_at_startup);
    }
}
