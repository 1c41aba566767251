//! Instant Crops: fully mature plants as soon as they are planted.
//!
//! A gameplay plugin for headless Bevy game servers: when a player plants a
//! seed, the resulting crop can be forced straight to its ripe growth stage,
//! controlled per seed type and per placement (planter box vs. open ground).
//! The behavior is gated on the `instantcrops.use` capability and driven by a
//! JSON configuration file the server operator edits in place.

use bevy::prelude::*;
use std::path::PathBuf;

pub mod config;
pub mod host;
pub mod permissions;
pub mod ripeness;

#[cfg(test)]
mod integration_tests;
#[cfg(any(test, feature = "bench"))]
pub mod test_harness;

/// Top-level plugin wiring configuration, permission registration, and the
/// ripeness systems into the host `App`.
pub struct InstantCropsPlugin {
    /// Location of the JSON configuration file. Relative paths resolve
    /// against the server's working directory.
    pub config_path: PathBuf,
}

impl Default for InstantCropsPlugin {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from(config::DEFAULT_CONFIG_PATH),
        }
    }
}

impl InstantCropsPlugin {
    /// Use a custom configuration file location instead of
    /// [`config::DEFAULT_CONFIG_PATH`].
    pub fn with_config_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
        }
    }
}

impl Plugin for InstantCropsPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            config::ConfigPlugin {
                path: self.config_path.clone(),
            },
            permissions::PermissionsPlugin,
            ripeness::RipenessPlugin,
        ));
    }
}
