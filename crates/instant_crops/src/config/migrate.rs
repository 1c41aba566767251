use bevy::prelude::*;

use super::types::{RipenessConfig, CURRENT_VERSION};

/// Stored versions ordering below this lose their seed list entirely on
/// migration: the pre-1.0 file format carried incompatible entries.
const WHOLESALE_RESET_BELOW: &str = "1.0.0";

/// Bring a stored config up to the running version. Returns `true` if a
/// migration ran.
///
/// Version strings are compared as plain strings, matching the shipped file
/// format ("1.10.0" orders below "1.2.0"); changing the ordering would
/// silently re-gate existing operator configs.
pub fn migrate_config(config: &mut RipenessConfig) -> bool {
    if config.version.as_str() >= CURRENT_VERSION {
        return false;
    }

    warn!("Config changes detected! Updating...");
    let from = config.version.clone();

    if config.version.as_str() < WHOLESALE_RESET_BELOW {
        *config = RipenessConfig::default();
    }
    config.version = CURRENT_VERSION.to_string();

    warn!(
        "Config update complete! Updated from version {} to {}",
        from, CURRENT_VERSION
    );
    true
}
