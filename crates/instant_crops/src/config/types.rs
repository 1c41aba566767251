use bevy::prelude::*;
use serde::{Deserialize, Serialize};

// =============================================================================
// Constants
// =============================================================================

/// Version stamped into freshly written config files: the running crate
/// version.
pub const CURRENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default config file location, relative to the server working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config/instant_crops.json";

// =============================================================================
// Config types
// =============================================================================

/// Ripeness policy for a single seed item type.
///
/// Serialized field names mirror the operator-facing JSON file and must stay
/// stable across releases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedPolicy {
    /// Item short name of the seed, unique within the config.
    #[serde(rename = "Item Short Name")]
    pub item_short_name: String,
    /// Force ripeness when the seed lands in a planter box.
    #[serde(rename = "Immediate Ripeness In Planters")]
    pub ripen_in_planter: bool,
    /// Force ripeness when the seed lands in open ground.
    #[serde(rename = "Immediate Ripeness In Ground")]
    pub ripen_in_ground: bool,
}

/// The loaded per-seed ripeness policies. Read-only after startup.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RipenessConfig {
    #[serde(rename = "Version")]
    pub version: String,
    #[serde(rename = "Seeds")]
    pub seeds: Vec<SeedPolicy>,
}

impl Default for RipenessConfig {
    /// Built-in defaults: the four base crops ripen instantly in open ground
    /// only.
    fn default() -> Self {
        Self {
            version: CURRENT_VERSION.to_string(),
            seeds: vec![
                ground_only("seed.pumpkin"),
                ground_only("seed.hemp"),
                ground_only("seed.potato"),
                ground_only("seed.corn"),
            ],
        }
    }
}

impl RipenessConfig {
    /// Look up the policy for a seed by exact short-name match.
    pub fn seed(&self, short_name: &str) -> Option<&SeedPolicy> {
        self.seeds.iter().find(|s| s.item_short_name == short_name)
    }
}

fn ground_only(item_short_name: &str) -> SeedPolicy {
    SeedPolicy {
        item_short_name: item_short_name.to_string(),
        ripen_in_planter: false,
        ripen_in_ground: true,
    }
}
