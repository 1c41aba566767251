use crate::config::RipenessConfig;

use super::types::RipenessDecision;

/// Decide whether a freshly planted seed should be forced ripe.
///
/// Unconfigured seeds are never forced; a configured seed is forced exactly
/// when the flag matching its placement is set.
pub fn decide_ripeness(
    seed_short_name: &str,
    planted_in_planter: bool,
    config: &RipenessConfig,
) -> RipenessDecision {
    let Some(policy) = config.seed(seed_short_name) else {
        return RipenessDecision::Leave;
    };
    let wanted = if planted_in_planter {
        policy.ripen_in_planter
    } else {
        policy.ripen_in_ground
    };
    if wanted {
        RipenessDecision::ForceRipe
    } else {
        RipenessDecision::Leave
    }
}
