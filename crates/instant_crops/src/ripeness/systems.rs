use bevy::prelude::*;

use crate::config::RipenessConfig;
use crate::host::{ActiveItem, EntityBuiltEvent, Growable, Planner, PlantState};
use crate::permissions::{CapabilityGrants, USE};

use super::helpers::decide_ripeness;
use super::types::{PendingRipen, PendingRipeness, RipenessDecision};

// =============================================================================
// Systems
// =============================================================================

/// System: handle entity-built events from the host.
///
/// Walks the validation chain (tool, owner, capability, active item,
/// growable, configured seed); any miss skips the event silently. Matches
/// are enqueued into [`PendingRipeness`] for the next tick.
pub fn on_entity_built(
    mut events: EventReader<EntityBuiltEvent>,
    config: Res<RipenessConfig>,
    planners: Query<&Planner>,
    players: Query<(Option<&CapabilityGrants>, Option<&ActiveItem>)>,
    growables: Query<(), With<Growable>>,
    mut pending: ResMut<PendingRipeness>,
) {
    for event in events.read() {
        let Ok(planner) = planners.get(event.planner) else {
            continue;
        };
        let Some(owner) = planner.owner else {
            continue;
        };
        let Ok((grants, active_item)) = players.get(owner) else {
            continue;
        };
        if !grants.is_some_and(|g| g.has(USE)) {
            continue;
        }
        let Some(seed) = active_item.and_then(|item| item.0.as_deref()) else {
            continue;
        };
        if growables.get(event.built).is_err() {
            continue;
        }
        if config.seed(seed).is_none() {
            continue;
        }
        pending.0.push(PendingRipen {
            plant: event.built,
            seed: seed.to_string(),
        });
    }
}

/// System: resolve and apply last tick's pending entries.
///
/// The planter link is read here, not at build time: the host wires it up
/// after the built event fires, so it is only trustworthy one tick later.
/// Entries whose plant has despawned or lost its `Growable` are dropped
/// silently.
pub fn apply_pending_ripeness(
    mut pending: ResMut<PendingRipeness>,
    config: Res<RipenessConfig>,
    mut growables: Query<&mut Growable>,
) {
    for entry in pending.0.drain(..) {
        let Ok(mut growable) = growables.get_mut(entry.plant) else {
            continue;
        };
        let in_planter = growable.planter.is_some();
        if decide_ripeness(&entry.seed, in_planter, &config) == RipenessDecision::ForceRipe {
            growable.state = PlantState::Ripe;
        }
    }
}

// =============================================================================
// Plugin
// =============================================================================

pub struct RipenessPlugin;

impl Plugin for RipenessPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PendingRipeness>()
            .add_event::<EntityBuiltEvent>()
            // apply runs first so an entry enqueued on tick N is applied on
            // tick N+1, exactly one tick after the built event.
            .add_systems(
                FixedUpdate,
                (apply_pending_ripeness, on_entity_built).chain(),
            );
    }
}
