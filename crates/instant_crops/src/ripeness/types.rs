use bevy::prelude::*;

/// Outcome of a ripeness policy lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RipenessDecision {
    /// Force the plant straight to its ripe stage.
    ForceRipe,
    /// Leave natural growth alone.
    Leave,
}

/// One crop awaiting its ripeness decision on the next tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRipen {
    /// The planted crop entity.
    pub plant: Entity,
    /// Short name of the seed item it was planted from.
    pub seed: String,
}

/// Crops planted this tick, resolved one tick later once the host has
/// linked planter boxes. Entries are single-shot and drained in full every
/// tick; there is no cancellation or retry.
#[derive(Resource, Debug, Default)]
pub struct PendingRipeness(pub Vec<PendingRipen>);
