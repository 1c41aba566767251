//! Narrow seam to the host game server.
//!
//! The plugin does not own players, items, or plant mechanics. The host
//! emits [`EntityBuiltEvent`] when a deployable finishes placement and
//! attaches the components below; the plugin only reads them, and writes
//! exactly one field: [`Growable::state`], when a crop is forced ripe.

use bevy::prelude::*;

/// Growth stages of a plantable crop, as the host models them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlantState {
    Seed,
    Seedling,
    Sapling,
    Mature,
    Fruiting,
    Ripe,
    Dying,
}

/// Placement tool held by a player while deploying an object.
#[derive(Component, Debug)]
pub struct Planner {
    /// Player wielding the tool. `None` when ownership could not be
    /// resolved.
    pub owner: Option<Entity>,
}

/// Short name of the item a player currently has selected, if any.
#[derive(Component, Debug, Default)]
pub struct ActiveItem(pub Option<String>);

/// A plant entity that advances through growth stages.
#[derive(Component, Debug)]
pub struct Growable {
    /// Current growth stage.
    pub state: PlantState,
    /// Planter box holding this plant, or `None` when planted in open
    /// ground. The host links this after placement finishes, so it is only
    /// trustworthy from the tick following [`EntityBuiltEvent`].
    pub planter: Option<Entity>,
}

impl Growable {
    /// A freshly planted crop, not yet linked to any planter box.
    pub fn planted() -> Self {
        Self {
            state: PlantState::Seed,
            planter: None,
        }
    }
}

/// Emitted by the host when a player-placed object finishes construction.
///
/// Either entity may already be gone, or lack the expected components, by
/// the time handlers run; handlers skip such events.
#[derive(Event, Debug, Clone, Copy)]
pub struct EntityBuiltEvent {
    /// The placement tool that built the object.
    pub planner: Entity,
    /// The constructed object.
    pub built: Entity,
}
