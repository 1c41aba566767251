//! # TestServer: headless integration test harness
//!
//! Wraps `bevy::app::App` + [`InstantCropsPlugin`] for running planting
//! scenarios without a real game server. Players, tools, planter boxes, and
//! crops are spawned directly with the host seam components from
//! [`crate::host`]; the config file is skipped via [`SkipConfigLoad`].

use bevy::app::App;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use std::time::Duration;

use crate::config::{RipenessConfig, SkipConfigLoad};
use crate::host::{ActiveItem, EntityBuiltEvent, Growable, Planner, PlantState};
use crate::permissions::{CapabilityGrants, PermissionRegistry, USE};
use crate::ripeness::PendingRipeness;
use crate::InstantCropsPlugin;

/// Simulation rate the harness runs at, matching a 10 Hz dedicated server.
const TICK_HZ: f64 = 10.0;

/// A headless Bevy App wrapping [`InstantCropsPlugin`] for integration
/// testing.
pub struct TestServer {
    app: App,
}

impl TestServer {
    /// Create a server with the built-in default config and no config file
    /// I/O.
    pub fn new() -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);

        // Insert the marker BEFORE the plugin so startup leaves the
        // filesystem alone.
        app.insert_resource(SkipConfigLoad);
        app.add_plugins(InstantCropsPlugin::default());
        app.insert_resource(Time::<Fixed>::from_hz(TICK_HZ));

        // Run one update so Startup systems execute. No time has passed,
        // so FixedUpdate does not run yet.
        app.update();

        // From here on every update advances time by exactly one fixed
        // timestep, so `tick(n)` runs FixedUpdate exactly n times.
        app.insert_resource(TimeUpdateStrategy::ManualDuration(
            Duration::from_secs_f64(1.0 / TICK_HZ),
        ));

        Self { app }
    }

    /// Replace the active ripeness config.
    pub fn with_config(mut self, config: RipenessConfig) -> Self {
        self.app.insert_resource(config);
        self
    }

    // -----------------------------------------------------------------------
    // World setup (host-side behavior the harness stands in for)
    // -----------------------------------------------------------------------

    /// Spawn a player, optionally holding a seed item and optionally granted
    /// the use capability.
    pub fn spawn_player(&mut self, held_seed: Option<&str>, granted: bool) -> Entity {
        let mut grants = CapabilityGrants::default();
        if granted {
            grants.grant(USE);
        }
        self.app
            .world_mut()
            .spawn((grants, ActiveItem(held_seed.map(str::to_string))))
            .id()
    }

    /// Spawn a placement tool wielded by `owner`.
    pub fn spawn_planner(&mut self, owner: Option<Entity>) -> Entity {
        self.app.world_mut().spawn(Planner { owner }).id()
    }

    /// Spawn a planter box. The plugin treats the planter as opaque, so an
    /// empty entity is enough.
    pub fn spawn_planter_box(&mut self) -> Entity {
        self.app.world_mut().spawn_empty().id()
    }

    /// Spawn a freshly planted crop in open ground.
    pub fn spawn_crop(&mut self) -> Entity {
        self.app.world_mut().spawn(Growable::planted()).id()
    }

    /// Link `plant` into `planter`, as the host does after placement.
    pub fn place_in_planter(&mut self, plant: Entity, planter: Entity) {
        self.app
            .world_mut()
            .get_mut::<Growable>(plant)
            .expect("plant has a Growable component")
            .planter = Some(planter);
    }

    /// Emit the host's entity-built event.
    pub fn build(&mut self, planner: Entity, built: Entity) {
        self.app
            .world_mut()
            .send_event(EntityBuiltEvent { planner, built });
    }

    /// Despawn any entity, e.g. a plant destroyed between ticks.
    pub fn despawn(&mut self, entity: Entity) {
        self.app.world_mut().despawn(entity);
    }

    // -----------------------------------------------------------------------
    // Ticking
    // -----------------------------------------------------------------------

    /// Advance the simulation by `n` fixed ticks.
    pub fn tick(&mut self, n: u32) {
        for _ in 0..n {
            self.app.update();
        }
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Current growth stage of a plant.
    pub fn plant_state(&self, plant: Entity) -> PlantState {
        self.app
            .world()
            .get::<Growable>(plant)
            .expect("plant has a Growable component")
            .state
    }

    /// Number of entries waiting for their next-tick ripeness decision.
    pub fn pending_count(&self) -> usize {
        self.app.world().resource::<PendingRipeness>().0.len()
    }

    /// Whether a capability name was registered with the host at startup.
    pub fn permission_registered(&self, name: &str) -> bool {
        self.app
            .world()
            .resource::<PermissionRegistry>()
            .is_registered(name)
    }
}

impl Default for TestServer {
    fn default() -> Self {
        Self::new()
    }
}
