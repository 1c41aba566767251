//! Capability registration and per-player grants.
//!
//! Permission storage belongs to the host; the plugin registers the
//! capability names it honors and reads per-player grants off the player
//! entity through [`CapabilityGrants`].

use bevy::prelude::*;
use std::collections::HashSet;

/// Capability a player must hold before any of their plantings are
/// fast-ripened.
pub const USE: &str = "instantcrops.use";

/// Every capability this plugin announces at startup.
pub(crate) const CAPABILITIES: &[&str] = &[USE];

// =============================================================================
// Resources and components
// =============================================================================

/// Capability names announced to the host's permission system.
#[derive(Resource, Debug, Default)]
pub struct PermissionRegistry {
    registered: HashSet<String>,
}

impl PermissionRegistry {
    /// Register a capability name. Re-registration is a no-op, so plugin
    /// reloads cannot produce duplicates.
    pub fn register(&mut self, name: &str) {
        self.registered.insert(name.to_string());
    }

    /// Whether a capability name has been registered.
    pub fn is_registered(&self, name: &str) -> bool {
        self.registered.contains(name)
    }
}

/// Capabilities granted to a player, attached by the host. A player without
/// this component holds nothing.
#[derive(Component, Debug, Default)]
pub struct CapabilityGrants {
    granted: HashSet<String>,
}

impl CapabilityGrants {
    /// Grant a capability by name.
    pub fn grant(&mut self, name: &str) {
        self.granted.insert(name.to_string());
    }

    /// Revoke a capability by name.
    pub fn revoke(&mut self, name: &str) {
        self.granted.remove(name);
    }

    /// Whether the player holds the named capability.
    pub fn has(&self, name: &str) -> bool {
        self.granted.contains(name)
    }
}

// =============================================================================
// System and plugin
// =============================================================================

/// System: announce this plugin's capabilities at startup.
pub fn register_permissions(mut registry: ResMut<PermissionRegistry>) {
    for capability in CAPABILITIES {
        registry.register(capability);
    }
}

pub struct PermissionsPlugin;

impl Plugin for PermissionsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PermissionRegistry>()
            .add_systems(Startup, register_permissions);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_is_idempotent() {
        let mut registry = PermissionRegistry::default();
        registry.register(USE);
        registry.register(USE);
        assert!(registry.is_registered(USE));
    }

    #[test]
    fn test_unregistered_capability() {
        let registry = PermissionRegistry::default();
        assert!(!registry.is_registered("instantcrops.admin"));
    }

    #[test]
    fn test_grants_default_to_nothing() {
        let grants = CapabilityGrants::default();
        assert!(!grants.has(USE));
    }

    #[test]
    fn test_grant_and_revoke() {
        let mut grants = CapabilityGrants::default();
        grants.grant(USE);
        assert!(grants.has(USE));
        grants.revoke(USE);
        assert!(!grants.has(USE));
    }
}
