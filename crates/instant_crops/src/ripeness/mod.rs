mod helpers;
mod systems;
pub mod types;

pub use helpers::decide_ripeness;
pub use systems::{apply_pending_ripeness, on_entity_built, RipenessPlugin};
pub use types::{PendingRipen, PendingRipeness, RipenessDecision};
