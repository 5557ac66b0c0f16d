//! Alchemy crafting station
//!
//! Six ingredient slots around one output slot. A matching set of
//! ingredients produces a pending result; confirming it on the output slot
//! dissolves the ingredients into particles that reassemble into the result.

pub mod particles;
pub mod slots;
pub mod recipe;
pub mod transition;
pub mod router;
pub mod station;

use macroquad::prelude::{Rect, Vec2};
use crate::game::Item;

pub use particles::{Particle, ParticleField};
pub use slots::{Slot, SlotGrid, SlotRef, INGREDIENT_SLOTS};
pub use recipe::{RecipeRequirement, OUTPUT_KIND, REQUIRED_KINDS};
pub use transition::{CraftTransition, TransitionState};
pub use router::{InteractionRouter, RouteOutcome};
pub use station::AlchemyStation;

/// Screen placement of the station's slots
pub trait SlotGeometry {
    /// Screen rectangle of a slot
    fn slot_rect(&self, slot: SlotRef) -> Rect;

    /// Slot under the pointer, if any
    fn slot_at(&self, point: Vec2) -> Option<SlotRef>;

    /// Point the particles converge on
    fn convergence_point(&self) -> Vec2 {
        self.slot_rect(SlotRef::Output).center()
    }
}

/// Receives items the station hands back to the world
pub trait WorldDropSink {
    fn drop_item(&mut self, item: Item, position_hint: Vec2);
}

impl WorldDropSink for Vec<(Item, Vec2)> {
    fn drop_item(&mut self, item: Item, position_hint: Vec2) {
        self.push((item, position_hint));
    }
}
