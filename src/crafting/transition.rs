//! Craft transition
//!
//! Drives one craft from confirmation to materialization: ingredients are
//! turned into particles and cleared, then the pending result is promoted
//! to a real item on the frame the last particle arrives.

use macroquad::prelude::*;

use crate::config::ParticleConfig;
use crate::game::IconSampler;
use super::particles::ParticleField;
use super::slots::{SlotGrid, SlotRef};
use super::SlotGeometry;

/// Externally observable transition phase.
///
/// Dissolving and converging are one continuous animation, and promotion
/// happens inside the same `update` that empties the field, so only two
/// phases are ever visible between frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionState {
    #[default]
    Idle,
    Converging,
}

/// Holds only the start time of the running craft
#[derive(Debug, Clone, Default)]
pub struct CraftTransition {
    started_at: Option<f64>,
}

impl CraftTransition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> TransitionState {
        if self.started_at.is_some() {
            TransitionState::Converging
        } else {
            TransitionState::Idle
        }
    }

    pub fn is_active(&self) -> bool {
        self.started_at.is_some()
    }

    /// Seconds since the craft was confirmed
    pub fn elapsed(&self, now: f64) -> Option<f32> {
        self.started_at.map(|start| (now - start).max(0.0) as f32)
    }

    /// Start a craft if the output is empty, a result is pending and no particles are live.
    /// Every occupied ingredient slot is converted to particles and then emptied.
    /// Returns false (changing nothing) when the craft cannot start.
    pub fn confirm(
        &mut self,
        now: f64,
        grid: &mut SlotGrid,
        field: &mut ParticleField,
        icons: &dyn IconSampler,
        geometry: &dyn SlotGeometry,
        config: &ParticleConfig,
    ) -> bool {
        if self.started_at.is_some()
            || !grid.is_empty(SlotRef::Output)
            || grid.pending_result().is_none()
            || !field.is_empty()
        {
            return false;
        }

        let inset = vec2(config.icon_inset, config.icon_inset);
        let mut spawned = 0;
        for (i, item) in grid.ingredient_items() {
            let origin = geometry.slot_rect(SlotRef::Ingredient(i)).point() + inset;
            let bitmap = icons.sample_icon(item.kind);
            spawned += field.spawn_from_bitmap(bitmap.as_ref(), origin, config.zoom);
        }

        let consumed = grid.clear_ingredients();
        self.started_at = Some(now);

        log::info!(
            "Craft started: {} ingredient stacks dissolved into {} particles",
            consumed.len(),
            spawned
        );
        true
    }

    /// Advance the animation. Promotes the pending result on the frame the
    /// field empties and returns true when it did.
    pub fn update(
        &mut self,
        dt: f32,
        now: f64,
        grid: &mut SlotGrid,
        field: &mut ParticleField,
        target: Vec2,
    ) -> bool {
        let Some(elapsed) = self.elapsed(now) else {
            return false;
        };

        field.update(dt, elapsed, target);
        if !field.is_empty() {
            return false;
        }

        self.started_at = None;
        if grid.promote_pending() {
            log::info!("Craft finished after {:.2}s", elapsed);
            true
        } else {
            false
        }
    }

    /// Abandon a running craft, discarding its particles. Returns how many were dropped.
    pub fn abort(&mut self, field: &mut ParticleField) -> usize {
        if self.started_at.take().is_none() {
            return 0;
        }
        field.clear()
    }
}
