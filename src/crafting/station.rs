//! The crafting station as a whole
//!
//! Owns the slots, the particles and the running transition. The frame
//! driver calls `handle_click` for input, then `update`, then draws.

use macroquad::prelude::*;

use crate::config::{ParticleConfig, StationConfig};
use crate::game::{IconSampler, Item};
use super::particles::ParticleField;
use super::router::{InteractionRouter, RouteOutcome};
use super::slots::{SlotGrid, SlotRef};
use super::transition::{CraftTransition, TransitionState};
use super::{SlotGeometry, WorldDropSink};

pub struct AlchemyStation {
    grid: SlotGrid,
    field: ParticleField,
    transition: CraftTransition,
    router: InteractionRouter,
    particle_config: ParticleConfig,
    /// Seconds of station time, advanced by `update`
    clock: f64,
}

impl AlchemyStation {
    pub fn new(config: &StationConfig, seed: u64) -> Self {
        Self {
            grid: SlotGrid::new(),
            field: ParticleField::new(config.particles.clone(), seed),
            transition: CraftTransition::new(),
            router: InteractionRouter::default(),
            particle_config: config.particles.clone(),
            clock: 0.0,
        }
    }

    pub fn grid(&self) -> &SlotGrid {
        &self.grid
    }

    /// Direct grid access for collaborators that fill slots without the pointer
    pub fn grid_mut(&mut self) -> &mut SlotGrid {
        &mut self.grid
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn state(&self) -> TransitionState {
        self.transition.state()
    }

    pub fn is_crafting(&self) -> bool {
        self.transition.is_active()
    }

    pub fn clock(&self) -> f64 {
        self.clock
    }

    /// Route a pointer-down at `point`
    pub fn handle_click(
        &mut self,
        point: Vec2,
        held: &mut Option<Item>,
        geometry: &dyn SlotGeometry,
        icons: &dyn IconSampler,
    ) -> RouteOutcome {
        let hovered = geometry.slot_at(point);
        self.click_slot(hovered, held, geometry, icons)
    }

    /// Route a click on an already hit-tested slot
    pub fn click_slot(
        &mut self,
        hovered: Option<SlotRef>,
        held: &mut Option<Item>,
        geometry: &dyn SlotGeometry,
        icons: &dyn IconSampler,
    ) -> RouteOutcome {
        let crafting = self.transition.is_active();
        let outcome = self.router.route_click(hovered, held, &mut self.grid, crafting);

        if outcome == RouteOutcome::CraftRequested && !self.confirm_craft(geometry, icons) {
            return RouteOutcome::Ignored;
        }
        outcome
    }

    /// Re-run the recipe check after slots were changed directly through `grid_mut`
    pub fn refresh_recipe(&mut self) {
        if !self.transition.is_active() {
            self.router.refresh_pending(&mut self.grid);
        }
    }

    /// Start crafting the pending result. Returns false when the craft cannot start.
    pub fn confirm_craft(&mut self, geometry: &dyn SlotGeometry, icons: &dyn IconSampler) -> bool {
        self.transition.confirm(
            self.clock,
            &mut self.grid,
            &mut self.field,
            icons,
            geometry,
            &self.particle_config,
        )
    }

    /// Advance station time by `dt`. Returns true on the frame the crafted item materializes.
    pub fn update(&mut self, dt: f32, geometry: &dyn SlotGeometry) -> bool {
        self.clock += dt as f64;
        let target = geometry.convergence_point();
        self.transition
            .update(dt, self.clock, &mut self.grid, &mut self.field, target)
    }

    /// Draw the live particles
    pub fn draw_particles(&self) {
        self.field.draw();
    }

    /// Shut the station down. Items still in slots go to `sink`; a pending
    /// result and in-flight particles are discarded. Returns the number of
    /// item stacks handed back.
    pub fn close(mut self, sink: &mut dyn WorldDropSink, position_hint: Vec2) -> usize {
        let mut returned = 0;

        if let Some(item) = self.grid.take(SlotRef::Output) {
            sink.drop_item(item, position_hint);
            returned += 1;
        }
        for (_, item) in self.grid.clear_ingredients() {
            sink.drop_item(item, position_hint);
            returned += 1;
        }

        let dropped = self.transition.abort(&mut self.field);
        if dropped > 0 {
            log::warn!(
                "Station closed mid-craft: {} particles discarded, consumed ingredients are lost",
                dropped
            );
        }
        if let Some(pending) = self.grid.clear_pending_result() {
            log::debug!("Discarded pending result {}", pending.kind);
        }

        log::info!("Station closed, {} item stacks returned", returned);
        returned
    }
}
