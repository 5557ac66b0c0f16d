use std::f32::consts::TAU;
use macroquad::prelude::{vec2, Rect, Vec2};

use crate::config::LayoutConfig;
use crate::crafting::{SlotGeometry, SlotRef, INGREDIENT_SLOTS};

/// A single interactive slot with its bounds
#[derive(Debug, Clone)]
pub struct SlotElement {
    pub id: SlotRef,
    pub bounds: Rect,
}

/// Screen layout of the station panel.
/// The output slot sits at the centre of the ring area, ingredients on a circle around it.
#[derive(Debug, Clone)]
pub struct StationLayout {
    pub panel: Rect,
    /// Area below the ring left to the inventory collaborator
    pub footer: Rect,
    elements: Vec<SlotElement>,
}

impl StationLayout {
    /// Center the panel on a screen of the given size
    pub fn new(config: &LayoutConfig, screen_w: f32, screen_h: f32) -> Self {
        let panel = Rect::new(
            (screen_w - config.panel_width) / 2.0,
            (screen_h - config.panel_height) / 2.0,
            config.panel_width,
            config.panel_height,
        );
        let footer = Rect::new(
            panel.x,
            panel.y + panel.h - config.footer_height,
            panel.w,
            config.footer_height,
        );

        let center = panel.point() + vec2(panel.w / 2.0, (panel.h - config.footer_height) / 2.0);
        let half = vec2(config.slot_size / 2.0, config.slot_size / 2.0);
        let slot_rect = |at: Vec2| {
            let top_left = at - half;
            Rect::new(top_left.x, top_left.y, config.slot_size, config.slot_size)
        };

        let mut elements = Vec::with_capacity(INGREDIENT_SLOTS + 1);
        elements.push(SlotElement {
            id: SlotRef::Output,
            bounds: slot_rect(center),
        });
        for i in 0..INGREDIENT_SLOTS {
            let angle = TAU / INGREDIENT_SLOTS as f32 * i as f32;
            elements.push(SlotElement {
                id: SlotRef::Ingredient(i),
                bounds: slot_rect(center + Vec2::from_angle(angle) * config.ring_radius),
            });
        }

        Self { panel, footer, elements }
    }

    pub fn elements(&self) -> &[SlotElement] {
        &self.elements
    }

    /// Find slot at a screen position (topmost - iterate in reverse)
    pub fn hit_test(&self, x: f32, y: f32) -> Option<SlotRef> {
        self.elements
            .iter()
            .rev()
            .find(|e| e.bounds.contains(Vec2::new(x, y)))
            .map(|e| e.id)
    }
}

impl SlotGeometry for StationLayout {
    fn slot_rect(&self, slot: SlotRef) -> Rect {
        self.elements
            .iter()
            .find(|e| e.id == slot)
            .map(|e| e.bounds)
            .unwrap_or_else(|| Rect::new(self.panel.x, self.panel.y, 0.0, 0.0))
    }

    fn slot_at(&self, point: Vec2) -> Option<SlotRef> {
        self.hit_test(point.x, point.y)
    }
}
