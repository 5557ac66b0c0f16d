use std::collections::HashMap;
use macroquad::prelude::*;

use crate::crafting::{AlchemyStation, SlotGeometry, SlotRef};
use crate::game::{IconBitmap, IconSampler, Item, ItemKind};
use crate::ui::{Satchel, StationLayout};
use super::common::*;

/// Texture dimensions for a bitmap, or None if it does not fit a texture
fn texture_size(bitmap: &IconBitmap) -> Option<(u16, u16)> {
    let width = u16::try_from(bitmap.width()).ok()?;
    let height = u16::try_from(bitmap.height()).ok()?;
    Some((width, height))
}

/// Draws the station panel. Icon textures are built lazily from the sampler.
pub struct Renderer<S: IconSampler> {
    icons: S,
    textures: HashMap<ItemKind, Option<Texture2D>>,
}

impl<S: IconSampler> Renderer<S> {
    pub fn new(icons: S) -> Self {
        Self {
            icons,
            textures: HashMap::new(),
        }
    }

    /// The sampler the renderer draws icons from
    pub fn icons(&self) -> &S {
        &self.icons
    }

    fn texture(&mut self, kind: ItemKind) -> Option<&Texture2D> {
        let icons = &self.icons;
        self.textures
            .entry(kind)
            .or_insert_with(|| {
                let bitmap = icons.sample_icon(kind)?;
                let Some((width, height)) = texture_size(&bitmap) else {
                    log::warn!("Icon for {} is too large for a texture, skipping", kind);
                    return None;
                };
                let mut bytes = Vec::with_capacity(bitmap.len() * 4);
                for (_, _, color) in bitmap.pixels() {
                    let rgba: [u8; 4] = color.into();
                    bytes.extend_from_slice(&rgba);
                }
                let texture = Texture2D::from_rgba8(width, height, &bytes);
                texture.set_filter(FilterMode::Nearest);
                log::debug!("Built icon texture for {}", kind);
                Some(texture)
            })
            .as_ref()
    }

    pub fn draw_panel_frame(&self, x: f32, y: f32, w: f32, h: f32) {
        draw_rectangle(x, y, w, h, FRAME_OUTER);
        draw_rectangle(x + 1.0, y + 1.0, w - 2.0, h - 2.0, FRAME_MID);
        draw_rectangle(x + 2.0, y + 2.0, w - 4.0, h - 4.0, FRAME_INNER);
        draw_rectangle(
            x + FRAME_THICKNESS,
            y + FRAME_THICKNESS,
            w - FRAME_THICKNESS * 2.0,
            h - FRAME_THICKNESS * 2.0,
            PANEL_BG_DARK,
        );
    }

    pub fn draw_corner_accents(&self, x: f32, y: f32, w: f32, h: f32) {
        let s = CORNER_ACCENT_SIZE;
        for (cx, cy) in [(x, y), (x + w - s, y), (x, y + h - s), (x + w - s, y + h - s)] {
            draw_rectangle(cx, cy, s, s, FRAME_ACCENT);
            draw_rectangle(cx + 2.0, cy + 2.0, s - 4.0, s - 4.0, FRAME_OUTER);
        }
    }

    /// Slot with bevel effect
    pub fn draw_slot(&self, bounds: Rect, has_item: bool, slot_state: SlotState, accent: Option<Color>) {
        let (x, y, size) = (bounds.x, bounds.y, bounds.w);

        let border = match (slot_state, accent) {
            (SlotState::Hovered, _) => SLOT_HOVER_BORDER,
            (SlotState::Normal, Some(accent)) => accent,
            (SlotState::Normal, None) => SLOT_BORDER,
        };
        draw_rectangle(x, y, size, size, border);

        let bg = if slot_state == SlotState::Hovered {
            SLOT_HOVER_BG
        } else if has_item {
            SLOT_BG_FILLED
        } else {
            SLOT_BG_EMPTY
        };
        draw_rectangle(x + 1.0, y + 1.0, size - 2.0, size - 2.0, bg);

        draw_line(x + 2.0, y + 2.0, x + size - 2.0, y + 2.0, 2.0, SLOT_INNER_SHADOW);
        draw_line(x + 2.0, y + 2.0, x + 2.0, y + size - 2.0, 2.0, SLOT_INNER_SHADOW);
    }

    /// Item icon centered in `bounds`, with a quantity badge for stacks
    pub fn draw_item(&mut self, item: &Item, bounds: Rect, alpha: f32) {
        let icon_size = bounds.w * 2.0 / 3.0;
        let x = bounds.x + (bounds.w - icon_size) / 2.0;
        let y = bounds.y + (bounds.h - icon_size) / 2.0;

        match self.texture(item.kind) {
            Some(texture) => {
                draw_texture_ex(
                    texture,
                    x,
                    y,
                    Color::new(1.0, 1.0, 1.0, alpha),
                    DrawTextureParams {
                        dest_size: Some(vec2(icon_size, icon_size)),
                        ..Default::default()
                    },
                );
            }
            None => {
                // No icon available - draw a placeholder block
                draw_rectangle(x, y, icon_size, icon_size, Color::new(0.6, 0.6, 0.65, alpha));
            }
        }

        if item.stack > 1 {
            let qty_text = item.stack.to_string();
            draw_text(&qty_text, bounds.x + 5.0, bounds.y + bounds.h - 5.0, FONT_SIZE, Color::new(0.0, 0.0, 0.0, 0.8));
            draw_text(&qty_text, bounds.x + 4.0, bounds.y + bounds.h - 6.0, FONT_SIZE, TEXT_NORMAL);
        }
    }

    pub fn render_station(&mut self, station: &AlchemyStation, layout: &StationLayout, hovered: Option<SlotRef>) {
        let panel = layout.panel;

        // Semi-transparent overlay
        draw_rectangle(0.0, 0.0, screen_width(), screen_height(), Color::new(0.0, 0.0, 0.0, 0.588));

        self.draw_panel_frame(panel.x, panel.y, panel.w, panel.h);
        self.draw_corner_accents(panel.x, panel.y, panel.w, panel.h);

        // ===== HEADER SECTION =====
        let header_x = panel.x + FRAME_THICKNESS;
        let header_y = panel.y + FRAME_THICKNESS;
        let header_w = panel.w - FRAME_THICKNESS * 2.0;

        draw_rectangle(header_x, header_y, header_w, HEADER_HEIGHT, HEADER_BG);
        draw_line(header_x + 10.0, header_y + HEADER_HEIGHT, header_x + header_w - 10.0, header_y + HEADER_HEIGHT, 2.0, HEADER_BORDER);
        draw_text("ALCHEMY", header_x + 12.0, header_y + 27.0, FONT_SIZE, TEXT_TITLE);
        draw_text("[Esc] Close", header_x + header_w - 110.0, header_y + 27.0, FONT_SIZE, TEXT_DIM);
        if station.is_crafting() {
            draw_text("Transmuting...", header_x + 120.0, header_y + 27.0, FONT_SIZE, TEXT_NORMAL);
        }

        // ===== RING =====
        let center = layout.convergence_point();
        for slot in SlotRef::ingredients() {
            let c = layout.slot_rect(slot).center();
            draw_line(center.x, center.y, c.x, c.y, 2.0, RING_LINE);
        }

        for element in layout.elements() {
            let slot_state = if hovered == Some(element.id) {
                SlotState::Hovered
            } else {
                SlotState::Normal
            };
            let item = station.grid().peek(element.id);
            let accent = (element.id == SlotRef::Output).then_some(OUTPUT_ACCENT);
            self.draw_slot(element.bounds, item.is_some(), slot_state, accent);

            if let Some(item) = item {
                self.draw_item(item, element.bounds, 1.0);
            } else if element.id == SlotRef::Output {
                if let Some(pending) = station.grid().pending_result() {
                    self.draw_item(pending, element.bounds, PENDING_ALPHA);
                }
            }
        }

        // ===== FOOTER SECTION =====
        let footer = layout.footer;
        draw_rectangle(footer.x + FRAME_THICKNESS, footer.y, footer.w - FRAME_THICKNESS * 2.0, footer.h - FRAME_THICKNESS, FOOTER_BG);
        draw_line(footer.x + 10.0, footer.y, footer.x + footer.w - 10.0, footer.y, 1.0, HEADER_BORDER);

        station.draw_particles();
    }

    pub fn render_satchel(&mut self, satchel: &Satchel, area: Rect, hovered: Option<usize>) {
        let bounds = satchel.cell_bounds(area, SATCHEL_SLOT_SIZE, SATCHEL_SLOT_SPACING);
        for (i, (cell, rect)) in satchel.cells().iter().zip(bounds).enumerate() {
            let slot_state = if hovered == Some(i) {
                SlotState::Hovered
            } else {
                SlotState::Normal
            };
            self.draw_slot(rect, cell.is_some(), slot_state, None);
            if let Some(item) = cell {
                self.draw_item(item, rect, 1.0);
            }
        }
    }

    /// Draw the carried item under the pointer
    pub fn render_held_item(&mut self, item: &Item) {
        let (mx, my) = mouse_position();
        let size = SATCHEL_SLOT_SIZE;
        let bounds = Rect::new(mx - size / 2.0, my - size / 2.0, size, size);
        self.draw_item(item, bounds, HELD_ALPHA);
    }
}
