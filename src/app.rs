// Demo application: the station plus a satchel standing in for the inventory

use std::path::Path;
use macroquad::prelude::*;

use crate::config::{StationConfig, CONFIG_PATH};
use crate::crafting::{AlchemyStation, RouteOutcome, WorldDropSink, REQUIRED_KINDS};
use crate::game::{Item, ItemKind, ProceduralIcons};
use crate::render::common::{SATCHEL_SLOT_SIZE, SATCHEL_SLOT_SPACING};
use crate::render::Renderer;
use crate::ui::{Satchel, StationLayout};
use crate::util::asset_path;

/// Item that takes part in no recipe, to show a non-matching grid
pub const JUNK_KIND: ItemKind = ItemKind(330);
/// Starting stack size of every satchel cell
const SATCHEL_STACK: i32 = 10;

pub fn window_conf() -> Conf {
    Conf {
        window_title: "Alchemy".to_string(),
        window_width: 1280,
        window_height: 800,
        fullscreen: false,
        ..Default::default()
    }
}

/// Collects items handed back by a closing station
#[derive(Default)]
pub struct LoggedWorld {
    drops: Vec<(Item, Vec2)>,
}

impl LoggedWorld {
    /// Take every dropped item
    pub fn drain(&mut self) -> std::vec::Drain<'_, (Item, Vec2)> {
        self.drops.drain(..)
    }
}

impl WorldDropSink for LoggedWorld {
    fn drop_item(&mut self, item: Item, position_hint: Vec2) {
        log::info!(
            "Dropped {} x{} at ({:.0}, {:.0})",
            item.kind,
            item.stack,
            position_hint.x,
            position_hint.y
        );
        self.drops.push((item, position_hint));
    }
}

pub struct App {
    config: StationConfig,
    layout: StationLayout,
    station: AlchemyStation,
    satchel: Satchel,
    held: Option<Item>,
    world: LoggedWorld,
    renderer: Renderer<ProceduralIcons>,
    seed: u64,
}

impl App {
    pub fn new(seed: u64) -> Self {
        let path = asset_path(CONFIG_PATH);
        let config = StationConfig::load_or_default(Path::new(&path));
        Self::with_config(config, seed)
    }

    pub fn with_config(config: StationConfig, seed: u64) -> Self {
        let layout = StationLayout::new(&config.layout, screen_width(), screen_height());
        let station = AlchemyStation::new(&config, seed);

        let satchel = Satchel::with_items(
            REQUIRED_KINDS
                .iter()
                .chain(std::iter::once(&JUNK_KIND))
                .map(|kind| Item::new(*kind, SATCHEL_STACK)),
        );

        log::info!("Alchemy station opened (seed {})", seed);

        Self {
            config,
            layout,
            station,
            satchel,
            held: None,
            world: LoggedWorld::default(),
            renderer: Renderer::new(ProceduralIcons),
            seed,
        }
    }

    /// One frame: input, then simulation, then drawing
    pub fn run_frame(&mut self) {
        self.layout = StationLayout::new(&self.config.layout, screen_width(), screen_height());
        let (mx, my) = mouse_position();
        let mouse = vec2(mx, my);

        // ===== INPUT =====
        if is_key_pressed(KeyCode::Escape) {
            self.reopen_station();
        }

        if is_mouse_button_pressed(MouseButton::Left) {
            self.handle_click(mouse);
        }

        // ===== UPDATE =====
        if self.station.update(get_frame_time(), &self.layout) {
            log::info!("Craft finished at t={:.2}s", self.station.clock());
        }

        // ===== DRAW =====
        clear_background(Color::from_rgba(30, 30, 40, 255));

        let hovered_slot = self.layout.hit_test(mx, my);
        self.renderer.render_station(&self.station, &self.layout, hovered_slot);

        let hovered_cell = self.satchel_hit(mouse);
        self.renderer.render_satchel(&self.satchel, self.layout.footer, hovered_cell);

        if let Some(item) = &self.held {
            self.renderer.render_held_item(item);
        }
    }

    fn satchel_hit(&self, point: Vec2) -> Option<usize> {
        self.satchel
            .hit_test(self.layout.footer, SATCHEL_SLOT_SIZE, SATCHEL_SLOT_SPACING, point)
    }

    fn handle_click(&mut self, point: Vec2) {
        if let Some(index) = self.satchel_hit(point) {
            self.satchel.click(index, &mut self.held);
            return;
        }

        let outcome = self
            .station
            .handle_click(point, &mut self.held, &self.layout, self.renderer.icons());
        if outcome != RouteOutcome::Ignored {
            log::debug!("Station click: {:?}", outcome);
        }
    }

    /// Close the current station and open a fresh one. Items the old station
    /// returns go back into the satchel where they fit.
    fn reopen_station(&mut self) {
        self.seed = self.seed.wrapping_add(1);
        let fresh = AlchemyStation::new(&self.config, self.seed);
        let old = std::mem::replace(&mut self.station, fresh);

        let hint = self.layout.panel.center();
        old.close(&mut self.world, hint);

        for (item, _) in self.world.drain() {
            if let Some(rest) = self.satchel.absorb(item) {
                log::warn!("Satchel full, {} x{} left on the ground", rest.kind, rest.stack);
            }
        }
        log::info!("Alchemy station reopened (seed {})", self.seed);
    }
}
