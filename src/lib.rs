// Library crate: the station core plus the demo frame driver

pub mod util;
pub use util::asset_path;

pub mod config;
pub mod game;
pub mod crafting;
pub mod ui;
pub mod render;
pub mod app;

pub use app::{window_conf, App};
pub use config::StationConfig;
pub use crafting::AlchemyStation;
