pub mod item;
pub mod icon;

pub use item::{Item, ItemKind, MAX_STACK};
pub use icon::{IconBitmap, IconSampler, ProceduralIcons, ICON_SIZE};
