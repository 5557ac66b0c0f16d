pub mod layout;
pub mod satchel;

pub use layout::{SlotElement, StationLayout};
pub use satchel::Satchel;
