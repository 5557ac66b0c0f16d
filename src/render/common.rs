//! Common UI constants shared across the station panels

use macroquad::prelude::Color;

// ============================================================================
// UI Color Palette
// ============================================================================

// Panel backgrounds (darker to lighter for depth)
pub const PANEL_BG_DARK: Color = Color::new(0.071, 0.071, 0.094, 0.961);    // rgba(18, 18, 24, 245)

// Frame/Border colors
pub const FRAME_OUTER: Color = Color::new(0.322, 0.243, 0.165, 1.0);        // rgba(82, 62, 42, 255)
pub const FRAME_MID: Color = Color::new(0.557, 0.424, 0.267, 1.0);          // rgba(142, 108, 68, 255)
pub const FRAME_INNER: Color = Color::new(0.729, 0.580, 0.361, 1.0);        // rgba(186, 148, 92, 255)
pub const FRAME_ACCENT: Color = Color::new(0.855, 0.698, 0.424, 1.0);       // rgba(218, 178, 108, 255)

// Slot colors
pub const SLOT_BG_EMPTY: Color = Color::new(0.086, 0.086, 0.118, 1.0);      // rgba(22, 22, 30, 255)
pub const SLOT_BG_FILLED: Color = Color::new(0.125, 0.125, 0.173, 1.0);     // rgba(32, 32, 44, 255)
pub const SLOT_INNER_SHADOW: Color = Color::new(0.047, 0.047, 0.063, 1.0);  // rgba(12, 12, 16, 255)
pub const SLOT_BORDER: Color = Color::new(0.227, 0.212, 0.188, 1.0);        // rgba(58, 54, 48, 255)

// Hover/Selection states
pub const SLOT_HOVER_BG: Color = Color::new(0.188, 0.188, 0.282, 1.0);      // rgba(48, 48, 72, 255)
pub const SLOT_HOVER_BORDER: Color = Color::new(0.659, 0.580, 0.424, 1.0);  // rgba(168, 148, 108, 255)

// Output slot accent
pub const OUTPUT_ACCENT: Color = Color::new(0.424, 0.345, 0.580, 1.0);      // rgba(108, 88, 148, 255)
pub const RING_LINE: Color = Color::new(0.290, 0.243, 0.349, 0.6);          // rgba(74, 62, 89, 153)

// Header/Footer
pub const HEADER_BG: Color = Color::new(0.141, 0.125, 0.165, 1.0);          // rgba(36, 32, 42, 255)
pub const HEADER_BORDER: Color = Color::new(0.463, 0.384, 0.267, 1.0);      // rgba(118, 98, 68, 255)
pub const FOOTER_BG: Color = Color::new(0.094, 0.086, 0.110, 1.0);          // rgba(24, 22, 28, 255)

// Text colors
pub const TEXT_TITLE: Color = Color::new(0.855, 0.737, 0.502, 1.0);         // rgba(218, 188, 128, 255)
pub const TEXT_NORMAL: Color = Color::new(0.824, 0.824, 0.855, 1.0);        // rgba(210, 210, 218, 255)
pub const TEXT_DIM: Color = Color::new(0.502, 0.502, 0.541, 1.0);           // rgba(128, 128, 138, 255)

// ============================================================================
// Layout Constants
// ============================================================================

pub const HEADER_HEIGHT: f32 = 40.0;
pub const FRAME_THICKNESS: f32 = 4.0;
pub const CORNER_ACCENT_SIZE: f32 = 8.0;
pub const SATCHEL_SLOT_SIZE: f32 = 80.0;
pub const SATCHEL_SLOT_SPACING: f32 = 8.0;
pub const FONT_SIZE: f32 = 20.0;

/// Opacity of a pending (not yet materialized) result
pub const PENDING_ALPHA: f32 = 0.4;
/// Opacity of the item following the pointer
pub const HELD_ALPHA: f32 = 0.7;

// ============================================================================
// Shared Types
// ============================================================================

/// Slot visual state for rendering
#[derive(Clone, Copy, PartialEq)]
pub enum SlotState {
    Normal,
    Hovered,
}
