//! Station Configuration
//!
//! Tuning values for the particle animation and the station layout, read
//! from a TOML file. Every field is optional and falls back to the values
//! the station was designed around.

use std::path::Path;
use serde::Deserialize;

/// Default location of the station config
pub const CONFIG_PATH: &str = "assets/alchemy.toml";

// ============================================================================
// Particles
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    /// Screen units per source pixel when spawning
    pub zoom: f32,
    /// Offset of the icon inside its slot
    pub icon_inset: f32,
    pub speed_min: f32,
    /// Exclusive upper bound
    pub speed_max: f32,
    pub size_min: f32,
    /// Exclusive upper bound
    pub size_max: f32,
    /// Particles closer than this to the convergence point are removed
    pub termination_radius: f32,
    /// Velocity multiplier applied once per update
    pub decay_per_frame: f32,
    /// Scale the decay by frame time (`decay^(dt*60)`) instead of applying it once per frame
    pub time_scaled_decay: bool,
    /// Angular rate of the size shimmer
    pub shimmer_rate: f32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            zoom: 4.0,
            icon_inset: 16.0,
            speed_min: 60.0,
            speed_max: 130.0,
            size_min: 3.0,
            size_max: 6.0,
            termination_radius: 24.0,
            decay_per_frame: 0.99,
            time_scaled_decay: false,
            shimmer_rate: 3.0,
        }
    }
}

// ============================================================================
// Layout
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub panel_width: f32,
    pub panel_height: f32,
    pub slot_size: f32,
    /// Distance from the output slot to each ingredient slot
    pub ring_radius: f32,
    /// Height reserved below the ring for the inventory area
    pub footer_height: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            panel_width: 64.0 * 12.0 + 32.0,
            panel_height: 480.0 + 250.0,
            slot_size: 96.0,
            ring_radius: 200.0,
            footer_height: 200.0,
        }
    }
}

// ============================================================================
// Root
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StationConfig {
    pub particles: ParticleConfig,
    pub layout: LayoutConfig,
}

impl StationConfig {
    /// Parse a config from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, String> {
        let config: StationConfig =
            toml::from_str(content).map_err(|e| format!("Failed to parse station config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a config file
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {:?}: {}", path, e))?;
        Self::from_toml_str(&content)
    }

    /// Load a config file, falling back to defaults when it is missing or invalid
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            log::info!("No station config at {:?}, using defaults", path);
            return Self::default();
        }

        match Self::load(path) {
            Ok(config) => {
                log::info!("Loaded station config from {:?}", path);
                config
            }
            Err(e) => {
                log::warn!("{}, using defaults", e);
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<(), String> {
        let p = &self.particles;
        if !(p.speed_min < p.speed_max) {
            return Err(format!(
                "particles.speed_min ({}) must be below speed_max ({})",
                p.speed_min, p.speed_max
            ));
        }
        if !(p.size_min < p.size_max) {
            return Err(format!(
                "particles.size_min ({}) must be below size_max ({})",
                p.size_min, p.size_max
            ));
        }
        if !(p.termination_radius > 0.0) {
            return Err("particles.termination_radius must be positive".to_string());
        }
        if !(0.0..=1.0).contains(&p.decay_per_frame) {
            return Err("particles.decay_per_frame must be within [0, 1]".to_string());
        }
        if !(self.layout.slot_size > 0.0) {
            return Err("layout.slot_size must be positive".to_string());
        }
        Ok(())
    }
}
