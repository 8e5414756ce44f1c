//! Runtime gameplay configuration loaded from `assets/bubbles.toml`.
//!
//! [`GameConfig`] is a Bevy [`Resource`] that mirrors every numeric tunable in
//! [`crate::constants`]. At startup, [`load_game_config`] reads
//! `assets/bubbles.toml` and overwrites the defaults with any values present
//! in the file. Missing keys fall back to the compile-time defaults, so a
//! minimal TOML can override just the values you care about. A file that
//! parses but fails validation is rejected wholesale.
//!
//! ## Usage in systems
//!
//! Add `config: Res<GameConfig>` to any system parameter list and read values
//! with `config.radius_min`, `config.burst_count_max`, etc.

use crate::constants::*;
use crate::error::{validate_count, validate_range, validate_unit_factor, GameResult};
use bevy::prelude::*;
use serde::Deserialize;

/// Runtime-tunable gameplay configuration.
///
/// All fields default to the corresponding compile-time constant from
/// `src/constants.rs`. Override any subset by setting the value in
/// `assets/bubbles.toml`.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // ── Bubble field ──────────────────────────────────────────────────────────
    pub bubble_count: usize,
    pub radius_min: f32,
    pub radius_max: f32,
    pub alpha_min: f32,
    pub alpha_max: f32,
    pub speed_min: f32,
    pub speed_max: f32,

    // ── Particles ─────────────────────────────────────────────────────────────
    pub burst_count_min: u32,
    pub burst_count_max: u32,
    pub particle_size_min: f32,
    pub particle_size_max: f32,
    pub particle_speed_min: f32,
    pub particle_speed_max: f32,
    pub particle_lifespan_min: i32,
    pub particle_lifespan_max: i32,
    pub particle_gravity: f32,
    pub particle_drag: f32,

    // ── HUD / audio ───────────────────────────────────────────────────────────
    pub hud_font_size: f32,
    pub pop_volume: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            // Bubble field
            bubble_count: BUBBLE_COUNT,
            radius_min: BUBBLE_RADIUS_MIN,
            radius_max: BUBBLE_RADIUS_MAX,
            alpha_min: BUBBLE_ALPHA_MIN,
            alpha_max: BUBBLE_ALPHA_MAX,
            speed_min: BUBBLE_SPEED_MIN,
            speed_max: BUBBLE_SPEED_MAX,
            // Particles
            burst_count_min: BURST_COUNT_MIN,
            burst_count_max: BURST_COUNT_MAX,
            particle_size_min: PARTICLE_SIZE_MIN,
            particle_size_max: PARTICLE_SIZE_MAX,
            particle_speed_min: PARTICLE_SPEED_MIN,
            particle_speed_max: PARTICLE_SPEED_MAX,
            particle_lifespan_min: PARTICLE_LIFESPAN_MIN,
            particle_lifespan_max: PARTICLE_LIFESPAN_MAX,
            particle_gravity: PARTICLE_GRAVITY,
            particle_drag: PARTICLE_DRAG,
            // HUD / audio
            hud_font_size: HUD_FONT_SIZE,
            pop_volume: POP_VOLUME,
        }
    }
}

impl GameConfig {
    /// Reject configs whose sampled ranges are empty or whose factors sit
    /// outside their safe domain.
    pub fn validate(&self) -> GameResult<()> {
        validate_count("bubble_count", self.bubble_count)?;
        validate_range("radius", self.radius_min, self.radius_max)?;
        validate_range("alpha", self.alpha_min, self.alpha_max)?;
        validate_range("speed", self.speed_min, self.speed_max)?;
        validate_range(
            "burst_count",
            self.burst_count_min as f32,
            self.burst_count_max as f32,
        )?;
        validate_range(
            "particle_size",
            self.particle_size_min,
            self.particle_size_max,
        )?;
        validate_range(
            "particle_speed",
            self.particle_speed_min,
            self.particle_speed_max,
        )?;
        validate_range(
            "particle_lifespan",
            self.particle_lifespan_min as f32,
            self.particle_lifespan_max as f32,
        )?;
        validate_unit_factor("particle_drag", self.particle_drag)?;
        validate_unit_factor("pop_volume", self.pop_volume)?;
        Ok(())
    }
}

/// Startup system: attempt to load `assets/bubbles.toml` and overwrite the
/// `GameConfig` resource with any values present in the file.
///
/// Missing file: silently keep the compiled defaults. Parse or validation
/// errors are logged and leave the defaults in place; startup never aborts
/// over a bad config.
pub fn load_game_config(mut config: ResMut<GameConfig>) {
    let path = "assets/bubbles.toml";
    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str::<GameConfig>(&contents) {
            Ok(loaded) => match loaded.validate() {
                Ok(()) => {
                    *config = loaded;
                    println!("Loaded game config from {path}");
                }
                Err(e) => {
                    warn!("rejected {path}: {e}; using defaults");
                }
            },
            Err(e) => {
                eprintln!("Failed to parse {path}: {e}; using defaults");
            }
        },
        Err(_) => {
            // File not present; defaults are already in place.
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiled_defaults_are_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_toml_overrides_only_named_keys() {
        let cfg: GameConfig = toml::from_str("radius_min = 30.0\nbubble_count = 8").unwrap();
        assert_eq!(cfg.radius_min, 30.0);
        assert_eq!(cfg.bubble_count, 8);
        // Unnamed keys keep their compiled defaults.
        assert_eq!(cfg.radius_max, BUBBLE_RADIUS_MAX);
        assert_eq!(cfg.pop_volume, POP_VOLUME);
    }

    #[test]
    fn inverted_radius_range_fails_validation() {
        let cfg: GameConfig = toml::from_str("radius_min = 200.0").unwrap();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn out_of_domain_drag_fails_validation() {
        let cfg: GameConfig = toml::from_str("particle_drag = 1.3").unwrap();
        assert!(cfg.validate().is_err());
    }
}
