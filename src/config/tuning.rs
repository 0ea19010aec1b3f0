use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::ConfigError;

/// All tunable game parameters, loaded from tuning.ron.
#[derive(Debug, Clone, PartialEq, Resource, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Fixed simulation step (seconds).
    pub dt: f32,
    /// Deltas above this are treated as a stall and replaced by `dt`.
    pub max_frame_dt: f32,
    /// Virtual play-field resolution the simulation is laid out in.
    pub field_width: f32,
    pub field_height: f32,
    /// Distance between the bottom of a grounded sprite and the field bottom.
    pub ground_margin: f32,
    /// Start x of each side as a fraction of the field width.
    pub p1_start_ratio: f32,
    pub p2_start_ratio: f32,

    pub gravity: f32,
    pub jump_strength: f32,
    pub movement_speed: f32,
    pub run_boost: f32,

    pub max_health: f32,
    pub attack_damage: f32,
    pub attack_cooldown: f32,
    pub hurt_duration: f32,
    pub damage_flash_duration: f32,
    pub round_duration: f32,

    /// Reference range for AI decisions (not the hitbox size).
    pub attack_range: f32,
    pub ai_decision_interval: f32,
    pub ai_detection_range: f32,
    pub ai_band_min_ratio: f32,
    pub ai_band_max_ratio: f32,
    pub ai_chase_speed_ratio: f32,

    pub hit_shape: HitShape,
    /// Frame edge used when a sprite sheet is missing or degenerate.
    pub default_frame_size: u32,

    pub damage_text_lifetime: f32,
    pub damage_text_speed: f32,
    pub shake_max_offset: f32,
    pub shake_duration: f32,
    pub map_frame_delay: f32,
}

/// Attack hitbox and hurtbox proportions, relative to sprite bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitShape {
    pub attack_width: f32,
    pub attack_height_ratio: f32,
    pub attack_top_ratio: f32,
    pub attack_reach: f32,
    pub attack_forward_ratio: f32,
    pub hurt_width_ratio: f32,
    pub hurt_height_ratio: f32,
    pub hurt_top_ratio: f32,
    /// Horizontal shift of the hurtbox toward the facing side, as a width fraction.
    pub hurt_facing_bias: f32,
}

impl Default for HitShape {
    fn default() -> Self {
        Self {
            attack_width: 70.0,
            attack_height_ratio: 0.7,
            attack_top_ratio: 0.15,
            attack_reach: 10.0,
            attack_forward_ratio: 0.3,
            hurt_width_ratio: 0.35,
            hurt_height_ratio: 0.8,
            hurt_top_ratio: 0.1,
            hurt_facing_bias: 0.0,
        }
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            dt: 1.0 / 60.0,
            max_frame_dt: 1.0 / 20.0,
            field_width: 1280.0,
            field_height: 720.0,
            ground_margin: 20.0,
            p1_start_ratio: 0.25,
            p2_start_ratio: 0.75,
            gravity: 0.6,
            jump_strength: -14.0,
            movement_speed: 5.0,
            run_boost: 1.30,
            max_health: 250.0,
            attack_damage: 12.0,
            attack_cooldown: 0.8,
            hurt_duration: 0.4,
            damage_flash_duration: 0.2,
            round_duration: 120.0,
            attack_range: 90.0,
            ai_decision_interval: 0.15,
            ai_detection_range: 450.0,
            ai_band_min_ratio: 0.3,
            ai_band_max_ratio: 0.7,
            ai_chase_speed_ratio: 0.7,
            hit_shape: HitShape::default(),
            default_frame_size: 100,
            damage_text_lifetime: 0.7,
            damage_text_speed: -50.0,
            shake_max_offset: 5.0,
            shake_duration: 0.15,
            map_frame_delay: 0.11,
        }
    }
}

impl Tuning {
    /// Get the data directory for tuning files.
    pub fn data_dir() -> PathBuf {
        let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        base.join("fighter_duel")
    }

    /// Path to the tuning file.
    pub fn file_path() -> PathBuf {
        Self::data_dir().join("tuning.ron")
    }

    /// Lower and upper edge of the distance band in which the AI commits to an attack.
    pub fn ai_attack_band(&self) -> (f32, f32) {
        (
            self.attack_range * self.ai_band_min_ratio,
            self.attack_range * self.ai_band_max_ratio,
        )
    }

    /// Replace stall-sized deltas with the nominal step.
    pub fn clamp_frame_dt(&self, raw: f32) -> f32 {
        if !raw.is_finite() || raw < 0.0 {
            0.0
        } else if raw > self.max_frame_dt {
            self.dt
        } else {
            raw
        }
    }

    /// Parse a tuning file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron(&contents)
    }

    pub fn from_ron(contents: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(contents)?)
    }

    /// Load from file, or create default if not found.
    pub fn load_or_default() -> Self {
        let path = Self::file_path();
        if path.exists() {
            match Self::load(&path) {
                Ok(tuning) => return tuning,
                Err(e) => {
                    warn!("{e}, using defaults");
                    return Self::default();
                }
            }
        }
        let tuning = Self::default();
        if let Err(e) = tuning.save_to(&path) {
            warn!("{e}");
        }
        tuning
    }

    /// Save current tuning to `path`.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let pretty = ron::ser::PrettyConfig::default();
        let s = ron::ser::to_string_pretty(self, pretty)?;
        std::fs::write(path, s).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reload from file (called by key press).
    pub fn reload(&mut self) {
        *self = Self::load_or_default();
        info!("Tuning reloaded");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults_for_missing_fields() {
        let tuning = Tuning::from_ron("(attack_damage: 20.0, round_duration: 60.0)").unwrap();
        assert_eq!(tuning.attack_damage, 20.0);
        assert_eq!(tuning.round_duration, 60.0);
        assert_eq!(tuning.max_health, 250.0);
        assert_eq!(tuning.hit_shape, HitShape::default());
    }

    #[test]
    fn garbage_is_a_parse_error() {
        let err = Tuning::from_ron("not ron at all {").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn stall_sized_delta_is_replaced_by_nominal_step() {
        let tuning = Tuning::default();
        assert_eq!(tuning.clamp_frame_dt(0.5), tuning.dt);
        assert_eq!(tuning.clamp_frame_dt(0.02), 0.02);
        assert_eq!(tuning.clamp_frame_dt(f32::NAN), 0.0);
    }

    #[test]
    fn attack_band_is_a_sub_range_of_attack_range() {
        let (lo, hi) = Tuning::default().ai_attack_band();
        assert!((lo - 27.0).abs() < 1e-4);
        assert!((hi - 63.0).abs() < 1e-4);
    }
}
