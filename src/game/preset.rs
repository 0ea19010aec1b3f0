use std::collections::HashMap;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::action::Action;

/// Playable characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Archetype {
    #[default]
    Knight,
    Rogue,
    Samurai,
}

impl Archetype {
    pub const ALL: [Archetype; 3] = [Archetype::Knight, Archetype::Rogue, Archetype::Samurai];

    /// Cycle through the roster in either direction.
    pub fn step(self, delta: i32) -> Self {
        let idx = Self::ALL.iter().position(|a| *a == self).unwrap_or(0) as i32;
        let len = Self::ALL.len() as i32;
        Self::ALL[(idx + delta).rem_euclid(len) as usize]
    }
}

/// Frame count and playback speed of one action's sprite sheet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Clip {
    pub frames: u32,
    pub seconds_per_frame: f32,
}

/// Per-action frame counts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameCounts {
    pub idle: u32,
    pub run: u32,
    pub jump: u32,
    pub attack1: u32,
    pub attack2: u32,
    pub attack3: u32,
    pub shield: u32,
    pub hurt: u32,
    pub dead: u32,
}

/// Per-action seconds per frame. Shield plays at idle speed, all attacks share one speed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameSpeeds {
    pub idle: f32,
    pub run: f32,
    pub jump: f32,
    pub attack: f32,
    pub hurt: f32,
    pub dead: f32,
}

/// Immutable animation data for an archetype.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchetypePreset {
    pub archetype: Archetype,
    pub name: String,
    pub title_path: String,
    /// Prepended to each action's sheet stem, e.g. `S_` + `Idle` + `.png`.
    pub sheet_prefix: String,
    pub frames: FrameCounts,
    pub speeds: FrameSpeeds,
    pub sprite_scale: f32,
}

impl ArchetypePreset {
    pub fn clip(&self, action: Action) -> Clip {
        let f = &self.frames;
        let s = &self.speeds;
        let (frames, seconds_per_frame) = match action {
            Action::Idle => (f.idle, s.idle),
            Action::Run => (f.run, s.run),
            Action::Jump => (f.jump, s.jump),
            Action::Attack1 => (f.attack1, s.attack),
            Action::Attack2 => (f.attack2, s.attack),
            Action::Attack3 => (f.attack3, s.attack),
            Action::Shield => (f.shield, s.idle),
            Action::Hurt => (f.hurt, s.hurt),
            Action::Dead => (f.dead, s.dead),
        };
        Clip {
            frames,
            seconds_per_frame,
        }
    }

    pub fn sheet_path(&self, action: Action) -> String {
        format!("{}{}.png", self.sheet_prefix, action.sheet_stem())
    }

    /// How long a hit keeps the fighter staggered.
    pub fn hurt_duration(&self) -> f32 {
        self.speeds.hurt * self.frames.hurt as f32
    }
}

/// Registry of all archetype presets, indexed by archetype.
#[derive(Resource, Debug, Clone, Default)]
pub struct PresetRegistry {
    pub presets: HashMap<Archetype, ArchetypePreset>,
}

impl PresetRegistry {
    /// Populate with the built-in roster. `hurt_duration` spreads over each hurt clip.
    pub fn with_defaults(hurt_duration: f32) -> Self {
        let mut reg = Self::default();

        reg.insert(ArchetypePreset {
            archetype: Archetype::Knight,
            name: "Knight".into(),
            title_path: "char1_title.png".into(),
            sheet_prefix: "".into(),
            frames: FrameCounts {
                idle: 6,
                run: 8,
                jump: 10,
                attack1: 4,
                attack2: 3,
                attack3: 4,
                shield: 2,
                hurt: 3,
                dead: 3,
            },
            speeds: FrameSpeeds {
                idle: 0.15,
                run: 0.08,
                jump: 0.1,
                attack: 0.1,
                hurt: hurt_duration / 3.0,
                dead: 0.15,
            },
            sprite_scale: 2.6,
        });

        reg.insert(ArchetypePreset {
            archetype: Archetype::Rogue,
            name: "Rogue".into(),
            title_path: "Enemy_title.png".into(),
            sheet_prefix: "Enemy_".into(),
            frames: FrameCounts {
                idle: 6,
                run: 8,
                jump: 12,
                attack1: 6,
                attack2: 4,
                attack3: 3,
                shield: 2,
                hurt: 2,
                dead: 3,
            },
            speeds: FrameSpeeds {
                idle: 0.15,
                run: 0.08,
                jump: 0.1,
                attack: 0.1,
                hurt: hurt_duration / 2.0,
                dead: 0.15,
            },
            sprite_scale: 2.5,
        });

        reg.insert(ArchetypePreset {
            archetype: Archetype::Samurai,
            name: "Samurai".into(),
            title_path: "S_title.png".into(),
            sheet_prefix: "S_".into(),
            frames: FrameCounts {
                idle: 6,
                run: 8,
                jump: 9,
                attack1: 4,
                attack2: 5,
                attack3: 4,
                shield: 2,
                hurt: 3,
                dead: 6,
            },
            speeds: FrameSpeeds {
                idle: 0.15,
                run: 0.08,
                jump: 0.1,
                attack: 0.1,
                hurt: hurt_duration / 3.0,
                dead: 0.15,
            },
            sprite_scale: 2.7,
        });

        reg
    }

    pub fn insert(&mut self, preset: ArchetypePreset) {
        self.presets.insert(preset.archetype, preset);
    }

    pub fn get(&self, archetype: Archetype) -> Option<&ArchetypePreset> {
        self.presets.get(&archetype)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_archetype_has_a_preset() {
        let reg = PresetRegistry::with_defaults(0.4);
        for archetype in Archetype::ALL {
            assert_eq!(reg.get(archetype).map(|p| p.archetype), Some(archetype));
        }
    }

    #[test]
    fn hurt_duration_matches_configured_stagger() {
        let reg = PresetRegistry::with_defaults(0.4);
        for preset in reg.presets.values() {
            assert!((preset.hurt_duration() - 0.4).abs() < 1e-5, "{}", preset.name);
        }
    }

    #[test]
    fn roster_cycles_both_ways() {
        assert_eq!(Archetype::Knight.step(1), Archetype::Rogue);
        assert_eq!(Archetype::Samurai.step(1), Archetype::Knight);
        assert_eq!(Archetype::Knight.step(-1), Archetype::Samurai);
    }

    #[test]
    fn shield_borrows_idle_speed() {
        let reg = PresetRegistry::with_defaults(0.4);
        let knight = reg.get(Archetype::Knight).unwrap();
        assert_eq!(knight.clip(Action::Shield).seconds_per_frame, knight.speeds.idle);
        assert_eq!(knight.clip(Action::Shield).frames, 2);
        assert_eq!(knight.sheet_path(Action::Attack2), "Attack_2.png");
        let samurai = reg.get(Archetype::Samurai).unwrap();
        assert_eq!(samurai.sheet_path(Action::Idle), "S_Idle.png");
    }
}
