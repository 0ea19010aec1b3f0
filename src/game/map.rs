use serde::{Deserialize, Serialize};

/// Selectable arenas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MapId {
    #[default]
    TemplumDraconis,
    TerraRuinae,
    ShogunsCurse,
}

/// Numbered image files making up an animated background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSequence {
    pub prefix: &'static str,
    pub suffix: &'static str,
    pub count: u32,
    pub first: u32,
    /// Zero-pad the frame number to this many digits (0 = none).
    pub pad: usize,
}

impl FrameSequence {
    pub fn path(&self, index: u32) -> String {
        let n = self.first + index;
        format!("{}{:0pad$}{}", self.prefix, n, self.suffix, pad = self.pad)
    }

    pub fn paths(&self) -> Vec<String> {
        (0..self.count).map(|i| self.path(i)).collect()
    }
}

impl MapId {
    pub const ALL: [MapId; 3] = [MapId::TemplumDraconis, MapId::TerraRuinae, MapId::ShogunsCurse];

    pub fn display_name(self) -> &'static str {
        match self {
            Self::TemplumDraconis => "Templum Draconis",
            Self::TerraRuinae => "Terra Ruinae",
            Self::ShogunsCurse => "Shogun's Curse",
        }
    }

    pub fn preview_path(self) -> &'static str {
        match self {
            Self::TemplumDraconis => "Map1_title.png",
            Self::TerraRuinae => "Map2_title.png",
            Self::ShogunsCurse => "bg1.1.png",
        }
    }

    pub fn frames(self) -> FrameSequence {
        match self {
            Self::TemplumDraconis => FrameSequence {
                prefix: "frame_",
                suffix: "_delay-0.11s.png",
                count: 7,
                first: 1,
                pad: 0,
            },
            Self::TerraRuinae => FrameSequence {
                prefix: "",
                suffix: ".png",
                count: 20,
                first: 1,
                pad: 6,
            },
            Self::ShogunsCurse => FrameSequence {
                prefix: "bg1.",
                suffix: ".png",
                count: 8,
                first: 1,
                pad: 0,
            },
        }
    }

    /// Cycle through the roster in either direction.
    pub fn step(self, delta: i32) -> Self {
        let idx = Self::ALL.iter().position(|m| *m == self).unwrap_or(0) as i32;
        let len = Self::ALL.len() as i32;
        Self::ALL[(idx + delta).rem_euclid(len) as usize]
    }
}

/// Frame timer for an animated background.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BackdropClock {
    frame: u32,
    elapsed: f32,
}

impl BackdropClock {
    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// Advance by `dt`; returns true when the displayed frame changed.
    pub fn advance(&mut self, dt: f32, delay: f32, count: u32) -> bool {
        if count == 0 || delay <= 0.0 {
            return false;
        }
        self.elapsed += dt.max(0.0);
        let mut changed = false;
        while self.elapsed >= delay {
            self.elapsed -= delay;
            self.frame = (self.frame + 1) % count;
            changed = true;
        }
        changed
    }
}
