use serde::{Deserialize, Serialize};

/// Everything a fighter can be doing. `Dead` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Action {
    #[default]
    Idle,
    Run,
    Jump,
    Attack1,
    Attack2,
    Attack3,
    Shield,
    Hurt,
    Dead,
}

/// Which attack button was used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackKind {
    Light,
    Medium,
    Heavy,
}

/// How the animation driver treats an action once it runs out of frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Playback {
    Loop,
    /// Plays once, then reports completion.
    OneShot,
    /// Plays once and holds the last frame.
    Hold,
}

impl Action {
    pub const COUNT: usize = 9;

    pub const ALL: [Action; Action::COUNT] = [
        Action::Idle,
        Action::Run,
        Action::Jump,
        Action::Attack1,
        Action::Attack2,
        Action::Attack3,
        Action::Shield,
        Action::Hurt,
        Action::Dead,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn attack(kind: AttackKind) -> Self {
        match kind {
            AttackKind::Light => Self::Attack1,
            AttackKind::Medium => Self::Attack2,
            AttackKind::Heavy => Self::Attack3,
        }
    }

    pub fn is_attack(self) -> bool {
        matches!(self, Self::Attack1 | Self::Attack2 | Self::Attack3)
    }

    pub fn playback(self) -> Playback {
        match self {
            Self::Idle | Self::Run | Self::Jump | Self::Shield => Playback::Loop,
            Self::Attack1 | Self::Attack2 | Self::Attack3 => Playback::OneShot,
            Self::Hurt | Self::Dead => Playback::Hold,
        }
    }

    /// File stem of this action's sprite sheet.
    pub fn sheet_stem(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Run => "Run",
            Self::Jump => "Jump",
            Self::Attack1 => "Attack_1",
            Self::Attack2 => "Attack_2",
            Self::Attack3 => "Attack_3",
            Self::Shield => "Shield",
            Self::Hurt => "Hurt",
            Self::Dead => "Dead",
        }
    }
}
