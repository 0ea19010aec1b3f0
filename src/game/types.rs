use serde::{Deserialize, Serialize};

// ── Newtypes ────────────────────────────────────────────────────────

/// Hit points. Always clamped to [0, max].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Health {
    current: f32,
    max: f32,
}

impl Health {
    pub fn full(max: f32) -> Self {
        debug_assert!(max.is_finite(), "Health max must be finite");
        let max = max.max(0.0);
        Self { current: max, max }
    }

    pub fn current(self) -> f32 {
        self.current
    }

    pub fn sub_clamped(self, delta: f32) -> Self {
        let current = (self.current - delta.max(0.0)).clamp(0.0, self.max);
        debug_assert!(current.is_finite());
        Self { current, ..self }
    }

    pub fn is_depleted(self) -> bool {
        self.current <= 0.0
    }

    /// Remaining fraction in [0, 1] (0 when max is 0).
    pub fn ratio(self) -> f32 {
        if self.max > 0.0 {
            (self.current / self.max).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

/// Count-up timer in seconds.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Elapsed(pub f32);

impl Elapsed {
    pub fn advance(&mut self, dt: f32) {
        self.0 += dt.max(0.0);
    }

    pub fn reached(self, duration: f32) -> bool {
        self.0 >= duration
    }
}

// ── Enums ───────────────────────────────────────────────────────────

/// Which of the two fighters. P1 is always human-driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    P1,
    P2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    /// Facing implied by a horizontal direction; `None` for no movement.
    pub fn from_dir(dir: f32) -> Option<Self> {
        if dir > 0.0 {
            Some(Self::Right)
        } else if dir < 0.0 {
            Some(Self::Left)
        } else {
            None
        }
    }

    pub fn sign(self) -> f32 {
        match self {
            Self::Right => 1.0,
            Self::Left => -1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameMode {
    #[default]
    PvAI,
    PvP,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_never_leaves_its_range() {
        let hp = Health::full(250.0);
        assert_eq!(hp.sub_clamped(12.0).current(), 238.0);
        assert_eq!(hp.sub_clamped(1000.0).current(), 0.0);
        assert_eq!(hp.sub_clamped(-50.0).current(), 250.0);
        assert!(hp.sub_clamped(250.0).is_depleted());
    }

    #[test]
    fn zero_max_health_has_zero_ratio() {
        assert_eq!(Health::full(0.0).ratio(), 0.0);
        assert_eq!(Health::full(100.0).sub_clamped(25.0).ratio(), 0.75);
    }
}
