use serde::{Deserialize, Serialize};

use super::types::{Health, Side};

/// Terminal result of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchOutcome {
    /// Player 1 knocked out Player 2.
    Player1Ko,
    /// Player 2 knocked out Player 1.
    Player2Ko,
    /// Both reached zero health on the same tick.
    DoubleKo,
    Player1WinByTime,
    Player2WinByTime,
    DrawByTime,
}

impl MatchOutcome {
    pub fn winner(self) -> Option<Side> {
        match self {
            Self::Player1Ko | Self::Player1WinByTime => Some(Side::P1),
            Self::Player2Ko | Self::Player2WinByTime => Some(Side::P2),
            Self::DoubleKo | Self::DrawByTime => None,
        }
    }

    pub fn by_time(self) -> bool {
        matches!(
            self,
            Self::Player1WinByTime | Self::Player2WinByTime | Self::DrawByTime
        )
    }

    /// KO check. Returns `None` while both are standing.
    pub fn from_knockout(p1_alive: bool, p2_alive: bool) -> Option<Self> {
        match (p1_alive, p2_alive) {
            (true, true) => None,
            (true, false) => Some(Self::Player1Ko),
            (false, true) => Some(Self::Player2Ko),
            (false, false) => Some(Self::DoubleKo),
        }
    }

    /// Timeout tie-break: more health wins, equal health draws.
    pub fn from_health(p1: Health, p2: Health) -> Self {
        let (a, b) = (p1.current(), p2.current());
        if a > b {
            Self::Player1WinByTime
        } else if b > a {
            Self::Player2WinByTime
        } else {
            Self::DrawByTime
        }
    }
}

/// Round countdown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchClock {
    remaining: f32,
}

impl MatchClock {
    pub fn new(duration: f32) -> Self {
        Self {
            remaining: duration.max(0.0),
        }
    }

    pub fn tick(&mut self, dt: f32) {
        self.remaining = (self.remaining - dt.max(0.0)).max(0.0);
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    pub fn expired(&self) -> bool {
        self.remaining <= 0.0
    }

    /// `mm:ss`, truncated to whole seconds.
    pub fn display(&self) -> String {
        let secs = self.remaining as u32;
        format!("{:02}:{:02}", secs / 60, secs % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_favors_more_health() {
        let a = Health::full(250.0).sub_clamped(150.0);
        let b = Health::full(250.0).sub_clamped(190.0);
        assert_eq!(MatchOutcome::from_health(a, b), MatchOutcome::Player1WinByTime);
        assert_eq!(MatchOutcome::from_health(b, a), MatchOutcome::Player2WinByTime);
        assert_eq!(MatchOutcome::from_health(a, a), MatchOutcome::DrawByTime);
    }

    #[test]
    fn knockout_names_the_survivor() {
        assert_eq!(MatchOutcome::from_knockout(true, true), None);
        assert_eq!(
            MatchOutcome::from_knockout(true, false).and_then(MatchOutcome::winner),
            Some(Side::P1)
        );
        assert_eq!(
            MatchOutcome::from_knockout(false, false),
            Some(MatchOutcome::DoubleKo)
        );
    }

    #[test]
    fn clock_counts_down_and_stops_at_zero() {
        let mut clock = MatchClock::new(120.0);
        assert_eq!(clock.display(), "02:00");
        clock.tick(44.5);
        assert_eq!(clock.display(), "01:15");
        clock.tick(500.0);
        assert!(clock.expired());
        assert_eq!(clock.remaining(), 0.0);
        assert_eq!(clock.display(), "00:00");
    }
}
