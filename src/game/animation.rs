use bevy::prelude::*;

use super::action::{Action, Playback};
use super::preset::{ArchetypePreset, Clip};

/// Unscaled frame geometry of an archetype's sprite sheets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetMetrics {
    frame_widths: [u32; Action::COUNT],
    frame_height: u32,
}

impl SheetMetrics {
    /// Every frame `size` × `size`; used until sheets are measured or when they fail to load.
    pub fn uniform(size: u32) -> Self {
        let size = size.max(1);
        Self {
            frame_widths: [size; Action::COUNT],
            frame_height: size,
        }
    }

    /// Measure from sheet pixel sizes. Missing, zero-sized or zero-frame sheets fall back to `fallback`.
    pub fn measure(
        preset: &ArchetypePreset,
        sheet_size: impl Fn(Action) -> Option<UVec2>,
        fallback: u32,
    ) -> Self {
        let mut metrics = Self::uniform(fallback);

        if let Some(idle) = sheet_size(Action::Idle).filter(|s| s.y > 0) {
            metrics.frame_height = idle.y;
        }

        for action in Action::ALL {
            let frames = preset.clip(action).frames;
            let width = sheet_size(action)
                .filter(|s| s.x > 0 && frames > 0)
                .map(|s| s.x / frames)
                .filter(|w| *w > 0);
            if let Some(width) = width {
                metrics.frame_widths[action.index()] = width;
            }
        }

        metrics
    }

    pub fn frame_width(&self, action: Action) -> u32 {
        self.frame_widths[action.index()]
    }

    pub fn frame_height(&self) -> u32 {
        self.frame_height
    }

    pub fn frame_size(&self, action: Action) -> Vec2 {
        Vec2::new(self.frame_width(action) as f32, self.frame_height as f32)
    }
}

/// Emitted by [`AnimationDriver::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationEvent {
    /// An attack clip ran past its last frame. The driver is back at frame 0.
    AttackFinished,
    /// A hold clip (hurt, dead) reached its last frame for the first time.
    PoseHeld(Action),
}

/// Maps (action, elapsed time) to a frame index.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimationDriver {
    action: Action,
    frame: u32,
    elapsed: f32,
}

impl AnimationDriver {
    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// Switch clips. A different action always restarts from frame 0.
    pub fn sync(&mut self, action: Action) {
        if self.action != action {
            *self = Self {
                action,
                ..default()
            };
        }
    }

    pub fn restart(&mut self) {
        self.frame = 0;
        self.elapsed = 0.0;
    }

    pub fn advance(&mut self, clip: Clip, dt: f32) -> Option<AnimationEvent> {
        self.elapsed += dt.max(0.0);
        if self.elapsed < clip.seconds_per_frame {
            return None;
        }
        self.elapsed = 0.0;

        // Nothing to show, but a one-shot still has to end.
        if clip.frames == 0 {
            return matches!(self.action.playback(), Playback::OneShot)
                .then_some(AnimationEvent::AttackFinished);
        }

        let last = clip.frames - 1;
        match self.action.playback() {
            Playback::Loop => {
                self.frame = (self.frame + 1) % clip.frames;
                None
            }
            Playback::OneShot => {
                self.frame += 1;
                if self.frame >= clip.frames {
                    self.frame = 0;
                    Some(AnimationEvent::AttackFinished)
                } else {
                    None
                }
            }
            Playback::Hold => {
                if self.frame >= last {
                    self.frame = last;
                    return None;
                }
                self.frame += 1;
                (self.frame == last).then_some(AnimationEvent::PoseHeld(self.action))
            }
        }
    }

    /// Sub-region of the current action's sheet to present.
    pub fn frame_rect(&self, metrics: &SheetMetrics) -> Rect {
        let size = metrics.frame_size(self.action);
        let min = Vec2::new(self.frame as f32 * size.x, 0.0);
        Rect::from_corners(min, min + size)
    }
}
