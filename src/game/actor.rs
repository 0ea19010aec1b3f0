use bevy::prelude::*;

use super::action::{Action, AttackKind};
use super::ai::Observation;
use super::animation::{AnimationDriver, AnimationEvent, SheetMetrics};
use super::intent::{Controller, Intent};
use super::preset::{Archetype, ArchetypePreset};
use super::types::{Elapsed, Facing, Health, Side};
use crate::config::tuning::{HitShape, Tuning};

/// Result of a damage application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitOutcome {
    /// Target was already dead.
    Ignored,
    /// Shield absorbed the hit entirely.
    Blocked,
    Hurt,
    Killed,
}

/// One fighter: action state machine, kinematics, timers and health.
///
/// Positions are in play-field space: `position` is the top-left corner of the
/// sprite bounds and y grows downward toward the ground.
#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    side: Side,
    pub name: String,
    preset: ArchetypePreset,
    metrics: SheetMetrics,
    pub controller: Controller,

    // ── Kinematics ──
    position: Vec2,
    velocity_y: f32,
    facing: Facing,
    ground_y: f32,

    // ── Action state ──
    action: Action,
    jumping: bool,
    attacking: bool,
    shielding: bool,
    hurt: bool,
    alive: bool,
    swing_connected: bool,

    // ── Timers ──
    cooldown: Elapsed,
    can_attack: bool,
    hurt_timer: Elapsed,
    flash: Option<Elapsed>,
    anim: AnimationDriver,

    health: Health,
}

impl Actor {
    pub fn new(
        side: Side,
        name: impl Into<String>,
        preset: &ArchetypePreset,
        controller: Controller,
        tuning: &Tuning,
    ) -> Self {
        let mut actor = Self {
            side,
            name: name.into(),
            preset: preset.clone(),
            metrics: SheetMetrics::uniform(tuning.default_frame_size),
            controller,
            position: Vec2::ZERO,
            velocity_y: 0.0,
            facing: Facing::default(),
            ground_y: 0.0,
            action: Action::Idle,
            jumping: false,
            attacking: false,
            shielding: false,
            hurt: false,
            alive: true,
            swing_connected: false,
            cooldown: Elapsed::default(),
            can_attack: true,
            hurt_timer: Elapsed::default(),
            flash: None,
            anim: AnimationDriver::default(),
            health: Health::full(tuning.max_health),
        };
        actor.reset(tuning);
        actor
    }

    // ── Lifecycle ───────────────────────────────────────────────────

    /// Swap archetype data and controller, then reset for a new match.
    pub fn reload(&mut self, preset: &ArchetypePreset, controller: Controller, tuning: &Tuning) {
        self.preset = preset.clone();
        self.metrics = SheetMetrics::uniform(tuning.default_frame_size);
        self.controller = controller;
        self.reset(tuning);
    }

    /// Full health, idle, at the side's start position, every flag cleared.
    pub fn reset(&mut self, tuning: &Tuning) {
        self.velocity_y = 0.0;
        self.facing = match self.side {
            Side::P1 => Facing::Right,
            Side::P2 => Facing::Left,
        };
        self.action = Action::Idle;
        self.jumping = false;
        self.attacking = false;
        self.shielding = false;
        self.hurt = false;
        self.alive = true;
        self.swing_connected = false;
        self.cooldown = Elapsed::default();
        self.can_attack = true;
        self.hurt_timer = Elapsed::default();
        self.flash = None;
        self.anim = AnimationDriver::default();
        self.health = Health::full(tuning.max_health);
        self.controller.reset();

        self.ground_y = self.ground_for(tuning);
        let ratio = match self.side {
            Side::P1 => tuning.p1_start_ratio,
            Side::P2 => tuning.p2_start_ratio,
        };
        self.position = Vec2::new(tuning.field_width * ratio, self.ground_y);
    }

    /// Install measured sheet geometry. A grounded actor is snapped to the new ground line.
    pub fn set_metrics(&mut self, metrics: SheetMetrics, tuning: &Tuning) {
        self.metrics = metrics;
        self.ground_y = self.ground_for(tuning);
        if !self.jumping {
            self.position.y = self.ground_y;
        }
    }

    fn ground_for(&self, tuning: &Tuning) -> f32 {
        let height = self.metrics.frame_height() as f32 * self.preset.sprite_scale;
        tuning.field_height - height - tuning.ground_margin
    }

    // ── Per-tick update ─────────────────────────────────────────────

    /// Advance one tick: timers, state overrides, intent, physics, field clamp, animation.
    pub fn update(&mut self, intent: &Intent, tuning: &Tuning, dt: f32) {
        self.cooldown.advance(dt);
        if !self.can_attack && self.cooldown.reached(tuning.attack_cooldown) {
            self.can_attack = true;
        }

        if let Some(flash) = self.flash.as_mut() {
            flash.advance(dt);
            if flash.reached(tuning.damage_flash_duration) {
                self.flash = None;
            }
        }

        if !self.alive {
            self.action = Action::Dead;
        } else if self.hurt {
            self.action = Action::Hurt;
            self.hurt_timer.advance(dt);
            if self.hurt_timer.reached(self.preset.hurt_duration()) {
                self.hurt = false;
                self.action = Action::Idle;
            }
        }

        if self.alive && !self.hurt {
            self.apply_intent(intent, tuning, dt);
        }

        self.integrate(tuning, dt);
        self.clamp_to_field(tuning.field_width);
        self.animate(dt);
    }

    fn apply_intent(&mut self, intent: &Intent, tuning: &Tuning, dt: f32) {
        if intent.shield {
            if !self.attacking {
                self.shielding = true;
            }
        } else {
            self.shielding = false;
        }

        if let Some(kind) = intent.attack {
            self.try_attack(kind);
        }

        let mut moving = false;
        if !self.attacking && !self.shielding {
            if let Some(facing) = Facing::from_dir(intent.move_dir) {
                let boost = if intent.run { tuning.run_boost } else { 1.0 };
                let speed = tuning.movement_speed * intent.move_dir.abs() * boost * dt * 60.0;
                self.position.x += facing.sign() * speed;
                self.facing = facing;
                moving = true;
            }
            if intent.jump && !self.jumping {
                self.jumping = true;
                self.velocity_y = tuning.jump_strength;
            }
        }

        if self.shielding {
            self.action = Action::Shield;
        } else if !self.attacking {
            self.action = if self.jumping {
                Action::Jump
            } else if moving {
                Action::Run
            } else {
                Action::Idle
            };
        }
    }

    /// Start a swing if every guard allows it. Returns whether it started.
    pub fn try_attack(&mut self, kind: AttackKind) -> bool {
        if !self.alive || self.hurt || self.shielding || self.attacking || !self.can_attack {
            return false;
        }
        self.attacking = true;
        self.swing_connected = false;
        self.can_attack = false;
        self.cooldown = Elapsed::default();
        self.action = Action::attack(kind);
        self.anim.sync(self.action);
        self.anim.restart();
        true
    }

    /// Jump arc. Runs whenever airborne so hurt or dead actors still fall.
    fn integrate(&mut self, tuning: &Tuning, dt: f32) {
        if !self.jumping {
            return;
        }
        self.velocity_y += tuning.gravity * dt * 60.0;
        self.position.y += self.velocity_y * dt * 60.0;

        if self.position.y >= self.ground_y {
            self.position.y = self.ground_y;
            self.jumping = false;
            self.velocity_y = 0.0;
            if self.action == Action::Jump {
                self.action = Action::Idle;
            }
        }
    }

    fn clamp_to_field(&mut self, field_width: f32) {
        let width = self.size().x;
        if self.position.x + width > field_width {
            self.position.x = field_width - width;
        }
        if self.position.x < 0.0 {
            self.position.x = 0.0;
        }
    }

    fn animate(&mut self, dt: f32) {
        self.anim.sync(self.action);
        match self.anim.advance(self.preset.clip(self.action), dt) {
            Some(AnimationEvent::AttackFinished) => {
                self.attacking = false;
                if self.alive && !self.hurt {
                    self.action = Action::Idle;
                    self.anim.sync(self.action);
                }
            }
            Some(AnimationEvent::PoseHeld(Action::Dead)) => {
                debug!("{} ({:?}) is down", self.name, self.side);
            }
            Some(AnimationEvent::PoseHeld(_)) | None => {}
        }
    }

    // ── Combat ──────────────────────────────────────────────────────

    /// Apply damage. Dead targets ignore it and a raised shield negates it entirely.
    pub fn take_damage(&mut self, amount: f32) -> HitOutcome {
        if !self.alive {
            return HitOutcome::Ignored;
        }
        if self.shielding {
            return HitOutcome::Blocked;
        }

        self.health = self.health.sub_clamped(amount);
        self.attacking = false;
        self.flash = Some(Elapsed::default());

        if self.health.is_depleted() {
            self.alive = false;
            self.hurt = false;
            self.action = Action::Dead;
            self.anim.sync(self.action);
            HitOutcome::Killed
        } else {
            self.hurt = true;
            self.hurt_timer = Elapsed::default();
            self.action = Action::Hurt;
            self.anim.sync(self.action);
            HitOutcome::Hurt
        }
    }

    /// The current swing has landed; it cannot land again.
    pub fn mark_swing_connected(&mut self) {
        self.swing_connected = true;
    }

    /// Swing that may still deal damage this tick.
    pub fn live_hitbox(&self, shape: &HitShape) -> Option<Rect> {
        if self.swing_connected {
            return None;
        }
        self.hitbox(shape)
    }

    /// Forward attack region; exists only while attacking.
    pub fn hitbox(&self, shape: &HitShape) -> Option<Rect> {
        if !self.attacking {
            return None;
        }
        let bounds = self.bounds();
        let size = bounds.size();
        let height = size.y * shape.attack_height_ratio;
        let top = bounds.min.y + size.y * shape.attack_top_ratio;
        let forward = size.x * shape.attack_forward_ratio;
        let left = match self.facing {
            Facing::Right => bounds.max.x - forward + shape.attack_reach,
            Facing::Left => bounds.min.x + forward - shape.attack_width - shape.attack_reach,
        };
        Some(Rect::new(left, top, left + shape.attack_width, top + height))
    }

    /// Narrower centered body region used as the collision target.
    pub fn hurtbox(&self, shape: &HitShape) -> Rect {
        let bounds = self.bounds();
        let size = bounds.size();
        let width = size.x * shape.hurt_width_ratio;
        let height = size.y * shape.hurt_height_ratio;
        let centered = bounds.min.x + size.x * (1.0 - shape.hurt_width_ratio) / 2.0;
        let left = centered + self.facing.sign() * size.x * shape.hurt_facing_bias;
        let top = bounds.min.y + size.y * shape.hurt_top_ratio;
        Rect::new(left, top, left + width, top + height)
    }

    // ── Queries ─────────────────────────────────────────────────────

    /// Scaled size of the current frame.
    pub fn size(&self) -> Vec2 {
        self.metrics.frame_size(self.action) * self.preset.sprite_scale
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_corners(self.position, self.position + self.size())
    }

    pub fn observe(&self, opponent: &Actor) -> Observation {
        Observation {
            position: self.position,
            opponent_position: opponent.position,
            opponent_alive: opponent.alive,
            can_attack: self.can_attack,
            busy: self.attacking || self.shielding,
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn archetype(&self) -> Archetype {
        self.preset.archetype
    }

    pub fn preset(&self) -> &ArchetypePreset {
        &self.preset
    }

    pub fn metrics(&self) -> &SheetMetrics {
        &self.metrics
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn ground_y(&self) -> f32 {
        self.ground_y
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn action(&self) -> Action {
        self.action
    }

    pub fn health(&self) -> Health {
        self.health
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn is_jumping(&self) -> bool {
        self.jumping
    }

    pub fn is_attacking(&self) -> bool {
        self.attacking
    }

    pub fn is_shielding(&self) -> bool {
        self.shielding
    }

    pub fn is_hurt(&self) -> bool {
        self.hurt
    }

    pub fn can_attack(&self) -> bool {
        self.can_attack
    }

    pub fn swing_connected(&self) -> bool {
        self.swing_connected
    }

    pub fn is_flashing(&self) -> bool {
        self.flash.is_some()
    }

    /// Sheet sub-region of the frame on display.
    pub fn frame_rect(&self) -> Rect {
        self.anim.frame_rect(&self.metrics)
    }

    #[cfg(test)]
    pub(crate) fn place_at(&mut self, x: f32) {
        self.position.x = x;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::intent::Buttons;
    use crate::game::preset::PresetRegistry;

    fn knight(side: Side) -> (Actor, Tuning) {
        let tuning = Tuning::default();
        let reg = PresetRegistry::with_defaults(tuning.hurt_duration);
        let preset = reg.get(Archetype::Knight).unwrap();
        (Actor::new(side, "Test", preset, Controller::Human, &tuning), tuning)
    }

    fn tick(actor: &mut Actor, buttons: Buttons, tuning: &Tuning) {
        actor.update(&buttons.to_intent(), tuning, tuning.dt);
    }

    fn ticks(actor: &mut Actor, buttons: Buttons, tuning: &Tuning, n: usize) {
        for _ in 0..n {
            tick(actor, buttons, tuning);
        }
    }

    #[test]
    fn hit_hurts_then_recovers_to_idle() {
        let (mut actor, tuning) = knight(Side::P1);
        assert_eq!(actor.take_damage(12.0), HitOutcome::Hurt);
        assert_eq!(actor.health().current(), 238.0);
        assert_eq!(actor.action(), Action::Hurt);
        assert!(actor.is_flashing());

        ticks(&mut actor, Buttons::empty(), &tuning, 15);
        assert!(!actor.is_flashing());
        assert_eq!(actor.action(), Action::Hurt);

        ticks(&mut actor, Buttons::empty(), &tuning, 15);
        assert!(!actor.is_hurt());
        assert_eq!(actor.action(), Action::Idle);
    }

    #[test]
    fn hit_mid_run_shows_first_hurt_frame() {
        let (mut actor, tuning) = knight(Side::P1);
        // Knight run: 0.08 s per frame, so 12 ticks land on frame 2.
        ticks(&mut actor, Buttons::RIGHT, &tuning, 12);
        assert_eq!(actor.action(), Action::Run);
        assert!(actor.frame_rect().min.x > 0.0);

        actor.take_damage(12.0);
        let hurt_frame = actor.metrics().frame_size(Action::Hurt);
        assert_eq!(actor.frame_rect(), Rect::from_corners(Vec2::ZERO, hurt_frame));
    }

    #[test]
    fn knockout_mid_run_shows_first_dead_frame() {
        let (mut actor, tuning) = knight(Side::P1);
        ticks(&mut actor, Buttons::RIGHT, &tuning, 12);
        assert_eq!(actor.take_damage(1000.0), HitOutcome::Killed);
        assert_eq!(actor.frame_rect().min.x, 0.0);
    }

    #[test]
    fn frameless_attack_clip_still_releases_the_fighter() {
        let tuning = Tuning::default();
        let reg = PresetRegistry::with_defaults(tuning.hurt_duration);
        let mut preset = reg.get(Archetype::Knight).unwrap().clone();
        preset.frames.attack1 = 0;
        let mut actor = Actor::new(Side::P1, "Test", &preset, Controller::Human, &tuning);

        tick(&mut actor, Buttons::ATTACK1, &tuning);
        assert!(actor.is_attacking());
        ticks(&mut actor, Buttons::empty(), &tuning, 10);
        assert!(!actor.is_attacking());
        assert_eq!(actor.action(), Action::Idle);

        let x = actor.position().x;
        tick(&mut actor, Buttons::RIGHT, &tuning);
        assert!(actor.position().x > x);
    }

    #[test]
    fn attack_on_cooldown_changes_nothing() {
        let (mut actor, tuning) = knight(Side::P1);
        tick(&mut actor, Buttons::ATTACK1, &tuning);
        assert!(actor.is_attacking());
        // Let the swing finish but stay inside the cooldown window.
        ticks(&mut actor, Buttons::empty(), &tuning, 30);
        assert!(!actor.is_attacking());
        assert!(!actor.can_attack());

        let before = actor.clone();
        assert!(!actor.try_attack(AttackKind::Heavy));
        assert_eq!(actor.action(), before.action());
        assert_eq!(actor.cooldown, before.cooldown);
        assert!(!actor.is_attacking());
    }

    #[test]
    fn cooldown_reopens_after_its_duration() {
        let (mut actor, tuning) = knight(Side::P1);
        tick(&mut actor, Buttons::ATTACK2, &tuning);
        ticks(&mut actor, Buttons::empty(), &tuning, 50);
        assert!(actor.can_attack());
        tick(&mut actor, Buttons::ATTACK3, &tuning);
        assert_eq!(actor.action(), Action::Attack3);
    }

    #[test]
    fn attack_returns_to_idle_when_clip_ends() {
        let (mut actor, tuning) = knight(Side::P1);
        tick(&mut actor, Buttons::ATTACK1, &tuning);
        assert_eq!(actor.action(), Action::Attack1);
        // Knight attack1: 4 frames at 0.1 s.
        ticks(&mut actor, Buttons::empty(), &tuning, 35);
        assert!(!actor.is_attacking());
        assert_eq!(actor.action(), Action::Idle);
    }

    #[test]
    fn attacking_suppresses_movement() {
        let (mut actor, tuning) = knight(Side::P1);
        tick(&mut actor, Buttons::ATTACK1, &tuning);
        let x = actor.position().x;
        ticks(&mut actor, Buttons::LEFT, &tuning, 5);
        assert_eq!(actor.position().x, x);
        assert_eq!(actor.facing(), Facing::Right);
    }

    #[test]
    fn shield_blocks_damage_and_hurt() {
        let (mut actor, tuning) = knight(Side::P2);
        tick(&mut actor, Buttons::SHIELD, &tuning);
        assert_eq!(actor.action(), Action::Shield);
        let before = (actor.health(), actor.action());
        assert_eq!(actor.take_damage(12.0), HitOutcome::Blocked);
        assert_eq!((actor.health(), actor.action()), before);
        assert!(!actor.is_hurt());
        assert!(!actor.is_flashing());
    }

    #[test]
    fn shield_suppresses_attacks_and_drops_on_release() {
        let (mut actor, tuning) = knight(Side::P1);
        tick(&mut actor, Buttons::SHIELD | Buttons::ATTACK1, &tuning);
        assert!(actor.is_shielding());
        assert!(!actor.is_attacking());
        tick(&mut actor, Buttons::empty(), &tuning);
        assert!(!actor.is_shielding());
        assert_eq!(actor.action(), Action::Idle);
    }

    #[test]
    fn hurt_interrupts_swing() {
        let (mut actor, tuning) = knight(Side::P1);
        tick(&mut actor, Buttons::ATTACK1, &tuning);
        assert!(actor.hitbox(&tuning.hit_shape).is_some());
        actor.take_damage(12.0);
        assert!(!actor.is_attacking());
        assert_eq!(actor.hitbox(&tuning.hit_shape), None);
        assert_eq!(actor.action(), Action::Hurt);
    }

    #[test]
    fn facing_frozen_while_hurt() {
        let (mut actor, tuning) = knight(Side::P1);
        actor.take_damage(12.0);
        let x = actor.position().x;
        ticks(&mut actor, Buttons::LEFT, &tuning, 10);
        assert_eq!(actor.facing(), Facing::Right);
        assert_eq!(actor.position().x, x);
    }

    #[test]
    fn lethal_damage_is_terminal() {
        let (mut actor, tuning) = knight(Side::P1);
        assert_eq!(actor.take_damage(1000.0), HitOutcome::Killed);
        assert_eq!(actor.health().current(), 0.0);
        assert!(!actor.is_alive());
        ticks(&mut actor, Buttons::ATTACK1 | Buttons::RIGHT | Buttons::JUMP, &tuning, 60);
        assert_eq!(actor.action(), Action::Dead);
        assert!(!actor.is_attacking());
        assert_eq!(actor.take_damage(12.0), HitOutcome::Ignored);
    }

    #[test]
    fn jump_arc_lands_on_ground() {
        let (mut actor, tuning) = knight(Side::P1);
        let ground = actor.ground_y();
        tick(&mut actor, Buttons::JUMP, &tuning);
        assert!(actor.is_jumping());
        assert_eq!(actor.action(), Action::Jump);
        assert!(actor.position().y < ground);

        let mut landed = false;
        for _ in 0..120 {
            tick(&mut actor, Buttons::empty(), &tuning);
            if !actor.is_jumping() {
                landed = true;
                break;
            }
            assert!(actor.position().y <= ground);
        }
        assert!(landed);
        assert_eq!(actor.position().y, ground);
        assert_eq!(actor.action(), Action::Idle);
    }

    #[test]
    fn run_modifier_boosts_speed() {
        let (mut walker, tuning) = knight(Side::P1);
        let (mut runner, _) = knight(Side::P1);
        let start = walker.position().x;
        tick(&mut walker, Buttons::RIGHT, &tuning);
        tick(&mut runner, Buttons::RIGHT | Buttons::RUN, &tuning);
        let walked = walker.position().x - start;
        let ran = runner.position().x - start;
        assert!((walked - 5.0).abs() < 1e-3);
        assert!((ran - 6.5).abs() < 1e-3);
        assert_eq!(walker.action(), Action::Run);
    }

    #[test]
    fn stays_inside_play_field() {
        let (mut actor, tuning) = knight(Side::P1);
        actor.place_at(2.0);
        ticks(&mut actor, Buttons::LEFT | Buttons::RUN, &tuning, 5);
        assert_eq!(actor.position().x, 0.0);
        assert_eq!(actor.facing(), Facing::Left);

        actor.place_at(tuning.field_width);
        ticks(&mut actor, Buttons::RIGHT, &tuning, 5);
        assert!(actor.bounds().max.x <= tuning.field_width + 1e-3);
    }

    #[test]
    fn hitbox_projects_forward() {
        let (mut actor, tuning) = knight(Side::P1);
        tick(&mut actor, Buttons::ATTACK1, &tuning);
        let bounds = actor.bounds();
        let right = actor.hitbox(&tuning.hit_shape).unwrap();
        assert!(right.max.x > bounds.max.x);

        let (mut lefty, _) = knight(Side::P2);
        tick(&mut lefty, Buttons::ATTACK1, &tuning);
        let bounds = lefty.bounds();
        let left = lefty.hitbox(&tuning.hit_shape).unwrap();
        assert!(left.min.x < bounds.min.x);
    }

    #[test]
    fn hurtbox_is_centered_inside_bounds() {
        let (actor, tuning) = knight(Side::P1);
        let bounds = actor.bounds();
        let hurt = actor.hurtbox(&tuning.hit_shape);
        assert!((hurt.center().x - bounds.center().x).abs() < 1e-3);
        assert!(hurt.min.y > bounds.min.y && hurt.max.y < bounds.max.y);
    }

    #[test]
    fn reset_is_idempotent() {
        let (mut actor, tuning) = knight(Side::P2);
        tick(&mut actor, Buttons::JUMP | Buttons::LEFT, &tuning);
        actor.take_damage(50.0);
        ticks(&mut actor, Buttons::empty(), &tuning, 3);

        actor.reset(&tuning);
        let first = (
            actor.health(),
            actor.action(),
            actor.position(),
            actor.facing(),
            actor.is_jumping(),
            actor.can_attack(),
            actor.frame_rect(),
        );
        actor.reset(&tuning);
        let second = (
            actor.health(),
            actor.action(),
            actor.position(),
            actor.facing(),
            actor.is_jumping(),
            actor.can_attack(),
            actor.frame_rect(),
        );
        assert_eq!(first, second);
        assert_eq!(actor.health().current(), tuning.max_health);
        assert_eq!(actor.action(), Action::Idle);
        assert_eq!(actor.position().x, tuning.field_width * tuning.p2_start_ratio);
        assert_eq!(actor.facing(), Facing::Left);
    }

    #[test]
    fn measured_metrics_move_the_ground_line() {
        let (mut actor, tuning) = knight(Side::P1);
        let reg = PresetRegistry::with_defaults(tuning.hurt_duration);
        let preset = reg.get(Archetype::Knight).unwrap().clone();
        let metrics = SheetMetrics::measure(&preset, |_| Some(UVec2::new(768, 128)), 100);
        actor.set_metrics(metrics, &tuning);
        let expected = tuning.field_height - 128.0 * preset.sprite_scale - tuning.ground_margin;
        assert!((actor.ground_y() - expected).abs() < 1e-3);
        assert_eq!(actor.position().y, actor.ground_y());
    }
}
