use std::time::{Duration, Instant};

use glam::Vec2;

use crate::game::{CANVAS_H, CANVAS_W};

pub const FRAME_COUNT: usize = 5;

const PLAYER_SIZE: f32 = 300.0;
const WALK_SPEED: f32 = 7.0;
const JUMP_POWER: f32 = -15.0;
const GRAVITY: f32 = 0.8;
const FRAME_INTERVAL: Duration = Duration::from_millis(100);
const CAPTION_DURATION: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    fn dx(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

/// The single controllable entity. Positions are canvas pixels, y grows
/// downward; velocities are per-tick, matching the original per-frame tuning.
#[derive(Debug)]
pub struct Player {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub velocity: f32,
    pub is_jumping: bool,
    pub facing: Facing,

    // Animation: the cycle position keeps ticking across idle phases, only
    // the displayed frame snaps back to the first one.
    frame_index: usize,
    pub current_frame: usize,
    frame_timer: Instant,

    pub show_text: bool,
    hide_text_at: Option<Instant>,
}

impl Player {
    pub fn new(now: Instant) -> Self {
        Self {
            pos: Vec2::new(CANVAS_W / 100.0, CANVAS_H / 500.0),
            width: PLAYER_SIZE,
            height: PLAYER_SIZE,
            velocity: 0.0,
            is_jumping: false,
            facing: Facing::Right,
            frame_index: 0,
            current_frame: 0,
            frame_timer: now,
            show_text: false,
            hide_text_at: None,
        }
    }

    /// One horizontal step. Advances the walk cycle at most once per
    /// FRAME_INTERVAL window.
    pub fn walk(&mut self, facing: Facing, now: Instant) {
        self.facing = facing;
        self.pos.x = (self.pos.x + facing.dx() * WALK_SPEED).clamp(0.0, CANVAS_W - self.width);

        if now.duration_since(self.frame_timer) > FRAME_INTERVAL {
            self.frame_timer = now;
            self.frame_index = (self.frame_index + 1) % FRAME_COUNT;
            self.current_frame = self.frame_index;
        }
    }

    /// No-op while airborne. Re-jumping after landing overwrites the caption
    /// deadline, so the latest jump wins.
    pub fn jump(&mut self, now: Instant) {
        if self.is_jumping {
            return;
        }
        self.velocity = JUMP_POWER;
        self.is_jumping = true;
        self.show_text = true;
        self.hide_text_at = Some(now + CAPTION_DURATION);
    }

    /// Gravity integration, ground clamp, caption expiry. Runs once per tick
    /// regardless of input.
    pub fn update(&mut self, now: Instant) {
        self.velocity += GRAVITY;
        self.pos.y += self.velocity;

        if self.pos.y > CANVAS_H - self.height {
            self.pos.y = CANVAS_H - self.height;
            self.velocity = 0.0;
            self.is_jumping = false;
        }

        if let Some(deadline) = self.hide_text_at {
            if now >= deadline {
                self.show_text = false;
                self.hide_text_at = None;
            }
        }
    }

    /// Idle pose: first frame, cycle position untouched.
    pub fn set_idle(&mut self) {
        self.current_frame = 0;
    }
}
