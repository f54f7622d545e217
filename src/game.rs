use std::time::Instant;

use crate::assets::{FrameSet, Sprite};
use crate::input::InputState;
use crate::player::{Facing, Player};

pub const CANVAS_W: f32 = 1000.0;
pub const CANVAS_H: f32 = 600.0;

pub struct Game {
    tick: u64,
    frames: FrameSet,
    pub player: Player,
}

impl Game {
    pub fn new(frames: FrameSet, now: Instant) -> Self {
        Self {
            tick: 0,
            frames,
            player: Player::new(now),
        }
    }

    /// One fixed step: jump one-shot, horizontal movement (left wins when
    /// both keys are held, no key resets the idle pose), then physics.
    pub fn tick(&mut self, input: InputState, now: Instant) {
        self.tick += 1;

        if input.jump {
            self.player.jump(now);
        }

        if input.move_left {
            self.player.walk(Facing::Left, now);
        } else if input.move_right {
            self.player.walk(Facing::Right, now);
        } else {
            self.player.set_idle();
        }

        self.player.update(now);

        if self.tick % 60 == 0 {
            log::debug!(
                "pos x={:.1} y={:.1} vy={:.1} jumping={}",
                self.player.pos.x,
                self.player.pos.y,
                self.player.velocity,
                self.player.is_jumping
            );
        }
    }

    pub fn current_sprite(&self) -> Option<&Sprite> {
        self.frames.get(self.player.current_frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn test_game(now: Instant) -> Game {
        let frames = FrameSet::new(
            (0..crate::player::FRAME_COUNT)
                .map(|_| Sprite {
                    width: 1,
                    height: 1,
                    rgba: vec![0, 0, 0, 0],
                })
                .collect(),
        );
        Game::new(frames, now)
    }

    #[test]
    fn left_takes_precedence_over_right() {
        let t0 = Instant::now();
        let mut game = test_game(t0);
        let x0 = game.player.pos.x;
        let input = InputState {
            move_left: true,
            move_right: true,
            ..Default::default()
        };
        game.tick(input, t0);
        assert!(game.player.pos.x < x0);
        assert_eq!(game.player.facing, Facing::Left);
    }

    #[test]
    fn no_horizontal_key_resets_idle_pose() {
        let t0 = Instant::now();
        let mut game = test_game(t0);
        let held_right = InputState {
            move_right: true,
            ..Default::default()
        };
        game.tick(held_right, t0 + Duration::from_millis(101));
        assert_eq!(game.player.current_frame, 1);

        game.tick(InputState::default(), t0 + Duration::from_millis(120));
        assert_eq!(game.player.current_frame, 0);
    }

    #[test]
    fn jump_one_shot_launches_player() {
        let t0 = Instant::now();
        let mut game = test_game(t0);
        // Settle onto the ground first; the player spawns in the air.
        for _ in 0..200 {
            game.tick(InputState::default(), t0);
        }
        let input = InputState {
            jump: true,
            ..Default::default()
        };
        game.tick(input, t0);
        assert!(game.player.is_jumping);
        assert!(game.player.show_text);
    }

    #[test]
    fn current_sprite_follows_frame() {
        let t0 = Instant::now();
        let game = test_game(t0);
        assert!(game.current_sprite().is_some());
    }
}
