#[derive(Debug, Default, Clone, Copy)]
pub struct InputState {
    /// One-shot action, reset after each tick. OS key auto-repeat may set it
    /// again while the key stays down; the player suppresses those itself.
    pub jump: bool,

    // Held keys, true for as long as the key is pressed.
    pub move_left: bool,
    pub move_right: bool,
}

impl InputState {
    /// Call after every tick: resets only one-shot actions.
    pub fn clear_one_shots(&mut self) {
        self.jump = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_one_shots_keeps_held_keys() {
        let mut input = InputState {
            jump: true,
            move_left: true,
            move_right: false,
        };
        input.clear_one_shots();
        assert!(!input.jump);
        assert!(input.move_left);
        assert!(!input.move_right);
    }
}
