//! Keyboard input handling

use game_core::InputLatch;

/// Paddle control a key maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Up,
    Down,
}

pub fn key_action(key: &str) -> Option<KeyAction> {
    match key {
        "ArrowUp" | "w" | "W" => Some(KeyAction::Up),
        "ArrowDown" | "s" | "S" => Some(KeyAction::Down),
        _ => None,
    }
}

/// Handle key down event. Returns true if the key controls the paddle.
pub fn handle_key_down(key: &str, input: &mut InputLatch) -> bool {
    match key_action(key) {
        Some(KeyAction::Up) => input.set_move_up(true),
        Some(KeyAction::Down) => input.set_move_down(true),
        None => return false,
    }
    true
}

/// Handle key up event. Returns true if the key controls the paddle.
pub fn handle_key_up(key: &str, input: &mut InputLatch) -> bool {
    match key_action(key) {
        Some(KeyAction::Up) => input.set_move_up(false),
        Some(KeyAction::Down) => input.set_move_down(false),
        None => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys_latch() {
        let mut input = InputLatch::new();
        assert!(handle_key_down("ArrowUp", &mut input));
        assert!(input.move_up);
        assert!(handle_key_down("ArrowDown", &mut input));
        assert!(input.move_down);

        assert!(handle_key_up("ArrowUp", &mut input));
        assert!(!input.move_up);
        assert!(input.move_down, "Releasing up leaves down held");
    }

    #[test]
    fn test_letter_keys_latch() {
        let mut input = InputLatch::new();
        handle_key_down("W", &mut input);
        assert_eq!(input, InputLatch { move_up: true, move_down: false });
        handle_key_up("w", &mut input);
        handle_key_down("s", &mut input);
        assert_eq!(input, InputLatch { move_up: false, move_down: true });
    }

    #[test]
    fn test_other_keys_ignored() {
        let mut input = InputLatch::new();
        input.set_move_down(true);
        assert!(!handle_key_down("Enter", &mut input));
        assert!(!handle_key_up("ArrowLeft", &mut input));
        assert_eq!(input, InputLatch { move_up: false, move_down: true });
    }
}
