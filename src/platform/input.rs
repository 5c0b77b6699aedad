//! Keyboard state
//!
//! Key events arrive whenever the browser fires them; the frame loop reads
//! one [`TickInput`] snapshot per frame.

use std::collections::HashSet;

use crate::sim::TickInput;

/// Keys currently held, by `KeyboardEvent.key` name
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    held: HashSet<String>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: &str) {
        self.held.insert(normalize(key).to_owned());
    }

    pub fn key_up(&mut self, key: &str) {
        self.held.remove(normalize(key));
    }

    /// Release everything (window lost focus, so key-ups will never arrive)
    pub fn clear(&mut self) {
        self.held.clear();
    }

    pub fn is_down(&self, key: &str) -> bool {
        self.held.contains(normalize(key))
    }

    /// Whether the game consumes this key (so the page should not scroll on it)
    pub fn is_game_key(key: &str) -> bool {
        matches!(
            normalize(key),
            "ArrowLeft" | "ArrowRight" | "ArrowUp" | "ArrowDown" | " "
        )
    }

    /// Snapshot for the current frame
    pub fn snapshot(&self) -> TickInput {
        TickInput {
            left: self.is_down("ArrowLeft"),
            right: self.is_down("ArrowRight"),
            up: self.is_down("ArrowUp"),
            down: self.is_down("ArrowDown"),
            fire: self.is_down(" "),
        }
    }
}

/// Fold legacy key names onto the standard ones
fn normalize(key: &str) -> &str {
    match key {
        "Left" => "ArrowLeft",
        "Right" => "ArrowRight",
        "Up" => "ArrowUp",
        "Down" => "ArrowDown",
        "Spacebar" => " ",
        other => other,
    }
}
