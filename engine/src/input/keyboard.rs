//! Keyboard Input Module
//!
//! Held-key state for course movement. Key names follow the browser's
//! `KeyboardEvent.key` strings so a host can forward events verbatim.

use glam::Vec3;

/// Generic key codes read by the course, independent of any windowing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    // Movement keys
    W,
    A,
    S,
    D,
    Space,

    // Arrow keys
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    /// Catch-all for unhandled keys
    Unknown,
}

impl KeyCode {
    /// Map a `KeyboardEvent.key` string to a key code.
    ///
    /// Letters are matched case-insensitively so Caps Lock or Shift does not
    /// drop movement.
    pub fn from_key_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "w" => KeyCode::W,
            "a" => KeyCode::A,
            "s" => KeyCode::S,
            "d" => KeyCode::D,
            " " | "space" | "spacebar" => KeyCode::Space,
            "arrowup" => KeyCode::ArrowUp,
            "arrowdown" => KeyCode::ArrowDown,
            "arrowleft" => KeyCode::ArrowLeft,
            "arrowright" => KeyCode::ArrowRight,
            _ => KeyCode::Unknown,
        }
    }
}

/// Tracks the current state of movement keys.
///
/// Keys are held state, not edges: a held key moves the player every frame
/// and a held jump re-launches on every grounded frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementKeys {
    /// W / ArrowUp - move toward -Z
    pub forward: bool,
    /// S / ArrowDown - move toward +Z
    pub backward: bool,
    /// A / ArrowLeft - move toward -X
    pub left: bool,
    /// D / ArrowRight - move toward +X
    pub right: bool,
    /// Space - jump when grounded
    pub jump: bool,
}

impl MovementKeys {
    /// Create a new movement keys state with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update movement state based on key press/release.
    ///
    /// Returns `true` if the key was a movement key and was handled,
    /// `false` otherwise.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        match key {
            KeyCode::W | KeyCode::ArrowUp => self.forward = pressed,
            KeyCode::S | KeyCode::ArrowDown => self.backward = pressed,
            KeyCode::A | KeyCode::ArrowLeft => self.left = pressed,
            KeyCode::D | KeyCode::ArrowRight => self.right = pressed,
            KeyCode::Space => self.jump = pressed,
            KeyCode::Unknown => return false,
        }
        true
    }

    /// Check if any movement key is currently pressed.
    pub fn any_pressed(&self) -> bool {
        self.forward || self.backward || self.left || self.right || self.jump
    }

    /// Reset all movement keys to released state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Get the forward/backward movement direction (-1, 0, or 1).
    pub fn forward_axis(&self) -> i32 {
        (self.forward as i32) - (self.backward as i32)
    }

    /// Get the left/right movement direction (-1, 0, or 1).
    pub fn right_axis(&self) -> i32 {
        (self.right as i32) - (self.left as i32)
    }
}

/// Complete keyboard state tracking.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    /// Movement key states
    pub movement: MovementKeys,
}

impl KeyboardState {
    /// Create a new keyboard state with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key press or release event.
    ///
    /// Returns `true` if the key was handled as a movement key.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        self.movement.handle_key(key, pressed)
    }

    /// Handle a key event by its browser name (`"w"`, `" "`, `"ArrowUp"`).
    pub fn handle_key_name(&mut self, name: &str, pressed: bool) -> bool {
        self.handle_key(KeyCode::from_key_name(name), pressed)
    }

    /// Per-frame displacement from held keys.
    ///
    /// Each held direction contributes `move_speed` along its axis. Forward is
    /// -Z, right is +X. Diagonals are not normalized.
    pub fn displacement(&self, move_speed: f32) -> Vec3 {
        Vec3::new(
            self.movement.right_axis() as f32 * move_speed,
            0.0,
            -(self.movement.forward_axis() as f32) * move_speed,
        )
    }

    /// Whether the jump key is held.
    pub fn jump_held(&self) -> bool {
        self.movement.jump
    }

    /// Reset all keyboard state.
    pub fn reset(&mut self) {
        self.movement.reset();
    }
}
