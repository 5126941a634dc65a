//! Touch Input Module
//!
//! On-screen joystick and jump button state. Touch events arrive between
//! frames; the state here queues their effect so the course consumes it once
//! on the next frame.
//!
//! The joystick measures each move event against the point where the touch
//! started. The anchor is never re-centred, so holding a drag keeps pushing
//! the player on every move event.

use glam::Vec3;

/// Screen-space point in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TouchPoint {
    pub x: f32,
    pub y: f32,
}

impl TouchPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Drag-to-move joystick.
#[derive(Debug, Clone, Default)]
pub struct TouchJoystick {
    /// Whether a touch is currently down on the joystick
    active: bool,
    /// Screen position where the current touch started
    anchor: TouchPoint,
    /// Displacement queued since the last frame
    pending: Vec3,
}

impl TouchJoystick {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a drag at screen position `(x, y)`.
    pub fn touch_start(&mut self, x: f32, y: f32) {
        self.active = true;
        self.anchor = TouchPoint::new(x, y);
    }

    /// Process a move event at `(x, y)`.
    ///
    /// Each axis whose offset from the anchor exceeds `dead_zone` pixels
    /// queues `offset * sensitivity`: screen X drives world X, screen Y drives
    /// world -Z. Moves without an active touch are ignored.
    ///
    /// Returns the displacement queued by this event.
    pub fn touch_move(&mut self, x: f32, y: f32, dead_zone: f32, sensitivity: f32) -> Vec3 {
        if !self.active {
            return Vec3::ZERO;
        }

        let dx = x - self.anchor.x;
        let dy = y - self.anchor.y;

        let mut delta = Vec3::ZERO;
        if dx.abs() > dead_zone {
            delta.x += dx * sensitivity;
        }
        if dy.abs() > dead_zone {
            delta.z -= dy * sensitivity;
        }

        self.pending += delta;
        delta
    }

    /// Lift the finger. Displacement already queued is still delivered.
    pub fn touch_end(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Take and clear the displacement queued since the last frame.
    pub fn drain(&mut self) -> Vec3 {
        std::mem::take(&mut self.pending)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// On-screen jump button.
///
/// A press is a one-shot: it queues a single jump impulse for the next frame
/// no matter how long the finger stays down.
#[derive(Debug, Clone, Copy, Default)]
pub struct JumpButton {
    queued: bool,
}

impl JumpButton {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self) {
        self.queued = true;
    }

    /// Take the queued press, if any.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.queued)
    }

    pub fn reset(&mut self) {
        self.queued = false;
    }
}
