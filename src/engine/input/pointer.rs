// Pointer query handed to behaviors

use super::action::Action;
use super::manager::InputManager;
use crate::engine::camera::Camera;
use glam::Vec2;

/// Read access to the primary pointer, already in world space
pub trait Pointer {
    /// Whether the primary pointer button is held this frame
    fn is_primary_held(&self) -> bool;

    /// Pointer position in world coordinates
    fn world_position(&self) -> Vec2;

    fn snapshot(&self) -> PointerState {
        PointerState {
            primary_held: self.is_primary_held(),
            world_position: self.world_position(),
        }
    }
}

/// Frozen pointer state for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    pub primary_held: bool,
    pub world_position: Vec2,
}

impl PointerState {
    pub fn released() -> Self {
        Self::default()
    }

    pub fn held_at(world_position: Vec2) -> Self {
        Self {
            primary_held: true,
            world_position,
        }
    }
}

impl Pointer for PointerState {
    fn is_primary_held(&self) -> bool {
        self.primary_held
    }

    fn world_position(&self) -> Vec2 {
        self.world_position
    }
}

/// Live pointer backed by the input manager and the camera
pub struct PointerView<'a> {
    pub input: &'a InputManager,
    pub camera: &'a Camera,
}

impl Pointer for PointerView<'_> {
    /// Never held while the cursor is outside the window, since there is no
    /// position to steer toward
    fn is_primary_held(&self) -> bool {
        self.input.cursor_position().is_some() && self.input.is_pressed(Action::Thrust)
    }

    /// Camera centre while the cursor is outside the window
    fn world_position(&self) -> Vec2 {
        self.input
            .cursor_position()
            .map(|screen| self.camera.screen_to_world(screen))
            .unwrap_or(self.camera.position)
    }
}
