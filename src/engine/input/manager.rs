// Input manager - turns winit events into action state and a cursor position

use super::action::{Action, InputSource};
use super::config::InputConfig;
use super::state::ActionState;
use glam::Vec2;
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, KeyEvent, MouseButton};
use winit::keyboard::PhysicalKey;

pub struct InputManager {
    config: InputConfig,
    actions: ActionState,
    /// Last known cursor position in physical window pixels
    cursor: Option<Vec2>,
}

impl InputManager {
    pub fn new() -> Self {
        Self::with_config(InputConfig::default())
    }

    pub fn with_config(config: InputConfig) -> Self {
        Self {
            config,
            actions: ActionState::new(),
            cursor: None,
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        if event.repeat {
            return;
        }
        if let PhysicalKey::Code(key_code) = event.physical_key {
            self.apply(InputSource::key(key_code), event.state);
        }
    }

    /// Process a mouse button press or release
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        self.apply(InputSource::mouse(button), state);
    }

    pub fn process_cursor_moved(&mut self, position: PhysicalPosition<f64>) {
        self.cursor = Some(Vec2::new(position.x as f32, position.y as f32));
    }

    /// Cursor left the window; held buttons stay held
    pub fn process_cursor_left(&mut self) {
        self.cursor = None;
    }

    /// Focus lost: nothing can stay held since the release will never arrive
    pub fn process_focus_lost(&mut self) {
        self.actions.reset();
    }

    fn apply(&mut self, source: InputSource, state: ElementState) {
        let Some(action) = self.config.get_action(source) else {
            return;
        };
        match state {
            ElementState::Pressed => self.actions.press(action),
            ElementState::Released => self.actions.release(action),
        }
    }

    /// Start a new frame; call after the frame's events have been consumed
    pub fn update(&mut self) {
        self.actions.update();
    }

    pub fn is_pressed(&self, action: Action) -> bool {
        self.actions.is_pressed(action)
    }

    pub fn just_pressed(&self, action: Action) -> bool {
        self.actions.just_pressed(action)
    }

    pub fn just_released(&self, action: Action) -> bool {
        self.actions.just_released(action)
    }

    pub fn cursor_position(&self) -> Option<Vec2> {
        self.cursor
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mouse_press_and_release() {
        let mut manager = InputManager::new();

        manager.process_mouse_button(MouseButton::Left, ElementState::Pressed);
        assert!(manager.is_pressed(Action::Thrust));
        assert!(manager.just_pressed(Action::Thrust));

        manager.update();
        assert!(manager.is_pressed(Action::Thrust));
        assert!(!manager.just_pressed(Action::Thrust));

        manager.process_mouse_button(MouseButton::Left, ElementState::Released);
        assert!(!manager.is_pressed(Action::Thrust));
        assert!(manager.just_released(Action::Thrust));
    }

    #[test]
    fn test_unbound_button_ignored() {
        let mut manager = InputManager::new();
        manager.process_mouse_button(MouseButton::Right, ElementState::Pressed);
        assert!(!manager.is_pressed(Action::Thrust));
    }

    #[test]
    fn test_cursor_tracking() {
        let mut manager = InputManager::new();
        assert_eq!(manager.cursor_position(), None);

        manager.process_cursor_moved(PhysicalPosition::new(120.0, 48.5));
        assert_eq!(manager.cursor_position(), Some(Vec2::new(120.0, 48.5)));

        manager.process_cursor_left();
        assert_eq!(manager.cursor_position(), None);
    }

    #[test]
    fn test_focus_lost_releases_everything() {
        let mut manager = InputManager::new();
        manager.process_mouse_button(MouseButton::Left, ElementState::Pressed);
        manager.process_focus_lost();
        assert!(!manager.is_pressed(Action::Thrust));
    }

    #[test]
    fn test_custom_config() {
        let mut config = InputConfig::empty();
        config.bind(InputSource::mouse(MouseButton::Right), Action::Thrust);
        let mut manager = InputManager::with_config(config);

        manager.process_mouse_button(MouseButton::Left, ElementState::Pressed);
        assert!(!manager.is_pressed(Action::Thrust));
        manager.process_mouse_button(MouseButton::Right, ElementState::Pressed);
        assert!(manager.is_pressed(Action::Thrust));
    }
}
