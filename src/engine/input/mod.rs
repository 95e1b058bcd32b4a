// Input handling system
//
// - `action`: game actions and default bindings
// - `config`: binding table and remapping
// - `state`: per-frame pressed / just-pressed / just-released tracking
// - `manager`: winit event intake, cursor tracking
// - `pointer`: the world-space pointer query behaviors receive
//
// ## Usage
//
// ```rust
// let mut input = InputManager::new();
//
// // In the event loop
// input.process_mouse_button(button, state);
// input.process_cursor_moved(position);
//
// // Once per frame, hand behaviors a pointer in world space
// let pointer = PointerView { input: &input, camera: &camera };
// scene.update(&pointer, dt);
// input.update();
// ```

pub mod action;
pub mod config;
pub mod manager;
pub mod pointer;
pub mod state;

pub use action::Action;
pub use manager::InputManager;
pub use pointer::{Pointer, PointerState, PointerView};
