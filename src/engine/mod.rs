// Engine modules: physics, input, camera, timing, scene graph

pub mod camera;
pub mod game_loop;
pub mod input;
pub mod physics;
pub mod scene;
