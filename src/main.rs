use anyhow::Result;
use glam::Vec2;
use log::{debug, info, warn};
use rand::SeedableRng;
use rand_pcg::Pcg32;
use std::str::FromStr;
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

mod core;
mod engine;
mod game;

use engine::camera::Camera;
use engine::game_loop::GameLoop;
use engine::input::{Action, InputManager, PointerView};
use engine::physics::PhysicsWorld;
use engine::scene::Scene;
use game::{Arena, ArenaSettings};

/// Read and parse an environment override, ignoring bad values
fn env_override<T: FromStr>(name: &str) -> Option<T> {
    let raw = std::env::var(name).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring {}={:?}: not a valid value", name, raw);
            None
        }
    }
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Drift Arena...");

    let seed = env_override::<u64>("DRIFT_SEED").unwrap_or_else(rand::random);
    info!("RNG seed: {}", seed);

    let mut settings = ArenaSettings::standard();
    if let Some(count) = env_override::<usize>("DRIFT_OBSTACLES") {
        settings.obstacle_count = count;
    }

    let mut scene = Scene::new(PhysicsWorld::new(), Box::new(Pcg32::seed_from_u64(seed)));
    let mut arena = Arena::new(settings)?;
    arena.setup(&mut scene);

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Drift Arena")
        .with_inner_size(winit::dpi::LogicalSize::new(1280, 720))
        .with_resizable(true)
        .build(&event_loop)?;

    info!("Window created successfully");

    let size = window.inner_size();
    let mut camera = Camera::new(Vec2::ZERO, size.width as f32, size.height as f32);
    let mut input = InputManager::new();
    let mut game_loop = GameLoop::new();
    let mut game_over_reported = false;

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    info!("Close requested, shutting down...");
                    elwt.exit();
                }
                WindowEvent::Resized(size) => {
                    camera.resize(size.width as f32, size.height as f32);
                }
                WindowEvent::KeyboardInput { event, .. } => input.process_keyboard_event(&event),
                WindowEvent::MouseInput { state, button, .. } => {
                    input.process_mouse_button(button, state);
                }
                WindowEvent::CursorMoved { position, .. } => input.process_cursor_moved(position),
                WindowEvent::CursorLeft { .. } => input.process_cursor_left(),
                WindowEvent::Focused(false) => input.process_focus_lost(),
                WindowEvent::RedrawRequested => {
                    if input.just_pressed(Action::Quit) {
                        info!("Quit requested, shutting down...");
                        elwt.exit();
                        return;
                    }
                    if input.just_pressed(Action::Pause) {
                        game_loop.toggle_pause();
                    }

                    let timing = game_loop.begin_frame();
                    for _ in 0..timing.physics_steps {
                        scene.fixed_step();
                    }

                    if !game_loop.is_paused() {
                        let pointer = PointerView {
                            input: &input,
                            camera: &camera,
                        };
                        scene.update(&pointer, timing.delta_time);
                        arena.maintain(&mut scene);
                    }

                    if !game_over_reported && !arena.ship_alive(&scene) {
                        info!(
                            "Game over after {:.1}s",
                            game_loop.elapsed().as_secs_f32()
                        );
                        game_over_reported = true;
                    }

                    if game_loop.frame_count() % 600 == 0 {
                        debug!("{:.0} fps, {} entities", game_loop.fps(), scene.len());
                    }

                    input.update();
                }
                _ => {}
            },
            Event::AboutToWait => {
                // Request redraw on next frame
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
