// Obstacles: sized and launched once at spawn, then left to physics

use super::settings::ObstacleSettings;
use crate::core::math::{random_in_range, random_inside_unit_circle};
use crate::engine::physics::presets;
use crate::engine::scene::{Behavior, BehaviorContext, EntityDesc, EntityId, Scene};
use glam::Vec2;
use std::any::Any;

/// What an obstacle was launched with
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstacleLaunch {
    pub size: f32,
    pub speed: f32,
    /// Point inside the unit disk, not normalized
    pub direction: Vec2,
}

impl ObstacleLaunch {
    /// The impulse applied at spawn
    pub fn impulse(&self) -> Vec2 {
        self.direction * self.speed
    }
}

/// Picks a random size and launch impulse when the obstacle appears
#[derive(Debug)]
pub struct ObstacleSpawner {
    settings: ObstacleSettings,
    launch: Option<ObstacleLaunch>,
}

impl ObstacleSpawner {
    pub fn new(settings: ObstacleSettings) -> Self {
        Self {
            settings,
            launch: None,
        }
    }

    /// `None` until the spawn hook has run
    pub fn launch(&self) -> Option<ObstacleLaunch> {
        self.launch
    }
}

impl Behavior for ObstacleSpawner {
    fn on_spawn(&mut self, ctx: &mut BehaviorContext<'_>) {
        let s = &self.settings;
        let size = random_in_range(ctx.rng(), s.min_size, s.max_size);
        let speed = random_in_range(ctx.rng(), s.min_speed, s.max_speed);
        let direction = random_inside_unit_circle(ctx.rng());

        let launch = ObstacleLaunch {
            size,
            speed,
            direction,
        };
        ctx.set_scale(size);
        ctx.apply_impulse(launch.impulse());
        self.launch = Some(launch);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Put an obstacle at `position` and launch it
pub fn spawn_obstacle(scene: &mut Scene, position: Vec2, settings: &ObstacleSettings) -> EntityId {
    let desc = EntityDesc::new(
        "obstacle",
        presets::obstacle_body(position.x, position.y),
        presets::obstacle_collider(settings.base_radius),
    );
    scene.spawn(desc, Box::new(ObstacleSpawner::new(settings.clone())))
}
