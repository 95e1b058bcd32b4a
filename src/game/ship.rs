// The player's ship: thrusts toward the pointer, dies on any contact

use super::settings::ShipSettings;
use crate::core::math::direction_towards;
use crate::engine::physics::presets;
use crate::engine::scene::{Behavior, BehaviorContext, EntityDesc, EntityId, Scene};
use glam::Vec2;
use log::{info, warn};
use std::any::Any;

#[derive(Debug)]
pub struct ShipController {
    thrust_force: f32,
}

impl ShipController {
    pub fn new(settings: &ShipSettings) -> Self {
        Self {
            thrust_force: settings.thrust_force,
        }
    }
}

impl Behavior for ShipController {
    fn on_update(&mut self, ctx: &mut BehaviorContext<'_>) {
        let pointer = ctx.pointer();
        if !pointer.primary_held {
            return;
        }

        // Pointer exactly on the ship yields a NaN direction; it is applied as-is
        let direction = direction_towards(ctx.position(), pointer.world_position);
        if !direction.is_finite() {
            warn!("Ship #{} has no direction to the pointer", ctx.entity());
        }

        ctx.set_facing(direction);
        ctx.add_force(direction * self.thrust_force);
    }

    fn on_collision(&mut self, ctx: &mut BehaviorContext<'_>, other: EntityId) {
        info!("Ship #{} destroyed by #{}", ctx.entity(), other);
        ctx.despawn();
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

pub fn spawn_ship(scene: &mut Scene, position: Vec2, settings: &ShipSettings) -> EntityId {
    let desc = EntityDesc::new(
        "ship",
        presets::ship_body(position.x, position.y, settings.linear_damping),
        presets::ship_collider(settings.radius),
    );
    scene.spawn(desc, Box::new(ShipController::new(settings)))
}
