// Behavior hooks and the context they run with

use super::entity::{EntityId, EntityRecord, Transform};
use crate::core::math::{facing_angle, to_physics};
use crate::engine::input::PointerState;
use crate::engine::physics::PhysicsWorld;
use glam::Vec2;
use rand::RngCore;

/// Logic attached to one entity.
///
/// The scene calls these hooks; nothing here touches global state. Every
/// dependency comes in through the [`BehaviorContext`].
pub trait Behavior {
    /// Called once, right after the entity enters the physics world
    fn on_spawn(&mut self, _ctx: &mut BehaviorContext<'_>) {}

    /// Called once per rendered frame
    fn on_update(&mut self, _ctx: &mut BehaviorContext<'_>) {}

    /// Called when this entity starts touching `other`
    fn on_collision(&mut self, _ctx: &mut BehaviorContext<'_>, _other: EntityId) {}

    /// Lets tests and game code look at a concrete behavior
    fn as_any(&self) -> &dyn std::any::Any;
}

/// A behavior's view of its own entity plus the injected services
pub struct BehaviorContext<'a> {
    entity: EntityId,
    record: &'a mut EntityRecord,
    physics: &'a mut PhysicsWorld,
    rng: &'a mut dyn RngCore,
    pointer: PointerState,
    delta_time: f32,
    despawn_requested: bool,
}

impl<'a> BehaviorContext<'a> {
    pub(crate) fn new(
        entity: EntityId,
        record: &'a mut EntityRecord,
        physics: &'a mut PhysicsWorld,
        rng: &'a mut dyn RngCore,
        pointer: PointerState,
        delta_time: f32,
    ) -> Self {
        Self {
            entity,
            record,
            physics,
            rng,
            pointer,
            delta_time,
            despawn_requested: false,
        }
    }

    pub fn entity(&self) -> EntityId {
        self.entity
    }

    pub fn transform(&self) -> &Transform {
        &self.record.transform
    }

    pub fn position(&self) -> Vec2 {
        self.record.transform.position
    }

    /// Pointer state frozen at the start of this frame
    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub fn rng(&mut self) -> &mut dyn RngCore {
        &mut *self.rng
    }

    /// Seconds since the previous frame (0 during spawn and collision hooks)
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Uniform scale; the collider is rebuilt to match
    pub fn set_scale(&mut self, scale: f32) {
        self.record.transform.scale = scale;
        self.physics
            .rescale_collider(self.record.collider, &self.record.shape, scale);
    }

    /// Turn the entity so its local +Y axis points along `direction`
    pub fn set_facing(&mut self, direction: Vec2) {
        let angle = facing_angle(direction);
        self.record.transform.rotation = angle;
        self.physics.set_rotation(self.record.body, angle);
    }

    pub fn apply_impulse(&mut self, impulse: Vec2) {
        self.physics.apply_impulse(self.record.body, to_physics(impulse));
    }

    /// Force acting during the next physics step. Forces added by several
    /// frames before that step add up.
    pub fn add_force(&mut self, force: Vec2) {
        self.physics.add_force(self.record.body, to_physics(force));
    }

    /// Remove this entity once the current hook returns
    pub fn despawn(&mut self) {
        self.despawn_requested = true;
    }

    pub(crate) fn despawn_requested(&self) -> bool {
        self.despawn_requested
    }
}
