// Scene graph: entities, their behaviors and the physics bodies behind them
//
// Frame order, driven by the caller:
// 1. `fixed_step()` zero or more times (physics, transform sync, collision hooks)
// 2. `update(pointer, dt)` once (per-frame hooks)

mod behavior;
mod entity;

pub use behavior::{Behavior, BehaviorContext};
pub use entity::{EntityDesc, EntityId, Transform};

use crate::core::math::from_physics;
use crate::engine::input::{Pointer, PointerState};
use crate::engine::physics::{CollisionEvent, PhysicsWorld, RigidBody};
use entity::EntityRecord;
use log::debug;
use rand::RngCore;
use std::collections::{BTreeMap, HashMap};

/// Scene errors
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("Entity not found: {0}")]
    EntityNotFound(EntityId),
}

pub struct Scene {
    physics: PhysicsWorld,
    rng: Box<dyn RngCore>,
    /// Ordered so per-frame hooks run in spawn order
    entities: BTreeMap<EntityId, EntityRecord>,
    /// Taken out while a hook runs
    behaviors: HashMap<EntityId, Box<dyn Behavior>>,
    next_id: EntityId,
    pointer: PointerState,
}

impl Scene {
    pub fn new(physics: PhysicsWorld, rng: Box<dyn RngCore>) -> Self {
        Self {
            physics,
            rng,
            entities: BTreeMap::new(),
            behaviors: HashMap::new(),
            next_id: 1,
            pointer: PointerState::released(),
        }
    }

    /// Add an entity and run its spawn hook.
    ///
    /// The id is returned even if the hook despawned the entity straight away.
    pub fn spawn(&mut self, desc: EntityDesc, behavior: Box<dyn Behavior>) -> EntityId {
        let id = self.next_id;
        self.next_id += 1;

        let transform = Transform {
            position: from_physics(desc.body.translation()),
            rotation: desc.body.rotation().angle(),
            scale: 1.0,
        };
        let shape = desc.collider.shape_desc();
        let body = self.physics.add_rigid_body(desc.body);
        let collider = self.physics.add_collider(desc.collider.build(), body);
        self.physics.set_entity_mapping(body, id);

        debug!("Spawned {} #{} at {:?}", desc.name, id, transform.position);
        self.entities.insert(
            id,
            EntityRecord {
                name: desc.name,
                transform,
                body,
                collider,
                shape,
            },
        );
        self.behaviors.insert(id, behavior);

        self.run_hook(id, 0.0, |behavior, ctx| behavior.on_spawn(ctx));
        id
    }

    /// Run every live entity's per-frame hook with this frame's pointer
    pub fn update(&mut self, pointer: &dyn Pointer, delta_time: f32) {
        self.pointer = pointer.snapshot();

        let ids: Vec<EntityId> = self.entities.keys().copied().collect();
        for id in ids {
            self.run_hook(id, delta_time, |behavior, ctx| behavior.on_update(ctx));
        }
    }

    /// Advance physics one fixed step, then deliver collision hooks
    pub fn fixed_step(&mut self) {
        self.physics.step();

        for record in self.entities.values_mut() {
            if let Some(body) = self.physics.get_rigid_body(record.body) {
                record.transform.position = from_physics(body.translation());
                record.transform.rotation = body.rotation().angle();
            }
        }

        for CollisionEvent {
            collider1,
            collider2,
        } in self.physics.get_collision_events()
        {
            // Colliders of entities despawned earlier in this loop no longer resolve
            let (Some(a), Some(b)) = (
                self.physics.entity_for_collider(collider1),
                self.physics.entity_for_collider(collider2),
            ) else {
                continue;
            };
            self.notify_collision(a, b);
        }
    }

    /// Deliver a collision between `a` and `b` to both, `a` first.
    ///
    /// An entity that is gone by the time its turn comes is skipped.
    pub fn notify_collision(&mut self, a: EntityId, b: EntityId) {
        self.run_hook(a, 0.0, |behavior, ctx| behavior.on_collision(ctx, b));
        self.run_hook(b, 0.0, |behavior, ctx| behavior.on_collision(ctx, a));
    }

    pub fn despawn(&mut self, id: EntityId) -> Result<(), SceneError> {
        if self.remove_entity(id) {
            Ok(())
        } else {
            Err(SceneError::EntityNotFound(id))
        }
    }

    /// Returns true if a hook ran and asked for a despawn
    fn run_hook<F>(&mut self, id: EntityId, delta_time: f32, hook: F) -> bool
    where
        F: FnOnce(&mut dyn Behavior, &mut BehaviorContext<'_>),
    {
        let Some(record) = self.entities.get_mut(&id) else {
            return false;
        };
        let Some(mut behavior) = self.behaviors.remove(&id) else {
            return false;
        };

        let mut ctx = BehaviorContext::new(
            id,
            record,
            &mut self.physics,
            self.rng.as_mut(),
            self.pointer,
            delta_time,
        );
        hook(behavior.as_mut(), &mut ctx);
        let despawn = ctx.despawn_requested();

        if despawn {
            self.remove_entity(id);
        } else {
            self.behaviors.insert(id, behavior);
        }
        despawn
    }

    fn remove_entity(&mut self, id: EntityId) -> bool {
        let Some(record) = self.entities.remove(&id) else {
            return false;
        };
        self.behaviors.remove(&id);
        self.physics.remove_rigid_body(record.body);
        debug!("Despawned {} #{}", record.name, id);
        true
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains_key(&id)
    }

    pub fn transform(&self, id: EntityId) -> Option<&Transform> {
        self.entities.get(&id).map(|record| &record.transform)
    }

    pub fn name(&self, id: EntityId) -> Option<&str> {
        self.entities.get(&id).map(|record| record.name.as_str())
    }

    pub fn body(&self, id: EntityId) -> Option<&RigidBody> {
        let record = self.entities.get(&id)?;
        self.physics.get_rigid_body(record.body)
    }

    /// Concrete behavior of an entity, if it is a `T`
    pub fn behavior<T: Behavior + 'static>(&self, id: EntityId) -> Option<&T> {
        self.behaviors.get(&id)?.as_any().downcast_ref::<T>()
    }

    /// Live entity ids in spawn order
    pub fn ids(&self) -> Vec<EntityId> {
        self.entities.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn physics(&self) -> &PhysicsWorld {
        &self.physics
    }

    pub fn rng_mut(&mut self) -> &mut dyn RngCore {
        self.rng.as_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::physics::presets;
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use std::any::Any;

    #[derive(Default)]
    struct Recorder {
        spawned: u32,
        updates: u32,
        last_pointer: Option<PointerState>,
        hits: Vec<EntityId>,
        despawn_on_hit: bool,
    }

    impl Behavior for Recorder {
        fn on_spawn(&mut self, _ctx: &mut BehaviorContext<'_>) {
            self.spawned += 1;
        }

        fn on_update(&mut self, ctx: &mut BehaviorContext<'_>) {
            self.updates += 1;
            self.last_pointer = Some(ctx.pointer());
        }

        fn on_collision(&mut self, ctx: &mut BehaviorContext<'_>, other: EntityId) {
            self.hits.push(other);
            if self.despawn_on_hit {
                ctx.despawn();
            }
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    struct Vanish;

    impl Behavior for Vanish {
        fn on_spawn(&mut self, ctx: &mut BehaviorContext<'_>) {
            ctx.despawn();
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    fn scene() -> Scene {
        Scene::new(PhysicsWorld::new(), Box::new(Pcg32::seed_from_u64(3)))
    }

    fn ball(x: f32, y: f32) -> EntityDesc {
        EntityDesc::new(
            "ball",
            presets::obstacle_body(x, y),
            presets::obstacle_collider(0.5),
        )
    }

    #[test]
    fn test_spawn_runs_hook_once() {
        let mut scene = scene();
        let id = scene.spawn(ball(1.0, 2.0), Box::new(Recorder::default()));

        assert!(scene.contains(id));
        assert_eq!(scene.name(id), Some("ball"));
        assert_eq!(scene.transform(id).unwrap().position, Vec2::new(1.0, 2.0));
        assert_eq!(scene.behavior::<Recorder>(id).unwrap().spawned, 1);
    }

    #[test]
    fn test_despawn_in_spawn_hook() {
        let mut scene = scene();
        let id = scene.spawn(ball(0.0, 0.0), Box::new(Vanish));

        assert!(!scene.contains(id));
        assert!(scene.is_empty());
        assert_eq!(scene.physics().body_count(), 0);
    }

    #[test]
    fn test_update_passes_pointer_snapshot() {
        let mut scene = scene();
        let id = scene.spawn(ball(0.0, 0.0), Box::new(Recorder::default()));
        let pointer = PointerState::held_at(Vec2::new(3.0, 4.0));

        scene.update(&pointer, 0.016);
        scene.update(&pointer, 0.016);

        let recorder = scene.behavior::<Recorder>(id).unwrap();
        assert_eq!(recorder.updates, 2);
        assert_eq!(recorder.last_pointer, Some(pointer));
    }

    #[test]
    fn test_ids_in_spawn_order() {
        let mut scene = scene();
        let a = scene.spawn(ball(0.0, 0.0), Box::new(Recorder::default()));
        let b = scene.spawn(ball(5.0, 0.0), Box::new(Recorder::default()));
        assert_eq!(scene.ids(), vec![a, b]);
        assert_eq!(scene.len(), 2);
    }

    #[test]
    fn test_notify_collision_reaches_both() {
        let mut scene = scene();
        let a = scene.spawn(ball(0.0, 0.0), Box::new(Recorder::default()));
        let b = scene.spawn(ball(5.0, 0.0), Box::new(Recorder::default()));

        scene.notify_collision(a, b);

        assert_eq!(scene.behavior::<Recorder>(a).unwrap().hits, vec![b]);
        assert_eq!(scene.behavior::<Recorder>(b).unwrap().hits, vec![a]);
    }

    #[test]
    fn test_despawned_entity_gets_no_more_hooks() {
        let mut scene = scene();
        let doomed = scene.spawn(
            ball(0.0, 0.0),
            Box::new(Recorder {
                despawn_on_hit: true,
                ..Recorder::default()
            }),
        );
        let other = scene.spawn(ball(5.0, 0.0), Box::new(Recorder::default()));

        scene.notify_collision(doomed, other);
        assert!(!scene.contains(doomed));
        // The counterpart still hears about the collision
        assert_eq!(scene.behavior::<Recorder>(other).unwrap().hits, vec![doomed]);

        scene.notify_collision(doomed, other);
        scene.update(&PointerState::released(), 0.016);
        assert_eq!(scene.behavior::<Recorder>(other).unwrap().hits.len(), 2);
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn test_fixed_step_delivers_physical_contact() {
        let mut scene = scene();
        let a = scene.spawn(ball(0.0, 0.0), Box::new(Recorder::default()));
        let b = scene.spawn(ball(0.6, 0.0), Box::new(Recorder::default()));

        for _ in 0..5 {
            scene.fixed_step();
        }

        assert!(scene.behavior::<Recorder>(a).unwrap().hits.contains(&b));
        assert!(scene.behavior::<Recorder>(b).unwrap().hits.contains(&a));
    }

    #[test]
    fn test_fixed_step_syncs_transform() {
        let mut scene = scene();
        let mut desc = ball(0.0, 0.0);
        desc.body.set_linvel(rapier2d::prelude::vector![6.0, 0.0], true);
        let id = scene.spawn(desc, Box::new(Recorder::default()));

        scene.fixed_step();
        assert!(scene.transform(id).unwrap().position.x > 0.0);
    }

    #[test]
    fn test_despawn_unknown_entity() {
        let mut scene = scene();
        let result = scene.despawn(99);
        assert!(matches!(result, Err(SceneError::EntityNotFound(99))));
    }

    #[test]
    fn test_despawn_removes_body() {
        let mut scene = scene();
        let id = scene.spawn(ball(0.0, 0.0), Box::new(Recorder::default()));
        scene.despawn(id).unwrap();
        assert!(scene.body(id).is_none());
        assert_eq!(scene.physics().body_count(), 0);
    }
}
