// Entity identity and transform

use crate::engine::physics::{
    ColliderBuilder2D, ColliderHandle, RigidBody, RigidBodyHandle, ShapeDesc,
};
use glam::Vec2;

/// Unique identifier for a scene entity
pub type EntityId = u64;

/// Position, orientation and uniform scale of an entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec2,
    /// Radians, counter-clockwise; 0 means local +Y points up
    pub rotation: f32,
    pub scale: f32,
}

impl Transform {
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            rotation: 0.0,
            scale: 1.0,
        }
    }

    /// Direction the entity's local +Y axis points in
    pub fn forward(&self) -> Vec2 {
        crate::core::math::forward_from_angle(self.rotation)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::at(Vec2::ZERO)
    }
}

/// Everything needed to put an entity into the scene
pub struct EntityDesc {
    pub name: String,
    pub body: RigidBody,
    pub collider: ColliderBuilder2D,
}

impl EntityDesc {
    pub fn new(name: &str, body: RigidBody, collider: ColliderBuilder2D) -> Self {
        Self {
            name: name.to_string(),
            body,
            collider,
        }
    }
}

/// Bookkeeping the scene keeps per live entity
#[derive(Debug)]
pub(crate) struct EntityRecord {
    pub name: String,
    pub transform: Transform,
    pub body: RigidBodyHandle,
    pub collider: ColliderHandle,
    pub shape: ShapeDesc,
}
