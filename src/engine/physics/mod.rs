// Physics system using rapier2d

pub mod body;
mod collision;
mod world;

pub use body::{presets, ColliderBuilder2D, ColliderHandle, RigidBodyHandle, ShapeDesc};
pub use collision::CollisionEvent;
pub use world::PhysicsWorld;

// Re-export commonly used rapier types for convenience
pub use rapier2d::prelude::RigidBody;
