use super::collision::CollisionGroups;
use rapier2d::prelude::*;

pub use rapier2d::prelude::{ColliderHandle, RigidBodyHandle};

/// Builder for creating rigid bodies with common configurations
pub struct BodyBuilder {
    body_type: RigidBodyType,
    position: Isometry<Real>,
    gravity_scale: Real,
    linear_damping: Real,
    angular_damping: Real,
    can_sleep: bool,
    ccd: bool,
}

impl BodyBuilder {
    /// Create a new dynamic body (affected by forces and collisions)
    pub fn new_dynamic() -> Self {
        Self {
            body_type: RigidBodyType::Dynamic,
            position: Isometry::identity(),
            gravity_scale: 1.0,
            linear_damping: 0.0,
            angular_damping: 0.0,
            can_sleep: true,
            ccd: false,
        }
    }

    /// Set the initial position of the body
    pub fn position(mut self, x: Real, y: Real) -> Self {
        self.position = Isometry::translation(x, y);
        self
    }

    /// Set the gravity scale (1.0 = normal gravity, 0.0 = no gravity)
    pub fn gravity_scale(mut self, scale: Real) -> Self {
        self.gravity_scale = scale;
        self
    }

    /// Drag on linear velocity
    pub fn linear_damping(mut self, damping: Real) -> Self {
        self.linear_damping = damping;
        self
    }

    /// Drag on angular velocity
    pub fn angular_damping(mut self, damping: Real) -> Self {
        self.angular_damping = damping;
        self
    }

    /// Set whether the body can sleep when inactive
    pub fn can_sleep(mut self, can_sleep: bool) -> Self {
        self.can_sleep = can_sleep;
        self
    }

    /// Continuous collision detection for fast movers
    pub fn ccd(mut self, enabled: bool) -> Self {
        self.ccd = enabled;
        self
    }

    /// Build the rigid body
    pub fn build(self) -> RigidBody {
        RigidBodyBuilder::new(self.body_type)
            .position(self.position)
            .gravity_scale(self.gravity_scale)
            .linear_damping(self.linear_damping)
            .angular_damping(self.angular_damping)
            .can_sleep(self.can_sleep)
            .ccd_enabled(self.ccd)
            .build()
    }
}

/// Collider shape kept in unscaled form so it can be rebuilt at any uniform scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeDesc {
    Ball { radius: Real },
}

impl ShapeDesc {
    /// Shape at the given uniform scale
    pub fn scaled(&self, scale: Real) -> SharedShape {
        match *self {
            ShapeDesc::Ball { radius } => SharedShape::ball(radius * scale),
        }
    }
}

/// Builder for creating colliders with common configurations
#[derive(Debug, Clone)]
pub struct ColliderBuilder2D {
    shape: ShapeDesc,
    collision_groups: CollisionGroups,
    friction: Real,
    restitution: Real,
    mass: Option<Real>,
    active_events: ActiveEvents,
}

impl ColliderBuilder2D {
    fn with_shape(shape: ShapeDesc) -> Self {
        Self {
            shape,
            collision_groups: CollisionGroups::Default,
            friction: 0.5,
            restitution: 0.0,
            mass: None,
            active_events: ActiveEvents::COLLISION_EVENTS,
        }
    }

    /// Create a circle-shaped collider
    pub fn circle(radius: Real) -> Self {
        Self::with_shape(ShapeDesc::Ball { radius })
    }

    /// Set the collision groups for filtering
    pub fn collision_groups(mut self, groups: CollisionGroups) -> Self {
        self.collision_groups = groups;
        self
    }

    /// Set friction coefficient (0.0 = no friction, 1.0 = high friction)
    pub fn friction(mut self, friction: Real) -> Self {
        self.friction = friction;
        self
    }

    /// Set restitution/bounciness (0.0 = no bounce, 1.0 = perfect bounce)
    pub fn restitution(mut self, restitution: Real) -> Self {
        self.restitution = restitution;
        self
    }

    /// Set mass directly instead of deriving it from the shape area, so it
    /// survives rescaling
    pub fn mass(mut self, mass: Real) -> Self {
        self.mass = Some(mass);
        self
    }

    /// Unscaled shape this collider is built from
    pub fn shape_desc(&self) -> ShapeDesc {
        self.shape
    }

    /// Build the collider at scale 1
    pub fn build(self) -> Collider {
        let mut builder = rapier2d::prelude::ColliderBuilder::new(self.shape.scaled(1.0))
            .collision_groups(self.collision_groups.to_interaction_groups())
            .friction(self.friction)
            .restitution(self.restitution)
            .active_events(self.active_events);

        if let Some(mass) = self.mass {
            builder = builder.mass(mass);
        }

        builder.build()
    }
}

/// Common rigid body configurations for game objects
pub mod presets {
    use super::*;

    /// The player's ship: free to rotate, never sleeps, drags a little
    pub fn ship_body(x: Real, y: Real, linear_damping: Real) -> RigidBody {
        BodyBuilder::new_dynamic()
            .position(x, y)
            .gravity_scale(0.0)
            .linear_damping(linear_damping)
            .angular_damping(1.0)
            .can_sleep(false)
            .ccd(true)
            .build()
    }

    /// Ship collider (circle shape, unit mass)
    pub fn ship_collider(radius: Real) -> ColliderBuilder2D {
        ColliderBuilder2D::circle(radius)
            .collision_groups(CollisionGroups::Ship)
            .friction(0.0)
            .restitution(0.0)
            .mass(1.0)
    }

    /// Obstacle body: drifts without drag
    pub fn obstacle_body(x: Real, y: Real) -> RigidBody {
        BodyBuilder::new_dynamic()
            .position(x, y)
            .gravity_scale(0.0)
            .can_sleep(false)
            .build()
    }

    /// Obstacle collider (circle shape, unit mass regardless of scale)
    pub fn obstacle_collider(radius: Real) -> ColliderBuilder2D {
        ColliderBuilder2D::circle(radius)
            .collision_groups(CollisionGroups::Obstacle)
            .friction(0.2)
            .restitution(0.6)
            .mass(1.0)
    }
}
