use rapier2d::prelude::*;
use std::sync::{Arc, Mutex};

/// Collision groups for filtering what objects can collide with each other
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionGroups {
    /// Default group - interacts with everything
    Default = 0b0000_0001,

    /// The player's ship
    Ship = 0b0000_0010,

    /// Drifting obstacles
    Obstacle = 0b0000_0100,
}

impl CollisionGroups {
    /// Convert to rapier2d's InteractionGroups
    pub fn to_interaction_groups(self) -> InteractionGroups {
        let memberships = Group::from_bits_truncate(self as u32);

        let filter = match self {
            // The ship hits obstacles and anything generic, never another ship
            CollisionGroups::Ship => Group::from_bits_truncate(
                CollisionGroups::Obstacle as u32 | CollisionGroups::Default as u32,
            ),

            // Obstacles bounce off each other as well as the ship
            CollisionGroups::Obstacle => Group::from_bits_truncate(
                CollisionGroups::Ship as u32
                    | CollisionGroups::Obstacle as u32
                    | CollisionGroups::Default as u32,
            ),

            CollisionGroups::Default => Group::ALL,
        };

        InteractionGroups::new(memberships, filter)
    }
}

/// Two colliders started touching during a physics step.
///
/// Separations are not recorded; nothing in the game reacts to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionEvent {
    pub collider1: ColliderHandle,
    pub collider2: ColliderHandle,
}

/// Queue for storing collision events during physics step.
///
/// rapier hands the handler out by shared reference, hence the interior mutex.
pub struct CollisionEventQueue {
    events: Arc<Mutex<Vec<CollisionEvent>>>,
}

impl CollisionEventQueue {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::with_capacity(32))),
        }
    }

    /// Clear all events (call at start of physics step)
    pub fn clear(&self) {
        if let Ok(mut events) = self.events.lock() {
            events.clear();
        }
    }

    /// Events recorded by the last step, in arrival order
    pub fn events(&self) -> Vec<CollisionEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    fn push(&self, event: CollisionEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

impl Default for CollisionEventQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for CollisionEventQueue {
    fn handle_collision_event(
        &self,
        _bodies: &RigidBodySet,
        _colliders: &ColliderSet,
        event: rapier2d::prelude::CollisionEvent,
        _contact_pair: Option<&ContactPair>,
    ) {
        if let rapier2d::prelude::CollisionEvent::Started(h1, h2, _flags) = event {
            self.push(CollisionEvent {
                collider1: h1,
                collider2: h2,
            });
        }
    }

    fn handle_contact_force_event(
        &self,
        _dt: Real,
        _bodies: &RigidBodySet,
        _colliders: &ColliderSet,
        _contact_pair: &ContactPair,
        _total_force_magnitude: Real,
    ) {
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interacts(a: CollisionGroups, b: CollisionGroups) -> bool {
        a.to_interaction_groups()
            .test(b.to_interaction_groups())
    }

    #[test]
    fn test_collision_groups_bits_unique() {
        let groups = [
            CollisionGroups::Default,
            CollisionGroups::Ship,
            CollisionGroups::Obstacle,
        ];

        for (i, group1) in groups.iter().enumerate() {
            for (j, group2) in groups.iter().enumerate() {
                if i != j {
                    assert_ne!(*group1 as u32, *group2 as u32, "Groups must have unique bits");
                }
            }
        }
    }

    #[test]
    fn test_ship_hits_obstacles() {
        assert!(interacts(CollisionGroups::Ship, CollisionGroups::Obstacle));
    }

    #[test]
    fn test_obstacles_hit_each_other() {
        assert!(interacts(CollisionGroups::Obstacle, CollisionGroups::Obstacle));
    }

    #[test]
    fn test_ships_pass_through_each_other() {
        assert!(!interacts(CollisionGroups::Ship, CollisionGroups::Ship));
    }

    #[test]
    fn test_default_group_hits_everything() {
        assert!(interacts(CollisionGroups::Default, CollisionGroups::Ship));
        assert!(interacts(CollisionGroups::Default, CollisionGroups::Obstacle));
    }

    #[test]
    fn test_queue_clear() {
        let queue = CollisionEventQueue::new();
        queue.push(CollisionEvent {
            collider1: ColliderHandle::from_raw_parts(0, 0),
            collider2: ColliderHandle::from_raw_parts(1, 0),
        });
        assert_eq!(queue.events().len(), 1);
        queue.clear();
        assert!(queue.events().is_empty());
    }
}
