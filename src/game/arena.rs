// Arena game mode: lays out the field and keeps it stocked with obstacles

use super::obstacle::spawn_obstacle;
use super::settings::{ArenaSettings, SettingsError};
use super::ship::spawn_ship;
use crate::core::math::random_in_range;
use crate::engine::scene::{EntityId, Scene};
use glam::Vec2;
use log::{info, warn};
use rand::{Rng, RngCore};

pub struct Arena {
    settings: ArenaSettings,
    ship: Option<EntityId>,
    obstacles: Vec<EntityId>,
}

impl Arena {
    pub fn new(settings: ArenaSettings) -> Result<Self, SettingsError> {
        settings.validate()?;
        Ok(Self {
            settings,
            ship: None,
            obstacles: Vec::new(),
        })
    }

    /// Spawn the ship at the origin and the starting field around it
    pub fn setup(&mut self, scene: &mut Scene) {
        self.ship = Some(spawn_ship(scene, Vec2::ZERO, &self.settings.ship));

        for _ in 0..self.settings.obstacle_count {
            let position = self.field_position(scene.rng_mut());
            let id = spawn_obstacle(scene, position, &self.settings.obstacles);
            self.obstacles.push(id);
        }

        info!(
            "Arena ready: {} obstacles in a {}x{} field",
            self.obstacles.len(),
            self.settings.half_extent * 2.0,
            self.settings.half_extent * 2.0
        );
    }

    /// Cull obstacles that drifted out and top the field back up.
    /// Returns how many obstacles were spawned.
    pub fn maintain(&mut self, scene: &mut Scene) -> usize {
        let limit = self.settings.half_extent + self.settings.cull_margin;

        self.obstacles.retain(|&id| {
            let Some(transform) = scene.transform(id) else {
                return false;
            };
            let p = transform.position;
            if p.x.abs() <= limit && p.y.abs() <= limit {
                return true;
            }
            if let Err(err) = scene.despawn(id) {
                warn!("Failed to cull obstacle: {err}");
            }
            false
        });

        let missing = self
            .settings
            .obstacle_count
            .saturating_sub(self.obstacles.len());
        for _ in 0..missing {
            let position = self.edge_position(scene.rng_mut());
            let id = spawn_obstacle(scene, position, &self.settings.obstacles);
            self.obstacles.push(id);
        }

        if missing > 0 {
            info!("Respawned {missing} obstacles");
        }
        missing
    }

    pub fn ship(&self) -> Option<EntityId> {
        self.ship
    }

    pub fn ship_alive(&self, scene: &Scene) -> bool {
        self.ship.is_some_and(|id| scene.contains(id))
    }

    pub fn obstacles(&self) -> &[EntityId] {
        &self.obstacles
    }

    pub fn settings(&self) -> &ArenaSettings {
        &self.settings
    }

    /// Anywhere in the arena outside the ship's safe radius
    fn field_position(&self, rng: &mut dyn RngCore) -> Vec2 {
        let h = self.settings.half_extent;
        loop {
            let candidate = Vec2::new(random_in_range(rng, -h, h), random_in_range(rng, -h, h));
            if candidate.length() >= self.settings.safe_radius {
                return candidate;
            }
        }
    }

    /// A random point on the arena border
    fn edge_position(&self, rng: &mut dyn RngCore) -> Vec2 {
        let h = self.settings.half_extent;
        let t = random_in_range(rng, -h, h);
        match rng.random_range(0..4) {
            0 => Vec2::new(t, h),
            1 => Vec2::new(t, -h),
            2 => Vec2::new(h, t),
            _ => Vec2::new(-h, t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::physics::PhysicsWorld;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn scene() -> Scene {
        Scene::new(PhysicsWorld::new(), Box::new(Pcg32::seed_from_u64(23)))
    }

    fn settings() -> ArenaSettings {
        ArenaSettings {
            half_extent: 10.0,
            obstacle_count: 8,
            safe_radius: 3.0,
            cull_margin: 2.0,
            ..ArenaSettings::default()
        }
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let bad = ArenaSettings {
            cull_margin: -1.0,
            ..settings()
        };
        assert!(Arena::new(bad).is_err());
    }

    #[test]
    fn test_setup_layout() {
        let mut scene = scene();
        let mut arena = Arena::new(settings()).unwrap();
        arena.setup(&mut scene);

        assert!(arena.ship_alive(&scene));
        assert_eq!(arena.obstacles().len(), 8);
        assert_eq!(scene.len(), 9);

        for &id in arena.obstacles() {
            let p = scene.transform(id).unwrap().position;
            assert!(p.length() >= 3.0);
            assert!(p.x.abs() <= 10.0 && p.y.abs() <= 10.0);
        }
    }

    #[test]
    fn test_maintain_is_noop_when_full() {
        let mut scene = scene();
        let mut arena = Arena::new(settings()).unwrap();
        arena.setup(&mut scene);

        assert_eq!(arena.maintain(&mut scene), 0);
        assert_eq!(arena.obstacles().len(), 8);
    }

    #[test]
    fn test_maintain_refills_missing_obstacles() {
        let mut scene = scene();
        let mut arena = Arena::new(settings()).unwrap();
        arena.setup(&mut scene);

        let gone = arena.obstacles()[0];
        scene.despawn(gone).unwrap();

        assert_eq!(arena.maintain(&mut scene), 1);
        assert_eq!(arena.obstacles().len(), 8);
        assert!(!arena.obstacles().contains(&gone));

        let newest = *arena.obstacles().last().unwrap();
        let p = scene.transform(newest).unwrap().position;
        assert!((p.x.abs() - 10.0).abs() < 1e-4 || (p.y.abs() - 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_maintain_culls_escaped_obstacles() {
        let mut scene = scene();
        let mut arena = Arena::new(settings()).unwrap();
        arena.setup(&mut scene);

        // Well past half_extent + cull_margin
        let stray = spawn_obstacle(&mut scene, Vec2::new(50.0, 0.0), &arena.settings.obstacles);
        arena.obstacles.push(stray);

        assert_eq!(arena.maintain(&mut scene), 0);
        assert!(!scene.contains(stray));
        assert_eq!(arena.obstacles().len(), 8);
    }

    #[test]
    fn test_maintain_keeps_obstacles_inside_margin() {
        let mut scene = scene();
        let mut arena = Arena::new(settings()).unwrap();
        arena.setup(&mut scene);

        let drifter = spawn_obstacle(&mut scene, Vec2::new(11.5, -11.5), &arena.settings.obstacles);
        arena.obstacles.push(drifter);

        arena.maintain(&mut scene);
        assert!(scene.contains(drifter));
    }

    #[test]
    fn test_ship_alive_tracks_despawn() {
        let mut scene = scene();
        let mut arena = Arena::new(settings()).unwrap();
        arena.setup(&mut scene);

        let ship = arena.ship().unwrap();
        scene.despawn(ship).unwrap();
        assert!(!arena.ship_alive(&scene));
    }
}
