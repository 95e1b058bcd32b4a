// 2D camera: maps between window pixels and world units

use glam::Vec2;

/// Default world units visible per pixel is 1 / DEFAULT_ZOOM
pub const DEFAULT_ZOOM: f32 = 32.0;

/// Orthographic 2D camera
#[derive(Debug, Clone)]
pub struct Camera {
    /// Camera centre in world space
    pub position: Vec2,
    /// Pixels per world unit
    pub zoom: f32,
    viewport_width: f32,
    viewport_height: f32,
}

impl Camera {
    pub fn new(position: Vec2, viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            position,
            zoom: DEFAULT_ZOOM,
            viewport_width,
            viewport_height,
        }
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.max(0.1); // Prevent zoom from being too small
    }

    /// Resize the viewport (physical pixels)
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport_width = width;
        self.viewport_height = height;
    }

    fn half_extent(&self) -> Vec2 {
        Vec2::new(
            (self.viewport_width / 2.0) / self.zoom,
            (self.viewport_height / 2.0) / self.zoom,
        )
    }

    /// Convert screen coordinates (origin top-left, y down) to world coordinates (y up)
    pub fn screen_to_world(&self, screen_pos: Vec2) -> Vec2 {
        let normalized_x = (screen_pos.x / self.viewport_width) * 2.0 - 1.0;
        let normalized_y = 1.0 - (screen_pos.y / self.viewport_height) * 2.0;
        let half = self.half_extent();

        Vec2::new(
            self.position.x + normalized_x * half.x,
            self.position.y + normalized_y * half.y,
        )
    }

    /// Convert world coordinates to screen coordinates
    pub fn world_to_screen(&self, world_pos: Vec2) -> Vec2 {
        let half = self.half_extent();
        let normalized_x = (world_pos.x - self.position.x) / half.x;
        let normalized_y = (world_pos.y - self.position.y) / half.y;

        Vec2::new(
            (normalized_x + 1.0) * self.viewport_width / 2.0,
            (1.0 - normalized_y) * self.viewport_height / 2.0,
        )
    }

    /// Visible region in world coordinates
    pub fn viewport_bounds(&self) -> Viewport {
        let half = self.half_extent();
        Viewport {
            min: self.position - half,
            max: self.position + half,
        }
    }
}

/// Viewport bounds in world coordinates
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub min: Vec2,
    pub max: Vec2,
}

impl Viewport {
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn camera() -> Camera {
        let mut camera = Camera::new(Vec2::ZERO, 800.0, 600.0);
        camera.set_zoom(10.0);
        camera
    }

    #[test]
    fn test_screen_centre_is_camera_position() {
        let mut camera = camera();
        camera.set_position(Vec2::new(3.0, -2.0));
        let world = camera.screen_to_world(Vec2::new(400.0, 300.0));
        assert_relative_eq!(world.x, 3.0);
        assert_relative_eq!(world.y, -2.0);
    }

    #[test]
    fn test_screen_y_points_down() {
        let camera = camera();
        let top_left = camera.screen_to_world(Vec2::ZERO);
        assert_relative_eq!(top_left.x, -40.0);
        assert_relative_eq!(top_left.y, 30.0);
    }

    #[test]
    fn test_world_screen_inverse() {
        let camera = camera();
        let world = Vec2::new(12.5, -7.25);
        let back = camera.screen_to_world(camera.world_to_screen(world));
        assert_relative_eq!(back.x, world.x, epsilon = 1e-4);
        assert_relative_eq!(back.y, world.y, epsilon = 1e-4);
    }

    #[test]
    fn test_viewport_bounds() {
        let camera = camera();
        let bounds = camera.viewport_bounds();
        assert!(bounds.contains(Vec2::new(39.0, 29.0)));
        assert!(!bounds.contains(Vec2::new(41.0, 0.0)));
    }

    #[test]
    fn test_zoom_floor() {
        let mut camera = camera();
        camera.set_zoom(0.0);
        assert_eq!(camera.zoom, 0.1);
    }
}
