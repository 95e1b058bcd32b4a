// Game tuning - one set of constants, validated before use

/// Invalid tuning values
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SettingsError {
    #[error("{name}: min {min} is greater than max {max}")]
    InvertedRange { name: &'static str, min: f32, max: f32 },

    #[error("{name} must be finite and non-negative, got {value}")]
    OutOfDomain { name: &'static str, value: f32 },
}

fn check_non_negative(name: &'static str, value: f32) -> Result<(), SettingsError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SettingsError::OutOfDomain { name, value })
    }
}

fn check_range(name: &'static str, min: f32, max: f32) -> Result<(), SettingsError> {
    check_non_negative(name, min)?;
    check_non_negative(name, max)?;
    if min > max {
        return Err(SettingsError::InvertedRange { name, min, max });
    }
    Ok(())
}

/// Launch parameters for obstacles
#[derive(Debug, Clone, PartialEq)]
pub struct ObstacleSettings {
    /// Smallest uniform scale
    pub min_size: f32,
    /// Largest uniform scale
    pub max_size: f32,
    /// Smallest launch impulse magnitude (obstacles have unit mass)
    pub min_speed: f32,
    /// Largest launch impulse magnitude
    pub max_speed: f32,
    /// Collider radius at scale 1
    pub base_radius: f32,
}

pub const OBSTACLE_SETTINGS: ObstacleSettings = ObstacleSettings {
    min_size: 0.5,
    max_size: 2.0,
    min_speed: 1.0,
    max_speed: 4.0,
    base_radius: 0.5,
};

impl ObstacleSettings {
    pub fn standard() -> Self {
        OBSTACLE_SETTINGS
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        check_range("obstacle size", self.min_size, self.max_size)?;
        check_range("obstacle speed", self.min_speed, self.max_speed)?;
        check_non_negative("obstacle radius", self.base_radius)
    }
}

impl Default for ObstacleSettings {
    fn default() -> Self {
        OBSTACLE_SETTINGS
    }
}

/// Ship handling
#[derive(Debug, Clone, PartialEq)]
pub struct ShipSettings {
    /// Force applied along the facing direction while thrusting
    pub thrust_force: f32,
    pub radius: f32,
    /// Drag so the ship settles when thrust stops
    pub linear_damping: f32,
}

pub const SHIP_SETTINGS: ShipSettings = ShipSettings {
    thrust_force: 10.0,
    radius: 0.4,
    linear_damping: 0.5,
};

impl ShipSettings {
    pub fn standard() -> Self {
        SHIP_SETTINGS
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        check_non_negative("thrust force", self.thrust_force)?;
        check_non_negative("ship radius", self.radius)?;
        check_non_negative("ship damping", self.linear_damping)
    }
}

impl Default for ShipSettings {
    fn default() -> Self {
        SHIP_SETTINGS
    }
}

/// Play field layout
#[derive(Debug, Clone, PartialEq)]
pub struct ArenaSettings {
    /// The arena is the square [-half_extent, half_extent]^2
    pub half_extent: f32,
    /// Obstacles kept alive at once
    pub obstacle_count: usize,
    /// No obstacle starts closer than this to the ship
    pub safe_radius: f32,
    /// How far past the edge an obstacle may drift before it is culled
    pub cull_margin: f32,
    pub obstacles: ObstacleSettings,
    pub ship: ShipSettings,
}

pub const ARENA_SETTINGS: ArenaSettings = ArenaSettings {
    half_extent: 12.0,
    obstacle_count: 12,
    safe_radius: 4.0,
    cull_margin: 3.0,
    obstacles: OBSTACLE_SETTINGS,
    ship: SHIP_SETTINGS,
};

impl ArenaSettings {
    pub fn standard() -> Self {
        ARENA_SETTINGS
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        check_non_negative("arena half extent", self.half_extent)?;
        check_range("safe radius", self.safe_radius, self.half_extent)?;
        check_non_negative("cull margin", self.cull_margin)?;
        self.obstacles.validate()?;
        self.ship.validate()
    }
}

impl Default for ArenaSettings {
    fn default() -> Self {
        ARENA_SETTINGS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(ObstacleSettings::default().validate(), Ok(()));
        assert_eq!(ShipSettings::default().validate(), Ok(()));
        assert_eq!(ArenaSettings::default().validate(), Ok(()));
    }

    #[test]
    fn test_standard_equals_default() {
        assert_eq!(ArenaSettings::standard(), ArenaSettings::default());
    }

    #[test]
    fn test_inverted_size_range_rejected() {
        let settings = ObstacleSettings {
            min_size: 3.0,
            max_size: 1.0,
            ..ObstacleSettings::default()
        };
        assert_eq!(
            settings.validate(),
            Err(SettingsError::InvertedRange {
                name: "obstacle size",
                min: 3.0,
                max: 1.0
            })
        );
    }

    #[test]
    fn test_degenerate_range_allowed() {
        let settings = ObstacleSettings {
            min_speed: 2.0,
            max_speed: 2.0,
            ..ObstacleSettings::default()
        };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_nan_thrust_rejected() {
        let settings = ShipSettings {
            thrust_force: f32::NAN,
            ..ShipSettings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::OutOfDomain { name: "thrust force", .. })
        ));
    }

    #[test]
    fn test_safe_radius_must_fit_arena() {
        let settings = ArenaSettings {
            safe_radius: 20.0,
            ..ArenaSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_error_message() {
        let err = SettingsError::InvertedRange {
            name: "obstacle speed",
            min: 5.0,
            max: 1.0,
        };
        assert_eq!(err.to_string(), "obstacle speed: min 5 is greater than max 1");
    }
}
