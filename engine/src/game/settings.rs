use serde::{Deserialize, Serialize};

pub const DEFAULT_HEIGHT: usize = 8;
pub const DEFAULT_WIDTH: usize = 10;
pub const DEFAULT_COLORS_COUNT: u32 = 5;
pub const DEFAULT_MAX_RESHUFFLE_COUNT: u32 = 5;
pub const DEFAULT_MIN_COMBINATION_COUNT: usize = 2;
pub const DEFAULT_SUPER_TILE_ACTIVATE_THRESHOLD: usize = 6;
pub const DEFAULT_SUPER_TILE_RADIUS: usize = 3;
pub const DEFAULT_SCORE_GOAL: u32 = 500;
pub const DEFAULT_MOVES_COUNT: u32 = 25;

/// Immutable per-session configuration of the match engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlastSettings {
    pub height: usize,
    pub width: usize,
    pub colors_count: u32,
    pub max_reshuffle_count: u32,
    pub min_combination_count: usize,
    pub super_tile_activate_threshold: usize,
    pub super_tile_radius: usize,
    pub score_goal: u32,
    pub moves_count: u32,
}

impl Default for BlastSettings {
    fn default() -> Self {
        Self {
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
            colors_count: DEFAULT_COLORS_COUNT,
            max_reshuffle_count: DEFAULT_MAX_RESHUFFLE_COUNT,
            min_combination_count: DEFAULT_MIN_COMBINATION_COUNT,
            super_tile_activate_threshold: DEFAULT_SUPER_TILE_ACTIVATE_THRESHOLD,
            super_tile_radius: DEFAULT_SUPER_TILE_RADIUS,
            score_goal: DEFAULT_SCORE_GOAL,
            moves_count: DEFAULT_MOVES_COUNT,
        }
    }
}

impl BlastSettings {
    /// Boundary validation. The engine itself does not defend against
    /// malformed parameters; callers validate before constructing a session.
    pub fn validate(&self) -> Result<(), String> {
        if self.height < 1 || self.width < 1 {
            return Err(format!(
                "Field dimensions must be at least 1x1, got {}x{}",
                self.height, self.width
            ));
        }
        if self.min_combination_count < 1 {
            return Err("Minimum combination size must be at least 1".to_string());
        }
        if (self.colors_count as usize) < self.min_combination_count {
            return Err(format!(
                "Colors count {} must be at least the minimum combination size {}",
                self.colors_count, self.min_combination_count
            ));
        }
        if self.super_tile_radius < 1 {
            return Err("Super tile radius must be at least 1".to_string());
        }
        if self.super_tile_activate_threshold < 1 {
            return Err("Super tile activation threshold must be at least 1".to_string());
        }
        if self.score_goal < 1 {
            return Err("Score goal must be positive".to_string());
        }
        if self.moves_count < 1 {
            return Err("Moves count must be positive".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_are_valid() {
        assert!(BlastSettings::default().validate().is_ok());
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        let settings = BlastSettings {
            height: 0,
            ..BlastSettings::default()
        };
        assert!(settings.validate().is_err());

        let settings = BlastSettings {
            width: 0,
            ..BlastSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn zero_min_combination_is_rejected() {
        let settings = BlastSettings {
            min_combination_count: 0,
            ..BlastSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn colors_below_min_combination_are_rejected() {
        let settings = BlastSettings {
            colors_count: 2,
            min_combination_count: 3,
            ..BlastSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn zero_super_radius_is_rejected() {
        let settings = BlastSettings {
            super_tile_radius: 0,
            ..BlastSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn zero_moves_or_goal_are_rejected() {
        let settings = BlastSettings {
            moves_count: 0,
            ..BlastSettings::default()
        };
        assert!(settings.validate().is_err());

        let settings = BlastSettings {
            score_goal: 0,
            ..BlastSettings::default()
        };
        assert!(settings.validate().is_err());
    }
}
