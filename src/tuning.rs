//! Data-driven game balance
//!
//! Every value has a default matching the shipped game, so a tuning file only
//! needs to list the fields it overrides.

use serde::{Deserialize, Serialize};

use crate::error::SimError;

/// Tunable gameplay parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// World scroll per tick
    pub game_speed: f32,
    /// Obstacle speed before the score-based speed rate is added
    pub obstacle_base_speed: f32,
    /// Obstacle speed cap
    pub obstacle_max_speed: f32,
    /// Clouds drift at a tenth of this per tick
    pub cloud_speed: f32,

    // === Jump ===
    /// Horizontal world distance covered by one jump
    pub jump_length: f32,
    /// Arc sharpness `k`; peak height is `jump_length / (4k)`
    pub arc_sharpness: f32,

    // === Collision ===
    /// Fraction of each box edge ignored when testing overlap
    pub hitbox_shrink: f32,

    // === Spawning ===
    /// Spawn rolls are drawn from `[0, spawn_roll_range)`
    pub spawn_roll_range: u32,
    /// With no obstacles, spawn when `roll % empty_spawn_modulus == 0`
    pub empty_spawn_modulus: u32,
    /// With one obstacle, spawn a second when `roll % second_spawn_modulus == 0`
    pub second_spawn_modulus: u32,
    /// Minimum free run before a second obstacle, as a fraction of `jump_length`
    pub min_gap_ratio: f32,

    /// Score points per unit of speed rate
    pub speed_rate_divisor: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            game_speed: 10.0,
            obstacle_base_speed: 5.0,
            obstacle_max_speed: 20.0,
            cloud_speed: 2.0,

            jump_length: 600.0,
            arc_sharpness: 0.5,

            hitbox_shrink: 0.15,

            spawn_roll_range: 100,
            empty_spawn_modulus: 10,
            second_spawn_modulus: 30,
            min_gap_ratio: 0.6,

            speed_rate_divisor: 1000.0,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Check every value is usable by the simulation
    pub fn validate(&self) -> Result<(), SimError> {
        let non_negative = [
            ("obstacle_base_speed", self.obstacle_base_speed),
            ("obstacle_max_speed", self.obstacle_max_speed),
            ("cloud_speed", self.cloud_speed),
            ("min_gap_ratio", self.min_gap_ratio),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(field, format!("must be finite and >= 0, got {value}")));
            }
        }

        let positive = [
            ("game_speed", self.game_speed),
            ("jump_length", self.jump_length),
            ("arc_sharpness", self.arc_sharpness),
            ("speed_rate_divisor", self.speed_rate_divisor),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(invalid(field, format!("must be finite and > 0, got {value}")));
            }
        }

        if !(0.0..0.5).contains(&self.hitbox_shrink) {
            return Err(invalid(
                "hitbox_shrink",
                format!("must be in [0, 0.5), got {}", self.hitbox_shrink),
            ));
        }

        let counts = [
            ("spawn_roll_range", self.spawn_roll_range),
            ("empty_spawn_modulus", self.empty_spawn_modulus),
            ("second_spawn_modulus", self.second_spawn_modulus),
        ];
        for (field, value) in counts {
            if value == 0 {
                return Err(invalid(field, "must be at least 1".into()));
            }
        }

        Ok(())
    }

    /// Obstacle shift per tick for the given speed rate (capped)
    #[inline]
    pub fn obstacle_speed(&self, speed_rate: f32) -> f32 {
        (self.obstacle_base_speed + speed_rate).min(self.obstacle_max_speed)
    }

    /// Free run the player needs between obstacles
    #[inline]
    pub fn min_gap(&self) -> f32 {
        self.jump_length * self.min_gap_ratio
    }
}

fn invalid(field: &'static str, reason: String) -> SimError {
    SimError::InvalidTuning { field, reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let tuning = Tuning::default();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.min_gap(), 360.0);
    }

    #[test]
    fn test_obstacle_speed_is_capped() {
        let tuning = Tuning::default();
        assert_eq!(tuning.obstacle_speed(1.0), 6.0);
        assert_eq!(tuning.obstacle_speed(15.0), 20.0);
        assert_eq!(tuning.obstacle_speed(100.0), 20.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "jump_length": 400.0 }"#).unwrap();
        assert_eq!(tuning.jump_length, 400.0);
        assert_eq!(tuning.game_speed, 10.0);
        assert_eq!(tuning.second_spawn_modulus, 30);
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = Tuning::from_json(r#"{ "jump_length": 0.0 }"#).unwrap_err();
        assert!(matches!(err, SimError::InvalidTuning { field: "jump_length", .. }));

        let err = Tuning::from_json(r#"{ "hitbox_shrink": 0.5 }"#).unwrap_err();
        assert!(matches!(err, SimError::InvalidTuning { field: "hitbox_shrink", .. }));

        let err = Tuning::from_json(r#"{ "empty_spawn_modulus": 0 }"#).unwrap_err();
        assert!(matches!(
            err,
            SimError::InvalidTuning { field: "empty_spawn_modulus", .. }
        ));

        let err = Tuning::from_json(r#"{ "game_speed": -1.0 }"#).unwrap_err();
        assert!(matches!(err, SimError::InvalidTuning { field: "game_speed", .. }));

        // A stalled world would never land a jump
        let err = Tuning::from_json(r#"{ "game_speed": 0.0 }"#).unwrap_err();
        assert!(matches!(err, SimError::InvalidTuning { field: "game_speed", .. }));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Tuning::from_json("{ jump_length: }").unwrap_err();
        assert!(matches!(err, SimError::TuningParse(_)));
    }
}
