//! Validation for movement config values.
//!
//! Misconfiguration is a load-time error, never a runtime fault: a negative
//! force or a zero-length probe would put the controller into degenerate
//! states the machine itself has no error path for.

use crate::movement::MovementConfig;

/// A validation error with context about which value failed.
#[derive(Debug)]
pub struct ValidationError {
    pub field: &'static str,
    pub value: f32,
    pub constraint: &'static str,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "movement config field '{}' is {} but must be {}",
            self.field, self.value, self.constraint
        )
    }
}

/// Validate a loaded movement config.
/// Returns a list of validation errors, empty if every value is acceptable.
pub fn validate_config(config: &MovementConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let mut require_non_negative = |field: &'static str, value: f32| {
        if value < 0.0 {
            errors.push(ValidationError {
                field,
                value,
                constraint: "non-negative",
            });
        }
    };

    require_non_negative("move_speed", config.move_speed);
    require_non_negative("first_jump_force", config.first_jump_force);
    require_non_negative("second_jump_force", config.second_jump_force);
    require_non_negative("wall_jump_duration", config.wall_jump_duration);
    require_non_negative("wall_jump_force.x", config.wall_jump_force.x);
    require_non_negative("wall_jump_force.y", config.wall_jump_force.y);
    require_non_negative("gravity", config.gravity);

    // Probe lengths of zero never detect anything; require strictly positive.
    let mut require_positive = |field: &'static str, value: f32| {
        if value <= 0.0 {
            errors.push(ValidationError {
                field,
                value,
                constraint: "strictly positive",
            });
        }
    };

    require_positive("ground_check_distance", config.ground_check_distance);
    require_positive("wall_check_distance", config.wall_check_distance);

    errors
}
