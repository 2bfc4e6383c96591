//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::Deserialize;

use crate::movement::controller::InputSample;

/// Per-character movement tuning, loaded from `assets/data/movement.ron`.
/// Immutable after load; validated by the content loader before insertion.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    pub move_speed: f32,
    /// Vertical impulse of the ground jump.
    pub first_jump_force: f32,
    /// Vertical impulse of the mid-air extra jump.
    pub second_jump_force: f32,
    /// Whether the mid-air extra jump is available at all.
    pub double_jump: bool,
    /// Whether wall sensing, wall slide and wall jump are active.
    /// With this off, facing follows velocity sign instead of input sign.
    pub wall_mechanics: bool,
    /// Horizontal input lockout window after a wall jump, in seconds.
    pub wall_jump_duration: f32,
    pub wall_jump_force: WallJumpForce,
    /// Downward probe length from the character center, must exceed the
    /// collider half height to reach past the feet.
    pub ground_check_distance: f32,
    /// Facing-direction probe length from the character center.
    pub wall_check_distance: f32,
    /// Downward acceleration handed to the physics integrator.
    pub gravity: f32,
}

/// Impulse applied by a wall jump: `x` away from the wall, `y` upward.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct WallJumpForce {
    pub x: f32,
    pub y: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            move_speed: 240.0,
            first_jump_force: 650.0,
            second_jump_force: 480.0,
            double_jump: true,
            wall_mechanics: true,
            wall_jump_duration: 0.6,
            wall_jump_force: WallJumpForce { x: 400.0, y: 600.0 },
            ground_check_distance: 28.0,
            wall_check_distance: 16.0,
            gravity: 1800.0,
        }
    }
}

#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub axis: Vec2,
    /// Edge-triggered: true only on the frame the jump key went down.
    pub jump_pressed: bool,
}

impl MovementInput {
    pub fn sample(&self) -> InputSample {
        InputSample {
            x_axis: self.axis.x,
            y_axis: self.axis.y,
            jump_pressed: self.jump_pressed,
        }
    }
}
