//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// The state machine's internal state. Written only by the controller driver;
/// everything else reads it as a per-tick snapshot.
#[derive(Component, Debug, Clone)]
pub struct MovementState {
    /// The commanded velocity, doubling as read-back of the last integrated one.
    pub velocity: Vec2,
    /// True from leaving the ground until the next landing.
    pub is_airborne: bool,
    /// Refreshed on landing and by wall jumps, consumed by the air jump.
    pub can_double_jump: bool,
    /// Horizontal input lockout after a wall jump.
    pub is_wall_jumping: bool,
    /// Remaining lockout time; meaningful only while `is_wall_jumping`.
    pub wall_jump_timer: f32,
    pub facing: Facing,
}

impl Default for MovementState {
    fn default() -> Self {
        Self {
            velocity: Vec2::ZERO,
            is_airborne: false,
            can_double_jump: true,
            is_wall_jumping: false,
            wall_jump_timer: 0.0,
            facing: Facing::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    /// +1.0 facing right, -1.0 facing left; governs the wall probe direction.
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }

    pub fn flipped(self) -> Facing {
        match self {
            Facing::Right => Facing::Left,
            Facing::Left => Facing::Right,
        }
    }
}

/// Latest probe results, rewritten every tick after movement has run.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct ContactState {
    pub is_grounded: bool,
    pub is_wall_detected: bool,
}

impl ContactState {
    pub fn sample(&self) -> super::controller::ContactSample {
        super::controller::ContactSample {
            is_grounded: self.is_grounded,
            is_wall_detected: self.is_wall_detected,
        }
    }
}

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;
