//! Movement domain: plugin wiring and public exports.

mod components;
mod controller;
mod resources;
mod spawn;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{ContactState, Facing, GameLayer, Ground, MovementState, Player, Wall};
pub use controller::{ContactSample, InputSample, tick};
pub use resources::{MovementConfig, MovementInput, WallJumpForce};

use bevy::prelude::*;

use crate::movement::spawn::{respawn_fallen, spawn_player, spawn_test_room};
use crate::movement::systems::{detect_ground, detect_walls, drive_controller, read_input};

/// The per-frame movement chain; render-side consumers order after this.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MovementSet;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementInput>()
            .add_systems(Startup, (spawn_player, spawn_test_room))
            .add_systems(
                Update,
                (
                    read_input,
                    drive_controller,
                    detect_ground,
                    detect_walls,
                    respawn_fallen,
                )
                    .chain()
                    .in_set(MovementSet),
            );
    }
}
