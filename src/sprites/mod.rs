//! Sprites module: facing sync and the animator-facing snapshot.

pub mod animation;

pub use animation::{AnimationController, AnimationParams, AnimationState};

use bevy::prelude::*;

use crate::movement::MovementSet;
use crate::sprites::animation::{sync_animation_params, sync_facing, update_animation_state};

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (sync_animation_params, update_animation_state, sync_facing)
                .chain()
                .after(MovementSet),
        );
    }
}
