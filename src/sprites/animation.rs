//! Animation snapshot and state selection.
//!
//! The controller emits a small per-tick snapshot; whatever clip playback
//! sits on top reads it from here and never feeds anything back.

use bevy::prelude::*;

use crate::movement::{ContactState, Facing, MovementState, Player};

/// Horizontal speed below which a grounded character reads as idle.
const RUN_THRESHOLD: f32 = 1.0;

/// Per-tick parameters for the external animator:
/// velocity plus the two contact flags, nothing else.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct AnimationParams {
    pub x_velocity: f32,
    pub y_velocity: f32,
    pub is_grounded: bool,
    pub is_wall_detected: bool,
}

/// Animation states derivable from the snapshot alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    Run,
    Jump,
    Fall,
    WallSlide,
}

/// Current and previous animation state, for transition detection.
#[derive(Component, Debug, Default)]
pub struct AnimationController {
    pub state: AnimationState,
    pub previous_state: AnimationState,
}

/// Copies the tick's movement outcome into the animator-facing snapshot.
pub(crate) fn sync_animation_params(
    mut query: Query<(&MovementState, &ContactState, &mut AnimationParams), With<Player>>,
) {
    for (state, contact, mut params) in &mut query {
        params.x_velocity = state.velocity.x;
        params.y_velocity = state.velocity.y;
        params.is_grounded = contact.is_grounded;
        params.is_wall_detected = contact.is_wall_detected;
    }
}

/// Selects the animation state from the snapshot.
pub(crate) fn update_animation_state(
    mut query: Query<(&AnimationParams, &mut AnimationController)>,
) {
    for (params, mut controller) in &mut query {
        let next = if params.is_wall_detected && !params.is_grounded && params.y_velocity < 0.0 {
            AnimationState::WallSlide
        } else if params.is_grounded {
            if params.x_velocity.abs() > RUN_THRESHOLD {
                AnimationState::Run
            } else {
                AnimationState::Idle
            }
        } else if params.y_velocity > 0.0 {
            AnimationState::Jump
        } else {
            AnimationState::Fall
        };

        if next != controller.state {
            controller.previous_state = controller.state;
            controller.state = next;
            debug!(
                "animation state: {:?} -> {:?}",
                controller.previous_state, controller.state
            );
        }
    }
}

/// Mirrors the sprite to the facing direction.
pub(crate) fn sync_facing(mut query: Query<(&MovementState, &mut Sprite), With<Player>>) {
    for (state, mut sprite) in &mut query {
        sprite.flip_x = state.facing == Facing::Left;
    }
}
