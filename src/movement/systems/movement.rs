//! Movement domain: the controller driver bridging the machine to physics.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::controller;
use crate::movement::{ContactState, MovementConfig, MovementInput, MovementState, Player};

/// Runs the state machine once per frame. Velocity is read back from the
/// integrator first, so slide and landing decisions see what gravity and
/// collisions actually did, then the machine's command is written out again.
pub(crate) fn drive_controller(
    time: Res<Time>,
    config: Res<MovementConfig>,
    input: Res<MovementInput>,
    mut query: Query<(&mut MovementState, &ContactState, &mut LinearVelocity), With<Player>>,
) {
    let dt = time.delta_secs();

    for (mut state, contact, mut velocity) in &mut query {
        let was_airborne = state.is_airborne;
        let was_wall_jumping = state.is_wall_jumping;

        state.velocity = velocity.0;
        controller::tick(&mut state, &config, contact.sample(), input.sample(), dt);
        velocity.0 = state.velocity;

        if was_airborne && !state.is_airborne {
            debug!("landed: can_double_jump={}", state.can_double_jump);
        } else if !was_airborne && state.is_airborne {
            debug!("became airborne");
        }

        if !was_wall_jumping && state.is_wall_jumping {
            debug!(
                "wall jump: lockout {:.2}s, now facing {:?}",
                state.wall_jump_timer, state.facing
            );
        }
    }
}
