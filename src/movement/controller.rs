//! The movement state machine: a pure per-tick update over sampled input
//! and contact, independent of the ECS so any driver loop can run it.

use bevy::math::Vec2;

use super::components::{Facing, MovementState};
use super::resources::MovementConfig;

/// One normalized input sample, produced by the host input layer each tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSample {
    /// Horizontal axis in [-1, 1].
    pub x_axis: f32,
    /// Vertical axis in [-1, 1]; negative means holding down.
    pub y_axis: f32,
    /// True only on the tick the jump action went from released to pressed.
    pub jump_pressed: bool,
}

/// One contact sample from the physics probes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContactSample {
    pub is_grounded: bool,
    pub is_wall_detected: bool,
}

/// Fall-speed factor while sliding down a wall without holding down.
const WALL_SLIDE_DAMPING: f32 = 0.5;

/// Advances the machine by one tick. Mutates `state` in place: `velocity` is
/// the emitted command, everything else is jump-chain bookkeeping. The caller
/// owns contact re-sensing and output emission, which follow this call.
pub fn tick(
    state: &mut MovementState,
    config: &MovementConfig,
    contact: ContactSample,
    input: InputSample,
    dt: f32,
) {
    update_airborne_status(state, contact);
    apply_wall_slide(state, config, contact, input);
    if input.jump_pressed {
        dispatch_jump(state, config, contact);
    }
    tick_wall_jump_lockout(state, dt);
    update_facing(state, config, input);
    apply_horizontal_movement(state, config, contact, input);
}

/// Landing and takeoff transitions. These run before jump dispatch, so a jump
/// on the exact landing tick already sees the refreshed double jump.
fn update_airborne_status(state: &mut MovementState, contact: ContactSample) {
    if contact.is_grounded && state.is_airborne {
        state.is_airborne = false;
        state.can_double_jump = true;
    } else if !contact.is_grounded && !state.is_airborne {
        state.is_airborne = true;
    }
}

/// Dampens the fall while pressed against a wall. Holding down opts out and
/// drops off the wall at full speed. Horizontal velocity is untouched here.
fn apply_wall_slide(
    state: &mut MovementState,
    config: &MovementConfig,
    contact: ContactSample,
    input: InputSample,
) {
    if !config.wall_mechanics || !contact.is_wall_detected || state.velocity.y >= 0.0 {
        return;
    }

    if input.y_axis >= 0.0 {
        state.velocity.y *= WALL_SLIDE_DAMPING;
    }
}

/// Jump priority, first match wins: ground jump, wall jump, then the one
/// extra mid-air jump.
fn dispatch_jump(state: &mut MovementState, config: &MovementConfig, contact: ContactSample) {
    if contact.is_grounded {
        state.velocity.y = config.first_jump_force;
    } else if config.wall_mechanics && contact.is_wall_detected {
        wall_jump(state, config);
    } else if config.double_jump && state.can_double_jump {
        double_jump(state, config);
    }
}

/// Pushes away from the wall opposite current facing, flips around, and
/// starts the input lockout. Re-entry restarts the window; windows never
/// stack. A wall jump also restores the mid-air extra jump.
fn wall_jump(state: &mut MovementState, config: &MovementConfig) {
    state.can_double_jump = true;
    state.velocity = Vec2::new(
        config.wall_jump_force.x * -state.facing.sign(),
        config.wall_jump_force.y,
    );
    state.facing = state.facing.flipped();
    state.is_wall_jumping = true;
    state.wall_jump_timer = config.wall_jump_duration;
}

/// The extra mid-air jump. Always cancels an active wall-jump lockout and is
/// consumed until the next landing or wall jump.
fn double_jump(state: &mut MovementState, config: &MovementConfig) {
    state.is_wall_jumping = false;
    state.wall_jump_timer = 0.0;
    state.velocity.y = config.second_jump_force;
    state.can_double_jump = false;
}

/// Lockout countdown. Runs after jump dispatch in the same tick, so a wall
/// jump issued this tick is never expired by a stale window.
fn tick_wall_jump_lockout(state: &mut MovementState, dt: f32) {
    if !state.is_wall_jumping {
        return;
    }

    state.wall_jump_timer -= dt;
    if state.wall_jump_timer <= 0.0 {
        state.is_wall_jumping = false;
        state.wall_jump_timer = 0.0;
    }
}

/// Facing tracks the intended travel direction: input sign normally, velocity
/// sign in the reduced configuration without wall mechanics. Held still
/// during the wall-jump lockout so the jump's flip is not immediately undone.
/// Zero never flips.
fn update_facing(state: &mut MovementState, config: &MovementConfig, input: InputSample) {
    if state.is_wall_jumping {
        return;
    }

    let governing = if config.wall_mechanics {
        input.x_axis
    } else {
        state.velocity.x
    };

    if governing > 0.0 && state.facing == Facing::Left
        || governing < 0.0 && state.facing == Facing::Right
    {
        state.facing = state.facing.flipped();
    }
}

/// Horizontal command. Wall contact leaves the character at rest against the
/// wall, and the lockout lets the wall jump impulse carry unmodified.
fn apply_horizontal_movement(
    state: &mut MovementState,
    config: &MovementConfig,
    contact: ContactSample,
    input: InputSample,
) {
    if config.wall_mechanics && contact.is_wall_detected {
        return;
    }
    if state.is_wall_jumping {
        return;
    }

    state.velocity.x = input.x_axis * config.move_speed;
}
