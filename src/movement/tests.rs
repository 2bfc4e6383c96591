//! Movement domain: unit tests for the controller state machine.

use bevy::math::Vec2;

use super::components::{Facing, MovementState};
use super::controller::{ContactSample, InputSample, tick};
use super::resources::{MovementConfig, WallJumpForce};

fn test_config() -> MovementConfig {
    MovementConfig {
        move_speed: 10.0,
        first_jump_force: 5.0,
        second_jump_force: 3.0,
        double_jump: true,
        wall_mechanics: true,
        wall_jump_duration: 0.6,
        wall_jump_force: WallJumpForce { x: 4.0, y: 6.0 },
        ground_check_distance: 0.5,
        wall_check_distance: 0.05,
        gravity: 9.81,
    }
}

fn grounded() -> ContactSample {
    ContactSample {
        is_grounded: true,
        is_wall_detected: false,
    }
}

fn airborne() -> ContactSample {
    ContactSample::default()
}

fn on_wall() -> ContactSample {
    ContactSample {
        is_grounded: false,
        is_wall_detected: true,
    }
}

fn jump() -> InputSample {
    InputSample {
        jump_pressed: true,
        ..InputSample::default()
    }
}

fn no_input() -> InputSample {
    InputSample::default()
}

const DT: f32 = 0.1;

#[test]
fn test_ground_jump_sets_exact_first_jump_force() {
    let config = test_config();
    let mut state = MovementState {
        velocity: Vec2::new(0.0, -7.3),
        ..MovementState::default()
    };

    tick(&mut state, &config, grounded(), jump(), DT);

    assert_eq!(state.velocity.y, 5.0);
    assert_eq!(state.velocity.x, 0.0);
    // Airborne only flips once contact re-sensing reports the takeoff.
    assert!(!state.is_airborne);
}

#[test]
fn test_landing_refreshes_double_jump_before_dispatch() {
    let config = test_config();
    let mut state = MovementState {
        is_airborne: true,
        can_double_jump: false,
        ..MovementState::default()
    };

    // Jump pressed on the exact landing tick: the ground jump wins and the
    // refreshed double jump survives for the new airborne period.
    tick(&mut state, &config, grounded(), jump(), DT);

    assert!(!state.is_airborne);
    assert!(state.can_double_jump);
    assert_eq!(state.velocity.y, 5.0);
}

#[test]
fn test_walking_off_a_ledge_sets_airborne() {
    let config = test_config();
    let mut state = MovementState::default();

    tick(&mut state, &config, airborne(), no_input(), DT);

    assert!(state.is_airborne);
    assert!(state.can_double_jump);
}

#[test]
fn test_double_jump_fires_once_per_airborne_period() {
    let config = test_config();
    let mut state = MovementState {
        is_airborne: true,
        ..MovementState::default()
    };

    tick(&mut state, &config, airborne(), jump(), DT);
    assert_eq!(state.velocity.y, 3.0);
    assert!(!state.can_double_jump);

    // Second press while still airborne does nothing.
    state.velocity.y = -1.0;
    tick(&mut state, &config, airborne(), jump(), DT);
    assert_eq!(state.velocity.y, -1.0);
    assert!(!state.can_double_jump);
}

#[test]
fn test_landing_restores_the_double_jump() {
    let config = test_config();
    let mut state = MovementState {
        is_airborne: true,
        can_double_jump: false,
        ..MovementState::default()
    };

    tick(&mut state, &config, grounded(), no_input(), DT);

    assert!(!state.is_airborne);
    assert!(state.can_double_jump);
}

#[test]
fn test_wall_jump_scenario_full_trace() {
    let config = test_config();
    let mut state = MovementState {
        is_airborne: true,
        facing: Facing::Right,
        ..MovementState::default()
    };

    // dt of 0.3 keeps the 0.6s countdown exact in f32.
    tick(&mut state, &config, on_wall(), jump(), 0.3);

    assert_eq!(state.velocity, Vec2::new(-4.0, 6.0));
    assert_eq!(state.facing, Facing::Left);
    assert!(state.is_wall_jumping);

    // Second tick reaches 0.6s of simulated time and the lockout auto-clears
    // with no other state change.
    tick(&mut state, &config, airborne(), no_input(), 0.3);

    assert!(!state.is_wall_jumping);
    assert_eq!(state.wall_jump_timer, 0.0);
    assert!(state.can_double_jump);
    assert_eq!(state.facing, Facing::Left);
}

#[test]
fn test_wall_jump_restores_consumed_double_jump() {
    let config = test_config();
    let mut state = MovementState {
        is_airborne: true,
        can_double_jump: false,
        ..MovementState::default()
    };

    tick(&mut state, &config, on_wall(), jump(), DT);

    assert!(state.can_double_jump);
    assert!(state.is_wall_jumping);
}

#[test]
fn test_lockout_ignores_horizontal_input_until_expiry() {
    let mut config = test_config();
    config.wall_jump_duration = 0.5;
    let dt = 0.125;

    let mut state = MovementState {
        is_airborne: true,
        facing: Facing::Right,
        ..MovementState::default()
    };
    tick(&mut state, &config, on_wall(), jump(), dt);
    assert_eq!(state.velocity.x, -4.0);

    let push_right = InputSample {
        x_axis: 1.0,
        ..InputSample::default()
    };

    // Two more ticks inside the window: the impulse carries unmodified.
    tick(&mut state, &config, airborne(), push_right, dt);
    tick(&mut state, &config, airborne(), push_right, dt);
    assert!(state.is_wall_jumping);
    assert_eq!(state.velocity.x, -4.0);

    // Fourth tick reaches 0.5s exactly: lockout clears, input takes over.
    tick(&mut state, &config, airborne(), push_right, dt);
    assert!(!state.is_wall_jumping);
    assert_eq!(state.velocity.x, 10.0);
}

#[test]
fn test_second_wall_jump_restarts_the_lockout() {
    let mut config = test_config();
    config.wall_jump_duration = 0.5;
    let dt = 0.125;

    let mut state = MovementState {
        is_airborne: true,
        facing: Facing::Right,
        ..MovementState::default()
    };
    tick(&mut state, &config, on_wall(), jump(), dt);
    tick(&mut state, &config, airborne(), no_input(), dt);
    assert_eq!(state.wall_jump_timer, 0.25);

    // Re-entry before expiry: the window restarts, it never stacks.
    tick(&mut state, &config, on_wall(), jump(), dt);
    assert_eq!(state.wall_jump_timer, 0.375);
    assert_eq!(state.velocity.x, 4.0);
    assert_eq!(state.facing, Facing::Right);

    tick(&mut state, &config, airborne(), no_input(), dt);
    tick(&mut state, &config, airborne(), no_input(), dt);
    assert!(state.is_wall_jumping);

    tick(&mut state, &config, airborne(), no_input(), dt);
    assert!(!state.is_wall_jumping);
}

#[test]
fn test_double_jump_cancels_active_lockout() {
    let config = test_config();
    let mut state = MovementState {
        is_airborne: true,
        ..MovementState::default()
    };
    tick(&mut state, &config, on_wall(), jump(), DT);
    assert!(state.is_wall_jumping);
    assert!(state.can_double_jump);

    tick(&mut state, &config, airborne(), jump(), DT);

    assert!(!state.is_wall_jumping);
    assert_eq!(state.wall_jump_timer, 0.0);
    assert_eq!(state.velocity.y, 3.0);
    assert!(!state.can_double_jump);
}

#[test]
fn test_wall_slide_halves_fall_speed() {
    let config = test_config();
    let mut state = MovementState {
        is_airborne: true,
        velocity: Vec2::new(0.0, -4.0),
        ..MovementState::default()
    };

    tick(&mut state, &config, on_wall(), no_input(), DT);

    assert_eq!(state.velocity.y, -2.0);
}

#[test]
fn test_holding_down_drops_off_the_wall_at_full_speed() {
    let config = test_config();
    let mut state = MovementState {
        is_airborne: true,
        velocity: Vec2::new(0.0, -4.0),
        ..MovementState::default()
    };
    let hold_down = InputSample {
        y_axis: -1.0,
        ..InputSample::default()
    };

    tick(&mut state, &config, on_wall(), hold_down, DT);

    assert_eq!(state.velocity.y, -4.0);
}

#[test]
fn test_no_wall_slide_while_rising() {
    let config = test_config();
    let mut state = MovementState {
        is_airborne: true,
        velocity: Vec2::new(0.0, 2.0),
        ..MovementState::default()
    };

    tick(&mut state, &config, on_wall(), no_input(), DT);

    assert_eq!(state.velocity.y, 2.0);
}

#[test]
fn test_horizontal_command_follows_input() {
    let config = test_config();
    let mut state = MovementState::default();
    let input = InputSample {
        x_axis: 0.5,
        ..InputSample::default()
    };

    tick(&mut state, &config, grounded(), input, DT);

    assert_eq!(state.velocity.x, 5.0);
}

#[test]
fn test_wall_contact_suppresses_horizontal_input() {
    let config = test_config();
    let mut state = MovementState {
        is_airborne: true,
        ..MovementState::default()
    };
    let push_right = InputSample {
        x_axis: 1.0,
        ..InputSample::default()
    };

    tick(&mut state, &config, on_wall(), push_right, DT);

    assert_eq!(state.velocity.x, 0.0);
}

#[test]
fn test_facing_flips_on_input_sign_and_never_on_zero() {
    let config = test_config();
    let mut state = MovementState::default();
    assert_eq!(state.facing, Facing::Right);

    let push_left = InputSample {
        x_axis: -1.0,
        ..InputSample::default()
    };
    tick(&mut state, &config, grounded(), push_left, DT);
    assert_eq!(state.facing, Facing::Left);

    tick(&mut state, &config, grounded(), no_input(), DT);
    assert_eq!(state.facing, Facing::Left);

    let push_right = InputSample {
        x_axis: 1.0,
        ..InputSample::default()
    };
    tick(&mut state, &config, grounded(), push_right, DT);
    assert_eq!(state.facing, Facing::Right);
}

#[test]
fn test_reduced_config_flips_on_velocity_sign() {
    let mut config = test_config();
    config.wall_mechanics = false;

    let mut state = MovementState {
        velocity: Vec2::new(-3.0, 0.0),
        ..MovementState::default()
    };

    // Velocity from the previous tick governs; zero input does not reset
    // facing before the flip check runs.
    tick(&mut state, &config, grounded(), no_input(), DT);
    assert_eq!(state.facing, Facing::Left);

    // Zero velocity never flips back.
    tick(&mut state, &config, grounded(), no_input(), DT);
    assert_eq!(state.facing, Facing::Left);
}

#[test]
fn test_reduced_config_without_double_jump() {
    let mut config = test_config();
    config.double_jump = false;
    config.wall_mechanics = false;

    let mut state = MovementState {
        is_airborne: true,
        velocity: Vec2::new(0.0, -1.5),
        ..MovementState::default()
    };

    tick(&mut state, &config, airborne(), jump(), DT);

    assert_eq!(state.velocity.y, -1.5);
}

#[test]
fn test_reduced_config_ignores_wall_contact() {
    let mut config = test_config();
    config.wall_mechanics = false;

    let mut state = MovementState {
        is_airborne: true,
        velocity: Vec2::new(0.0, -4.0),
        ..MovementState::default()
    };
    let push_right = InputSample {
        x_axis: 1.0,
        ..InputSample::default()
    };

    // Even with a (spurious) wall sample, neither slide nor suppression runs.
    tick(&mut state, &config, on_wall(), push_right, DT);

    assert_eq!(state.velocity.y, -4.0);
    assert_eq!(state.velocity.x, 10.0);
}
