//! Movement domain: player spawn, test room layout, and respawn.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{ContactState, GameLayer, Ground, MovementState, Player, Wall};
use crate::sprites::{AnimationController, AnimationParams};

const SPAWN_POINT: Vec3 = Vec3::new(0.0, 100.0, 0.0);
const PLAYER_SIZE: Vec2 = Vec2::new(24.0, 48.0);
/// Falling past this resets the character to the spawn point.
const KILL_PLANE_Y: f32 = -600.0;

pub(crate) fn spawn_player(mut commands: Commands) {
    commands.spawn((
        (Player, MovementState::default(), ContactState::default()),
        (AnimationParams::default(), AnimationController::default()),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_translation(SPAWN_POINT),
        // Physics: gravity comes from the integrator, the controller only
        // writes velocity
        (
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Wall]),
        ),
    ));
}

fn spawn_ground(commands: &mut Commands, size: Vec2, position: Vec2, color: Color) {
    commands.spawn((
        Ground,
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(position.extend(0.0)),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]),
    ));
}

fn spawn_wall(commands: &mut Commands, size: Vec2, position: Vec2, color: Color) {
    commands.spawn((
        Wall,
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(position.extend(0.0)),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]),
    ));
}

pub(crate) fn spawn_test_room(mut commands: Commands) {
    let ground_color = Color::srgb(0.36, 0.47, 0.36);
    let platform_color = Color::srgb(0.5, 0.42, 0.3);
    let wall_color = Color::srgb(0.32, 0.32, 0.42);

    // Floor
    spawn_ground(
        &mut commands,
        Vec2::new(900.0, 40.0),
        Vec2::new(0.0, -220.0),
        ground_color,
    );

    // Bounding walls
    spawn_wall(
        &mut commands,
        Vec2::new(40.0, 560.0),
        Vec2::new(-470.0, 40.0),
        wall_color,
    );
    spawn_wall(
        &mut commands,
        Vec2::new(40.0, 560.0),
        Vec2::new(470.0, 40.0),
        wall_color,
    );

    // Stepping platforms
    spawn_ground(
        &mut commands,
        Vec2::new(160.0, 20.0),
        Vec2::new(-260.0, -60.0),
        platform_color,
    );
    spawn_ground(
        &mut commands,
        Vec2::new(160.0, 20.0),
        Vec2::new(260.0, 40.0),
        platform_color,
    );
    spawn_ground(
        &mut commands,
        Vec2::new(120.0, 20.0),
        Vec2::new(0.0, 140.0),
        platform_color,
    );

    // Free-standing pillar for wall jump practice
    spawn_wall(
        &mut commands,
        Vec2::new(30.0, 220.0),
        Vec2::new(-110.0, -90.0),
        wall_color,
    );
}

/// Out-of-bounds recovery: back to the spawn point with fresh movement state.
pub(crate) fn respawn_fallen(
    mut query: Query<
        (
            &mut Transform,
            &mut MovementState,
            &mut ContactState,
            &mut LinearVelocity,
        ),
        With<Player>,
    >,
) {
    for (mut transform, mut state, mut contact, mut velocity) in &mut query {
        if transform.translation.y > KILL_PLANE_Y {
            continue;
        }

        info!("player fell out of bounds, respawning");
        transform.translation = SPAWN_POINT;
        *state = MovementState::default();
        *contact = ContactState::default();
        velocity.0 = Vec2::ZERO;
    }
}
