//! Movement domain: ground and wall probe systems.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{ContactState, Facing, GameLayer, MovementConfig, MovementState, Player};

/// Downward probe against the ground layer. Runs after the controller so the
/// machine always consumes last tick's contact, the same way it reads back
/// last tick's velocity.
pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    config: Res<MovementConfig>,
    mut query: Query<(&Transform, &mut ContactState), With<Player>>,
) {
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (transform, mut contact) in &mut query {
        let was_grounded = contact.is_grounded;
        let origin = transform.translation.truncate();

        let hit = spatial_query.cast_ray(
            origin,
            Dir2::NEG_Y,
            config.ground_check_distance,
            true,
            &ground_filter,
        );

        contact.is_grounded = hit.is_some();
        if contact.is_grounded != was_grounded {
            debug!("ground contact: {}", contact.is_grounded);
        }
    }
}

/// Facing-direction probe against the wall layer. Walls live on their own
/// layer, so a floor edge never reads as a wall.
pub(crate) fn detect_walls(
    spatial_query: SpatialQuery,
    config: Res<MovementConfig>,
    mut query: Query<(&Transform, &MovementState, &mut ContactState), With<Player>>,
) {
    let wall_filter = SpatialQueryFilter::from_mask(GameLayer::Wall);

    for (transform, state, mut contact) in &mut query {
        if !config.wall_mechanics {
            contact.is_wall_detected = false;
            continue;
        }

        let origin = transform.translation.truncate();
        let direction = match state.facing {
            Facing::Right => Dir2::X,
            Facing::Left => Dir2::NEG_X,
        };

        let hit = spatial_query.cast_ray(
            origin,
            direction,
            config.wall_check_distance,
            true,
            &wall_filter,
        );

        contact.is_wall_detected = hit.is_some();
    }
}
