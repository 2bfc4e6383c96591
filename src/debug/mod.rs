//! Debug tooling for movement iteration.
//!
//! Draws the ground and wall probe rays as gizmos so tuning the check
//! distances is visual, and logs the machine's state on demand.

use bevy::prelude::*;

use crate::movement::{ContactState, MovementConfig, MovementSet, MovementState, Player};

/// Resource tracking debug overlay state
#[derive(Resource, Debug)]
pub struct DebugState {
    /// Whether probe gizmos are drawn
    pub gizmos_visible: bool,
}

impl Default for DebugState {
    fn default() -> Self {
        Self {
            gizmos_visible: true,
        }
    }
}

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (handle_debug_keys, draw_probe_gizmos).chain().after(MovementSet),
        );
    }
}

/// F3 toggles the probe gizmos; F4 dumps the movement state to the log.
fn handle_debug_keys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    query: Query<(&MovementState, &ContactState), With<Player>>,
) {
    if keyboard.just_pressed(KeyCode::F3) {
        debug_state.gizmos_visible = !debug_state.gizmos_visible;
        info!("probe gizmos: {}", debug_state.gizmos_visible);
    }

    if keyboard.just_pressed(KeyCode::F4) {
        for (state, contact) in &query {
            info!("movement state: {:?}, contact: {:?}", state, contact);
        }
    }
}

fn draw_probe_gizmos(
    debug_state: Res<DebugState>,
    config: Res<MovementConfig>,
    mut gizmos: Gizmos,
    query: Query<(&Transform, &MovementState, &ContactState), With<Player>>,
) {
    if !debug_state.gizmos_visible {
        return;
    }

    let miss = Color::srgb(0.9, 0.2, 0.2);
    let hit = Color::srgb(0.2, 0.9, 0.2);

    for (transform, state, contact) in &query {
        let origin = transform.translation.truncate();

        let ground_end = origin + Vec2::NEG_Y * config.ground_check_distance;
        gizmos.line_2d(origin, ground_end, if contact.is_grounded { hit } else { miss });

        if config.wall_mechanics {
            let wall_end = origin + Vec2::X * state.facing.sign() * config.wall_check_distance;
            gizmos.line_2d(
                origin,
                wall_end,
                if contact.is_wall_detected { hit } else { miss },
            );
        }
    }
}
