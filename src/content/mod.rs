//! Content domain: movement config loading and plugin wiring.

mod loader;
mod validation;


pub use loader::{ConfigLoadError, load_movement_config};
pub use validation::{ValidationError, validate_config};

use avian2d::prelude::Gravity;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use std::path::Path;

use crate::movement::MovementConfig;

const CONFIG_PATH: &str = "assets/data/movement.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, load_config);
    }
}

/// Loads and validates the movement config before anything spawns.
/// A missing file falls back to defaults; an unparseable or invalid one is a
/// configuration error and shuts the app down.
fn load_config(
    mut commands: Commands,
    mut gravity: ResMut<Gravity>,
    mut exit: MessageWriter<AppExit>,
) {
    let path = Path::new(CONFIG_PATH);

    let config = if path.exists() {
        match loader::load_movement_config(path) {
            Ok(config) => config,
            Err(err) => {
                error!("{}", err);
                exit.write(AppExit::error());
                // Leave a usable config in place for the shutdown frame.
                commands.insert_resource(MovementConfig::default());
                return;
            }
        }
    } else {
        warn!("{} not found, using default movement config", CONFIG_PATH);
        MovementConfig::default()
    };

    let errors = validation::validate_config(&config);
    if !errors.is_empty() {
        for err in &errors {
            error!("{}", err);
        }
        error!("invalid movement config, shutting down");
        exit.write(AppExit::error());
        commands.insert_resource(MovementConfig::default());
        return;
    }

    gravity.0 = Vec2::NEG_Y * config.gravity;
    info!(
        "movement config loaded: speed={}, jumps=({}, {}), wall_mechanics={}",
        config.move_speed, config.first_jump_force, config.second_jump_force, config.wall_mechanics
    );
    commands.insert_resource(config);
}
