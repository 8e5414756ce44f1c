use bevy::prelude::*;
use bevy::window::WindowResolution;

use bubblepop::audio::PopAudioPlugin;
use bubblepop::bubble;
use bubblepop::config::{self, GameConfig};
use bubblepop::constants;
use bubblepop::graphics;
use bubblepop::hud;
use bubblepop::particle::ParticlesPlugin;
use bubblepop::simulation::SimulationPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Bubble Pop".into(),
                resolution: WindowResolution::new(1280, 720),
                ..Default::default()
            }),
            ..Default::default()
        }))
        .insert_resource(ClearColor(constants::background_color()))
        // Insert GameConfig with compiled defaults; load_game_config will
        // overwrite it from assets/bubbles.toml (if present) in the Startup
        // schedule.
        .insert_resource(GameConfig::default())
        .add_plugins((SimulationPlugin, ParticlesPlugin, PopAudioPlugin))
        .add_systems(
            Startup,
            (
                // Load config first so every other startup system sees the
                // final values.
                config::load_game_config,
                graphics::setup_camera.after(config::load_game_config),
                graphics::setup_shape_assets.after(config::load_game_config),
                bubble::spawn_bubble_field
                    .after(config::load_game_config)
                    .after(graphics::setup_shape_assets),
                hud::setup_hud_overlay.after(config::load_game_config),
            ),
        )
        .run();
}
