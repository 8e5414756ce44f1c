//! Pop sound playback.
//!
//! The sound loads once at startup; a missing or undecodable file just means
//! the game runs silently (the asset server logs the failure and the handle
//! never resolves). Playback is fire-and-forget with at most one instance at
//! a time: a pop that lands while a previous pop sound is still alive is
//! skipped rather than mixed.

use crate::config::GameConfig;
use crate::constants::POP_SOUND_PATH;
use crate::simulation::BubblePopped;
use bevy::audio::{PlaybackMode, Volume};
use bevy::prelude::*;

pub struct PopAudioPlugin;

impl Plugin for PopAudioPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_sound_assets).add_systems(
            Update,
            pop_sound_system.after(crate::input::pointer_press_system),
        );
    }
}

#[derive(Resource)]
pub struct SoundAssets {
    pub pop: Handle<AudioSource>,
}

/// Tags the currently playing pop sound entity. `PlaybackMode::Despawn`
/// removes the entity when playback completes, so "a tagged entity exists"
/// doubles as the is-playing query.
#[derive(Component)]
pub struct PopSoundInstance;

fn load_sound_assets(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.insert_resource(SoundAssets {
        pop: asset_server.load(POP_SOUND_PATH),
    });
}

/// Play the pop sound for this frame's pops, unless one is already in flight.
fn pop_sound_system(
    mut commands: Commands,
    mut events: MessageReader<BubblePopped>,
    sounds: Option<Res<SoundAssets>>,
    playing: Query<(), With<PopSoundInstance>>,
    config: Res<GameConfig>,
) {
    if events.is_empty() {
        return;
    }
    events.clear();

    let Some(sounds) = sounds else {
        return;
    };
    if !playing.is_empty() {
        return;
    }
    commands.spawn((
        AudioPlayer::new(sounds.pop.clone()),
        PlaybackSettings {
            mode: PlaybackMode::Despawn,
            volume: Volume::Linear(config.pop_volume),
            ..Default::default()
        },
        PopSoundInstance,
    ));
}
