//! Sound effects. Other domains only send `PlaySfxEvent`; this plugin turns
//! them into one-shot audio players when the sound files are on disk.

use bevy::prelude::*;
use std::collections::HashMap;
use std::path::Path;

use crate::config::GameConfig;
use crate::shared::*;

const ASSET_ROOT: &str = "assets";

pub struct SfxPlugin;

impl Plugin for SfxPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SfxLibrary>()
            .add_systems(Startup, load_sfx)
            .add_systems(Update, handle_play_sfx);
    }
}

/// Asset path of each effect and its volume relative to the master volume.
pub fn sfx_source(sfx: Sfx) -> (&'static str, f32) {
    match sfx {
        Sfx::Hoe => ("audio/hoe.wav", 0.1),
        Sfx::Water => ("audio/water.mp3", 0.2),
        Sfx::Plant => ("audio/plant.wav", 0.2),
        Sfx::Axe => ("audio/axe.mp3", 0.3),
        Sfx::Success => ("audio/success.wav", 0.3),
    }
}

/// Handles for the effects whose files exist.
#[derive(Resource, Debug, Default)]
pub struct SfxLibrary {
    pub handles: HashMap<Sfx, Handle<AudioSource>>,
}

fn load_sfx(asset_server: Option<Res<AssetServer>>, mut library: ResMut<SfxLibrary>) {
    let Some(asset_server) = asset_server else {
        return;
    };
    for sfx in [Sfx::Hoe, Sfx::Water, Sfx::Plant, Sfx::Axe, Sfx::Success] {
        let (path, _) = sfx_source(sfx);
        if Path::new(ASSET_ROOT).join(path).exists() {
            library.handles.insert(sfx, asset_server.load(path));
        }
    }
    if library.handles.is_empty() {
        info!("[Audio] No sound files under {}/audio; effects are logged only", ASSET_ROOT);
    }
}

/// Listen for PlaySfxEvent and spawn one-shot audio sources that auto-despawn.
fn handle_play_sfx(
    mut events: EventReader<PlaySfxEvent>,
    mut commands: Commands,
    library: Res<SfxLibrary>,
    config: Res<GameConfig>,
) {
    for event in events.read() {
        match library.handles.get(&event.sfx) {
            Some(handle) => {
                let (_, volume) = sfx_source(event.sfx);
                commands.spawn((
                    AudioPlayer::new(handle.clone()),
                    PlaybackSettings::DESPAWN
                        .with_volume(bevy::audio::Volume::new(volume * config.master_volume)),
                ));
            }
            None => debug!("[Audio] {:?}", event.sfx),
        }
    }
}
