use std::path::Path;

use bevy::prelude::*;
use bevy::window::{PresentMode, WindowResolution};

use cozy_acres::config::{GameConfig, CONFIG_FILE};
use cozy_acres::shared::*;
use cozy_acres::{animals, audio, calendar, data, economy, farming, input, player, save, world};

fn main() {
    let mut app = App::new();
    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Cozy Acres".into(),
                    resolution: WindowResolution::new(SCREEN_WIDTH, SCREEN_HEIGHT),
                    present_mode: PresentMode::AutoVsync,
                    resizable: true,
                    ..default()
                }),
                ..default()
            })
            .set(ImagePlugin::default_nearest()),
    );

    // after DefaultPlugins so config problems reach the log
    let config = GameConfig::load_or_default(Path::new(CONFIG_FILE));

    app.insert_resource(ClearColor(Color::BLACK))
        // Game state
        .init_state::<GameState>()
        // Shared resources
        .insert_resource(config)
        .init_resource::<CropRegistry>()
        .init_resource::<PriceList>()
        // Events
        .add_event::<ToolUseEvent>()
        .add_event::<PlantSeedEvent>()
        .add_event::<SeedPlantedEvent>()
        .add_event::<CropHarvestedEvent>()
        .add_event::<ItemPickupEvent>()
        .add_event::<PlaySfxEvent>()
        .add_event::<SleepStartEvent>()
        .add_event::<WakeUpEvent>()
        .add_event::<DayEndEvent>()
        // Domain plugins
        .add_plugins(input::InputPlugin)
        .add_plugins(data::DataPlugin)
        .add_plugins(world::WorldPlugin)
        .add_plugins(calendar::CalendarPlugin)
        .add_plugins(player::PlayerPlugin)
        .add_plugins(farming::FarmingPlugin)
        .add_plugins(animals::AnimalPlugin)
        .add_plugins(economy::EconomyPlugin)
        .add_plugins(save::SavePlugin)
        .add_plugins(audio::SfxPlugin)
        // Camera
        .add_systems(Startup, setup_camera)
        .run();
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
