//! Farming domain: soil tilling, watering, planting, crop growth, harvest.
//!
//! The whole field lives in the `SoilGrid` resource, inserted by the save
//! domain once loading finishes. Systems here only react to shared events
//! and push draw items.

use bevy::prelude::*;
use crate::shared::*;

pub mod actions;
pub mod autotile;
pub mod events_handler;
pub mod harvest;
pub mod plant;
pub mod render;
pub mod soil;

use soil::SoilGrid;

pub struct FarmingPlugin;

impl Plugin for FarmingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                actions::handle_tool_use,
                actions::handle_plant_seed,
                harvest::harvest_on_touch,
            )
                .chain()
                .run_if(in_state(GameState::Playing))
                .run_if(resource_exists::<SoilGrid>),
        )
        // Day end can arrive on any state.
        .add_systems(
            Update,
            events_handler::on_day_end.run_if(resource_exists::<SoilGrid>),
        )
        .add_systems(
            PostUpdate,
            render::collect_soil_sprites
                .in_set(DrawSet::Collect)
                .run_if(resource_exists::<SoilGrid>),
        );
    }
}
