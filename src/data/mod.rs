//! Data layer: populates the static registries at startup.
//!
//! Runs in OnEnter(GameState::Loading), fills CropRegistry and PriceList
//! from the hard-coded design tables in the submodules, then moves the game
//! into GameState::Playing. Everything that needs the world built runs in
//! OnExit(GameState::Loading), after these registries are ready.

pub mod crops;
pub mod shops;

use bevy::prelude::*;
use crate::shared::*;

pub struct DataPlugin;

impl Plugin for DataPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Loading), load_all_data);
    }
}

fn load_all_data(
    mut crop_registry: ResMut<CropRegistry>,
    mut prices: ResMut<PriceList>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    info!("[Data] Populating registries…");

    crops::populate_crops(&mut crop_registry);
    info!("  Crops loaded: {}", crop_registry.crops.len());

    shops::populate_prices(&mut prices);
    info!(
        "  Prices loaded: {} sale, {} purchase",
        prices.sale.len(),
        prices.purchase.len()
    );

    next_state.set(GameState::Playing);
}
