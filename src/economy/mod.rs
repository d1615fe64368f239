//! Economy domain: the inventory ledger, the trader's shop and the
//! inventory screen.
//!
//! All cross-domain communication goes through `crate::shared::*` events and resources.

use bevy::prelude::*;
use crate::shared::*;

pub mod inventory;
pub mod shop;

use shop::ShopMenu;

pub struct EconomyPlugin;

impl Plugin for EconomyPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Inventory>()
            .init_resource::<ShopMenu>()
            // Ledger updates run in every state so no pickup is lost.
            .add_systems(
                Update,
                (inventory::apply_pickups, inventory::consume_planted_seeds),
            )
            .add_systems(
                Update,
                inventory::open_inventory_menu.run_if(in_state(GameState::Playing)),
            )
            .add_systems(
                Update,
                inventory::inventory_menu_input.run_if(in_state(GameState::Inventory)),
            )
            .add_systems(OnEnter(GameState::Shop), shop::open_shop)
            .add_systems(Update, shop::shop_input.run_if(in_state(GameState::Shop)));
    }
}
