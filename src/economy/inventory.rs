use bevy::prelude::*;
use crate::shared::*;

/// Everything picked up goes straight into the inventory with a chime.
pub fn apply_pickups(
    mut pickups: EventReader<ItemPickupEvent>,
    mut inventory: ResMut<Inventory>,
    mut sfx: EventWriter<PlaySfxEvent>,
) {
    for ev in pickups.read() {
        inventory.add_item(ev.item, ev.quantity);
        sfx.send(PlaySfxEvent { sfx: Sfx::Success });
        debug!(
            "[Economy] +{} {:?} ({} held)",
            ev.quantity,
            ev.item,
            inventory.item_count(ev.item)
        );
    }
}

/// A seed leaves the inventory only when it actually went into the ground.
pub fn consume_planted_seeds(
    mut planted: EventReader<SeedPlantedEvent>,
    mut inventory: ResMut<Inventory>,
) {
    for ev in planted.read() {
        if ev.consumed && !inventory.take_seed(ev.seed) {
            warn!("[Economy] Planted {:?} without a seed in stock", ev.seed);
        }
    }
}

pub fn open_inventory_menu(input: Res<PlayerInput>, mut next_state: ResMut<NextState<GameState>>) {
    if input.toggle_inventory {
        next_state.set(GameState::Inventory);
    }
}

pub fn inventory_menu_input(
    input: Res<PlayerInput>,
    inventory: Res<Inventory>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if input.toggle_inventory || input.ui_cancel {
        next_state.set(GameState::Playing);
        debug!("[Economy] Closed inventory: {}", summary(&inventory));
    }
}

/// One-line listing of the inventory for logs.
pub fn summary(inventory: &Inventory) -> String {
    let items = ItemKind::ALL
        .iter()
        .map(|&k| format!("{:?} {}", k, inventory.item_count(k)))
        .collect::<Vec<_>>()
        .join(", ");
    let seeds = CropKind::ALL
        .iter()
        .map(|&k| format!("{:?} seed {}", k, inventory.seed_count(k)))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{items}; {seeds}; ${}", inventory.money)
}
