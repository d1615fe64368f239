use bevy::prelude::*;
use crate::shared::*;
use super::soil::SoilGrid;

/// Walking into a ripe plant picks it: the crop goes to the inventory and a
/// short flash marks where it stood.
pub fn harvest_on_touch(
    mut commands: Commands,
    mut grid: ResMut<SoilGrid>,
    player: Query<&Hitbox, With<Player>>,
    mut harvested: EventWriter<CropHarvestedEvent>,
    mut pickups: EventWriter<ItemPickupEvent>,
) {
    let Ok(hitbox) = player.get_single() else {
        return;
    };

    for tile in grid.ripe_plants_touching(hitbox.rect) {
        let Some(rect) = grid.plant_at(tile).map(|p| p.rect()) else {
            continue;
        };
        let Some(crop) = grid.harvest(tile) else {
            continue;
        };
        harvested.send(CropHarvestedEvent { crop, tile });
        pickups.send(ItemPickupEvent {
            item: crop.into(),
            quantity: 1,
        });
        commands.spawn(FlashEffect::new(rect, DrawLayer::Main));
        info!("[Farming] Harvested {:?} at ({}, {})", crop, tile.row, tile.col);
    }
}
