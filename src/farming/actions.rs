//! Tool and seed events applied to the soil grid.

use bevy::prelude::*;
use crate::shared::*;
use super::soil::SoilGrid;

/// Hoe tills, the watering can waters. Sounds play only when a tile changes.
/// The axe belongs to the world domain.
pub fn handle_tool_use(
    mut events: EventReader<ToolUseEvent>,
    mut grid: ResMut<SoilGrid>,
    mut sfx: EventWriter<PlaySfxEvent>,
) {
    for event in events.read() {
        match event.tool {
            ToolKind::Hoe => {
                if grid.till(event.target) {
                    sfx.send(PlaySfxEvent { sfx: Sfx::Hoe });
                }
            }
            ToolKind::WateringCan => {
                if grid.water(event.target) {
                    sfx.send(PlaySfxEvent { sfx: Sfx::Water });
                }
            }
            ToolKind::Axe => {}
        }
    }
}

/// Plant the requested seed and report whether one was used up.
pub fn handle_plant_seed(
    mut events: EventReader<PlantSeedEvent>,
    mut grid: ResMut<SoilGrid>,
    registry: Res<CropRegistry>,
    mut planted: EventWriter<SeedPlantedEvent>,
    mut sfx: EventWriter<PlaySfxEvent>,
) {
    for event in events.read() {
        let consumed = match registry.get(event.seed) {
            Some(def) => grid.plant(event.target, def),
            None => {
                warn!("[Farming] No crop definition for {:?}", event.seed);
                false
            }
        };
        if consumed {
            sfx.send(PlaySfxEvent { sfx: Sfx::Plant });
        }
        planted.send(SeedPlantedEvent {
            seed: event.seed,
            consumed,
        });
    }
}
