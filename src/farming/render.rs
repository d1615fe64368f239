use bevy::prelude::*;
use crate::shared::*;
use super::soil::SoilGrid;

/// Push tilled soil, wet overlays and plants onto the draw list.
pub fn collect_soil_sprites(grid: Res<SoilGrid>, mut draw_list: ResMut<DrawList>) {
    for (tile, variant) in grid.variants() {
        draw_list.push(DrawItem {
            pos: tile.top_left(),
            size: Vec2::splat(TILE_SIZE),
            sprite: SpriteKey::Soil(variant),
            layer: DrawLayer::Soil,
        });
    }

    for (tile, overlay) in grid.water_overlays() {
        draw_list.push(DrawItem {
            pos: tile.top_left(),
            size: Vec2::splat(TILE_SIZE),
            sprite: SpriteKey::SoilWater(overlay),
            layer: DrawLayer::SoilWater,
        });
    }

    for plant in grid.plants() {
        let rect = plant.rect();
        draw_list.push(DrawItem {
            pos: rect.min,
            size: rect.size(),
            sprite: SpriteKey::Plant {
                crop: plant.kind,
                frame: plant.frame(),
            },
            layer: plant.layer(),
        });
    }
}
