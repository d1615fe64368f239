//! World domain plugin.
//!
//! Responsible for:
//! - Loading the map layout (built-in or RON)
//! - Spawning static obstacles, trees and interaction zones
//! - Axe interactions and overnight apple regrowth
//! - The draw list lifecycle and placeholder rendering

use bevy::prelude::*;

use crate::config::GameConfig;
use crate::shared::*;

pub mod collision;
pub mod draw;
pub mod map;
pub mod trees;

use map::MapData;
use trees::Tree;

// ═══════════════════════════════════════════════════════════════════════
// PLUGIN
// ═══════════════════════════════════════════════════════════════════════

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DrawList>()
            .init_resource::<draw::DrawPool>()
            .configure_sets(
                PostUpdate,
                (DrawSet::Clear, DrawSet::Collect, DrawSet::Present).chain(),
            )
            .add_systems(OnEnter(GameState::Loading), load_map)
            .add_systems(OnExit(GameState::Loading), spawn_world)
            .add_systems(
                Update,
                (
                    trees::grow_initial_apples,
                    trees::handle_axe_use,
                    draw::tick_flashes,
                )
                    .run_if(in_state(GameState::Playing)),
            )
            // day end can arrive while a menu is open
            .add_systems(Update, trees::regrow_apples_on_day_end)
            .add_systems(PostUpdate, draw::clear_draw_list.in_set(DrawSet::Clear))
            .add_systems(
                PostUpdate,
                (
                    draw::collect_static_sprites,
                    draw::collect_trees,
                    draw::collect_flashes,
                )
                    .in_set(DrawSet::Collect),
            )
            .add_systems(
                PostUpdate,
                (draw::sort_draw_list, draw::sync_draw_sprites)
                    .chain()
                    .in_set(DrawSet::Present),
            );
    }
}

// ═══════════════════════════════════════════════════════════════════════
// COMPONENTS
// ═══════════════════════════════════════════════════════════════════════

/// Scenery that never changes: ground, water, floors, fences, flowers.
#[derive(Component, Debug, Clone, Copy)]
pub struct StaticSprite {
    pub rect: Rect,
    pub key: SpriteKey,
    pub layer: DrawLayer,
}

/// Generic scenery collides only with its lower, inner part.
pub fn scenery_hitbox(rect: Rect) -> Hitbox {
    let size = rect.size();
    Hitbox::inflated(rect, Vec2::new(-size.x * 0.2, -size.y * 0.75))
}

// ═══════════════════════════════════════════════════════════════════════
// SYSTEMS
// ═══════════════════════════════════════════════════════════════════════

/// Read the map named in the config, falling back to the built-in farm.
fn load_map(mut commands: Commands, config: Res<GameConfig>) {
    let map = match &config.map_path {
        Some(path) => match MapData::from_file(path) {
            Ok(map) => {
                info!("[World] Loaded map {} ({}x{})", path.display(), map.rows, map.cols);
                map
            }
            Err(e) => {
                warn!("[World] {}; using the built-in farm", e);
                MapData::default_farm()
            }
        },
        None => MapData::default_farm(),
    };
    commands.insert_resource(map);
}

/// Spawn every static entity described by the map.
fn spawn_world(mut commands: Commands, map: Res<MapData>) {
    let ground = Rect::from_corners(Vec2::ZERO, map.size_px());
    commands.spawn(StaticSprite {
        rect: ground,
        key: SpriteKey::Ground,
        layer: DrawLayer::Ground,
    });

    for &tile in &map.water {
        commands.spawn((
            StaticSprite {
                rect: tile.rect(),
                key: SpriteKey::Water,
                layer: DrawLayer::Water,
            },
            Hitbox::inflated(tile.rect(), Vec2::ZERO),
            Solid,
        ));
    }

    for &tile in &map.house_floor {
        commands.spawn(StaticSprite {
            rect: tile.rect(),
            key: SpriteKey::HouseFloor,
            layer: DrawLayer::HouseBottom,
        });
    }

    for &tile in &map.collision {
        commands.spawn((Hitbox::inflated(tile.rect(), Vec2::ZERO), Solid));
    }

    for &tile in &map.fences {
        commands.spawn((
            StaticSprite {
                rect: tile.rect(),
                key: SpriteKey::Fence,
                layer: DrawLayer::Main,
            },
            scenery_hitbox(tile.rect()),
            Solid,
        ));
    }

    for &pos in &map.decorations {
        let min = Vec2::from(pos);
        let rect = Rect::from_corners(min, min + Vec2::splat(TILE_SIZE));
        commands.spawn((
            StaticSprite {
                rect,
                key: SpriteKey::Flower,
                layer: DrawLayer::Main,
            },
            scenery_hitbox(rect),
            Solid,
        ));
    }

    for spawn in &map.trees {
        let tree = Tree::new(Vec2::from(spawn.pos), spawn.size);
        let hitbox = tree.hitbox();
        commands.spawn((tree, hitbox, Solid));
    }

    for zone in &map.zones {
        commands.spawn(InteractionZone {
            kind: zone.kind,
            rect: zone.rect(),
        });
    }

    info!(
        "[World] Spawned {} trees, {} zones, {} obstacles",
        map.trees.len(),
        map.zones.len(),
        map.collision.len() + map.fences.len() + map.decorations.len() + map.water.len()
    );
}
