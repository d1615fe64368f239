use bevy::prelude::*;
use crate::config::GameConfig;
use crate::shared::*;
use crate::world::map::MapData;
use super::PlayerController;

/// Spawn the player at the map's start point. Runs once when loading ends.
pub fn spawn_player(
    mut commands: Commands,
    map: Res<MapData>,
    config: Res<GameConfig>,
    existing: Query<Entity, With<Player>>,
) {
    // Guard: don't double-spawn.
    if !existing.is_empty() {
        return;
    }

    let pos = Vec2::from(map.player_start);
    let hitbox = Hitbox::new(pos, PLAYER_SIZE + PLAYER_HITBOX_INFLATE, Vec2::ZERO);

    commands.spawn((
        Player,
        Actor::new(pos, PLAYER_SIZE, config.player_speed()),
        hitbox,
        PlayerController::default(),
    ));

    info!("[Player] Spawned at ({:.0}, {:.0})", pos.x, pos.y);
}
