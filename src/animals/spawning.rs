use bevy::prelude::*;
use crate::shared::*;
use crate::world::map::MapData;
use super::Cow;

/// One cow per map spawn point, starting idle with its first roll due now.
pub fn spawn_cows(mut commands: Commands, map: Res<MapData>, existing: Query<(), With<Cow>>) {
    if !existing.is_empty() {
        return;
    }
    for &pos in &map.cows {
        let pos = Vec2::from(pos);
        commands.spawn((
            Cow::default(),
            Actor::new(pos, COW_SIZE, COW_SPEED),
            Hitbox::new(pos, COW_SIZE + COW_HITBOX_INFLATE, Vec2::new(0.0, COW_Y_OFFSET)),
            Solid,
        ));
    }
    info!("[Animals] Spawned {} cows", map.cows.len());
}
