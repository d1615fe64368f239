use bevy::prelude::*;
use crate::shared::*;
use crate::world::map::MapData;

/// Follow the player with a lerped camera, clamped so the viewport never
/// shows past the map edge. Large jumps (spawn) snap instantly.
pub fn camera_follow_player(
    time: Res<Time>,
    map: Option<Res<MapData>>,
    player_query: Query<&Actor, (With<Player>, Without<Camera2d>)>,
    mut camera_query: Query<(&mut Transform, &OrthographicProjection), (With<Camera2d>, Without<Player>)>,
) {
    let Ok(actor) = player_query.get_single() else {
        return;
    };
    let Ok((mut cam_tf, projection)) = camera_query.get_single_mut() else {
        return;
    };

    // simulation is y-down
    let target = Vec2::new(actor.pos.x, -actor.pos.y);
    let current = cam_tf.translation.truncate();
    let far = (target - current).abs();

    let smooth = if far.x > TILE_SIZE * 4.0 || far.y > TILE_SIZE * 4.0 {
        target
    } else {
        let t = (5.0 * time.delta_secs()).min(1.0);
        current + (target - current) * t
    };

    let (x, y) = match map {
        Some(map) => {
            let size = map.size_px();
            let half_vw = projection.area.width() / 2.0 * cam_tf.scale.x;
            let half_vh = projection.area.height() / 2.0 * cam_tf.scale.y;
            let max_x = (size.x - half_vw).max(half_vw);
            let min_y = -(size.y - half_vh).max(half_vh);
            (
                smooth.x.round().clamp(half_vw, max_x),
                smooth.y.round().clamp(min_y, -half_vh),
            )
        }
        None => (smooth.x.round(), smooth.y.round()),
    };

    cam_tf.translation.x = x;
    cam_tf.translation.y = y;
}
