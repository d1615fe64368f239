use bevy::prelude::*;
use crate::config::GameConfig;
use crate::farming::soil::SoilGrid;
use crate::shared::*;
use crate::world::collision::move_actor;
use super::PlayerController;

/// Derive the animation status from motion and the tool timer.
pub fn update_status(mut player: Query<(&mut PlayerController, &Actor), With<Player>>) {
    let Ok((mut ctrl, actor)) = player.get_single_mut() else {
        return;
    };
    let activity = if ctrl.tool_use.active() {
        PlayerActivity::Tool(ctrl.selected_tool())
    } else if actor.direction == Vec2::ZERO {
        PlayerActivity::Idle
    } else {
        PlayerActivity::Walk
    };
    if ctrl.status.activity != activity {
        ctrl.status.activity = activity;
        ctrl.frame = 0.0;
    }
}

/// Move the player against every solid hitbox plus the rigid crops.
pub fn move_player(
    time: Res<Time>,
    config: Res<GameConfig>,
    grid: Option<Res<SoilGrid>>,
    mut player: Query<(&mut Actor, &mut Hitbox), With<Player>>,
    solids: Query<&Hitbox, (With<Solid>, Without<Player>)>,
) {
    let Ok((mut actor, mut hitbox)) = player.get_single_mut() else {
        return;
    };

    let mut obstacles: Vec<Rect> = solids.iter().map(|h| h.rect).collect();
    if let Some(grid) = grid.as_deref() {
        obstacles.extend(grid.plant_hitboxes(config.rigid_plants));
    }

    move_actor(&mut actor, &mut hitbox, time.delta_secs(), &obstacles);
}

pub fn animate_player(time: Res<Time>, mut player: Query<&mut PlayerController, With<Player>>) {
    let Ok(mut ctrl) = player.get_single_mut() else {
        return;
    };
    let count = ctrl.status.frame_count().max(1) as f32;
    ctrl.frame += ctrl.status.animation_speed() * time.delta_secs();
    if ctrl.frame >= count {
        ctrl.frame = 0.0;
    }
}

pub fn collect_player_sprite(
    mut draw_list: ResMut<DrawList>,
    player: Query<(&Actor, &PlayerController), With<Player>>,
) {
    let Ok((actor, ctrl)) = player.get_single() else {
        return;
    };
    let rect = actor.rect();
    draw_list.push(DrawItem {
        pos: rect.min,
        size: rect.size(),
        sprite: SpriteKey::Player {
            status: ctrl.status,
            frame: ctrl.frame as usize,
        },
        layer: DrawLayer::Main,
    });
}
