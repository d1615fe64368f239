use bevy::prelude::*;

use crate::config::GameConfig;
use crate::shared::*;
use super::PlayerController;

/// Turn this frame's input into movement intent, timer starts and selection
/// changes. Busy players keep their current (zero) direction.
pub fn handle_player_actions(
    input: Res<PlayerInput>,
    mut player: Query<(&mut PlayerController, &mut Actor), With<Player>>,
) {
    let Ok((mut ctrl, mut actor)) = player.get_single_mut() else {
        return;
    };
    if ctrl.busy() {
        return;
    }

    // input is y-up, the simulation is y-down
    actor.direction = Vec2::new(input.move_axis.x, -input.move_axis.y);
    if actor.direction.x < 0.0 {
        ctrl.status.facing = Facing::Left;
    } else if actor.direction.x > 0.0 {
        ctrl.status.facing = Facing::Right;
    } else if actor.direction.y < 0.0 {
        ctrl.status.facing = Facing::Up;
    } else if actor.direction.y > 0.0 {
        ctrl.status.facing = Facing::Down;
    }

    if input.tool_use {
        ctrl.tool_use.activate();
        actor.direction = Vec2::ZERO;
        ctrl.frame = 0.0;
    }

    if input.tool_next && !ctrl.tool_switch.active() {
        ctrl.tool_switch.activate();
        ctrl.tool_index = (ctrl.tool_index + 1) % TOOL_ORDER.len();
        debug!("[Player] Tool selected: {:?}", ctrl.selected_tool());
    }

    if input.seed_use && !ctrl.seed_use.active() {
        ctrl.seed_use.activate();
        actor.direction = Vec2::ZERO;
        ctrl.frame = 0.0;
    }

    if input.seed_next && !ctrl.seed_switch.active() {
        ctrl.seed_switch.activate();
        ctrl.seed_index = (ctrl.seed_index + 1) % SEED_ORDER.len();
        debug!("[Player] Seed selected: {:?}", ctrl.selected_seed());
    }
}

/// Advance the four action timers. An expiring tool timer fires its tool at
/// the target point; an expiring seed timer plants if a seed is in hand.
pub fn update_player_timers(
    time: Res<Time>,
    config: Res<GameConfig>,
    inventory: Res<Inventory>,
    mut player: Query<(&mut PlayerController, &Actor), With<Player>>,
    mut tool_writer: EventWriter<ToolUseEvent>,
    mut seed_writer: EventWriter<PlantSeedEvent>,
) {
    let Ok((mut ctrl, actor)) = player.get_single_mut() else {
        return;
    };
    let dt = time.delta();
    let target = ctrl.target(actor.pos);

    if ctrl.tool_use.update(dt) == Some(TimerAction::UseTool) {
        let tool = ctrl.selected_tool();
        if config.analytics {
            debug!("[Player] {:?} used at ({:.0}, {:.0})", tool, target.x, target.y);
        }
        tool_writer.send(ToolUseEvent { tool, target });
    }
    ctrl.tool_switch.tick(dt);

    if ctrl.seed_use.update(dt) == Some(TimerAction::UseSeed) {
        let seed = ctrl.selected_seed();
        if inventory.seed_count(seed) > 0 {
            seed_writer.send(PlantSeedEvent { seed, target });
        } else {
            debug!("[Player] No {:?} seeds left", seed);
        }
    }
    ctrl.seed_switch.tick(dt);
}
