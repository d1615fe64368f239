use bevy::prelude::*;
use crate::shared::*;
use super::PlayerController;

/// First zone whose rect overlaps `rect`.
pub fn zone_under<'a>(
    rect: Rect,
    zones: impl IntoIterator<Item = &'a InteractionZone>,
) -> Option<InteractionKind> {
    zones
        .into_iter()
        .find(|zone| rects_overlap(zone.rect, rect))
        .map(|zone| zone.kind)
}

/// Interact key: the trader opens the shop, the bed puts the player to sleep.
pub fn handle_interact(
    input: Res<PlayerInput>,
    zones: Query<&InteractionZone>,
    mut player: Query<(&mut PlayerController, &mut Actor), With<Player>>,
    mut next_state: ResMut<NextState<GameState>>,
    mut sleep_writer: EventWriter<SleepStartEvent>,
) {
    if !input.interact {
        return;
    }
    let Ok((mut ctrl, mut actor)) = player.get_single_mut() else {
        return;
    };
    if ctrl.busy() {
        return;
    }

    match zone_under(actor.rect(), zones.iter()) {
        Some(InteractionKind::Trader) => {
            info!("[Player] Opening the shop");
            next_state.set(GameState::Shop);
        }
        Some(InteractionKind::Bed) => {
            ctrl.status = PlayerStatus {
                facing: Facing::Left,
                activity: PlayerActivity::Idle,
            };
            ctrl.sleeping = true;
            actor.direction = Vec2::ZERO;
            sleep_writer.send(SleepStartEvent);
            info!("[Player] Going to sleep");
        }
        None => {}
    }
}

pub fn wake_on_event(
    mut events: EventReader<WakeUpEvent>,
    mut player: Query<&mut PlayerController, With<Player>>,
) {
    if events.read().last().is_none() {
        return;
    }
    for mut ctrl in player.iter_mut() {
        ctrl.sleeping = false;
    }
    debug!("[Player] Woke up");
}
