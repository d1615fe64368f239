use bevy::prelude::*;
use crate::shared::*;
use super::{Cow, CowActivity};

/// A cow whose body touches the player's hitbox falls in love until its
/// next status roll.
pub fn cow_touch_player(
    player: Query<&Hitbox, With<Player>>,
    mut cows: Query<(&mut Cow, &Actor), Without<Player>>,
) {
    let Ok(player_hitbox) = player.get_single() else {
        return;
    };
    for (mut cow, actor) in cows.iter_mut() {
        if cow.activity != CowActivity::Love && rects_overlap(actor.rect(), player_hitbox.rect) {
            cow.activity = CowActivity::Love;
            cow.facing_left = actor.direction.x < 0.0;
            cow.frame = 0.0;
            debug!("[Animals] A cow met the farmer");
        }
    }
}
