use bevy::prelude::*;
use crate::shared::*;
use super::{Cow, CowActivity};

pub fn collect_cows(mut draw_list: ResMut<DrawList>, cows: Query<(&Cow, &Actor)>) {
    for (cow, actor) in cows.iter() {
        let rect = actor.rect();
        draw_list.push(DrawItem {
            pos: rect.min,
            size: rect.size(),
            sprite: SpriteKey::Cow {
                frame: cow.frame as usize,
                love: cow.activity == CowActivity::Love,
            },
            layer: DrawLayer::Main,
        });
    }
}
