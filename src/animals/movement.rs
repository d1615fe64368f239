use bevy::prelude::*;
use crate::config::GameConfig;
use crate::farming::soil::SoilGrid;
use crate::shared::*;
use crate::world::collision::move_actor;
use super::{Cow, COW_ANIMATION_SPEED, COW_FRAMES};

/// Tick each cow's status timer and roll a new activity when it runs out.
pub fn update_cow_status(time: Res<Time>, mut cows: Query<(&mut Cow, &mut Actor)>) {
    let mut rng = rand::thread_rng();
    for (mut cow, mut actor) in cows.iter_mut() {
        if !cow.status_timer.active() {
            let mut direction = actor.direction;
            cow.roll(&mut direction, &mut rng);
            actor.direction = direction;
            debug!("[Animals] Cow is now {:?}", cow.activity);
        }
        cow.status_timer.tick(time.delta());
    }
}

/// Walking cows move against every solid hitbox except their own, plus the
/// crops that currently block movement.
pub fn move_cows(
    time: Res<Time>,
    config: Res<GameConfig>,
    grid: Option<Res<SoilGrid>>,
    mut set: ParamSet<(
        Query<(Entity, &Hitbox), With<Solid>>,
        Query<(Entity, &Cow, &mut Actor, &mut Hitbox)>,
    )>,
) {
    let solids: Vec<(Entity, Rect)> = set.p0().iter().map(|(e, h)| (e, h.rect)).collect();
    let crops: Vec<Rect> = grid
        .as_deref()
        .map(|grid| grid.plant_hitboxes(config.rigid_plants).collect())
        .unwrap_or_default();
    let dt = time.delta_secs();

    for (entity, cow, mut actor, mut hitbox) in set.p1().iter_mut() {
        if !cow.walking() {
            continue;
        }
        let obstacles: Vec<Rect> = solids
            .iter()
            .filter(|(other, _)| *other != entity)
            .map(|(_, rect)| *rect)
            .chain(crops.iter().copied())
            .collect();
        move_actor(&mut actor, &mut hitbox, dt, &obstacles);
    }
}

pub fn animate_cows(time: Res<Time>, mut cows: Query<&mut Cow>) {
    for mut cow in cows.iter_mut() {
        cow.frame += COW_ANIMATION_SPEED * time.delta_secs();
        if cow.frame >= COW_FRAMES as f32 {
            cow.frame = 0.0;
        }
    }
}
