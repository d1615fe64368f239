//! Axis-separated actor movement against solid rectangles.

use bevy::prelude::*;
use crate::shared::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Horizontal,
    Vertical,
}

/// Move `actor` along its direction for `dt` seconds, clamping its hitbox
/// against every overlapping obstacle. X is fully resolved before Y.
pub fn move_actor(actor: &mut Actor, hitbox: &mut Hitbox, dt: f32, obstacles: &[Rect]) {
    if actor.direction != Vec2::ZERO {
        actor.direction = actor.direction.normalize();
    }

    actor.pos.x += actor.direction.x * actor.speed * dt;
    hitbox.recenter(actor.pos);
    resolve(actor, hitbox, obstacles, Axis::Horizontal);

    actor.pos.y += actor.direction.y * actor.speed * dt;
    hitbox.recenter(actor.pos);
    resolve(actor, hitbox, obstacles, Axis::Vertical);
}

fn resolve(actor: &mut Actor, hitbox: &mut Hitbox, obstacles: &[Rect], axis: Axis) {
    for obstacle in obstacles {
        if !rects_overlap(hitbox.rect, *obstacle) {
            continue;
        }
        let mut rect = hitbox.rect;
        match axis {
            Axis::Horizontal => {
                let width = rect.width();
                if actor.direction.x > 0.0 {
                    rect.max.x = obstacle.min.x;
                    rect.min.x = rect.max.x - width;
                } else if actor.direction.x < 0.0 {
                    rect.min.x = obstacle.max.x;
                    rect.max.x = rect.min.x + width;
                }
            }
            Axis::Vertical => {
                let height = rect.height();
                if actor.direction.y > 0.0 {
                    rect.max.y = obstacle.min.y;
                    rect.min.y = rect.max.y - height;
                } else if actor.direction.y < 0.0 {
                    rect.min.y = obstacle.max.y;
                    rect.max.y = rect.min.y + height;
                }
            }
        }
        hitbox.rect = rect;
        actor.pos = hitbox.owner_pos();
    }
}
