//! Draw list lifecycle and the placeholder sprite renderer.
//!
//! Domains push `DrawItem`s during `DrawSet::Collect`; the list is sorted in
//! `DrawSet::Present` and mirrored onto a pool of coloured sprites. No art
//! assets are loaded; each `SpriteKey` maps to a flat colour.

use bevy::prelude::*;
use crate::shared::*;

use super::{StaticSprite, trees::Tree};

/// Marks a pooled sprite entity owned by `DrawPool`.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct DrawSprite;

#[derive(Resource, Debug, Default)]
pub struct DrawPool {
    pub entities: Vec<Entity>,
}

pub fn clear_draw_list(mut draw_list: ResMut<DrawList>) {
    draw_list.items.clear();
}

pub fn sort_draw_list(mut draw_list: ResMut<DrawList>) {
    draw_list.sort();
}

pub fn collect_static_sprites(mut draw_list: ResMut<DrawList>, statics: Query<&StaticSprite>) {
    for sprite in statics.iter() {
        draw_list.push(DrawItem {
            pos: sprite.rect.min,
            size: sprite.rect.size(),
            sprite: sprite.key,
            layer: sprite.layer,
        });
    }
}

pub fn collect_trees(mut draw_list: ResMut<DrawList>, trees: Query<&Tree>) {
    for tree in trees.iter() {
        draw_list.push(DrawItem {
            pos: tree.rect.min,
            size: tree.rect.size(),
            sprite: SpriteKey::Tree {
                size: tree.size,
                alive: tree.alive,
            },
            layer: DrawLayer::Main,
        });
        for &offset in &tree.apples {
            let rect = tree.apple_rect(offset);
            draw_list.push(DrawItem {
                pos: rect.min,
                size: rect.size(),
                sprite: SpriteKey::Apple,
                layer: DrawLayer::Fruit,
            });
        }
    }
}

pub fn collect_flashes(mut draw_list: ResMut<DrawList>, flashes: Query<&FlashEffect>) {
    for flash in flashes.iter() {
        draw_list.push(DrawItem {
            pos: flash.rect.min,
            size: flash.rect.size(),
            sprite: SpriteKey::Flash,
            layer: flash.layer,
        });
    }
}

/// Flashes vanish once their timer runs out.
pub fn tick_flashes(
    mut commands: Commands,
    time: Res<Time>,
    mut flashes: Query<(Entity, &mut FlashEffect)>,
) {
    for (entity, mut flash) in flashes.iter_mut() {
        if flash.timer.tick(time.delta()).is_some() {
            commands.entity(entity).despawn();
        }
    }
}

/// Flat stand-in colour for each sprite.
pub fn placeholder_color(key: SpriteKey) -> Color {
    match key {
        SpriteKey::Ground => Color::srgb(0.42, 0.62, 0.30),
        SpriteKey::Water => Color::srgb(0.25, 0.50, 0.80),
        SpriteKey::HouseFloor => Color::srgb(0.60, 0.45, 0.30),
        SpriteKey::Fence => Color::srgb(0.55, 0.38, 0.20),
        SpriteKey::Flower => Color::srgb(0.85, 0.55, 0.75),
        SpriteKey::Soil(_) => Color::srgb(0.55, 0.40, 0.25),
        SpriteKey::SoilWater(_) => Color::srgba(0.20, 0.15, 0.10, 0.5),
        SpriteKey::Plant { crop, frame } => {
            let ripeness = (frame as f32 / 3.0).min(1.0);
            match crop {
                CropKind::Corn => Color::srgb(0.4 + 0.5 * ripeness, 0.75, 0.2),
                CropKind::Tomato => Color::srgb(0.3 + 0.6 * ripeness, 0.7 - 0.4 * ripeness, 0.2),
            }
        }
        SpriteKey::Tree { alive: true, .. } => Color::srgb(0.15, 0.45, 0.15),
        SpriteKey::Tree { alive: false, .. } => Color::srgb(0.45, 0.35, 0.20),
        SpriteKey::Apple => Color::srgb(0.85, 0.10, 0.10),
        SpriteKey::Player { .. } => Color::srgb(0.20, 0.30, 0.85),
        SpriteKey::Cow { love: true, .. } => Color::srgb(1.0, 0.70, 0.80),
        SpriteKey::Cow { .. } => Color::srgb(0.90, 0.90, 0.85),
        SpriteKey::Flash => Color::WHITE,
    }
}

/// Map a simulation-space rect to a Bevy translation (y up).
pub fn sim_to_world(pos: Vec2, size: Vec2, z: f32) -> Vec3 {
    Vec3::new(pos.x + size.x * 0.5, -(pos.y + size.y * 0.5), z)
}

/// Mirror the sorted draw list onto pooled sprites, tinted by the sky colour.
pub fn sync_draw_sprites(
    mut commands: Commands,
    draw_list: Res<DrawList>,
    tint: Res<DayNightTint>,
    mut pool: ResMut<DrawPool>,
    mut sprites: Query<(&mut Sprite, &mut Transform, &mut Visibility), With<DrawSprite>>,
) {
    let fade = (tint.fade / 255.0).clamp(0.0, 1.0);
    let multiplier = tint.color / 255.0 * fade;
    let count = draw_list.items.len().max(1) as f32;

    for (i, item) in draw_list.items.iter().enumerate() {
        let base = placeholder_color(item.sprite).to_srgba();
        let color = if item.sprite == SpriteKey::Flash {
            Color::srgba(base.red * fade, base.green * fade, base.blue * fade, base.alpha)
        } else {
            Color::srgba(
                base.red * multiplier.x,
                base.green * multiplier.y,
                base.blue * multiplier.z,
                base.alpha,
            )
        };
        // list order decides overlap; keep z inside one unit
        let translation = sim_to_world(item.pos, item.size, i as f32 / count);

        match pool.entities.get(i).copied() {
            Some(entity) => {
                if let Ok((mut sprite, mut transform, mut visibility)) = sprites.get_mut(entity) {
                    sprite.color = color;
                    sprite.custom_size = Some(item.size);
                    transform.translation = translation;
                    *visibility = Visibility::Inherited;
                }
            }
            None => {
                let entity = commands
                    .spawn((
                        Sprite {
                            color,
                            custom_size: Some(item.size),
                            ..default()
                        },
                        Transform::from_translation(translation),
                        Visibility::Inherited,
                        DrawSprite,
                    ))
                    .id();
                pool.entities.push(entity);
            }
        }
    }

    for &entity in pool.entities.iter().skip(draw_list.items.len()) {
        if let Ok((_, _, mut visibility)) = sprites.get_mut(entity) {
            *visibility = Visibility::Hidden;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sim_to_world_flips_y_and_centres() {
        let t = sim_to_world(Vec2::new(64.0, 128.0), Vec2::splat(64.0), 0.5);
        assert_eq!(t, Vec3::new(96.0, -160.0, 0.5));
    }

    #[test]
    fn draw_list_orders_by_layer_then_y() {
        let item = |y: f32, layer| DrawItem {
            pos: Vec2::new(0.0, y),
            size: Vec2::splat(10.0),
            sprite: SpriteKey::Flash,
            layer,
        };
        let mut list = DrawList::default();
        list.push(item(50.0, DrawLayer::Main));
        list.push(item(10.0, DrawLayer::Fruit));
        list.push(item(5.0, DrawLayer::Main));
        list.push(item(0.0, DrawLayer::Ground));
        list.sort();
        let order: Vec<_> = list.items.iter().map(|i| (i.layer, i.pos.y)).collect();
        assert_eq!(
            order,
            vec![
                (DrawLayer::Ground, 0.0),
                (DrawLayer::Main, 5.0),
                (DrawLayer::Main, 50.0),
                (DrawLayer::Fruit, 10.0),
            ]
        );
    }
}
