//! Fruit trees: axe damage, falling apples, stumps and overnight regrowth.

use bevy::prelude::*;
use rand::Rng;

use crate::shared::*;

pub const TREE_HEALTH: i32 = 5;
pub const APPLE_SIZE: Vec2 = Vec2::new(16.0, 16.0);

/// Chance for each apple spot to bear fruit overnight, as `n` in 11.
const APPLE_CHANCE_IN_11: u32 = 2;

/// Apple spots relative to the tree sprite's top-left corner.
pub fn apple_spots(size: TreeSize) -> &'static [Vec2] {
    const SMALL: [Vec2; 6] = [
        Vec2::new(18.0, 17.0),
        Vec2::new(30.0, 37.0),
        Vec2::new(12.0, 50.0),
        Vec2::new(30.0, 45.0),
        Vec2::new(20.0, 30.0),
        Vec2::new(30.0, 10.0),
    ];
    const LARGE: [Vec2; 6] = [
        Vec2::new(30.0, 24.0),
        Vec2::new(60.0, 65.0),
        Vec2::new(50.0, 50.0),
        Vec2::new(16.0, 40.0),
        Vec2::new(45.0, 50.0),
        Vec2::new(42.0, 70.0),
    ];
    match size {
        TreeSize::Small => &SMALL,
        TreeSize::Large => &LARGE,
    }
}

pub fn tree_sprite_size(size: TreeSize) -> Vec2 {
    match size {
        TreeSize::Small => Vec2::new(64.0, 96.0),
        TreeSize::Large => Vec2::new(96.0, 128.0),
    }
}

pub fn stump_sprite_size(size: TreeSize) -> Vec2 {
    match size {
        TreeSize::Small => Vec2::new(48.0, 32.0),
        TreeSize::Large => Vec2::new(64.0, 40.0),
    }
}

#[derive(Component, Debug, Clone)]
pub struct Tree {
    pub size: TreeSize,
    pub health: i32,
    pub alive: bool,
    /// Sprite rect while standing; replaced by the stump rect once felled.
    pub rect: Rect,
    /// Offsets from the standing sprite's top-left of apples currently hanging.
    pub apples: Vec<Vec2>,
}

/// What one axe hit did.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TreeHit {
    /// World rect of the apple knocked loose, if any.
    pub apple: Option<Rect>,
    pub felled: bool,
}

impl Tree {
    pub fn new(top_left: Vec2, size: TreeSize) -> Self {
        Self {
            size,
            health: TREE_HEALTH,
            alive: true,
            rect: Rect::from_corners(top_left, top_left + tree_sprite_size(size)),
            apples: Vec::new(),
        }
    }

    /// Solid part of the tree: the trunk while standing, a squat box as a stump.
    pub fn hitbox(&self) -> Hitbox {
        let size = self.rect.size();
        if self.alive {
            Hitbox::inflated(self.rect, Vec2::new(-size.x * 0.2, -size.y * 0.75))
        } else {
            Hitbox::inflated(self.rect, Vec2::new(-10.0, -size.y * 0.6))
        }
    }

    pub fn apple_rect(&self, offset: Vec2) -> Rect {
        let min = self.rect.min + offset;
        Rect::from_corners(min, min + APPLE_SIZE)
    }

    /// Take one axe hit. A random hanging apple drops; at zero health the
    /// tree is felled and becomes a stump.
    pub fn damage(&mut self, rng: &mut impl Rng) -> TreeHit {
        let mut hit = TreeHit::default();
        if !self.alive {
            return hit;
        }
        self.health -= 1;

        if !self.apples.is_empty() {
            let i = rng.gen_range(0..self.apples.len());
            let offset = self.apples.swap_remove(i);
            hit.apple = Some(self.apple_rect(offset));
        }

        if self.health <= 0 {
            self.alive = false;
            self.apples.clear();
            let mid_bottom = Vec2::new(self.rect.center().x, self.rect.max.y);
            self.rect = rect_from_mid_bottom(mid_bottom, stump_sprite_size(self.size));
            hit.felled = true;
        }
        hit
    }

    /// Drop yesterday's apples and grow a fresh set.
    pub fn regrow_apples(&mut self, rng: &mut impl Rng) {
        self.apples.clear();
        if !self.alive {
            return;
        }
        for &spot in apple_spots(self.size) {
            if rng.gen_range(0..11) < APPLE_CHANCE_IN_11 {
                self.apples.push(spot);
            }
        }
    }
}

/// Apples hang on trees from the start.
pub fn grow_initial_apples(mut trees: Query<&mut Tree, Added<Tree>>) {
    let mut rng = rand::thread_rng();
    for mut tree in trees.iter_mut() {
        tree.regrow_apples(&mut rng);
    }
}

/// Axe swings hit the first standing tree under the target point.
pub fn handle_axe_use(
    mut commands: Commands,
    mut tool_events: EventReader<ToolUseEvent>,
    mut trees: Query<(&mut Tree, &mut Hitbox)>,
    mut pickup_writer: EventWriter<ItemPickupEvent>,
    mut sfx_writer: EventWriter<PlaySfxEvent>,
) {
    let mut rng = rand::thread_rng();
    for event in tool_events.read() {
        if event.tool != ToolKind::Axe {
            continue;
        }
        let Some((mut tree, mut hitbox)) = trees
            .iter_mut()
            .find(|(tree, _)| tree.alive && tree.rect.contains(event.target))
        else {
            continue;
        };

        let hit = tree.damage(&mut rng);
        sfx_writer.send(PlaySfxEvent { sfx: Sfx::Axe });

        if let Some(apple) = hit.apple {
            commands.spawn(FlashEffect::new(apple, DrawLayer::Fruit));
            pickup_writer.send(ItemPickupEvent {
                item: ItemKind::Apple,
                quantity: 1,
            });
        }

        if hit.felled {
            info!("[World] Tree felled at ({:.0}, {:.0})", tree.rect.min.x, tree.rect.min.y);
            *hitbox = tree.hitbox();
            pickup_writer.send(ItemPickupEvent {
                item: ItemKind::Wood,
                quantity: 1,
            });
        }
    }
}

/// Overnight: every standing tree sheds its apples and grows new ones.
pub fn regrow_apples_on_day_end(
    mut day_end_events: EventReader<DayEndEvent>,
    mut trees: Query<&mut Tree>,
) {
    if day_end_events.read().count() == 0 {
        return;
    }
    let mut rng = rand::thread_rng();
    for mut tree in trees.iter_mut() {
        tree.regrow_apples(&mut rng);
    }
}
