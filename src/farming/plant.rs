use bevy::prelude::*;
use crate::shared::*;

/// Plant hitboxes are the sprite rect shrunk by this many pixels horizontally
/// and this fraction of its height vertically.
const HITBOX_SHRINK_X: f32 = 26.0;
const HITBOX_SHRINK_Y_FRACTION: f32 = 0.4;

/// One crop growing on one tilled tile.
#[derive(Debug, Clone, PartialEq)]
pub struct Plant {
    pub kind: CropKind,
    pub tile: TilePos,
    /// Continuous age in `[0, max_age]`; the visual frame is its floor.
    pub age: f32,
    pub max_age: f32,
    pub grow_speed: f32,
    harvestable: bool,
    y_offset: f32,
    sprite_size: Vec2,
}

impl Plant {
    pub fn new(def: &CropDef, tile: TilePos) -> Self {
        Self {
            kind: def.kind,
            tile,
            age: 0.0,
            max_age: def.max_age(),
            grow_speed: def.grow_speed,
            harvestable: false,
            y_offset: def.y_offset,
            sprite_size: def.sprite_size,
        }
    }

    pub fn harvestable(&self) -> bool {
        self.harvestable
    }

    /// One night of growth. Dry soil does nothing. A plant that was already
    /// at full age when watered becomes harvestable instead of ageing.
    pub fn grow(&mut self, is_watered: bool) {
        if !is_watered {
            return;
        }
        if self.age < self.max_age {
            self.age = (self.age + self.grow_speed).min(self.max_age);
        } else {
            self.harvestable = true;
        }
    }

    pub fn frame(&self) -> usize {
        self.age.floor() as usize
    }

    /// Seedlings sit flat on the soil; anything taller sorts with actors.
    pub fn layer(&self) -> DrawLayer {
        if self.frame() > 0 {
            DrawLayer::Main
        } else {
            DrawLayer::GroundPlant
        }
    }

    pub fn rect(&self) -> Rect {
        let anchor = self.tile.mid_bottom() + Vec2::new(0.0, self.y_offset);
        rect_from_mid_bottom(anchor, self.sprite_size)
    }

    /// Collision box, if the plant currently blocks movement. Ripe plants
    /// always do; with `rigid` any sprouted plant does.
    pub fn hitbox(&self, rigid: bool) -> Option<Rect> {
        if self.harvestable || (rigid && self.frame() > 0) {
            let rect = self.rect();
            let shrink = Vec2::new(HITBOX_SHRINK_X, rect.height() * HITBOX_SHRINK_Y_FRACTION);
            Some(Hitbox::inflated(rect, -shrink).rect)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::crops::crop_def;

    fn corn() -> Plant {
        Plant::new(&crop_def(CropKind::Corn), TilePos::new(2, 3))
    }

    #[test]
    fn dry_soil_does_not_grow() {
        let mut plant = corn();
        plant.grow(false);
        assert_eq!(plant.age, 0.0);
        assert!(!plant.harvestable());
    }

    #[test]
    fn becomes_harvestable_one_night_after_reaching_max_age() {
        let mut plant = corn();
        for _ in 0..3 {
            plant.grow(true);
        }
        assert_eq!(plant.age, plant.max_age);
        assert!(!plant.harvestable());
        plant.grow(true);
        assert!(plant.harvestable());
        assert_eq!(plant.age, plant.max_age);
    }

    #[test]
    fn age_is_clamped_for_fractional_speed() {
        let mut plant = Plant::new(&crop_def(CropKind::Tomato), TilePos::new(0, 0));
        for _ in 0..10 {
            plant.grow(true);
            assert!(plant.age <= plant.max_age);
        }
        assert_eq!(plant.age, plant.max_age);
        assert!(plant.harvestable());
    }

    #[test]
    fn harvestable_never_reverts() {
        let mut plant = corn();
        for _ in 0..4 {
            plant.grow(true);
        }
        assert!(plant.harvestable());
        plant.grow(false);
        plant.grow(true);
        assert!(plant.harvestable());
    }

    #[test]
    fn layer_rises_once_sprouted() {
        let mut plant = corn();
        assert_eq!(plant.layer(), DrawLayer::GroundPlant);
        plant.grow(true);
        assert_eq!(plant.frame(), 1);
        assert_eq!(plant.layer(), DrawLayer::Main);
    }

    #[test]
    fn rect_sits_on_tile_bottom_with_offset() {
        let plant = corn();
        let rect = plant.rect();
        let tile_bottom = TilePos::new(2, 3).mid_bottom();
        assert_eq!(rect.max.y, tile_bottom.y - 16.0);
        assert_eq!(rect.center().x, tile_bottom.x);
    }

    #[test]
    fn hitbox_only_when_ripe_unless_rigid() {
        let mut plant = corn();
        plant.grow(true);
        assert!(plant.hitbox(false).is_none());
        assert!(plant.hitbox(true).is_some());
        for _ in 0..3 {
            plant.grow(true);
        }
        let hitbox = plant.hitbox(false).unwrap();
        let rect = plant.rect();
        assert_eq!(hitbox.width(), rect.width() - 26.0);
        assert!((hitbox.height() - rect.height() * 0.6).abs() < 1e-4);
    }
}
