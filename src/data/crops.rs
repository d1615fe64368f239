use bevy::prelude::*;
use crate::shared::*;

/// Growth parameters per crop. Both crops have four growth frames; tomatoes
/// grow slower, so they need more watered nights to ripen.
pub fn crop_def(kind: CropKind) -> CropDef {
    match kind {
        CropKind::Corn => CropDef {
            kind,
            frames: 4,
            grow_speed: 1.0,
            y_offset: -16.0,
            sprite_size: Vec2::new(48.0, 64.0),
        },
        CropKind::Tomato => CropDef {
            kind,
            frames: 4,
            grow_speed: 0.7,
            y_offset: -8.0,
            sprite_size: Vec2::new(48.0, 48.0),
        },
    }
}

pub fn populate_crops(registry: &mut CropRegistry) {
    for kind in CropKind::ALL {
        registry.crops.insert(kind, crop_def(kind));
    }
}

/// Registry with every crop, for callers outside the Loading flow.
pub fn default_registry() -> CropRegistry {
    let mut registry = CropRegistry::default();
    populate_crops(&mut registry);
    registry
}
