//! Day-end processing for the field.

use bevy::prelude::*;
use crate::shared::*;
use super::soil::SoilGrid;

/// Grow every plant on last night's water, dry the field, then apply the
/// new day's weather. A rainy morning waters all tilled soil.
pub fn on_day_end(mut events: EventReader<DayEndEvent>, mut grid: ResMut<SoilGrid>) {
    for event in events.read() {
        end_day(&mut grid, event.raining);
        info!(
            "[Farming] Day {} ended; {} plants, raining: {}",
            event.day,
            grid.plants().count(),
            event.raining
        );
    }
}

pub fn end_day(grid: &mut SoilGrid, raining: bool) {
    grid.grow_plants();
    grid.remove_water();
    grid.set_raining(raining);
    if raining {
        grid.water_all();
    }
}
