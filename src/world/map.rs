//! Map layout: farmable tiles, obstacles, trees, zones and spawn points.
//!
//! Positions are simulation-space pixels (`[x, y]`, y down). A map can be
//! supplied as RON through `GameConfig::map_path`; otherwise the built-in farm
//! is used.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::shared::*;

#[derive(Debug, Error)]
pub enum MapError {
    #[error("cannot read map {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed map {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("map has no tiles")]
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TreeSpawn {
    /// Top-left corner of the tree sprite.
    pub pos: [f32; 2],
    pub size: TreeSize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneSpawn {
    pub kind: InteractionKind,
    /// Top-left corner.
    pub pos: [f32; 2],
    pub size: [f32; 2],
}

impl ZoneSpawn {
    pub fn rect(&self) -> Rect {
        let min = Vec2::from(self.pos);
        Rect::from_corners(min, min + Vec2::from(self.size))
    }
}

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapData {
    pub rows: usize,
    pub cols: usize,
    pub farmable: Vec<TilePos>,
    /// Invisible blocking tiles (map edges, house walls).
    pub collision: Vec<TilePos>,
    pub water: Vec<TilePos>,
    pub fences: Vec<TilePos>,
    pub house_floor: Vec<TilePos>,
    /// Wildflower bushes, as top-left corners of 64x64 solid sprites.
    pub decorations: Vec<[f32; 2]>,
    pub trees: Vec<TreeSpawn>,
    pub zones: Vec<ZoneSpawn>,
    pub player_start: [f32; 2],
    pub cows: Vec<[f32; 2]>,
}

impl Default for MapData {
    fn default() -> Self {
        Self::default_farm()
    }
}

fn tile_block(rows: std::ops::Range<usize>, cols: std::ops::Range<usize>) -> Vec<TilePos> {
    rows.flat_map(|r| cols.clone().map(move |c| TilePos::new(r, c)))
        .collect()
}

impl MapData {
    /// The built-in 40x50 farm: a house in the north-west, a field in the
    /// middle, a pond to the south-west and a cow paddock in the south-east.
    pub fn default_farm() -> Self {
        let rows = 40;
        let cols = 50;

        let mut collision = Vec::new();
        for c in 0..cols {
            collision.push(TilePos::new(0, c));
            collision.push(TilePos::new(rows - 1, c));
        }
        for r in 1..rows - 1 {
            collision.push(TilePos::new(r, 0));
            collision.push(TilePos::new(r, cols - 1));
        }
        // house walls around a 6x8 floor at rows 4..10, cols 4..12, door in row 10
        for c in 3..13 {
            collision.push(TilePos::new(3, c));
            if !(8..10).contains(&c) {
                collision.push(TilePos::new(10, c));
            }
        }
        for r in 4..10 {
            collision.push(TilePos::new(r, 3));
            collision.push(TilePos::new(r, 12));
        }

        let mut fences = Vec::new();
        for c in 30..44 {
            fences.push(TilePos::new(26, c));
            fences.push(TilePos::new(36, c));
        }
        for r in 27..36 {
            fences.push(TilePos::new(r, 30));
            if r != 31 {
                fences.push(TilePos::new(r, 43));
            }
        }

        Self {
            rows,
            cols,
            farmable: tile_block(14..22, 18..30),
            collision,
            water: tile_block(28..35, 4..12),
            fences,
            house_floor: tile_block(4..10, 4..12),
            decorations: vec![[1600.0, 700.0], [2400.0, 1250.0], [960.0, 1500.0]],
            trees: vec![
                TreeSpawn { pos: [900.0, 1150.0], size: TreeSize::Small },
                TreeSpawn { pos: [1050.0, 1350.0], size: TreeSize::Large },
                TreeSpawn { pos: [2300.0, 450.0], size: TreeSize::Large },
                TreeSpawn { pos: [2650.0, 800.0], size: TreeSize::Small },
                TreeSpawn { pos: [2800.0, 1300.0], size: TreeSize::Large },
            ],
            zones: vec![
                ZoneSpawn {
                    kind: InteractionKind::Bed,
                    pos: [320.0, 300.0],
                    size: [96.0, 64.0],
                },
                ZoneSpawn {
                    kind: InteractionKind::Trader,
                    pos: [2000.0, 640.0],
                    size: [64.0, 64.0],
                },
            ],
            player_start: [1400.0, 800.0],
            cows: vec![[2300.0, 1900.0], [2550.0, 2050.0]],
        }
    }

    pub fn from_ron_str(content: &str, path: &Path) -> Result<Self, MapError> {
        let map: MapData = ron::from_str(content).map_err(|source| MapError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        if map.rows == 0 || map.cols == 0 {
            return Err(MapError::Empty);
        }
        Ok(map)
    }

    pub fn from_file(path: &Path) -> Result<Self, MapError> {
        let content = std::fs::read_to_string(path).map_err(|source| MapError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_ron_str(&content, path)
    }

    pub fn size_px(&self) -> Vec2 {
        Vec2::new(self.cols as f32 * TILE_SIZE, self.rows as f32 * TILE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_farm_is_consistent() {
        let map = MapData::default_farm();
        let in_bounds = |t: &TilePos| t.row < map.rows && t.col < map.cols;
        assert!(map.farmable.iter().all(in_bounds));
        assert!(map.collision.iter().all(in_bounds));
        assert!(map.fences.iter().all(in_bounds));
        assert!(!map.farmable.iter().any(|t| map.collision.contains(t)));
        assert!(map.zones.iter().any(|z| z.kind == InteractionKind::Bed));
        assert!(map.zones.iter().any(|z| z.kind == InteractionKind::Trader));
    }

    #[test]
    fn player_starts_on_open_ground() {
        let map = MapData::default_farm();
        let start = Vec2::from(map.player_start);
        let (row, col) = point_to_tile(start);
        let tile = TilePos::new(row as usize, col as usize);
        assert!(!map.collision.contains(&tile));
        assert!(!map.water.contains(&tile));
    }

    #[test]
    fn ron_round_trip_of_built_in_farm() {
        let map = MapData::default_farm();
        let text = ron::to_string(&map).unwrap();
        let parsed = MapData::from_ron_str(&text, Path::new("farm.ron")).unwrap();
        assert_eq!(parsed, map);
    }

    #[test]
    fn zero_sized_map_is_rejected() {
        let mut map = MapData::default_farm();
        map.rows = 0;
        let text = ron::to_string(&map).unwrap();
        assert!(matches!(
            MapData::from_ron_str(&text, Path::new("farm.ron")),
            Err(MapError::Empty)
        ));
    }
}
