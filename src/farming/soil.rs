//! The soil grid: per-tile farm flags, derived art, water overlays and the
//! plants growing on it.

use bevy::prelude::*;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

use super::autotile::{classify, Neighbours};
use super::plant::Plant;
use crate::shared::*;

/// Number of interchangeable wet-soil overlay sprites.
pub const WATER_OVERLAY_VARIANTS: u8 = 3;

// ─────────────────────────────────────────────────────────────────────────────
// Persisted form
// ─────────────────────────────────────────────────────────────────────────────

/// One flag of a persisted soil cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoilToken {
    #[serde(rename = "F")]
    Farmable,
    #[serde(rename = "X")]
    Tilled,
    #[serde(rename = "W")]
    Watered,
    #[serde(rename = "C")]
    Corn,
    #[serde(rename = "T")]
    Tomato,
}

/// Rows of cells of flag tokens, exactly as written to `soil.json`.
pub type SoilSnapshot = Vec<Vec<Vec<SoilToken>>>;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("no soil snapshot at {0}")]
    Missing(String),
    #[error("soil snapshot is empty")]
    Empty,
    #[error("cannot read soil snapshot: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed soil snapshot: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("snapshot is {found_rows}x{found_cols}, map is {rows}x{cols}")]
    DimensionMismatch {
        rows: usize,
        cols: usize,
        found_rows: usize,
        found_cols: usize,
    },
    #[error("cell ({row}, {col}) is inconsistent: {reason}")]
    Inconsistent {
        row: usize,
        col: usize,
        reason: &'static str,
    },
}

// ─────────────────────────────────────────────────────────────────────────────
// Cells
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SoilCell {
    pub farmable: bool,
    pub tilled: bool,
    pub watered: bool,
    pub crop: Option<CropKind>,
}

impl SoilCell {
    fn tokens(&self) -> Vec<SoilToken> {
        let mut tokens = Vec::new();
        if self.farmable {
            tokens.push(SoilToken::Farmable);
        }
        if self.tilled {
            tokens.push(SoilToken::Tilled);
        }
        if self.watered {
            tokens.push(SoilToken::Watered);
        }
        match self.crop {
            Some(CropKind::Corn) => tokens.push(SoilToken::Corn),
            Some(CropKind::Tomato) => tokens.push(SoilToken::Tomato),
            None => {}
        }
        tokens
    }

    fn from_tokens(tokens: &[SoilToken], row: usize, col: usize) -> Result<Self, LoadError> {
        let mut cell = SoilCell::default();
        for token in tokens {
            match token {
                SoilToken::Farmable => cell.farmable = true,
                SoilToken::Tilled => cell.tilled = true,
                SoilToken::Watered => cell.watered = true,
                SoilToken::Corn | SoilToken::Tomato => {
                    let kind = if *token == SoilToken::Corn {
                        CropKind::Corn
                    } else {
                        CropKind::Tomato
                    };
                    if cell.crop.is_some_and(|c| c != kind) {
                        return Err(LoadError::Inconsistent {
                            row,
                            col,
                            reason: "two crops on one tile",
                        });
                    }
                    cell.crop = Some(kind);
                }
            }
        }
        let reason = if cell.tilled && !cell.farmable {
            Some("tilled but not farmable")
        } else if cell.watered && !cell.tilled {
            Some("watered but not tilled")
        } else if cell.crop.is_some() && !cell.tilled {
            Some("crop on untilled soil")
        } else {
            None
        };
        match reason {
            Some(reason) => Err(LoadError::Inconsistent { row, col, reason }),
            None => Ok(cell),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// SoilGrid
// ─────────────────────────────────────────────────────────────────────────────

/// Authoritative farm state. Every mutation that changes a flag marks the
/// grid dirty; the save domain flushes it once per tick.
#[derive(Resource, Debug, Clone, Default)]
pub struct SoilGrid {
    rows: usize,
    cols: usize,
    cells: Vec<SoilCell>,
    variants: BTreeMap<TilePos, TileVariant>,
    /// Wet-soil overlay sprite per watered tile.
    water_overlays: BTreeMap<TilePos, u8>,
    plants: BTreeMap<TilePos, Plant>,
    raining: bool,
    dirty: bool,
}

impl SoilGrid {
    /// Fresh grid from the map's farmable tiles. Tiles outside the grid are
    /// dropped.
    pub fn from_map(rows: usize, cols: usize, farmable: &[TilePos]) -> Self {
        let mut grid = Self {
            rows,
            cols,
            cells: vec![SoilCell::default(); rows * cols],
            ..Default::default()
        };
        for &tile in farmable {
            match grid.index(tile) {
                Some(i) => grid.cells[i].farmable = true,
                None => warn!(
                    "[Farming] Farmable tile ({}, {}) is outside the {}x{} map",
                    tile.row, tile.col, rows, cols
                ),
            }
        }
        grid
    }

    /// Rebuild from a persisted snapshot. Plants restart at age 0 on every
    /// crop tile and every watered tile gets a fresh overlay.
    pub fn from_snapshot(
        snapshot: &SoilSnapshot,
        rows: usize,
        cols: usize,
        crops: &CropRegistry,
    ) -> Result<Self, LoadError> {
        if snapshot.is_empty() {
            return Err(LoadError::Empty);
        }
        let found_cols = snapshot.iter().map(Vec::len).find(|&len| len != cols).unwrap_or(cols);
        if snapshot.len() != rows || found_cols != cols {
            return Err(LoadError::DimensionMismatch {
                rows,
                cols,
                found_rows: snapshot.len(),
                found_cols,
            });
        }

        let mut cells = Vec::with_capacity(rows * cols);
        for (row, cols_in_row) in snapshot.iter().enumerate() {
            for (col, tokens) in cols_in_row.iter().enumerate() {
                cells.push(SoilCell::from_tokens(tokens, row, col)?);
            }
        }

        let mut grid = Self {
            rows,
            cols,
            cells,
            ..Default::default()
        };
        let mut rng = rand::thread_rng();
        for i in 0..grid.cells.len() {
            let tile = TilePos::new(i / cols, i % cols);
            let cell = grid.cells[i];
            if cell.watered {
                grid.water_overlays
                    .insert(tile, rng.gen_range(0..WATER_OVERLAY_VARIANTS));
            }
            if let Some(kind) = cell.crop {
                match crops.get(kind) {
                    Some(def) => {
                        grid.plants.insert(tile, Plant::new(def, tile));
                    }
                    None => warn!("[Farming] No growth data for {:?}; tile ({}, {}) stays bare", kind, tile.row, tile.col),
                }
            }
        }
        grid.recompute_variants();
        Ok(grid)
    }

    pub fn snapshot(&self) -> SoilSnapshot {
        (0..self.rows)
            .map(|row| {
                (0..self.cols)
                    .map(|col| self.cells[row * self.cols + col].tokens())
                    .collect()
            })
            .collect()
    }

    // ── Queries ──────────────────────────────────────────────────────────────

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn index(&self, tile: TilePos) -> Option<usize> {
        (tile.row < self.rows && tile.col < self.cols).then(|| tile.row * self.cols + tile.col)
    }

    /// Tile under a simulation-space point, if it lies on the grid.
    pub fn tile_at(&self, point: Vec2) -> Option<TilePos> {
        let (row, col) = point_to_tile(point);
        if row < 0 || col < 0 {
            return None;
        }
        let tile = TilePos::new(row as usize, col as usize);
        self.index(tile).map(|_| tile)
    }

    pub fn cell(&self, tile: TilePos) -> Option<&SoilCell> {
        self.index(tile).map(|i| &self.cells[i])
    }

    fn cell_mut(&mut self, tile: TilePos) -> Option<&mut SoilCell> {
        let i = self.index(tile)?;
        Some(&mut self.cells[i])
    }

    fn is_tilled_at(&self, row: i64, col: i64) -> bool {
        if row < 0 || col < 0 {
            return false;
        }
        self.cell(TilePos::new(row as usize, col as usize))
            .is_some_and(|c| c.tilled)
    }

    pub fn is_watered(&self, point: Vec2) -> bool {
        self.tile_at(point)
            .and_then(|tile| self.cell(tile))
            .is_some_and(|c| c.watered)
    }

    pub fn variant(&self, tile: TilePos) -> Option<TileVariant> {
        self.variants.get(&tile).copied()
    }

    pub fn variants(&self) -> impl Iterator<Item = (TilePos, TileVariant)> + '_ {
        self.variants.iter().map(|(&t, &v)| (t, v))
    }

    pub fn water_overlays(&self) -> impl Iterator<Item = (TilePos, u8)> + '_ {
        self.water_overlays.iter().map(|(&t, &v)| (t, v))
    }

    pub fn plants(&self) -> impl Iterator<Item = &Plant> {
        self.plants.values()
    }

    pub fn plant_at(&self, tile: TilePos) -> Option<&Plant> {
        self.plants.get(&tile)
    }

    /// Bounds of every farmable tile.
    pub fn farmable_rects(&self) -> impl Iterator<Item = Rect> + '_ {
        self.cells.iter().enumerate().filter(|(_, c)| c.farmable).map(|(i, _)| {
            TilePos::new(i / self.cols, i % self.cols).rect()
        })
    }

    pub fn raining(&self) -> bool {
        self.raining
    }

    pub fn set_raining(&mut self, raining: bool) {
        self.raining = raining;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    // ── Mutations ────────────────────────────────────────────────────────────

    /// Hoe the farmable tile under `point`. Returns true if the tile changed.
    pub fn till(&mut self, point: Vec2) -> bool {
        let Some(tile) = self.tile_at(point) else { return false };
        let raining = self.raining;
        let Some(cell) = self.cell_mut(tile) else { return false };
        if !cell.farmable || cell.tilled {
            return false;
        }
        cell.tilled = true;
        if raining {
            cell.watered = true;
            self.add_overlay(tile);
        }
        self.recompute_variants();
        self.dirty = true;
        true
    }

    /// Wet the tilled, dry tile under `point`. Returns true if the tile changed.
    pub fn water(&mut self, point: Vec2) -> bool {
        let Some(tile) = self.tile_at(point) else { return false };
        let Some(cell) = self.cell_mut(tile) else { return false };
        if !cell.tilled || cell.watered {
            return false;
        }
        cell.watered = true;
        self.add_overlay(tile);
        self.dirty = true;
        true
    }

    /// Wet every tilled tile. Returns how many tiles were dry before.
    pub fn water_all(&mut self) -> usize {
        let mut newly_watered = Vec::new();
        for (i, cell) in self.cells.iter_mut().enumerate() {
            if cell.tilled && !cell.watered {
                cell.watered = true;
                newly_watered.push(TilePos::new(i / self.cols, i % self.cols));
            }
        }
        for &tile in &newly_watered {
            self.add_overlay(tile);
        }
        self.dirty = true;
        newly_watered.len()
    }

    /// Dry out the whole grid.
    pub fn remove_water(&mut self) {
        for cell in &mut self.cells {
            cell.watered = false;
        }
        self.water_overlays.clear();
        self.dirty = true;
    }

    /// Put a new plant on the tilled, empty tile under `point`.
    pub fn plant(&mut self, point: Vec2, def: &CropDef) -> bool {
        let Some(tile) = self.tile_at(point) else { return false };
        let Some(cell) = self.cell_mut(tile) else { return false };
        if !cell.tilled || cell.crop.is_some() {
            return false;
        }
        cell.crop = Some(def.kind);
        self.plants.insert(tile, Plant::new(def, tile));
        self.dirty = true;
        true
    }

    /// Pick the ripe plant on `tile`, clearing its crop flag.
    pub fn harvest(&mut self, tile: TilePos) -> Option<CropKind> {
        if !self.plants.get(&tile)?.harvestable() {
            return None;
        }
        let plant = self.plants.remove(&tile)?;
        if let Some(cell) = self.cell_mut(tile) {
            cell.crop = None;
        }
        self.dirty = true;
        Some(plant.kind)
    }

    /// Tiles of ripe plants whose sprite overlaps `rect`.
    pub fn ripe_plants_touching(&self, rect: Rect) -> Vec<TilePos> {
        self.plants
            .values()
            .filter(|p| p.harvestable() && rects_overlap(p.rect(), rect))
            .map(|p| p.tile)
            .collect()
    }

    /// Advance every plant by one night, using each tile's watered flag.
    pub fn grow_plants(&mut self) {
        let cells = &self.cells;
        let cols = self.cols;
        for (tile, plant) in self.plants.iter_mut() {
            let watered = cells[tile.row * cols + tile.col].watered;
            plant.grow(watered);
        }
    }

    /// Collision boxes of plants that currently block movement.
    pub fn plant_hitboxes(&self, rigid: bool) -> impl Iterator<Item = Rect> + '_ {
        self.plants.values().filter_map(move |p| p.hitbox(rigid))
    }

    fn add_overlay(&mut self, tile: TilePos) {
        let variant = rand::thread_rng().gen_range(0..WATER_OVERLAY_VARIANTS);
        self.water_overlays.insert(tile, variant);
    }

    fn recompute_variants(&mut self) {
        self.variants.clear();
        for i in 0..self.cells.len() {
            if !self.cells[i].tilled {
                continue;
            }
            let (row, col) = ((i / self.cols) as i64, (i % self.cols) as i64);
            let n = Neighbours {
                top: self.is_tilled_at(row - 1, col),
                bottom: self.is_tilled_at(row + 1, col),
                left: self.is_tilled_at(row, col - 1),
                right: self.is_tilled_at(row, col + 1),
                top_left: self.is_tilled_at(row - 1, col - 1),
                top_right: self.is_tilled_at(row - 1, col + 1),
                bottom_left: self.is_tilled_at(row + 1, col - 1),
                bottom_right: self.is_tilled_at(row + 1, col + 1),
            };
            self.variants
                .insert(TilePos::new(row as usize, col as usize), classify(n));
        }
    }
}
