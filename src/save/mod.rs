//! Save domain: persists the soil grid and the inventory as JSON.
//!
//! - `soil.json` is rewritten at the end of any tick that changed the field.
//! - `inventory.json` is rewritten at day end and whenever the shop closes.
//!
//! Both files are written to a temp file first and renamed into place.

use bevy::prelude::*;
use rand::Rng;
use serde::{de::DeserializeOwned, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::GameConfig;
use crate::farming::soil::{LoadError, SoilGrid, SoilSnapshot};
use crate::shared::*;
use crate::world::map::MapData;

pub const SOIL_FILE: &str = "soil.json";
pub const INVENTORY_FILE: &str = "inventory.json";
/// Upper bound of the random item stacks a `start_items` game begins with.
pub const START_ITEMS_MAX: u32 = 20;

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("cannot write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot serialize save data: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveFile {
    Soil,
    Inventory,
}

/// A write failed; the data stays in memory and is retried later.
#[derive(Event, Debug, Clone)]
pub struct SaveFailedEvent {
    pub file: SaveFile,
    pub message: String,
}

// ═══════════════════════════════════════════════════════════════════════
// PLUGIN
// ═══════════════════════════════════════════════════════════════════════

pub struct SavePlugin;

impl Plugin for SavePlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<SaveFailedEvent>()
            .add_systems(OnExit(GameState::Loading), restore_game)
            .add_systems(
                PostUpdate,
                flush_soil
                    .run_if(resource_exists::<SoilGrid>)
                    .run_if(resource_exists::<SaveStores>),
            )
            .add_systems(
                Update,
                save_inventory_on_day_end.run_if(resource_exists::<SaveStores>),
            )
            .add_systems(
                OnExit(GameState::Shop),
                save_inventory.run_if(resource_exists::<SaveStores>),
            );
    }
}

// ═══════════════════════════════════════════════════════════════════════
// FILESYSTEM HELPERS
// ═══════════════════════════════════════════════════════════════════════

/// Serialize `value` to `path` through a sibling temp file.
pub fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> Result<(), SaveError> {
    let json = serde_json::to_string_pretty(value)?;
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|source| SaveError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, json).map_err(|source| SaveError::Io {
        path: tmp_path.clone(),
        source,
    })?;
    fs::rename(&tmp_path, path).map_err(|source| SaveError::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    if !path.exists() {
        return Err(LoadError::Missing(path.display().to_string()));
    }
    let json = fs::read_to_string(path)?;
    if json.trim().is_empty() {
        return Err(LoadError::Empty);
    }
    Ok(serde_json::from_str(&json)?)
}

// ═══════════════════════════════════════════════════════════════════════
// STORES
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoilStore {
    pub path: PathBuf,
}

impl SoilStore {
    pub fn load(&self, rows: usize, cols: usize, crops: &CropRegistry) -> Result<SoilGrid, LoadError> {
        let snapshot: SoilSnapshot = read_json(&self.path)?;
        SoilGrid::from_snapshot(&snapshot, rows, cols, crops)
    }

    pub fn save(&self, grid: &SoilGrid) -> Result<(), SaveError> {
        write_json_atomic(&self.path, &grid.snapshot())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryStore {
    pub path: PathBuf,
}

impl InventoryStore {
    pub fn load(&self) -> Result<Inventory, LoadError> {
        read_json(&self.path)
    }

    pub fn save(&self, inventory: &Inventory) -> Result<(), SaveError> {
        write_json_atomic(&self.path, inventory)
    }
}

#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct SaveStores {
    pub soil: SoilStore,
    pub inventory: InventoryStore,
}

impl SaveStores {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            soil: SoilStore {
                path: dir.join(SOIL_FILE),
            },
            inventory: InventoryStore {
                path: dir.join(INVENTORY_FILE),
            },
        }
    }
}

/// Inventory for a brand-new game.
pub fn new_inventory(start_items: bool, rng: &mut impl Rng) -> Inventory {
    let mut inventory = Inventory::starting(0);
    if start_items {
        for item in ItemKind::ALL {
            inventory.add_item(item, rng.gen_range(0..=START_ITEMS_MAX));
        }
    }
    inventory
}

/// Restored grid, or a fresh one built from the map when there is nothing
/// usable on disk.
pub fn restore_soil(store: &SoilStore, map: &MapData, crops: &CropRegistry) -> SoilGrid {
    match store.load(map.rows, map.cols, crops) {
        Ok(grid) => {
            info!(
                "[Save] Restored soil from {} ({} plants)",
                store.path.display(),
                grid.plants().count()
            );
            grid
        }
        Err(LoadError::Missing(_)) => {
            info!("[Save] No saved soil; starting a fresh field");
            SoilGrid::from_map(map.rows, map.cols, &map.farmable)
        }
        Err(e) => {
            warn!("[Save] {}; starting a fresh field", e);
            SoilGrid::from_map(map.rows, map.cols, &map.farmable)
        }
    }
}

pub fn restore_inventory(store: &InventoryStore, config: &GameConfig) -> Inventory {
    match store.load() {
        Ok(inventory) => {
            info!("[Save] Restored inventory with ${}", inventory.money);
            inventory
        }
        Err(LoadError::Missing(_)) => {
            info!("[Save] New game");
            new_inventory(config.start_items, &mut rand::thread_rng())
        }
        Err(e) => {
            warn!("[Save] {}; starting with a new inventory", e);
            new_inventory(config.start_items, &mut rand::thread_rng())
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// SYSTEMS
// ═══════════════════════════════════════════════════════════════════════

fn restore_game(
    mut commands: Commands,
    config: Res<GameConfig>,
    map: Res<MapData>,
    crops: Res<CropRegistry>,
    weather: Res<Weather>,
) {
    let stores = SaveStores::in_dir(&config.save_dir);

    let mut grid = restore_soil(&stores.soil, &map, &crops);
    grid.set_raining(weather.raining);
    commands.insert_resource(grid);

    commands.insert_resource(restore_inventory(&stores.inventory, &config));
    commands.insert_resource(stores);
}

/// One write per tick at most; a failed write leaves the grid dirty so the
/// next tick tries again. Only the first failure of a streak is reported.
fn flush_soil(
    mut grid: ResMut<SoilGrid>,
    stores: Res<SaveStores>,
    mut failing: Local<bool>,
    mut failures: EventWriter<SaveFailedEvent>,
) {
    if !grid.is_dirty() {
        return;
    }
    match stores.soil.save(&grid) {
        Ok(()) => {
            grid.mark_clean();
            if *failing {
                info!("[Save] Soil written again after earlier failures");
                *failing = false;
            }
        }
        Err(e) if *failing => debug!("[Save] Still failing: {}", e),
        Err(e) => {
            error!("[Save] {}; retrying every tick", e);
            *failing = true;
            failures.send(SaveFailedEvent {
                file: SaveFile::Soil,
                message: e.to_string(),
            });
        }
    }
}

fn write_inventory(
    stores: &SaveStores,
    inventory: &Inventory,
    failures: &mut EventWriter<SaveFailedEvent>,
) {
    match stores.inventory.save(inventory) {
        Ok(()) => debug!("[Save] Inventory written"),
        Err(e) => {
            error!("[Save] {}", e);
            failures.send(SaveFailedEvent {
                file: SaveFile::Inventory,
                message: e.to_string(),
            });
        }
    }
}

fn save_inventory_on_day_end(
    mut events: EventReader<DayEndEvent>,
    stores: Res<SaveStores>,
    inventory: Res<Inventory>,
    mut failures: EventWriter<SaveFailedEvent>,
) {
    if events.read().last().is_some() {
        write_inventory(&stores, &inventory, &mut failures);
    }
}

fn save_inventory(
    stores: Res<SaveStores>,
    inventory: Res<Inventory>,
    mut failures: EventWriter<SaveFailedEvent>,
) {
    write_inventory(&stores, &inventory, &mut failures);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::crops::default_registry;
    use rand::{rngs::StdRng, SeedableRng};

    fn small_map() -> MapData {
        let mut map = MapData::default_farm();
        map.rows = 4;
        map.cols = 5;
        map.farmable = vec![TilePos::new(1, 1), TilePos::new(1, 2), TilePos::new(2, 2)];
        map
    }

    #[test]
    fn soil_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let stores = SaveStores::in_dir(dir.path());
        let map = small_map();
        let crops = default_registry();

        let mut grid = SoilGrid::from_map(map.rows, map.cols, &map.farmable);
        let point = TilePos::new(1, 2).center();
        assert!(grid.till(point));
        assert!(grid.water(point));
        assert!(grid.plant(point, &crops.crops[&CropKind::Corn]));
        stores.soil.save(&grid).unwrap();

        let restored = stores.soil.load(map.rows, map.cols, &crops).unwrap();
        assert_eq!(restored.snapshot(), grid.snapshot());
        assert_eq!(restored.plants().count(), 1);
        assert!(!dir.path().join("soil.json.tmp").exists());
    }

    #[test]
    fn missing_soil_starts_fresh() {
        let dir = tempfile::tempdir().unwrap();
        let stores = SaveStores::in_dir(dir.path());
        let map = small_map();

        let err = stores.soil.load(map.rows, map.cols, &default_registry());
        assert!(matches!(err, Err(LoadError::Missing(_))));

        let grid = restore_soil(&stores.soil, &map, &default_registry());
        assert_eq!(grid.farmable_rects().count(), 3);
        assert!(!grid.is_dirty());
    }

    #[test]
    fn corrupt_soil_falls_back_to_map() {
        let dir = tempfile::tempdir().unwrap();
        let stores = SaveStores::in_dir(dir.path());
        fs::write(&stores.soil.path, "[[[\"F\"], ").unwrap();
        let map = small_map();

        assert!(matches!(
            stores.soil.load(map.rows, map.cols, &default_registry()),
            Err(LoadError::Malformed(_))
        ));
        let grid = restore_soil(&stores.soil, &map, &default_registry());
        assert_eq!(grid.rows(), 4);
        assert_eq!(grid.cols(), 5);
    }

    #[test]
    fn wrong_sized_soil_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let stores = SaveStores::in_dir(dir.path());
        let other = SoilGrid::from_map(2, 2, &[TilePos::new(0, 0)]);
        stores.soil.save(&other).unwrap();

        let map = small_map();
        assert!(matches!(
            stores.soil.load(map.rows, map.cols, &default_registry()),
            Err(LoadError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn inventory_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let stores = SaveStores::in_dir(dir.path());
        let mut inventory = Inventory::starting(3);
        inventory.money = 99;
        inventory.add_seed(CropKind::Tomato, 2);
        stores.inventory.save(&inventory).unwrap();

        assert_eq!(stores.inventory.load().unwrap(), inventory);
    }

    #[test]
    fn write_into_a_file_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not_a_dir");
        fs::write(&blocker, "x").unwrap();
        let stores = SaveStores::in_dir(&blocker);

        let grid = SoilGrid::from_map(2, 2, &[TilePos::new(0, 0)]);
        assert!(matches!(stores.soil.save(&grid), Err(SaveError::Io { .. })));
    }

    #[test]
    fn new_game_inventory() {
        let mut rng = StdRng::seed_from_u64(5);
        let plain = new_inventory(false, &mut rng);
        assert_eq!(plain, Inventory::starting(0));

        let stocked = new_inventory(true, &mut rng);
        assert_eq!(stocked.money, Inventory::STARTING_MONEY);
        assert!(ItemKind::ALL
            .iter()
            .all(|&k| stocked.item_count(k) <= START_ITEMS_MAX));
        assert_eq!(stocked.seed_count(CropKind::Corn), Inventory::STARTING_SEEDS);
    }
}
