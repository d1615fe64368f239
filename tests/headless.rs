//! Headless integration tests for Cozy Acres.
//!
//! These tests drive the real domain plugins without a window or GPU.
//! They use Bevy's `MinimalPlugins` with a fixed 100 ms step, write
//! `PlayerInput` directly (there is no keyboard), and check the game's
//! loops end to end: startup, tools, seeds, harvest, sleep and the shop.
//!
//! Run with: `cargo test --test headless`

use std::path::Path;
use std::time::Duration;

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;

use cozy_acres::animals::{Cow, CowActivity};
use cozy_acres::config::GameConfig;
use cozy_acres::farming::events_handler::end_day;
use cozy_acres::farming::soil::SoilGrid;
use cozy_acres::player::PlayerController;
use cozy_acres::save::{SaveFailedEvent, SaveFile, SOIL_FILE};
use cozy_acres::world::draw::DrawSprite;
use cozy_acres::shared::*;
use cozy_acres::{animals, audio, calendar, data, economy, farming, input, player, save, world};

// ─────────────────────────────────────────────────────────────────────────────
// Test App Builder
// ─────────────────────────────────────────────────────────────────────────────

/// Every gameplay plugin, with saves going to `save_dir` and time advancing
/// exactly 100 ms per update.
fn build_test_app(save_dir: &Path) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins(StatesPlugin);
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(100)));

    app.init_state::<GameState>();

    app.insert_resource(GameConfig {
        save_dir: save_dir.to_path_buf(),
        ..GameConfig::default()
    })
    .init_resource::<CropRegistry>()
    .init_resource::<PriceList>();

    // ── Shared Events (mirrors main.rs) ──────────────────────────────────
    app.add_event::<ToolUseEvent>()
        .add_event::<PlantSeedEvent>()
        .add_event::<SeedPlantedEvent>()
        .add_event::<CropHarvestedEvent>()
        .add_event::<ItemPickupEvent>()
        .add_event::<PlaySfxEvent>()
        .add_event::<SleepStartEvent>()
        .add_event::<WakeUpEvent>()
        .add_event::<DayEndEvent>();

    app.add_plugins((
        input::InputPlugin,
        data::DataPlugin,
        world::WorldPlugin,
        calendar::CalendarPlugin,
        player::PlayerPlugin,
        farming::FarmingPlugin,
        animals::AnimalPlugin,
        economy::EconomyPlugin,
        save::SavePlugin,
        audio::SfxPlugin,
    ));

    app
}

/// Run until loading has finished and the world is spawned.
fn start(app: &mut App) {
    for _ in 0..5 {
        app.update();
        if *app.world().resource::<State<GameState>>().get() == GameState::Playing {
            break;
        }
    }
    app.update();
}

fn run(app: &mut App, updates: usize) {
    for _ in 0..updates {
        app.update();
    }
}

/// Feed one frame of input, then release every key.
fn press(app: &mut App, input: PlayerInput) {
    *app.world_mut().resource_mut::<PlayerInput>() = input;
    app.update();
    *app.world_mut().resource_mut::<PlayerInput>() = PlayerInput::default();
}

fn player_entity(app: &mut App) -> Entity {
    let mut query = app.world_mut().query_filtered::<Entity, With<Player>>();
    query.single(app.world())
}

fn teleport_player(app: &mut App, pos: Vec2) {
    let entity = player_entity(app);
    let mut player = app.world_mut().entity_mut(entity);
    if let Some(mut actor) = player.get_mut::<Actor>() {
        actor.pos = pos;
        actor.direction = Vec2::ZERO;
    }
    if let Some(mut hitbox) = player.get_mut::<Hitbox>() {
        hitbox.recenter(pos);
    }
}

fn set_facing(app: &mut App, facing: Facing) {
    let entity = player_entity(app);
    if let Some(mut ctrl) = app.world_mut().entity_mut(entity).get_mut::<PlayerController>() {
        ctrl.status.facing = facing;
    }
}

/// A farmable tile in the built-in map, and a player position whose
/// downward tool target lands on it.
fn field_tile() -> (TilePos, Vec2) {
    let tile = TilePos::new(16, 22);
    let pos = tile.center() - Facing::Down.tool_offset();
    (tile, pos)
}

fn count<T: Component>(app: &mut App) -> usize {
    let mut query = app.world_mut().query::<&T>();
    query.iter(app.world()).count()
}

// ─────────────────────────────────────────────────────────────────────────────
// Startup
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_startup_builds_the_farm() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = build_test_app(dir.path());
    start(&mut app);

    assert_eq!(
        *app.world().resource::<State<GameState>>().get(),
        GameState::Playing
    );
    assert_eq!(app.world().resource::<CropRegistry>().crops.len(), 2);
    assert_eq!(app.world().resource::<PriceList>().sale.len(), 4);

    let grid = app.world().resource::<SoilGrid>();
    assert!(grid.farmable_rects().count() > 0);
    assert_eq!(grid.plants().count(), 0);

    assert_eq!(count::<Player>(&mut app), 1);
    assert_eq!(count::<Cow>(&mut app), 2);
    assert_eq!(count::<InteractionZone>(&mut app), 2);

    let inventory = app.world().resource::<Inventory>();
    assert_eq!(inventory.money, Inventory::STARTING_MONEY);
    assert_eq!(inventory.seed_count(CropKind::Corn), Inventory::STARTING_SEEDS);

    let drawn = app.world().resource::<DrawList>().items.len();
    assert!(drawn > 0);
    assert!(count::<DrawSprite>(&mut app) >= drawn);
}

// ─────────────────────────────────────────────────────────────────────────────
// Tools and seeds
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_hoe_swing_tills_after_the_tool_timer() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = build_test_app(dir.path());
    start(&mut app);

    let (tile, pos) = field_tile();
    teleport_player(&mut app, pos);
    set_facing(&mut app, Facing::Down);

    press(&mut app, PlayerInput { tool_use: true, ..default() });
    // mid-swing: nothing yet
    run(&mut app, 3);
    assert!(!app.world().resource::<SoilGrid>().cell(tile).is_some_and(|c| c.tilled));

    run(&mut app, 7);
    assert!(app.world().resource::<SoilGrid>().cell(tile).is_some_and(|c| c.tilled));

    // the tick after the change flushed the grid to disk
    run(&mut app, 1);
    let saved = std::fs::read_to_string(dir.path().join(SOIL_FILE)).unwrap();
    assert!(saved.contains("\"X\""));
}

#[test]
fn test_planting_uses_one_seed() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = build_test_app(dir.path());
    start(&mut app);

    let (tile, pos) = field_tile();
    app.world_mut()
        .resource_mut::<SoilGrid>()
        .till(tile.center());
    teleport_player(&mut app, pos);
    set_facing(&mut app, Facing::Down);

    press(&mut app, PlayerInput { seed_use: true, ..default() });
    run(&mut app, 5);

    let grid = app.world().resource::<SoilGrid>();
    assert_eq!(grid.plant_at(tile).map(|p| p.kind), Some(CropKind::Corn));
    let inventory = app.world().resource::<Inventory>();
    assert_eq!(inventory.seed_count(CropKind::Corn), Inventory::STARTING_SEEDS - 1);

    // the tile is taken now; a second attempt keeps the seed
    press(&mut app, PlayerInput { seed_use: true, ..default() });
    run(&mut app, 5);
    let inventory = app.world().resource::<Inventory>();
    assert_eq!(inventory.seed_count(CropKind::Corn), Inventory::STARTING_SEEDS - 1);
}

#[test]
fn test_player_ignores_input_while_swinging() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = build_test_app(dir.path());
    start(&mut app);

    let (_, pos) = field_tile();
    teleport_player(&mut app, pos);

    press(&mut app, PlayerInput { tool_use: true, ..default() });
    *app.world_mut().resource_mut::<PlayerInput>() = PlayerInput {
        move_axis: Vec2::new(1.0, 0.0),
        ..default()
    };
    run(&mut app, 3);

    let entity = player_entity(&mut app);
    let actor = app.world().entity(entity).get::<Actor>().unwrap();
    assert_eq!(actor.pos, pos);
}

// ─────────────────────────────────────────────────────────────────────────────
// Harvest
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_walking_into_ripe_corn_harvests_it() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = build_test_app(dir.path());
    start(&mut app);

    let (tile, _) = field_tile();
    grow_ripe_corn(&mut app, tile);

    teleport_player(&mut app, tile.center());
    run(&mut app, 2);

    assert!(app.world().resource::<SoilGrid>().plant_at(tile).is_none());
    assert_eq!(app.world().resource::<Inventory>().item_count(ItemKind::Corn), 1);
    assert_eq!(count::<FlashEffect>(&mut app), 1);

    // the flash fades after 200 ms
    run(&mut app, 2);
    assert_eq!(count::<FlashEffect>(&mut app), 0);
}

/// Till, plant and ripen corn on `tile` without going through the player.
fn grow_ripe_corn(app: &mut App, tile: TilePos) {
    let registry = app.world().resource::<CropRegistry>().clone();
    let mut grid = app.world_mut().resource_mut::<SoilGrid>();
    assert!(grid.till(tile.center()));
    assert!(grid.plant(tile.center(), &registry.crops[&CropKind::Corn]));
    for _ in 0..6 {
        end_day(&mut grid, true);
    }
    assert!(grid.plant_at(tile).is_some_and(|p| p.harvestable()));
}

#[test]
fn test_walking_cow_stops_at_ripe_crop() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = build_test_app(dir.path());
    start(&mut app);

    let (tile, _) = field_tile();
    grow_ripe_corn(&mut app, tile);
    let crop = app
        .world()
        .resource::<SoilGrid>()
        .plant_hitboxes(false)
        .next()
        .unwrap();

    // a cow to the left of the crop, level with it, walking right
    let cow = {
        let mut query = app.world_mut().query_filtered::<Entity, With<Cow>>();
        query.iter(app.world()).next().unwrap()
    };
    let start_pos = Vec2::new(crop.min.x - 150.0, crop.center().y - COW_Y_OFFSET);
    {
        let mut entity = app.world_mut().entity_mut(cow);
        if let Some(mut state) = entity.get_mut::<Cow>() {
            state.activity = CowActivity::Walk;
            state.status_timer.activate();
        }
        if let Some(mut actor) = entity.get_mut::<Actor>() {
            actor.pos = start_pos;
            actor.direction = Vec2::X;
        }
        if let Some(mut hitbox) = entity.get_mut::<Hitbox>() {
            hitbox.recenter(start_pos);
        }
    }

    // 4 s at 50 px/s would carry it well past the crop
    run(&mut app, 40);

    let hitbox = *app.world().entity(cow).get::<Hitbox>().unwrap();
    assert!((hitbox.rect.max.x - crop.min.x).abs() < 1e-3);
    assert!(app.world().resource::<SoilGrid>().plant_at(tile).is_some());
}

// ─────────────────────────────────────────────────────────────────────────────
// Sleep and day end
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_sleeping_ends_the_day() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = build_test_app(dir.path());
    start(&mut app);

    let bed = {
        let mut query = app.world_mut().query::<&InteractionZone>();
        query
            .iter(app.world())
            .find(|z| z.kind == InteractionKind::Bed)
            .map(|z| z.rect.center())
            .unwrap()
    };
    teleport_player(&mut app, bed);
    press(&mut app, PlayerInput { interact: true, ..default() });

    let entity = player_entity(&mut app);
    let ctrl = app.world().entity(entity).get::<PlayerController>().unwrap();
    assert!(ctrl.sleeping);
    assert_eq!(ctrl.status.facing, Facing::Left);

    // fade out, day end, fade in
    run(&mut app, 50);

    assert_eq!(app.world().resource::<Calendar>().day, 2);
    assert_eq!(app.world().resource::<DayNightTint>().fade, 255.0);
    let ctrl = app.world().entity(entity).get::<PlayerController>().unwrap();
    assert!(!ctrl.sleeping);
    assert!(dir.path().join("inventory.json").exists());
}

// ─────────────────────────────────────────────────────────────────────────────
// Shop
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_shop_sells_and_saves_on_close() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = build_test_app(dir.path());
    start(&mut app);

    app.world_mut()
        .resource_mut::<Inventory>()
        .add_item(ItemKind::Wood, 2);
    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(GameState::Shop);
    run(&mut app, 1);
    assert_eq!(*app.world().resource::<State<GameState>>().get(), GameState::Shop);

    // let the opening cooldown run out
    run(&mut app, 3);
    press(&mut app, PlayerInput { ui_confirm: true, ..default() });

    let inventory = app.world().resource::<Inventory>();
    assert_eq!(inventory.item_count(ItemKind::Wood), 1);
    assert_eq!(inventory.money, Inventory::STARTING_MONEY + 4);

    press(&mut app, PlayerInput { ui_cancel: true, ..default() });
    run(&mut app, 1);
    assert_eq!(
        *app.world().resource::<State<GameState>>().get(),
        GameState::Playing
    );
    let saved = std::fs::read_to_string(dir.path().join("inventory.json")).unwrap();
    assert!(saved.contains("\"money\": 29"));
}

#[test]
fn test_gameplay_pauses_behind_the_inventory_screen() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = build_test_app(dir.path());
    start(&mut app);

    press(&mut app, PlayerInput { toggle_inventory: true, ..default() });
    run(&mut app, 1);
    assert_eq!(
        *app.world().resource::<State<GameState>>().get(),
        GameState::Inventory
    );

    let entity = player_entity(&mut app);
    let before = app.world().entity(entity).get::<Actor>().unwrap().pos;
    *app.world_mut().resource_mut::<PlayerInput>() = PlayerInput {
        move_axis: Vec2::new(0.0, 1.0),
        ..default()
    };
    run(&mut app, 5);
    let after = app.world().entity(entity).get::<Actor>().unwrap().pos;
    assert_eq!(before, after);
}

// ─────────────────────────────────────────────────────────────────────────────
// Persistence across sessions
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_tilled_soil_survives_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let (tile, _) = field_tile();
    {
        let mut app = build_test_app(dir.path());
        start(&mut app);
        assert!(app.world_mut().resource_mut::<SoilGrid>().till(tile.center()));
        run(&mut app, 1);
    }

    let mut app = build_test_app(dir.path());
    start(&mut app);
    let grid = app.world().resource::<SoilGrid>();
    assert!(grid.cell(tile).is_some_and(|c| c.tilled));
}

#[test]
fn test_failed_soil_write_keeps_the_grid_dirty() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not_a_dir");
    std::fs::write(&blocker, "x").unwrap();
    let mut app = build_test_app(&blocker);
    start(&mut app);

    let (tile, _) = field_tile();
    assert!(app.world_mut().resource_mut::<SoilGrid>().till(tile.center()));
    run(&mut app, 1);

    let events = app.world().resource::<Events<SaveFailedEvent>>();
    assert!(events
        .iter_current_update_events()
        .any(|e| e.file == SaveFile::Soil));
    assert!(app.world().resource::<SoilGrid>().is_dirty());

    // still retried, but the streak is reported once
    run(&mut app, 1);
    assert_eq!(app.world().resource::<Events<SaveFailedEvent>>().len(), 1);
    assert!(app.world().resource::<SoilGrid>().is_dirty());
}
