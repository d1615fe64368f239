//! Shared components, resources, events, and states for Cozy Acres.
//!
//! This is the type contract. Every domain plugin imports from here.
//! No domain imports from any other domain directly.
//!
//! Simulation space is measured in pixels with the origin at the top-left of
//! the map and +y pointing down, so tile `(row, col)` covers
//! `[col * TILE_SIZE, (col + 1) * TILE_SIZE) × [row * TILE_SIZE, (row + 1) * TILE_SIZE)`.
//! Only the render glue flips y for Bevy's y-up world.

pub mod timer;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

pub use timer::{ActionTimer, TimerAction};

// ═══════════════════════════════════════════════════════════════════════
// GAME STATE
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, States, Default)]
pub enum GameState {
    #[default]
    Loading,
    Playing,
    Shop,
    Inventory,
}

// ═══════════════════════════════════════════════════════════════════════
// GRID
// ═══════════════════════════════════════════════════════════════════════

/// A cell address inside the soil grid. Always in bounds of the grid that
/// produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TilePos {
    pub row: usize,
    pub col: usize,
}

impl TilePos {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Top-left corner of the tile in simulation space.
    pub fn top_left(self) -> Vec2 {
        Vec2::new(self.col as f32 * TILE_SIZE, self.row as f32 * TILE_SIZE)
    }

    pub fn rect(self) -> Rect {
        let min = self.top_left();
        Rect::from_corners(min, min + Vec2::splat(TILE_SIZE))
    }

    pub fn center(self) -> Vec2 {
        self.top_left() + Vec2::splat(TILE_SIZE * 0.5)
    }

    /// Middle of the tile's bottom edge.
    pub fn mid_bottom(self) -> Vec2 {
        self.top_left() + Vec2::new(TILE_SIZE * 0.5, TILE_SIZE)
    }
}

/// Convert a simulation-space point into signed tile coordinates `(row, col)`.
/// The result may lie outside any grid; callers bounds-check it.
pub fn point_to_tile(point: Vec2) -> (i64, i64) {
    (
        (point.y / TILE_SIZE).floor() as i64,
        (point.x / TILE_SIZE).floor() as i64,
    )
}

/// One of the 20 tilled-soil sprites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileVariant {
    O,
    X,
    L,
    R,
    LR,
    T,
    B,
    TB,
    TL,
    TR,
    BL,
    BR,
    TBL,
    TBR,
    TLR,
    BLR,
    TM,
    BM,
    LM,
    RM,
}

impl TileVariant {
    pub const ALL: [TileVariant; 20] = [
        TileVariant::O,
        TileVariant::X,
        TileVariant::L,
        TileVariant::R,
        TileVariant::LR,
        TileVariant::T,
        TileVariant::B,
        TileVariant::TB,
        TileVariant::TL,
        TileVariant::TR,
        TileVariant::BL,
        TileVariant::BR,
        TileVariant::TBL,
        TileVariant::TBR,
        TileVariant::TLR,
        TileVariant::BLR,
        TileVariant::TM,
        TileVariant::BM,
        TileVariant::LM,
        TileVariant::RM,
    ];

    /// Sprite file stem.
    pub fn name(self) -> &'static str {
        match self {
            TileVariant::O => "o",
            TileVariant::X => "x",
            TileVariant::L => "l",
            TileVariant::R => "r",
            TileVariant::LR => "lr",
            TileVariant::T => "t",
            TileVariant::B => "b",
            TileVariant::TB => "tb",
            TileVariant::TL => "tl",
            TileVariant::TR => "tr",
            TileVariant::BL => "bl",
            TileVariant::BR => "br",
            TileVariant::TBL => "tbl",
            TileVariant::TBR => "tbr",
            TileVariant::TLR => "tlr",
            TileVariant::BLR => "blr",
            TileVariant::TM => "tm",
            TileVariant::BM => "bm",
            TileVariant::LM => "lm",
            TileVariant::RM => "rm",
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// DRAW LAYERS
// ═══════════════════════════════════════════════════════════════════════

/// Depth layers, back to front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DrawLayer {
    Water,
    Ground,
    Soil,
    SoilWater,
    HouseBottom,
    GroundPlant,
    Main,
    Fruit,
}

// ═══════════════════════════════════════════════════════════════════════
// ITEMS & CROPS
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CropKind {
    Corn,
    Tomato,
}

impl CropKind {
    pub const ALL: [CropKind; 2] = [CropKind::Corn, CropKind::Tomato];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Wood,
    Apple,
    Corn,
    Tomato,
}

impl ItemKind {
    pub const ALL: [ItemKind; 4] = [ItemKind::Wood, ItemKind::Apple, ItemKind::Corn, ItemKind::Tomato];
}

impl From<CropKind> for ItemKind {
    fn from(crop: CropKind) -> Self {
        match crop {
            CropKind::Corn => ItemKind::Corn,
            CropKind::Tomato => ItemKind::Tomato,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// REGISTRIES (populated by the data domain on entering Loading)
// ═══════════════════════════════════════════════════════════════════════

/// Static growth parameters for one crop.
#[derive(Debug, Clone, PartialEq)]
pub struct CropDef {
    pub kind: CropKind,
    /// Number of growth frames; the last one is the ripe sprite.
    pub frames: usize,
    pub grow_speed: f32,
    /// Vertical nudge applied to the sprite's mid-bottom anchor.
    pub y_offset: f32,
    pub sprite_size: Vec2,
}

impl CropDef {
    pub fn max_age(&self) -> f32 {
        self.frames.saturating_sub(1) as f32
    }
}

#[derive(Resource, Debug, Clone, Default)]
pub struct CropRegistry {
    pub crops: HashMap<CropKind, CropDef>,
}

impl CropRegistry {
    pub fn get(&self, kind: CropKind) -> Option<&CropDef> {
        self.crops.get(&kind)
    }
}

/// What the trader pays for items and charges for seeds.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct PriceList {
    pub sale: BTreeMap<ItemKind, u32>,
    pub purchase: BTreeMap<CropKind, u32>,
}

impl PriceList {
    pub fn sale_price(&self, item: ItemKind) -> Option<u32> {
        self.sale.get(&item).copied()
    }

    pub fn purchase_price(&self, seed: CropKind) -> Option<u32> {
        self.purchase.get(&seed).copied()
    }
}

// ═══════════════════════════════════════════════════════════════════════
// INVENTORY
// ═══════════════════════════════════════════════════════════════════════

/// Harvested items, seeds, and money. Owned by the economy domain; farming
/// only reads seed counts and takes a seed after a successful plant.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    pub items: BTreeMap<ItemKind, u32>,
    pub seeds: BTreeMap<CropKind, u32>,
    pub money: u32,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::starting(0)
    }
}

impl Inventory {
    pub const STARTING_SEEDS: u32 = 5;
    pub const STARTING_MONEY: u32 = 25;

    /// New-game inventory with `start_items` of every item.
    pub fn starting(start_items: u32) -> Self {
        Self {
            items: ItemKind::ALL.iter().map(|&k| (k, start_items)).collect(),
            seeds: CropKind::ALL.iter().map(|&k| (k, Self::STARTING_SEEDS)).collect(),
            money: Self::STARTING_MONEY,
        }
    }

    pub fn item_count(&self, item: ItemKind) -> u32 {
        self.items.get(&item).copied().unwrap_or(0)
    }

    pub fn seed_count(&self, seed: CropKind) -> u32 {
        self.seeds.get(&seed).copied().unwrap_or(0)
    }

    pub fn add_item(&mut self, item: ItemKind, quantity: u32) {
        let entry = self.items.entry(item).or_insert(0);
        *entry = entry.saturating_add(quantity);
    }

    /// Remove one item. Returns false when none are held.
    pub fn take_item(&mut self, item: ItemKind) -> bool {
        match self.items.get_mut(&item) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }

    pub fn add_seed(&mut self, seed: CropKind, quantity: u32) {
        let entry = self.seeds.entry(seed).or_insert(0);
        *entry = entry.saturating_add(quantity);
    }

    /// Remove one seed. Returns false when none are held.
    pub fn take_seed(&mut self, seed: CropKind) -> bool {
        match self.seeds.get_mut(&seed) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// ACTORS
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Facing {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

impl Facing {
    /// Offset from the actor's centre to the point its tools act on.
    pub fn tool_offset(self) -> Vec2 {
        match self {
            Facing::Left => Vec2::new(-50.0, 40.0),
            Facing::Right => Vec2::new(50.0, 40.0),
            Facing::Up => Vec2::new(0.0, -10.0),
            Facing::Down => Vec2::new(0.0, 50.0),
        }
    }

    pub fn index(self) -> usize {
        match self {
            Facing::Up => 0,
            Facing::Down => 1,
            Facing::Left => 2,
            Facing::Right => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToolKind {
    Hoe,
    Axe,
    WateringCan,
}

/// Tool cycling order.
pub const TOOL_ORDER: [ToolKind; 3] = [ToolKind::Hoe, ToolKind::Axe, ToolKind::WateringCan];

/// Seed cycling order.
pub const SEED_ORDER: [CropKind; 2] = [CropKind::Corn, CropKind::Tomato];

/// What the player is doing, combined with `Facing` into a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlayerActivity {
    Walk,
    #[default]
    Idle,
    Tool(ToolKind),
}

impl PlayerActivity {
    pub fn index(self) -> usize {
        match self {
            PlayerActivity::Walk => 0,
            PlayerActivity::Idle => 1,
            PlayerActivity::Tool(ToolKind::Hoe) => 2,
            PlayerActivity::Tool(ToolKind::Axe) => 3,
            PlayerActivity::Tool(ToolKind::WateringCan) => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PlayerStatus {
    pub facing: Facing,
    pub activity: PlayerActivity,
}

/// Animation frames per player status, indexed `[facing][activity]`.
pub const PLAYER_FRAME_COUNTS: [[usize; 5]; 4] = [
    [4, 2, 2, 2, 2],
    [4, 2, 2, 2, 2],
    [4, 2, 2, 2, 2],
    [4, 2, 2, 2, 2],
];

impl PlayerStatus {
    pub fn frame_count(self) -> usize {
        PLAYER_FRAME_COUNTS[self.facing.index()][self.activity.index()]
    }

    /// Frames per second; tool swings animate twice as fast as walking.
    pub fn animation_speed(self) -> f32 {
        match self.activity {
            PlayerActivity::Tool(_) => 8.0,
            _ => 4.0,
        }
    }
}

#[derive(Component, Debug, Clone, Default)]
pub struct Player;

/// Continuous motion state shared by every moving actor.
#[derive(Component, Debug, Clone)]
pub struct Actor {
    /// Centre of the visual rect in simulation space.
    pub pos: Vec2,
    pub direction: Vec2,
    pub speed: f32,
    /// Size of the visual rect.
    pub size: Vec2,
}

impl Actor {
    pub fn new(pos: Vec2, size: Vec2, speed: f32) -> Self {
        Self {
            pos,
            direction: Vec2::ZERO,
            speed,
            size,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_center_size(self.pos, self.size)
    }
}

/// Collision/interaction rectangle, usually smaller than the visual bounds.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Hitbox {
    pub rect: Rect,
    /// Offset of the hitbox centre from the owner's position.
    pub offset: Vec2,
}

impl Hitbox {
    pub fn new(center: Vec2, size: Vec2, offset: Vec2) -> Self {
        Self {
            rect: Rect::from_center_size(center + offset, size),
            offset,
        }
    }

    /// Static hitbox from a visual rect shrunk by `inflate` (negative values shrink).
    pub fn inflated(rect: Rect, inflate: Vec2) -> Self {
        let size = (rect.size() + inflate).max(Vec2::ZERO);
        Self {
            rect: Rect::from_center_size(rect.center(), size),
            offset: Vec2::ZERO,
        }
    }

    pub fn recenter(&mut self, pos: Vec2) {
        let size = self.rect.size();
        self.rect = Rect::from_center_size(pos + self.offset, size);
    }

    /// Owner position implied by the current hitbox placement.
    pub fn owner_pos(&self) -> Vec2 {
        self.rect.center() - self.offset
    }
}

/// Marks an entity whose hitbox blocks moving actors.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Solid;

/// Strict rectangle overlap: rectangles that only share an edge do not overlap.
pub fn rects_overlap(a: Rect, b: Rect) -> bool {
    a.min.x < b.max.x && a.max.x > b.min.x && a.min.y < b.max.y && a.max.y > b.min.y
}

/// Rectangle of `size` whose bottom-middle point sits at `mid_bottom`.
pub fn rect_from_mid_bottom(mid_bottom: Vec2, size: Vec2) -> Rect {
    Rect::from_corners(
        Vec2::new(mid_bottom.x - size.x * 0.5, mid_bottom.y - size.y),
        Vec2::new(mid_bottom.x + size.x * 0.5, mid_bottom.y),
    )
}

// ═══════════════════════════════════════════════════════════════════════
// WORLD OBJECTS
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InteractionKind {
    Trader,
    Bed,
}

/// Zone the player can interact with by pressing the interact key.
#[derive(Component, Debug, Clone, Copy)]
pub struct InteractionZone {
    pub kind: InteractionKind,
    pub rect: Rect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TreeSize {
    Small,
    Large,
}

/// Short white flash left where something was collected.
#[derive(Component, Debug, Clone)]
pub struct FlashEffect {
    pub rect: Rect,
    pub layer: DrawLayer,
    pub timer: ActionTimer,
}

impl FlashEffect {
    pub const DURATION_MS: u64 = 200;

    pub fn new(rect: Rect, layer: DrawLayer) -> Self {
        let mut timer = ActionTimer::new(Self::DURATION_MS);
        timer.activate();
        Self { rect, layer, timer }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// WEATHER & TIME OF DAY
// ═══════════════════════════════════════════════════════════════════════

#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Weather {
    pub raining: bool,
}

/// Current sky colour multiplier (0–255 per channel). Full daylight is white.
/// `fade` dims the whole screen during the sleep transition (255 = none).
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct DayNightTint {
    pub color: Vec3,
    pub fade: f32,
}

impl DayNightTint {
    pub const DAYLIGHT: Vec3 = Vec3::new(255.0, 255.0, 255.0);
    pub const NIGHT: Vec3 = Vec3::new(38.0, 101.0, 189.0);
}

impl Default for DayNightTint {
    fn default() -> Self {
        Self {
            color: Self::DAYLIGHT,
            fade: 255.0,
        }
    }
}

/// Day counter; advanced once per sleep.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calendar {
    pub day: u32,
}

impl Default for Calendar {
    fn default() -> Self {
        Self { day: 1 }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// INPUT
// ═══════════════════════════════════════════════════════════════════════

/// Game actions for the current frame, filled by the input domain.
/// `move_axis` is y-up like the keyboard arrows.
#[derive(Resource, Debug, Clone, Default)]
pub struct PlayerInput {
    pub move_axis: Vec2,
    /// Held, not just pressed: tool use repeats while the key stays down.
    pub tool_use: bool,
    /// Just pressed.
    pub seed_use: bool,
    /// Held; repeats are spaced by the switch timers.
    pub tool_next: bool,
    pub seed_next: bool,
    pub interact: bool,
    pub toggle_inventory: bool,
    pub ui_up: bool,
    pub ui_down: bool,
    pub ui_confirm: bool,
    pub ui_cancel: bool,
}

#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputContext {
    #[default]
    Gameplay,
    Menu,
    Disabled,
}

#[derive(Resource, Debug, Clone)]
pub struct KeyBindings {
    pub move_up: KeyCode,
    pub move_down: KeyCode,
    pub move_left: KeyCode,
    pub move_right: KeyCode,
    pub tool_use: KeyCode,
    pub tool_next: KeyCode,
    pub seed_use: KeyCode,
    pub seed_next: KeyCode,
    pub interact: KeyCode,
    pub open_inventory: KeyCode,
    pub ui_cancel: KeyCode,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            move_up: KeyCode::KeyW,
            move_down: KeyCode::KeyS,
            move_left: KeyCode::KeyA,
            move_right: KeyCode::KeyD,
            tool_use: KeyCode::Space,
            tool_next: KeyCode::KeyQ,
            seed_use: KeyCode::AltLeft,
            seed_next: KeyCode::KeyE,
            interact: KeyCode::Enter,
            open_inventory: KeyCode::KeyI,
            ui_cancel: KeyCode::Escape,
        }
    }
}

/// Wrapping cursor over a fixed-length option list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuCursor {
    pub index: usize,
    pub count: usize,
}

impl MenuCursor {
    pub fn new(count: usize) -> Self {
        Self { index: 0, count }
    }

    pub fn up(&mut self) {
        if self.count == 0 {
            return;
        }
        self.index = if self.index == 0 { self.count - 1 } else { self.index - 1 };
    }

    pub fn down(&mut self) {
        if self.count == 0 {
            return;
        }
        self.index = (self.index + 1) % self.count;
    }
}

// ═══════════════════════════════════════════════════════════════════════
// RENDER CONTRACT
// ═══════════════════════════════════════════════════════════════════════

/// Which image the renderer should draw. Resolved to real assets (or
/// placeholder colours) outside the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteKey {
    Ground,
    Water,
    HouseFloor,
    Fence,
    Flower,
    Soil(TileVariant),
    SoilWater(u8),
    Plant { crop: CropKind, frame: usize },
    Tree { size: TreeSize, alive: bool },
    Apple,
    Player { status: PlayerStatus, frame: usize },
    Cow { frame: usize, love: bool },
    Flash,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawItem {
    /// Top-left corner in simulation space.
    pub pos: Vec2,
    pub size: Vec2,
    pub sprite: SpriteKey,
    pub layer: DrawLayer,
}

/// PostUpdate phases of the draw list: cleared, filled by each domain,
/// then sorted and handed to the renderer.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawSet {
    Clear,
    Collect,
    Present,
}

/// Everything to draw this tick, sorted by layer then by y.
#[derive(Resource, Debug, Clone, Default)]
pub struct DrawList {
    pub items: Vec<DrawItem>,
}

impl DrawList {
    pub fn push(&mut self, item: DrawItem) {
        self.items.push(item);
    }

    /// Orders by layer, then by rect centre y.
    pub fn sort(&mut self) {
        self.items.sort_by(|a, b| {
            a.layer.cmp(&b.layer).then_with(|| {
                let ay = a.pos.y + a.size.y * 0.5;
                let by = b.pos.y + b.size.y * 0.5;
                ay.total_cmp(&by)
            })
        });
    }
}

// ═══════════════════════════════════════════════════════════════════════
// EVENTS
// ═══════════════════════════════════════════════════════════════════════

/// A tool swing completed at `target` (simulation space).
#[derive(Event, Debug, Clone, Copy)]
pub struct ToolUseEvent {
    pub tool: ToolKind,
    pub target: Vec2,
}

/// The seed-use timer expired with a seed in hand.
#[derive(Event, Debug, Clone, Copy)]
pub struct PlantSeedEvent {
    pub seed: CropKind,
    pub target: Vec2,
}

/// Outcome of a planting attempt, for inventory bookkeeping.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedPlantedEvent {
    pub seed: CropKind,
    pub consumed: bool,
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropHarvestedEvent {
    pub crop: CropKind,
    pub tile: TilePos,
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemPickupEvent {
    pub item: ItemKind,
    pub quantity: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sfx {
    Hoe,
    Water,
    Plant,
    Axe,
    Success,
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaySfxEvent {
    pub sfx: Sfx,
}

/// The player lay down in bed.
#[derive(Event, Debug, Clone, Copy)]
pub struct SleepStartEvent;

/// The wake-up fade finished; the player may move again.
#[derive(Event, Debug, Clone, Copy)]
pub struct WakeUpEvent;

/// The screen is fully dark: the ended day is processed. `raining` is the
/// weather rolled for the new day.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayEndEvent {
    pub day: u32,
    pub raining: bool,
}

// ═══════════════════════════════════════════════════════════════════════
// CONSTANTS
// ═══════════════════════════════════════════════════════════════════════

pub const TILE_SIZE: f32 = 64.0;
pub const SCREEN_WIDTH: f32 = 960.0;
pub const SCREEN_HEIGHT: f32 = 540.0;

pub const PLAYER_SIZE: Vec2 = Vec2::new(192.0, 192.0);
/// The player's hitbox is the visual rect shrunk by this much.
pub const PLAYER_HITBOX_INFLATE: Vec2 = Vec2::new(-126.0, -70.0);
pub const PLAYER_SPEED: f32 = 200.0;
pub const PLAYER_SUPER_SPEED: f32 = 1000.0;

pub const COW_SIZE: Vec2 = Vec2::new(96.0, 128.0);
pub const COW_HITBOX_INFLATE: Vec2 = Vec2::new(-10.0, -100.0);
pub const COW_Y_OFFSET: f32 = 15.0;
pub const COW_SPEED: f32 = 50.0;
