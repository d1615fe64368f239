mod camera;
mod interaction;
mod movement;
mod spawn;
pub mod tools;

use bevy::prelude::*;
use crate::shared::*;

pub use movement::{animate_player, collect_player_sprite, move_player, update_status};
pub use spawn::spawn_player;
pub use tools::{handle_player_actions, update_player_timers};
pub use interaction::{handle_interact, wake_on_event};

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnExit(GameState::Loading), spawn::spawn_player);

        app.add_systems(
            Update,
            (
                tools::handle_player_actions,
                interaction::handle_interact,
                movement::update_status,
                tools::update_player_timers,
                movement::move_player,
                movement::animate_player,
                camera::camera_follow_player,
            )
                .chain()
                .run_if(in_state(GameState::Playing)),
        );

        app.add_systems(Update, interaction::wake_on_event);

        app.add_systems(
            PostUpdate,
            movement::collect_player_sprite.in_set(DrawSet::Collect),
        );
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Player controller
// ═══════════════════════════════════════════════════════════════════════════

pub const TOOL_USE_MS: u64 = 800;
pub const TOOL_SWITCH_MS: u64 = 200;
pub const SEED_USE_MS: u64 = 350;
pub const SEED_SWITCH_MS: u64 = 200;

/// Tool/seed selection, the four action timers and the animation status.
#[derive(Component, Debug, Clone)]
pub struct PlayerController {
    pub tool_index: usize,
    pub seed_index: usize,
    pub tool_use: ActionTimer,
    pub tool_switch: ActionTimer,
    pub seed_use: ActionTimer,
    pub seed_switch: ActionTimer,
    pub status: PlayerStatus,
    /// Continuous animation frame; the drawn frame is its floor.
    pub frame: f32,
    pub sleeping: bool,
}

impl Default for PlayerController {
    fn default() -> Self {
        Self {
            tool_index: 0,
            seed_index: 0,
            tool_use: ActionTimer::with_action(TOOL_USE_MS, TimerAction::UseTool),
            tool_switch: ActionTimer::new(TOOL_SWITCH_MS),
            seed_use: ActionTimer::with_action(SEED_USE_MS, TimerAction::UseSeed),
            seed_switch: ActionTimer::new(SEED_SWITCH_MS),
            status: PlayerStatus::default(),
            frame: 0.0,
            sleeping: false,
        }
    }
}

impl PlayerController {
    pub fn selected_tool(&self) -> ToolKind {
        TOOL_ORDER[self.tool_index % TOOL_ORDER.len()]
    }

    pub fn selected_seed(&self) -> CropKind {
        SEED_ORDER[self.seed_index % SEED_ORDER.len()]
    }

    /// Point in front of the player that tools and seeds act on.
    pub fn target(&self, pos: Vec2) -> Vec2 {
        pos + self.status.facing.tool_offset()
    }

    /// Busy players ignore movement and action input.
    pub fn busy(&self) -> bool {
        self.sleeping || self.tool_use.active()
    }
}
