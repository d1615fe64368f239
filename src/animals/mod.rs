//! Animals domain: the cows that wander the paddock.

use bevy::prelude::*;
use rand::Rng;
use crate::shared::*;

mod interaction;
mod movement;
mod rendering;
mod spawning;

pub use interaction::cow_touch_player;
pub use movement::{animate_cows, move_cows, update_cow_status};
pub use rendering::collect_cows;
pub use spawning::spawn_cows;

pub struct AnimalPlugin;

impl Plugin for AnimalPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnExit(GameState::Loading), spawning::spawn_cows)
            .add_systems(
                Update,
                (
                    movement::update_cow_status,
                    interaction::cow_touch_player,
                    movement::move_cows,
                    movement::animate_cows,
                )
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(PostUpdate, rendering::collect_cows.in_set(DrawSet::Collect));
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Cow state
// ─────────────────────────────────────────────────────────────────────────────

/// How long a cow keeps doing one thing before rolling again.
pub const COW_STATUS_MS: u64 = 6000;
pub const COW_FRAMES: usize = 4;
pub const COW_ANIMATION_SPEED: f32 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CowActivity {
    #[default]
    Idle,
    Eat,
    Sit,
    Walk,
    Love,
}

#[derive(Component, Debug, Clone)]
pub struct Cow {
    pub activity: CowActivity,
    pub facing_left: bool,
    pub frame: f32,
    pub status_timer: ActionTimer,
}

impl Default for Cow {
    fn default() -> Self {
        Self {
            activity: CowActivity::Idle,
            facing_left: false,
            frame: 0.0,
            status_timer: ActionTimer::new(COW_STATUS_MS),
        }
    }
}

impl Cow {
    /// Pick the next activity. Walking also picks a fresh non-zero
    /// direction; the other activities keep the old one.
    pub fn roll(&mut self, direction: &mut Vec2, rng: &mut impl Rng) {
        let x = rng.gen_range(0..=100);
        self.activity = if x < 40 {
            CowActivity::Idle
        } else if x < 60 {
            CowActivity::Eat
        } else if x < 80 {
            CowActivity::Sit
        } else {
            loop {
                let candidate = Vec2::new(
                    rng.gen_range(-1..=1) as f32,
                    rng.gen_range(-1..=1) as f32,
                );
                if candidate != Vec2::ZERO {
                    *direction = candidate;
                    break;
                }
            }
            CowActivity::Walk
        };

        self.facing_left = if direction.x < 0.0 {
            true
        } else if direction.x > 0.0 {
            false
        } else {
            rng.gen_bool(0.5)
        };
        self.frame = 0.0;
        self.status_timer.activate();
    }

    pub fn walking(&self) -> bool {
        self.activity == CowActivity::Walk
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn walking_always_has_a_direction() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut walks = 0;
        for _ in 0..500 {
            let mut cow = Cow::default();
            let mut direction = Vec2::ZERO;
            cow.roll(&mut direction, &mut rng);
            assert!(cow.status_timer.active());
            if cow.walking() {
                walks += 1;
                assert_ne!(direction, Vec2::ZERO);
                if direction.x != 0.0 {
                    assert_eq!(cow.facing_left, direction.x < 0.0);
                }
            }
        }
        assert!(walks > 0);
    }

    #[test]
    fn resting_keeps_previous_direction() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let mut cow = Cow::default();
            let mut direction = Vec2::new(-1.0, 0.0);
            cow.roll(&mut direction, &mut rng);
            if !cow.walking() {
                assert_eq!(direction, Vec2::new(-1.0, 0.0));
                assert!(cow.facing_left);
            }
        }
    }

    #[test]
    fn activity_mix_roughly_matches_odds() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut idle = 0;
        let n = 2000;
        for _ in 0..n {
            let mut cow = Cow::default();
            let mut direction = Vec2::ZERO;
            cow.roll(&mut direction, &mut rng);
            if cow.activity == CowActivity::Idle {
                idle += 1;
            }
        }
        // 40 of 101 outcomes
        let share = idle as f32 / n as f32;
        assert!((0.33..0.47).contains(&share), "idle share {share}");
    }
}
