//! Calendar domain: day counter, weather rolls, the sleep fade and the sky.
//!
//! Responsible for:
//! - Rolling the first day's weather while loading
//! - Fading the screen out when the player goes to bed, ending the day at
//!   full dark (`DayEndEvent`) and fading back in (`WakeUpEvent`)
//! - Dimming the sky from daylight towards night as the day goes on

use bevy::prelude::*;
use rand::Rng;

use crate::config::GameConfig;
use crate::shared::*;

/// Screen brightness change per second during the sleep transition.
pub const FADE_SPEED: f32 = 120.0;
/// Sky colour change per second, per channel.
pub const SKY_DECAY_PER_SEC: f32 = 2.0;

pub struct CalendarPlugin;

impl Plugin for CalendarPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Calendar>()
            .init_resource::<Weather>()
            .init_resource::<DayNightTint>()
            .init_resource::<SleepTransition>()
            .add_systems(OnEnter(GameState::Loading), roll_first_day)
            .add_systems(
                Update,
                (start_sleep, advance_sleep_transition, decay_sky)
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            );
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadePhase {
    Darkening,
    Brightening,
}

/// Progress of the bedtime fade. `phase` is `None` while awake.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct SleepTransition {
    pub phase: Option<FadePhase>,
    pub level: f32,
}

impl Default for SleepTransition {
    fn default() -> Self {
        Self {
            phase: None,
            level: 255.0,
        }
    }
}

/// What a transition step produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeStep {
    Running,
    /// The screen just went fully dark.
    Dark,
    /// The screen is fully bright again.
    Finished,
}

impl SleepTransition {
    pub fn begin(&mut self) {
        if self.phase.is_none() {
            self.phase = Some(FadePhase::Darkening);
            self.level = 255.0;
        }
    }

    pub fn step(&mut self, dt: f32) -> Option<FadeStep> {
        let phase = self.phase?;
        let step = match phase {
            FadePhase::Darkening => {
                self.level -= FADE_SPEED * dt;
                if self.level <= 0.0 {
                    self.level = 0.0;
                    self.phase = Some(FadePhase::Brightening);
                    FadeStep::Dark
                } else {
                    FadeStep::Running
                }
            }
            FadePhase::Brightening => {
                self.level += FADE_SPEED * dt;
                if self.level >= 255.0 {
                    self.level = 255.0;
                    self.phase = None;
                    FadeStep::Finished
                } else {
                    FadeStep::Running
                }
            }
        };
        Some(step)
    }
}

/// Rain on roughly 3 days in 11, or every day in rain mode.
pub fn roll_rain(rain_mode: bool, rng: &mut impl Rng) -> bool {
    rain_mode || rng.gen_range(0..=10) < 3
}

/// Move each sky channel towards night, never past it.
pub fn decay_color(color: Vec3, dt: f32) -> Vec3 {
    let target = DayNightTint::NIGHT;
    let step = SKY_DECAY_PER_SEC * dt;
    Vec3::new(
        (color.x - step).max(target.x.min(color.x)),
        (color.y - step).max(target.y.min(color.y)),
        (color.z - step).max(target.z.min(color.z)),
    )
}

// ═══════════════════════════════════════════════════════════════════════
// SYSTEMS
// ═══════════════════════════════════════════════════════════════════════

fn roll_first_day(config: Res<GameConfig>, mut weather: ResMut<Weather>) {
    weather.raining = roll_rain(config.rain_mode, &mut rand::thread_rng());
    info!("[Calendar] Day 1, raining: {}", weather.raining);
}

fn start_sleep(mut events: EventReader<SleepStartEvent>, mut transition: ResMut<SleepTransition>) {
    if events.read().last().is_some() {
        transition.begin();
        debug!("[Calendar] Fading out for the night");
    }
}

#[allow(clippy::too_many_arguments)]
fn advance_sleep_transition(
    time: Res<Time>,
    config: Res<GameConfig>,
    mut transition: ResMut<SleepTransition>,
    mut calendar: ResMut<Calendar>,
    mut weather: ResMut<Weather>,
    mut tint: ResMut<DayNightTint>,
    mut day_end: EventWriter<DayEndEvent>,
    mut wake: EventWriter<WakeUpEvent>,
) {
    let Some(step) = transition.step(time.delta_secs()) else {
        return;
    };
    tint.fade = transition.level;

    match step {
        FadeStep::Running => {}
        FadeStep::Dark => {
            let ended = calendar.day;
            calendar.day += 1;
            weather.raining = roll_rain(config.rain_mode, &mut rand::thread_rng());
            tint.color = DayNightTint::DAYLIGHT;
            day_end.send(DayEndEvent {
                day: ended,
                raining: weather.raining,
            });
            info!(
                "[Calendar] Day {} ended; day {} raining: {}",
                ended, calendar.day, weather.raining
            );
        }
        FadeStep::Finished => {
            wake.send(WakeUpEvent);
        }
    }
}

fn decay_sky(time: Res<Time>, mut tint: ResMut<DayNightTint>) {
    tint.color = decay_color(tint.color, time.delta_secs());
}
