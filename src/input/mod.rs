use bevy::prelude::*;
use crate::shared::*;

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerInput>()
            .init_resource::<InputContext>()
            .init_resource::<KeyBindings>()
            .add_systems(
                PreUpdate,
                (manage_input_context, reset_and_read_input).chain(),
            );
    }
}

/// The single point where hardware input becomes game actions.
fn reset_and_read_input(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    bindings: Res<KeyBindings>,
    context: Res<InputContext>,
    mut input: ResMut<PlayerInput>,
) {
    // headless apps have no keyboard; tests write PlayerInput directly
    let Some(keys) = keys else {
        return;
    };
    *input = read_actions(&keys, &bindings, *context);
}

/// Translate the pressed keys into this frame's actions for `context`.
pub fn read_actions(
    keys: &ButtonInput<KeyCode>,
    bindings: &KeyBindings,
    context: InputContext,
) -> PlayerInput {
    let mut input = PlayerInput::default();

    match context {
        InputContext::Disabled => {}

        InputContext::Gameplay => {
            let mut axis = Vec2::ZERO;
            if keys.pressed(bindings.move_up) || keys.pressed(KeyCode::ArrowUp) {
                axis.y += 1.0;
            }
            if keys.pressed(bindings.move_down) || keys.pressed(KeyCode::ArrowDown) {
                axis.y -= 1.0;
            }
            if keys.pressed(bindings.move_left) || keys.pressed(KeyCode::ArrowLeft) {
                axis.x -= 1.0;
            }
            if keys.pressed(bindings.move_right) || keys.pressed(KeyCode::ArrowRight) {
                axis.x += 1.0;
            }
            input.move_axis = axis;

            // switch timers gate the held cycle keys
            input.tool_use = keys.pressed(bindings.tool_use);
            input.tool_next = keys.pressed(bindings.tool_next);
            input.seed_use = keys.just_pressed(bindings.seed_use);
            input.seed_next = keys.pressed(bindings.seed_next);
            input.interact = keys.just_pressed(bindings.interact);
            input.toggle_inventory = keys.just_pressed(bindings.open_inventory);
        }

        InputContext::Menu => {
            // held; the menu's own cooldown spaces repeats out
            input.ui_up = keys.pressed(bindings.move_up) || keys.pressed(KeyCode::ArrowUp);
            input.ui_down = keys.pressed(bindings.move_down) || keys.pressed(KeyCode::ArrowDown);
            input.ui_confirm = keys.pressed(bindings.tool_use) || keys.pressed(bindings.interact);
            input.ui_cancel = keys.just_pressed(bindings.ui_cancel);
            input.toggle_inventory = keys.just_pressed(bindings.open_inventory);
        }
    }

    input
}

/// Derives InputContext from GameState. ONE system, replaces all per-domain guards.
fn manage_input_context(game_state: Res<State<GameState>>, mut context: ResMut<InputContext>) {
    *context = match *game_state.get() {
        GameState::Playing => InputContext::Gameplay,
        GameState::Shop | GameState::Inventory => InputContext::Menu,
        GameState::Loading => InputContext::Disabled,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gameplay_axis_is_y_up() {
        let mut keys = ButtonInput::<KeyCode>::default();
        keys.press(KeyCode::KeyW);
        keys.press(KeyCode::KeyA);
        let input = read_actions(&keys, &KeyBindings::default(), InputContext::Gameplay);
        assert_eq!(input.move_axis, Vec2::new(-1.0, 1.0));
    }

    #[test]
    fn menu_context_ignores_movement() {
        let mut keys = ButtonInput::<KeyCode>::default();
        keys.press(KeyCode::KeyS);
        keys.press(KeyCode::Space);
        let input = read_actions(&keys, &KeyBindings::default(), InputContext::Menu);
        assert_eq!(input.move_axis, Vec2::ZERO);
        assert!(!input.tool_use);
        assert!(input.ui_down);
        assert!(input.ui_confirm);
    }

    #[test]
    fn disabled_context_reads_nothing() {
        let mut keys = ButtonInput::<KeyCode>::default();
        keys.press(KeyCode::Space);
        keys.press(KeyCode::Enter);
        let input = read_actions(&keys, &KeyBindings::default(), InputContext::Disabled);
        assert!(!input.tool_use && !input.interact);
    }

    #[test]
    fn seed_use_needs_a_fresh_press() {
        let mut keys = ButtonInput::<KeyCode>::default();
        keys.press(KeyCode::AltLeft);
        let first = read_actions(&keys, &KeyBindings::default(), InputContext::Gameplay);
        keys.clear();
        let held = read_actions(&keys, &KeyBindings::default(), InputContext::Gameplay);
        assert!(first.seed_use);
        assert!(!held.seed_use);
    }
}
