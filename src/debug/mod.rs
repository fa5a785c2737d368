//! Dev-only diagnostics: a toggleable text overlay and gizmo outlines for the
//! ground and wall probe volumes.

use bevy::prelude::*;

use crate::player::{Player, PlayerConfig, PlayerSim};

#[derive(Resource, Default)]
struct DebugState {
    visible: bool,
}

#[derive(Component)]
struct DebugOverlay;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Startup, spawn_overlay)
            .add_systems(
                Update,
                (toggle_overlay, update_overlay, draw_check_boxes).chain(),
            );
    }
}

fn spawn_overlay(mut commands: Commands) {
    commands.spawn((
        DebugOverlay,
        Text::new(""),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(8.0),
            left: Val::Px(8.0),
            ..default()
        },
    ));
}

fn toggle_overlay(keyboard: Res<ButtonInput<KeyCode>>, mut state: ResMut<DebugState>) {
    if keyboard.just_pressed(KeyCode::F1) {
        state.visible = !state.visible;
    }
}

fn update_overlay(
    state: Res<DebugState>,
    player: Query<(&PlayerSim, &Transform), With<Player>>,
    mut overlay: Query<&mut Text, With<DebugOverlay>>,
) {
    let Ok(mut text) = overlay.single_mut() else {
        return;
    };
    if !state.visible {
        if !text.0.is_empty() {
            text.0.clear();
        }
        return;
    }
    let Ok((sim, transform)) = player.single() else {
        return;
    };

    let velocity = sim.velocity();
    text.0 = format!(
        "state: {:?} (prev {:?})\n\
         vel: ({:.1}, {:.1}) facing {:?}\n\
         grounded: {} wall: {}\n\
         coyote: {:.2}s dash: {:.2}s\n\
         pos: ({:.0}, {:.0})",
        sim.current_state(),
        sim.previous_state(),
        velocity.x,
        velocity.y,
        sim.facing(),
        sim.is_grounded(),
        sim.is_on_wall(),
        sim.coyote_timer(),
        sim.dash_timer(),
        transform.translation.x,
        transform.translation.y,
    );
}

/// Outline the overlap boxes the contact probes query each tick.
fn draw_check_boxes(
    state: Res<DebugState>,
    config: Res<PlayerConfig>,
    player: Query<&Transform, With<Player>>,
    mut gizmos: Gizmos,
) {
    if !state.visible {
        return;
    }
    let Ok(transform) = player.single() else {
        return;
    };
    let position = transform.translation.truncate();

    let ground_center = position - Vec2::new(0.0, config.ground_check_offset);
    let ground_size = Vec2::new(config.ground_check_size.x, config.ground_check_size.y);
    gizmos.rect_2d(
        Isometry2d::from_translation(ground_center),
        ground_size,
        Color::srgb(0.2, 1.0, 0.2),
    );

    let wall_size = Vec2::new(config.wall_check_size.x, config.wall_check_size.y);
    gizmos.rect_2d(
        Isometry2d::from_translation(position),
        wall_size,
        Color::srgb(1.0, 0.8, 0.2),
    );
}
