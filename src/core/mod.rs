//! Core domain: app state, camera setup, and the game-over transition.

use bevy::prelude::*;

use crate::player::{Player, PlayerSim, PlayerState};

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    #[default]
    Run,
    GameOver,
}

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .add_systems(Startup, setup_camera)
            .add_systems(Update, (watch_for_death, follow_player));
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// End the run on the tick the character enters the dead state.
fn watch_for_death(
    query: Query<&PlayerSim, With<Player>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    for sim in &query {
        if sim.current_state() == PlayerState::Dead && sim.previous_state() != PlayerState::Dead {
            info!("Player died, ending run");
            next_state.set(GameState::GameOver);
        }
    }
}

/// Camera tracks the player with light smoothing.
fn follow_player(
    time: Res<Time>,
    player: Query<&Transform, With<Player>>,
    mut camera: Query<&mut Transform, (With<Camera2d>, Without<Player>)>,
) {
    let Ok(target) = player.single() else {
        return;
    };

    for mut transform in &mut camera {
        let goal = target.translation.truncate();
        let current = transform.translation.truncate();
        let next = current.lerp(goal, (6.0 * time.delta_secs()).min(1.0));
        transform.translation.x = next.x;
        transform.translation.y = next.y;
    }
}
