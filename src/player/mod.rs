//! Player domain: the character-movement core and the systems that drive it.
//!
//! The simulation itself ([`PlayerSim`]) is engine-agnostic: it consumes a
//! per-frame input and contact snapshot and hands back body writes. The
//! plugin wires it to keyboard sampling, avian2d spatial queries, and the
//! physics body.

mod components;
pub(crate) mod config;
mod sim;
mod spawn;
mod state;
mod systems;

pub use components::{GameLayer, Player};
pub use config::{BoxSize, ConfigError, PlayerConfig};
pub use sim::{BodyWrite, Contacts, PlayerInput, PlayerSim};
pub use state::{Facing, PlayerState};

use bevy::prelude::*;

use crate::player::systems::{drive_player, read_input};

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerInput>()
            .add_systems(Startup, (config::load_config, spawn::spawn_player).chain())
            .add_systems(Update, (read_input, drive_player).chain());
    }
}
