//! Player domain: per-frame driver that feeds the simulation and applies its
//! body writes.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::player::components::Player;
use crate::player::config::PlayerConfig;
use crate::player::sim::{PlayerInput, PlayerSim};
use crate::player::systems::contacts;

pub(crate) fn drive_player(
    time: Res<Time>,
    input: Res<PlayerInput>,
    config: Res<PlayerConfig>,
    spatial: SpatialQuery,
    mut query: Query<(&mut PlayerSim, &mut Transform, &mut LinearVelocity), With<Player>>,
) {
    let dt = time.delta_secs();

    for (mut sim, mut transform, mut velocity) in &mut query {
        let contacts = contacts::probe(&spatial, &config, transform.translation.truncate());
        let write = sim.tick(dt, *input, contacts);

        velocity.0 = write.velocity;
        if let Some(offset) = write.offset {
            transform.translation += offset.extend(0.0);
        }
        if write.restore_upright && transform.rotation != Quat::IDENTITY {
            transform.rotation = Quat::IDENTITY;
        }

        if sim.current_state() != sim.previous_state() {
            debug!(
                "Player state: {:?} -> {:?} (grounded={}, wall={})",
                sim.previous_state(),
                sim.current_state(),
                sim.is_grounded(),
                sim.is_on_wall()
            );
        }
    }
}
