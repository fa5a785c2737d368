//! Player domain: player entity setup.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::player::components::{GameLayer, Player};
use crate::player::config::PlayerConfig;
use crate::player::sim::PlayerSim;

pub(crate) fn spawn_player(mut commands: Commands, config: Res<PlayerConfig>) {
    let sim = match PlayerSim::new(config.clone()) {
        Ok(sim) => sim,
        Err(e) => {
            error!("player tuning rejected: {e}");
            panic!("cannot start without a valid player tuning");
        }
    };

    commands.spawn((
        Player,
        sim,
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(Vec2::new(24.0, 48.0)),
            ..default()
        },
        Transform::from_xyz(-380.0, 0.0, 0.0),
        (
            RigidBody::Dynamic,
            Collider::rectangle(24.0, 48.0),
            LinearVelocity::default(),
            GravityScale(0.0), // gravity is integrated by PlayerSim
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Terrain]),
        ),
    ));

    info!("Player spawned");
}
