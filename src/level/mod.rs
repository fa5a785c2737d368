//! Level domain: demo room geometry and the kill plane.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::player::{GameLayer, Player, PlayerSim};

/// Below this height the character is lost to the pit.
const KILL_PLANE_Y: f32 = -600.0;

/// Marker for static level geometry.
#[derive(Component, Debug)]
pub struct Terrain;

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_room)
            .add_systems(Update, apply_kill_plane);
    }
}

fn terrain_block(position: Vec2, size: Vec2, color: Color) -> impl Bundle {
    (
        Terrain,
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_xyz(position.x, position.y, 0.0),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        CollisionLayers::new(GameLayer::Terrain, [GameLayer::Player]),
    )
}

fn spawn_room(mut commands: Commands) {
    let stone = Color::srgb(0.35, 0.38, 0.45);
    let moss = Color::srgb(0.38, 0.48, 0.36);

    // Floor, split to leave a pit on the right above the kill plane.
    commands.spawn(terrain_block(
        Vec2::new(-150.0, -220.0),
        Vec2::new(700.0, 40.0),
        moss,
    ));
    commands.spawn(terrain_block(
        Vec2::new(460.0, -220.0),
        Vec2::new(200.0, 40.0),
        moss,
    ));

    // Boundary walls.
    commands.spawn(terrain_block(
        Vec2::new(-520.0, 60.0),
        Vec2::new(40.0, 600.0),
        stone,
    ));
    commands.spawn(terrain_block(
        Vec2::new(580.0, 60.0),
        Vec2::new(40.0, 600.0),
        stone,
    ));

    // Platforms staggered for coyote-time hops.
    commands.spawn(terrain_block(
        Vec2::new(-280.0, -80.0),
        Vec2::new(160.0, 24.0),
        moss,
    ));
    commands.spawn(terrain_block(
        Vec2::new(-40.0, 10.0),
        Vec2::new(140.0, 24.0),
        moss,
    ));
    commands.spawn(terrain_block(
        Vec2::new(210.0, 100.0),
        Vec2::new(140.0, 24.0),
        moss,
    ));

    // Pillar for wall-jump practice.
    commands.spawn(terrain_block(
        Vec2::new(90.0, -150.0),
        Vec2::new(32.0, 100.0),
        stone,
    ));

    info!("Demo room spawned");
}

/// Falling out of the room sets the terminal dead latch on the simulation.
fn apply_kill_plane(mut query: Query<(&Transform, &mut PlayerSim), With<Player>>) {
    for (transform, mut sim) in &mut query {
        if transform.translation.y < KILL_PLANE_Y && !sim.is_dead() {
            info!("Player fell below the kill plane");
            sim.kill();
        }
    }
}
