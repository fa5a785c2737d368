//! Player domain: entity markers and physics layers.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision and contact-probe filtering.
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Static level geometry; both contact probes test against this layer.
    Terrain,
    /// Player character.
    Player,
}

#[derive(Component, Debug)]
pub struct Player;
