//! Visuals domain: animation selection and sprite mirroring driven by the
//! movement core's read-only state.

use bevy::prelude::*;

use crate::player::{Facing, Player, PlayerSim, PlayerState};

/// Animation clips available to the character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    Walking,
    Jumping,
    Dead,
}

/// Pick the clip for a gameplay state. The dash has no clip of its own and
/// inherits idle or jumping presentation by groundedness.
fn presentation(state: PlayerState, grounded: bool) -> AnimationState {
    match state {
        PlayerState::Idle => AnimationState::Idle,
        PlayerState::Walking => AnimationState::Walking,
        PlayerState::Jumping => AnimationState::Jumping,
        PlayerState::Dash if grounded => AnimationState::Idle,
        PlayerState::Dash => AnimationState::Jumping,
        PlayerState::Dead => AnimationState::Dead,
    }
}

/// Frame playback for the character sprite.
#[derive(Component, Debug)]
pub struct PlayerAnimation {
    pub state: AnimationState,
    pub frame: u32,
    pub total_frames: u32,
    pub frame_timer: f32,
    pub frame_duration: f32,
    pub looping: bool,
}

impl Default for PlayerAnimation {
    fn default() -> Self {
        Self::from_state(AnimationState::Idle)
    }
}

impl PlayerAnimation {
    fn from_state(state: AnimationState) -> Self {
        let (total_frames, frame_duration, looping) = match state {
            AnimationState::Idle => (4, 0.2, true),
            AnimationState::Walking => (6, 0.12, true),
            AnimationState::Jumping => (2, 0.15, true),
            AnimationState::Dead => (3, 0.2, false),
        };
        Self {
            state,
            frame: 0,
            total_frames,
            frame_timer: 0.0,
            frame_duration,
            looping,
        }
    }

    /// Switch clips, restarting playback. No-op when already on the clip.
    pub fn set_state(&mut self, state: AnimationState) {
        if self.state != state {
            *self = Self::from_state(state);
        }
    }
}

pub struct VisualsPlugin;

impl Plugin for VisualsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (attach_animation, sync_animation, advance_frames, apply_facing).chain(),
        );
    }
}

fn attach_animation(
    mut commands: Commands,
    query: Query<Entity, (With<Player>, Without<PlayerAnimation>)>,
) {
    for entity in &query {
        commands.entity(entity).insert(PlayerAnimation::default());
    }
}

/// Switch clips on the tick the gameplay state changes.
fn sync_animation(mut query: Query<(&PlayerSim, &mut PlayerAnimation), With<Player>>) {
    for (sim, mut animation) in &mut query {
        if sim.previous_state() != sim.current_state() {
            animation.set_state(presentation(sim.current_state(), sim.is_grounded()));
        }
    }
}

/// Advance frame playback and shade the placeholder sprite so clip changes
/// stay visible without textures.
fn advance_frames(time: Res<Time>, mut query: Query<(&mut PlayerAnimation, &mut Sprite)>) {
    for (mut animation, mut sprite) in &mut query {
        animation.frame_timer += time.delta_secs();
        if animation.frame_timer >= animation.frame_duration {
            animation.frame_timer -= animation.frame_duration;
            if animation.frame + 1 < animation.total_frames {
                animation.frame += 1;
            } else if animation.looping {
                animation.frame = 0;
            }
        }

        let base = match animation.state {
            AnimationState::Idle => Color::srgb(0.9, 0.9, 0.9),
            AnimationState::Walking => Color::srgb(0.8, 0.9, 1.0),
            AnimationState::Jumping => Color::srgb(0.7, 0.8, 1.0),
            AnimationState::Dead => Color::srgb(0.8, 0.3, 0.3),
        };
        let pulse = 1.0 - 0.06 * (animation.frame % 2) as f32;
        let srgba = base.to_srgba();
        sprite.color = Color::srgb(srgba.red * pulse, srgba.green * pulse, srgba.blue * pulse);
    }
}

/// Mirror the sprite when facing left.
fn apply_facing(mut query: Query<(&PlayerSim, &mut Sprite), With<Player>>) {
    for (sim, mut sprite) in &mut query {
        sprite.flip_x = sim.facing() == Facing::Left;
    }
}
