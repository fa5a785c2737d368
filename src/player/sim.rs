//! Player domain: the frame-driven movement simulation.
//!
//! [`PlayerSim`] is a plain state machine built from a validated
//! [`PlayerConfig`] and advanced once per frame with [`PlayerSim::tick`]. It
//! owns the kinematic state exclusively; the ECS layer feeds it an input and
//! contact snapshot each frame and applies the body writes it returns.

use bevy::prelude::*;

use crate::player::config::{ConfigError, MotionConstants, PlayerConfig};
use crate::player::state::{Facing, PlayerState, TransitionCtx};

/// Raw input consumed by the simulation, sampled once per tick.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct PlayerInput {
    /// Horizontal axis in [-1, 1].
    pub axis: f32,
    /// True on the frame the jump action is newly pressed.
    pub jump_pressed: bool,
    /// True on the frame the dash action is pressed.
    pub dash_pressed: bool,
}

/// Contact-probe results, refreshed once per tick before the simulation steps.
#[derive(Debug, Default, Clone, Copy)]
pub struct Contacts {
    pub on_ground: bool,
    pub on_wall: bool,
}

/// What the driver must apply to the physics body after a tick.
#[derive(Debug, Default, Clone, Copy)]
pub struct BodyWrite {
    /// New body velocity. Zero on dash ticks, where residual momentum must
    /// not move the body and displacement is applied directly instead.
    pub velocity: Vec2,
    /// Direct positional displacement for this tick.
    pub offset: Option<Vec2>,
    /// Force the body back to the upright orientation.
    pub restore_upright: bool,
}

#[derive(Component, Debug)]
pub struct PlayerSim {
    config: PlayerConfig,
    motion: MotionConstants,
    velocity: Vec2,
    facing: Facing,
    state: PlayerState,
    previous_state: PlayerState,
    /// Seconds since last grounded, accumulated while airborne.
    coyote_timer: f32,
    /// Active-dash clock while dashing, cooldown clock otherwise.
    dash_timer: f32,
    grounded: bool,
    on_wall: bool,
    has_jumped: bool,
    has_wall_jumped: bool,
    dead: bool,
}

impl PlayerSim {
    /// Validates the tuning and builds a simulation at its resting defaults:
    /// idle, facing right, zero velocity, timers at zero.
    pub fn new(config: PlayerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let motion = config.motion();
        Ok(Self {
            config,
            motion,
            velocity: Vec2::ZERO,
            facing: Facing::Right,
            state: PlayerState::Idle,
            previous_state: PlayerState::Idle,
            coyote_timer: 0.0,
            dash_timer: 0.0,
            grounded: false,
            on_wall: false,
            has_jumped: false,
            has_wall_jumped: false,
            dead: false,
        })
    }

    /// Advance the simulation by `dt` seconds.
    ///
    /// Order within a tick: previous-state snapshot, contact refresh and
    /// landing resets, dead override, dash arm/displace/clock, horizontal
    /// step, vertical step, jump evaluation, state transition. Jumps run
    /// after vertical integration so the impulse is the final vertical speed
    /// of the tick, and the transition runs last so a grounded jump lands in
    /// the jumping state on the same tick it fires.
    pub fn tick(&mut self, dt: f32, input: PlayerInput, contacts: Contacts) -> BodyWrite {
        self.previous_state = self.state;

        self.grounded = contacts.on_ground;
        self.on_wall = contacts.on_wall;
        if self.grounded {
            // Landing re-arms both jumps and closes the coyote window.
            self.coyote_timer = 0.0;
            self.has_jumped = false;
            self.has_wall_jumped = false;
        }

        // Dead overrides everything below, dash displacement included.
        if self.dead {
            self.state = PlayerState::Dead;
        }

        let offset = self.step_dash(dt, input.dash_pressed);

        // The arm tick and every tick the dash clock is still running bypass
        // normal integration; the tick the clock elapses resumes it.
        let dashing = !self.dead && self.dash_active();

        if !dashing {
            let axis = if self.dead {
                0.0
            } else {
                input.axis.clamp(-1.0, 1.0)
            };
            self.step_horizontal(axis, dt);
            self.step_vertical(dt);
            if !self.dead {
                self.step_jump(input.jump_pressed);
            }
        }

        self.state = self.state.next(TransitionCtx {
            grounded: self.grounded,
            moving: self.velocity.x != 0.0,
            dash_elapsed: self.dash_timer >= self.config.dash_duration,
        });

        BodyWrite {
            // Held at zero while dashing so the body carries no speed of its
            // own on top of the dash displacement.
            velocity: if dashing { Vec2::ZERO } else { self.velocity },
            offset,
            restore_upright: self.grounded,
        }
    }

    fn dash_active(&self) -> bool {
        self.state == PlayerState::Dash && self.dash_timer < self.config.dash_duration
    }

    /// Dash arming and displacement. The same timer serves as the active-dash
    /// clock and, between dashes, the cooldown clock.
    fn step_dash(&mut self, dt: f32, requested: bool) -> Option<Vec2> {
        if requested
            && !self.dead
            && !self.dash_active()
            && self.dash_timer > self.config.dash_reset_time
        {
            // Fresh dash interrupts whatever state we were in. Displacement
            // starts next tick; the clock reads zero at the end of this one.
            self.state = PlayerState::Dash;
            self.dash_timer = 0.0;
            return None;
        }

        let offset = (!self.dead && self.dash_active())
            .then(|| Vec2::new(self.facing.sign() * self.config.dash_speed * dt, 0.0));
        self.dash_timer += dt;
        offset
    }

    /// Accelerate toward the input direction, clamped to max speed, or bleed
    /// speed toward zero without crossing it. Facing follows nonzero input
    /// and is sticky otherwise.
    fn step_horizontal(&mut self, axis: f32, dt: f32) {
        if axis < 0.0 {
            self.facing = Facing::Left;
        } else if axis > 0.0 {
            self.facing = Facing::Right;
        }

        if axis != 0.0 {
            self.velocity.x += self.motion.acceleration_rate * axis * dt;
            self.velocity.x = self
                .velocity
                .x
                .clamp(-self.config.max_speed, self.config.max_speed);
        } else if self.velocity.x > 0.0 {
            self.velocity.x = (self.velocity.x - self.motion.deceleration_rate * dt).max(0.0);
        } else if self.velocity.x < 0.0 {
            self.velocity.x = (self.velocity.x + self.motion.deceleration_rate * dt).min(0.0);
        }
    }

    fn step_vertical(&mut self, dt: f32) {
        if self.grounded {
            self.velocity.y = 0.0;
        } else {
            // Accrues before the jump check, so a press fires only while the
            // post-accrual clock is still inside the window.
            self.coyote_timer += dt;
            self.velocity.y += self.motion.gravity * dt;
            if self.velocity.y < -self.config.terminal_speed {
                self.velocity.y = -self.config.terminal_speed;
            }
        }
    }

    /// Ground-or-coyote jump takes priority over a wall jump; at most one
    /// impulse fires per tick.
    fn step_jump(&mut self, requested: bool) {
        if !requested {
            return;
        }

        let within_coyote = self.grounded || self.coyote_timer <= self.config.coyote_jump_time;
        if within_coyote && !self.has_jumped {
            self.velocity.y = self.motion.initial_jump_speed;
            self.has_jumped = true;
            self.has_wall_jumped = false;
            // The contact query ran before the impulse; the character has
            // left the ground this tick even if the box still overlaps.
            self.grounded = false;
        } else if self.on_wall && !self.has_wall_jumped {
            // Reflect off the wall.
            self.velocity.x = -self.velocity.x;
            self.velocity.y = self.motion.initial_jump_speed;
            self.has_wall_jumped = true;
            self.grounded = false;
        }
    }

    /// Latch the terminal dead state. Never cleared.
    pub fn kill(&mut self) {
        self.dead = true;
    }

    pub fn current_state(&self) -> PlayerState {
        self.state
    }

    /// Snapshot taken at the start of the current tick, before transitions,
    /// so consumers can detect state edges.
    pub fn previous_state(&self) -> PlayerState {
        self.previous_state
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    pub fn is_on_wall(&self) -> bool {
        self.on_wall
    }

    /// Walking in the kinematic sense: nonzero horizontal speed.
    pub fn is_walking(&self) -> bool {
        self.velocity.x != 0.0
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    pub fn coyote_timer(&self) -> f32 {
        self.coyote_timer
    }

    pub fn dash_timer(&self) -> f32 {
        self.dash_timer
    }
}
