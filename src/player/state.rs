//! Player domain: discrete gameplay states and their transition rules.

/// Which way the character is rendered, and the direction a dash travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    /// Unit sign along the x axis.
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }
}

/// Discrete gameplay state of the character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerState {
    #[default]
    Idle,
    Walking,
    Jumping,
    Dash,
    Dead,
}

/// Inputs to a single transition step.
#[derive(Debug, Clone, Copy)]
pub struct TransitionCtx {
    pub grounded: bool,
    /// Nonzero horizontal speed.
    pub moving: bool,
    /// The dash clock has reached the dash duration.
    pub dash_elapsed: bool,
}

impl PlayerState {
    /// One step of the transition table. Dead is absorbing; a dash holds
    /// until its clock elapses and then exits through the same rules a jump
    /// landing uses.
    pub fn next(self, ctx: TransitionCtx) -> PlayerState {
        match self {
            PlayerState::Dead => PlayerState::Dead,
            PlayerState::Idle => {
                if !ctx.grounded {
                    PlayerState::Jumping
                } else if ctx.moving {
                    PlayerState::Walking
                } else {
                    PlayerState::Idle
                }
            }
            PlayerState::Walking => {
                if !ctx.grounded {
                    PlayerState::Jumping
                } else if !ctx.moving {
                    PlayerState::Idle
                } else {
                    PlayerState::Walking
                }
            }
            PlayerState::Jumping => {
                if !ctx.grounded {
                    PlayerState::Jumping
                } else if ctx.moving {
                    PlayerState::Walking
                } else {
                    PlayerState::Idle
                }
            }
            PlayerState::Dash => {
                if !ctx.dash_elapsed {
                    PlayerState::Dash
                } else if !ctx.grounded {
                    PlayerState::Jumping
                } else if ctx.moving {
                    PlayerState::Walking
                } else {
                    PlayerState::Idle
                }
            }
        }
    }
}
