//! Player domain: movement tuning loaded from RON, with the motion constants
//! derived from it.

use bevy::prelude::*;
use ron::Options;
use serde::Deserialize;
use std::fs;
use std::path::Path;

const CONFIG_PATH: &str = "assets/data/player.ron";

/// Axis-aligned box dimensions for the contact probes.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct BoxSize {
    pub x: f32,
    pub y: f32,
}

/// Immutable per-character tuning, set once at startup. The three timing
/// fields that rates are derived from must be strictly positive.
#[derive(Resource, Debug, Clone, Deserialize)]
pub struct PlayerConfig {
    pub max_speed: f32,
    pub acceleration_time: f32,
    pub deceleration_time: f32,
    /// Maximum downward fall speed magnitude.
    pub terminal_speed: f32,
    /// Target peak jump height.
    pub apex_height: f32,
    /// Target time to reach the jump peak.
    pub apex_time: f32,
    /// Grace window after leaving the ground during which a jump still fires.
    pub coyote_jump_time: f32,
    /// Dash displacement rate.
    pub dash_speed: f32,
    pub dash_duration: f32,
    /// Cooldown the dash clock must exceed before a new dash arms.
    pub dash_reset_time: f32,
    /// How far below the body center the ground box sits.
    pub ground_check_offset: f32,
    pub ground_check_size: BoxSize,
    pub wall_check_size: BoxSize,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            max_speed: 320.0,
            acceleration_time: 0.25,
            deceleration_time: 0.15,
            terminal_speed: 720.0,
            apex_height: 130.0,
            apex_time: 0.45,
            coyote_jump_time: 0.25,
            dash_speed: 640.0,
            dash_duration: 0.4,
            dash_reset_time: 3.0,
            ground_check_offset: 26.0,
            ground_check_size: BoxSize { x: 20.0, y: 6.0 },
            wall_check_size: BoxSize { x: 34.0, y: 44.0 },
        }
    }
}

/// Constants derived from the tuning: linear accel/decel rates, plus the
/// gravity and launch speed that produce a parabolic arc peaking at exactly
/// `apex_height` after `apex_time` seconds.
#[derive(Debug, Clone, Copy)]
pub struct MotionConstants {
    pub acceleration_rate: f32,
    pub deceleration_rate: f32,
    pub gravity: f32,
    pub initial_jump_speed: f32,
}

/// A tuning field that would make the derived rates undefined.
#[derive(Debug)]
pub struct ConfigError {
    pub field: &'static str,
    pub value: f32,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "player tuning field '{}' must be strictly positive, got {}",
            self.field, self.value
        )
    }
}

impl PlayerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("acceleration_time", self.acceleration_time),
            ("deceleration_time", self.deceleration_time),
            ("apex_time", self.apex_time),
        ] {
            if value <= 0.0 {
                return Err(ConfigError { field, value });
            }
        }
        Ok(())
    }

    /// Derived constants. Only meaningful once `validate` has passed.
    pub fn motion(&self) -> MotionConstants {
        MotionConstants {
            acceleration_rate: self.max_speed / self.acceleration_time,
            deceleration_rate: self.max_speed / self.deceleration_time,
            gravity: -2.0 * self.apex_height / (self.apex_time * self.apex_time),
            initial_jump_speed: 2.0 * self.apex_height / self.apex_time,
        }
    }
}

/// Error type for tuning-file load failures.
#[derive(Debug)]
pub struct ConfigLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Load the tuning file from disk.
pub fn load_config_file(path: &Path) -> Result<PlayerConfig, ConfigLoadError> {
    let file = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ConfigLoadError {
        file: file.clone(),
        message: format!("IO error: {}", e),
    })?;

    ron_options()
        .from_str(&contents)
        .map_err(|e| ConfigLoadError {
            file,
            message: format!("Parse error: {}", e),
        })
}

/// Startup system: install the player tuning resource. A missing file falls
/// back to defaults; a malformed file or invalid values are fatal.
pub(crate) fn load_config(mut commands: Commands) {
    let path = Path::new(CONFIG_PATH);
    let config = if path.exists() {
        match load_config_file(path) {
            Ok(config) => config,
            Err(e) => {
                error!("{e}");
                panic!("player tuning file is malformed");
            }
        }
    } else {
        warn!("{} not found, using default player tuning", CONFIG_PATH);
        PlayerConfig::default()
    };

    if let Err(e) = config.validate() {
        error!("{e}");
        panic!("player tuning is invalid");
    }

    info!(
        "Player tuning loaded: max_speed={}, apex_height={}, apex_time={}, dash_reset_time={}",
        config.max_speed, config.apex_height, config.apex_time, config.dash_reset_time
    );
    commands.insert_resource(config);
}
