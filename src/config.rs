//! Tunables for the arena. The constants mirror the classic three-player
//! layout; [`GameConfig`] carries them at runtime and can be overridden from
//! a JSON file.

use std::fs;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::entities::TankColor;
use crate::error::ConfigError;
use crate::game::input::{Controls, Key};

pub const ARENA_WIDTH: f32 = 800.0;
pub const ARENA_HEIGHT: f32 = 650.0;
pub const FPS: u32 = 60;

pub const TANK_SIZE: f32 = 40.0;
pub const TANK_SPEED: f32 = 3.0;
pub const MAX_HEALTH: i32 = 100;
pub const TURRET_LENGTH: f32 = 20.0;
pub const MUZZLE_OFFSET: f32 = 5.0;
pub const TURRET_ROT_SPEED: f32 = 0.05;
pub const TURRET_LIMIT: f32 = std::f32::consts::FRAC_PI_4;
pub const FIRE_COOLDOWN_MS: u32 = 500;

pub const BULLET_SIZE: f32 = 10.0;
pub const BULLET_SPEED: f32 = 10.0;
pub const BULLET_DAMAGE: i32 = 10;

pub const WALL_SIZE: f32 = 50.0;
pub const WALL_COUNT_MIN: u32 = 4;
pub const WALL_COUNT_MAX: u32 = 6;
pub const WALL_CLEARANCE: f32 = 100.0;
pub const WALL_MARGIN_X: f32 = 50.0;
pub const WALL_MARGIN_TOP: f32 = 150.0;
pub const WALL_MARGIN_BOTTOM: f32 = 50.0;
pub const WALL_PLACEMENT_ATTEMPTS: u32 = 1000;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub name: String,
    pub color: TankColor,
    pub spawn: Vec2,
    pub controls: Controls,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub arena_width: f32,
    pub arena_height: f32,
    pub fps: u32,
    pub tank_size: f32,
    pub tank_speed: f32,
    pub max_health: i32,
    pub turret_length: f32,
    pub muzzle_offset: f32,
    pub turret_rot_speed: f32,
    pub fire_cooldown_ms: u32,
    pub bullet_size: f32,
    pub bullet_speed: f32,
    pub bullet_damage: i32,
    pub wall_size: f32,
    pub wall_count_min: u32,
    pub wall_count_max: u32,
    pub wall_clearance: f32,
    /// Left/right inset of the wall sampling range.
    pub wall_margin_x: f32,
    pub wall_margin_top: f32,
    pub wall_margin_bottom: f32,
    pub wall_placement_attempts: u32,
    pub reset_key: Key,
    pub players: Vec<PlayerConfig>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            fps: FPS,
            tank_size: TANK_SIZE,
            tank_speed: TANK_SPEED,
            max_health: MAX_HEALTH,
            turret_length: TURRET_LENGTH,
            muzzle_offset: MUZZLE_OFFSET,
            turret_rot_speed: TURRET_ROT_SPEED,
            fire_cooldown_ms: FIRE_COOLDOWN_MS,
            bullet_size: BULLET_SIZE,
            bullet_speed: BULLET_SPEED,
            bullet_damage: BULLET_DAMAGE,
            wall_size: WALL_SIZE,
            wall_count_min: WALL_COUNT_MIN,
            wall_count_max: WALL_COUNT_MAX,
            wall_clearance: WALL_CLEARANCE,
            wall_margin_x: WALL_MARGIN_X,
            wall_margin_top: WALL_MARGIN_TOP,
            wall_margin_bottom: WALL_MARGIN_BOTTOM,
            wall_placement_attempts: WALL_PLACEMENT_ATTEMPTS,
            reset_key: Key::R,
            players: default_players(),
        }
    }
}

fn default_players() -> Vec<PlayerConfig> {
    vec![
        PlayerConfig {
            name: "Player 1".to_string(),
            color: TankColor::Red,
            spawn: Vec2::new(100.0, 100.0),
            controls: Controls::new(Key::W, Key::S, Key::A, Key::D, Key::Space),
        },
        PlayerConfig {
            name: "Player 2".to_string(),
            color: TankColor::Green,
            spawn: Vec2::new(400.0, 100.0),
            controls: Controls::new(Key::Up, Key::Down, Key::Left, Key::Right, Key::Enter),
        },
        PlayerConfig {
            name: "Player 3".to_string(),
            color: TankColor::Blue,
            spawn: Vec2::new(700.0, 100.0),
            controls: Controls::new(Key::I, Key::K, Key::J, Key::L, Key::M),
        },
    ]
}

impl GameConfig {
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Fire cooldown expressed in ticks: `ceil(cooldown_ms * fps / 1000)`,
    /// saturating at `u32::MAX`.
    pub fn fire_cooldown_ticks(&self) -> u32 {
        let ticks = (u64::from(self.fire_cooldown_ms) * u64::from(self.fps)).div_ceil(1000);
        u32::try_from(ticks).unwrap_or(u32::MAX)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("arena_width", self.arena_width)?;
        positive("arena_height", self.arena_height)?;
        positive("tank_size", self.tank_size)?;
        positive("bullet_size", self.bullet_size)?;
        positive("wall_size", self.wall_size)?;
        non_negative("tank_speed", self.tank_speed)?;
        non_negative("bullet_speed", self.bullet_speed)?;
        non_negative("turret_rot_speed", self.turret_rot_speed)?;
        non_negative("wall_clearance", self.wall_clearance)?;

        if self.fps == 0 {
            return Err(invalid("fps", "must be at least 1"));
        }
        if self.max_health <= 0 {
            return Err(invalid("max_health", "must be positive"));
        }
        if self.bullet_damage < 0 {
            return Err(invalid("bullet_damage", "must not be negative"));
        }
        if self.tank_size > self.arena_width || self.tank_size > self.arena_height {
            return Err(invalid("tank_size", "tank does not fit in the arena"));
        }
        if self.wall_count_min > self.wall_count_max {
            return Err(invalid(
                "wall_count_min",
                format!(
                    "minimum {} exceeds maximum {}",
                    self.wall_count_min, self.wall_count_max
                ),
            ));
        }
        if self.wall_placement_attempts == 0 {
            return Err(invalid("wall_placement_attempts", "must be at least 1"));
        }
        let (span_x, span_y) = self.wall_sampling_span();
        if span_x < 1.0 || span_y < 1.0 {
            return Err(invalid(
                "wall_margin_x",
                "margins leave no room to place walls",
            ));
        }

        if self.players.is_empty() {
            return Err(invalid("players", "at least one player is required"));
        }
        for (index, player) in self.players.iter().enumerate() {
            let max_x = self.arena_width - self.tank_size;
            let max_y = self.arena_height - self.tank_size;
            if !(0.0..=max_x).contains(&player.spawn.x) || !(0.0..=max_y).contains(&player.spawn.y)
            {
                return Err(invalid(
                    "players",
                    format!("spawn of player {index} lies outside the arena"),
                ));
            }
        }
        Ok(())
    }

    /// Width and height of the integer grid wall positions are sampled from.
    pub(crate) fn wall_sampling_span(&self) -> (f32, f32) {
        (
            (self.arena_width - 2.0 * self.wall_margin_x).floor(),
            (self.arena_height - self.wall_margin_top - self.wall_margin_bottom).floor(),
        )
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, "must be a positive number"))
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(field, "must not be negative"))
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}
