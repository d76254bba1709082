use std::f32::consts::{FRAC_PI_2, PI};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::game::input::Controls;
use crate::math::{vec2_from_angle, Bounds, Rect};

/// Stable handle for a tank slot. Bullets keep one of these instead of a
/// reference so kill attribution survives any reshuffling of the tank list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TankId(pub usize);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Heading of the hull in screen space (y grows downward).
    pub fn base_angle(self) -> f32 {
        match self {
            Direction::Up => -FRAC_PI_2,
            Direction::Right => 0.0,
            Direction::Down => FRAC_PI_2,
            Direction::Left => PI,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TankColor {
    Red,
    Green,
    Blue,
    Yellow,
    Purple,
    Orange,
}

impl TankColor {
    pub fn rgb(self) -> [u8; 3] {
        match self {
            TankColor::Red => [255, 0, 0],
            TankColor::Green => [0, 128, 0],
            TankColor::Blue => [0, 0, 255],
            TankColor::Yellow => [230, 200, 40],
            TankColor::Purple => [128, 0, 128],
            TankColor::Orange => [255, 140, 0],
        }
    }
}

/// One blob of hull paint, in coordinates relative to the tank's box.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CamoSpot {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub color: [u8; 3],
}

#[derive(Clone, Debug)]
pub struct Tank {
    pub id: TankId,
    pub name: String,
    pub color: TankColor,
    pub controls: Controls,
    pub spawn: Vec2,
    /// Top-left corner of the hull's bounding box.
    pub pos: Vec2,
    pub size: f32,
    pub direction: Direction,
    /// Offset from the hull heading, kept within the turret's traverse.
    pub turret_angle: f32,
    pub health: i32,
    pub max_health: i32,
    pub score: u32,
    pub alive: bool,
    pub base_speed: f32,
    pub speed: f32,
    /// Ticks until the gun may fire again; zero means ready.
    pub fire_cooldown: u32,
    pub camouflage: Vec<CamoSpot>,
}

impl Tank {
    pub fn center(&self) -> Vec2 {
        self.bounds().center()
    }

    /// World-space angle of the barrel.
    pub fn barrel_angle(&self) -> f32 {
        self.direction.base_angle() + self.turret_angle
    }

    pub fn cooldown_active(&self) -> bool {
        self.fire_cooldown > 0
    }
}

impl Bounds for Tank {
    fn bounds(&self) -> Rect {
        Rect::square(self.pos, self.size)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    /// Top-left corner of the shell's bounding box.
    pub pos: Vec2,
    pub angle: f32,
    pub speed: f32,
    pub size: f32,
    pub owner: Option<TankId>,
}

impl Bullet {
    pub fn new(pos: Vec2, angle: f32, speed: f32, size: f32, owner: Option<TankId>) -> Self {
        Self {
            pos,
            angle,
            speed,
            size,
            owner,
        }
    }

    pub fn velocity(&self) -> Vec2 {
        vec2_from_angle(self.angle) * self.speed
    }

    pub fn advance(&mut self) {
        self.pos += self.velocity();
    }
}

impl Bounds for Bullet {
    fn bounds(&self) -> Rect {
        Rect::square(self.pos, self.size)
    }
}
