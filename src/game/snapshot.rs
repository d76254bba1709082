//! Read-only view of a game for renderers and tooling.

use serde::Serialize;

use crate::entities::{CamoSpot, Direction, TankColor};
use crate::math::Rect;
use crate::world::WallKind;

use super::{Game, GameState};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TankView {
    pub name: String,
    pub color: TankColor,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub direction: Direction,
    pub turret_angle: f32,
    pub barrel_angle: f32,
    pub health: i32,
    pub max_health: i32,
    pub score: u32,
    pub alive: bool,
    pub camouflage: Vec<CamoSpot>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BulletView {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub angle: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WallView {
    pub rect: Rect,
    pub kind: WallKind,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Snapshot {
    pub tick: u64,
    pub state: GameState,
    pub arena_width: f32,
    pub arena_height: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<String>,
    pub tanks: Vec<TankView>,
    pub bullets: Vec<BulletView>,
    pub walls: Vec<WallView>,
}

impl Game {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tick: self.tick,
            state: self.state,
            arena_width: self.world.width,
            arena_height: self.world.height,
            winner: self.winner().map(|tank| tank.name.clone()),
            tanks: self
                .tanks
                .iter()
                .map(|tank| TankView {
                    name: tank.name.clone(),
                    color: tank.color,
                    x: tank.pos.x,
                    y: tank.pos.y,
                    size: tank.size,
                    direction: tank.direction,
                    turret_angle: tank.turret_angle,
                    barrel_angle: tank.barrel_angle(),
                    health: tank.health,
                    max_health: tank.max_health,
                    score: tank.score,
                    alive: tank.alive,
                    camouflage: tank.camouflage.clone(),
                })
                .collect(),
            bullets: self
                .bullets
                .iter()
                .map(|bullet| BulletView {
                    x: bullet.pos.x,
                    y: bullet.pos.y,
                    size: bullet.size,
                    angle: bullet.angle,
                })
                .collect(),
            walls: self
                .world
                .walls
                .iter()
                .map(|wall| WallView {
                    rect: wall.rect,
                    kind: wall.kind,
                })
                .collect(),
        }
    }

    pub fn snapshot_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.snapshot())
    }
}
