use glam::Vec2;
use rand::{rngs::SmallRng, Rng};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::GameConfig;
use crate::math::{vec2, Bounds, Rect};

use super::World;

const FALLBACK_GRID_CELLS: u32 = 256;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WallKind {
    #[default]
    Normal,
    Brick,
    Metal,
    Water,
    Forest,
}

impl WallKind {
    pub fn destructible(self) -> bool {
        matches!(self, WallKind::Normal | WallKind::Brick)
    }

    /// Forest hides tanks but does not stop them.
    pub fn passable(self) -> bool {
        matches!(self, WallKind::Forest)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Wall {
    pub rect: Rect,
    pub kind: WallKind,
    destructible: bool,
    passable: bool,
}

impl Wall {
    pub fn new(rect: Rect, kind: WallKind) -> Self {
        Self {
            rect,
            kind,
            destructible: kind.destructible(),
            passable: kind.passable(),
        }
    }

    pub fn destructible(&self) -> bool {
        self.destructible
    }

    pub fn passable(&self) -> bool {
        self.passable
    }
}

impl Bounds for Wall {
    fn bounds(&self) -> Rect {
        self.rect
    }
}

pub(super) fn generate_walls(world: &mut World, config: &GameConfig, rng: &mut SmallRng) {
    world.walls.clear();
    let count = rng.random_range(config.wall_count_min..=config.wall_count_max);
    for _ in 0..count {
        let pos = find_open_wall_position(&world.spawn_points, config, rng);
        world.walls.push(Wall::new(
            Rect::square(pos, config.wall_size),
            WallKind::Normal,
        ));
    }
    debug!(count, "generated walls");
}

fn find_open_wall_position(spawns: &[Vec2], config: &GameConfig, rng: &mut SmallRng) -> Vec2 {
    let (span_x, span_y) = config.wall_sampling_span();
    let (span_x, span_y) = (span_x as u32, span_y as u32);
    for _ in 0..config.wall_placement_attempts {
        let pos = vec2(
            config.wall_margin_x + rng.random_range(0..span_x) as f32,
            config.wall_margin_top + rng.random_range(0..span_y) as f32,
        );
        if clear_of_spawns(pos, spawns, config.wall_clearance) {
            return pos;
        }
    }

    let fallback = fallback_wall_position(spawns, config);
    warn!(
        attempts = config.wall_placement_attempts,
        x = fallback.x,
        y = fallback.y,
        "wall placement exhausted its attempts, using fallback position"
    );
    fallback
}

/// A spot is acceptable when it is far from every spawn on at least one axis.
pub(crate) fn clear_of_spawns(pos: Vec2, spawns: &[Vec2], clearance: f32) -> bool {
    spawns
        .iter()
        .all(|spawn| (pos.x - spawn.x).abs() > clearance || (pos.y - spawn.y).abs() > clearance)
}

/// Scans the sampling range on a coarse grid and takes the first clear cell,
/// falling back to the far corner of the range.
fn fallback_wall_position(spawns: &[Vec2], config: &GameConfig) -> Vec2 {
    let (span_x, span_y) = config.wall_sampling_span();
    let (cols, step_x) = grid_axis(span_x, config.wall_size);
    let (rows, step_y) = grid_axis(span_y, config.wall_size);
    for row in 0..rows {
        for col in 0..cols {
            let pos = vec2(
                config.wall_margin_x + col as f32 * step_x,
                config.wall_margin_top + row as f32 * step_y,
            );
            if clear_of_spawns(pos, spawns, config.wall_clearance) {
                return pos;
            }
        }
    }
    vec2(
        config.wall_margin_x + span_x - 1.0,
        config.wall_margin_top + span_y - 1.0,
    )
}

/// Cell count and spacing along one axis of the fallback grid. Wide spans
/// get stretched cells so the scan stays bounded.
fn grid_axis(span: f32, wall_size: f32) -> (u32, f32) {
    let step = wall_size.max(1.0);
    let cells = (span / step).ceil().clamp(1.0, FALLBACK_GRID_CELLS as f32) as u32;
    (cells, (span / cells as f32).max(step))
}
