mod generation;
mod obstacles;

use glam::Vec2;
use rand::rngs::SmallRng;

use crate::config::GameConfig;
use crate::math::Rect;

pub use obstacles::{Wall, WallKind};

/// The static playfield: its extent, the walls of the current round and the
/// spawn point of every tank slot.
#[derive(Clone, Debug)]
pub struct World {
    pub width: f32,
    pub height: f32,
    pub walls: Vec<Wall>,
    pub spawn_points: Vec<Vec2>,
}

impl World {
    pub fn new(config: &GameConfig, rng: &mut SmallRng) -> Self {
        generation::generate_world(config, rng)
    }

    pub fn world_bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// Replaces the wall set with a freshly sampled one.
    pub fn regenerate_walls(&mut self, config: &GameConfig, rng: &mut SmallRng) {
        obstacles::generate_walls(self, config, rng);
    }
}
