use rand::rngs::SmallRng;

use crate::config::GameConfig;

use super::obstacles;
use super::World;

pub(super) fn generate_world(config: &GameConfig, rng: &mut SmallRng) -> World {
    let mut world = World {
        width: config.arena_width,
        height: config.arena_height,
        walls: Vec::new(),
        spawn_points: config.players.iter().map(|player| player.spawn).collect(),
    };
    obstacles::generate_walls(&mut world, config, rng);
    world
}
