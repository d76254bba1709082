mod collisions;
mod combat;
mod movement;
mod player;
mod spawn;

use rand::rngs::SmallRng;

use crate::config::GameConfig;
use crate::entities::Tank;

use super::input::InputState;
use super::Game;

pub(crate) use combat::apply_damage;

pub(super) fn spawn_tanks(config: &GameConfig, rng: &mut SmallRng) -> Vec<Tank> {
    spawn::spawn_tanks(config, rng)
}

impl Game {
    pub(super) fn update_tanks(&mut self, input: &InputState) {
        let mut new_bullets = Vec::new();
        for tank in self.tanks.iter_mut().filter(|tank| tank.alive) {
            tank.update(input, &self.config, &mut new_bullets);
        }
        self.bullets.extend(new_bullets);
    }

    pub(super) fn resolve_tank_collisions(&mut self) {
        collisions::resolve_wall_collisions(&mut self.tanks, &self.world.walls);
    }

    pub(super) fn respawn_tanks(&mut self) {
        self.tanks.iter_mut().for_each(spawn::respawn_tank);
    }
}
