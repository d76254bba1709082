pub mod input;
mod snapshot;
mod tanks;
mod update;

#[cfg(test)]
mod tests;

use rand::{rngs::SmallRng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::GameConfig;
use crate::entities::{Bullet, Tank};
use crate::error::ConfigError;
use crate::world::World;

pub use snapshot::{BulletView, Snapshot, TankView, WallView};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    Running,
    GameOver,
}

/// The whole simulation: arena, tanks, shells in flight and the round state.
/// One [`Game::update`] call is one tick.
pub struct Game {
    state: GameState,
    config: GameConfig,
    world: World,
    tanks: Vec<Tank>,
    bullets: Vec<Bullet>,
    rng: SmallRng,
    tick: u64,
}

impl Game {
    pub fn new(seed: u64) -> Self {
        Self::build(GameConfig::default(), seed)
    }

    pub fn with_config(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, seed))
    }

    fn build(config: GameConfig, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let world = World::new(&config, &mut rng);
        let tanks = tanks::spawn_tanks(&config, &mut rng);
        info!(seed, tanks = tanks.len(), walls = world.walls.len(), "game created");
        Self {
            state: GameState::Running,
            config,
            world,
            tanks,
            bullets: Vec::new(),
            rng,
            tick: 0,
        }
    }

    /// Starts a new round: tanks return to their spawns at full health,
    /// shells in flight vanish and the walls are rebuilt. Scores are kept.
    pub fn reset_game(&mut self) {
        self.respawn_tanks();
        self.bullets.clear();
        self.world.regenerate_walls(&self.config, &mut self.rng);
        self.state = GameState::Running;
        info!(walls = self.world.walls.len(), "round reset");
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state == GameState::GameOver
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn tanks(&self) -> &[Tank] {
        &self.tanks
    }

    pub fn bullets(&self) -> &[Bullet] {
        &self.bullets
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn alive_count(&self) -> usize {
        self.tanks.iter().filter(|tank| tank.alive).count()
    }

    /// The last tank standing once the round is over.
    pub fn winner(&self) -> Option<&Tank> {
        if !self.is_over() {
            return None;
        }
        let mut alive = self.tanks.iter().filter(|tank| tank.alive);
        match (alive.next(), alive.next()) {
            (Some(tank), None) => Some(tank),
            _ => None,
        }
    }

    /// Direct access for tooling and tests that stage specific situations.
    pub fn tanks_mut(&mut self) -> &mut [Tank] {
        &mut self.tanks
    }

    pub fn bullets_mut(&mut self) -> &mut Vec<Bullet> {
        &mut self.bullets
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}
