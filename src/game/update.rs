use tracing::{debug, info};

use crate::math::overlaps;

use super::input::InputState;
use super::tanks::apply_damage;
use super::{Game, GameState};

impl Game {
    /// Frame-driver entry point: a held reset key restarts a finished round,
    /// otherwise the simulation advances one tick.
    pub fn step(&mut self, input: &InputState) {
        if self.is_over() {
            if input.is_held(self.config.reset_key) {
                self.reset_game();
            }
            return;
        }
        self.update(input);
    }

    /// Advances the simulation by one tick. Does nothing once the round is over.
    pub fn update(&mut self, input: &InputState) {
        if self.state != GameState::Running {
            return;
        }
        self.tick += 1;

        self.update_tanks(input);
        self.bullets.iter_mut().for_each(|bullet| bullet.advance());

        // Order matters: shells die on walls before they can hit a tank, and
        // tanks are pushed out of walls last.
        self.resolve_bullet_walls();
        self.resolve_bullet_hits();
        self.resolve_tank_collisions();

        self.check_round_end();
    }

    fn resolve_bullet_walls(&mut self) {
        let bounds = self.world.world_bounds();
        let walls = &self.world.walls;
        self.bullets.retain(|bullet| {
            bounds.contains_strict(bullet.pos) && !walls.iter().any(|wall| overlaps(bullet, wall))
        });
    }

    /// A shell damages the first live tank it overlaps, other than the one
    /// that fired it, and is spent.
    fn resolve_bullet_hits(&mut self) {
        let damage = self.config.bullet_damage;
        let tanks = &mut self.tanks;
        self.bullets.retain(|bullet| {
            let Some(target) = tanks.iter().position(|tank| {
                tank.alive && Some(tank.id) != bullet.owner && overlaps(bullet, tank)
            }) else {
                return true;
            };

            if apply_damage(&mut tanks[target], damage) {
                let victim = tanks[target].name.clone();
                let owner = bullet
                    .owner
                    .and_then(|id| tanks.iter_mut().find(|tank| tank.id == id));
                match owner {
                    Some(owner) => {
                        owner.score += 1;
                        debug!(killer = %owner.name, %victim, score = owner.score, "tank destroyed");
                    }
                    None => debug!(%victim, "tank destroyed by unowned shell"),
                }
            }
            false
        });
    }

    fn check_round_end(&mut self) {
        if self.alive_count() <= 1 {
            self.state = GameState::GameOver;
            let winner = self.winner().map(|tank| tank.name.as_str()).unwrap_or("nobody");
            info!(tick = self.tick, winner, "round over");
        }
    }
}
