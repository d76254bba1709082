use crate::config::GameConfig;
use crate::entities::{Bullet, Tank};
use crate::game::input::InputState;

use super::combat::fire_bullet;
use super::movement::{drive_tank, traverse_turret, update_tank_timers};

impl Tank {
    /// Runs one tick of this tank's controls. Dead tanks ignore input.
    /// A shot fired this tick is appended to `new_bullets`.
    pub fn update(
        &mut self,
        input: &InputState,
        config: &GameConfig,
        new_bullets: &mut Vec<Bullet>,
    ) {
        if !self.alive {
            return;
        }
        update_tank_timers(self);
        drive_tank(self, input, config);
        traverse_turret(self, input, config);

        let wants_fire = input.is_held(self.controls.fire);
        if wants_fire && !self.cooldown_active() {
            fire_bullet(self, config, new_bullets);
        }
    }
}
