use tracing::trace;

use crate::config::GameConfig;
use crate::entities::{Bullet, Tank};
use crate::math::vec2_from_angle;

impl Tank {
    /// Builds the shell leaving the muzzle. The caller owns the live bullet
    /// list and decides where it goes.
    pub fn fire(&self, config: &GameConfig) -> Bullet {
        let angle = self.barrel_angle();
        let reach = config.turret_length + config.muzzle_offset;
        let pos = self.center() + vec2_from_angle(angle) * reach;
        trace!(tank = %self.name, x = pos.x, y = pos.y, angle, "fire");
        Bullet::new(
            pos,
            angle,
            config.bullet_speed,
            config.bullet_size,
            Some(self.id),
        )
    }
}

pub(super) fn fire_bullet(tank: &mut Tank, config: &GameConfig, new_bullets: &mut Vec<Bullet>) {
    new_bullets.push(tank.fire(config));
    tank.fire_cooldown = config.fire_cooldown_ticks();
}

/// Returns true when this hit destroyed the tank.
pub(crate) fn apply_damage(tank: &mut Tank, damage: i32) -> bool {
    tank.health = (tank.health - damage).max(0);
    if tank.health <= 0 {
        tank.alive = false;
        return true;
    }
    false
}
