use crate::config::{GameConfig, TURRET_LIMIT};
use crate::entities::{Direction, Tank};
use crate::game::input::InputState;
use crate::math::clamp_to_area;

/// Applies held movement keys. Keys are read up, down, left, right; each one
/// moves the hull along its axis and turns it, so the last held key decides
/// the facing and perpendicular keys combine into a diagonal.
pub(super) fn drive_tank(tank: &mut Tank, input: &InputState, config: &GameConfig) {
    let controls = tank.controls;
    if input.is_held(controls.up) {
        tank.direction = Direction::Up;
        tank.pos.y -= tank.speed;
    }
    if input.is_held(controls.down) {
        tank.direction = Direction::Down;
        tank.pos.y += tank.speed;
    }
    if input.is_held(controls.left) {
        tank.direction = Direction::Left;
        tank.pos.x -= tank.speed;
    }
    if input.is_held(controls.right) {
        tank.direction = Direction::Right;
        tank.pos.x += tank.speed;
    }
    tank.pos = clamp_to_area(tank.pos, tank.size, config.arena_width, config.arena_height);
}

pub(super) fn traverse_turret(tank: &mut Tank, input: &InputState, config: &GameConfig) {
    if input.held_opt(tank.controls.rotate_left) {
        tank.turret_angle -= config.turret_rot_speed;
    }
    if input.held_opt(tank.controls.rotate_right) {
        tank.turret_angle += config.turret_rot_speed;
    }
    tank.turret_angle = tank.turret_angle.clamp(-TURRET_LIMIT, TURRET_LIMIT);
}

pub(super) fn update_tank_timers(tank: &mut Tank) {
    tank.fire_cooldown = tank.fire_cooldown.saturating_sub(1);
}
