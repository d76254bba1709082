use rand::{rngs::SmallRng, Rng};

use crate::config::{GameConfig, PlayerConfig};
use crate::entities::{CamoSpot, Direction, Tank, TankColor, TankId};

const CAMO_VARIATION: i32 = 30;

pub(super) fn spawn_tanks(config: &GameConfig, rng: &mut SmallRng) -> Vec<Tank> {
    config
        .players
        .iter()
        .enumerate()
        .map(|(index, player)| spawn_tank(TankId(index), player, config, rng))
        .collect()
}

fn spawn_tank(id: TankId, player: &PlayerConfig, config: &GameConfig, rng: &mut SmallRng) -> Tank {
    Tank {
        id,
        name: player.name.clone(),
        color: player.color,
        controls: player.controls,
        spawn: player.spawn,
        pos: player.spawn,
        size: config.tank_size,
        direction: Direction::Up,
        turret_angle: 0.0,
        health: config.max_health,
        max_health: config.max_health,
        score: 0,
        alive: true,
        base_speed: config.tank_speed,
        speed: config.tank_speed,
        fire_cooldown: 0,
        camouflage: camouflage(player.color, rng),
    }
}

/// Puts a tank back on its spawn point for a new round. Score carries over.
pub(super) fn respawn_tank(tank: &mut Tank) {
    tank.pos = tank.spawn;
    tank.direction = Direction::Up;
    tank.turret_angle = 0.0;
    tank.health = tank.max_health;
    tank.alive = true;
    tank.speed = tank.base_speed;
    tank.fire_cooldown = 0;
}

fn camouflage(color: TankColor, rng: &mut SmallRng) -> Vec<CamoSpot> {
    let base = color.rgb();
    let count = rng.random_range(5..=14);
    (0..count)
        .map(|_| CamoSpot {
            x: rng.random_range(0.0..1.0),
            y: rng.random_range(0.0..1.0),
            radius: rng.random_range(0.1..0.4),
            color: base.map(|channel| {
                let shift = rng.random_range(-CAMO_VARIATION..CAMO_VARIATION);
                (channel as i32 + shift).clamp(0, 255) as u8
            }),
        })
        .collect()
}
