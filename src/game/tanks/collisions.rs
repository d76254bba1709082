use crate::entities::{Direction, Tank};
use crate::math::overlaps;
use crate::world::Wall;

/// Shoves tanks out of solid walls, back along the axis they were driving on.
pub(super) fn resolve_wall_collisions(tanks: &mut [Tank], walls: &[Wall]) {
    for tank in tanks.iter_mut().filter(|tank| tank.alive) {
        for wall in walls.iter().filter(|wall| !wall.passable()) {
            if overlaps(tank, wall) {
                push_out_of_wall(tank, wall);
            }
        }
    }
}

fn push_out_of_wall(tank: &mut Tank, wall: &Wall) {
    let rect = wall.rect;
    match tank.direction {
        Direction::Up => tank.pos.y = rect.bottom(),
        Direction::Down => tank.pos.y = rect.y - tank.size,
        Direction::Left => tank.pos.x = rect.right(),
        Direction::Right => tank.pos.x = rect.x - tank.size,
    }
}
