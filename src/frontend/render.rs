use raylib::prelude::{Color, RaylibDraw, RaylibDrawHandle, Vector2};

use crate::entities::Direction;
use crate::game::input::Key;
use crate::game::{BulletView, GameState, Snapshot, TankView, WallView};
use crate::world::WallKind;

const BACKGROUND: Color = Color::new(34, 40, 34, 255);
const TRACK: Color = Color::new(51, 51, 51, 255);
const TURRET_BASE: Color = Color::new(68, 68, 68, 255);
const BARREL: Color = Color::new(85, 85, 85, 255);
const SHELL: Color = Color::new(255, 255, 0, 255);
const TEXT: Color = Color::new(240, 240, 240, 255);

pub(super) fn draw_frame(d: &mut RaylibDrawHandle, snapshot: &Snapshot, reset_key: Key) {
    d.clear_background(BACKGROUND);
    for wall in &snapshot.walls {
        draw_wall(d, wall);
    }
    for tank in snapshot.tanks.iter().filter(|tank| tank.alive) {
        draw_tank(d, tank);
    }
    for bullet in &snapshot.bullets {
        draw_bullet(d, bullet);
    }
    draw_hud(d, snapshot);
    if snapshot.state == GameState::GameOver {
        draw_game_over(d, snapshot, reset_key);
    }
}

fn rgb(color: [u8; 3]) -> Color {
    Color::new(color[0], color[1], color[2], 255)
}

fn draw_wall(d: &mut RaylibDrawHandle, wall: &WallView) {
    let (fill, edge) = match wall.kind {
        WallKind::Normal => (Color::new(139, 69, 19, 255), Color::new(160, 82, 45, 255)),
        WallKind::Brick => (Color::new(178, 34, 34, 255), Color::new(139, 0, 0, 255)),
        WallKind::Metal => (Color::new(112, 128, 144, 255), Color::new(192, 192, 192, 255)),
        WallKind::Water => (Color::new(30, 144, 255, 200), Color::new(0, 90, 200, 255)),
        WallKind::Forest => (Color::new(34, 139, 34, 220), Color::new(0, 100, 0, 255)),
    };
    let r = wall.rect;
    d.draw_rectangle(r.x as i32, r.y as i32, r.width as i32, r.height as i32, fill);
    d.draw_rectangle_lines(r.x as i32, r.y as i32, r.width as i32, r.height as i32, edge);
}

fn draw_tank(d: &mut RaylibDrawHandle, tank: &TankView) {
    let (x, y, size) = (tank.x, tank.y, tank.size);
    let center = Vector2::new(x + size * 0.5, y + size * 0.5);
    d.draw_rectangle(x as i32, y as i32, size as i32, size as i32, rgb(tank.color.rgb()));

    for spot in &tank.camouflage {
        let radius = (spot.radius * size).min(size * 0.25);
        let cx = (x + spot.x * size).clamp(x + radius, x + size - radius);
        let cy = (y + spot.y * size).clamp(y + radius, y + size - radius);
        d.draw_circle(cx as i32, cy as i32, radius, rgb(spot.color));
    }

    let track = size / 4.0;
    if matches!(tank.direction, Direction::Up | Direction::Down) {
        d.draw_rectangle(x as i32, y as i32, track as i32, size as i32, TRACK);
        d.draw_rectangle((x + size - track) as i32, y as i32, track as i32, size as i32, TRACK);
    } else {
        d.draw_rectangle(x as i32, y as i32, size as i32, track as i32, TRACK);
        d.draw_rectangle(x as i32, (y + size - track) as i32, size as i32, track as i32, TRACK);
    }

    d.draw_circle(center.x as i32, center.y as i32, size / 3.0, TURRET_BASE);
    let muzzle = Vector2::new(
        center.x + tank.barrel_angle.cos() * size * 0.5,
        center.y + tank.barrel_angle.sin() * size * 0.5,
    );
    d.draw_line_ex(center, muzzle, 6.0, BARREL);

    let pct = (tank.health as f32 / tank.max_health as f32).clamp(0.0, 1.0);
    d.draw_rectangle(x as i32, (y - 8.0) as i32, (size * pct) as i32, 4, Color::RED);
    d.draw_rectangle_lines(x as i32, (y - 8.0) as i32, size as i32, 4, Color::BLACK);

    let label_width = d.measure_text(&tank.name, 10);
    d.draw_text(
        &tank.name,
        (center.x as i32) - label_width / 2,
        (y - 22.0) as i32,
        10,
        TEXT,
    );
}

fn draw_bullet(d: &mut RaylibDrawHandle, bullet: &BulletView) {
    d.draw_rectangle(
        bullet.x as i32,
        bullet.y as i32,
        bullet.size as i32,
        bullet.size as i32,
        SHELL,
    );
}

fn draw_hud(d: &mut RaylibDrawHandle, snapshot: &Snapshot) {
    for (index, tank) in snapshot.tanks.iter().enumerate() {
        let label = format!("{}: {} pts  HP {}", tank.name, tank.score, tank.health);
        d.draw_text(&label, 10, 10 + index as i32 * 26, 20, rgb(tank.color.rgb()));
    }
}

fn draw_game_over(d: &mut RaylibDrawHandle, snapshot: &Snapshot, reset_key: Key) {
    let width = snapshot.arena_width as i32;
    let height = snapshot.arena_height as i32;
    d.draw_rectangle(0, 0, width, height, Color::new(0, 0, 0, 180));

    let message = match &snapshot.winner {
        Some(name) => format!("{name} wins!"),
        None => "Nobody survived".to_string(),
    };
    let size = 40;
    let message_width = d.measure_text(&message, size);
    d.draw_text(&message, (width - message_width) / 2, height / 2 - 40, size, TEXT);

    let prompt = format!("Press {reset_key:?} to play again");
    let prompt_width = d.measure_text(&prompt, 20);
    d.draw_text(
        &prompt,
        (width - prompt_width) / 2,
        height / 2 + 10,
        20,
        Color::new(220, 200, 120, 255),
    );
}
