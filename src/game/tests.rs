use super::*;
use crate::entities::{Bullet, Direction, TankId};
use crate::game::input::{InputState, Key};
use crate::math::{vec2, Rect};
use crate::world::{Wall, WallKind};

/// A game with no walls, so staged shells only meet what the test puts there.
fn open_game() -> Game {
    let mut game = Game::new(0xDEAD_BEEF);
    game.world_mut().walls.clear();
    game
}

fn parked_shell(x: f32, y: f32, owner: Option<TankId>) -> Bullet {
    Bullet::new(vec2(x, y), 0.0, 0.0, 10.0, owner)
}

fn idle() -> InputState {
    InputState::new()
}

#[test]
fn new_game_starts_running_with_everyone_alive() {
    let game = Game::new(1);
    assert_eq!(game.state(), GameState::Running);
    assert_eq!(game.alive_count(), 3);
    assert!(game.bullets().is_empty());
    assert!((4..=6).contains(&game.world().walls.len()));
    assert!(game.winner().is_none());
}

#[test]
fn shell_kills_weakened_tank_and_credits_owner() {
    let mut game = open_game();
    game.tanks_mut()[1].health = 10;
    let target = game.tanks()[1].pos;
    game.bullets_mut()
        .push(parked_shell(target.x + 10.0, target.y + 10.0, Some(TankId(0))));

    game.update(&idle());

    let victim = &game.tanks()[1];
    assert_eq!(victim.health, 0);
    assert!(!victim.alive);
    assert_eq!(game.tanks()[0].score, 1);
    assert!(game.bullets().is_empty());
    assert_eq!(game.state(), GameState::Running);
}

#[test]
fn shell_without_owner_kills_but_scores_nothing() {
    let mut game = open_game();
    game.tanks_mut()[2].health = 10;
    let target = game.tanks()[2].pos;
    game.bullets_mut()
        .push(parked_shell(target.x + 5.0, target.y + 5.0, None));

    game.update(&idle());

    assert!(!game.tanks()[2].alive);
    assert!(game.tanks().iter().all(|tank| tank.score == 0));
    assert!(game.bullets().is_empty());
}

#[test]
fn shell_ignores_its_owner() {
    let mut game = open_game();
    let own = game.tanks()[1].pos;
    game.bullets_mut()
        .push(parked_shell(own.x + 10.0, own.y + 10.0, Some(TankId(1))));

    game.update(&idle());

    assert_eq!(game.tanks()[1].health, 100);
    assert_eq!(game.bullets().len(), 1);
}

#[test]
fn shell_hits_at_most_one_tank() {
    let mut game = open_game();
    let stacked = game.tanks()[1].pos;
    game.tanks_mut()[2].pos = stacked;
    game.bullets_mut()
        .push(parked_shell(stacked.x + 10.0, stacked.y + 10.0, Some(TankId(0))));

    game.update(&idle());

    assert_eq!(game.tanks()[1].health, 90);
    assert_eq!(game.tanks()[2].health, 100);
    assert!(game.bullets().is_empty());
}

#[test]
fn health_never_goes_negative() {
    let mut game = open_game();
    game.tanks_mut()[1].health = 5;
    let target = game.tanks()[1].pos;
    for offset in [2.0, 6.0, 10.0] {
        game.bullets_mut().push(parked_shell(
            target.x + offset,
            target.y + offset,
            Some(TankId(0)),
        ));
    }

    game.update(&idle());

    assert_eq!(game.tanks()[1].health, 0);
    assert!(!game.tanks()[1].alive);
    assert_eq!(game.tanks()[0].score, 1);
    // The dead tank no longer absorbs shells.
    assert_eq!(game.bullets().len(), 2);
}

#[test]
fn shells_leave_through_walls_and_edges() {
    let mut game = open_game();
    game.world_mut().walls.push(Wall::new(
        Rect::new(300.0, 300.0, 50.0, 50.0),
        WallKind::Metal,
    ));
    game.world_mut().walls.push(Wall::new(
        Rect::new(500.0, 300.0, 50.0, 50.0),
        WallKind::Forest,
    ));
    game.bullets_mut().extend([
        parked_shell(310.0, 310.0, None),
        parked_shell(510.0, 310.0, None),
        parked_shell(-5.0, 400.0, None),
        parked_shell(0.0, 400.0, None),
        parked_shell(200.0, 650.0, None),
        parked_shell(200.0, 400.0, None),
    ]);

    game.update(&idle());

    assert_eq!(game.bullets().len(), 1);
    assert_eq!(game.bullets()[0].pos, vec2(200.0, 400.0));
}

#[test]
fn fresh_shell_moves_on_the_tick_it_is_fired() {
    let mut game = open_game();
    let mut expected = game.tanks()[0].fire(game.config());
    expected.advance();

    game.update(&[Key::Space].into_iter().collect());

    assert_eq!(game.bullets().len(), 1);
    assert_eq!(game.bullets()[0], expected);
    assert_eq!(game.tanks()[0].fire_cooldown, 30);
}

#[test]
fn tank_driving_into_wall_is_pushed_back() {
    let mut game = open_game();
    game.world_mut().walls.push(Wall::new(
        Rect::new(100.0, 150.0, 50.0, 50.0),
        WallKind::Normal,
    ));
    game.tanks_mut()[0].pos = vec2(100.0, 108.0);

    game.update(&[Key::S].into_iter().collect());

    let tank = &game.tanks()[0];
    assert_eq!(tank.direction, Direction::Down);
    assert_eq!(tank.pos, vec2(100.0, 110.0));
}

#[test]
fn last_tank_standing_ends_the_round() {
    let mut game = open_game();
    for index in [1, 2] {
        game.tanks_mut()[index].health = 10;
        let pos = game.tanks()[index].pos;
        game.bullets_mut()
            .push(parked_shell(pos.x + 10.0, pos.y + 10.0, Some(TankId(0))));
    }

    game.update(&idle());

    assert_eq!(game.state(), GameState::GameOver);
    assert_eq!(game.alive_count(), 1);
    let winner = game.winner().expect("one survivor");
    assert_eq!(winner.id, TankId(0));
    assert_eq!(winner.score, 2);

    let frozen = game.snapshot();
    game.update(&[Key::D, Key::Space, Key::Left].into_iter().collect());
    assert_eq!(game.snapshot(), frozen);
}

#[test]
fn everyone_dying_at_once_is_game_over_without_winner() {
    let mut game = open_game();
    for index in 0..3 {
        game.tanks_mut()[index].health = 10;
        let pos = game.tanks()[index].pos;
        game.bullets_mut()
            .push(parked_shell(pos.x + 10.0, pos.y + 10.0, None));
    }

    game.update(&idle());

    assert!(game.is_over());
    assert!(game.winner().is_none());
}

#[test]
fn reset_restores_round_start() {
    let mut game = Game::new(77);
    game.world_mut().walls.clear();
    for index in [1, 2] {
        game.tanks_mut()[index].health = 10;
        let pos = game.tanks()[index].pos;
        game.bullets_mut()
            .push(parked_shell(pos.x + 10.0, pos.y + 10.0, Some(TankId(0))));
    }
    game.tanks_mut()[0].pos = vec2(333.0, 444.0);
    game.tanks_mut()[0].direction = Direction::Left;
    game.bullets_mut().push(parked_shell(600.0, 600.0, None));
    game.update(&idle());
    assert!(game.is_over());

    game.reset_game();

    assert_eq!(game.state(), GameState::Running);
    assert!(game.bullets().is_empty());
    let spawns = [vec2(100.0, 100.0), vec2(400.0, 100.0), vec2(700.0, 100.0)];
    for (tank, spawn) in game.tanks().iter().zip(spawns) {
        assert_eq!(tank.pos, spawn);
        assert_eq!(tank.health, 100);
        assert!(tank.alive);
        assert_eq!(tank.direction, Direction::Up);
    }
    assert_eq!(game.tanks()[0].score, 2);

    let walls = &game.world().walls;
    assert!((4..=6).contains(&walls.len()));
    for wall in walls {
        assert!(spawns.iter().all(|spawn| {
            (wall.rect.x - spawn.x).abs() > 100.0 || (wall.rect.y - spawn.y).abs() > 100.0
        }));
    }
}

#[test]
fn step_resets_only_when_over() {
    let mut game = open_game();
    let reset: InputState = [Key::R].into_iter().collect();

    game.step(&reset);
    assert_eq!(game.tick(), 1);
    assert_eq!(game.state(), GameState::Running);

    for index in [1, 2] {
        game.tanks_mut()[index].alive = false;
        game.tanks_mut()[index].health = 0;
    }
    game.step(&idle());
    assert!(game.is_over());

    game.step(&idle());
    assert!(game.is_over());

    game.step(&reset);
    assert_eq!(game.state(), GameState::Running);
    assert_eq!(game.alive_count(), 3);
}

#[test]
fn snapshot_is_a_pure_read() {
    let mut game = Game::new(5);
    game.update(&[Key::W, Key::Space, Key::Enter].into_iter().collect());
    let first = game.snapshot();
    for _ in 0..10 {
        assert_eq!(game.snapshot(), first);
    }
    assert_eq!(game.tick(), 1);
    assert_eq!(first.tanks.len(), 3);
    assert_eq!(first.bullets.len(), 2);
}

#[test]
fn same_seed_same_match() {
    let script: Vec<InputState> = (0..240)
        .map(|frame| {
            let mut input = InputState::new();
            if frame % 3 == 0 {
                input.press(Key::D);
            }
            if frame % 5 == 0 {
                input.press(Key::Space);
                input.press(Key::M);
            }
            if frame % 7 < 3 {
                input.press(Key::Left);
                input.press(Key::K);
            }
            input
        })
        .collect();

    let mut a = Game::new(1234);
    let mut b = Game::new(1234);
    for input in &script {
        a.step(input);
        b.step(input);
    }
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn invalid_config_is_rejected() {
    let config = GameConfig {
        fps: 0,
        ..GameConfig::default()
    };
    assert!(Game::with_config(config, 1).is_err());
}

#[test]
fn firing_with_a_huge_cooldown_config_does_not_panic() {
    let config =
        GameConfig::from_json_str(r#"{ "fps": 100000, "fire_cooldown_ms": 100000 }"#).unwrap();
    let mut game = Game::with_config(config, 4).unwrap();
    game.update(&[Key::Space].into_iter().collect());
    assert_eq!(game.bullets().len(), 1);
    assert_eq!(game.tanks()[0].fire_cooldown, 10_000_000);
}
