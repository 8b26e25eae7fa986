//! Headless tests for the per-frame gameplay loop.
//!
//! These tests use [`MinimalPlugins`] plus [`SimulationPlugin`] with no
//! window and no rendering. Time advances a fixed 100 ms per update.
//!
//! The board is a 400 × 300 screen with 20 × 20 ships and aliens, which
//! gives a 9 × 5 fleet whose first alien starts at (20, 20) and a ship
//! occupying x 190..210, y 280..300.

use alien_invasion::alien::Alien;
use alien_invasion::config::GameSettings;
use alien_invasion::fleet::FleetDirection;
use alien_invasion::geometry::ScreenRect;
use alien_invasion::menu::PlayButton;
use alien_invasion::scoreboard::Scoreboard;
use alien_invasion::ship::{Bullet, Ship};
use alien_invasion::simulation::{HitPause, PointerPressed, PointerState, SimulationPlugin};
use alien_invasion::stats::GameStats;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use std::time::Duration;

const FLEET_SIZE: usize = 45;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn test_settings() -> GameSettings {
    GameSettings {
        screen_width: 400,
        screen_height: 300,
        ship_width: 20,
        ship_height: 20,
        alien_width: 20,
        alien_height: 20,
        ..Default::default()
    }
}

/// Build the headless app and run the first frame (startup).
fn build_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(100)))
        .insert_resource(test_settings())
        .add_plugins(SimulationPlugin);
    app.update();
    app
}

/// Click the middle of the Play button and run one frame.
fn start_game(app: &mut App) {
    let center = app.world().resource::<PlayButton>().rect.center();
    app.world_mut()
        .resource_mut::<Messages<PointerPressed>>()
        .write(PointerPressed(center));
    app.update();
    assert!(app.world().resource::<GameStats>().game_active);
}

fn count<T: Component>(app: &mut App) -> usize {
    let mut q = app.world_mut().query_filtered::<(), With<T>>();
    q.iter(app.world()).count()
}

fn aliens(app: &mut App) -> Vec<ScreenRect> {
    let mut q = app.world_mut().query::<&Alien>();
    q.iter(app.world()).map(|a| a.rect).collect()
}

fn ship_rect(app: &mut App) -> ScreenRect {
    let mut q = app.world_mut().query::<&Ship>();
    q.single(app.world()).map(|s| s.rect).unwrap()
}

fn settings(app: &App) -> GameSettings {
    app.world().resource::<GameSettings>().clone()
}

fn stats(app: &App) -> GameStats {
    app.world().resource::<GameStats>().clone()
}

fn despawn_all<T: Component>(app: &mut App) {
    let ids: Vec<Entity> = {
        let mut q = app.world_mut().query_filtered::<Entity, With<T>>();
        q.iter(app.world()).collect()
    };
    for id in ids {
        app.world_mut().despawn(id);
    }
}

fn tap(app: &mut App, key: KeyCode) {
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(key);
    app.update();
    let mut keys = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
    keys.release(key);
    keys.clear();
}

/// Hold the ship's left flag for `frames` updates.
fn drift_ship_left(app: &mut App, frames: usize) {
    let mut q = app.world_mut().query::<&mut Ship>();
    q.single_mut(app.world_mut()).unwrap().moving_left = true;
    for _ in 0..frames {
        app.update();
    }
}

/// A bullet whose rect is x 305..308 and, after its first step, y 247..262.
fn bullet_near_stack(settings: &GameSettings) -> Bullet {
    Bullet::new(settings, ScreenRect::new(296, 250, 20, 20))
}

// ── Startup ───────────────────────────────────────────────────────────────────

/// The board is laid out on launch but nothing moves until Play is clicked.
#[test]
fn startup_waits_behind_the_play_button() {
    let mut app = build_app();
    for _ in 0..3 {
        app.update();
    }

    let s = stats(&app);
    assert!(!s.game_active);
    assert_eq!((s.score, s.level, s.ships_left), (0, 1, 3));
    assert!(app.world().resource::<PointerState>().visible);

    assert_eq!(count::<Ship>(&mut app), 1);
    assert_eq!(count::<Bullet>(&mut app), 0);
    let fleet = aliens(&mut app);
    assert_eq!(fleet.len(), FLEET_SIZE);
    assert!(fleet.iter().any(|r| r.x == 20 && r.y == 20), "fleet must not move");
    assert_eq!(ship_rect(&mut app), ScreenRect::new(190, 280, 20, 20));
}

// ── Ship and bullets ──────────────────────────────────────────────────────────

#[test]
fn arrow_keys_steer_the_ship() {
    let mut app = build_app();
    start_game(&mut app);

    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::ArrowRight);
    app.update();
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .clear();
    app.update();
    let moved = ship_rect(&mut app).center_x();
    assert!(moved > 200, "ship should move right, centre at {moved}");

    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .release(KeyCode::ArrowRight);
    app.update();
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .clear();
    let stopped = ship_rect(&mut app).center_x();
    app.update();
    assert_eq!(ship_rect(&mut app).center_x(), stopped);
}

/// Five Space taps with a cap of three leave exactly three bullets alive.
#[test]
fn firing_never_exceeds_the_bullet_cap() {
    let mut app = build_app();
    start_game(&mut app);

    for _ in 0..5 {
        tap(&mut app, KeyCode::Space);
        assert!(count::<Bullet>(&mut app) <= 3);
    }
    assert_eq!(count::<Bullet>(&mut app), 3);
}

#[test]
fn space_is_ignored_before_the_game_starts() {
    let mut app = build_app();
    tap(&mut app, KeyCode::Space);
    assert_eq!(count::<Bullet>(&mut app), 0);
}

#[test]
fn bullets_leaving_the_top_are_removed() {
    let mut app = build_app();
    start_game(&mut app);

    let s = settings(&app);
    // Top at -12; one 3 px step puts the bottom edge at 0.
    app.world_mut()
        .spawn(Bullet::new(&s, ScreenRect::new(0, -12, 10, 10)));
    app.update();
    assert_eq!(count::<Bullet>(&mut app), 0);
}

// ── Collisions and scoring ────────────────────────────────────────────────────

#[test]
fn one_bullet_clears_a_stack_of_aliens() {
    let mut app = build_app();
    start_game(&mut app);

    let s = settings(&app);
    for (x, y) in [(300, 240), (302, 242), (298, 245)] {
        app.world_mut().spawn(Alien::at(&s, x, y));
    }
    app.world_mut().spawn(bullet_near_stack(&s));
    app.update();

    assert_eq!(count::<Alien>(&mut app), FLEET_SIZE);
    assert_eq!(count::<Bullet>(&mut app), 0);
    let stats = stats(&app);
    assert_eq!(stats.score, 150);
    assert_eq!(stats.high_score, 150);
    let board = app.world().resource::<Scoreboard>();
    assert_eq!(board.score, "150");
    assert_eq!(board.high_score, "150");
}

#[test]
fn clearing_the_fleet_advances_the_level() {
    let mut app = build_app();
    start_game(&mut app);

    let s = settings(&app);
    despawn_all::<Alien>(&mut app);
    app.world_mut().spawn(Alien::at(&s, 300, 240));
    app.world_mut().spawn(bullet_near_stack(&s));
    app.update();

    let stats = stats(&app);
    assert_eq!(stats.level, 2);
    assert_eq!(stats.score, 50);
    assert_eq!(count::<Alien>(&mut app), FLEET_SIZE, "fleet regenerates in the same frame");
    assert_eq!(count::<Bullet>(&mut app), 0);
    assert_eq!(app.world().resource::<Scoreboard>().level, "2");

    let d = settings(&app).dynamic;
    assert!((d.alien_speed - 1.1).abs() < 1e-5);
    assert_eq!(d.alien_points, 75);
}

/// Level scaling can push `alien_points` to `u32::MAX`; scoring a stack at
/// that value must saturate rather than overflow.
#[test]
fn scoring_at_saturated_alien_points_does_not_overflow() {
    let mut app = build_app();
    start_game(&mut app);
    app.world_mut()
        .resource_mut::<GameSettings>()
        .dynamic
        .alien_points = u32::MAX;

    let s = settings(&app);
    for (x, y) in [(300, 240), (302, 242)] {
        app.world_mut().spawn(Alien::at(&s, x, y));
    }
    app.world_mut().spawn(bullet_near_stack(&s));
    app.update();

    let stats = stats(&app);
    assert_eq!(stats.score, u32::MAX);
    assert_eq!(stats.high_score, u32::MAX);
    assert_eq!(count::<Alien>(&mut app), FLEET_SIZE);
}

// ── Fleet movement ────────────────────────────────────────────────────────────

#[test]
fn fleet_drops_and_reverses_at_an_edge() {
    let mut app = build_app();
    start_game(&mut app);

    let s = settings(&app);
    app.world_mut().spawn(Alien::at(&s, 0, 100));
    app.update();

    assert_eq!(app.world().resource::<FleetDirection>().0, -1.0);
    let fleet = aliens(&mut app);
    let top = fleet.iter().map(|r| r.y).min().unwrap();
    assert_eq!(top, 30, "every alien drops by fleet_drop_speed");
    assert!(fleet.iter().any(|r| r.y == 110));
}

// ── Ship hits ─────────────────────────────────────────────────────────────────

#[test]
fn alien_ramming_the_ship_uses_a_reserve_ship() {
    let mut app = build_app();
    start_game(&mut app);
    drift_ship_left(&mut app, 10);
    let drifted = ship_rect(&mut app);
    assert!(drifted.center_x() < 190, "ship should have moved off centre");
    app.world_mut().resource_mut::<GameStats>().ships_left = 1;

    let s = settings(&app);
    app.world_mut().spawn(Alien::at(&s, drifted.x, 270));
    app.world_mut()
        .spawn(Bullet::new(&s, ScreenRect::new(0, 200, 10, 10)));
    app.update();

    let stats = stats(&app);
    assert_eq!(stats.ships_left, 0);
    assert!(stats.game_active, "the last reserve ship keeps the game going");
    assert_eq!(app.world().resource::<Scoreboard>().ships, 0);

    assert_eq!(count::<Bullet>(&mut app), 0);
    let fleet = aliens(&mut app);
    assert_eq!(fleet.len(), FLEET_SIZE);
    assert!(fleet.iter().any(|r| r.x == 20 && r.y == 20), "fresh fleet layout");
    assert_eq!(ship_rect(&mut app).center_x(), 200, "ship is recentred");
    assert!(app.world().resource::<HitPause>().is_active());
}

#[test]
fn hit_pause_freezes_the_board_then_resumes() {
    let mut app = build_app();
    start_game(&mut app);

    let s = settings(&app);
    app.world_mut().spawn(Alien::at(&s, 20, 280));
    app.update();
    assert_eq!(stats(&app).ships_left, 2, "an alien at the bottom counts as a hit");
    let frozen = aliens(&mut app);

    for _ in 0..3 {
        app.update();
    }
    assert_eq!(aliens(&mut app), frozen, "nothing moves during the pause");

    for _ in 0..4 {
        app.update();
    }
    assert!(!app.world().resource::<HitPause>().is_active());
    assert_ne!(aliens(&mut app), frozen, "the fleet resumes after the pause");
}

#[test]
fn losing_with_no_reserve_ships_ends_the_game() {
    let mut app = build_app();
    start_game(&mut app);
    app.world_mut().resource_mut::<GameStats>().ships_left = 0;

    let s = settings(&app);
    app.world_mut().spawn(Alien::at(&s, 185, 270));
    app.update();

    let stats = stats(&app);
    assert!(!stats.game_active);
    assert_eq!(stats.ships_left, 0);
    assert!(app.world().resource::<PointerState>().visible);
    assert_eq!(count::<Alien>(&mut app), FLEET_SIZE);

    let after_game_over = aliens(&mut app);
    for _ in 0..10 {
        app.update();
    }
    assert_eq!(aliens(&mut app), after_game_over, "an inactive game stays frozen");
}

// ── Quit ──────────────────────────────────────────────────────────────────────

#[test]
fn q_requests_exit_in_any_state() {
    let mut app = build_app();
    tap(&mut app, KeyCode::KeyQ);
    assert_eq!(app.should_exit(), Some(AppExit::Success));
}
