//! Simulation plugin: the per-frame gameplay loop.
//!
//! ## Frame layout (`Update`)
//!
//! | Set | Runs when | Systems |
//! |-----|-----------|---------|
//! | [`FrameSet::Input`] | always | hit-pause tick, arrow flags, quit key, Play button |
//! | [`FrameSet::Simulate`] | game active and no hit pause | fire, ship, bullets, collisions, fleet, ship hit |
//! | [`FrameSet::Present`] | always | sprite/HUD/menu sync (added by the render plugins) |
//!
//! Everything in `Simulate` is chained, and Bevy applies deferred commands
//! between chained systems, so a bullet fired this frame already moves this
//! frame and an alien despawned by a hit is gone before the fleet check.
//!
//! This plugin has no rendering dependencies and runs under `MinimalPlugins`;
//! the integration tests drive it that way.

use crate::alien::Alien;
use crate::collision::{bullet_alien_collision_system, ship_hit_system};
use crate::config::GameSettings;
use crate::fleet::{
    create_fleet, fleet_edge_system, spawn_fleet_system, update_aliens_system, FleetDirection,
};
use crate::menu::{play_button_system, PlayButton};
use crate::scoreboard::Scoreboard;
use crate::ship::{
    fire_bullet_system, quit_key_system, ship_movement_keys_system, ship_update_system, spawn_ship,
    update_bullets_system, Bullet, Ship,
};
use crate::stats::GameStats;
use bevy::prelude::*;

/// Ordered stages of one frame.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameSet {
    Input,
    Simulate,
    Present,
}

// ── Resources and messages ────────────────────────────────────────────────────

/// Seconds left in the freeze that follows a ship hit.
///
/// While positive, [`FrameSet::Simulate`] is skipped; rendering and input
/// keep running.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct HitPause {
    pub remaining: f32,
}

impl HitPause {
    pub fn start(&mut self, secs: f32) {
        self.remaining = secs.max(0.0);
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.remaining > 0.0
    }
}

/// Whether the mouse pointer should be visible.  Shown on the Play screen,
/// hidden during play.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct PointerState {
    pub visible: bool,
}

impl Default for PointerState {
    fn default() -> Self {
        Self { visible: true }
    }
}

/// A primary-button press at a screen-space position (top-left origin).
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct PointerPressed(pub Vec2);

// ── Plugin ────────────────────────────────────────────────────────────────────

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameSettings>();
        let settings = app.world().resource::<GameSettings>().clone();
        let stats = GameStats::new(settings.ship_limit);

        app.insert_resource(Scoreboard::from_stats(&stats))
            .insert_resource(stats)
            .insert_resource(PlayButton::centered(&settings))
            .init_resource::<FleetDirection>()
            .init_resource::<HitPause>()
            .init_resource::<PointerState>()
            .init_resource::<ButtonInput<KeyCode>>()
            .init_resource::<ButtonInput<MouseButton>>()
            .add_message::<PointerPressed>()
            .configure_sets(
                Update,
                (
                    FrameSet::Input,
                    FrameSet::Simulate.run_if(gameplay_running),
                    FrameSet::Present,
                )
                    .chain(),
            )
            .add_systems(
                Startup,
                (prime_dynamic_settings, spawn_ship, spawn_fleet_system).chain(),
            )
            .add_systems(
                Update,
                (
                    hit_pause_tick_system,
                    ship_movement_keys_system,
                    quit_key_system,
                    play_button_system,
                )
                    .chain()
                    .in_set(FrameSet::Input),
            )
            .add_systems(
                Update,
                (
                    fire_bullet_system,
                    ship_update_system,
                    update_bullets_system,
                    bullet_alien_collision_system,
                    fleet_cleared_system,
                    fleet_edge_system,
                    update_aliens_system,
                    ship_hit_system,
                )
                    .chain()
                    .in_set(FrameSet::Simulate),
            );
    }
}

/// Run condition for [`FrameSet::Simulate`].
pub fn gameplay_running(stats: Res<GameStats>, pause: Res<HitPause>) -> bool {
    stats.game_active && !pause.is_active()
}

fn prime_dynamic_settings(mut settings: ResMut<GameSettings>) {
    settings.initialize_dynamic_settings();
}

// ── Systems ───────────────────────────────────────────────────────────────────

/// Count the hit pause down by the frame delta.
pub fn hit_pause_tick_system(time: Res<Time>, mut pause: ResMut<HitPause>) {
    if pause.is_active() {
        pause.remaining = (pause.remaining - time.delta_secs()).max(0.0);
    }
}

/// Level up once the last alien is gone: clear bullets, speed up, and send a
/// fresh fleet in the same frame.
pub fn fleet_cleared_system(
    mut commands: Commands,
    mut settings: ResMut<GameSettings>,
    mut stats: ResMut<GameStats>,
    mut board: ResMut<Scoreboard>,
    q_aliens: Query<(), With<Alien>>,
    q_bullets: Query<Entity, With<Bullet>>,
) {
    if !q_aliens.is_empty() {
        return;
    }

    clear_board(&mut commands, std::iter::empty(), q_bullets.iter());
    settings.increase_speed();
    stats.level += 1;
    board.prep_level(&stats);
    let count = create_fleet(&mut commands, &settings);
    info!("Level {} begins with {} aliens", stats.level, count);
}

// ── Shared transitions ────────────────────────────────────────────────────────

/// Despawn the given aliens and bullets.
pub(crate) fn clear_board(
    commands: &mut Commands,
    aliens: impl IntoIterator<Item = Entity>,
    bullets: impl IntoIterator<Item = Entity>,
) {
    for entity in aliens.into_iter().chain(bullets) {
        commands.entity(entity).despawn();
    }
}

/// Mutable game state touched by a new-game transition.
pub(crate) struct NewGame<'a> {
    pub settings: &'a mut GameSettings,
    pub stats: &'a mut GameStats,
    pub board: &'a mut Scoreboard,
    pub pointer: &'a mut PointerState,
    pub direction: &'a mut FleetDirection,
}

/// Reset everything for a fresh game and mark it active.
///
/// `aliens` and `bullets` are the entities currently on the board; `ship` is
/// recentred if present.
pub(crate) fn start_new_game(
    commands: &mut Commands,
    state: NewGame<'_>,
    ship: Option<&mut Ship>,
    aliens: impl IntoIterator<Item = Entity>,
    bullets: impl IntoIterator<Item = Entity>,
) {
    state.settings.initialize_dynamic_settings();
    *state.direction = FleetDirection::default();
    state.pointer.visible = false;
    state.stats.reset_stats();
    state.board.prep_all(state.stats);

    clear_board(commands, aliens, bullets);
    create_fleet(commands, state.settings);
    if let Some(ship) = ship {
        ship.center_ship(state.settings);
    }

    state.stats.game_active = true;
    info!("New game started");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_pause_never_goes_negative() {
        let mut pause = HitPause::default();
        assert!(!pause.is_active());
        pause.start(-1.0);
        assert!(!pause.is_active());
        pause.start(0.5);
        assert!(pause.is_active());
        assert_eq!(pause.remaining, 0.5);
    }

    #[test]
    fn pointer_starts_visible() {
        assert!(PointerState::default().visible);
    }
}
