//! Rectangle collision between bullets, aliens, and the ship.
//!
//! Bullet/alien resolution uses [`group_collide`]: each bullet collects every
//! alien it overlaps, and an alien already claimed by an earlier bullet is not
//! counted again.  A bullet that overlaps a stack of N aliens therefore
//! removes all N and scores N × `alien_points` in one frame.

use crate::alien::Alien;
use crate::config::GameSettings;
use crate::fleet::create_fleet;
use crate::geometry::ScreenRect;
use crate::scoreboard::Scoreboard;
use crate::ship::{Bullet, Ship};
use crate::simulation::{clear_board, HitPause, PointerState};
use crate::stats::{GameStats, ShipHitOutcome};
use bevy::prelude::*;
use std::collections::HashSet;
use std::hash::Hash;

// ── Pure helpers ──────────────────────────────────────────────────────────────

/// For every member of `group_a`, the members of `group_b` it overlaps.
///
/// Only members with at least one hit are returned, in `group_a` order.  Each
/// `group_b` member appears in at most one bucket: the first `group_a` member
/// that overlaps it claims it.
pub fn group_collide<A, B>(
    group_a: &[(A, ScreenRect)],
    group_b: &[(B, ScreenRect)],
) -> Vec<(A, Vec<B>)>
where
    A: Copy,
    B: Copy + Eq + Hash,
{
    let mut claimed: HashSet<B> = HashSet::new();
    let mut buckets = Vec::new();

    for &(a, a_rect) in group_a {
        let hits: Vec<B> = group_b
            .iter()
            .filter(|(b, b_rect)| a_rect.intersects(b_rect) && !claimed.contains(b))
            .map(|&(b, _)| b)
            .collect();
        if hits.is_empty() {
            continue;
        }
        claimed.extend(hits.iter().copied());
        buckets.push((a, hits));
    }
    buckets
}

/// Points for destroying `aliens` aliens at `alien_points` each, saturating
/// at `u32::MAX`.
#[inline]
pub fn bucket_points(alien_points: u32, aliens: usize) -> u32 {
    let aliens = u32::try_from(aliens).unwrap_or(u32::MAX);
    alien_points.saturating_mul(aliens)
}

/// `true` when `rect` overlaps any of `others`.
pub fn collide_any(rect: &ScreenRect, others: impl IntoIterator<Item = ScreenRect>) -> bool {
    others.into_iter().any(|other| rect.intersects(&other))
}

// ── Systems ───────────────────────────────────────────────────────────────────

/// Remove every bullet that hit something together with the aliens it hit,
/// and score them.
pub fn bullet_alien_collision_system(
    mut commands: Commands,
    settings: Res<GameSettings>,
    mut stats: ResMut<GameStats>,
    mut board: ResMut<Scoreboard>,
    q_bullets: Query<(Entity, &Bullet)>,
    q_aliens: Query<(Entity, &Alien)>,
) {
    let bullets: Vec<(Entity, ScreenRect)> = q_bullets.iter().map(|(e, b)| (e, b.rect)).collect();
    let aliens: Vec<(Entity, ScreenRect)> = q_aliens.iter().map(|(e, a)| (e, a.rect)).collect();

    let collisions = group_collide(&bullets, &aliens);
    if collisions.is_empty() {
        return;
    }

    for (bullet, hit_aliens) in &collisions {
        commands.entity(*bullet).despawn();
        for alien in hit_aliens {
            commands.entity(*alien).despawn();
        }
        stats.award(bucket_points(settings.dynamic.alien_points, hit_aliens.len()));
    }

    board.prep_score(&stats);
    if stats.check_high_score() {
        board.prep_high_score(&stats);
        info!("New high score: {}", stats.high_score);
    }
}

/// Respond to an alien reaching the ship or the bottom of the screen.
///
/// Uses a reserve ship if one is left, otherwise ends the game.  Either way
/// the board is rebuilt and the hit pause starts.
#[allow(clippy::too_many_arguments)]
pub fn ship_hit_system(
    mut commands: Commands,
    settings: Res<GameSettings>,
    mut stats: ResMut<GameStats>,
    mut board: ResMut<Scoreboard>,
    mut pointer: ResMut<PointerState>,
    mut pause: ResMut<HitPause>,
    mut q_ship: Query<&mut Ship>,
    q_aliens: Query<(Entity, &Alien)>,
    q_bullets: Query<Entity, With<Bullet>>,
) {
    let Ok(mut ship) = q_ship.single_mut() else {
        return;
    };

    let screen_bottom = settings.screen_height as i32;
    let rammed = collide_any(&ship.rect, q_aliens.iter().map(|(_, alien)| alien.rect));
    let landed = q_aliens.iter().any(|(_, alien)| alien.rect.bottom() >= screen_bottom);
    if !rammed && !landed {
        return;
    }

    match stats.register_ship_hit() {
        ShipHitOutcome::LifeLost => {
            board.prep_ships(&stats);
            info!("Ship hit, {} in reserve", stats.ships_left);
        }
        ShipHitOutcome::GameOver => {
            pointer.visible = true;
            info!("Game over with score {}", stats.score);
        }
    }

    clear_board(
        &mut commands,
        q_aliens.iter().map(|(entity, _)| entity),
        q_bullets.iter(),
    );
    create_fleet(&mut commands, &settings);
    ship.center_ship(&settings);
    pause.start(settings.hit_pause_secs);
}
