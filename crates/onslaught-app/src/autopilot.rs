//! Scripted pilot that plays the game from snapshots alone.

use glam::DVec2;

use onslaught_core::input::InputState;
use onslaught_core::state::{EnemyView, GameStateSnapshot};

/// Enemies closer than this are kited away from.
const KITE_DISTANCE: f64 = 180.0;
/// Dash through enemies closer than this.
const DASH_DISTANCE: f64 = 120.0;
/// Ticks spent on each leg of the idle patrol.
const PATROL_LEG_TICKS: u64 = 45;

fn enemy_center(enemy: &EnemyView) -> DVec2 {
    enemy.position + enemy.display_size * 0.5
}

fn nearest_enemy(snapshot: &GameStateSnapshot) -> Option<(DVec2, f64)> {
    let player = snapshot.player.position;
    snapshot
        .enemies
        .iter()
        .map(|e| {
            let center = enemy_center(e);
            (center, center.distance(player))
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))
}

/// Map a world direction to the closest combination of movement keys.
fn keys_toward(input: &mut InputState, direction: DVec2) {
    input.left = direction.x < -0.3;
    input.right = direction.x > 0.3;
    input.up = direction.y < -0.3;
    input.down = direction.y > 0.3;
}

/// Decide the next input from the latest snapshot.
pub fn next_input(snapshot: &GameStateSnapshot, tick: u64) -> InputState {
    let mut input = InputState::default();
    let player = snapshot.player.position;

    match nearest_enemy(snapshot) {
        Some((target, distance)) => {
            input.pointer = Some(target);
            input.fire = true;

            let away = (player - target).normalize_or_zero();
            if distance < KITE_DISTANCE {
                // Circle outward so the pilot does not pin itself to a wall.
                keys_toward(&mut input, away + away.perp() * 0.5);
            } else {
                keys_toward(&mut input, away.perp());
            }

            input.dash = distance < DASH_DISTANCE && snapshot.hud.dash_charges > 0;
        }
        None => {
            let leg = (tick / PATROL_LEG_TICKS) % 4;
            input.up = leg == 0;
            input.right = leg == 1;
            input.down = leg == 2;
            input.left = leg == 3;
        }
    }

    let health = snapshot.player.health / snapshot.player.max_health.max(1.0);
    input.shield = health < 0.5;
    input.time_slow = snapshot.enemies.len() > 15;
    input
}

#[cfg(test)]
mod tests {
    use super::*;
    use onslaught_core::enums::EnemyKind;

    fn snapshot_with(enemies: Vec<EnemyView>) -> GameStateSnapshot {
        let mut snap = GameStateSnapshot::default();
        snap.player.position = DVec2::new(500.0, 500.0);
        snap.player.health = 100.0;
        snap.player.max_health = 100.0;
        snap.hud.dash_charges = 1;
        snap.enemies = enemies;
        snap
    }

    fn enemy_at(x: f64, y: f64) -> EnemyView {
        EnemyView {
            id: 1,
            kind: EnemyKind::Normal,
            position: DVec2::new(x, y),
            display_size: DVec2::new(40.0, 40.0),
            health: 40.0,
            max_health: 40.0,
            burning: false,
        }
    }

    #[test]
    fn test_patrols_without_enemies() {
        let input = next_input(&snapshot_with(vec![]), 0);
        assert!(input.up);
        assert!(!input.fire);
        assert!(input.pointer.is_none());
    }

    #[test]
    fn test_aims_at_nearest_enemy() {
        let input = next_input(
            &snapshot_with(vec![enemy_at(880.0, 480.0), enemy_at(680.0, 480.0)]),
            0,
        );
        assert!(input.fire);
        assert_eq!(input.pointer, Some(DVec2::new(700.0, 500.0)));
        assert!(!input.dash, "Nearest enemy is 200 away");
    }

    #[test]
    fn test_kites_and_dashes_when_close() {
        let input = next_input(&snapshot_with(vec![enemy_at(560.0, 480.0)]), 0);
        assert!(input.left, "Moves away from an enemy on the right");
        assert!(!input.right);
        assert!(input.dash);
    }

    #[test]
    fn test_shields_when_hurt() {
        let mut snap = snapshot_with(vec![]);
        snap.player.health = 30.0;
        assert!(next_input(&snap, 0).shield);
    }
}
