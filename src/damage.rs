//! Damage estimates from enemy destructor coverage.
//!
//! The heat map counts, for each tile of the enemy half, how many enemy
//! destructors can hit a unit standing there. Columns are the 28 staircase
//! lanes a mobile unit can take through the enemy half (14 entering from
//! the left, 14 from the right), and their summed heat ranks how costly
//! each lane is.

use crate::arena::*;
use crate::constants::*;
use crate::game_state::*;
use crate::geometry::*;
use crate::location::*;
use crate::units::*;
use itertools::Itertools;

/// Number of staircase lanes, left lanes first.
pub const COLUMN_COUNT: usize = 2 * HALF_ARENA as usize;

/// Damage a single enemy destructor deals per hit, as configured.
pub fn destructor_damage(state: &GameState) -> f32 {
    UnitStats::from_config(UnitType::Destructor, state.config()).damage
}

/// Estimated damage a mobile unit takes walking `path`.
pub fn path_damage(state: &GameState, path: &[Location]) -> f32 {
    let per_attacker = destructor_damage(state);

    path.iter()
        .map(|loc| state.get_attackers(*loc, PLAYER_SELF).len() as f32 * per_attacker)
        .sum()
}

/// Attacker count for every enemy-half tile. Tiles outside the enemy half stay at zero.
pub fn destructor_heat_map(state: &GameState) -> ArenaDataArray<u32> {
    let mut heat = ArenaDataArray::new(0u32);

    for loc in enemy_half() {
        let attackers = state.get_attackers(loc, PLAYER_SELF).len() as u32;
        heat.set(loc.x() as usize, loc.y() as usize, attackers);
    }

    heat
}

/// Tiles of lane `index`. Indices `0..14` are left lanes, `14..28` right lanes.
pub fn column(index: usize) -> Vec<Location> {
    if index < HALF_ARENA as usize {
        column_left(index as u8)
    } else {
        column_right(index as u8)
    }
}

fn column_heat(heat: &ArenaDataArray<u32>, tiles: &[Location]) -> u32 {
    tiles
        .iter()
        .filter(|loc| loc.x() < ARENA_SIZE && loc.y() < ARENA_SIZE)
        .map(|loc| *heat.at(*loc))
        .sum()
}

/// Summed heat of every lane, left lanes first.
///
/// This and `find_min_column` are analysis helpers for choosing an attack lane; no built-in strategy calls them.
pub fn column_damages(heat: &ArenaDataArray<u32>) -> Vec<u32> {
    (0..COLUMN_COUNT)
        .map(|index| column_heat(heat, &column(index)))
        .collect()
}

/// Index of the lane with the least heat. The lowest index wins ties.
pub fn find_min_column(heat: &ArenaDataArray<u32>) -> Option<usize> {
    column_damages(heat).into_iter().position_min()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::tests::sample_config;
    use crate::game_state::tests::*;
    use serde_json::json;

    #[test]
    fn empty_board_has_no_heat() {
        let config = sample_config();
        let state = GameState::from_json(&config, &turn_json(0, 0.0, 0.0, no_units(), no_units())).unwrap();

        let heat = destructor_heat_map(&state);
        assert!(heat.iter().all(|(_, v)| *v == 0));
        assert_eq!(column_damages(&heat), vec![0; COLUMN_COUNT]);
        assert_eq!(find_min_column(&heat), Some(0));
    }

    #[test]
    fn heat_steers_to_uncovered_lane() {
        let config = sample_config();
        // Destructors covering the far left of the enemy half.
        let p2 = json!([[], [], [[1.0, 14.0, 75.0, "1"], [3.0, 16.0, 75.0, "2"]], [], [], [], []]);
        let state = GameState::from_json(&config, &turn_json(0, 0.0, 0.0, no_units(), p2)).unwrap();

        let heat = destructor_heat_map(&state);
        assert!(*heat.get(1, 15) >= 1);
        assert_eq!(*heat.get(1, 13), 0);

        let damages = column_damages(&heat);
        assert!(damages[0] > 0);
        let best = find_min_column(&heat).unwrap();
        assert_eq!(damages[best], 0);
        assert_ne!(best, 0);
    }

    #[test]
    fn path_damage_scales_with_destructor_damage() {
        let config = sample_config();
        let p2 = json!([[], [], [[13.0, 16.0, 75.0, "1"]], [], [], [], []]);
        let state = GameState::from_json(&config, &turn_json(0, 0.0, 0.0, no_units(), p2)).unwrap();

        let path = vec![Location::from_xy(13, 12), Location::from_xy(13, 13), Location::from_xy(14, 13)];
        // (13, 13) is in range; (14, 13) sits at sqrt(10) < 3.51.
        assert_eq!(path_damage(&state, &path), 8.0);
    }
}
