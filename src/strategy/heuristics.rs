//! Decision helpers shared by the strategies.

use crate::arena::*;
use crate::config::GameConfig;
use crate::constants::*;
use crate::damage::path_damage;
use crate::game_state::GameState;
use crate::location::Location;
use crate::units::UnitType;
use log::*;
use rand::Rng;

/// Build a destructor one tile above each location we were scored on, so
/// it covers the breach without blocking our own edge spawn tiles.
pub fn build_reactive_defense(state: &mut GameState, scored_on: &[Location]) -> u32 {
    let targets: Vec<Location> = scored_on.iter().map(|loc| loc.above()).collect();
    state.attempt_spawn(UnitType::Destructor, targets, 1)
}

/// Pick the spawn option whose walk to the far edge crosses the least
/// destructor coverage. Earlier options win ties. Options whose tile is
/// blocked are skipped.
pub fn least_damage_spawn_location(state: &GameState, options: &[Location]) -> Option<Location> {
    options
        .iter()
        .filter_map(|loc| {
            let path = state.find_path_to_edge(*loc, None)?;
            let damage = path_damage(state, &path);
            debug!("Spawn option {} takes an estimated {} damage", loc, damage);
            Some((*loc, damage))
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(loc, _)| loc)
}

/// Count enemy units on tiles holding a stationary unit, optionally limited
/// to one unit type and to the given columns and rows.
pub fn detect_enemy_unit(
    state: &GameState,
    unit_type: Option<UnitType>,
    valid_x: Option<&[u8]>,
    valid_y: Option<&[u8]>,
) -> usize {
    arena_locations()
        .filter(|loc| state.contains_stationary_unit(*loc))
        .filter(|loc| valid_x.map_or(true, |xs| xs.contains(&loc.x())))
        .filter(|loc| valid_y.map_or(true, |ys| ys.contains(&loc.y())))
        .map(|loc| {
            state
                .units_at(loc)
                .iter()
                .filter(|unit| unit.player_index == PLAYER_ENEMY)
                .filter(|unit| unit_type.map_or(true, |t| unit.unit_type == t))
                .count()
        })
        .sum()
}

/// Drop tiles that already hold a stationary unit.
pub fn filter_blocked_locations(locations: &[Location], state: &GameState) -> Vec<Location> {
    locations
        .iter()
        .copied()
        .filter(|loc| !state.contains_stationary_unit(*loc))
        .collect()
}

/// The cheapest stationary unit, preferring filters on a tie.
pub fn cheapest_stationary_unit(config: &GameConfig) -> UnitType {
    config
        .cheapest_of(&[UnitType::Filter, UnitType::Destructor, UnitType::Encryptor])
        .unwrap_or(UnitType::Filter)
}

/// Spend all remaining bits on scramblers at random open friendly edge tiles.
/// Never deploys more than `SPAWN_ALL`, which bounds free scramblers.
pub fn stall_with_scramblers<R: Rng>(state: &mut GameState, rng: &mut R) -> u32 {
    let friendly_edges = edge_locations(Edges::FRIENDLY);
    let deploy_locations = filter_blocked_locations(&friendly_edges, state);
    let cost = state.type_cost(UnitType::Scrambler)[Resource::Bits.index()];
    let mut deployed = 0;

    while !deploy_locations.is_empty()
        && deployed < SPAWN_ALL
        && state.get_resource(Resource::Bits, PLAYER_SELF) >= cost
    {
        let location = deploy_locations[rng.gen_range(0..deploy_locations.len())];

        // Mobile units stack, so the tile stays available.
        let spawned = state.attempt_spawn(UnitType::Scrambler, [location], 1);
        if spawned == 0 {
            break;
        }
        deployed += spawned;
    }

    deployed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::tests::sample_config;
    use crate::game_state::tests::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::json;

    #[test]
    fn reactive_defense_builds_above_breaches() {
        let config = sample_config();
        let mut state = GameState::from_json(&config, &turn_json(0, 10.0, 0.0, no_units(), no_units())).unwrap();

        let built = build_reactive_defense(&mut state, &[Location::from_xy(3, 10), Location::from_xy(24, 10)]);
        assert_eq!(built, 2);
        assert!(state.contains_stationary_unit(Location::from_xy(3, 11)));
        assert!(state.contains_stationary_unit(Location::from_xy(24, 11)));
    }

    #[test]
    fn least_damage_picks_cheapest_path() {
        let config = sample_config();
        // A destructor sitting over the left deploy tile taxes every path starting there.
        let p2 = json!([[], [], [[3.0, 12.0, 75.0, "1"], [2.0, 14.0, 75.0, "2"]], [], [], [], []]);
        let state = GameState::from_json(&config, &turn_json(0, 0.0, 0.0, no_units(), p2)).unwrap();

        let options = [Location::from_xy(3, 10), Location::from_xy(24, 10)];
        let damages: Vec<f32> = options
            .iter()
            .map(|loc| path_damage(&state, &state.find_path_to_edge(*loc, None).unwrap()))
            .collect();
        assert!(damages[0] >= 4.0);

        let expected = if damages[1] < damages[0] { options[1] } else { options[0] };
        assert_eq!(least_damage_spawn_location(&state, &options), Some(expected));
    }

    #[test]
    fn least_damage_skips_blocked_options() {
        let config = sample_config();
        let p1 = json!([[[13.0, 0.0, 60.0, "1"]], [], [], [], [], [], []]);
        let state = GameState::from_json(&config, &turn_json(0, 0.0, 0.0, p1, no_units())).unwrap();

        let options = [Location::from_xy(13, 0), Location::from_xy(14, 0)];
        assert_eq!(least_damage_spawn_location(&state, &options), Some(Location::from_xy(14, 0)));
        assert_eq!(least_damage_spawn_location(&state, &options[..1]), None);
    }

    #[test]
    fn least_damage_prefers_first_on_tie() {
        let config = sample_config();
        let state = GameState::from_json(&config, &turn_json(0, 0.0, 0.0, no_units(), no_units())).unwrap();

        let options = [Location::from_xy(13, 0), Location::from_xy(14, 0)];
        assert_eq!(least_damage_spawn_location(&state, &options), Some(Location::from_xy(13, 0)));
        assert_eq!(least_damage_spawn_location(&state, &[]), None);
    }

    #[test]
    fn detects_enemy_front_line() {
        let config = sample_config();
        let p2 = json!([
            [[10.0, 14.0, 60.0, "1"], [11.0, 14.0, 60.0, "2"], [12.0, 20.0, 60.0, "3"]],
            [],
            [[13.0, 15.0, 75.0, "4"]],
            [], [], [], []
        ]);
        let p1 = json!([[[5.0, 10.0, 60.0, "5"]], [], [], [], [], [], []]);
        let state = GameState::from_json(&config, &turn_json(0, 0.0, 0.0, p1, p2)).unwrap();

        assert_eq!(detect_enemy_unit(&state, None, None, None), 4);
        assert_eq!(detect_enemy_unit(&state, None, None, Some(&[14u8, 15][..])), 3);
        assert_eq!(detect_enemy_unit(&state, Some(UnitType::Destructor), None, Some(&[14u8, 15][..])), 1);
        assert_eq!(detect_enemy_unit(&state, None, Some(&[10u8][..]), None), 1);
    }

    #[test]
    fn filters_blocked_tiles() {
        let config = sample_config();
        let p1 = json!([[[13.0, 0.0, 60.0, "1"]], [], [], [], [], [], []]);
        let state = GameState::from_json(&config, &turn_json(0, 0.0, 0.0, p1, no_units())).unwrap();

        let open = filter_blocked_locations(&[Location::from_xy(13, 0), Location::from_xy(14, 0)], &state);
        assert_eq!(open, vec![Location::from_xy(14, 0)]);
    }

    #[test]
    fn cheapest_is_filter() {
        assert_eq!(cheapest_stationary_unit(&sample_config()), UnitType::Filter);
    }

    #[test]
    fn scramblers_spend_all_bits() {
        let config = sample_config();
        let mut state = GameState::from_json(&config, &turn_json(0, 0.0, 6.0, no_units(), no_units())).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        assert_eq!(stall_with_scramblers(&mut state, &mut rng), 6);
        assert_eq!(state.get_resource(Resource::Bits, PLAYER_SELF), 0.0);
        assert!(state
            .deploy_orders()
            .iter()
            .all(|order| order.unit_type == UnitType::Scrambler && edge_of(order.location).is_some()));
    }

    #[test]
    fn free_scramblers_stop_at_the_spawn_cap() {
        let mut config_json = crate::config::tests::sample_config_json();
        config_json["unitInformation"][5] = json!({"shorthand": "SI", "stability": 40.0});
        let config: GameConfig = serde_json::from_value(config_json).unwrap();
        assert_eq!(config.type_cost(UnitType::Scrambler), [0.0, 0.0]);

        let mut state = GameState::from_json(&config, &turn_json(0, 0.0, 0.0, no_units(), no_units())).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        assert_eq!(stall_with_scramblers(&mut state, &mut rng), SPAWN_ALL);
        assert_eq!(state.deploy_orders().len(), SPAWN_ALL as usize);
    }
}
