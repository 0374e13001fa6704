//! A spread-out defence with scramblers early and EMPs or pings later,
//! reinforcing wherever the opponent breaks through.

use super::heuristics::*;
use super::*;
use crate::constants::*;
use crate::game_state::GameState;
use crate::location::Location;
use crate::stamps::starter::*;
use crate::units::UnitType;
use anyhow::Context;
use log::*;
use rand::Rng;

/// Turns spent stalling with scramblers while the enemy base takes shape.
pub const STALL_TURNS: u32 = 5;

/// Enemy front-row units above this count switch us to the EMP line.
pub const FRONT_LINE_THRESHOLD: usize = 10;

pub const FRONT_ROWS: [u8; 2] = [14, 15];

pub const EMP_SPAWN: [u8; 2] = [24, 10];

pub const PING_SPAWN_OPTIONS: [[u8; 2]; 2] = [[13, 0], [14, 0]];

pub struct StarterStrategy {
    config: Option<GameConfig>,
    rng: StdRng,
    breaches: BreachTracker,
}

impl StarterStrategy {
    pub fn new(rng: StdRng) -> Self {
        StarterStrategy {
            config: None,
            rng,
            breaches: BreachTracker::new(),
        }
    }

    pub fn breaches(&self) -> &BreachTracker {
        &self.breaches
    }
}

/// Offensive plan chosen for a turn.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Offense {
    Stall,
    EmpLine,
    Pings,
}

pub fn choose_offense(state: &GameState) -> Offense {
    if state.turn_number < STALL_TURNS {
        Offense::Stall
    } else if detect_enemy_unit(state, None, None, Some(&FRONT_ROWS[..])) > FRONT_LINE_THRESHOLD {
        Offense::EmpLine
    } else {
        Offense::Pings
    }
}

/// Build a line of the cheapest stationary unit so EMPs park in range of the
/// enemy front, then send every EMP we can afford next to it.
pub fn emp_line_strategy(state: &mut GameState) -> u32 {
    let cheapest = cheapest_stationary_unit(state.config());
    emp_line(cheapest).spawn(state);
    state.attempt_spawn(UnitType::Emp, [Location::from(EMP_SPAWN)], SPAWN_ALL)
}

/// On odd turns, send every ping we can afford from whichever back tile
/// faces the least destructor fire. Then spend spare cores on encryptors.
pub fn ping_strategy(state: &mut GameState) -> u32 {
    let mut pings = 0;

    if state.turn_number % 2 == 1 {
        let options: Vec<Location> = PING_SPAWN_OPTIONS.iter().map(|p| Location::from(*p)).collect();
        if let Some(best) = least_damage_spawn_location(state, &options) {
            pings = state.attempt_spawn(UnitType::Ping, [best], SPAWN_ALL);
        }
    }

    encryptor_boost().spawn(state);

    pings
}

pub fn play_turn<R: Rng>(state: &mut GameState, scored_on: &[Location], rng: &mut R) -> Offense {
    starter_defences().spawn(state);
    build_reactive_defense(state, scored_on);

    let offense = choose_offense(state);
    let sent = match offense {
        Offense::Stall => stall_with_scramblers(state, rng),
        Offense::EmpLine => emp_line_strategy(state),
        Offense::Pings => ping_strategy(state),
    };
    debug!("Offense {:?} sent {} units", offense, sent);

    offense
}

impl AlgoStrategy for StarterStrategy {
    fn name(&self) -> &str {
        "starter"
    }

    fn on_game_start(&mut self, config: GameConfig) {
        debug!("Configuring starter strategy");
        self.config = Some(config);
    }

    fn on_turn(&mut self, turn_json: &str) -> anyhow::Result<TurnOrders> {
        let StarterStrategy { config, rng, breaches } = self;
        let config = config.as_ref().context("turn received before the game config")?;
        let mut state = GameState::from_json(config, turn_json)?;
        info!("Performing turn {} of the starter strategy", state.turn_number);
        state.suppress_warnings(true);

        play_turn(&mut state, breaches.scored_on_locations(), rng);

        Ok(state.submit_turn())
    }

    fn on_action_frame(&mut self, frame_json: &str) -> anyhow::Result<()> {
        self.breaches.record_frame(frame_json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::tests::sample_config;
    use crate::game_state::tests::*;
    use serde_json::json;

    fn front_line(count: u8) -> serde_json::Value {
        let filters: Vec<serde_json::Value> = (0..count)
            .map(|i| json!([(2 + i) as f64, 14.0, 60.0, i.to_string()]))
            .collect();
        json!([filters, [], [], [], [], [], []])
    }

    #[test]
    fn stalls_early() {
        let config = sample_config();
        let mut state = GameState::from_json(&config, &turn_json(2, 0.0, 5.0, no_units(), no_units())).unwrap();
        let mut rng = StdRng::seed_from_u64(11);

        assert_eq!(play_turn(&mut state, &[], &mut rng), Offense::Stall);
        assert_eq!(state.deploy_orders().len(), 5);
        assert!(state.deploy_orders().iter().all(|o| o.unit_type == UnitType::Scrambler));
    }

    #[test]
    fn emp_line_against_a_heavy_front() {
        let config = sample_config();
        let state_json = turn_json(6, 1000.0, 9.0, no_units(), front_line(11));
        let mut state = GameState::from_json(&config, &state_json).unwrap();
        state.suppress_warnings(true);
        let mut rng = StdRng::seed_from_u64(11);

        assert_eq!(play_turn(&mut state, &[], &mut rng), Offense::EmpLine);
        // EMPs cost 3 bits.
        assert_eq!(state.deploy_orders().len(), 3);
        assert!(state
            .deploy_orders()
            .iter()
            .all(|o| o.unit_type == UnitType::Emp && o.location == Location::from_xy(24, 10)));
        assert!(state.contains_stationary_unit(Location::from_xy(6, 11)));
        assert!(state.contains_stationary_unit(Location::from_xy(25, 11)));
    }

    #[test]
    fn ten_front_units_is_not_enough() {
        let config = sample_config();
        let state = GameState::from_json(&config, &turn_json(6, 0.0, 0.0, no_units(), front_line(10))).unwrap();
        assert_eq!(choose_offense(&state), Offense::Pings);
    }

    #[test]
    fn pings_only_on_odd_turns() {
        let config = sample_config();
        let mut rng = StdRng::seed_from_u64(11);

        let mut even = GameState::from_json(&config, &turn_json(6, 0.0, 8.0, no_units(), no_units())).unwrap();
        assert_eq!(play_turn(&mut even, &[], &mut rng), Offense::Pings);
        assert!(even.deploy_orders().is_empty());

        let mut odd = GameState::from_json(&config, &turn_json(7, 0.0, 8.0, no_units(), no_units())).unwrap();
        assert_eq!(play_turn(&mut odd, &[], &mut rng), Offense::Pings);
        assert_eq!(odd.deploy_orders().len(), 8);
        assert!(odd.deploy_orders().iter().all(|o| o.location == Location::from_xy(13, 0)));
    }

    #[test]
    fn defences_come_first() {
        let config = sample_config();
        let mut state = GameState::from_json(&config, &turn_json(7, 3.0, 0.0, no_units(), no_units())).unwrap();
        state.suppress_warnings(true);
        let mut rng = StdRng::seed_from_u64(11);

        play_turn(&mut state, &[Location::from_xy(3, 10)], &mut rng);
        assert_eq!(state.build_orders().len(), 1);
        assert_eq!(state.build_orders()[0].location, Location::from_xy(0, 13));
    }

    #[test]
    fn tracks_breaches_between_turns() {
        let mut strategy = StarterStrategy::new(StdRng::seed_from_u64(5));
        strategy.on_game_start(sample_config());

        let frame = json!({"turnInfo": [1, 5, 3, 0], "events": {"breach": [[[3, 10], 1.0, 3, "9", 2]]}});
        strategy.on_action_frame(&frame.to_string()).unwrap();
        assert_eq!(strategy.breaches().scored_on_locations().len(), 1);

        // Enough cores for the full starter defence plus one reactive destructor.
        let orders = strategy.on_turn(&turn_json(6, 23.0, 0.0, no_units(), no_units())).unwrap();
        assert!(orders.build.contains("[\"DF\",3,11]"));
    }
}
