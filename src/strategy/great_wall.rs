//! The great wall strategy: rebuild a fixed V-shaped wall every turn, fill
//! in the fortification behind it, and send a batch of pings from one of the
//! two side deploy tiles.

use super::*;
use crate::game_state::GameState;
use crate::location::Location;
use crate::stamps::wall::*;
use crate::stamps::BuildTally;
use crate::units::UnitType;
use anyhow::Context;
use log::*;
use rand::seq::SliceRandom;
use rand::Rng;

/// Side deploy tiles just outside the wall's corner shields.
pub const ATTACK_LOCATIONS: [[u8; 2]; 2] = [[3, 10], [24, 10]];

pub struct GreatWallStrategy {
    config: Option<GameConfig>,
    rng: StdRng,
    breaches: BreachTracker,
    ping_count: u32,
}

impl GreatWallStrategy {
    pub fn new(rng: StdRng, ping_count: u32) -> Self {
        GreatWallStrategy {
            config: None,
            rng,
            breaches: BreachTracker::new(),
            ping_count,
        }
    }

    pub fn breaches(&self) -> &BreachTracker {
        &self.breaches
    }
}

pub fn build_the_wall(state: &mut GameState) -> BuildTally {
    debug!("Building wall");
    great_wall().spawn(state)
}

pub fn fortify_the_wall(state: &mut GameState) -> BuildTally {
    wall_fortification().spawn(state)
}

/// Send `count` pings from a randomly chosen side.
pub fn random_attack<R: Rng>(state: &mut GameState, rng: &mut R, count: u32) -> u32 {
    match ATTACK_LOCATIONS.choose(rng) {
        Some(location) => state.attempt_spawn(UnitType::Ping, [Location::from(*location)], count),
        None => 0,
    }
}

impl AlgoStrategy for GreatWallStrategy {
    fn name(&self) -> &str {
        "great_wall"
    }

    fn on_game_start(&mut self, config: GameConfig) {
        debug!("Configuring great wall strategy");
        self.config = Some(config);
    }

    fn on_turn(&mut self, turn_json: &str) -> anyhow::Result<TurnOrders> {
        let config = self
            .config
            .as_ref()
            .context("turn received before the game config")?;
        let mut state = GameState::from_json(config, turn_json)?;
        info!("Performing turn {} of the great wall strategy", state.turn_number);
        state.suppress_warnings(true);

        let wall = build_the_wall(&mut state);
        let fortified = fortify_the_wall(&mut state);
        let pings = random_attack(&mut state, &mut self.rng, self.ping_count);

        debug!(
            "Built {} wall units ({} destructors, {} encryptors), {} fortifications, sent {} pings",
            wall.total(),
            wall.get(UnitType::Destructor),
            wall.get(UnitType::Encryptor),
            fortified.total(),
            pings
        );

        Ok(state.submit_turn())
    }

    fn on_action_frame(&mut self, frame_json: &str) -> anyhow::Result<()> {
        self.breaches.record_frame(frame_json)?;
        Ok(())
    }
}
