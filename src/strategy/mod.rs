pub mod breach;
pub mod great_wall;
pub mod heuristics;
pub mod starter;

pub use breach::BreachTracker;
pub use great_wall::GreatWallStrategy;
pub use starter::StarterStrategy;

use crate::config::GameConfig;
use crate::game_state::TurnOrders;
use crate::settings::{AlgoSettings, StrategyKind};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// The callbacks the engine drives a bot through.
///
/// `on_game_start` receives the match config once. `on_turn` is called at the
/// start of each of our turns and returns the orders to submit.
/// `on_action_frame` sees every simulation frame, possibly hundreds per turn,
/// so implementations should keep it cheap.
pub trait AlgoStrategy {
    /// Human-readable name for logging.
    fn name(&self) -> &str;

    fn on_game_start(&mut self, config: GameConfig);

    fn on_turn(&mut self, turn_json: &str) -> anyhow::Result<TurnOrders>;

    fn on_action_frame(&mut self, _frame_json: &str) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Build the strategy selected in `settings`, seeded for reproducible play.
pub fn build_strategy(settings: &AlgoSettings, seed: u64) -> Box<dyn AlgoStrategy> {
    let rng = StdRng::seed_from_u64(seed);
    match settings.strategy {
        StrategyKind::GreatWall => Box::new(GreatWallStrategy::new(rng, settings.ping_count)),
        StrategyKind::Starter => Box::new(StarterStrategy::new(rng)),
    }
}
