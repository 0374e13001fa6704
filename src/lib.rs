pub mod algo_core;
pub mod arena;
pub mod config;
pub mod constants;
pub mod damage;
pub mod game_state;
pub mod geometry;
pub mod location;
pub mod navigation;
pub mod settings;
pub mod stamps;
pub mod strategy;
pub mod units;
