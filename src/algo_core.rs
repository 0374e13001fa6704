//! Drives a strategy over the engine's line protocol.
//!
//! The engine writes one JSON object per line: the game config first, then a
//! turn state at the start of every turn and an action frame for every
//! simulation frame. Each turn is answered with two lines, the build orders
//! followed by the deploy orders.

use crate::config::GameConfig;
use crate::constants::*;
use crate::strategy::AlgoStrategy;
use anyhow::Context;
use log::*;
use serde_json::Value;
use std::io::{BufRead, Write};

/// What a single engine line asks of the bot.
#[derive(Debug, PartialEq)]
pub enum EngineMessage {
    Config,
    Turn,
    ActionFrame,
    EndOfGame,
    Unknown,
}

pub fn classify(message: &Value) -> EngineMessage {
    if message.get("unitInformation").is_some() {
        return EngineMessage::Config;
    }

    let phase = message
        .get("turnInfo")
        .and_then(|info| info.get(0))
        .and_then(Value::as_i64);

    match phase {
        Some(TURN_PHASE_TURN) => EngineMessage::Turn,
        Some(TURN_PHASE_ACTION_FRAME) => EngineMessage::ActionFrame,
        Some(TURN_PHASE_END) => EngineMessage::EndOfGame,
        _ => EngineMessage::Unknown,
    }
}

/// Summary of a finished run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    pub turns: u32,
    pub action_frames: u32,
    pub ended: bool,
}

pub struct AlgoCore;

impl AlgoCore {
    /// Feed engine lines from `input` to `strategy` until the game ends or input closes.
    pub fn run<S, R, W>(strategy: &mut S, input: R, mut output: W) -> anyhow::Result<RunStats>
    where
        S: AlgoStrategy + ?Sized,
        R: BufRead,
        W: Write,
    {
        let mut stats = RunStats::default();
        let mut configured = false;

        for line in input.lines() {
            let line = line.context("reading engine input")?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let message: Value = match serde_json::from_str(line) {
                Ok(message) => message,
                Err(err) => {
                    warn!("Got unexpected string: {} ({})", line, err);
                    continue;
                }
            };

            match classify(&message) {
                EngineMessage::Config => {
                    let config = GameConfig::from_json(line).context("parsing game config")?;
                    info!("Configuring your custom algo strategy: {}", strategy.name());
                    strategy.on_game_start(config);
                    configured = true;
                }
                EngineMessage::Turn => {
                    anyhow::ensure!(configured, "turn received before the game config");

                    let orders = strategy.on_turn(line)?;
                    writeln!(output, "{}", orders.build).context("writing build orders")?;
                    writeln!(output, "{}", orders.deploy).context("writing deploy orders")?;
                    output.flush().context("flushing orders")?;
                    stats.turns += 1;
                }
                EngineMessage::ActionFrame => {
                    strategy.on_action_frame(line)?;
                    stats.action_frames += 1;
                }
                EngineMessage::EndOfGame => {
                    info!("Got end state, game over. Stopping algo.");
                    stats.ended = true;
                    break;
                }
                EngineMessage::Unknown => {
                    warn!("Got unexpected string with turnInfo: {}", line);
                }
            }
        }

        debug!("Run finished: {:?}", stats);

        Ok(stats)
    }
}
