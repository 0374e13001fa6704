//! Tracks where the opponent has scored on us, from action frame events.

use crate::constants::*;
use crate::location::Location;
use anyhow::Context;
use log::*;
use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize)]
struct RawFrame {
    #[serde(default)]
    events: RawEvents,
}

#[derive(Deserialize, Default)]
struct RawEvents {
    /// Each entry is `[[x, y], damage, unit_type, unit_id, owner]`.
    #[serde(default)]
    breach: Vec<Vec<Value>>,
}

/// Breach locations recorded across the match, oldest first, without repeats.
#[derive(Clone, Debug, Default)]
pub struct BreachTracker {
    scored_on: Vec<Location>,
}

impl BreachTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scored_on_locations(&self) -> &[Location] {
        &self.scored_on
    }

    /// Record every enemy breach in an action frame. Returns how many new locations were added.
    pub fn record_frame(&mut self, frame_json: &str) -> anyhow::Result<usize> {
        let frame: RawFrame = serde_json::from_str(frame_json).context("malformed action frame")?;
        let mut added = 0;

        for breach in &frame.events.breach {
            let location: Location = match breach.first() {
                Some(raw) => serde_json::from_value(raw.clone()).context("malformed breach location")?,
                None => continue,
            };

            // Raw frames number players 1 (us) and 2 (them).
            let owner = breach.get(4).and_then(Value::as_f64).unwrap_or(0.0) as u8;
            if owner == FRAME_OWNER_SELF {
                continue;
            }

            info!("Got scored on at: {}", location);
            if !self.scored_on.contains(&location) {
                self.scored_on.push(location);
                added += 1;
            }
        }

        if added > 0 {
            debug!("All locations: {:?}", self.scored_on);
        }

        Ok(added)
    }
}
