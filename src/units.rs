use crate::config::*;
use crate::location::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Every unit the engine knows about, in `unitInformation` order.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum UnitType {
    #[serde(rename = "FF")]
    Filter,
    #[serde(rename = "EF")]
    Encryptor,
    #[serde(rename = "DF")]
    Destructor,
    #[serde(rename = "PI")]
    Ping,
    #[serde(rename = "EI")]
    Emp,
    #[serde(rename = "SI")]
    Scrambler,
    #[serde(rename = "RM")]
    Remove,
}

impl UnitType {
    pub const ALL: [UnitType; 7] = [
        UnitType::Filter,
        UnitType::Encryptor,
        UnitType::Destructor,
        UnitType::Ping,
        UnitType::Emp,
        UnitType::Scrambler,
        UnitType::Remove,
    ];

    pub const STATIONARY: [UnitType; 3] =
        [UnitType::Filter, UnitType::Encryptor, UnitType::Destructor];

    /// Default engine shorthand. The config may override these.
    pub fn default_shorthand(self) -> &'static str {
        match self {
            UnitType::Filter => "FF",
            UnitType::Encryptor => "EF",
            UnitType::Destructor => "DF",
            UnitType::Ping => "PI",
            UnitType::Emp => "EI",
            UnitType::Scrambler => "SI",
            UnitType::Remove => "RM",
        }
    }

    /// Position in the engine's `unitInformation` and per-player unit arrays.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<UnitType> {
        UnitType::ALL.get(index).copied()
    }

    /// Stationary units are built; everything else is deployed and walks.
    pub fn is_stationary(self) -> bool {
        matches!(
            self,
            UnitType::Filter | UnitType::Encryptor | UnitType::Destructor | UnitType::Remove
        )
    }
}

impl fmt::Display for UnitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.default_shorthand())
    }
}

/// A unit on the arena, as parsed from a turn state or added by a spawn.
#[derive(Clone, Debug, PartialEq)]
pub struct GameUnit {
    pub unit_type: UnitType,
    pub player_index: usize,
    pub location: Location,
    pub health: f32,
    pub pending_removal: bool,
    pub stats: UnitStats,
}

/// Combat stats resolved from the game config.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct UnitStats {
    pub damage: f32,
    pub range: f32,
    pub max_health: f32,
    pub speed: f32,
}

impl UnitStats {
    pub fn from_config(unit_type: UnitType, config: &GameConfig) -> UnitStats {
        match config.unit_info(unit_type) {
            Some(info) => UnitStats {
                damage: info.damage_value(unit_type),
                range: info.range_value(),
                max_health: info.stability,
                speed: if unit_type.is_stationary() { 0.0 } else { info.speed },
            },
            None => UnitStats::default(),
        }
    }
}

impl GameUnit {
    pub fn new(
        unit_type: UnitType,
        config: &GameConfig,
        player_index: usize,
        health: Option<f32>,
        location: Location,
    ) -> GameUnit {
        let stats = UnitStats::from_config(unit_type, config);
        GameUnit {
            unit_type,
            player_index,
            location,
            health: health.unwrap_or(stats.max_health),
            pending_removal: false,
            stats,
        }
    }

    #[inline]
    pub fn is_stationary(&self) -> bool {
        self.unit_type.is_stationary()
    }
}
