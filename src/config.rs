//! Game configuration sent by the engine as the first line of a match.
//!
//! Only the fields the bot reads are modelled. The engine has shipped several
//! naming schemes for unit stats over its seasons, so stats accept the older
//! (`damage`, `range`, `stability`, `cost`) and newer (`attackDamageWalker`,
//! `attackRange`, `startHealth`, `cost1`/`cost2`) spellings.

use crate::constants::*;
use crate::units::*;
use serde::Deserialize;

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitInformation {
    #[serde(default)]
    pub shorthand: Option<String>,
    /// Single-resource cost. Charged in cores for stationary units, bits otherwise.
    #[serde(default)]
    pub cost: Option<f32>,
    /// Bits cost.
    #[serde(default)]
    pub cost1: Option<f32>,
    /// Cores cost.
    #[serde(default)]
    pub cost2: Option<f32>,
    #[serde(default)]
    pub damage: Option<f32>,
    #[serde(default, rename = "damageI")]
    pub damage_i: Option<f32>,
    #[serde(default)]
    pub attack_damage_walker: Option<f32>,
    #[serde(default)]
    pub shield_amount: Option<f32>,
    #[serde(default, alias = "attackRange")]
    pub range: Option<f32>,
    #[serde(default, alias = "startHealth")]
    pub stability: f32,
    #[serde(default)]
    pub speed: f32,
}

impl UnitInformation {
    /// Damage dealt to mobile units, or shield granted for encryptors.
    pub fn damage_value(&self, unit_type: UnitType) -> f32 {
        if unit_type == UnitType::Encryptor {
            return self.shield_amount.or(self.damage).unwrap_or(0.0);
        }

        self.damage
            .or(self.damage_i)
            .or(self.attack_damage_walker)
            .unwrap_or(0.0)
    }

    pub fn range_value(&self) -> f32 {
        self.range.unwrap_or(0.0)
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameConfig {
    pub unit_information: Vec<UnitInformation>,
    #[serde(default)]
    pub resources: serde_json::Value,
}

impl GameConfig {
    pub fn from_json(line: &str) -> serde_json::Result<GameConfig> {
        serde_json::from_str(line)
    }

    pub fn unit_info(&self, unit_type: UnitType) -> Option<&UnitInformation> {
        self.unit_information.get(unit_type.index())
    }

    /// The shorthand the engine expects in orders for this unit type.
    pub fn shorthand(&self, unit_type: UnitType) -> &str {
        self.unit_info(unit_type)
            .and_then(|info| info.shorthand.as_deref())
            .unwrap_or_else(|| unit_type.default_shorthand())
    }

    pub fn unit_type_for_shorthand(&self, shorthand: &str) -> Option<UnitType> {
        UnitType::ALL
            .into_iter()
            .find(|unit_type| self.shorthand(*unit_type) == shorthand)
    }

    /// Cost as `[bits, cores]`.
    pub fn type_cost(&self, unit_type: UnitType) -> [f32; 2] {
        let mut costs = [0.0; 2];
        let info = match self.unit_info(unit_type) {
            Some(info) => info,
            None => return costs,
        };

        if info.cost1.is_some() || info.cost2.is_some() {
            costs[Resource::Bits.index()] = info.cost1.unwrap_or(0.0);
            costs[Resource::Cores.index()] = info.cost2.unwrap_or(0.0);
        } else if let Some(cost) = info.cost {
            let resource = if unit_type.is_stationary() {
                Resource::Cores
            } else {
                Resource::Bits
            };
            costs[resource.index()] = cost;
        }

        costs
    }

    /// The cheapest of the given unit types by total cost. Earlier entries win ties.
    pub fn cheapest_of(&self, candidates: &[UnitType]) -> Option<UnitType> {
        let total = |unit_type: UnitType| self.type_cost(unit_type).iter().sum::<f32>();
        candidates.iter().copied().fold(None, |best, unit_type| match best {
            Some(current) if total(current) <= total(unit_type) => Some(current),
            _ => Some(unit_type),
        })
    }
}
