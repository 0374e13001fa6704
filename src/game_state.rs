//! Per-turn view of the arena.
//!
//! A `GameState` is built from the engine's turn payload, answers queries
//! about the board, and accumulates spawn orders. Spawns are validated and
//! charged locally so later decisions in the same turn see the effect of
//! earlier ones. The orders are handed back to the engine via `submit_turn`.

use crate::arena::*;
use crate::config::*;
use crate::constants::*;
use crate::location::*;
use crate::navigation::path_to_edge;
use crate::units::*;
use anyhow::{anyhow, Context};
use fnv::FnvHashMap;
use log::*;
use serde::Deserialize;
use serde_json::{json, Value};

/// Extra slack the engine adds when checking whether a tile is within range.
const RANGE_TOLERANCE: f32 = 0.51;

/// Health and spending resources for one player.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PlayerStats {
    pub health: f32,
    pub cores: f32,
    pub bits: f32,
    pub time: f32,
}

impl PlayerStats {
    fn from_raw(raw: &[f32]) -> PlayerStats {
        let at = |i: usize| raw.get(i).copied().unwrap_or(0.0);
        PlayerStats {
            health: at(0),
            cores: at(1),
            bits: at(2),
            time: at(3),
        }
    }

    pub fn resource(&self, resource: Resource) -> f32 {
        match resource {
            Resource::Bits => self.bits,
            Resource::Cores => self.cores,
        }
    }

    fn resource_mut(&mut self, resource: Resource) -> &mut f32 {
        match resource {
            Resource::Bits => &mut self.bits,
            Resource::Cores => &mut self.cores,
        }
    }
}

/// A queued build or deploy order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SpawnOrder {
    pub unit_type: UnitType,
    pub location: Location,
}

/// The two order lines sent back to the engine at the end of a turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnOrders {
    pub build: String,
    pub deploy: String,
}

impl TurnOrders {
    /// Orders that do nothing, for turns where the bot declines to act.
    pub fn empty() -> TurnOrders {
        TurnOrders {
            build: "[]".to_owned(),
            deploy: "[]".to_owned(),
        }
    }
}

#[derive(Deserialize)]
struct RawTurnState {
    #[serde(rename = "turnInfo")]
    turn_info: Vec<f64>,
    #[serde(rename = "p1Stats")]
    p1_stats: Vec<f32>,
    #[serde(rename = "p2Stats")]
    p2_stats: Vec<f32>,
    #[serde(rename = "p1Units", default)]
    p1_units: Vec<Vec<Vec<Value>>>,
    #[serde(rename = "p2Units", default)]
    p2_units: Vec<Vec<Vec<Value>>>,
}

pub struct GameState<'a> {
    config: &'a GameConfig,
    pub turn_number: u32,
    players: [PlayerStats; 2],
    map: FnvHashMap<Location, Vec<GameUnit>>,
    build_stack: Vec<SpawnOrder>,
    deploy_stack: Vec<SpawnOrder>,
    warnings_suppressed: bool,
}

impl<'a> GameState<'a> {
    /// An empty arena with the given resources, mostly useful for offline analysis.
    pub fn empty(config: &'a GameConfig, turn_number: u32, players: [PlayerStats; 2]) -> Self {
        GameState {
            config,
            turn_number,
            players,
            map: FnvHashMap::default(),
            build_stack: Vec::new(),
            deploy_stack: Vec::new(),
            warnings_suppressed: false,
        }
    }

    /// Parse a turn payload (`turnInfo`, `p1Stats`/`p2Stats`, `p1Units`/`p2Units`).
    pub fn from_json(config: &'a GameConfig, turn_json: &str) -> anyhow::Result<Self> {
        let raw: RawTurnState =
            serde_json::from_str(turn_json).context("malformed turn state")?;

        let turn_number = raw
            .turn_info
            .get(1)
            .copied()
            .ok_or_else(|| anyhow!("turnInfo is missing the turn number"))?;

        let mut state = GameState::empty(
            config,
            turn_number.max(0.0) as u32,
            [
                PlayerStats::from_raw(&raw.p1_stats),
                PlayerStats::from_raw(&raw.p2_stats),
            ],
        );

        state.parse_units(&raw.p1_units, PLAYER_SELF)?;
        state.parse_units(&raw.p2_units, PLAYER_ENEMY)?;

        Ok(state)
    }

    fn parse_units(&mut self, groups: &[Vec<Vec<Value>>], player_index: usize) -> anyhow::Result<()> {
        for (index, group) in groups.iter().enumerate() {
            let unit_type = match UnitType::from_index(index) {
                Some(unit_type) => unit_type,
                None => {
                    debug!("Ignoring unit group {} for player {}", index, player_index);
                    continue;
                }
            };

            for entry in group {
                let (location, health) = parse_unit_entry(entry)
                    .with_context(|| format!("bad {} entry for player {}", unit_type, player_index))?;

                if unit_type == UnitType::Remove {
                    if let Some(unit) = self.map.get_mut(&location).and_then(|units| units.first_mut()) {
                        unit.pending_removal = true;
                    }
                } else {
                    let unit = GameUnit::new(unit_type, self.config, player_index, Some(health), location);
                    self.map.entry(location).or_default().push(unit);
                }
            }
        }

        Ok(())
    }

    pub fn config(&self) -> &GameConfig {
        self.config
    }

    pub fn suppress_warnings(&mut self, suppress: bool) {
        self.warnings_suppressed = suppress;
    }

    fn warn(&self, message: impl AsRef<str>) {
        if !self.warnings_suppressed {
            warn!("{}", message.as_ref());
        }
    }

    pub fn player_stats(&self, player_index: usize) -> &PlayerStats {
        &self.players[player_index.min(1)]
    }

    pub fn get_resource(&self, resource: Resource, player_index: usize) -> f32 {
        self.player_stats(player_index).resource(resource)
    }

    /// Cost as `[bits, cores]`.
    pub fn type_cost(&self, unit_type: UnitType) -> [f32; 2] {
        self.config.type_cost(unit_type)
    }

    /// How many of a unit type we can pay for right now.
    pub fn number_affordable(&self, unit_type: UnitType) -> u32 {
        let costs = self.type_cost(unit_type);

        Resource::ALL
            .into_iter()
            .filter(|resource| costs[resource.index()] > 0.0)
            .map(|resource| {
                (self.get_resource(resource, PLAYER_SELF) / costs[resource.index()]).floor().max(0.0) as u32
            })
            .min()
            .unwrap_or(u32::MAX)
    }

    /// All units on a tile, in arrival order.
    pub fn units_at(&self, location: Location) -> &[GameUnit] {
        self.map.get(&location).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Every unit on the board.
    pub fn units(&self) -> impl Iterator<Item = &GameUnit> {
        self.map.values().flat_map(|units| units.iter())
    }

    pub fn stationary_unit_at(&self, location: Location) -> Option<&GameUnit> {
        self.units_at(location).iter().find(|unit| unit.is_stationary())
    }

    pub fn contains_stationary_unit(&self, location: Location) -> bool {
        self.stationary_unit_at(location).is_some()
    }

    fn add_unit(&mut self, unit_type: UnitType, location: Location, player_index: usize) {
        let unit = GameUnit::new(unit_type, self.config, player_index, None, location);
        self.map.entry(location).or_default().push(unit);
    }

    /// Check whether `num` units of a type could be spawned at a tile this turn.
    pub fn can_spawn(&self, unit_type: UnitType, location: Location, num: u32) -> bool {
        if !location_in_bounds(location) {
            self.warn(format!("Could not spawn {} at location {}. Location invalid.", unit_type, location));
            return false;
        }

        let affordable = self.number_affordable(unit_type) >= num;
        let stationary = unit_type.is_stationary();
        let blocked = self.contains_stationary_unit(location)
            || (stationary && !self.units_at(location).is_empty());
        let correct_territory = location.y() < HALF_ARENA;
        let on_edge = edge_of(location).map_or(false, |edge| Edges::FRIENDLY.contains(edge));
        let single_stationary = !stationary || num == 1;

        let ok = affordable
            && correct_territory
            && !blocked
            && (stationary || on_edge)
            && single_stationary;

        if !ok && !self.warnings_suppressed {
            let mut reason = String::new();
            if !affordable {
                reason.push_str(" Not enough resources.");
            }
            if blocked {
                reason.push_str(" Location is blocked.");
            }
            if !correct_territory {
                reason.push_str(" Location in enemy territory.");
            }
            if !(stationary || on_edge) {
                reason.push_str(" Information units must be deployed on the edge.");
            }
            if !single_stationary {
                reason.push_str(" Can only spawn 1 stationary unit per location.");
            }
            self.warn(format!("Could not spawn {} at location {}.{}", unit_type, location, reason));
        }

        ok
    }

    /// Try to spawn `num` units at each location in turn. Returns the number placed.
    pub fn attempt_spawn<I>(&mut self, unit_type: UnitType, locations: I, num: u32) -> u32
    where
        I: IntoIterator<Item = Location>,
    {
        if num < 1 {
            self.warn("Attempted to spawn fewer than one units!");
            return 0;
        }

        let costs = self.type_cost(unit_type);
        let mut spawned = 0;

        for location in locations {
            for _ in 0..num {
                if !self.can_spawn(unit_type, location, 1) {
                    break;
                }

                for resource in Resource::ALL {
                    *self.players[PLAYER_SELF].resource_mut(resource) -= costs[resource.index()];
                }
                self.add_unit(unit_type, location, PLAYER_SELF);

                let order = SpawnOrder { unit_type, location };
                if unit_type.is_stationary() {
                    self.build_stack.push(order);
                } else {
                    self.deploy_stack.push(order);
                }
                spawned += 1;
            }
        }

        spawned
    }

    /// Queue removal of our own stationary units. Returns the number queued.
    pub fn attempt_remove<I>(&mut self, locations: I) -> u32
    where
        I: IntoIterator<Item = Location>,
    {
        let mut removed = 0;

        for location in locations {
            let ours = self
                .stationary_unit_at(location)
                .map_or(false, |unit| unit.player_index == PLAYER_SELF);

            if ours {
                self.build_stack.push(SpawnOrder {
                    unit_type: UnitType::Remove,
                    location,
                });
                removed += 1;
            } else {
                self.warn(format!("Could not remove a unit from {}. Location has no stationary units we own.", location));
            }
        }

        removed
    }

    /// Enemy (relative to `player_index`) destructors whose range covers `location`.
    pub fn get_attackers(&self, location: Location, player_index: usize) -> Vec<&GameUnit> {
        let mut attackers: Vec<&GameUnit> = self
            .units()
            .filter(|unit| {
                unit.unit_type == UnitType::Destructor
                    && unit.player_index != player_index
                    && unit.location.distance_to(location) < unit.stats.range + RANGE_TOLERANCE
            })
            .collect();
        attackers.sort_by_key(|unit| unit.location);
        attackers
    }

    /// Path a mobile unit spawned at `start` would walk. Defaults to the edge opposite its quadrant.
    pub fn find_path_to_edge(&self, start: Location, edge: Option<Edges>) -> Option<Vec<Location>> {
        let edge = edge.unwrap_or_else(|| target_edge(start));
        path_to_edge(start, edge, |loc| self.contains_stationary_unit(loc))
    }

    pub fn build_orders(&self) -> &[SpawnOrder] {
        &self.build_stack
    }

    pub fn deploy_orders(&self) -> &[SpawnOrder] {
        &self.deploy_stack
    }

    fn encode_orders(&self, orders: &[SpawnOrder]) -> String {
        let encoded: Vec<Value> = orders
            .iter()
            .map(|order| {
                json!([
                    self.config.shorthand(order.unit_type),
                    order.location.x(),
                    order.location.y()
                ])
            })
            .collect();
        Value::Array(encoded).to_string()
    }

    /// Serialize this turn's orders into the engine's two-line format.
    pub fn submit_turn(&self) -> TurnOrders {
        TurnOrders {
            build: self.encode_orders(&self.build_stack),
            deploy: self.encode_orders(&self.deploy_stack),
        }
    }
}

fn parse_unit_entry(entry: &[Value]) -> anyhow::Result<(Location, f32)> {
    let number = |i: usize| -> anyhow::Result<f64> {
        entry
            .get(i)
            .and_then(Value::as_f64)
            .ok_or_else(|| anyhow!("field {} is missing or not a number", i))
    };

    let x = number(0)?;
    let y = number(1)?;
    let health = number(2)?;

    let location = Location::try_from_signed(x as i32, y as i32)
        .filter(|loc| location_in_bounds(*loc))
        .ok_or_else(|| anyhow!("unit at [{}, {}] is outside the arena", x, y))?;

    Ok((location, health as f32))
}
