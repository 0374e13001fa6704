pub mod starter;
pub mod wall;

use crate::arena::location_in_bounds;
use crate::constants::*;
use crate::game_state::GameState;
use crate::geometry::get_line_points;
use crate::location::Location;
use crate::units::UnitType;
use fnv::FnvHashMap;
use log::*;

/// Where a placement puts its units.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// Explicit tiles, spawned in the listed order.
    Points(Vec<Location>),
    /// Every tile on the line between two endpoints, left to right.
    Line(Location, Location),
}

/// A group of units of one type, spawned together.
#[derive(Clone, Debug, PartialEq)]
pub struct StampPlacement {
    pub unit_type: UnitType,
    pub shape: Shape,
}

impl StampPlacement {
    pub fn locations(&self) -> Vec<Location> {
        match &self.shape {
            Shape::Points(points) => points.clone(),
            Shape::Line(start, end) => get_line_points(*start, *end),
        }
    }

    fn mirrored(&self) -> StampPlacement {
        let shape = match &self.shape {
            Shape::Points(points) => Shape::Points(points.iter().map(|p| p.mirrored()).collect()),
            Shape::Line(start, end) => Shape::Line(start.mirrored(), end.mirrored()),
        };
        StampPlacement {
            unit_type: self.unit_type,
            shape,
        }
    }
}

/// A stamp is a fixed arrangement of units on our half of the arena.
///
/// Groups are spawned in order, so earlier groups get first claim on
/// resources and on shared tiles.
#[derive(Clone, Debug, PartialEq)]
pub struct Stamp {
    pub name: &'static str,
    pub placements: Vec<StampPlacement>,
}

/// Units built by a stamp, per type.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BuildTally {
    by_type: FnvHashMap<UnitType, u32>,
}

impl BuildTally {
    pub fn add(&mut self, unit_type: UnitType, count: u32) {
        *self.by_type.entry(unit_type).or_default() += count;
    }

    pub fn get(&self, unit_type: UnitType) -> u32 {
        self.by_type.get(&unit_type).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u32 {
        self.by_type.values().sum()
    }
}

impl Stamp {
    /// Every (unit, tile) pair in spawn order. Tiles may repeat across groups.
    pub fn placements(&self) -> Vec<(UnitType, Location)> {
        self.placements
            .iter()
            .flat_map(|p| p.locations().into_iter().map(move |loc| (p.unit_type, loc)))
            .collect()
    }

    /// Reflect the stamp across the vertical centre line.
    pub fn mirrored(&self) -> Stamp {
        Stamp {
            name: self.name,
            placements: self.placements.iter().map(|p| p.mirrored()).collect(),
        }
    }

    /// Append the mirror image of every group after the originals.
    pub fn with_mirror(&self) -> Stamp {
        let mut placements = self.placements.clone();
        placements.extend(self.mirrored().placements);
        Stamp {
            name: self.name,
            placements,
        }
    }

    /// Validate that the stamp can ever be built:
    /// - At least one placement exists.
    /// - Every tile lies inside the arena, on our half.
    /// - Only stationary units are laid out.
    pub fn validate(&self) -> bool {
        let placements = self.placements();
        !placements.is_empty()
            && placements.iter().all(|(unit_type, loc)| {
                unit_type.is_stationary()
                    && *unit_type != UnitType::Remove
                    && location_in_bounds(*loc)
                    && loc.y() < HALF_ARENA
            })
    }

    /// Attempt every group in order. Blocked or unaffordable tiles are skipped.
    pub fn spawn(&self, state: &mut GameState) -> BuildTally {
        let mut tally = BuildTally::default();

        for placement in &self.placements {
            let built = state.attempt_spawn(placement.unit_type, placement.locations(), 1);
            tally.add(placement.unit_type, built);
        }

        debug!("Stamp {} built {} units", self.name, tally.total());

        tally
    }
}

/// Helper to create a group of explicit points.
pub fn pts(unit_type: UnitType, points: &[[u8; 2]]) -> StampPlacement {
    StampPlacement {
        unit_type,
        shape: Shape::Points(points.iter().map(|p| Location::from(*p)).collect()),
    }
}

/// Helper to create a line group.
pub fn line(unit_type: UnitType, start: [u8; 2], end: [u8; 2]) -> StampPlacement {
    StampPlacement {
        unit_type,
        shape: Shape::Line(Location::from(start), Location::from(end)),
    }
}
