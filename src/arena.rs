use crate::constants::*;
use crate::location::*;
use bitflags::*;

bitflags! {
    /// The four diagonal edges of the diamond arena.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Edges: u8 {
        const TOP_RIGHT = 1;
        const TOP_LEFT = 2;
        const BOTTOM_LEFT = 4;
        const BOTTOM_RIGHT = 8;
        /// Edges mobile units may be deployed from.
        const FRIENDLY = Self::BOTTOM_LEFT.bits() | Self::BOTTOM_RIGHT.bits();
        const ENEMY = Self::TOP_RIGHT.bits() | Self::TOP_LEFT.bits();
    }
}

/// Check whether a tile lies inside the diamond.
pub fn in_arena_bounds(x: i32, y: i32) -> bool {
    let half = HALF_ARENA as i32;
    let size = ARENA_SIZE as i32;

    if !(0..size).contains(&y) {
        return false;
    }

    // Rows widen by two tiles per step away from the nearest top/bottom corner.
    let row = if y < half { y } else { size - 1 - y };
    let start_x = half - 1 - row;
    let end_x = half + row;

    (start_x..=end_x).contains(&x)
}

#[inline]
pub fn location_in_bounds(loc: Location) -> bool {
    in_arena_bounds(loc.x() as i32, loc.y() as i32)
}

/// The individual edges in engine order.
pub const SINGLE_EDGES: [Edges; 4] = [
    Edges::TOP_RIGHT,
    Edges::TOP_LEFT,
    Edges::BOTTOM_LEFT,
    Edges::BOTTOM_RIGHT,
];

/// Tiles of a single edge, ordered from the middle of the arena outwards.
fn single_edge_locations(edge: Edges) -> Vec<Location> {
    (0..HALF_ARENA)
        .map(|num| {
            let (x, y) = if edge == Edges::TOP_RIGHT {
                (HALF_ARENA + num, ARENA_SIZE - 1 - num)
            } else if edge == Edges::TOP_LEFT {
                (HALF_ARENA - 1 - num, ARENA_SIZE - 1 - num)
            } else if edge == Edges::BOTTOM_LEFT {
                (HALF_ARENA - 1 - num, num)
            } else {
                (HALF_ARENA + num, num)
            };
            Location::from_xy(x, y)
        })
        .collect()
}

/// All tiles on the given edges, edge by edge.
pub fn edge_locations(edges: Edges) -> Vec<Location> {
    SINGLE_EDGES
        .into_iter()
        .filter(|edge| edges.contains(*edge))
        .flat_map(single_edge_locations)
        .collect()
}

/// Which single edge a tile belongs to, if any.
pub fn edge_of(loc: Location) -> Option<Edges> {
    SINGLE_EDGES
        .into_iter()
        .find(|edge| single_edge_locations(*edge).contains(&loc))
}

/// The edge diagonally opposite the quadrant a tile is in. Mobile units head there.
pub fn target_edge(start: Location) -> Edges {
    let left = start.x() < HALF_ARENA;
    let bottom = start.y() < HALF_ARENA;

    match (left, bottom) {
        (true, true) => Edges::TOP_RIGHT,
        (true, false) => Edges::BOTTOM_RIGHT,
        (false, true) => Edges::TOP_LEFT,
        (false, false) => Edges::BOTTOM_LEFT,
    }
}

/// How far a tile has progressed towards an edge. Higher is closer.
pub fn edge_idealness(loc: Location, edge: Edges) -> u32 {
    let size = ARENA_SIZE as u32;
    let x = loc.x() as u32;
    let y = loc.y() as u32;

    if edge == Edges::TOP_RIGHT {
        size * y + x
    } else if edge == Edges::TOP_LEFT {
        size * y + (size - 1 - x)
    } else if edge == Edges::BOTTOM_LEFT {
        size * (size - 1 - y) + (size - 1 - x)
    } else {
        size * (size - 1 - y) + x
    }
}

/// Every valid tile, row by row from the bottom.
pub fn arena_locations() -> impl Iterator<Item = Location> {
    (0..ARENA_SIZE)
        .flat_map(|y| (0..ARENA_SIZE).map(move |x| (x, y)))
        .filter(|&(x, y)| in_arena_bounds(x as i32, y as i32))
        .map(|(x, y)| Location::from_xy(x, y))
}

pub fn friendly_half() -> impl Iterator<Item = Location> {
    arena_locations().filter(|loc| loc.y() < HALF_ARENA)
}

pub fn enemy_half() -> impl Iterator<Item = Location> {
    arena_locations().filter(|loc| loc.y() >= HALF_ARENA)
}

/// Neighbor offsets for the 4-directional movement mobile units use.
pub const NEIGHBORS_4: [(i8, i8); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// In-bounds orthogonal neighbors of a tile.
pub fn neighbors(loc: Location) -> impl Iterator<Item = Location> {
    NEIGHBORS_4.iter().filter_map(move |&(dx, dy)| {
        let nx = loc.x() as i32 + dx as i32;
        let ny = loc.y() as i32 + dy as i32;
        if in_arena_bounds(nx, ny) {
            Some(Location::from_coords(nx as u32, ny as u32))
        } else {
            None
        }
    })
}

/// A 28x28 array for arena-sized data. Out-of-diamond cells are stored but never meaningful.
#[derive(Clone, Debug, PartialEq)]
pub struct ArenaDataArray<T: Copy> {
    data: Vec<T>,
}

impl<T: Copy> ArenaDataArray<T> {
    pub fn new(initial: T) -> Self {
        ArenaDataArray {
            data: vec![initial; (ARENA_SIZE as usize) * (ARENA_SIZE as usize)],
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> &T {
        let index = y * (ARENA_SIZE as usize) + x;
        &self.data[index]
    }

    #[inline]
    pub fn get_mut(&mut self, x: usize, y: usize) -> &mut T {
        let index = y * (ARENA_SIZE as usize) + x;
        &mut self.data[index]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: T) {
        *self.get_mut(x, y) = value;
    }

    #[inline]
    pub fn at(&self, loc: Location) -> &T {
        self.get(loc.x() as usize, loc.y() as usize)
    }

    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &T)> {
        self.data.iter().enumerate().map(|(i, v)| {
            let x = i % (ARENA_SIZE as usize);
            let y = i / (ARENA_SIZE as usize);
            ((x, y), v)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diamond_bounds() {
        assert!(in_arena_bounds(13, 0));
        assert!(in_arena_bounds(14, 0));
        assert!(!in_arena_bounds(12, 0));
        assert!(!in_arena_bounds(15, 0));
        assert!(in_arena_bounds(0, 13));
        assert!(in_arena_bounds(27, 14));
        assert!(in_arena_bounds(13, 27));
        assert!(!in_arena_bounds(0, 27));
        assert!(!in_arena_bounds(-1, 13));
        assert!(!in_arena_bounds(5, 28));
    }

    #[test]
    fn arena_tile_count() {
        // 14 rows per half, widths 2, 4, ..., 28.
        assert_eq!(arena_locations().count(), 2 * (2..=28).step_by(2).sum::<usize>());
        assert_eq!(friendly_half().count(), enemy_half().count());
    }

    #[test]
    fn edges_are_in_bounds_and_ordered() {
        let bottom_left = edge_locations(Edges::BOTTOM_LEFT);
        assert_eq!(bottom_left.len(), 14);
        assert_eq!(bottom_left[0], Location::from_xy(13, 0));
        assert_eq!(bottom_left[13], Location::from_xy(0, 13));

        let friendly = edge_locations(Edges::FRIENDLY);
        assert_eq!(friendly.len(), 28);
        assert!(friendly.contains(&Location::from_xy(3, 10)));
        assert!(friendly.contains(&Location::from_xy(24, 10)));
        assert!(friendly.iter().all(|loc| location_in_bounds(*loc)));

        assert!(edge_locations(Edges::all()).iter().all(|loc| location_in_bounds(*loc)));
    }

    #[test]
    fn targets_opposite_edge() {
        assert_eq!(target_edge(Location::from_xy(13, 0)), Edges::TOP_RIGHT);
        assert_eq!(target_edge(Location::from_xy(14, 0)), Edges::TOP_LEFT);
        assert_eq!(target_edge(Location::from_xy(3, 20)), Edges::BOTTOM_RIGHT);
        assert_eq!(target_edge(Location::from_xy(20, 20)), Edges::BOTTOM_LEFT);
        assert_eq!(edge_of(Location::from_xy(24, 10)), Some(Edges::BOTTOM_RIGHT));
        assert_eq!(edge_of(Location::from_xy(13, 13)), None);
    }

    #[test]
    fn neighbors_stay_in_diamond() {
        let corner: Vec<_> = neighbors(Location::from_xy(13, 0)).collect();
        assert_eq!(corner.len(), 2);
        assert_eq!(neighbors(Location::from_xy(13, 13)).count(), 4);
    }
}
