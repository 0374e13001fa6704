//! Coordinate helpers for laying out structures.

use crate::constants::*;
use crate::location::*;
use itertools::Itertools;

/// All tiles on the line between `start` and `end`, walking left to right.
///
/// x advances one column per step while y accumulates the slope and is
/// rounded half-to-even, so a shallow diagonal produces a staircase. A
/// vertical line yields every tile between the two endpoints.
pub fn get_line_points(start: Location, end: Location) -> Vec<Location> {
    let (start, end) = if start.x() > end.x() {
        (end, start)
    } else {
        (start, end)
    };

    let (x1, y1) = (start.x() as i32, start.y() as i32);
    let (x2, y2) = (end.x() as i32, end.y() as i32);

    if x1 == x2 {
        return (y1.min(y2)..=y1.max(y2))
            .filter_map(|y| Location::try_from_signed(x1, y))
            .collect();
    }

    let slope = (y2 - y1) as f64 / (x2 - x1) as f64;
    let mut y = y1 as f64;
    let mut points = Vec::with_capacity((x2 - x1 + 1) as usize);

    for x in x1..=x2 {
        if let Some(point) = Location::try_from_signed(x, y.round_ties_even() as i32) {
            points.push(point);
        }
        y += slope;
    }

    points.into_iter().unique().collect()
}

/// Append the mirror image of every location across the vertical centre line.
pub fn mirror_coords(mut locations: Vec<Location>) -> Vec<Location> {
    let mirrored: Vec<Location> = locations.iter().map(|loc| loc.mirrored()).collect();
    locations.extend(mirrored);
    locations
}

/// Staircase column running from the top-left edge tile `(startx, startx + 14)`
/// down and to the right until it reaches row `startx`.
///
/// Valid for `startx` in `0..14`.
pub fn column_left(startx: u8) -> Vec<Location> {
    let mut x = startx as i32;
    let mut y = startx as i32 + HALF_ARENA as i32;
    let mut column = vec![(x, y)];

    x += 1;
    column.push((x, y));
    y -= 1;
    while y > startx as i32 {
        column.push((x, y));
        x += 1;
        column.push((x, y));
        y -= 1;
    }
    column.push((x, y));

    column
        .into_iter()
        .filter_map(|(x, y)| Location::try_from_signed(x, y))
        .collect()
}

/// Staircase column running from the top-right edge tile `(startx, 41 - startx)`
/// down and to the left until it reaches row `27 - startx`.
///
/// Valid for `startx` in `14..28`.
pub fn column_right(startx: u8) -> Vec<Location> {
    let last = ARENA_SIZE as i32 - 1;
    let mut x = startx as i32;
    let mut y = last - (x - HALF_ARENA as i32);
    let mut column = vec![(x, y)];

    x -= 1;
    column.push((x, y));
    y -= 1;
    while y > last - startx as i32 {
        column.push((x, y));
        x -= 1;
        column.push((x, y));
        y -= 1;
    }
    column.push((x, y));

    column
        .into_iter()
        .filter_map(|(x, y)| Location::try_from_signed(x, y))
        .collect()
}
