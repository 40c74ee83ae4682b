// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Groups the occupied cells of a checked grid into ships.

use log::trace;

use crate::{
    board::{Coordinate, OccupancyGrid},
    placement::adjacency::CheckedGrid,
    ships::Ship,
};

/// Split a checked grid into ships, in discovery order.
///
/// Cells are scanned column-major. Each occupied cell not yet consumed starts a new
/// ship, which then runs rightward if the right neighbor is occupied, otherwise
/// downward if the cell below is. Consumed cells are cleared, so each occupied cell
/// lands in exactly one ship. Preferring rightward over downward is only sound because
/// the grid is known to contain no bends or branches.
///
/// Runs are not truncated: a run longer than the rules allow comes out as one long
/// ship for the rules check to reject.
pub fn extract(grid: CheckedGrid) -> Vec<Ship> {
    let mut grid = grid.into_inner();
    let dim = *grid.dimensions();
    let mut ships = Vec::new();
    for coord in dim.iter_coordinates() {
        if !grid.take(coord) {
            continue;
        }
        let mut ship = Ship::single(coord);
        if grid.is_occupied(coord.right()) {
            consume_run(&mut grid, &mut ship, coord, Coordinate::right);
        } else if grid.is_occupied(coord.down()) {
            consume_run(&mut grid, &mut ship, coord, Coordinate::down);
        }
        trace!("extracted ship of length {} at {:?}", ship.len(), coord);
        ships.push(ship);
    }
    ships
}

/// Follow `step` from `start`, moving every consecutive occupied cell into `ship`. Stops
/// at the first empty cell or the edge of the board.
fn consume_run(
    grid: &mut OccupancyGrid,
    ship: &mut Ship,
    start: Coordinate,
    step: fn(Coordinate) -> Coordinate,
) {
    let mut next = step(start);
    while grid.take(next) {
        ship.push(next);
        next = step(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{placement::adjacency, ships::Orientation};

    fn extract_cells(cells: &[(usize, usize)]) -> Vec<Ship> {
        let mut grid = OccupancyGrid::default();
        for &c in cells {
            grid.set(c.into(), true).unwrap();
        }
        extract(adjacency::check(grid).unwrap())
    }

    fn coords(ship: &Ship) -> Vec<(usize, usize)> {
        ship.iter().map(|&c| c.into()).collect()
    }

    #[test]
    fn horizontal_run_is_one_ship() {
        let ships = extract_cells(&[(0, 0), (1, 0), (2, 0)]);
        assert_eq!(ships.len(), 1);
        assert_eq!(coords(&ships[0]), vec![(0, 0), (1, 0), (2, 0)]);
        assert_eq!(ships[0].orientation(), Some(Orientation::Horizontal));
    }

    #[test]
    fn vertical_run_is_one_ship() {
        let ships = extract_cells(&[(0, 0), (0, 1), (0, 2)]);
        assert_eq!(ships.len(), 1);
        assert_eq!(coords(&ships[0]), vec![(0, 0), (0, 1), (0, 2)]);
        assert_eq!(ships[0].orientation(), Some(Orientation::Vertical));
    }

    #[test]
    fn isolated_cell_is_a_single_ship() {
        let ships = extract_cells(&[(7, 7)]);
        assert_eq!(ships, vec![Ship::single(Coordinate::new(7, 7))]);
    }

    #[test]
    fn runs_stop_at_the_board_edge() {
        let ships = extract_cells(&[(12, 14), (13, 14), (14, 14), (14, 10), (14, 11)]);
        assert_eq!(ships.len(), 2);
        assert_eq!(coords(&ships[0]), vec![(12, 14), (13, 14), (14, 14)]);
        assert_eq!(coords(&ships[1]), vec![(14, 10), (14, 11)]);
    }

    #[test]
    fn discovery_order_is_column_major() {
        let ships = extract_cells(&[(4, 0), (0, 4), (0, 5), (2, 2)]);
        let starts: Vec<(usize, usize)> = ships.iter().map(|s| (*s.start()).into()).collect();
        assert_eq!(starts, vec![(0, 4), (2, 2), (4, 0)]);
    }

    #[test]
    fn long_runs_are_not_truncated() {
        let ships = extract_cells(&[(0, 3), (1, 3), (2, 3), (3, 3), (4, 3)]);
        assert_eq!(ships.len(), 1);
        assert_eq!(ships[0].len(), 5);
    }

    #[test]
    fn every_cell_lands_in_exactly_one_ship() {
        let cells = [(0, 0), (1, 0), (3, 0), (3, 1), (3, 2), (0, 2), (6, 6)];
        let ships = extract_cells(&cells);
        let mut seen: Vec<(usize, usize)> = ships.iter().flat_map(coords).collect();
        seen.sort();
        let mut expected = cells.to_vec();
        expected.sort();
        assert_eq!(seen, expected);
    }
}
