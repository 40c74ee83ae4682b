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
//! Ships: straight runs of occupied cells.
use std::ops::Deref;

use thiserror::Error;

use crate::board::Coordinate;

/// Direction a ship of two or more cells runs in.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Orientation {
    /// All cells share the same `y`; `x` increases along the ship.
    Horizontal,
    /// All cells share the same `x`; `y` increases along the ship.
    Vertical,
}

impl Orientation {
    /// The `(dx, dy)` step between consecutive cells.
    pub fn step(self) -> (isize, isize) {
        match self {
            Orientation::Horizontal => (1, 0),
            Orientation::Vertical => (0, 1),
        }
    }
}

#[cfg(feature = "rng_gen")]
impl rand::distributions::Distribution<Orientation> for rand::distributions::Standard {
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Orientation {
        if rng.gen() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// Reason a sequence of coordinates does not describe a ship.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum ShipError {
    /// A ship needs at least one cell.
    #[error("a ship must have at least one cell")]
    Empty,
    /// Consecutive cells were not one step apart along the ship's axis.
    #[error("cells {0:?} and {1:?} are not consecutive along a straight line")]
    NotStraight(Coordinate, Coordinate),
}

/// A ship: an ordered sequence of cells which share either the same `x` or the same `y`,
/// each one unit step from the previous.
///
/// Derefs to the slice of its coordinates.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Ship {
    coords: Vec<Coordinate>,
}

impl Ship {
    /// Build a ship from a sequence of coordinates. The sequence must be non-empty, and
    /// every cell must follow the previous by the same unit step, either horizontally or
    /// vertically, in either direction.
    pub fn from_coords(coords: Vec<Coordinate>) -> Result<Self, ShipError> {
        let mut iter = coords.iter();
        let mut previous = *iter.next().ok_or(ShipError::Empty)?;
        let mut step = None;
        for &coord in iter {
            let delta = (
                coord.x as isize - previous.x as isize,
                coord.y as isize - previous.y as isize,
            );
            let valid = match (step, delta) {
                (None, (dx, dy)) => dx.abs() + dy.abs() == 1,
                (Some(expected), delta) => expected == delta,
            };
            if !valid {
                return Err(ShipError::NotStraight(previous, coord));
            }
            step = Some(delta);
            previous = coord;
        }
        Ok(Self { coords })
    }

    /// A ship consisting of a single cell.
    pub fn single(coord: Coordinate) -> Self {
        Self {
            coords: vec![coord],
        }
    }

    /// Build the ship of length `len` starting at `start` and running along
    /// `orientation`. Does not check any board bounds. Panics if `len` is 0.
    pub fn line(start: Coordinate, orientation: Orientation, len: usize) -> Self {
        assert!(len > 0, "a ship must have at least one cell");
        let (dx, dy) = orientation.step();
        let coords = (0..len)
            .map(|i| Coordinate::new(start.x + dx as usize * i, start.y + dy as usize * i))
            .collect();
        Self { coords }
    }

    /// Extend the ship by one cell. Only used by extraction, which always pushes the
    /// next cell along the run.
    pub(crate) fn push(&mut self, coord: Coordinate) {
        self.coords.push(coord);
    }

    /// Get the coordinate where this ship starts.
    pub fn start(&self) -> &Coordinate {
        // Ships are never empty.
        &self.coords[0]
    }

    /// The direction this ship runs in, or `None` for a single-cell ship.
    pub fn orientation(&self) -> Option<Orientation> {
        match (self.coords.get(0), self.coords.get(1)) {
            (Some(a), Some(b)) if a.y == b.y => Some(Orientation::Horizontal),
            (Some(_), Some(_)) => Some(Orientation::Vertical),
            _ => None,
        }
    }

    /// Extract the coordinates of this ship.
    pub fn into_coords(self) -> Vec<Coordinate> {
        self.coords
    }
}

impl Deref for Ship {
    type Target = [Coordinate];

    fn deref(&self) -> &Self::Target {
        &self.coords
    }
}

impl From<Ship> for Vec<Coordinate> {
    fn from(ship: Ship) -> Self {
        ship.into_coords()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords(cells: &[(usize, usize)]) -> Vec<Coordinate> {
        cells.iter().map(|&c| c.into()).collect()
    }

    #[test]
    fn accepts_straight_runs_in_either_direction() {
        let ship = Ship::from_coords(coords(&[(2, 5), (3, 5), (4, 5)])).unwrap();
        assert_eq!(ship.len(), 3);
        assert_eq!(ship.orientation(), Some(Orientation::Horizontal));

        let ship = Ship::from_coords(coords(&[(7, 3), (7, 2), (7, 1), (7, 0)])).unwrap();
        assert_eq!(ship.len(), 4);
        assert_eq!(ship.orientation(), Some(Orientation::Vertical));
        assert_eq!(ship.start(), &Coordinate::new(7, 3));
    }

    #[test]
    fn single_cell_has_no_orientation() {
        let ship = Ship::from_coords(coords(&[(0, 0)])).unwrap();
        assert_eq!(ship.orientation(), None);
        assert_eq!(ship, Ship::single(Coordinate::new(0, 0)));
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(Ship::from_coords(Vec::new()), Err(ShipError::Empty));
    }

    #[test]
    fn rejects_gaps_bends_and_backtracking() {
        assert_eq!(
            Ship::from_coords(coords(&[(0, 0), (2, 0)])),
            Err(ShipError::NotStraight((0, 0).into(), (2, 0).into()))
        );
        assert_eq!(
            Ship::from_coords(coords(&[(0, 0), (1, 0), (1, 1)])),
            Err(ShipError::NotStraight((1, 0).into(), (1, 1).into()))
        );
        assert_eq!(
            Ship::from_coords(coords(&[(0, 0), (1, 0), (0, 0)])),
            Err(ShipError::NotStraight((1, 0).into(), (0, 0).into()))
        );
        assert_eq!(
            Ship::from_coords(coords(&[(0, 0), (1, 1)])),
            Err(ShipError::NotStraight((0, 0).into(), (1, 1).into()))
        );
    }

    #[test]
    fn line_builds_consecutive_cells() {
        let ship = Ship::line(Coordinate::new(3, 9), Orientation::Vertical, 3);
        assert_eq!(&*ship, &coords(&[(3, 9), (3, 10), (3, 11)])[..]);
    }

    #[test]
    #[should_panic(expected = "at least one cell")]
    fn line_of_zero_cells_panics() {
        Ship::line(Coordinate::new(0, 0), Orientation::Horizontal, 0);
    }
}
