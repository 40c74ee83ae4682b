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
//! Dimensions of the square board.
use std::borrow::Borrow;

use crate::board::Coordinate;

/// Side length of the standard board.
pub const BOARD_SIZE: usize = 15;

/// Dimensions of a square board. The standard board is [`BOARD_SIZE`] cells on a side.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct BoardDimensions {
    /// Number of cells along each side. Cooresponds to both the `x` and `y` ranges.
    size: usize,
}

impl BoardDimensions {
    /// Create new [`BoardDimensions`] with the given side length.
    /// Panics if `size` is 0 or if `size * size` exceeds `usize::MAX`.
    pub fn new(size: usize) -> Self {
        match Self::try_new(size) {
            Some(dim) => dim,
            None if size == 0 => panic!("BoardDimensions must be nonzero, got {}", size),
            None => panic!(
                "BoardDimensions too large: {} * {} > {}",
                size,
                size,
                usize::MAX
            ),
        }
    }

    /// Create new [`BoardDimensions`] with the given side length.
    /// Returns `None` if `size` is 0 or if `size * size` exceeds `usize::MAX`.
    pub fn try_new(size: usize) -> Option<Self> {
        if size == 0 {
            None
        } else {
            size.checked_mul(size).map(|_| Self { size })
        }
    }

    /// Get the side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells on the board.
    pub fn total_size(&self) -> usize {
        self.size * self.size
    }

    /// Whether the given [`Coordinate`] lies on the board.
    pub fn contains(&self, coord: &Coordinate) -> bool {
        coord.x < self.size && coord.y < self.size
    }

    /// Check if the given [`Coordinate`] is in bounds. If so, return it, otherwise
    /// return `None`.
    #[inline]
    pub fn check_bounds<B: Borrow<Coordinate>>(&self, coord: B) -> Option<B> {
        if self.contains(coord.borrow()) {
            Some(coord)
        } else {
            None
        }
    }

    /// Convert a coordinate to a linear index. Returns `None` if the coordinate is out
    /// of bounds.
    pub fn try_linearize(&self, coord: &Coordinate) -> Option<usize> {
        self.check_bounds(coord)
            .map(|coord| coord.x * self.size + coord.y)
    }

    /// Convert a linear index back into a [`Coordinate`].
    pub fn un_linearize(&self, idx: usize) -> Coordinate {
        Coordinate::new(idx / self.size, idx % self.size)
    }

    /// Iterate every coordinate on the board in column-major order: `x` ascending, then
    /// `y` ascending within each column.
    pub fn iter_coordinates(&self) -> impl Iterator<Item = Coordinate> {
        let size = self.size;
        (0..size).flat_map(move |x| (0..size).map(move |y| Coordinate::new(x, y)))
    }

    /// Get an iterator over rows of this board, for display. Each row is an iterator
    /// over the coordinates of that row.
    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = Coordinate>> {
        let size = self.size;
        (0..size).map(move |y| (0..size).map(move |x| Coordinate::new(x, y)))
    }
}

impl Default for BoardDimensions {
    /// The standard 15x15 board.
    fn default() -> Self {
        Self { size: BOARD_SIZE }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linearize_round_trips_corners() {
        let dim = BoardDimensions::default();
        for &c in &[
            Coordinate::new(0, 0),
            Coordinate::new(14, 0),
            Coordinate::new(0, 14),
            Coordinate::new(14, 14),
        ] {
            let idx = dim.try_linearize(&c).unwrap();
            assert_eq!(dim.un_linearize(idx), c);
        }
        assert_eq!(dim.try_linearize(&Coordinate::new(15, 0)), None);
        assert_eq!(dim.try_linearize(&Coordinate::new(0, 15)), None);
    }

    #[test]
    fn iterates_column_major() {
        let dim = BoardDimensions::new(3);
        let coords: Vec<_> = dim.iter_coordinates().take(4).collect();
        assert_eq!(
            coords,
            vec![
                Coordinate::new(0, 0),
                Coordinate::new(0, 1),
                Coordinate::new(0, 2),
                Coordinate::new(1, 0),
            ]
        );
        assert_eq!(dim.iter_coordinates().count(), 9);
    }

    #[test]
    fn rejects_empty_board() {
        assert_eq!(BoardDimensions::try_new(0), None);
        assert_eq!(BoardDimensions::try_new(15), Some(BoardDimensions::default()));
    }
}
