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
/// The coordinates of a cell on the board.
///
/// Coordinates order column-major: by `x` first, then by `y`. This is the same order
/// the extractor scans the board in.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Coordinate {
    /// Horizontal position of the cell.
    pub x: usize,
    /// Vertical position of the cell.
    pub y: usize,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `x` and `y`.
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Shift this coordinate by the given deltas. Returns `None` if either component
    /// would go below zero. Does not check the upper bounds of any board.
    pub fn offset(self, dx: isize, dy: isize) -> Option<Self> {
        Some(Self {
            x: shift(self.x, dx)?,
            y: shift(self.y, dy)?,
        })
    }

    /// The cell directly to the right of this one.
    pub fn right(self) -> Self {
        Self::new(self.x + 1, self.y)
    }

    /// The cell directly below this one.
    pub fn down(self) -> Self {
        Self::new(self.x, self.y + 1)
    }
}

fn shift(v: usize, d: isize) -> Option<usize> {
    if d < 0 {
        v.checked_sub(d.unsigned_abs())
    } else {
        v.checked_add(d as usize)
    }
}

impl From<(usize, usize)> for Coordinate {
    /// Construct a [`Coordinate`] from the given `(x, y)` pair.
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}

impl From<Coordinate> for (usize, usize) {
    /// Convert the [`Coordinate`] into an `(x, y)` pair.
    fn from(coord: Coordinate) -> Self {
        (coord.x, coord.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_stops_at_zero() {
        let c = Coordinate::new(0, 3);
        assert_eq!(c.offset(-1, 0), None);
        assert_eq!(c.offset(1, -1), Some(Coordinate::new(1, 2)));
        assert_eq!(c.offset(0, -4), None);
    }

    #[test]
    fn orders_column_major() {
        let mut coords = vec![
            Coordinate::new(1, 0),
            Coordinate::new(0, 2),
            Coordinate::new(0, 1),
        ];
        coords.sort();
        assert_eq!(
            coords,
            vec![
                Coordinate::new(0, 1),
                Coordinate::new(0, 2),
                Coordinate::new(1, 0),
            ]
        );
    }
}
