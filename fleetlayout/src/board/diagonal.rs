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
//! The four diagonal directions around a cell.
use enumflags2::BitFlags;

use crate::board::Coordinate;

/// A diagonal direction from a cell. Used as a flag set to record which diagonal
/// neighbors of a cell are occupied.
#[derive(BitFlags, Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u8)]
pub enum Diagonal {
    /// Toward `(x - 1, y - 1)`.
    UpLeft = 0b0001,
    /// Toward `(x + 1, y - 1)`.
    UpRight = 0b0010,
    /// Toward `(x + 1, y + 1)`.
    DownRight = 0b0100,
    /// Toward `(x - 1, y + 1)`.
    DownLeft = 0b1000,
}

impl Diagonal {
    /// All four diagonals, clockwise from the upper left.
    pub const ALL: [Diagonal; 4] = [
        Diagonal::UpLeft,
        Diagonal::UpRight,
        Diagonal::DownRight,
        Diagonal::DownLeft,
    ];

    /// The `(dx, dy)` step toward this diagonal.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Diagonal::UpLeft => (-1, -1),
            Diagonal::UpRight => (1, -1),
            Diagonal::DownRight => (1, 1),
            Diagonal::DownLeft => (-1, 1),
        }
    }

    /// The neighbor of `coord` in this direction, if it doesn't fall below zero.
    pub fn neighbor_of(self, coord: Coordinate) -> Option<Coordinate> {
        let (dx, dy) = self.delta();
        coord.offset(dx, dy)
    }

    /// Get the diagonals contained in the given flag set, in clockwise order.
    pub fn in_set(flags: BitFlags<Diagonal>) -> impl Iterator<Item = Diagonal> {
        let all: &'static [Diagonal; 4] = &Self::ALL;
        all.iter().copied().filter(move |d| flags.contains(*d))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_corner_has_one_neighbor() {
        let origin = Coordinate::new(0, 0);
        let found: Vec<_> = Diagonal::ALL
            .iter()
            .filter_map(|d| d.neighbor_of(origin))
            .collect();
        assert_eq!(found, vec![Coordinate::new(1, 1)]);
    }

    #[test]
    fn in_set_keeps_clockwise_order() {
        let flags = Diagonal::DownLeft | Diagonal::UpRight;
        let found: Vec<_> = Diagonal::in_set(flags).collect();
        assert_eq!(found, vec![Diagonal::UpRight, Diagonal::DownLeft]);
    }
}
