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
//! Rejects grids where ships touch corner-to-corner.
//!
//! Orthogonal neighbors are how multi-cell ships are represented, so only diagonal
//! contact is illegal. Passing this check is also what makes extraction unambiguous:
//! any L-shape or branch has two cells touching diagonally, so every connected group of
//! occupied cells in a checked grid is a straight line.

use log::trace;

use crate::{board::OccupancyGrid, placement::Rejection};

/// An [`OccupancyGrid`] that has passed the adjacency check. The only way to build one
/// is [`check`], so holding one proves the check ran.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CheckedGrid(OccupancyGrid);

impl CheckedGrid {
    /// Get the underlying grid.
    pub fn grid(&self) -> &OccupancyGrid {
        &self.0
    }

    /// Extract the underlying grid.
    pub fn into_inner(self) -> OccupancyGrid {
        self.0
    }
}

/// Check the grid for diagonally touching cells. Cells are visited in column-major
/// order and the first offending cell is reported.
pub fn check(grid: OccupancyGrid) -> Result<CheckedGrid, Rejection> {
    for coord in grid.occupied() {
        let contacts = grid.diagonal_contacts(coord);
        if !contacts.is_empty() {
            trace!("diagonal contact at {:?}: {:?}", coord, contacts);
            return Err(Rejection::IllegalAdjacency { coord, contacts });
        }
    }
    Ok(CheckedGrid(grid))
}

/// Returns true if any occupied cell has an occupied diagonal neighbor.
pub fn has_illegal_adjacency(grid: &OccupancyGrid) -> bool {
    grid.occupied()
        .any(|coord| !grid.diagonal_contacts(coord).is_empty())
}
