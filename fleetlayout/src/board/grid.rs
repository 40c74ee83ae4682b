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
//! The occupancy grid: an ephemeral projection of a ship list onto the board.
//!
//! A grid is rebuilt from the committed ships on every edit and thrown away when the
//! edit finishes. Nothing stores it.

use std::{borrow::Borrow, mem, ops::Index};

use enumflags2::BitFlags;

use crate::{
    board::{BoardDimensions, BoundsError, Coordinate, Diagonal},
    ships::Ship,
};

/// Boolean matrix marking which cells of the board are occupied by a ship.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct OccupancyGrid {
    /// Dimensions of this board.
    dim: BoardDimensions,
    /// Cells that make up this board, linearized column-major.
    cells: Box<[bool]>,
}

impl OccupancyGrid {
    /// Construct an empty grid with the given dimensions.
    pub fn new(dim: BoardDimensions) -> Self {
        Self {
            dim,
            cells: vec![false; dim.total_size()].into_boxed_slice(),
        }
    }

    /// Rehydrate a grid by marking every cell of every ship. Overlapping ships simply
    /// mark the shared cell once. Fails if any ship has a cell off the board.
    pub fn from_ships<'a, I>(dim: BoardDimensions, ships: I) -> Result<Self, BoundsError>
    where
        I: IntoIterator<Item = &'a Ship>,
    {
        let mut grid = Self::new(dim);
        for ship in ships {
            for coord in ship.iter() {
                grid.set(*coord, true)?;
            }
        }
        Ok(grid)
    }

    /// Get the [`BoardDimensions`] of this grid.
    pub fn dimensions(&self) -> &BoardDimensions {
        &self.dim
    }

    /// Get the occupancy of the cell at the given [`Coordinate`], or `None` if it is
    /// out of bounds.
    pub fn get<B: Borrow<Coordinate>>(&self, coord: B) -> Option<bool> {
        self.dim
            .try_linearize(coord.borrow())
            .and_then(|i| self.cells.get(i))
            .copied()
    }

    /// Returns true if the cell is on the board and occupied.
    pub fn is_occupied<B: Borrow<Coordinate>>(&self, coord: B) -> bool {
        self.get(coord).unwrap_or(false)
    }

    /// Set the occupancy of a cell.
    pub fn set(&mut self, coord: Coordinate, occupied: bool) -> Result<(), BoundsError> {
        let idx = self.linearize(coord)?;
        self.cells[idx] = occupied;
        Ok(())
    }

    /// Clear a cell, returning whether it was occupied. Cells off the board read as
    /// empty.
    pub fn take<B: Borrow<Coordinate>>(&mut self, coord: B) -> bool {
        match self.dim.try_linearize(coord.borrow()) {
            Some(i) => mem::replace(&mut self.cells[i], false),
            None => false,
        }
    }

    /// Flip a single cell between occupied and empty. Returns the new occupancy.
    pub fn toggle(&mut self, coord: Coordinate) -> Result<bool, BoundsError> {
        let idx = self.linearize(coord)?;
        let cell = &mut self.cells[idx];
        *cell = !*cell;
        Ok(*cell)
    }

    /// The set of diagonal neighbors of `coord` which are occupied. Neighbors off the
    /// board are never included.
    pub fn diagonal_contacts(&self, coord: Coordinate) -> BitFlags<Diagonal> {
        let mut contacts = BitFlags::empty();
        for &diagonal in Diagonal::ALL.iter() {
            if diagonal
                .neighbor_of(coord)
                .map_or(false, |n| self.is_occupied(n))
            {
                contacts.insert(diagonal);
            }
        }
        contacts
    }

    /// Iterate the occupied cells in column-major order.
    pub fn occupied(&self) -> impl '_ + Iterator<Item = Coordinate> {
        let dim = self.dim;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, occupied)| **occupied)
            .map(move |(i, _)| dim.un_linearize(i))
    }

    /// Number of occupied cells.
    pub fn count_occupied(&self) -> usize {
        self.cells.iter().filter(|&&occupied| occupied).count()
    }

    fn linearize(&self, coord: Coordinate) -> Result<usize, BoundsError> {
        self.dim
            .try_linearize(&coord)
            .ok_or_else(|| BoundsError::new(coord, self.dim.size()))
    }
}

impl Default for OccupancyGrid {
    /// An empty standard-size grid.
    fn default() -> Self {
        Self::new(BoardDimensions::default())
    }
}

impl<B: Borrow<Coordinate>> Index<B> for OccupancyGrid {
    type Output = bool;

    fn index(&self, coord: B) -> &Self::Output {
        let coord = coord.borrow();
        match self.dim.try_linearize(coord) {
            Some(i) => &self.cells[i],
            None => panic!("{:?} is out of bounds for {:?}", coord, self.dim),
        }
    }
}
