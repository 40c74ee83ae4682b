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
//! Errors used by the board types.

use thiserror::Error;

use crate::board::Coordinate;

/// Error returned when a coordinate falls outside the board. This is a contract
/// violation by the caller, not a gameplay rule failure.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("coordinate {coord:?} is out of bounds for a {size}x{size} board")]
pub struct BoundsError {
    /// The offending coordinate.
    coord: Coordinate,

    /// Side length of the board the coordinate was checked against.
    size: usize,
}

impl BoundsError {
    /// Construct a bounds error for the given coordinate and board size.
    pub(crate) fn new(coord: Coordinate, size: usize) -> Self {
        Self { coord, size }
    }

    /// Get the coordinate that was out of bounds.
    pub fn coord(&self) -> &Coordinate {
        &self.coord
    }

    /// Get the side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }
}
