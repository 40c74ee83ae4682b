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
//! Errors produced by the placement pipeline.

use enumflags2::BitFlags;
use thiserror::Error;

use crate::board::{BoundsError, Coordinate, Diagonal};

/// Gameplay reason an edit was discarded. Every kind has the same effect: the
/// previously committed layout stays as it was.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum Rejection {
    /// Two ships touch corner-to-corner.
    #[error("ships touch diagonally at {coord:?} toward {}", contact_names(.contacts))]
    IllegalAdjacency {
        /// First occupied cell in scan order with an occupied diagonal neighbor.
        coord: Coordinate,
        /// Which diagonal neighbors of `coord` are occupied.
        contacts: BitFlags<Diagonal>,
    },
    /// A straight run is longer than the longest allowed ship.
    #[error("ship of length {len} exceeds the maximum length of {max}")]
    OversizedShip { len: usize, max: usize },
    /// More ships of one length than the rules permit.
    #[error("{count} ships of length {len} exceed the limit of {max}")]
    FleetLimitExceeded {
        len: usize,
        count: usize,
        max: usize,
    },
}

fn contact_names(contacts: &BitFlags<Diagonal>) -> String {
    Diagonal::in_set(*contacts)
        .map(|d| format!("{:?}", d))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Error returned by [`attempt_edit`][crate::placement::attempt_edit].
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum EditError {
    /// The edit broke a placement rule and was discarded.
    #[error("edit rejected: {0}")]
    Rejected(#[from] Rejection),
    /// The caller passed a coordinate off the board, or the committed layout contains
    /// one. This is a contract violation rather than a gameplay outcome.
    #[error(transparent)]
    OutOfBounds(#[from] BoundsError),
}

impl EditError {
    /// Get the gameplay rejection, if this is one.
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            EditError::Rejected(rejection) => Some(rejection),
            EditError::OutOfBounds(_) => None,
        }
    }

    /// Returns true if the edit was refused by a placement rule rather than bad input.
    pub fn is_rejection(&self) -> bool {
        self.rejection().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacency_message_lists_contacts_clockwise() {
        let rejection = Rejection::IllegalAdjacency {
            coord: Coordinate::new(4, 7),
            contacts: Diagonal::DownLeft | Diagonal::UpLeft,
        };
        assert_eq!(
            rejection.to_string(),
            "ships touch diagonally at Coordinate { x: 4, y: 7 } toward UpLeft, DownLeft",
        );
    }
}
