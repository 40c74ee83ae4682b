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
//! Fleet layout validation for a grid-based naval combat game.
//!
//! A player edits their fleet one cell at a time. Every edit rebuilds an
//! [`OccupancyGrid`] from the committed ships, flips one cell, and runs the result
//! through the placement pipeline:
//!
//! 1. [`placement::toggle`] projects the ships onto a fresh grid and flips the cell.
//! 2. [`placement::adjacency::check`] rejects ships that touch corner-to-corner.
//! 3. [`placement::extract::extract`] groups the occupied cells into straight [`Ship`]s.
//! 4. [`FleetRules::check`] enforces the maximum length and the per-length caps.
//!
//! Only when every step passes is the new ship list handed back for committing. The
//! [`editor`] module wraps the pipeline in an editing session that respects the
//! player's ready flag and leaves the committed layout untouched on rejection.

pub use self::{
    board::{
        BoardDimensions, BoundsError, Coordinate, Diagonal, OccupancyGrid, BOARD_SIZE,
    },
    editor::{EditOutcome, FleetStore, LayoutEditor, PlayerLayout},
    placement::{attempt_edit, validate_grid, validate_layout, EditError, Rejection},
    rules::{FleetRules, RulesError, MAX_SHIP_LEN},
    ships::{Orientation, Ship, ShipError},
};

pub mod board;
pub mod editor;
pub mod placement;
pub mod rules;
pub mod ships;
