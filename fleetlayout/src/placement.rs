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
//! The placement pipeline: toggle a cell, check adjacency, extract ships, check the
//! fleet rules.
//!
//! Every step is a pure function of its input. The grid is rebuilt from the committed
//! ship list on each call and dropped afterwards.

use log::debug;

use crate::{
    board::{BoardDimensions, BoundsError, Coordinate, OccupancyGrid},
    rules::FleetRules,
    ships::Ship,
};

pub use self::errors::{EditError, Rejection};

pub mod adjacency;
mod errors;
pub mod extract;
#[cfg(feature = "rng_gen")]
pub mod random;

/// Project the ships onto a fresh standard board and flip the cell at `coord`. Performs
/// no validation beyond bounds checks.
pub fn toggle(ships: &[Ship], coord: Coordinate) -> Result<OccupancyGrid, BoundsError> {
    let mut grid = OccupancyGrid::from_ships(BoardDimensions::default(), ships)?;
    grid.toggle(coord)?;
    Ok(grid)
}

/// Run a candidate grid through the adjacency check, extraction and the fleet rules.
/// Returns the extracted ships if all of them pass.
pub fn validate_grid(grid: OccupancyGrid, rules: &FleetRules) -> Result<Vec<Ship>, Rejection> {
    let checked = adjacency::check(grid)?;
    let ships = extract::extract(checked);
    rules.check(&ships)?;
    Ok(ships)
}

/// Normalize an arbitrary ship list through the pipeline without toggling anything.
/// Ships which touch end-to-end come back merged, so the result may have fewer ships
/// than the input.
pub fn validate_layout(ships: &[Ship], rules: &FleetRules) -> Result<Vec<Ship>, EditError> {
    let grid = OccupancyGrid::from_ships(BoardDimensions::default(), ships)?;
    Ok(validate_grid(grid, rules)?)
}

/// Toggle the cell at `coord` in the current layout and validate the result.
///
/// On success returns the complete new ship list, which should replace the committed
/// one. On failure the caller keeps its committed layout unchanged; nothing here
/// mutates `ships`.
pub fn attempt_edit(
    ships: &[Ship],
    coord: Coordinate,
    rules: &FleetRules,
) -> Result<Vec<Ship>, EditError> {
    let grid = toggle(ships, coord)?;
    let ships = validate_grid(grid, rules)?;
    debug!("edit at {:?} produces {} ships", coord, ships.len());
    Ok(ships)
}
