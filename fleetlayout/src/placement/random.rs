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
//! Random generation of legal fleets.
use log::debug;
use rand::Rng;

use crate::{
    board::{BoardDimensions, Coordinate},
    placement::validate_layout,
    rules::FleetRules,
    ships::{Orientation, Ship},
};

/// Number of random positions tried for each ship before giving up on it.
const ATTEMPTS_PER_SHIP: usize = 200;

/// Generate a random legal fleet, longest ships first, filling every per-length limit
/// where space allows. A ship that cannot be fit after a bounded number of attempts is
/// skipped, so the result is always legal but may be incomplete on crowded tables.
pub fn random_fleet<R: Rng + ?Sized>(rng: &mut R, rules: &FleetRules) -> Vec<Ship> {
    let dim = BoardDimensions::default();
    let mut fleet: Vec<Ship> = Vec::new();
    let mut lengths: Vec<_> = rules.iter().collect();
    lengths.reverse();
    for (len, max) in lengths {
        for _ in 0..max {
            match place_one(rng, &dim, rules, &fleet, len) {
                Some(next) => fleet = next,
                None => debug!("no room found for another ship of length {}", len),
            }
        }
    }
    fleet
}

/// Try random positions for a ship of length `len` until one fits alongside `fleet`,
/// then fall back to scanning every position in order. Returns the normalized fleet
/// including the new ship.
fn place_one<R: Rng + ?Sized>(
    rng: &mut R,
    dim: &BoardDimensions,
    rules: &FleetRules,
    fleet: &[Ship],
    len: usize,
) -> Option<Vec<Ship>> {
    for _ in 0..ATTEMPTS_PER_SHIP {
        let orientation: Orientation = rng.gen();
        let start = Coordinate::new(rng.gen_range(0, dim.size()), rng.gen_range(0, dim.size()));
        if let Some(next) = try_add(dim, rules, fleet, Ship::line(start, orientation, len)) {
            return Some(next);
        }
    }
    dim.iter_coordinates()
        .flat_map(|start| {
            [Orientation::Horizontal, Orientation::Vertical]
                .iter()
                .map(move |&orientation| Ship::line(start, orientation, len))
                .collect::<Vec<_>>()
        })
        .find_map(|ship| try_add(dim, rules, fleet, ship))
}

/// Add `ship` to `fleet` if the result is legal and the ship stays distinct from the
/// others.
fn try_add(
    dim: &BoardDimensions,
    rules: &FleetRules,
    fleet: &[Ship],
    ship: Ship,
) -> Option<Vec<Ship>> {
    if !ship.iter().all(|c| dim.contains(c)) {
        return None;
    }
    let mut candidate = fleet.to_vec();
    candidate.push(ship);
    let cells: usize = candidate.iter().map(|s| s.len()).sum();
    let normalized = validate_layout(&candidate, rules).ok()?;
    // Overlapping or end-to-end ships merge, which shows up as a change in the ship or
    // cell count.
    if normalized.len() == candidate.len()
        && normalized.iter().map(|s| s.len()).sum::<usize>() == cells
    {
        Some(normalized)
    } else {
        None
    }
}
