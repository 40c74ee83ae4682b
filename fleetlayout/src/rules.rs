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
//! Fleet composition rules: the longest allowed ship and how many ships of each
//! length a player may place.
use std::collections::BTreeMap;

use thiserror::Error;

use crate::{
    board::BoardDimensions,
    placement::Rejection,
    ships::Ship,
};

/// Longest ship any fleet may contain.
pub const MAX_SHIP_LEN: usize = 4;

/// The standard composition table as `(length, max count)` pairs.
const STANDARD_LIMITS: [(usize, usize); 4] = [(4, 2), (3, 4), (2, 6), (1, 8)];

/// Reason a composition table could not be built.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum RulesError {
    /// A limit was given for a length outside `1..=MAX_SHIP_LEN`.
    #[error("ship length {0} is outside the allowed range 1..={}", MAX_SHIP_LEN)]
    InvalidLength(usize),
    /// The same length was given more than once.
    #[error("ship length {0} was given more than once")]
    DuplicateLength(usize),
    /// A full fleet would need more cells than the board has. `cells` saturates at
    /// `usize::MAX`.
    #[error("a full fleet needs {cells} cells but the board only has {capacity}")]
    ExceedsCapacity { cells: usize, capacity: usize },
}

/// Immutable table mapping ship length to the maximum number of ships of that length.
///
/// Lengths missing from the table may not be placed at all.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FleetRules {
    limits: BTreeMap<usize, usize>,
}

impl FleetRules {
    /// Build a composition table from `(length, max count)` pairs. Every length must be
    /// in `1..=MAX_SHIP_LEN`, appear once, and a complete fleet must fit within the
    /// standard board.
    pub fn new<I>(limits: I) -> Result<Self, RulesError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut table = BTreeMap::new();
        for (len, max) in limits {
            if len == 0 || len > MAX_SHIP_LEN {
                return Err(RulesError::InvalidLength(len));
            }
            if table.insert(len, max).is_some() {
                return Err(RulesError::DuplicateLength(len));
            }
        }
        let rules = Self { limits: table };
        let capacity = BoardDimensions::default().total_size();
        // A table whose cell count overflows certainly exceeds the board.
        let cells = rules.checked_total_cells().unwrap_or(usize::MAX);
        if cells > capacity {
            return Err(RulesError::ExceedsCapacity { cells, capacity });
        }
        Ok(rules)
    }

    /// The standard table: two ships of length 4, four of length 3, six of length 2 and
    /// eight of length 1.
    pub fn standard() -> Self {
        Self {
            limits: STANDARD_LIMITS.iter().copied().collect(),
        }
    }

    /// Return a copy of these rules with the limit for `len` replaced.
    pub fn with_limit(&self, len: usize, max: usize) -> Result<Self, RulesError> {
        let mut limits = self.limits.clone();
        limits.insert(len, max);
        Self::new(limits)
    }

    /// Maximum number of ships of the given length. Zero for lengths not in the table.
    pub fn limit(&self, len: usize) -> usize {
        self.limits.get(&len).copied().unwrap_or(0)
    }

    /// Iterate the `(length, max count)` pairs, shortest first.
    pub fn iter(&self) -> impl '_ + Iterator<Item = (usize, usize)> {
        self.limits.iter().map(|(&len, &max)| (len, max))
    }

    /// The longest ship any table allows, [`MAX_SHIP_LEN`]. Tables may leave some
    /// shorter lengths without an allowance, but never permit longer ones.
    pub fn max_len(&self) -> usize {
        MAX_SHIP_LEN
    }

    /// Number of cells covered by a complete fleet. Built tables always fit the board,
    /// so this never overflows.
    pub fn total_cells(&self) -> usize {
        self.checked_total_cells().unwrap_or(usize::MAX)
    }

    fn checked_total_cells(&self) -> Option<usize> {
        self.iter()
            .try_fold(0usize, |acc, (len, max)| acc.checked_add(len.checked_mul(max)?))
    }

    /// Count the ships of each length.
    pub fn tally(ships: &[Ship]) -> BTreeMap<usize, usize> {
        let mut counts = BTreeMap::new();
        for ship in ships {
            *counts.entry(ship.len()).or_insert(0) += 1;
        }
        counts
    }

    /// Check the ships against these rules. Fewer ships than the limit is fine; partial
    /// fleets are legal while editing.
    pub fn check(&self, ships: &[Ship]) -> Result<(), Rejection> {
        if let Some(ship) = ships.iter().find(|ship| ship.len() > self.max_len()) {
            return Err(Rejection::OversizedShip {
                len: ship.len(),
                max: self.max_len(),
            });
        }
        for (len, count) in Self::tally(ships) {
            let max = self.limit(len);
            if count > max {
                return Err(Rejection::FleetLimitExceeded { len, count, max });
            }
        }
        Ok(())
    }

    /// Returns true if the ships satisfy these rules.
    pub fn allows(&self, ships: &[Ship]) -> bool {
        self.check(ships).is_ok()
    }

    /// How many more ships of each length may still be placed.
    pub fn remaining(&self, ships: &[Ship]) -> BTreeMap<usize, usize> {
        let counts = Self::tally(ships);
        self.iter()
            .map(|(len, max)| {
                let placed = counts.get(&len).copied().unwrap_or(0);
                (len, max.saturating_sub(placed))
            })
            .collect()
    }

    /// Returns true if every limit is reached exactly and no other ships are present.
    pub fn is_complete(&self, ships: &[Ship]) -> bool {
        let counts = Self::tally(ships);
        counts.keys().all(|len| self.limits.contains_key(len))
            && self
                .iter()
                .all(|(len, max)| counts.get(&len).copied().unwrap_or(0) == max)
    }
}

impl Default for FleetRules {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{board::Coordinate, ships::Orientation};

    fn horizontal(x: usize, y: usize, len: usize) -> Ship {
        Ship::line(Coordinate::new(x, y), Orientation::Horizontal, len)
    }

    #[test]
    fn longest_ship_stays_fixed_for_sparse_tables() {
        let rules = FleetRules::new(vec![(1, 2)]).unwrap();
        assert_eq!(rules.max_len(), MAX_SHIP_LEN);
        assert_eq!(
            rules.check(&[horizontal(0, 0, 4)]),
            Err(Rejection::FleetLimitExceeded {
                len: 4,
                count: 1,
                max: 0,
            })
        );
    }

    #[test]
    fn standard_table() {
        let rules = FleetRules::standard();
        assert_eq!(rules.limit(4), 2);
        assert_eq!(rules.limit(3), 4);
        assert_eq!(rules.limit(2), 6);
        assert_eq!(rules.limit(1), 8);
        assert_eq!(rules.limit(5), 0);
        assert_eq!(rules.total_cells(), 40);
        assert_eq!(rules, FleetRules::new(STANDARD_LIMITS.iter().copied()).unwrap());
    }

    #[test]
    fn partial_fleet_is_allowed() {
        let rules = FleetRules::standard();
        let ships = vec![horizontal(0, 0, 4), horizontal(0, 2, 1)];
        assert_eq!(rules.check(&ships), Ok(()));
        assert!(!rules.is_complete(&ships));
        let remaining = rules.remaining(&ships);
        assert_eq!(remaining[&4], 1);
        assert_eq!(remaining[&1], 7);
        assert_eq!(remaining[&3], 4);
    }

    #[test]
    fn rejects_oversized_before_counting() {
        let rules = FleetRules::standard();
        let ships = vec![horizontal(0, 0, 5)];
        assert_eq!(
            rules.check(&ships),
            Err(Rejection::OversizedShip { len: 5, max: 4 })
        );
    }

    #[test]
    fn rejects_too_many_of_a_length() {
        let rules = FleetRules::standard();
        let ships: Vec<_> = (0..3).map(|i| horizontal(0, i * 2, 4)).collect();
        assert_eq!(
            rules.check(&ships),
            Err(Rejection::FleetLimitExceeded {
                len: 4,
                count: 3,
                max: 2
            })
        );
    }

    #[test]
    fn missing_lengths_have_no_allowance() {
        let rules = FleetRules::new(vec![(1, 2)]).unwrap();
        assert_eq!(
            rules.check(&[horizontal(0, 0, 2)]),
            Err(Rejection::FleetLimitExceeded {
                len: 2,
                count: 1,
                max: 0
            })
        );
    }

    #[test]
    fn complete_fleet() {
        let rules = FleetRules::new(vec![(2, 1), (1, 2)]).unwrap();
        let ships = vec![horizontal(0, 0, 2), horizontal(0, 2, 1), horizontal(2, 2, 1)];
        assert!(rules.is_complete(&ships));
        assert!(!rules.is_complete(&ships[..2]));
    }

    #[test]
    fn validates_table() {
        assert_eq!(
            FleetRules::new(vec![(0, 1)]),
            Err(RulesError::InvalidLength(0))
        );
        assert_eq!(
            FleetRules::new(vec![(5, 1)]),
            Err(RulesError::InvalidLength(5))
        );
        assert_eq!(
            FleetRules::new(vec![(2, 1), (2, 3)]),
            Err(RulesError::DuplicateLength(2))
        );
        assert_eq!(
            FleetRules::new(vec![(1, 226)]),
            Err(RulesError::ExceedsCapacity {
                cells: 226,
                capacity: 225
            })
        );
        assert_eq!(
            FleetRules::standard().with_limit(1, 2).unwrap().limit(1),
            2
        );
    }

    #[test]
    fn overflowing_tables_exceed_capacity() {
        let capacity = BoardDimensions::default().total_size();
        assert_eq!(
            FleetRules::standard().with_limit(1, usize::MAX),
            Err(RulesError::ExceedsCapacity {
                cells: usize::MAX,
                capacity
            })
        );
        assert_eq!(
            FleetRules::new(vec![(4, usize::MAX / 2)]),
            Err(RulesError::ExceedsCapacity {
                cells: usize::MAX,
                capacity
            })
        );
        assert_eq!(
            FleetRules::new(vec![(2, usize::MAX / 2), (1, usize::MAX / 2)]),
            Err(RulesError::ExceedsCapacity {
                cells: usize::MAX,
                capacity
            })
        );
    }
}
