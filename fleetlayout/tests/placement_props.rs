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
use std::collections::HashSet;

use fleetlayout::{
    attempt_edit, validate_layout, Coordinate, EditOutcome, FleetRules, LayoutEditor,
    OccupancyGrid, PlayerLayout, Ship,
};
use proptest::prelude::*;

/// Build a layout by attempting every toggle in order and keeping the ones that pass.
fn build_layout(cells: &[(usize, usize)], rules: &FleetRules) -> Vec<Ship> {
    let mut ships = Vec::new();
    for &(x, y) in cells {
        if let Ok(next) = attempt_edit(&ships, Coordinate::new(x, y), rules) {
            ships = next;
        }
    }
    ships
}

fn cells() -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0..15usize, 0..15usize), 0..120)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn double_toggle_restores_layout(cells in cells(), x in 0..15usize, y in 0..15usize) {
        let rules = FleetRules::standard();
        let start = build_layout(&cells, &rules);
        let coord = Coordinate::new(x, y);
        let once = attempt_edit(&start, coord, &rules).unwrap_or_else(|_| start.clone());
        let twice = attempt_edit(&once, coord, &rules).unwrap_or_else(|_| once.clone());
        prop_assert_eq!(twice, start);
    }

    #[test]
    fn rejected_edits_change_nothing(cells in cells(), x in 0..15usize, y in 0..15usize) {
        let rules = FleetRules::standard();
        let mut editor = LayoutEditor::new(
            PlayerLayout::with_ships(build_layout(&cells, &rules)),
            rules,
        );
        let before = editor.ships().to_vec();
        match editor.toggle(Coordinate::new(x, y)).unwrap() {
            EditOutcome::Committed => {
                prop_assert_ne!(editor.ships(), &before[..]);
            }
            _ => {
                prop_assert_eq!(editor.ships(), &before[..]);
            }
        }
    }

    #[test]
    fn committed_layouts_hold_invariants(cells in cells()) {
        let rules = FleetRules::standard();
        let ships = build_layout(&cells, &rules);

        let mut seen = HashSet::new();
        for ship in &ships {
            prop_assert!(ship.len() >= 1 && ship.len() <= 4);
            prop_assert!(Ship::from_coords(ship.to_vec()).is_ok());
            for coord in ship.iter() {
                prop_assert!(seen.insert(*coord), "cell {:?} shared by two ships", coord);
            }
        }
        prop_assert!(rules.allows(&ships));

        let grid = OccupancyGrid::from_ships(Default::default(), &ships).unwrap();
        for coord in grid.occupied() {
            prop_assert!(grid.diagonal_contacts(coord).is_empty());
        }
        prop_assert_eq!(validate_layout(&ships, &rules).unwrap(), ships);
    }
}
