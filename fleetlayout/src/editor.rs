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
//! Editing sessions over a player's committed layout.
//!
//! The committed ship list lives in a [`FleetStore`] owned by the surrounding
//! application. A [`LayoutEditor`] reads it on every edit, runs the placement pipeline,
//! and writes back the whole new list only when the edit passes. Rejected edits leave
//! the store untouched and are only visible in the returned [`EditOutcome`] and the log.

use log::{debug, warn};

use crate::{
    board::{BoundsError, Coordinate},
    placement::{attempt_edit, EditError, Rejection},
    rules::FleetRules,
    ships::Ship,
};

/// Storage for one player's committed layout and ready flag.
pub trait FleetStore {
    /// The currently committed ships.
    fn ships(&self) -> &[Ship];

    /// Whether the player has declared their layout ready. Editing is locked while set.
    fn is_ready(&self) -> bool;

    /// Replace the committed ships in a single step.
    fn replace_ships(&mut self, ships: Vec<Ship>);
}

/// In-memory [`FleetStore`] for a single player.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct PlayerLayout {
    /// Committed ships.
    ships: Vec<Ship>,

    /// Whether the player is ready.
    ready: bool,
}

impl PlayerLayout {
    /// Construct an empty layout that is not ready.
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a layout with the given committed ships. The ships are trusted as-is.
    pub fn with_ships(ships: Vec<Ship>) -> Self {
        Self {
            ships,
            ready: false,
        }
    }

    /// Set or clear the ready flag.
    pub fn set_ready(&mut self, ready: bool) {
        self.ready = ready;
    }

    /// Extract the committed ships.
    pub fn into_ships(self) -> Vec<Ship> {
        self.ships
    }
}

impl FleetStore for PlayerLayout {
    fn ships(&self) -> &[Ship] {
        &self.ships
    }

    fn is_ready(&self) -> bool {
        self.ready
    }

    fn replace_ships(&mut self, ships: Vec<Ship>) {
        self.ships = ships;
    }
}

/// What happened to a requested edit.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum EditOutcome {
    /// The edit passed and the store now holds the new layout.
    Committed,
    /// The edit broke a placement rule. The store was not touched.
    Discarded(Rejection),
    /// The player is ready, so editing is disabled. The store was not touched.
    Locked,
}

impl EditOutcome {
    /// Returns true if the store was updated.
    pub fn committed(&self) -> bool {
        *self == EditOutcome::Committed
    }
}

/// Applies edits to a player's layout, one cell toggle at a time.
#[derive(Debug)]
pub struct LayoutEditor<S> {
    /// Where the committed layout lives.
    store: S,

    /// Composition rules every committed layout must satisfy.
    rules: FleetRules,
}

impl<S: FleetStore> LayoutEditor<S> {
    /// Start editing the layout held in `store` under the given rules.
    pub fn new(store: S, rules: FleetRules) -> Self {
        Self { store, rules }
    }

    /// Get the rules this editor enforces.
    pub fn rules(&self) -> &FleetRules {
        &self.rules
    }

    /// Get a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get a mutable reference to the underlying store, e.g. to change the ready flag.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Stop editing and return the store.
    pub fn into_inner(self) -> S {
        self.store
    }

    /// The committed ships.
    pub fn ships(&self) -> &[Ship] {
        self.store.ships()
    }

    /// Returns true if the committed layout fills every per-length limit exactly.
    pub fn is_complete(&self) -> bool {
        self.rules.is_complete(self.store.ships())
    }

    /// Toggle the cell at `coord` and commit the result if it is a legal layout.
    ///
    /// Gameplay rejections come back as [`EditOutcome::Discarded`] with the store
    /// untouched. Only a coordinate off the board, or a stored layout with cells off the
    /// board, is reported as an error.
    pub fn toggle(&mut self, coord: Coordinate) -> Result<EditOutcome, BoundsError> {
        if self.store.is_ready() {
            debug!("ignoring edit at {:?}: layout is marked ready", coord);
            return Ok(EditOutcome::Locked);
        }
        match attempt_edit(self.store.ships(), coord, &self.rules) {
            Ok(ships) => {
                debug!("committing layout of {} ships", ships.len());
                self.store.replace_ships(ships);
                Ok(EditOutcome::Committed)
            }
            Err(EditError::Rejected(rejection)) => {
                warn!("discarding edit at {:?}: {}", coord, rejection);
                Ok(EditOutcome::Discarded(rejection))
            }
            Err(EditError::OutOfBounds(err)) => Err(err),
        }
    }

    /// Remove every ship. An empty layout is always legal.
    pub fn clear(&mut self) -> EditOutcome {
        if self.store.is_ready() {
            return EditOutcome::Locked;
        }
        self.store.replace_ships(Vec::new());
        EditOutcome::Committed
    }

    /// Replace the layout with a randomly generated legal fleet.
    #[cfg(feature = "rng_gen")]
    pub fn randomize<R: rand::Rng + ?Sized>(&mut self, rng: &mut R) -> EditOutcome {
        if self.store.is_ready() {
            return EditOutcome::Locked;
        }
        let fleet = crate::placement::random::random_fleet(rng, &self.rules);
        debug!("committing random layout of {} ships", fleet.len());
        self.store.replace_ships(fleet);
        EditOutcome::Committed
    }
}
