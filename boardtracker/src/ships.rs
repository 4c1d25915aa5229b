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
//! Types used for defining ships and their shapes.
use std::{collections::HashSet, iter::FromIterator};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::Coordinate;

pub use self::{
    errors::ShapeError,
    linear::{Line, Orientation},
};
#[cfg(feature = "rng_gen")]
pub use self::random::{place_random, RandomPlaceError, MAX_PLACEMENT_ATTEMPTS};

mod errors;
mod linear;
#[cfg(feature = "rng_gen")]
mod random;

/// Lengths of the classic five-ship fleet: carrier, battleship, cruiser, submarine and
/// destroyer.
pub const STANDARD_FLEET: [i32; 5] = [5, 4, 3, 3, 2];

/// Trait for compact descriptions of a ship that can be expanded into the cells it covers.
pub trait ShipShape {
    /// Expand this shape into a [`Ship`] with no hits. Does not check the cells against
    /// any board; that happens when the ship is added to a tracker.
    fn build(&self) -> Result<Ship, ShapeError>;
}

/// How damaged a single ship is. Only ever moves forward, and `Destroyed` is final.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShipStatus {
    /// None of the ship's cells have been hit.
    Intact,
    /// Some but not all of the ship's cells have been hit.
    PartiallyHit,
    /// Every cell of the ship has been hit.
    Destroyed,
}

/// A ship: the cells it occupies and the subset of those that have been hit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ship {
    /// Cells covered by the ship.
    occupied: HashSet<Coordinate>,
    /// Cells of the ship that have been hit.
    hit: HashSet<Coordinate>,
}

impl Ship {
    /// Construct a ship that occupies no cells. Such a ship cannot be added to a board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add hits to this ship, for example when restoring a board from storage.
    ///
    /// Hits are expected to be a subset of the occupied cells, but this is not checked.
    pub fn with_hits<I: IntoIterator<Item = Coordinate>>(mut self, hits: I) -> Self {
        self.hit.extend(hits);
        self
    }

    /// Cells covered by the ship.
    pub fn occupied(&self) -> &HashSet<Coordinate> {
        &self.occupied
    }

    /// Cells of the ship that have been hit.
    pub fn hit(&self) -> &HashSet<Coordinate> {
        &self.hit
    }

    /// Number of cells the ship occupies.
    pub fn len(&self) -> usize {
        self.occupied.len()
    }

    /// Returns true if the ship occupies no cells.
    pub fn is_empty(&self) -> bool {
        self.occupied.is_empty()
    }

    /// Whether the ship covers the given cell.
    pub fn occupies(&self, coord: &Coordinate) -> bool {
        self.occupied.contains(coord)
    }

    /// Whether the given cell of this ship has been hit.
    pub fn is_hit(&self, coord: &Coordinate) -> bool {
        self.hit.contains(coord)
    }

    /// Check if this ship has been destroyed, meaning it has as many hits as cells.
    pub fn destroyed(&self) -> bool {
        self.occupied.len() == self.hit.len()
    }

    /// Get the damage status of this ship.
    pub fn status(&self) -> ShipStatus {
        if self.destroyed() {
            ShipStatus::Destroyed
        } else if self.hit.is_empty() {
            ShipStatus::Intact
        } else {
            ShipStatus::PartiallyHit
        }
    }

    /// Record a hit on the given cell. Returns true if the cell had not been hit before.
    pub(crate) fn record_hit(&mut self, coord: Coordinate) -> bool {
        self.hit.insert(coord)
    }

    /// The occupied cells in ascending `(column, row)` order.
    pub(crate) fn sorted_coords(&self) -> Vec<Coordinate> {
        let mut coords: Vec<_> = self.occupied.iter().copied().collect();
        coords.sort_unstable();
        coords
    }
}

impl FromIterator<Coordinate> for Ship {
    /// Build a ship with no hits from the cells it occupies.
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        Self {
            occupied: iter.into_iter().collect(),
            hit: HashSet::new(),
        }
    }
}
