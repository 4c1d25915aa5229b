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
//! Errors used by the [`BoardTracker`][crate::board::BoardTracker].

use std::fmt::{self, Debug};

use thiserror::Error;

use crate::{board::Coordinate, ships::Ship};

/// Error returned when a board is requested with a zero or negative width or height.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("board dimensions out of range: {width}x{height}, both must be positive")]
pub struct DimensionsError {
    width: i32,
    height: i32,
}

impl DimensionsError {
    pub(super) fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// The width that was rejected.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// The height that was rejected.
    pub fn height(&self) -> i32 {
        self.height
    }
}

/// Reason why a ship could not be added to the board.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// The ship did not occupy any cell.
    #[error("Ship coordinates cannot be null or empty.")]
    EmptyShip,
    /// One of the ship's cells was outside the board.
    #[error("ship is out of the board boundaries")]
    OutOfBoundaries,
    /// One of the ship's cells was already occupied by another ship.
    #[error("ship overlaps with an existing ship")]
    Overlap,
}

impl CannotPlaceReason {
    /// Returns true if the ship itself was malformed rather than breaking a placement rule.
    pub fn is_invalid_argument(self) -> bool {
        self == CannotPlaceReason::EmptyShip
    }
}

/// Error caused when attempting to add a ship in an invalid position. Hands back the ship
/// that was rejected.
#[derive(Error)]
#[error("could not place ship: {reason}")]
pub struct PlaceError {
    #[source]
    reason: CannotPlaceReason,
    coord: Option<Coordinate>,
    ship: Ship,
}

impl Debug for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.coord {
            Some(coord) => write!(f, "{} at {:?}", self, coord),
            None => fmt::Display::fmt(self, f),
        }
    }
}

impl PlaceError {
    /// Construct a placement error from a reason, the offending cell and the ship.
    pub(super) fn new(reason: CannotPlaceReason, coord: Option<Coordinate>, ship: Ship) -> Self {
        Self {
            reason,
            coord,
            ship,
        }
    }

    /// Get the reason placement was aborted.
    pub fn reason(&self) -> CannotPlaceReason {
        self.reason
    }

    /// Get the first cell that broke a placement rule. `None` if the ship was empty.
    pub fn coord(&self) -> Option<Coordinate> {
        self.coord
    }

    /// Get a reference to the [`Ship`] that was rejected.
    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    /// Extract the rejected [`Ship`] from this error.
    pub fn into_ship(self) -> Ship {
        self.ship
    }
}

impl From<PlaceError> for Ship {
    /// Allows retrieving the rejected ship from the error with into.
    fn from(err: PlaceError) -> Self {
        err.into_ship()
    }
}
