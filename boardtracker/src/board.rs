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
//! Types that make up a single player's board and the tracker that enforces its rules.

use log::{debug, trace};
use thiserror::Error;

use crate::ships::Ship;

use self::grid::Grid;
pub use self::{
    common::Coordinate,
    dimensions::BoardDimensions,
    errors::{CannotPlaceReason, DimensionsError, PlaceError},
    state::BoardState,
};

pub mod common;
mod dimensions;
mod errors;
mod grid;
mod state;

/// Result of an attack on a single player's board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum AttackResult {
    /// The attack hit a cell occupied by a ship.
    Hit,
    /// The attack did not hit anything.
    Miss,
}

impl AttackResult {
    /// Returns true if the attack hit a ship.
    pub fn is_hit(self) -> bool {
        self == AttackResult::Hit
    }
}

/// Aggregate status of all ships on a board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BoardStatus {
    /// No ships have been added.
    Empty,
    /// At least one ship still has cells that were not hit.
    ShipsAvailable,
    /// Every cell of every ship has been hit.
    AllShipsDestroyed,
}

/// Operations every board tracker provides. Lets a caller swap in a different tracker
/// without changing how it places ships or fires at them.
pub trait StateTracker {
    /// Get the dimensions of the tracked board.
    fn dimensions(&self) -> BoardDimensions;

    /// Validate a ship and add it to the board. On failure the board is unchanged and the
    /// ship is handed back inside the error.
    fn add_ship(&mut self, ship: Ship) -> Result<(), PlaceError>;

    /// Fire at the given cell, recording a hit on whichever ship occupies it.
    fn take_attack(&mut self, position: Coordinate) -> AttackResult;

    /// Compute the current aggregate status of the board.
    fn board_status(&self) -> BoardStatus;
}

/// Error returned when rebuilding a [`BoardTracker`] from a [`BoardState`].
#[derive(Debug, Error)]
pub enum RestoreError {
    /// The stored dimensions were not valid.
    #[error(transparent)]
    Dimensions(#[from] DimensionsError),
    /// One of the stored ships broke a placement rule.
    #[error(transparent)]
    Place(#[from] PlaceError),
}

/// Tracks the ships on a single player's board and resolves attacks against them.
#[derive(Debug, Clone)]
pub struct BoardTracker {
    /// Dimensions and ships of the board.
    state: BoardState,

    /// Lookup from occupied cells to indexes in `state.ships`.
    grid: Grid,
}

impl BoardTracker {
    /// Create a tracker for an empty board of the given size. Fails if either `width` or
    /// `height` is zero or negative.
    pub fn new(width: i32, height: i32) -> Result<Self, DimensionsError> {
        BoardDimensions::new(width, height).map(Self::with_dimensions)
    }

    /// Create a tracker for an empty board with already validated dimensions.
    pub fn with_dimensions(dimensions: BoardDimensions) -> Self {
        Self {
            state: BoardState::new(dimensions),
            grid: Grid::new(),
        }
    }

    /// Rebuild a tracker from a previously extracted [`BoardState`]. Every ship goes
    /// through the same checks as [`add_ship`][Self::add_ship], in order, so the result
    /// upholds the same invariants as a tracker built one ship at a time. Hits already
    /// recorded on the ships are kept.
    pub fn from_state(state: BoardState) -> Result<Self, RestoreError> {
        let dim = state.dimensions;
        let mut tracker = Self::new(dim.width(), dim.height())?;
        for ship in state.ships {
            tracker.add_ship(ship)?;
        }
        Ok(tracker)
    }

    /// Get the [`BoardDimensions`] of this board.
    pub fn dimensions(&self) -> BoardDimensions {
        self.state.dimensions
    }

    /// Get the ships on this board, in the order they were added.
    pub fn ships(&self) -> &[Ship] {
        &self.state.ships
    }

    /// Get the ship occupying the given cell, if any.
    pub fn ship_at(&self, coord: Coordinate) -> Option<&Ship> {
        self.grid.get(&coord).map(|idx| &self.state.ships[idx])
    }

    /// Borrow the full [`BoardState`].
    pub fn state(&self) -> &BoardState {
        &self.state
    }

    /// Consume the tracker, returning its [`BoardState`].
    pub fn into_state(self) -> BoardState {
        self.state
    }

    /// Check whether the given ship could be added right now, without adding it.
    pub fn check_placement(&self, ship: &Ship) -> Result<(), CannotPlaceReason> {
        match self.find_violation(ship) {
            Some((reason, _)) => Err(reason),
            None => Ok(()),
        }
    }

    /// Validate the ship and append it to the board.
    ///
    /// Cells are checked in ascending `(column, row)` order. The first bad cell decides
    /// the error, and going off the board takes precedence over overlapping another ship
    /// on the same cell.
    pub fn add_ship(&mut self, ship: Ship) -> Result<(), PlaceError> {
        if let Some((reason, coord)) = self.find_violation(&ship) {
            trace!("rejected ship {:?}: {} at {:?}", ship, reason, coord);
            return Err(PlaceError::new(reason, coord, ship));
        }
        let index = self.state.ships.len();
        self.grid.occupy(index, ship.occupied());
        debug!(
            "placed ship #{} covering {} cells on {} board",
            index,
            ship.len(),
            self.state.dimensions
        );
        self.state.ships.push(ship);
        Ok(())
    }

    /// Fire at the given cell. Returns [`AttackResult::Hit`] and marks the cell as hit if a
    /// ship occupies it, otherwise returns [`AttackResult::Miss`] and changes nothing.
    ///
    /// Cells outside the board are not rejected; no ship can occupy them, so they miss.
    /// Firing at a cell that was already hit hits again.
    pub fn take_attack(&mut self, position: Coordinate) -> AttackResult {
        match self.grid.get(&position) {
            Some(index) => {
                self.state.ships[index].record_hit(position);
                trace!("attack at {:?} hit ship #{}", position, index);
                AttackResult::Hit
            }
            None => {
                trace!("attack at {:?} missed", position);
                AttackResult::Miss
            }
        }
    }

    /// Compute the aggregate status of the ships on this board.
    pub fn board_status(&self) -> BoardStatus {
        if self.state.ships.is_empty() {
            BoardStatus::Empty
        } else if self.state.ships.iter().all(Ship::destroyed) {
            BoardStatus::AllShipsDestroyed
        } else {
            BoardStatus::ShipsAvailable
        }
    }

    /// Number of ships that still have at least one cell not hit.
    pub fn ships_remaining(&self) -> usize {
        self.state.ships.iter().filter(|ship| !ship.destroyed()).count()
    }

    /// Find the first rule the ship breaks, along with the cell that broke it.
    fn find_violation(&self, ship: &Ship) -> Option<(CannotPlaceReason, Option<Coordinate>)> {
        if ship.is_empty() {
            return Some((CannotPlaceReason::EmptyShip, None));
        }
        let dim = &self.state.dimensions;
        ship.sorted_coords().into_iter().find_map(|coord| {
            if !dim.contains(&coord) {
                Some((CannotPlaceReason::OutOfBoundaries, Some(coord)))
            } else if self.grid.is_occupied(&coord) {
                Some((CannotPlaceReason::Overlap, Some(coord)))
            } else {
                None
            }
        })
    }
}

impl Default for BoardTracker {
    /// Construct a tracker for an empty board with the default dimensions.
    fn default() -> Self {
        Self::with_dimensions(BoardDimensions::default())
    }
}

impl StateTracker for BoardTracker {
    fn dimensions(&self) -> BoardDimensions {
        BoardTracker::dimensions(self)
    }

    fn add_ship(&mut self, ship: Ship) -> Result<(), PlaceError> {
        BoardTracker::add_ship(self, ship)
    }

    fn take_attack(&mut self, position: Coordinate) -> AttackResult {
        BoardTracker::take_attack(self, position)
    }

    fn board_status(&self) -> BoardStatus {
        BoardTracker::board_status(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ship(coords: &[(i32, i32)]) -> Ship {
        coords.iter().copied().map(Coordinate::from).collect()
    }

    #[test]
    fn bounds_take_precedence_over_overlap() {
        let mut tracker = BoardTracker::new(10, 10).unwrap();
        tracker.add_ship(ship(&[(0, 0)])).unwrap();
        // (-1, 0) sorts before (0, 0), so the bounds check fires first.
        let err = tracker.add_ship(ship(&[(0, 0), (-1, 0)])).unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::OutOfBoundaries);
        assert_eq!(err.coord(), Some(Coordinate::new(-1, 0)));
    }

    #[test]
    fn first_offending_cell_decides() {
        let mut tracker = BoardTracker::new(10, 10).unwrap();
        tracker.add_ship(ship(&[(0, 5)])).unwrap();
        let err = tracker.add_ship(ship(&[(0, 5), (9, 10)])).unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::Overlap);
        assert_eq!(err.coord(), Some(Coordinate::new(0, 5)));
    }

    #[test]
    fn failed_add_returns_ship_and_leaves_board_unchanged() {
        let mut tracker = BoardTracker::new(10, 10).unwrap();
        let rejected = ship(&[(3, 3), (3, 10)]);
        let err = tracker.add_ship(rejected.clone()).unwrap_err();
        assert_eq!(err.into_ship(), rejected);
        assert!(tracker.ships().is_empty());
        assert_eq!(tracker.take_attack(Coordinate::new(3, 3)), AttackResult::Miss);
    }

    #[test]
    fn empty_ship_is_an_invalid_argument() {
        let mut tracker = BoardTracker::default();
        let err = tracker.add_ship(Ship::new()).unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::EmptyShip);
        assert!(err.reason().is_invalid_argument());
        assert_eq!(err.coord(), None);
        assert_eq!(
            err.reason().to_string(),
            "Ship coordinates cannot be null or empty."
        );
    }

    #[test]
    fn attack_marks_only_the_matching_ship() {
        let mut tracker = BoardTracker::default();
        tracker.add_ship(ship(&[(1, 0), (2, 0)])).unwrap();
        tracker.add_ship(ship(&[(5, 5), (5, 6), (5, 7)])).unwrap();
        assert_eq!(tracker.take_attack(Coordinate::new(5, 6)), AttackResult::Hit);
        assert!(tracker.ships()[0].hit().is_empty());
        assert!(tracker.ships()[1].is_hit(&Coordinate::new(5, 6)));
        assert_eq!(tracker.ships_remaining(), 2);
    }

    #[test]
    fn out_of_bounds_attack_misses() {
        let mut tracker = BoardTracker::new(2, 2).unwrap();
        tracker.add_ship(ship(&[(0, 0)])).unwrap();
        assert_eq!(tracker.take_attack(Coordinate::new(-4, 7)), AttackResult::Miss);
        assert_eq!(tracker.board_status(), BoardStatus::ShipsAvailable);
    }

    #[test]
    fn check_placement_does_not_mutate() {
        let mut tracker = BoardTracker::default();
        tracker.add_ship(ship(&[(4, 4)])).unwrap();
        assert_eq!(
            tracker.check_placement(&ship(&[(4, 4)])),
            Err(CannotPlaceReason::Overlap)
        );
        assert_eq!(tracker.check_placement(&ship(&[(4, 5)])), Ok(()));
        assert_eq!(tracker.ships().len(), 1);
    }

    #[test]
    fn usable_through_the_trait() {
        fn sink_everything(tracker: &mut dyn StateTracker, cells: &[Coordinate]) -> BoardStatus {
            for &cell in cells {
                tracker.take_attack(cell);
            }
            tracker.board_status()
        }

        let mut tracker = BoardTracker::default();
        tracker.add_ship(ship(&[(0, 0), (0, 1)])).unwrap();
        let status = sink_everything(&mut tracker, &[(0, 0).into(), (0, 1).into()]);
        assert_eq!(status, BoardStatus::AllShipsDestroyed);
    }
}
