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

use boardtracker::{
    board::{AttackResult, BoardStatus, BoardTracker, CannotPlaceReason, Coordinate},
    ships::{Line, Orientation, Ship, ShipShape},
};
use proptest::prelude::*;

fn orientation() -> impl Strategy<Value = Orientation> {
    prop_oneof![Just(Orientation::Horizontal), Just(Orientation::Vertical)]
}

fn cells(max: i32) -> impl Strategy<Value = HashSet<(i32, i32)>> {
    prop::collection::hash_set((0..max, 0..max), 1..8)
}

fn ship_from(cells: &HashSet<(i32, i32)>) -> Ship {
    cells.iter().copied().map(Coordinate::from).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn positive_dimensions_are_kept(w in 1..i32::MAX, h in 1..i32::MAX) {
        let tracker = BoardTracker::new(w, h).unwrap();
        prop_assert_eq!(tracker.dimensions().width(), w);
        prop_assert_eq!(tracker.dimensions().height(), h);
    }

    #[test]
    fn non_positive_dimensions_are_rejected(w in i32::MIN..=0, h in any::<i32>()) {
        prop_assert!(BoardTracker::new(w, h).is_err());
        prop_assert!(BoardTracker::new(h, w).is_err());
    }

    #[test]
    fn out_of_bounds_cells_are_rejected(
        size in 1..50i32,
        col in -100..100i32,
        row in -100..100i32,
    ) {
        prop_assume!(col < 0 || row < 0 || col >= size || row >= size);
        let mut tracker = BoardTracker::new(size, size).unwrap();
        let err = tracker.add_ship(ship_from(&[(col, row)].iter().copied().collect())).unwrap_err();
        prop_assert_eq!(err.reason(), CannotPlaceReason::OutOfBoundaries);
        prop_assert!(tracker.ships().is_empty());
    }

    #[test]
    fn intersecting_ships_overlap(a in cells(10), b in cells(10)) {
        let mut tracker = BoardTracker::new(10, 10).unwrap();
        tracker.add_ship(ship_from(&a)).unwrap();
        let result = tracker.add_ship(ship_from(&b));
        if a.is_disjoint(&b) {
            prop_assert!(result.is_ok());
            prop_assert_eq!(tracker.ships().len(), 2);
        } else {
            prop_assert_eq!(result.unwrap_err().reason(), CannotPlaceReason::Overlap);
            prop_assert_eq!(tracker.ships().len(), 1);
        }
    }

    #[test]
    fn attack_hits_iff_occupied(a in cells(20), col in -5..25i32, row in -5..25i32) {
        let mut tracker = BoardTracker::new(20, 20).unwrap();
        tracker.add_ship(ship_from(&a)).unwrap();
        let expected = if a.contains(&(col, row)) {
            AttackResult::Hit
        } else {
            AttackResult::Miss
        };
        prop_assert_eq!(tracker.take_attack(Coordinate::new(col, row)), expected);
        prop_assert_eq!(tracker.take_attack(Coordinate::new(col, row)), expected);
    }

    #[test]
    fn status_tracks_destruction(
        a in cells(10),
        fired in prop::collection::vec((0..10i32, 0..10i32), 0..40),
    ) {
        let mut tracker = BoardTracker::new(10, 10).unwrap();
        tracker.add_ship(ship_from(&a)).unwrap();
        for &cell in &fired {
            tracker.take_attack(cell.into());
        }
        let fired: HashSet<_> = fired.into_iter().collect();
        let expected = if a.is_subset(&fired) {
            BoardStatus::AllShipsDestroyed
        } else {
            BoardStatus::ShipsAvailable
        };
        prop_assert_eq!(tracker.board_status(), expected);
    }

    #[test]
    fn line_has_requested_length(
        dir in orientation(),
        col in 0..1000i32,
        row in 0..1000i32,
        len in 1..200i32,
    ) {
        let ship = Line::new(dir, Coordinate::new(col, row), len).build().unwrap();
        prop_assert_eq!(ship.len(), len as usize);
        let step = dir.step();
        for i in 0..len {
            let cell = Coordinate::new(col + step.column * i, row + step.row * i);
            prop_assert!(ship.occupies(&cell));
        }
    }
}
