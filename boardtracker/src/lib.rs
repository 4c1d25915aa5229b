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
//! State tracking for a single player's Battleship board.
//!
//! A [`BoardTracker`][board::BoardTracker] owns one board: it validates ships as they are
//! added, resolves attacks against them, and reports whether any ship is still afloat.
//! Ships can be built by hand from their cells or expanded from a compact description
//! with [`ShipShape`][ships::ShipShape], such as a [`Line`][ships::Line].
//!
//! ```
//! use boardtracker::{
//!     board::{AttackResult, BoardStatus, BoardTracker, Coordinate},
//!     ships::{Line, Orientation, ShipShape},
//! };
//!
//! let mut tracker = BoardTracker::new(10, 10).unwrap();
//! let ship = Line::new(Orientation::Horizontal, Coordinate::new(0, 1), 2)
//!     .build()
//!     .unwrap();
//! tracker.add_ship(ship).unwrap();
//!
//! assert_eq!(tracker.take_attack(Coordinate::new(0, 1)), AttackResult::Hit);
//! assert_eq!(tracker.take_attack(Coordinate::new(5, 5)), AttackResult::Miss);
//! assert_eq!(tracker.board_status(), BoardStatus::ShipsAvailable);
//! assert_eq!(tracker.take_attack(Coordinate::new(1, 1)), AttackResult::Hit);
//! assert_eq!(tracker.board_status(), BoardStatus::AllShipsDestroyed);
//! ```
//!
//! The tracker does no locking of its own. Callers that share one between threads must
//! serialize access themselves.

pub mod board;
pub mod ships;
