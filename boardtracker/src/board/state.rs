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
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{board::BoardDimensions, ships::Ship};

/// Everything known about a single player's board: its dimensions and the ships placed on
/// it, in the order they were added.
///
/// A [`BoardTracker`][crate::board::BoardTracker] owns exactly one of these. It can be
/// taken out with [`into_state`][crate::board::BoardTracker::into_state] and put back
/// with [`from_state`][crate::board::BoardTracker::from_state], which re-checks every
/// placement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoardState {
    /// Dimensions of the board.
    pub dimensions: BoardDimensions,
    /// Ships on the board, in registration order.
    pub ships: Vec<Ship>,
}

impl BoardState {
    /// Construct an empty [`BoardState`] with the given dimensions.
    pub fn new(dimensions: BoardDimensions) -> Self {
        Self {
            dimensions,
            ships: Vec::new(),
        }
    }
}
