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
//! Sparse lookup from cells to the ships that occupy them.

use std::collections::HashMap;

use crate::board::Coordinate;

/// Maps every occupied cell to the index of its ship in the board's ship list. Only
/// occupied cells are stored, so memory scales with the ships rather than the board.
#[derive(Debug, Default, Clone)]
pub(super) struct Grid {
    cells: HashMap<Coordinate, usize>,
}

impl Grid {
    pub(super) fn new() -> Self {
        Self::default()
    }

    /// Get the index of the ship occupying the given cell, if any.
    pub(super) fn get(&self, coord: &Coordinate) -> Option<usize> {
        self.cells.get(coord).copied()
    }

    /// Whether any ship occupies the given cell.
    pub(super) fn is_occupied(&self, coord: &Coordinate) -> bool {
        self.cells.contains_key(coord)
    }

    /// Record that the ship at `index` occupies every cell in `coords`. The cells must be
    /// free; overlap is rejected before a ship is registered.
    pub(super) fn occupy<'a>(
        &mut self,
        index: usize,
        coords: impl IntoIterator<Item = &'a Coordinate>,
    ) {
        for coord in coords {
            let previous = self.cells.insert(*coord, index);
            debug_assert!(previous.is_none(), "{:?} already occupied", coord);
        }
    }
}
