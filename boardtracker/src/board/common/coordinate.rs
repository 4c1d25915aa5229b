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
use std::ops::{Add, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The coordinates of a single cell on the board.
///
/// Coordinates carry no sign invariant of their own. Whether a coordinate is valid depends
/// on the board it is checked against, see
/// [`BoardDimensions::contains`][crate::board::BoardDimensions::contains].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coordinate {
    /// Column of the cell.
    pub column: i32,
    /// Row of the cell.
    pub row: i32,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `column` and `row`.
    pub const fn new(column: i32, row: i32) -> Self {
        Self { column, row }
    }

    /// Add `offset` to this coordinate, returning `None` if either component overflows.
    pub fn checked_add(self, offset: Coordinate) -> Option<Self> {
        Some(Self {
            column: self.column.checked_add(offset.column)?,
            row: self.row.checked_add(offset.row)?,
        })
    }
}

impl Add for Coordinate {
    type Output = Coordinate;

    fn add(self, rhs: Coordinate) -> Coordinate {
        Coordinate::new(self.column + rhs.column, self.row + rhs.row)
    }
}

impl Sub for Coordinate {
    type Output = Coordinate;

    fn sub(self, rhs: Coordinate) -> Coordinate {
        Coordinate::new(self.column - rhs.column, self.row - rhs.row)
    }
}

impl From<(i32, i32)> for Coordinate {
    /// Construct a [`Coordinate`] from the given `(column, row)` pair.
    fn from((column, row): (i32, i32)) -> Self {
        Self::new(column, row)
    }
}

impl From<Coordinate> for (i32, i32) {
    /// Convert the [`Coordinate`] into a `(column, row)` pair.
    fn from(coord: Coordinate) -> Self {
        (coord.column, coord.row)
    }
}
