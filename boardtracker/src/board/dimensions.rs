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
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Coordinate, DimensionsError};

/// Width and height of a single player's board. Both are always positive.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoardDimensions {
    /// Width of the board.
    width: i32,
    /// Height of the board.
    height: i32,
}

impl BoardDimensions {
    /// Create new [`BoardDimensions`] with the specified width and height.
    /// Returns an error if either `width` or `height` is zero or negative.
    pub fn new(width: i32, height: i32) -> Result<Self, DimensionsError> {
        if width <= 0 || height <= 0 {
            Err(DimensionsError::new(width, height))
        } else {
            Ok(Self { width, height })
        }
    }

    /// Get the width of these [`BoardDimensions`].
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Get the height of these [`BoardDimensions`].
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Check if the given [`Coordinate`] lies inside these dimensions.
    ///
    /// Columns are bounded by the height and rows by the width. Placements that were
    /// accepted under this pairing must stay accepted, so square boards are the only ones
    /// where the pairing does not matter.
    #[inline]
    pub fn contains(&self, coord: &Coordinate) -> bool {
        coord.column >= 0 && coord.row >= 0 && coord.column < self.height && coord.row < self.width
    }

    /// Number of distinct columns a coordinate may take on this board.
    pub(crate) fn column_span(&self) -> i32 {
        self.height
    }

    /// Number of distinct rows a coordinate may take on this board.
    pub(crate) fn row_span(&self) -> i32 {
        self.width
    }
}

impl Default for BoardDimensions {
    /// Construct the default dimensions, a 10x10 board.
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
        }
    }
}

impl fmt::Display for BoardDimensions {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_sizes() {
        for &(w, h) in &[(1, -10), (-3, 4), (-5, -6), (0, 0), (0, 10), (10, 0)] {
            let err = BoardDimensions::new(w, h).unwrap_err();
            assert_eq!((err.width(), err.height()), (w, h));
        }
    }

    #[test]
    fn accepts_extreme_sizes() {
        let dim = BoardDimensions::new(i32::MAX, i32::MAX).unwrap();
        assert_eq!(dim.width(), i32::MAX);
        assert_eq!(dim.height(), i32::MAX);
        assert!(dim.contains(&Coordinate::new(i32::MAX - 1, i32::MAX - 1)));
    }

    #[test]
    fn columns_are_bounded_by_height() {
        let dim = BoardDimensions::new(3, 5).unwrap();
        assert!(dim.contains(&Coordinate::new(4, 2)));
        assert!(!dim.contains(&Coordinate::new(2, 4)));
        assert!(!dim.contains(&Coordinate::new(5, 0)));
        assert!(!dim.contains(&Coordinate::new(0, 3)));
        assert!(!dim.contains(&Coordinate::new(-1, 0)));
        assert!(!dim.contains(&Coordinate::new(0, -1)));
    }
}
