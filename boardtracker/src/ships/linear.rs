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
use enumflags2::BitFlags;

use crate::{
    board::Coordinate,
    ships::{ShapeError, Ship, ShipShape},
};

/// Direction a linear ship extends from its starting cell.
#[derive(BitFlags, Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Orientation {
    /// The ship extends towards increasing columns.
    Horizontal = 0b01,
    /// The ship extends towards increasing rows.
    Vertical = 0b10,
}

impl Orientation {
    /// Offset between two consecutive cells of a ship with this orientation.
    pub fn step(self) -> Coordinate {
        match self {
            Orientation::Horizontal => Coordinate::new(1, 0),
            Orientation::Vertical => Coordinate::new(0, 1),
        }
    }
}

/// A straight ship described by its starting cell, orientation and length.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Line {
    orientation: Orientation,
    start: Coordinate,
    len: i32,
}

impl Line {
    /// Describe a linear ship. The description is only checked when it is built.
    pub fn new(orientation: Orientation, start: Coordinate, len: i32) -> Self {
        Line {
            orientation,
            start,
            len,
        }
    }

    /// Get the orientation of this ship.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Get the first cell of this ship.
    pub fn start(&self) -> Coordinate {
        self.start
    }

    /// Get the length of this ship.
    pub fn len(&self) -> i32 {
        self.len
    }
}

impl ShipShape for Line {
    fn build(&self) -> Result<Ship, ShapeError> {
        if self.len <= 0 {
            return Err(ShapeError::NonPositiveLength(self.len));
        }
        if self.start.row < 0 || self.start.column < 0 {
            return Err(ShapeError::NegativeStart(self.start));
        }
        let step = self.orientation.step();
        let span = self.len - 1;
        let too_long = ShapeError::TooLong {
            start: self.start,
            len: self.len,
        };
        // The last cell must be representable before anything is allocated.
        let offset = step
            .column
            .checked_mul(span)
            .zip(step.row.checked_mul(span))
            .map(|(column, row)| Coordinate::new(column, row))
            .ok_or(too_long)?;
        self.start.checked_add(offset).ok_or(too_long)?;

        let mut route = Vec::with_capacity(self.len as usize);
        let mut position = self.start;
        route.push(position);
        for _ in 0..span {
            position = position + step;
            route.push(position);
        }
        Ok(route.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_is_checked_before_start() {
        let line = Line::new(Orientation::Horizontal, Coordinate::new(-1, 0), 0);
        assert_eq!(line.build(), Err(ShapeError::NonPositiveLength(0)));
    }

    #[test]
    fn single_cell_ship() {
        let ship = Line::new(Orientation::Vertical, Coordinate::new(4, 4), 1)
            .build()
            .unwrap();
        assert_eq!(ship.len(), 1);
        assert!(ship.occupies(&Coordinate::new(4, 4)));
    }

    #[test]
    fn overflow_is_reported() {
        let line = Line::new(Orientation::Horizontal, Coordinate::new(i32::MAX - 1, 0), 3);
        assert!(matches!(line.build(), Err(ShapeError::TooLong { len: 3, .. })));
    }

    #[test]
    fn overflow_is_reported_before_allocating() {
        let start = Coordinate::new(i32::MAX - 1, 0);
        let line = Line::new(Orientation::Horizontal, start, i32::MAX);
        assert_eq!(
            line.build(),
            Err(ShapeError::TooLong {
                start,
                len: i32::MAX
            })
        );

        let start = Coordinate::new(0, 2);
        let line = Line::new(Orientation::Vertical, start, i32::MAX);
        assert_eq!(
            line.build(),
            Err(ShapeError::TooLong {
                start,
                len: i32::MAX
            })
        );
    }

    #[test]
    fn line_may_end_on_the_last_representable_cell() {
        let ship = Line::new(Orientation::Vertical, Coordinate::new(0, i32::MAX - 2), 3)
            .build()
            .unwrap();
        assert!(ship.occupies(&Coordinate::new(0, i32::MAX)));
    }
}
