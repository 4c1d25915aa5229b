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
//! Random placement of linear ships, enabled with the `rng_gen` feature.

use enumflags2::BitFlags;
use log::debug;
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};
use thiserror::Error;

use crate::{
    board::{BoardTracker, Coordinate},
    ships::{Line, Orientation, ShapeError, ShipShape},
};

/// Number of random positions tried for a single ship before giving up.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1000;

impl Distribution<Orientation> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Orientation {
        if rng.gen() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// Reason random placement stopped.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum RandomPlaceError {
    /// No orientation was permitted.
    #[error("at least one orientation must be allowed")]
    NoOrientations,
    /// One of the requested lengths does not describe a valid ship.
    #[error(transparent)]
    Shape(#[from] ShapeError),
    /// No free position was found for a ship of the given length.
    #[error("no room found for a ship of length {len} after {attempts} attempts")]
    Exhausted { len: i32, attempts: usize },
}

/// Add one linear ship per entry of `lengths` to the tracker, each at a random position
/// with one of the allowed `orientations`.
///
/// Ships are placed in order. If a ship cannot be placed, the ships before it stay on the
/// board and the error names the length that failed.
pub fn place_random<R, O>(
    tracker: &mut BoardTracker,
    rng: &mut R,
    lengths: &[i32],
    orientations: O,
) -> Result<(), RandomPlaceError>
where
    R: Rng + ?Sized,
    O: Into<BitFlags<Orientation>>,
{
    let orientations: Vec<Orientation> = orientations.into().iter().collect();
    if orientations.is_empty() {
        return Err(RandomPlaceError::NoOrientations);
    }
    let dim = tracker.dimensions();
    for &len in lengths {
        if len <= 0 {
            return Err(ShapeError::NonPositiveLength(len).into());
        }
        let mut placed = false;
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let start = Coordinate::new(
                rng.gen_range(0, dim.column_span()),
                rng.gen_range(0, dim.row_span()),
            );
            let orientation = orientations[rng.gen_range(0, orientations.len())];
            let ship = Line::new(orientation, start, len).build()?;
            if tracker.add_ship(ship).is_ok() {
                debug!(
                    "randomly placed length {} ship at {:?} {:?}",
                    len, start, orientation
                );
                placed = true;
                break;
            }
        }
        if !placed {
            return Err(RandomPlaceError::Exhausted {
                len,
                attempts: MAX_PLACEMENT_ATTEMPTS,
            });
        }
    }
    Ok(())
}
