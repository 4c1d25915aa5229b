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
use thiserror::Error;

use crate::board::Coordinate;

/// Reason a ship shape could not be expanded into a ship.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum ShapeError {
    /// The requested length was zero or negative.
    #[error("length is zero or negative: {0}")]
    NonPositiveLength(i32),
    /// The starting cell had a negative column or row.
    #[error("start position cannot have a negative coordinate: {0:?}")]
    NegativeStart(Coordinate),
    /// The last cell of the ship could not be represented.
    #[error("ship of length {len} starting at {start:?} overflows the coordinate range")]
    TooLong { start: Coordinate, len: i32 },
}
