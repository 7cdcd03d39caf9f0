//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//


//! Bounded two dimensional grid engine.
//!
//! [`Position`] and [`Area`] describe points and rectangles on an integer
//! lattice, [`Matrix`] stores a fixed size grid of arbitrary cells, and the
//! [`algorithms`] module provides searches, traversals and rearrangements over
//! any matrix.

pub mod algorithms;
mod area;
mod coordinate;
mod matrix;
mod position;
mod result;

pub use self::area::Area;
pub use self::coordinate::Coordinate;
pub use self::matrix::Matrix;
pub use self::position::Position;
pub use self::result::{GridError, GridResult};
