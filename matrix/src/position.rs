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


//! Integer positions and vectors on a three dimensional lattice.
//!
//! A [`Position`] addresses a matrix cell through its `row` and `column`; the
//! `depth` component defaults to zero for planar use and only takes part in the
//! three dimensional operations ([`Position::vector`], [`Position::scalar`],
//! [`Position::distance`] and [`Position::rotate`]). Magnitude
//! ([`Position::length`]) covers row and column only.

use crate::matrix::Matrix;
use crate::result::{GridError, GridResult};
use std::f64::consts::FRAC_PI_2;

/// A mutable integer `(row, column, depth)` vector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: i32,
    pub column: i32,
    pub depth: i32,
}

impl Position {
    /// Creates a planar position with a depth of zero.
    pub fn new(row: i32, column: i32) -> Self {
        Self::new_3d(row, column, 0)
    }

    pub fn new_3d(row: i32, column: i32, depth: i32) -> Self {
        Position { row, column, depth }
    }

    /// Creates a position, rejecting negative components.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::NegativeComponent`] naming the first negative
    /// component.
    pub fn try_new(row: i32, column: i32, depth: i32) -> GridResult<Self> {
        for (name, value) in [("row", row), ("column", column), ("depth", depth)] {
            if value < 0 {
                return Err(GridError::NegativeComponent { name, value });
            }
        }
        Ok(Self::new_3d(row, column, depth))
    }

    // ===== In-place Arithmetic =====

    /// Translates the position by the given row and column deltas.
    pub fn shift(&mut self, d_row: i32, d_column: i32) -> &mut Self {
        self.row += d_row;
        self.column += d_column;
        self
    }

    /// Scales row and column component-wise.
    pub fn multiply(&mut self, s_row: i32, s_column: i32) -> &mut Self {
        self.row *= s_row;
        self.column *= s_column;
        self
    }

    /// Divides row and column component-wise, truncating toward zero.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::DivisionByZero`] if either scale is zero. The
    /// position is left untouched in that case.
    pub fn divide(&mut self, s_row: i32, s_column: i32) -> GridResult<&mut Self> {
        if s_row == 0 || s_column == 0 {
            return Err(GridError::DivisionByZero);
        }
        self.row /= s_row;
        self.column /= s_column;
        Ok(self)
    }

    /// Negates row and column. Depth is left untouched.
    pub fn negate(&mut self) -> &mut Self {
        self.row = -self.row;
        self.column = -self.column;
        self
    }

    /// Planar magnitude `sqrt(row² + column²)`.
    pub fn length(&self) -> f64 {
        let row = f64::from(self.row);
        let column = f64::from(self.column);
        (row * row + column * column).sqrt()
    }

    /// Divides row and column by [`Position::length`], rounding to the
    /// nearest integer.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::ZeroLength`] for the zero vector.
    pub fn normalize(&mut self) -> GridResult<&mut Self> {
        let length = self.length();
        if length == 0.0 {
            return Err(GridError::ZeroLength);
        }
        self.row = (f64::from(self.row) / length).round() as i32;
        self.column = (f64::from(self.column) / length).round() as i32;
        Ok(self)
    }

    /// Rotates the position by `angle` radians.
    ///
    /// The vector is decomposed into its azimuth `theta` (from row and
    /// column) and inclination `phi` (from depth over the planar length). The
    /// column/row plane is first turned by `theta`, the column/depth plane by
    /// `phi`, and the result is then rotated about the x axis by `angle`, the y
    /// axis by `theta` and the z axis by `phi`. Components are rounded back to
    /// integers.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::ZeroLength`] when the planar length is zero.
    pub fn rotate(&mut self, angle: f64) -> GridResult<&mut Self> {
        let length = self.length();
        if length == 0.0 {
            return Err(GridError::ZeroLength);
        }
        let phi = (f64::from(self.depth) / length).clamp(-1.0, 1.0).acos();
        let theta = if self.column == 0 {
            match self.row.signum() {
                1 => FRAC_PI_2,
                -1 => -FRAC_PI_2,
                _ => 0.0,
            }
        } else {
            f64::from(self.row).atan2(f64::from(self.column))
        };

        let mut v = Vec3 {
            x: f64::from(self.column),
            y: f64::from(self.row),
            z: f64::from(self.depth),
        };
        v.turn_xy(theta);
        v.turn_xz(phi);
        v.rotate_x(angle);
        v.rotate_y(theta);
        v.rotate_z(phi);

        self.column = v.x.round() as i32;
        self.row = v.y.round() as i32;
        self.depth = v.z.round() as i32;
        Ok(self)
    }

    // ===== Derived Values =====

    /// Cross product of `self` and `other`.
    pub fn vector(&self, other: &Position) -> Position {
        Position {
            row: self.column * other.depth - self.depth * other.column,
            column: self.depth * other.row - self.row * other.depth,
            depth: self.row * other.column - self.column * other.row,
        }
    }

    /// Dot product of `self` and `other` over all three axes.
    pub fn scalar(&self, other: &Position) -> i64 {
        i64::from(self.row) * i64::from(other.row)
            + i64::from(self.column) * i64::from(other.column)
            + i64::from(self.depth) * i64::from(other.depth)
    }

    /// Euclidean distance over all three axes.
    pub fn distance(&self, other: &Position) -> f64 {
        let d_row = f64::from(self.row) - f64::from(other.row);
        let d_column = f64::from(self.column) - f64::from(other.column);
        let d_depth = f64::from(self.depth) - f64::from(other.depth);
        let sum = d_row * d_row + d_column * d_column + d_depth * d_depth;
        if sum <= 0.0 { 0.0 } else { sum.sqrt() }
    }

    /// Angle in radians between `self` and `other`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::ZeroLength`] if either vector has zero length.
    pub fn angle(&self, other: &Position) -> GridResult<f64> {
        let lengths = self.length() * other.length();
        if lengths == 0.0 {
            return Err(GridError::ZeroLength);
        }
        Ok((self.scalar(other) as f64 / lengths).clamp(-1.0, 1.0).acos())
    }

    /// Returns a new position translated by the given row and column deltas.
    pub fn offset(&self, d_row: i32, d_column: i32) -> Position {
        self.offset_3d(d_row, d_column, 0)
    }

    pub fn offset_3d(&self, d_row: i32, d_column: i32, d_depth: i32) -> Position {
        Position {
            row: self.row + d_row,
            column: self.column + d_column,
            depth: self.depth + d_depth,
        }
    }

    /// Partial order: `true` iff neither row nor column exceeds `other`'s.
    pub fn is_before(&self, other: &Position) -> bool {
        self.row <= other.row && self.column <= other.column
    }

    /// Whether the position addresses a cell of `matrix`.
    pub fn in_bounds<T>(&self, matrix: &Matrix<T>) -> bool {
        self.to_index()
            .is_some_and(|(row, column)| row < matrix.height() && column < matrix.width())
    }

    /// Component-wise midpoint of two positions.
    pub fn middle(min: &Position, max: &Position) -> Position {
        Position {
            row: midpoint(min.row, max.row),
            column: midpoint(min.column, max.column),
            depth: midpoint(min.depth, max.depth),
        }
    }

    /// Creates a planar position from a `(row, column)` index pair.
    pub fn from_index(row: usize, column: usize) -> Self {
        Position::new(
            i32::try_from(row).unwrap_or(i32::MAX),
            i32::try_from(column).unwrap_or(i32::MAX),
        )
    }

    /// Converts a non-negative position into a `(row, column)` index pair.
    pub fn to_index(&self) -> Option<(usize, usize)> {
        Some((
            usize::try_from(self.row).ok()?,
            usize::try_from(self.column).ok()?,
        ))
    }
}

impl std::ops::Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        self.offset_3d(rhs.row, rhs.column, rhs.depth)
    }
}

impl std::ops::Sub for Position {
    type Output = Position;

    fn sub(self, rhs: Position) -> Position {
        self.offset_3d(-rhs.row, -rhs.column, -rhs.depth)
    }
}

impl std::ops::Neg for Position {
    type Output = Position;

    fn neg(mut self) -> Position {
        self.negate();
        self
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, column): (i32, i32)) -> Self {
        Position::new(row, column)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.row, self.column, self.depth)
    }
}

/// Average of two components, truncated toward zero. Summed in `i64` so the
/// result always lies between `a` and `b`.
fn midpoint(a: i32, b: i32) -> i32 {
    ((i64::from(a) + i64::from(b)) / 2) as i32
}

/// Floating point working vector for [`Position::rotate`]: `x` is the column,
/// `y` the row and `z` the depth.
struct Vec3 {
    x: f64,
    y: f64,
    z: f64,
}

impl Vec3 {
    fn turn_xy(&mut self, a: f64) {
        let (sin, cos) = a.sin_cos();
        (self.x, self.y) = (self.x * cos - self.y * sin, self.x * sin + self.y * cos);
    }

    fn turn_xz(&mut self, a: f64) {
        let (sin, cos) = a.sin_cos();
        (self.x, self.z) = (self.x * cos - self.z * sin, self.x * sin + self.z * cos);
    }

    fn rotate_x(&mut self, a: f64) {
        let (sin, cos) = a.sin_cos();
        (self.y, self.z) = (self.y * cos - self.z * sin, self.y * sin + self.z * cos);
    }

    fn rotate_y(&mut self, a: f64) {
        let (sin, cos) = a.sin_cos();
        (self.x, self.z) = (self.x * cos + self.z * sin, -self.x * sin + self.z * cos);
    }

    fn rotate_z(&mut self, a: f64) {
        let (sin, cos) = a.sin_cos();
        (self.x, self.y) = (self.x * cos - self.y * sin, self.x * sin + self.y * cos);
    }
}
