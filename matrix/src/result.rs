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


//! Error types for the matrix crate.
//!
//! Errors fall into two classes: bounds violations, raised whenever an index
//! falls outside the valid range of a matrix or helper, and argument errors
//! for every other broken precondition.

/// Result type alias for operations that may fail with a [`GridError`].
pub type GridResult<T> = Result<T, GridError>;

/// Errors raised by positions, areas, matrices and the matrix algorithms.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// Index outside of the inclusive range `[lower, upper]`.
    #[error("Index {index} out of bounds (valid range: {lower}..={upper})")]
    IndexOutOfBounds {
        /// The offending index
        index: usize,
        /// Smallest valid index
        lower: usize,
        /// Largest valid index
        upper: usize,
    },

    /// A row did not have the width established by the first row.
    #[error("Dimension mismatch: expected {expected}, found {actual}")]
    DimensionMismatch {
        /// The expected dimension
        expected: usize,
        /// The dimension actually encountered
        actual: usize,
    },

    /// The matrix has no rows, or its first row has no cells.
    #[error("Matrix is empty")]
    EmptyMatrix,

    /// A square-only operation received a rectangular matrix.
    #[error("Matrix is not square: {height}x{width}")]
    NotSquare {
        /// Number of rows
        height: usize,
        /// Number of columns
        width: usize,
    },

    /// Division by a zero scale.
    #[error("Division by zero")]
    DivisionByZero,

    /// An operation that divides by a vector length received a zero vector.
    #[error("Operation requires a non-zero length vector")]
    ZeroLength,

    /// A validated constructor received a negative component.
    #[error("Component '{name}' must not be negative (found {value})")]
    NegativeComponent {
        /// Name of the component
        name: &'static str,
        /// The rejected value
        value: i32,
    },

    /// An area was requested with a negative size.
    #[error("Size must not be negative (found {0})")]
    NegativeSize(i32),

    /// Coordinate arithmetic left the `i32` range.
    #[error("Coordinate arithmetic overflowed")]
    Overflow,
}

impl GridError {
    /// Returns `true` for bounds violations, `false` for argument errors.
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, GridError::IndexOutOfBounds { .. })
    }
}
