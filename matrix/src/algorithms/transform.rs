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


//! In-place rearrangements of matrix cells.

use super::{check_bound, ensure_populated};
use crate::matrix::Matrix;
use crate::result::{GridError, GridResult};
use rand::Rng;
use tracing::{debug, instrument};

/// Rotates the outer `size / 2` concentric layers of a square matrix 90°
/// clockwise in place. `rotate_layers(m, m.height())` rotates the whole
/// matrix.
///
/// # Errors
///
/// Returns [`GridError::EmptyMatrix`] for an empty matrix,
/// [`GridError::NotSquare`] if the matrix is not square, and
/// [`GridError::IndexOutOfBounds`] if `size` exceeds the side length.
#[instrument(level = "trace", skip(matrix))]
pub fn rotate_layers<T>(matrix: &mut Matrix<T>, size: usize) -> GridResult<()> {
    ensure_populated(matrix)?;
    let n = matrix.height();
    if n != matrix.width() {
        return Err(GridError::NotSquare {
            height: n,
            width: matrix.width(),
        });
    }
    check_bound(size, 0, n)?;

    let cells = matrix.cells_mut();
    let at = |row: usize, column: usize| row * n + column;
    for layer in 0..size / 2 {
        let first = layer;
        let last = n - 1 - layer;
        for i in first..last {
            let offset = i - first;
            let top = at(first, i);
            let left = at(last - offset, first);
            let bottom = at(last, last - offset);
            let right = at(i, last);
            // top <- left <- bottom <- right <- top
            cells.swap(top, left);
            cells.swap(left, bottom);
            cells.swap(bottom, right);
        }
    }
    debug!(layers = size / 2, "rotated layers");
    Ok(())
}

/// Overwrites with `default_value` every row and every column that contains
/// `value`. Rows and columns are selected from the matrix as it was before
/// the call, so cells written by the sweep never select further lines.
///
/// # Errors
///
/// Returns [`GridError::EmptyMatrix`] for an empty matrix.
#[instrument(level = "trace", skip_all, fields(height = matrix.height(), width = matrix.width()))]
pub fn replace_by<T>(matrix: &mut Matrix<T>, value: &T, default_value: T) -> GridResult<()>
where
    T: PartialEq + Clone,
{
    ensure_populated(matrix)?;
    let width = matrix.width();
    let mut rows = vec![false; matrix.height()];
    let mut columns = vec![false; width];
    for (index, cell) in matrix.cells().iter().enumerate() {
        if cell == value {
            rows[index / width] = true;
            columns[index % width] = true;
        }
    }

    for (index, cell) in matrix.cells_mut().iter_mut().enumerate() {
        if rows[index / width] || columns[index % width] {
            *cell = default_value.clone();
        }
    }
    debug!(
        rows = rows.iter().filter(|marked| **marked).count(),
        columns = columns.iter().filter(|marked| **marked).count(),
        "replaced lines"
    );
    Ok(())
}

/// Shuffles all cells uniformly using the thread-local generator.
///
/// # Errors
///
/// Returns [`GridError::EmptyMatrix`] for an empty matrix.
pub fn shuffle<T>(matrix: &mut Matrix<T>) -> GridResult<()> {
    shuffle_with(matrix, &mut rand::rng())
}

/// Fisher–Yates shuffle over the `height × width` cells taken as one
/// row-major sequence, where linear index `i` maps to
/// `(i / width, i % width)`.
///
/// # Errors
///
/// Returns [`GridError::EmptyMatrix`] for an empty matrix.
#[instrument(level = "trace", skip_all, fields(height = matrix.height(), width = matrix.width()))]
pub fn shuffle_with<T, R>(matrix: &mut Matrix<T>, rng: &mut R) -> GridResult<()>
where
    R: Rng + ?Sized,
{
    ensure_populated(matrix)?;
    let cells = matrix.cells_mut();
    for i in (1..cells.len()).rev() {
        let j = rng.random_range(0..=i);
        cells.swap(i, j);
    }
    debug!(cells = cells.len(), "shuffled");
    Ok(())
}
