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


//! Algorithms over [`Matrix`] values.
//!
//! Every function borrows the matrix for the duration of the call. Functions
//! that need to order or compare cells take a comparator `Fn(&T, &T) ->
//! Ordering`, so any cell type can be used whether or not it implements `Ord`.
//! All of them reject an empty matrix with [`GridError::EmptyMatrix`].
//!
//! Traversals (flood fill, component sizing and the divide and conquer
//! search) use explicit work stacks, so their memory use is bounded by the
//! heap rather than the call stack.

mod region;
mod search;
mod transform;

pub use self::region::{check_diagonal, compute_area_size, fill, find_square};
pub use self::search::{exists, find, search};
pub use self::transform::{replace_by, rotate_layers, shuffle, shuffle_with};

use crate::matrix::Matrix;
use crate::result::{GridError, GridResult};
use std::cmp::Ordering;
use tracing::instrument;

/// Fails unless `lower <= index <= upper`.
///
/// # Errors
///
/// Returns [`GridError::IndexOutOfBounds`] when `index` falls outside the
/// inclusive range.
pub fn check_bound(index: usize, lower: usize, upper: usize) -> GridResult<()> {
    if (lower..=upper).contains(&index) {
        Ok(())
    } else {
        Err(GridError::IndexOutOfBounds {
            index,
            lower,
            upper,
        })
    }
}

/// Cell-wise equality under `cmp`. Matrices of different dimensions are
/// never equal.
///
/// # Errors
///
/// Returns [`GridError::EmptyMatrix`] if either matrix is empty.
pub fn equals<T, F>(m1: &Matrix<T>, m2: &Matrix<T>, cmp: F) -> GridResult<bool>
where
    F: Fn(&T, &T) -> Ordering,
{
    ensure_populated(m1)?;
    ensure_populated(m2)?;
    if m1.height() != m2.height() || m1.width() != m2.width() {
        return Ok(false);
    }
    Ok(m1
        .cells()
        .iter()
        .zip(m2.cells())
        .all(|(a, b)| cmp(a, b) == Ordering::Equal))
}

/// Overwrites every cell of row `index` with `value`.
///
/// # Errors
///
/// Returns [`GridError::EmptyMatrix`] for an empty matrix and
/// [`GridError::IndexOutOfBounds`] if `index` is past the last row.
#[instrument(level = "trace", skip(matrix, value))]
pub fn update_row<T: Clone>(matrix: &mut Matrix<T>, index: usize, value: T) -> GridResult<()> {
    ensure_populated(matrix)?;
    check_bound(index, 0, matrix.height() - 1)?;
    let width = matrix.width();
    matrix.cells_mut()[index * width..(index + 1) * width].fill(value);
    Ok(())
}

/// Overwrites every cell of column `index` with `value`.
///
/// # Errors
///
/// Returns [`GridError::EmptyMatrix`] for an empty matrix and
/// [`GridError::IndexOutOfBounds`] if `index` is past the last column.
#[instrument(level = "trace", skip(matrix, value))]
pub fn update_column<T: Clone>(matrix: &mut Matrix<T>, index: usize, value: T) -> GridResult<()> {
    ensure_populated(matrix)?;
    check_bound(index, 0, matrix.width() - 1)?;
    let width = matrix.width();
    for cell in matrix.cells_mut().iter_mut().skip(index).step_by(width) {
        *cell = value.clone();
    }
    Ok(())
}

pub(crate) fn ensure_populated<T>(matrix: &Matrix<T>) -> GridResult<()> {
    if matrix.height() == 0 || matrix.width() == 0 {
        Err(GridError::EmptyMatrix)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&[i32]]) -> Matrix<i32> {
        Matrix::from_rows(rows.iter().map(|row| row.to_vec()).collect()).unwrap()
    }

    #[test]
    fn test_check_bound_is_inclusive() {
        assert!(check_bound(0, 0, 3).is_ok());
        assert!(check_bound(3, 0, 3).is_ok());
        assert_eq!(
            check_bound(4, 0, 3),
            Err(GridError::IndexOutOfBounds {
                index: 4,
                lower: 0,
                upper: 3
            })
        );
        assert!(check_bound(1, 2, 3).unwrap_err().is_out_of_bounds());
    }

    #[test]
    fn test_equals() {
        let a = grid(&[&[1, 2], &[3, 4]]);
        let b = grid(&[&[1, 2], &[3, 4]]);
        let c = grid(&[&[1, 2], &[3, 5]]);
        let d = grid(&[&[1, 2, 3, 4]]);

        assert_eq!(equals(&a, &b, i32::cmp), Ok(true));
        assert_eq!(equals(&b, &a, i32::cmp), Ok(true));
        assert_eq!(equals(&a, &c, i32::cmp), Ok(false));
        assert_eq!(equals(&a, &d, i32::cmp), Ok(false));
    }

    #[test]
    fn test_equals_custom_comparator() {
        let a = grid(&[&[1, -2]]);
        let b = grid(&[&[-1, 2]]);
        assert_eq!(equals(&a, &b, |x, y| x.abs().cmp(&y.abs())), Ok(true));
    }

    #[test]
    fn test_equals_rejects_empty() {
        let empty: Matrix<i32> = Matrix::new(0, 0);
        let a = grid(&[&[1]]);
        assert_eq!(equals(&empty, &a, i32::cmp), Err(GridError::EmptyMatrix));
        assert_eq!(equals(&a, &empty, i32::cmp), Err(GridError::EmptyMatrix));
    }

    #[test]
    fn test_update_row_and_column() {
        let mut matrix = grid(&[&[1, 2, 3], &[4, 5, 6], &[7, 8, 9]]);
        update_row(&mut matrix, 1, 0).unwrap();
        update_column(&mut matrix, 2, -1).unwrap();
        assert_eq!(matrix, grid(&[&[1, 2, -1], &[0, 0, -1], &[7, 8, -1]]));
    }

    #[test]
    fn test_update_out_of_bounds() {
        let mut matrix = grid(&[&[1, 2, 3]]);
        assert!(update_row(&mut matrix, 1, 0).unwrap_err().is_out_of_bounds());
        assert!(update_column(&mut matrix, 3, 0).unwrap_err().is_out_of_bounds());
        assert_eq!(matrix, grid(&[&[1, 2, 3]]));
    }
}
