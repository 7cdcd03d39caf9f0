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


//! Region oriented algorithms: square borders, diagonals, connected
//! components and flood fill.

use super::ensure_populated;
use crate::area::Area;
use crate::matrix::Matrix;
use crate::position::Position;
use crate::result::GridResult;
use std::cmp::Ordering;
use tracing::{debug, instrument, trace};

/// Moore neighborhood offsets.
const NEIGHBORS_8: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Von Neumann neighborhood offsets.
const NEIGHBORS_4: [(isize, isize); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

/// Finds the largest square whose border cells all differ from `value`.
///
/// Candidate sizes are tried from the largest down, and within a size the
/// squares are scanned in row-major order of their top-left corner, so the
/// first hit is the result. Only the border is inspected; interior cells may
/// hold anything. Returns `None` when no cell differs from `value`.
///
/// # Errors
///
/// Returns [`GridError::EmptyMatrix`](crate::GridError::EmptyMatrix) for an
/// empty matrix.
#[instrument(level = "trace", skip_all, fields(height = matrix.height(), width = matrix.width()))]
pub fn find_square<T, F>(matrix: &Matrix<T>, value: &T, cmp: F) -> GridResult<Option<Area>>
where
    F: Fn(&T, &T) -> Ordering,
{
    ensure_populated(matrix)?;
    let (height, width) = (matrix.height(), matrix.width());
    for size in (1..=height.min(width)).rev() {
        for row in 0..=height - size {
            for column in 0..=width - size {
                if is_square(matrix, row, column, size, value, &cmp) {
                    debug!(row, column, size, "found square");
                    return Ok(Some(Area::new(
                        Position::from_index(row, column + size),
                        Position::from_index(row + size, column),
                    )));
                }
            }
        }
    }
    Ok(None)
}

fn is_square<T, F>(
    matrix: &Matrix<T>,
    row: usize,
    column: usize,
    size: usize,
    value: &T,
    cmp: &F,
) -> bool
where
    F: Fn(&T, &T) -> Ordering,
{
    let width = matrix.width();
    let cells = matrix.cells();
    let differs = |r: usize, c: usize| cmp(&cells[r * width + c], value) != Ordering::Equal;
    let last = size - 1;
    (0..size).all(|k| {
        differs(row, column + k)
            && differs(row + last, column + k)
            && differs(row + k, column)
            && differs(row + k, column + last)
    })
}

/// Whether every cell on the main (top-left to bottom-right) or anti
/// (top-right to bottom-left) diagonal equals the diagonal's first cell.
/// On rectangular matrices the diagonal stops at the shorter side.
///
/// # Errors
///
/// Returns [`GridError::EmptyMatrix`](crate::GridError::EmptyMatrix) for an
/// empty matrix.
pub fn check_diagonal<T, F>(matrix: &Matrix<T>, is_main_diagonal: bool, cmp: F) -> GridResult<bool>
where
    F: Fn(&T, &T) -> Ordering,
{
    ensure_populated(matrix)?;
    let width = matrix.width();
    let column_of = |k: usize| {
        if is_main_diagonal { k } else { width - 1 - k }
    };
    let first = matrix.get(0, column_of(0))?;
    for k in 1..matrix.height().min(width) {
        if cmp(matrix.get(k, column_of(k))?, first) != Ordering::Equal {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Sizes of the 8-connected components of non-empty cells, in the row-major
/// order of each component's first cell.
///
/// # Errors
///
/// Returns [`GridError::EmptyMatrix`](crate::GridError::EmptyMatrix) for an
/// empty matrix.
#[instrument(level = "trace", skip_all, fields(height = matrix.height(), width = matrix.width()))]
pub fn compute_area_size<T, F>(
    matrix: &Matrix<T>,
    empty_value: &T,
    cmp: F,
) -> GridResult<Vec<usize>>
where
    F: Fn(&T, &T) -> Ordering,
{
    ensure_populated(matrix)?;
    let (height, width) = (matrix.height(), matrix.width());
    let cells = matrix.cells();
    let occupied = |index: usize| cmp(&cells[index], empty_value) != Ordering::Equal;

    let mut visited = vec![false; cells.len()];
    let mut sizes = Vec::new();
    let mut pending = Vec::new();

    for start in 0..cells.len() {
        if visited[start] || !occupied(start) {
            continue;
        }
        visited[start] = true;
        pending.push(start);
        let mut size = 0;
        while let Some(index) = pending.pop() {
            size += 1;
            for neighbor in neighbors(index, height, width, &NEIGHBORS_8) {
                if !visited[neighbor] && occupied(neighbor) {
                    visited[neighbor] = true;
                    pending.push(neighbor);
                }
            }
        }
        trace!(row = start / width, column = start % width, size, "component");
        sizes.push(size);
    }
    debug!(components = sizes.len(), "computed area sizes");
    Ok(sizes)
}

/// Replaces the 4-connected region sharing the value of `(row, column)` with
/// `value`. Returns `false` without touching the matrix if the cell already
/// holds `value`.
///
/// # Errors
///
/// Returns [`GridError::EmptyMatrix`](crate::GridError::EmptyMatrix) for an
/// empty matrix and
/// [`GridError::IndexOutOfBounds`](crate::GridError::IndexOutOfBounds) if
/// the starting cell lies outside of it.
#[instrument(level = "trace", skip(matrix, value))]
pub fn fill<T>(matrix: &mut Matrix<T>, row: usize, column: usize, value: T) -> GridResult<bool>
where
    T: PartialEq + Clone,
{
    ensure_populated(matrix)?;
    let start = matrix.index_of(row, column)?;
    let (height, width) = (matrix.height(), matrix.width());
    let cells = matrix.cells_mut();
    if cells[start] == value {
        return Ok(false);
    }

    let original = std::mem::replace(&mut cells[start], value.clone());
    let mut pending = vec![start];
    let mut filled = 1usize;
    while let Some(index) = pending.pop() {
        for neighbor in neighbors(index, height, width, &NEIGHBORS_4) {
            if cells[neighbor] == original {
                cells[neighbor] = value.clone();
                pending.push(neighbor);
                filled += 1;
            }
        }
    }
    debug!(filled, "flood fill complete");
    Ok(true)
}

/// In-bounds linear indexes of the neighbors of `index` under `offsets`.
fn neighbors(
    index: usize,
    height: usize,
    width: usize,
    offsets: &'static [(isize, isize)],
) -> impl Iterator<Item = usize> {
    let (row, column) = (index / width, index % width);
    offsets.iter().filter_map(move |&(d_row, d_column)| {
        let r = row.checked_add_signed(d_row).filter(|r| *r < height)?;
        let c = column.checked_add_signed(d_column).filter(|c| *c < width)?;
        Some(r * width + c)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::GridError;

    fn grid(rows: &[&[i32]]) -> Matrix<i32> {
        Matrix::from_rows(rows.iter().map(|row| row.to_vec()).collect()).unwrap()
    }

    // ===== find_square =====

    #[test]
    fn test_find_square_whole_matrix() {
        let matrix = Matrix::filled(4, 4, 1);
        let square = find_square(&matrix, &0, i32::cmp).unwrap().unwrap();
        assert_eq!(square, Area::square(0, 0, 4).unwrap());
    }

    #[test]
    fn test_find_square_ignores_interior() {
        let matrix = grid(&[
            &[0, 1, 1, 1, 0],
            &[0, 1, 0, 1, 0],
            &[0, 1, 1, 1, 0],
            &[0, 0, 0, 0, 0],
        ]);
        let square = find_square(&matrix, &0, i32::cmp).unwrap().unwrap();
        assert_eq!(square, Area::square(0, 1, 3).unwrap());
        assert_eq!(square.width(), 3);
    }

    #[test]
    fn test_find_square_prefers_largest() {
        let matrix = grid(&[
            &[1, 0, 0, 0],
            &[0, 1, 1, 0],
            &[0, 1, 1, 0],
            &[0, 0, 0, 0],
        ]);
        let square = find_square(&matrix, &0, i32::cmp).unwrap().unwrap();
        assert_eq!(square, Area::square(1, 1, 2).unwrap());
    }

    #[test]
    fn test_find_square_none() {
        let matrix = Matrix::filled(3, 3, 0);
        assert_eq!(find_square(&matrix, &0, i32::cmp), Ok(None));
    }

    // ===== check_diagonal =====

    #[test]
    fn test_check_diagonal() {
        let matrix = grid(&[&[7, 1, 3], &[2, 7, 4], &[3, 5, 7]]);
        assert_eq!(check_diagonal(&matrix, true, i32::cmp), Ok(true));
        assert_eq!(check_diagonal(&matrix, false, i32::cmp), Ok(false));

        let anti = grid(&[&[1, 2, 9], &[0, 9, 4], &[9, 5, 6]]);
        assert_eq!(check_diagonal(&anti, false, i32::cmp), Ok(true));
        assert_eq!(check_diagonal(&anti, true, i32::cmp), Ok(false));
    }

    #[test]
    fn test_check_diagonal_rectangular() {
        let matrix = grid(&[&[1, 0, 0, 2], &[0, 1, 2, 0]]);
        assert_eq!(check_diagonal(&matrix, true, i32::cmp), Ok(true));
        assert_eq!(check_diagonal(&matrix, false, i32::cmp), Ok(true));
    }

    // ===== compute_area_size =====

    #[test]
    fn test_compute_area_size() {
        let matrix = grid(&[
            &[1, 1, 0, 0, 0],
            &[0, 1, 0, 0, 1],
            &[0, 0, 1, 0, 1],
            &[1, 0, 0, 0, 0],
        ]);
        assert_eq!(compute_area_size(&matrix, &0, i32::cmp), Ok(vec![4, 2, 1]));
    }

    #[test]
    fn test_compute_area_size_all_empty_or_full() {
        assert_eq!(
            compute_area_size(&Matrix::filled(3, 3, 0), &0, i32::cmp),
            Ok(vec![])
        );
        assert_eq!(
            compute_area_size(&Matrix::filled(3, 4, 2), &0, i32::cmp),
            Ok(vec![12])
        );
    }

    #[test]
    fn test_compute_area_size_large_component() {
        let matrix = Matrix::filled(300, 300, 1);
        assert_eq!(
            compute_area_size(&matrix, &0, i32::cmp),
            Ok(vec![90_000])
        );
    }

    // ===== fill =====

    #[test]
    fn test_fill() {
        let mut matrix = Matrix::filled(3, 3, 0);
        matrix.set(1, 1, 9).unwrap();
        assert_eq!(fill(&mut matrix, 0, 0, 5), Ok(true));
        assert_eq!(matrix, grid(&[&[5, 5, 5], &[5, 9, 5], &[5, 5, 5]]));
    }

    #[test]
    fn test_fill_is_four_connected() {
        let mut matrix = grid(&[&[0, 1, 0], &[1, 0, 1], &[0, 1, 0]]);
        assert_eq!(fill(&mut matrix, 1, 1, 7), Ok(true));
        assert_eq!(matrix, grid(&[&[0, 1, 0], &[1, 7, 1], &[0, 1, 0]]));
    }

    #[test]
    fn test_fill_same_value_is_noop() {
        let mut matrix = Matrix::filled(2, 2, 4);
        assert_eq!(fill(&mut matrix, 0, 1, 4), Ok(false));
        assert_eq!(matrix, Matrix::filled(2, 2, 4));
    }

    #[test]
    fn test_fill_out_of_bounds() {
        let mut matrix = Matrix::filled(2, 2, 0);
        assert!(fill(&mut matrix, 2, 0, 1).unwrap_err().is_out_of_bounds());
        let mut empty: Matrix<i32> = Matrix::new(0, 0);
        assert_eq!(fill(&mut empty, 0, 0, 1), Err(GridError::EmptyMatrix));
    }

    #[test]
    fn test_fill_large_region() {
        let mut matrix = Matrix::filled(400, 400, 0u8);
        assert_eq!(fill(&mut matrix, 200, 200, 1), Ok(true));
        assert!(matrix.iter().all(|(_, _, cell)| *cell == 1));
    }
}
