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


//! Searches over matrices whose rows ascend left to right and whose columns
//! ascend top to bottom.

use super::ensure_populated;
use crate::matrix::Matrix;
use crate::position::Position;
use crate::result::GridResult;
use std::cmp::Ordering;
use tracing::{instrument, trace};

/// Staircase walk from the top-right corner: move left while the cell is
/// larger than `value`, down while it is smaller.
///
/// # Errors
///
/// Returns [`GridError::EmptyMatrix`](crate::GridError::EmptyMatrix) for an
/// empty matrix.
#[instrument(level = "trace", skip_all, fields(height = matrix.height(), width = matrix.width()))]
pub fn exists<T, F>(matrix: &Matrix<T>, value: &T, cmp: F) -> GridResult<bool>
where
    F: Fn(&T, &T) -> Ordering,
{
    ensure_populated(matrix)?;
    let (mut row, mut column) = (0, matrix.width() - 1);
    loop {
        let cell = matrix.get(row, column)?;
        match cmp(cell, value) {
            Ordering::Equal => return Ok(true),
            Ordering::Greater if column == 0 => return Ok(false),
            Ordering::Greater => column -= 1,
            Ordering::Less if row + 1 == matrix.height() => return Ok(false),
            Ordering::Less => row += 1,
        }
        trace!(row, column, "staircase step");
    }
}

/// Staircase walk from the bottom-left corner: move up while the cell is
/// larger than `value`, right while it is smaller. Returns the position of
/// the first match.
///
/// # Errors
///
/// Returns [`GridError::EmptyMatrix`](crate::GridError::EmptyMatrix) for an
/// empty matrix.
#[instrument(level = "trace", skip_all, fields(height = matrix.height(), width = matrix.width()))]
pub fn search<T, F>(matrix: &Matrix<T>, value: &T, cmp: F) -> GridResult<Option<Position>>
where
    F: Fn(&T, &T) -> Ordering,
{
    ensure_populated(matrix)?;
    let (mut row, mut column) = (matrix.height() - 1, 0);
    loop {
        let cell = matrix.get(row, column)?;
        match cmp(cell, value) {
            Ordering::Equal => return Ok(Some(Position::from_index(row, column))),
            Ordering::Greater if row == 0 => return Ok(None),
            Ordering::Greater => row -= 1,
            Ordering::Less if column + 1 == matrix.width() => return Ok(None),
            Ordering::Less => column += 1,
        }
        trace!(row, column, "staircase step");
    }
}

/// Divide and conquer search.
///
/// Within a region, binary search along the diagonal running from its origin
/// finds the first diagonal cell larger than `value`. Everything up-left of
/// that pivot is smaller and everything down-right is larger, so only the
/// lower-left and upper-right quadrants around the pivot remain to be
/// searched. Quadrants are kept on a work stack, lower-left first.
///
/// # Errors
///
/// Returns [`GridError::EmptyMatrix`](crate::GridError::EmptyMatrix) for an
/// empty matrix.
#[instrument(level = "trace", skip_all, fields(height = matrix.height(), width = matrix.width()))]
pub fn find<T, F>(matrix: &Matrix<T>, value: &T, cmp: F) -> GridResult<Option<Position>>
where
    F: Fn(&T, &T) -> Ordering,
{
    ensure_populated(matrix)?;
    let mut pending = vec![(
        Position::new(0, 0),
        Position::from_index(matrix.height() - 1, matrix.width() - 1),
    )];

    while let Some((origin, dest)) = pending.pop() {
        let Some(first) = matrix.get_at(&origin) else {
            continue;
        };
        if !dest.in_bounds(matrix) {
            continue;
        }
        if cmp(first, value) == Ordering::Equal {
            return Ok(Some(origin));
        }
        if !origin.is_before(&dest) {
            continue;
        }

        let pivot = diagonal_pivot(matrix, &origin, &dest, value, &cmp);
        trace!(%origin, %dest, %pivot, "partitioning region");

        // upper-right
        pending.push((
            Position::new(origin.row, pivot.column),
            Position::new(pivot.row - 1, dest.column),
        ));
        // lower-left
        pending.push((
            Position::new(pivot.row, origin.column),
            Position::new(dest.row, pivot.column - 1),
        ));
    }
    Ok(None)
}

/// First position on the region's leading diagonal whose cell is not smaller
/// than `value`, or one step past the diagonal's end if every cell is.
fn diagonal_pivot<T, F>(
    matrix: &Matrix<T>,
    origin: &Position,
    dest: &Position,
    value: &T,
    cmp: &F,
) -> Position
where
    F: Fn(&T, &T) -> Ordering,
{
    let distance = (dest.row - origin.row).min(dest.column - origin.column);
    let mut start = *origin;
    let mut end = origin.offset(distance, distance);
    while start.is_before(&end) {
        let middle = Position::middle(&start, &end);
        match matrix.get_at(&middle) {
            Some(cell) if cmp(value, cell) == Ordering::Greater => start = middle.offset(1, 1),
            _ => end = middle.offset(-1, -1),
        }
    }
    start
}
