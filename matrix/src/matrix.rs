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


use crate::position::Position;
use crate::result::{GridError, GridResult};

/// Fixed size, bounds checked, row-major two dimensional container.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Matrix<T> {
    height: usize,
    width: usize,
    cells: Vec<T>,
}

impl<T> Matrix<T> {
    /// Allocates a `height × width` matrix of default cells.
    pub fn new(height: usize, width: usize) -> Self
    where
        T: Default + Clone,
    {
        Self::filled(height, width, T::default())
    }

    /// Allocates a `height × width` matrix with every cell set to `value`.
    pub fn filled(height: usize, width: usize, value: T) -> Self
    where
        T: Clone,
    {
        Matrix {
            height,
            width,
            cells: vec![value; height * width],
        }
    }

    /// Builds a matrix by calling `f(row, column)` for every cell.
    pub fn from_fn(height: usize, width: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut cells = Vec::with_capacity(height * width);
        for row in 0..height {
            for column in 0..width {
                cells.push(f(row, column));
            }
        }
        Matrix {
            height,
            width,
            cells,
        }
    }

    /// Wraps an existing set of rows. The first row establishes the width.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::EmptyMatrix`] if there is no first row, and
    /// [`GridError::DimensionMismatch`] if any row differs in length from the
    /// first.
    pub fn from_rows(rows: Vec<Vec<T>>) -> GridResult<Self> {
        let width = rows.first().map(Vec::len).ok_or(GridError::EmptyMatrix)?;
        let height = rows.len();
        let mut cells = Vec::with_capacity(height * width);
        for row in rows {
            if row.len() != width {
                return Err(GridError::DimensionMismatch {
                    expected: width,
                    actual: row.len(),
                });
            }
            cells.extend(row);
        }
        Ok(Matrix {
            height,
            width,
            cells,
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// `true` if the matrix has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    // ===== Cell Access =====

    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfBounds`] if `row` or `column` falls
    /// outside of the matrix.
    pub fn get(&self, row: usize, column: usize) -> GridResult<&T> {
        let index = self.index_of(row, column)?;
        Ok(&self.cells[index])
    }

    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfBounds`] if `row` or `column` falls
    /// outside of the matrix.
    pub fn get_mut(&mut self, row: usize, column: usize) -> GridResult<&mut T> {
        let index = self.index_of(row, column)?;
        Ok(&mut self.cells[index])
    }

    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfBounds`] if `row` or `column` falls
    /// outside of the matrix.
    pub fn set(&mut self, row: usize, column: usize, value: T) -> GridResult<()> {
        *self.get_mut(row, column)? = value;
        Ok(())
    }

    /// Overwrites every cell with `value`.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.cells.fill(value);
    }

    /// Looks up the cell addressed by `position`, if it lies inside the matrix.
    pub fn get_at(&self, position: &Position) -> Option<&T> {
        let (row, column) = position.to_index()?;
        self.get(row, column).ok()
    }

    /// Borrows a full row.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfBounds`] if `row` is past the last row.
    pub fn row(&self, row: usize) -> GridResult<&[T]> {
        check_index(row, self.height)?;
        let start = row * self.width;
        Ok(&self.cells[start..start + self.width])
    }

    /// Collects a full column, top to bottom.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfBounds`] if `column` is past the last
    /// column.
    pub fn column(&self, column: usize) -> GridResult<Vec<T>>
    where
        T: Clone,
    {
        check_index(column, self.width)?;
        Ok(self
            .cells
            .iter()
            .skip(column)
            .step_by(self.width)
            .cloned()
            .collect())
    }

    /// Copies the leading `height × width` sub-rectangle.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfBounds`] if either extent exceeds the
    /// matrix dimensions.
    pub fn copy_region(&self, height: usize, width: usize) -> GridResult<Matrix<T>>
    where
        T: Clone,
    {
        check_extent(height, self.height)?;
        check_extent(width, self.width)?;
        Ok(Matrix::from_fn(height, width, |row, column| {
            self.cells[row * self.width + column].clone()
        }))
    }

    // ===== Iteration =====

    /// Iterates over the rows as slices. Always yields `height` rows, each
    /// empty when the matrix has no columns.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        let width = self.width;
        (0..self.height).map(move |row| &self.cells[row * width..(row + 1) * width])
    }

    /// Iterates over the rows as mutable slices, one per row.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [T]> {
        let width = self.width;
        let mut rest = self.cells.as_mut_slice();
        (0..self.height).map(move |_| {
            let (row, tail) = std::mem::take(&mut rest).split_at_mut(width);
            rest = tail;
            row
        })
    }

    /// Iterates over every cell in row-major order as `(row, column, &cell)`.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &T)> {
        let width = self.width.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(index, cell)| (index / width, index % width, cell))
    }

    // ===== Crate Internals =====

    pub(crate) fn index_of(&self, row: usize, column: usize) -> GridResult<usize> {
        check_index(row, self.height)?;
        check_index(column, self.width)?;
        Ok(row * self.width + column)
    }

    pub(crate) fn cells(&self) -> &[T] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [T] {
        &mut self.cells
    }
}

fn check_index(index: usize, length: usize) -> GridResult<()> {
    if index < length {
        Ok(())
    } else {
        Err(GridError::IndexOutOfBounds {
            index,
            lower: 0,
            upper: length.saturating_sub(1),
        })
    }
}

fn check_extent(extent: usize, length: usize) -> GridResult<()> {
    if extent <= length {
        Ok(())
    } else {
        Err(GridError::IndexOutOfBounds {
            index: extent,
            lower: 0,
            upper: length,
        })
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, row) in self.rows().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            for (column, cell) in row.iter().enumerate() {
                if column > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", cell)?;
            }
        }
        Ok(())
    }
}
