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


use crate::config::CanvasConfig;
use crate::result::{CanvasError, CanvasResult};
use crate::style::Style;
use std::ops::Range;
use termgrid_matrix::{Area, Matrix, Position};
use tracing::{debug, instrument, trace};

/// Addressable styled canvas region.
///
/// A block pairs an [`Area`] with a style matrix that exactly covers it:
/// `matrix.height() == area.height()` and `matrix.width() == area.width()`
/// always hold. Cells are addressed either locally by `(row, column)` from the
/// block's top-left cell, or absolutely by a [`Position`] on the area's
/// lattice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    area: Area,
    matrix: Matrix<Style>,
}

impl Block {
    /// Allocates a block covering `area` using [`CanvasConfig::default`].
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::CanvasTooLarge`] if the area exceeds the default
    /// limits.
    pub fn new(area: Area) -> CanvasResult<Self> {
        Self::with_config(area, &CanvasConfig::default())
    }

    /// Allocates a block covering `area`, every cell set to `config.fill`.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::CanvasTooLarge`] if the area exceeds the
    /// configured limits.
    #[instrument(level = "debug", skip_all, fields(area = %area))]
    pub fn with_config(area: Area, config: &CanvasConfig) -> CanvasResult<Self> {
        let (width, height) = (area.width(), area.height());
        if !config.permits(width, height) {
            return Err(CanvasError::CanvasTooLarge {
                width,
                height,
                max_width: config.max_width,
                max_height: config.max_height,
            });
        }
        debug!(width, height, "allocating block");
        Ok(Block {
            area,
            matrix: Matrix::filled(height, width, config.fill),
        })
    }

    /// Allocates a block between two explicit corners.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::CanvasTooLarge`] if the area exceeds the default
    /// limits.
    pub fn from_corners(top_right: Position, bottom_left: Position) -> CanvasResult<Self> {
        Self::new(Area::new(top_right, bottom_left))
    }

    pub fn area(&self) -> &Area {
        &self.area
    }

    pub fn matrix(&self) -> &Matrix<Style> {
        &self.matrix
    }

    /// Mutable access for running matrix algorithms over the cells. The
    /// matrix cannot be resized through this reference.
    pub fn matrix_mut(&mut self) -> &mut Matrix<Style> {
        &mut self.matrix
    }

    pub fn height(&self) -> usize {
        self.matrix.height()
    }

    pub fn width(&self) -> usize {
        self.matrix.width()
    }

    // ===== Local Addressing =====

    /// # Errors
    ///
    /// Returns an out of bounds [`CanvasError::Grid`] if the cell lies outside
    /// the block.
    pub fn style(&self, row: usize, column: usize) -> CanvasResult<&Style> {
        Ok(self.matrix.get(row, column)?)
    }

    /// # Errors
    ///
    /// Returns an out of bounds [`CanvasError::Grid`] if the cell lies outside
    /// the block.
    pub fn set(&mut self, row: usize, column: usize, style: Style) -> CanvasResult<()> {
        Ok(self.matrix.set(row, column, style)?)
    }

    /// # Errors
    ///
    /// Returns an out of bounds [`CanvasError::Grid`] if `row` lies outside
    /// the block.
    pub fn row(&self, row: usize) -> CanvasResult<&[Style]> {
        Ok(self.matrix.row(row)?)
    }

    /// # Errors
    ///
    /// Returns an out of bounds [`CanvasError::Grid`] if `column` lies outside
    /// the block.
    pub fn column(&self, column: usize) -> CanvasResult<Vec<Style>> {
        Ok(self.matrix.column(column)?)
    }

    // ===== Absolute Addressing =====

    /// Style of the cell at an absolute position.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::OutsideBlock`] if no cell of the block sits at
    /// `position`.
    pub fn style_at(&self, position: &Position) -> CanvasResult<&Style> {
        let (row, column) = self.local(position)?;
        self.style(row, column)
    }

    /// # Errors
    ///
    /// Returns [`CanvasError::OutsideBlock`] if no cell of the block sits at
    /// `position`.
    pub fn set_at(&mut self, position: &Position, style: Style) -> CanvasResult<()> {
        let (row, column) = self.local(position)?;
        self.set(row, column, style)
    }

    /// Sets every cell to `style`.
    pub fn fill(&mut self, style: Style) {
        self.matrix.fill(style);
    }

    /// Layers `style` onto every cell shared by `region` and the block.
    /// Returns the number of cells painted.
    #[instrument(level = "trace", skip_all, fields(region = %region))]
    pub fn paint(&mut self, region: &Area, style: Style) -> usize {
        let Some(shared) = self.area.intersection(region) else {
            return 0;
        };
        // `shared` lies inside the area, so both spans fit the matrix.
        let rows = local_span(shared.top(), shared.bottom(), self.area.top());
        let columns = local_span(shared.left(), shared.right(), self.area.left());
        let mut painted = 0;
        for cells in self.matrix.rows_mut().skip(rows.start).take(rows.len()) {
            for cell in &mut cells[columns.clone()] {
                *cell = cell.merge(&style);
                painted += 1;
            }
        }
        trace!(painted, "painted region");
        painted
    }

    /// Translates an absolute position into local `(row, column)` indexes.
    fn local(&self, position: &Position) -> CanvasResult<(usize, usize)> {
        let outside = || CanvasError::OutsideBlock {
            row: position.row,
            column: position.column,
        };
        let offset = Position::new(
            position.row.checked_sub(self.area.top()).ok_or_else(outside)?,
            position.column.checked_sub(self.area.left()).ok_or_else(outside)?,
        );
        let (row, column) = offset.to_index().ok_or_else(outside)?;
        if row < self.height() && column < self.width() {
            Ok((row, column))
        } else {
            Err(outside())
        }
    }
}

/// Local index range of the absolute span `start..end`, with `start` no
/// smaller than `origin`.
fn local_span(start: i32, end: i32, origin: i32) -> Range<usize> {
    start.abs_diff(origin) as usize..end.abs_diff(origin) as usize
}
