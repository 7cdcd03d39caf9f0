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


use termgrid_matrix::GridError;

/// Result type for canvas operations
pub type CanvasResult<T> = Result<T, CanvasError>;

/// Errors raised while building or addressing a [`Block`](crate::Block).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CanvasError {
    /// Error from the underlying grid engine
    #[error("Grid error: {0}")]
    Grid(#[from] GridError),

    /// The requested block is larger than the configured limits allow.
    #[error("Canvas of {width}x{height} exceeds the configured maximum of {max_width}x{max_height}")]
    CanvasTooLarge {
        width: usize,
        height: usize,
        max_width: usize,
        max_height: usize,
    },

    /// An absolute position lies outside the block's area.
    #[error("Position ({row}, {column}) lies outside of the block")]
    OutsideBlock { row: i32, column: i32 },
}

impl CanvasError {
    /// `true` for any addressing failure, whether raised by the matrix or by
    /// absolute position translation.
    pub fn is_out_of_bounds(&self) -> bool {
        match self {
            CanvasError::Grid(error) => error.is_out_of_bounds(),
            CanvasError::OutsideBlock { .. } => true,
            CanvasError::CanvasTooLarge { .. } => false,
        }
    }
}
