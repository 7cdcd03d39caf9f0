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


//! Styled canvas blocks built on the termgrid matrix engine.
//!
//! A [`Block`] owns an [`Area`] and a [`Matrix`] of [`Style`] cells sized to
//! cover it exactly. The styling layer paints cells through the block; the
//! [`algorithms`] of the matrix crate run directly on [`Block::matrix_mut`].

mod block;
mod config;
mod result;
mod style;

pub use self::block::Block;
pub use self::config::CanvasConfig;
pub use self::result::{CanvasError, CanvasResult};
pub use self::style::{Color, Intensity, Style, Underline};
pub use termgrid_matrix::{Area, GridError, GridResult, Matrix, Position, algorithms};
