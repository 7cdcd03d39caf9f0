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


use crate::style::Style;

/// Limits and defaults applied when allocating a [`Block`](crate::Block).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CanvasConfig {
    /// Widest block that may be allocated, in cells
    pub max_width: usize,
    /// Tallest block that may be allocated, in cells
    pub max_height: usize,
    /// Style every freshly allocated cell starts with
    pub fill: Style,
}

impl CanvasConfig {
    /// No size limits, plain cells
    pub fn unbounded() -> CanvasConfig {
        CanvasConfig {
            max_width: usize::MAX,
            max_height: usize::MAX,
            fill: Style::plain(),
        }
    }

    /// Limits sized for the largest terminal windows, plain cells
    pub fn terminal() -> CanvasConfig {
        CanvasConfig {
            max_width: 512,
            max_height: 256,
            fill: Style::plain(),
        }
    }

    /// Replaces the fill style
    pub fn with_fill(mut self, fill: Style) -> CanvasConfig {
        self.fill = fill;
        self
    }

    /// Whether a `width × height` block fits within the limits.
    pub fn permits(&self, width: usize, height: usize) -> bool {
        width <= self.max_width && height <= self.max_height
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self::terminal()
    }
}
