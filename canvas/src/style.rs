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


//! Cell styles painted onto a [`Block`](crate::Block).
//!
//! A [`Style`] is an opaque value to the grid engine. It is totally ordered
//! so that the matrix algorithms, which compare cells, apply to style
//! matrices as well. Turning a style into escape sequences is the job of the
//! rendering layer and is not handled here.

/// Text intensity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Intensity {
    /// Standard weight (SGR `22`).
    #[default]
    Normal,
    /// Bold or increased intensity (SGR `1`).
    Bold,
    /// Dim or decreased intensity (SGR `2`).
    Dim,
}

/// Underline decoration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Underline {
    #[default]
    Single,
    Double,
}

/// Terminal color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Purple,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightPurple,
    BrightCyan,
    BrightWhite,
    /// A color number from the 256 color palette.
    Fixed(u8),
    /// A 24-bit RGB color.
    Rgb(u8, u8, u8),
}

impl Color {
    /// Whether the color belongs to the basic 16 color palette.
    pub fn is_basic(&self) -> bool {
        !matches!(self, Color::Fixed(_) | Color::Rgb(..))
    }
}

/// Style of a single canvas cell. Unset attributes inherit from whatever the
/// renderer paints underneath.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Style {
    pub foreground: Option<Color>,
    pub background: Option<Color>,
    pub intensity: Option<Intensity>,
    pub italic: bool,
    pub underline: Option<Underline>,
    pub reverse: bool,
}

impl Style {
    /// The unstyled cell.
    pub const fn plain() -> Self {
        Style {
            foreground: None,
            background: None,
            intensity: None,
            italic: false,
            underline: None,
            reverse: false,
        }
    }

    pub fn with_foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn with_intensity(mut self, intensity: Intensity) -> Self {
        self.intensity = Some(intensity);
        self
    }

    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    pub fn with_underline(mut self, underline: Underline) -> Self {
        self.underline = Some(underline);
        self
    }

    pub fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    /// `true` if no attribute is set.
    pub fn is_plain(&self) -> bool {
        *self == Style::plain()
    }

    /// Layers `other` on top of `self`: attributes set in `other` win.
    pub fn merge(&self, other: &Style) -> Style {
        Style {
            foreground: other.foreground.or(self.foreground),
            background: other.background.or(self.background),
            intensity: other.intensity.or(self.intensity),
            italic: self.italic || other.italic,
            underline: other.underline.or(self.underline),
            reverse: self.reverse || other.reverse,
        }
    }
}
