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

/// Axis aligned rectangle described by its top-right and bottom-left corners.
///
/// Rows grow downward, so the bottom-left corner carries the larger row and
/// the top-right corner the larger column. Extents are measured as absolute
/// differences between the corners, and the corner order is never used to
/// decide which side is which.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Area {
    top_right: Position,
    bottom_left: Position,
}

impl Area {
    pub fn new(top_right: Position, bottom_left: Position) -> Self {
        Area {
            top_right,
            bottom_left,
        }
    }

    /// A `size × size` square whose top-left corner sits at `(row, column)`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::NegativeSize`] if `size` is negative and
    /// [`GridError::Overflow`] if a far corner falls outside the `i32` range.
    pub fn square(row: i32, column: i32, size: i32) -> GridResult<Self> {
        if size < 0 {
            return Err(GridError::NegativeSize(size));
        }
        let right = column.checked_add(size).ok_or(GridError::Overflow)?;
        let bottom = row.checked_add(size).ok_or(GridError::Overflow)?;
        Ok(Area::new(Position::new(row, right), Position::new(bottom, column)))
    }

    pub fn top_right(&self) -> Position {
        self.top_right
    }

    pub fn bottom_left(&self) -> Position {
        self.bottom_left
    }

    pub fn top(&self) -> i32 {
        self.top_right.row.min(self.bottom_left.row)
    }

    pub fn bottom(&self) -> i32 {
        self.top_right.row.max(self.bottom_left.row)
    }

    pub fn left(&self) -> i32 {
        self.top_right.column.min(self.bottom_left.column)
    }

    pub fn right(&self) -> i32 {
        self.top_right.column.max(self.bottom_left.column)
    }

    /// Column extent between the two corners.
    pub fn width(&self) -> usize {
        self.top_right.column.abs_diff(self.bottom_left.column) as usize
    }

    /// Row extent between the two corners.
    pub fn height(&self) -> usize {
        self.top_right.row.abs_diff(self.bottom_left.row) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Whether both the row and the column intervals of the two areas meet.
    /// Intervals are closed, so areas sharing an edge overlap.
    pub fn overlaps(&self, other: &Area) -> bool {
        let rows = self.top() <= other.bottom() && other.top() <= self.bottom();
        let columns = self.left() <= other.right() && other.left() <= self.right();
        rows && columns
    }

    /// The region shared by both areas, if they overlap.
    pub fn intersection(&self, other: &Area) -> Option<Area> {
        if !self.overlaps(other) {
            return None;
        }
        let top = self.top().max(other.top());
        let bottom = self.bottom().min(other.bottom());
        let left = self.left().max(other.left());
        let right = self.right().min(other.right());
        Some(Area::new(
            Position::new(top, right),
            Position::new(bottom, left),
        ))
    }

    /// Whether `position` lies within the closed row and column bounds.
    pub fn contains(&self, position: &Position) -> bool {
        (self.left()..=self.right()).contains(&position.column)
            && (self.top()..=self.bottom()).contains(&position.row)
    }

    /// Per-axis average of the two corners.
    pub fn centroid(&self) -> Position {
        Position::middle(&self.top_right, &self.bottom_left)
    }
}

impl std::fmt::Display for Area {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{} .. {}]", self.top_right, self.bottom_left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_corners() {
        let area = Area::square(0, 0, 3).unwrap();
        assert_eq!(area.top_right(), Position::new(0, 3));
        assert_eq!(area.bottom_left(), Position::new(3, 0));
        assert_eq!(area.width(), 3);
        assert_eq!(area.height(), 3);
    }

    #[test]
    fn test_square_negative_size() {
        assert_eq!(Area::square(1, 1, -1), Err(GridError::NegativeSize(-1)));
        assert!(Area::square(1, 1, 0).unwrap().is_empty());
    }

    #[test]
    fn test_square_overflow() {
        assert_eq!(Area::square(0, i32::MAX, 1), Err(GridError::Overflow));
        assert_eq!(Area::square(i32::MAX, 0, 1), Err(GridError::Overflow));
        let edge = Area::square(i32::MAX - 2, i32::MAX - 2, 2).unwrap();
        assert_eq!(edge.bottom_left(), Position::new(i32::MAX, i32::MAX - 2));
    }

    #[test]
    fn test_height_uses_opposite_corner() {
        let area = Area::new(Position::new(2, 10), Position::new(7, 4));
        assert_eq!(area.height(), 5);
        assert_eq!(area.width(), 6);
        assert_eq!(
            (area.top(), area.bottom(), area.left(), area.right()),
            (2, 7, 4, 10)
        );
    }

    #[test]
    fn test_is_empty() {
        assert!(Area::new(Position::new(0, 5), Position::new(0, 0)).is_empty());
        assert!(Area::new(Position::new(0, 0), Position::new(5, 0)).is_empty());
        assert!(!Area::square(0, 0, 1).unwrap().is_empty());
    }

    #[test]
    fn test_overlaps() {
        let a = Area::square(0, 0, 4).unwrap();
        let b = Area::square(2, 2, 4).unwrap();
        let c = Area::square(10, 0, 2).unwrap();
        let d = Area::square(0, 10, 2).unwrap();

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
        assert!(!a.overlaps(&d));
        assert!(a.overlaps(&Area::square(4, 4, 1).unwrap()));
    }

    #[test]
    fn test_intersection() {
        let a = Area::square(0, 0, 4).unwrap();
        let b = Area::square(2, 1, 4).unwrap();
        let shared = a.intersection(&b).unwrap();
        assert_eq!(shared.top_right(), Position::new(2, 4));
        assert_eq!(shared.bottom_left(), Position::new(4, 1));
        assert_eq!((shared.height(), shared.width()), (2, 3));
        assert_eq!(a.intersection(&Area::square(9, 9, 1).unwrap()), None);
    }

    #[test]
    fn test_contains() {
        let area = Area::square(1, 1, 3).unwrap();
        assert!(area.contains(&Position::new(1, 1)));
        assert!(area.contains(&Position::new(4, 4)));
        assert!(area.contains(&Position::new(2, 3)));
        assert!(!area.contains(&Position::new(0, 2)));
        assert!(!area.contains(&Position::new(2, 5)));
    }

    #[test]
    fn test_centroid() {
        let area = Area::new(Position::new_3d(0, 4, 2), Position::new_3d(6, 0, 0));
        assert_eq!(area.centroid(), Position::new_3d(3, 2, 1));
    }

    #[test]
    fn test_centroid_near_limits() {
        let area = Area::new(
            Position::new(i32::MAX, i32::MAX),
            Position::new(i32::MAX, 0),
        );
        assert_eq!(area.centroid(), Position::new(i32::MAX, i32::MAX / 2));
    }

    #[test]
    fn test_copy_is_independent() {
        let original = Area::square(0, 0, 2).unwrap();
        let mut copy = original;
        copy = Area::new(copy.top_right().offset(1, 1), copy.bottom_left());
        assert_ne!(copy, original);
        assert_eq!(original, Area::square(0, 0, 2).unwrap());
    }
}
