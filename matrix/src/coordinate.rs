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


use std::cmp::Ordering;

/// A single integer coordinate, totally ordered by its value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coordinate(i32);

impl Coordinate {
    pub fn new(value: i32) -> Self {
        Coordinate(value)
    }

    pub fn value(&self) -> i32 {
        self.0
    }

    /// Compares two coordinates by their integer value.
    pub fn compare(a: &Coordinate, b: &Coordinate) -> Ordering {
        a.0.cmp(&b.0)
    }
}

impl From<i32> for Coordinate {
    fn from(value: i32) -> Self {
        Coordinate(value)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_compare() {
        let low = Coordinate::new(-3);
        let high = Coordinate::new(12);

        assert_eq!(Coordinate::compare(&low, &high), Ordering::Less);
        assert_eq!(Coordinate::compare(&high, &low), Ordering::Greater);
        assert_eq!(Coordinate::compare(&low, &low), Ordering::Equal);
    }

    #[test]
    fn test_coordinate_sorting() {
        let mut coordinates: Vec<Coordinate> =
            [5, -1, 3, 0].into_iter().map(Coordinate::from).collect();
        coordinates.sort();
        let values: Vec<i32> = coordinates.iter().map(Coordinate::value).collect();
        assert_eq!(values, vec![-1, 0, 3, 5]);
    }

    #[test]
    fn test_coordinate_display() {
        assert_eq!(Coordinate::new(42).to_string(), "42");
    }
}
