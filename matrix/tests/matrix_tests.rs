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


use termgrid_matrix::algorithms::{
    check_diagonal, compute_area_size, equals, exists, fill, find, find_square, replace_by,
    rotate_layers, search, shuffle_with, update_column, update_row,
};
use termgrid_matrix::{Area, GridError, Matrix, Position};

fn sorted() -> Matrix<i32> {
    Matrix::from_rows(vec![vec![1, 4, 7], vec![2, 5, 8], vec![3, 6, 9]]).unwrap()
}

// ===== Worked Examples =====

#[test]
fn test_rotate_4x4_row_zero_is_reversed_column_zero() {
    let original = Matrix::from_fn(4, 4, |row, column| row * 4 + column + 1);
    let mut rotated = original.clone();
    rotate_layers(&mut rotated, 4).unwrap();

    let mut column_zero = original.column(0).unwrap();
    column_zero.reverse();
    assert_eq!(rotated.row(0).unwrap(), column_zero.as_slice());
}

#[test]
fn test_area_square_example() {
    let area = Area::square(0, 0, 3).unwrap();
    assert_eq!(area.top_right(), Position::new(0, 3));
    assert_eq!(area.bottom_left(), Position::new(3, 0));
    assert_eq!(area.width(), 3);
}

#[test]
fn test_position_length_example() {
    assert_eq!(Position::new_3d(3, 4, 0).length(), 5.0);
}

#[test]
fn test_sorted_search_example() {
    let matrix = sorted();
    assert_eq!(exists(&matrix, &5, i32::cmp), Ok(true));
    assert_eq!(search(&matrix, &5, i32::cmp), Ok(Some(Position::new(1, 1))));
    assert_eq!(find(&matrix, &5, i32::cmp), Ok(Some(Position::new(1, 1))));
}

#[test]
fn test_flood_fill_example() {
    let mut matrix = Matrix::filled(3, 3, 0);
    matrix.set(1, 1, 9).unwrap();
    assert_eq!(fill(&mut matrix, 0, 0, 5), Ok(true));

    let fives = matrix.iter().filter(|(_, _, cell)| **cell == 5).count();
    assert_eq!(fives, 8);
    assert_eq!(matrix.get(1, 1), Ok(&9));
}

#[test]
fn test_find_square_returns_largest_first() {
    let mut matrix = Matrix::filled(5, 5, 1);
    matrix.set(0, 0, 0).unwrap();
    let square = find_square(&matrix, &0, i32::cmp).unwrap().unwrap();
    assert_eq!((square.height(), square.width()), (4, 4));
    assert_eq!(square, Area::square(0, 1, 4).unwrap());

    let hopeless = Matrix::filled(2, 2, 0);
    assert_eq!(find_square(&hopeless, &0, i32::cmp), Ok(None));
}

// ===== Precondition Failures =====

#[test]
fn test_empty_matrix_is_rejected_everywhere() {
    let mut empty: Matrix<i32> = Matrix::new(0, 0);
    let other = sorted();
    let cmp = i32::cmp;

    assert_eq!(equals(&empty, &other, cmp), Err(GridError::EmptyMatrix));
    assert_eq!(update_row(&mut empty, 0, 1), Err(GridError::EmptyMatrix));
    assert_eq!(update_column(&mut empty, 0, 1), Err(GridError::EmptyMatrix));
    assert_eq!(rotate_layers(&mut empty, 0), Err(GridError::EmptyMatrix));
    assert_eq!(replace_by(&mut empty, &0, 1), Err(GridError::EmptyMatrix));
    assert_eq!(exists(&empty, &1, cmp), Err(GridError::EmptyMatrix));
    assert_eq!(search(&empty, &1, cmp), Err(GridError::EmptyMatrix));
    assert_eq!(find(&empty, &1, cmp), Err(GridError::EmptyMatrix));
    assert_eq!(find_square(&empty, &1, cmp), Err(GridError::EmptyMatrix));
    assert_eq!(check_diagonal(&empty, true, cmp), Err(GridError::EmptyMatrix));
    assert_eq!(compute_area_size(&empty, &0, cmp), Err(GridError::EmptyMatrix));
    assert_eq!(fill(&mut empty, 0, 0, 1), Err(GridError::EmptyMatrix));
}

#[test]
fn test_bounds_and_argument_errors_are_distinct() {
    let mut matrix = sorted();
    let bounds = matrix.set(3, 0, 0).unwrap_err();
    let argument = rotate_layers(&mut Matrix::<i32>::new(2, 3), 1).unwrap_err();
    assert!(bounds.is_out_of_bounds());
    assert!(!argument.is_out_of_bounds());
}

// ===== Composite Workflows =====

#[test]
fn test_shuffle_then_sort_search() {
    use rand::SeedableRng;

    let mut matrix = sorted();
    shuffle_with(&mut matrix, &mut rand::rngs::StdRng::seed_from_u64(3)).unwrap();
    let mut values: Vec<i32> = matrix.iter().map(|(_, _, cell)| *cell).collect();
    values.sort_unstable();

    // refill column-major so rows and columns ascend again
    let rebuilt = Matrix::from_fn(3, 3, |row, column| values[column * 3 + row]);
    assert!(equals(&rebuilt, &sorted(), i32::cmp).unwrap());
}

#[test]
fn test_components_after_fill() {
    let mut matrix = Matrix::from_rows(vec![
        vec![1, 0, 1],
        vec![0, 0, 0],
        vec![1, 0, 1],
    ])
    .unwrap();
    assert_eq!(compute_area_size(&matrix, &0, i32::cmp), Ok(vec![1, 1, 1, 1]));

    fill(&mut matrix, 1, 1, 1).unwrap();
    assert_eq!(compute_area_size(&matrix, &0, i32::cmp), Ok(vec![9]));
}
