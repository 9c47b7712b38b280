//! Shape checks for untyped numeric rows.
//!
//! The conversion functions take `[f64; 3]` rows, so a typed batch is always
//! well formed. Data arriving as nested vectors or a flat row-major buffer is
//! checked here first; a batch with any malformed row is rejected whole,
//! never truncated or padded.

use crate::constants::COMPONENTS;
use crate::coordinate_system::Point3;
use thiserror::Error;

/// Input that cannot be read as a batch of 3-component rows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("row {row} has {found} components, expected {}", COMPONENTS)]
    RowLength { row: usize, found: usize },

    #[error("flat buffer of {len} values is not a whole number of {}-component rows", COMPONENTS)]
    FlatLength { len: usize },
}

/// Check nested rows and copy them into a typed batch.
/// Fails on the first row without exactly three components.
pub fn rows_from_nested<R: AsRef<[f64]>>(rows: &[R]) -> Result<Vec<Point3>, ShapeError> {
    rows.iter()
        .enumerate()
        .map(|(row, values)| {
            let values = values.as_ref();
            Point3::try_from(values).map_err(|_| ShapeError::RowLength {
                row,
                found: values.len(),
            })
        })
        .collect()
}

/// Split a flat row-major buffer into rows.
pub fn rows_from_flat(values: &[f64]) -> Result<Vec<Point3>, ShapeError> {
    if values.len() % COMPONENTS != 0 {
        return Err(ShapeError::FlatLength { len: values.len() });
    }

    Ok(values
        .chunks_exact(COMPONENTS)
        .map(|chunk| [chunk[0], chunk[1], chunk[2]])
        .collect())
}

/// Row-major copy of a batch, the inverse of [`rows_from_flat`].
pub fn flatten(points: &[Point3]) -> Vec<f64> {
    points.as_flattened().to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_rows_are_accepted() {
        let rows = vec![vec![1.0, 2.0, 3.0], vec![-4.0, 5.5, 0.0]];
        assert_eq!(
            rows_from_nested(&rows),
            Ok(vec![[1.0, 2.0, 3.0], [-4.0, 5.5, 0.0]])
        );
    }

    #[test]
    fn test_short_row_is_rejected_with_index() {
        let rows = vec![vec![1.0, 2.0, 3.0], vec![1.0, 2.0], vec![1.0]];
        assert_eq!(
            rows_from_nested(&rows),
            Err(ShapeError::RowLength { row: 1, found: 2 })
        );
    }

    #[test]
    fn test_long_row_is_rejected() {
        let rows: [&[f64]; 2] = [&[0.0, 0.0, 0.0, 1.0], &[1.0, 1.0, 1.0]];
        assert_eq!(
            rows_from_nested(&rows),
            Err(ShapeError::RowLength { row: 0, found: 4 })
        );
    }

    #[test]
    fn test_empty_inputs() {
        let rows: Vec<Vec<f64>> = Vec::new();
        assert_eq!(rows_from_nested(&rows), Ok(Vec::new()));
        assert_eq!(rows_from_flat(&[]), Ok(Vec::new()));
        assert!(flatten(&[]).is_empty());
    }

    #[test]
    fn test_flat_buffer_splits_into_rows() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let rows = rows_from_flat(&values).unwrap();
        assert_eq!(rows, vec![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        assert_eq!(flatten(&rows), values.to_vec());
    }

    #[test]
    fn test_ragged_flat_buffer_is_rejected() {
        assert_eq!(
            rows_from_flat(&[1.0, 2.0, 3.0, 4.0]),
            Err(ShapeError::FlatLength { len: 4 })
        );
    }

    #[test]
    fn test_error_messages_name_the_problem() {
        let err = ShapeError::RowLength { row: 7, found: 2 };
        assert_eq!(err.to_string(), "row 7 has 2 components, expected 3");
    }
}
