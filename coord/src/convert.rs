//! Batch conversions between coordinate systems.
//!
//! Each function maps every row of the input through the matching scalar
//! formula from [`crate::coordinate_system`]. Rows are processed with rayon's
//! order-preserving parallel iterators, so output row `i` always corresponds
//! to input row `i` and the input is left untouched.

use crate::constants::PARALLEL_MIN_ROWS;
use crate::coordinate_system::{
    CoordinateSystem, Point3, cartesian_to_cylindrical_point, cartesian_to_spherical_point,
    cylindrical_to_cartesian_point, cylindrical_to_spherical_point, spherical_to_cartesian_point,
    spherical_to_cylindrical_point,
};
use rayon::prelude::*;
use tracing::debug;

/// Scalar formula applied to a single row.
pub type RowConversion = fn(Point3) -> Point3;

fn map_rows(points: &[Point3], row: RowConversion) -> Vec<Point3> {
    points
        .par_iter()
        .with_min_len(PARALLEL_MIN_ROWS)
        .map(|&point| row(point))
        .collect()
}

/// Convert Cartesian `(x, y, z)` rows to spherical `(r, theta, phi)`.
pub fn cartesian_to_spherical(points: &[Point3]) -> Vec<Point3> {
    map_rows(points, cartesian_to_spherical_point)
}

/// Convert spherical `(r, theta, phi)` rows to Cartesian `(x, y, z)`.
pub fn spherical_to_cartesian(points: &[Point3]) -> Vec<Point3> {
    map_rows(points, spherical_to_cartesian_point)
}

/// Convert spherical `(r, theta, phi)` rows to cylindrical `(r, theta, z)`.
pub fn spherical_to_cylindrical(points: &[Point3]) -> Vec<Point3> {
    map_rows(points, spherical_to_cylindrical_point)
}

/// Convert cylindrical `(r, theta, z)` rows to spherical `(r, theta, phi)`.
pub fn cylindrical_to_spherical(points: &[Point3]) -> Vec<Point3> {
    map_rows(points, cylindrical_to_spherical_point)
}

/// Convert Cartesian `(x, y, z)` rows to cylindrical `(r, theta, z)`.
pub fn cartesian_to_cylindrical(points: &[Point3]) -> Vec<Point3> {
    map_rows(points, cartesian_to_cylindrical_point)
}

/// Convert cylindrical `(r, theta, z)` rows to Cartesian `(x, y, z)`.
pub fn cylindrical_to_cartesian(points: &[Point3]) -> Vec<Point3> {
    map_rows(points, cylindrical_to_cartesian_point)
}

/// Look up the direct row formula between two systems.
/// Returns `None` when both systems are the same.
pub fn row_conversion(from: CoordinateSystem, to: CoordinateSystem) -> Option<RowConversion> {
    use CoordinateSystem::*;

    match (from, to) {
        (Cartesian, Spherical) => Some(cartesian_to_spherical_point),
        (Spherical, Cartesian) => Some(spherical_to_cartesian_point),
        (Spherical, Cylindrical) => Some(spherical_to_cylindrical_point),
        (Cylindrical, Spherical) => Some(cylindrical_to_spherical_point),
        (Cartesian, Cylindrical) => Some(cartesian_to_cylindrical_point),
        (Cylindrical, Cartesian) => Some(cylindrical_to_cartesian_point),
        (Cartesian, Cartesian) | (Spherical, Spherical) | (Cylindrical, Cylindrical) => None,
    }
}

/// Convert a batch between any two systems.
/// Converting a system to itself returns a copy of the input.
pub fn convert(points: &[Point3], from: CoordinateSystem, to: CoordinateSystem) -> Vec<Point3> {
    debug!(rows = points.len(), %from, %to, "converting batch");

    match row_conversion(from, to) {
        Some(row) => map_rows(points, row),
        None => points.to_vec(),
    }
}

/// Convert a single row between any two systems.
pub fn convert_point(point: Point3, from: CoordinateSystem, to: CoordinateSystem) -> Point3 {
    row_conversion(from, to).map_or(point, |row| row(point))
}
