//! Batch conversion between Cartesian, spherical and cylindrical coordinates.
//!
//! Every conversion takes an ordered batch of `[f64; 3]` rows and returns a
//! freshly allocated batch of the same length, where output row `i` depends
//! only on input row `i`. Angles are in radians throughout.
//!
//! | System      | Row layout                                   |
//! |-------------|----------------------------------------------|
//! | Cartesian   | `(x, y, z)`                                  |
//! | Spherical   | `(r, theta, phi)`: azimuth, then zenith      |
//! | Cylindrical | `(r, theta, z)`: radius from the z-axis      |
//!
//! Degenerate input such as the origin is not an error: results follow the
//! IEEE-754 behaviour of `sqrt`, `atan2`, `sin` and `cos`. The only rejected
//! input is untyped data of the wrong shape, see [`shape`].

pub mod constants;
pub mod convert;
pub mod coordinate_system;
pub mod shape;

pub use convert::{
    RowConversion, cartesian_to_cylindrical, cartesian_to_spherical, convert, convert_point,
    cylindrical_to_cartesian, cylindrical_to_spherical, row_conversion, spherical_to_cartesian,
    spherical_to_cylindrical,
};
pub use coordinate_system::{CoordinateSystem, ParseSystemError, Point3};
pub use shape::{ShapeError, flatten, rows_from_flat, rows_from_nested};
