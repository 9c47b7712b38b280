/// Coordinate system tags and the per-row conversion formulas
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One coordinate row: `(x, y, z)`, `(r, theta, phi)` or `(r, theta, z)`.
pub type Point3 = [f64; 3];

/// The three supported representations of a point in 3D space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordinateSystem {
    /// `(x, y, z)` along three orthogonal axes.
    #[serde(alias = "cart")]
    Cartesian,
    /// `(r, theta, phi)`: radial distance, azimuth from +x, zenith from +z.
    #[serde(alias = "sph")]
    Spherical,
    /// `(r, theta, z)`: distance from the z-axis, azimuth from +x, height.
    #[serde(alias = "cyl")]
    Cylindrical,
}

impl CoordinateSystem {
    pub const ALL: [CoordinateSystem; 3] = [
        CoordinateSystem::Cartesian,
        CoordinateSystem::Spherical,
        CoordinateSystem::Cylindrical,
    ];

    /// Lowercase name used on the command line and in JSON.
    pub fn name(self) -> &'static str {
        match self {
            CoordinateSystem::Cartesian => "cartesian",
            CoordinateSystem::Spherical => "spherical",
            CoordinateSystem::Cylindrical => "cylindrical",
        }
    }

    /// Component names in row order.
    pub fn component_names(self) -> [&'static str; 3] {
        match self {
            CoordinateSystem::Cartesian => ["x", "y", "z"],
            CoordinateSystem::Spherical => ["r", "theta", "phi"],
            CoordinateSystem::Cylindrical => ["r", "theta", "z"],
        }
    }
}

impl fmt::Display for CoordinateSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a name matches none of the coordinate systems.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown coordinate system '{0}' (expected cartesian, spherical or cylindrical)")]
pub struct ParseSystemError(pub String);

impl FromStr for CoordinateSystem {
    type Err = ParseSystemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cartesian" | "cart" => Ok(CoordinateSystem::Cartesian),
            "spherical" | "sph" => Ok(CoordinateSystem::Spherical),
            "cylindrical" | "cyl" => Ok(CoordinateSystem::Cylindrical),
            _ => Err(ParseSystemError(s.to_string())),
        }
    }
}

/// Cartesian `(x, y, z)` to spherical `(r, theta, phi)`.
/// Zenith comes from `atan2(hypot(x, y), z)`, which stays accurate near the poles.
pub fn cartesian_to_spherical_point([x, y, z]: Point3) -> Point3 {
    let xy_sq = x * x + y * y;
    [(xy_sq + z * z).sqrt(), y.atan2(x), xy_sq.sqrt().atan2(z)]
}

/// Spherical `(r, theta, phi)` to Cartesian `(x, y, z)`.
pub fn spherical_to_cartesian_point([r, theta, phi]: Point3) -> Point3 {
    let (sin_theta, cos_theta) = theta.sin_cos();
    let (sin_phi, cos_phi) = phi.sin_cos();
    [
        r * cos_theta * sin_phi,
        r * sin_theta * sin_phi,
        r * cos_phi,
    ]
}

/// Spherical `(r, theta, phi)` to cylindrical `(r, theta, z)`.
pub fn spherical_to_cylindrical_point([r, theta, phi]: Point3) -> Point3 {
    let (sin_phi, cos_phi) = phi.sin_cos();
    [r * sin_phi, theta, r * cos_phi]
}

/// Cylindrical `(r, theta, z)` to spherical `(r, theta, phi)`.
pub fn cylindrical_to_spherical_point([r, theta, z]: Point3) -> Point3 {
    [(r * r + z * z).sqrt(), theta, r.atan2(z)]
}

/// Cartesian `(x, y, z)` to cylindrical `(r, theta, z)`.
pub fn cartesian_to_cylindrical_point([x, y, z]: Point3) -> Point3 {
    [(x * x + y * y).sqrt(), y.atan2(x), z]
}

/// Cylindrical `(r, theta, z)` to Cartesian `(x, y, z)`.
pub fn cylindrical_to_cartesian_point([r, theta, z]: Point3) -> Point3 {
    let (sin_theta, cos_theta) = theta.sin_cos();
    [r * cos_theta, r * sin_theta, z]
}
