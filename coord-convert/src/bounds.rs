/// Per-component bounds tracking for converted batches
use crate::constants::CONVERSION_CHUNK_SIZE;
use coord::Point3;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentBounds {
    pub min: Point3,
    pub max: Point3,
}

impl ComponentBounds {
    /// Create new bounds initialised to infinity values
    pub fn new() -> Self {
        Self {
            min: [f64::INFINITY; 3],
            max: [f64::NEG_INFINITY; 3],
        }
    }

    /// Update bounds with a new row
    pub fn update(&mut self, point: &Point3) {
        for (i, value) in point.iter().enumerate() {
            self.min[i] = self.min[i].min(*value);
            self.max[i] = self.max[i].max(*value);
        }
    }

    /// Widen these bounds to cover another set
    pub fn merge(mut self, other: Self) -> Self {
        self.update(&other.min);
        self.update(&other.max);
        self
    }

    /// Width of each component range
    pub fn extents(&self) -> Point3 {
        [
            self.max[0] - self.min[0],
            self.max[1] - self.min[1],
            self.max[2] - self.min[2],
        ]
    }

    /// Bounds of a whole batch, computed over parallel chunks.
    /// Returns `None` for an empty batch.
    pub fn from_points(points: &[Point3]) -> Option<Self> {
        points
            .par_chunks(CONVERSION_CHUNK_SIZE)
            .map(|chunk| {
                let mut local_bounds = ComponentBounds::new();
                for point in chunk {
                    local_bounds.update(point);
                }
                local_bounds
            })
            .reduce_with(ComponentBounds::merge)
    }
}
