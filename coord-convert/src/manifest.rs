/// Conversion manifest written alongside converted batches.
use crate::bounds::ComponentBounds;
use coord::{CoordinateSystem, Point3};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

/// Converted points together with the metadata needed to read them back.
#[derive(Debug, Serialize, Deserialize)]
pub struct ConversionManifest {
    /// System the input rows were expressed in.
    pub source: CoordinateSystem,
    /// System of `points`.
    pub target: CoordinateSystem,
    /// Component names of `target`, in row order.
    pub components: [String; 3],
    pub point_count: usize,
    /// Per-component range of `points`; absent for an empty batch.
    pub bounds: Option<ComponentBounds>,
    pub points: Vec<Point3>,
}

impl ConversionManifest {
    pub fn new(source: CoordinateSystem, target: CoordinateSystem, points: Vec<Point3>) -> Self {
        Self {
            source,
            target,
            components: target.component_names().map(String::from),
            point_count: points.len(),
            bounds: ComponentBounds::from_points(&points),
            points,
        }
    }

    /// Write the manifest as pretty-printed JSON.
    pub fn write(&self, manifest_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        let manifest_json = serde_json::to_string_pretty(self)?;
        fs::write(manifest_path, manifest_json)?;

        info!("Generated conversion manifest: {}", manifest_path.display());
        Ok(())
    }

    /// Log manifest summary for verification.
    pub fn log_summary(&self) {
        info!("Manifest Summary:");
        info!("  {} -> {}", self.source, self.target);
        info!("  Points: {}", self.point_count);

        match &self.bounds {
            Some(bounds) => {
                let extents = bounds.extents();
                for (i, name) in self.components.iter().enumerate() {
                    info!(
                        "  {}: {:.6} to {:.6} (span {:.6})",
                        name, bounds.min[i], bounds.max[i], extents[i]
                    );
                }
            }
            None => info!("  No points converted"),
        }
    }
}
