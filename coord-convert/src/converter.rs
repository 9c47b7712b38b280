/// Batch converter orchestrating input loading, conversion and manifest output.
use crate::constants::{CONVERSION_CHUNK_SIZE, PROGRESS_CHARS, PROGRESS_TEMPLATE};
use crate::input::read_input;
use crate::manifest::ConversionManifest;
use coord::{CoordinateSystem, Point3, rows_from_nested};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use tracing::info;

/// Converts one JSON point batch file into a manifest in the target system.
pub struct BatchConverter {
    /// Input batch file path.
    input_path: PathBuf,
    /// Manifest destination.
    output_path: PathBuf,
    /// Source system given on the command line; falls back to the file's own tag.
    source: Option<CoordinateSystem>,
    target: CoordinateSystem,
}

impl BatchConverter {
    /// Create new converter instance for a single input file.
    /// Derives the output path from the input when none is given.
    pub fn new(
        input_path: &Path,
        source: Option<CoordinateSystem>,
        target: CoordinateSystem,
        output_path: Option<&Path>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        if !input_path.is_file() {
            return Err(format!("Input file does not exist: {}", input_path.display()).into());
        }

        let output_path = match output_path {
            Some(path) => path.to_path_buf(),
            None => default_output_path(input_path, target),
        };

        Ok(Self {
            input_path: input_path.to_path_buf(),
            output_path,
            source,
            target,
        })
    }

    /// Executes the full pipeline: read, shape check, convert, write manifest.
    pub fn convert(&self) -> Result<ConversionManifest, Box<dyn std::error::Error>> {
        info!("Reading {}", self.input_path.display());
        let input = read_input(&self.input_path)?;

        let source = self.source.or(input.system).ok_or(
            "Source coordinate system unknown: pass --from or set \"system\" in the input file",
        )?;

        // Reject the whole batch before converting anything.
        let points = rows_from_nested(&input.points)?;

        info!(
            "Converting {} points from {} to {}",
            points.len(),
            source,
            self.target
        );
        let converted = self.convert_points(&points, source)?;

        // JSON has no representation for NaN or infinity.
        if let Some(row) = first_non_finite_row(&converted) {
            return Err(format!(
                "Row {} converts to non-finite values {:?}; no manifest written",
                row, converted[row]
            )
            .into());
        }

        let manifest = ConversionManifest::new(source, self.target, converted);
        manifest.write(&self.output_path)?;
        manifest.log_summary();

        Ok(manifest)
    }

    /// Convert rows chunk by chunk with progress tracking.
    fn convert_points(
        &self,
        points: &[Point3],
        source: CoordinateSystem,
    ) -> Result<Vec<Point3>, Box<dyn std::error::Error>> {
        let pb = ProgressBar::new(points.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(PROGRESS_TEMPLATE)?
                .progress_chars(PROGRESS_CHARS),
        );
        pb.set_message("Converting points");

        let mut converted = Vec::with_capacity(points.len());
        for chunk in points.chunks(CONVERSION_CHUNK_SIZE) {
            converted.extend(coord::convert(chunk, source, self.target));
            pb.inc(chunk.len() as u64);
        }

        pb.finish_with_message("Points converted");
        Ok(converted)
    }
}

/// Index of the first row holding a NaN or infinite component.
fn first_non_finite_row(points: &[Point3]) -> Option<usize> {
    points
        .iter()
        .position(|point| point.iter().any(|value| !value.is_finite()))
}

/// `<stem>_<target>.json` in the input's directory.
fn default_output_path(input_path: &Path, target: CoordinateSystem) -> PathBuf {
    let stem = input_path
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();

    input_path
        .parent()
        .unwrap_or(Path::new("."))
        .join(format!("{}_{}.json", stem, target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    /// Fresh scratch directory per test under the system temp dir.
    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "coord-convert-{}-{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_default_output_path() {
        let path = default_output_path(Path::new("data/scan.json"), CoordinateSystem::Spherical);
        assert_eq!(path, PathBuf::from("data/scan_spherical.json"));
    }

    #[test]
    fn test_missing_input_is_rejected() {
        let dir = scratch_dir("missing");
        let result = BatchConverter::new(
            &dir.join("absent.json"),
            Some(CoordinateSystem::Cartesian),
            CoordinateSystem::Spherical,
            None,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_converts_file_and_writes_manifest() {
        let dir = scratch_dir("convert");
        let input_path = dir.join("points.json");
        fs::write(&input_path, "[[1.32, 5.21, 6.26], [0, 0, 0]]").unwrap();

        let converter = BatchConverter::new(
            &input_path,
            Some(CoordinateSystem::Cartesian),
            CoordinateSystem::Cylindrical,
            None,
        )
        .unwrap();
        let manifest = converter.convert().unwrap();

        assert_eq!(manifest.point_count, 2);
        assert!((manifest.points[0][0] - 5.374616).abs() < 1e-6);
        assert!((manifest.points[0][1] - 1.322659).abs() < 1e-6);
        assert_eq!(manifest.points[0][2], 6.26);
        assert_eq!(manifest.points[1], [0.0, 0.0, 0.0]);

        let written = fs::read_to_string(dir.join("points_cylindrical.json")).unwrap();
        let reread: ConversionManifest = serde_json::from_str(&written).unwrap();
        assert_eq!(reread.source, CoordinateSystem::Cartesian);
        assert_eq!(reread.points, manifest.points);
    }

    #[test]
    fn test_source_system_from_file_tag() {
        let dir = scratch_dir("tagged");
        let input_path = dir.join("tagged.json");
        let output_path = dir.join("out.json");
        fs::write(
            &input_path,
            r#"{"system": "cylindrical", "points": [[2.0, 0.0, -1.0]]}"#,
        )
        .unwrap();

        let converter = BatchConverter::new(
            &input_path,
            None,
            CoordinateSystem::Cartesian,
            Some(&output_path),
        )
        .unwrap();
        let manifest = converter.convert().unwrap();

        assert_eq!(manifest.source, CoordinateSystem::Cylindrical);
        assert_eq!(manifest.points, vec![[2.0, 0.0, -1.0]]);
        assert!(output_path.is_file());
    }

    #[test]
    fn test_unknown_source_system_fails() {
        let dir = scratch_dir("untagged");
        let input_path = dir.join("rows.json");
        fs::write(&input_path, "[[1, 2, 3]]").unwrap();

        let converter =
            BatchConverter::new(&input_path, None, CoordinateSystem::Spherical, None).unwrap();
        assert!(converter.convert().is_err());
    }

    #[test]
    fn test_first_non_finite_row() {
        assert_eq!(first_non_finite_row(&[]), None);
        assert_eq!(first_non_finite_row(&[[1.0, 2.0, 3.0]]), None);
        let points = [
            [1.0, 2.0, 3.0],
            [0.0, f64::NAN, 0.0],
            [f64::INFINITY, 0.0, 0.0],
        ];
        assert_eq!(first_non_finite_row(&points), Some(1));
    }

    #[test]
    fn test_overflowing_row_writes_no_manifest() {
        let dir = scratch_dir("overflow");
        let input_path = dir.join("huge.json");
        fs::write(&input_path, "[[1.0, 2.0, 3.0], [1e200, 0, 0]]").unwrap();

        let converter = BatchConverter::new(
            &input_path,
            Some(CoordinateSystem::Cartesian),
            CoordinateSystem::Spherical,
            None,
        )
        .unwrap();
        let err = converter.convert().unwrap_err();

        assert!(err.to_string().starts_with("Row 1 converts to non-finite values"));
        assert!(!dir.join("huge_spherical.json").exists());
    }

    #[test]
    fn test_malformed_row_converts_nothing() {
        let dir = scratch_dir("malformed");
        let input_path = dir.join("bad.json");
        fs::write(&input_path, "[[1, 2, 3], [4, 5]]").unwrap();

        let converter = BatchConverter::new(
            &input_path,
            Some(CoordinateSystem::Cartesian),
            CoordinateSystem::Spherical,
            None,
        )
        .unwrap();
        let err = converter.convert().unwrap_err();

        assert_eq!(err.to_string(), "row 1 has 2 components, expected 3");
        assert!(!dir.join("bad_spherical.json").exists());
    }
}
