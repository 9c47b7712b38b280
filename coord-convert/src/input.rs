/// JSON input loading for point batches
use coord::CoordinateSystem;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Accepted input layouts: a bare array of rows, or rows tagged with their system.
#[derive(Deserialize)]
#[serde(untagged)]
enum InputDocument {
    Rows(Vec<Vec<f64>>),
    Tagged {
        #[serde(default)]
        system: Option<CoordinateSystem>,
        points: Vec<Vec<f64>>,
    },
}

/// Raw rows read from disk, before shape checking.
#[derive(Debug, PartialEq)]
pub struct InputBatch {
    /// System named by the file itself, if any.
    pub system: Option<CoordinateSystem>,
    pub points: Vec<Vec<f64>>,
}

/// Parse either accepted JSON layout.
pub fn parse_input(text: &str) -> Result<InputBatch, serde_json::Error> {
    let batch = match serde_json::from_str(text)? {
        InputDocument::Rows(points) => InputBatch {
            system: None,
            points,
        },
        InputDocument::Tagged { system, points } => InputBatch { system, points },
    };

    Ok(batch)
}

/// Read and parse a point batch file.
pub fn read_input(file_path: &Path) -> Result<InputBatch, Box<dyn std::error::Error>> {
    let text = fs::read_to_string(file_path)?;
    Ok(parse_input(&text)?)
}
