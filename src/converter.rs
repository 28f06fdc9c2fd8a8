//! Conversion pipeline
//!
//! [`BeaconConverter`] runs the whole job in strict sequence:
//!
//! 1. **Read**: the input log is read into memory in one call
//! 2. **Parse & group**: every non-blank line becomes a [`Position`] appended to
//!    the [`Beacon`] of its ICCID
//! 3. **Render**: beacons are encoded as a 2-space indented JSON array
//! 4. **Write**: the output file is overwritten in one call
//!
//! Nothing is written unless the read and the encoding both succeed.
//!
//! ```rust,no_run
//! use beacon_convert::converter::BeaconConverter;
//!
//! # fn example() -> Result<(), beacon_convert::error::ConvertError> {
//! let summary = BeaconConverter::default().convert()?;
//! println!("{} beacons", summary.beacons);
//! # Ok(())
//! # }
//! ```
//!
//! [`Position`]: crate::models::Position

use crate::error::ConvertError;
use crate::grouper::BeaconGrouper;
use crate::models::Beacon;
use crate::parser::FileParser;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, info_span};
use uuid::Uuid;

/// Input log, relative to the working directory.
pub const DEFAULT_INPUT_PATH: &str = "classified_timestamps_with_location.txt";

/// Output file, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "beacons.json";

/// What a finished conversion produced
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionSummary {
    pub output_path: PathBuf,
    pub beacons: usize,
    pub positions: usize,
}

pub struct BeaconConverter {
    input_path: PathBuf,
    output_path: PathBuf,
    parser: FileParser,
}

impl Default for BeaconConverter {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH)
    }
}

impl BeaconConverter {
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            parser: FileParser::new(),
        }
    }

    pub fn input_path(&self) -> &Path {
        &self.input_path
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Read and group the input without writing anything.
    pub fn parse_beacons(&self) -> Result<Vec<Beacon>, ConvertError> {
        self.parser
            .process_file(&self.input_path, BeaconGrouper::new())
    }

    pub fn convert(&self) -> Result<ConversionSummary, ConvertError> {
        let run_id = Uuid::new_v4();
        let span = info_span!(
            "convert",
            run_id = %run_id,
            input = %self.input_path.display(),
            output = %self.output_path.display()
        );
        let _enter = span.enter();

        let beacons = self.parse_beacons()?;
        let json = render_beacons(&beacons)?;

        fs::write(&self.output_path, json).map_err(|source| ConvertError::OutputUnwritable {
            path: self.output_path.clone(),
            source,
        })?;

        let summary = ConversionSummary {
            output_path: self.output_path.clone(),
            beacons: beacons.len(),
            positions: beacons.iter().map(|b| b.positions.len()).sum(),
        };

        info!(
            beacons = summary.beacons,
            positions = summary.positions,
            "Conversion finished"
        );

        Ok(summary)
    }
}

/// Encode beacons exactly as they are written to disk: a JSON array with
/// 2-space indentation and no trailing newline.
pub fn render_beacons(beacons: &[Beacon]) -> Result<String, ConvertError> {
    Ok(serde_json::to_string_pretty(beacons)?)
}
