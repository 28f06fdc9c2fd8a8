use std::io;
use std::path::PathBuf;

/// Failures of a conversion run. Malformed input lines are never an error.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("cannot read input file {}", .path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot write output file {}", .path.display())]
    OutputUnwritable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to encode beacons as JSON")]
    Serialize(#[from] serde_json::Error),
}
