use std::path::PathBuf;

use thiserror::Error;

/// Failure taxonomy for a blurring run.
///
/// None of these are caught or retried inside the library: the first error
/// aborts the remaining batch and surfaces to the caller. Outputs already
/// written for earlier inputs stay on disk.
#[derive(Error, Debug)]
pub enum FaceBlurError {
    #[error("invalid configuration: {0}")]
    Configuration(String),

    #[error("cannot read input file {path}: {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("face detection service call failed: {reason}")]
    DetectionService {
        reason: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    #[error("cannot decode image {path}: {source}")]
    ImageDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("cannot encode image {path}: {source}")]
    ImageEncode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("cannot write output file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
