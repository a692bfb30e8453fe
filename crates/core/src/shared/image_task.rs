use std::path::PathBuf;

use crate::shared::region::FaceRegion;

/// One input image together with the face regions detected in it.
///
/// Produced by the detection stage, one per input path and in input order;
/// the region order is whatever the service returned. Consumed and dropped
/// by the blur writer, never persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageTask {
    pub path: PathBuf,
    pub face_regions: Vec<FaceRegion>,
}

impl ImageTask {
    pub fn new(path: PathBuf, face_regions: Vec<FaceRegion>) -> Self {
        Self { path, face_regions }
    }
}
