use std::fs;
use std::path::PathBuf;

use crate::detection::domain::face_detector::FaceDetector;
use crate::error::FaceBlurError;
use crate::shared::image_task::ImageTask;

/// Detection stage: read each input file, submit it to the detector, and
/// collect the resulting face regions.
///
/// Strictly sequential: one file is fully read and detected before the next
/// is touched, and the first failure aborts the whole run. Task order
/// matches input order.
pub struct DetectFacesUseCase {
    detector: Box<dyn FaceDetector>,
}

impl DetectFacesUseCase {
    pub fn new(detector: Box<dyn FaceDetector>) -> Self {
        Self { detector }
    }

    pub fn execute(&self, paths: &[PathBuf]) -> Result<Vec<ImageTask>, FaceBlurError> {
        let mut tasks = Vec::with_capacity(paths.len());

        for path in paths {
            let bytes = fs::read(path).map_err(|e| FaceBlurError::FileAccess {
                path: path.clone(),
                source: e,
            })?;

            let regions = self.detector.detect(&bytes)?;
            log::info!(
                "{} faces detected in the image {}",
                regions.len(),
                path.display()
            );

            tasks.push(ImageTask::new(path.clone(), regions));
        }

        Ok(tasks)
    }
}
