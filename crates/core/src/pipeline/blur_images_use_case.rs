use std::fs;
use std::io::{BufWriter, Write};

use image::codecs::jpeg::JpegEncoder;

use crate::blurring::box_blur;
use crate::error::FaceBlurError;
use crate::pipeline::output_path;
use crate::shared::constants::BLUR_RADIUS;
use crate::shared::image_task::ImageTask;

/// Blur stage: load each task's image, blur every face region, and write a
/// JPEG sibling file with a `-blur` suffix.
///
/// Overwrite semantics: a pre-existing output file is deleted first, last
/// run wins, no atomic replace. Regions are applied sequentially, so
/// overlapping rectangles blur cumulatively. The first failure aborts the
/// remaining batch; outputs already written are not rolled back.
pub struct BlurImagesUseCase {
    blur_radius: u32,
}

impl BlurImagesUseCase {
    pub fn new() -> Self {
        Self {
            blur_radius: BLUR_RADIUS,
        }
    }

    pub fn execute(&self, tasks: &[ImageTask]) -> Result<(), FaceBlurError> {
        for task in tasks {
            let output = output_path::derive(&task.path);
            log::info!("Blurring image {} ...", task.path.display());

            if output.exists() {
                fs::remove_file(&output).map_err(|e| FaceBlurError::FileWrite {
                    path: output.clone(),
                    source: e,
                })?;
            }

            let decoded = image::open(&task.path).map_err(|e| match e {
                image::ImageError::IoError(io) => FaceBlurError::FileAccess {
                    path: task.path.clone(),
                    source: io,
                },
                other => FaceBlurError::ImageDecode {
                    path: task.path.clone(),
                    source: other,
                },
            })?;
            let mut pixels = decoded.to_rgb8();

            for region in &task.face_regions {
                box_blur::blur_region(&mut pixels, region, self.blur_radius);
            }

            // Always JPEG bytes, whatever extension the output path carries
            let file = fs::File::create(&output).map_err(|e| FaceBlurError::FileWrite {
                path: output.clone(),
                source: e,
            })?;
            let mut writer = BufWriter::new(file);
            pixels
                .write_with_encoder(JpegEncoder::new(&mut writer))
                .map_err(|e| FaceBlurError::ImageEncode {
                    path: output.clone(),
                    source: e,
                })?;
            writer.flush().map_err(|e| FaceBlurError::FileWrite {
                path: output.clone(),
                source: e,
            })?;

            log::info!("Image blurred: {}", output.display());
        }

        Ok(())
    }
}

impl Default for BlurImagesUseCase {
    fn default() -> Self {
        Self::new()
    }
}
