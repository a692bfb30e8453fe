use crate::error::FaceBlurError;
use crate::shared::region::FaceRegion;

/// Domain interface for face detection.
///
/// Takes the raw encoded bytes of one image and returns the bounding box of
/// every face found, in the order the backing service reports them. This is
/// the seam where the remote service is swapped for a stub in tests.
pub trait FaceDetector {
    fn detect(&self, image_bytes: &[u8]) -> Result<Vec<FaceRegion>, FaceBlurError>;
}
