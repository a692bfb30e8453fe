/// A face bounding box as returned by the detection service.
///
/// Pixel-space, axis-aligned, relative to the source image's pixel grid.
/// Values are carried exactly as received: no coordinate transform and no
/// clamping to the image bounds happens at detection time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaceRegion {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

impl FaceRegion {
    pub fn new(left: u32, top: u32, width: u32, height: u32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Intersection with an `image_width` x `image_height` pixel grid.
    ///
    /// Returns `None` for zero-area regions and regions entirely outside
    /// the image. The blur stage uses this for safe indexing; the region
    /// itself stays unmodified.
    pub fn clamped(&self, image_width: u32, image_height: u32) -> Option<FaceRegion> {
        if self.left >= image_width || self.top >= image_height {
            return None;
        }
        let width = self.width.min(image_width - self.left);
        let height = self.height.min(image_height - self.top);
        if width == 0 || height == 0 {
            return None;
        }
        Some(FaceRegion {
            left: self.left,
            top: self.top,
            width,
            height,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_clamped_inside_is_unchanged() {
        let r = FaceRegion::new(10, 20, 30, 40);
        assert_eq!(r.clamped(100, 100), Some(r));
    }

    #[test]
    fn test_clamped_touching_right_edge() {
        let r = FaceRegion::new(70, 0, 30, 10);
        assert_eq!(r.clamped(100, 100), Some(r));
    }

    #[test]
    fn test_clamped_overhanging_right_and_bottom() {
        let r = FaceRegion::new(90, 95, 30, 30);
        assert_eq!(r.clamped(100, 100), Some(FaceRegion::new(90, 95, 10, 5)));
    }

    #[rstest]
    #[case::past_right_edge(FaceRegion::new(100, 0, 10, 10))]
    #[case::past_bottom_edge(FaceRegion::new(0, 100, 10, 10))]
    #[case::zero_width(FaceRegion::new(10, 10, 0, 10))]
    #[case::zero_height(FaceRegion::new(10, 10, 10, 0))]
    fn test_clamped_degenerate_is_none(#[case] region: FaceRegion) {
        assert_eq!(region.clamped(100, 100), None);
    }
}
