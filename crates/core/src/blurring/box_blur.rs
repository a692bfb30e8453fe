use image::RgbImage;

use crate::shared::region::FaceRegion;

const CHANNELS: usize = 3;

/// Box-blurs one rectangular region of an RGB image in place.
///
/// The region is intersected with the image bounds first; zero-area and
/// fully off-image regions are skipped. All samples come from inside the
/// region (replicated at its edges), so pixels outside it never change.
pub fn blur_region(image: &mut RgbImage, region: &FaceRegion, radius: u32) {
    if radius == 0 {
        return;
    }
    let Some(clamped) = region.clamped(image.width(), image.height()) else {
        return;
    };

    let rx = clamped.left as usize;
    let ry = clamped.top as usize;
    let rw = clamped.width as usize;
    let rh = clamped.height as usize;
    let stride = image.width() as usize * CHANNELS;
    let data: &mut [u8] = &mut **image;

    // Extract the ROI into a contiguous buffer
    let mut roi = vec![0u8; rw * rh * CHANNELS];
    for row in 0..rh {
        let src = (ry + row) * stride + rx * CHANNELS;
        let dst = row * rw * CHANNELS;
        roi[dst..dst + rw * CHANNELS].copy_from_slice(&data[src..src + rw * CHANNELS]);
    }

    box_blur_buffer(&mut roi, rw, rh, radius as usize);

    // Write the blurred ROI back
    for row in 0..rh {
        let dst = (ry + row) * stride + rx * CHANNELS;
        let src = row * rw * CHANNELS;
        data[dst..dst + rw * CHANNELS].copy_from_slice(&roi[src..src + rw * CHANNELS]);
    }
}

/// Separable box filter: horizontal mean pass into a temp buffer, then a
/// vertical mean pass back into `data`. Sample coordinates are clamped to
/// the buffer edges (border replication).
fn box_blur_buffer(data: &mut [u8], width: usize, height: usize, radius: usize) {
    if width == 0 || height == 0 {
        return;
    }
    let window = (2 * radius + 1) as f32;
    let mut temp = vec![0f32; data.len()];

    // Horizontal pass: data → temp
    for y in 0..height {
        for x in 0..width {
            for c in 0..CHANNELS {
                let mut sum = 0.0f32;
                for k in 0..(2 * radius + 1) {
                    let sx = (x as isize + k as isize - radius as isize)
                        .max(0)
                        .min((width - 1) as isize) as usize;
                    sum += data[(y * width + sx) * CHANNELS + c] as f32;
                }
                temp[(y * width + x) * CHANNELS + c] = sum / window;
            }
        }
    }

    // Vertical pass: temp → data
    for y in 0..height {
        for x in 0..width {
            for c in 0..CHANNELS {
                let mut sum = 0.0f32;
                for k in 0..(2 * radius + 1) {
                    let sy = (y as isize + k as isize - radius as isize)
                        .max(0)
                        .min((height - 1) as isize) as usize;
                    sum += temp[(sy * width + x) * CHANNELS + c];
                }
                data[(y * width + x) * CHANNELS + c] = (sum / window).round() as u8;
            }
        }
    }
}
