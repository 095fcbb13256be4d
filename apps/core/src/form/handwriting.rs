//! Handwriting detection over scanned form images.
//!
//! Handwritten strokes produce a much higher edge-density than printed text
//! on the same scanner settings, so the flag is the variance of the image's
//! Laplacian compared against a fixed threshold. Any load failure yields
//! `false`, never an error.

use std::path::Path;

use image::GrayImage;
use tracing::debug;

/// True iff the grayscale Laplacian variance of the image exceeds the
/// threshold. Unreadable or missing images are reported as not handwritten.
pub fn detect(path: &Path, threshold: f64) -> bool {
    let img = match image::open(path) {
        Ok(img) => img.to_luma8(),
        Err(err) => {
            debug!(error = %err, path = %path.display(), "handwriting check could not load image");
            return false;
        }
    };

    laplacian_variance(&img) > threshold
}

/// Population variance of the 4-neighbor Laplacian over interior pixels.
pub(crate) fn laplacian_variance(img: &GrayImage) -> f64 {
    let (width, height) = img.dimensions();
    if width < 3 || height < 3 {
        return 0.0;
    }

    let mut sum = 0.0f64;
    let mut sum_sq = 0.0f64;
    for y in 1..height - 1 {
        for x in 1..width - 1 {
            let center = f64::from(img.get_pixel(x, y)[0]);
            let response = f64::from(img.get_pixel(x - 1, y)[0])
                + f64::from(img.get_pixel(x + 1, y)[0])
                + f64::from(img.get_pixel(x, y - 1)[0])
                + f64::from(img.get_pixel(x, y + 1)[0])
                - 4.0 * center;
            sum += response;
            sum_sq += response * response;
        }
    }

    let n = interior_pixel_count(width, height);
    let mean = sum / n;
    sum_sq / n - mean * mean
}

/// Interior pixel count in `f64`; the product of two large dimensions can
/// exceed `u32`.
fn interior_pixel_count(width: u32, height: u32) -> f64 {
    f64::from(width - 2) * f64::from(height - 2)
}
