//! Signal processing helpers.

use crate::image::Image;

/// 2-D convolution, output the same size as `image`, zero padded.
///
/// The output is centered with respect to the full convolution, as with
/// `mode = "same"` in common numeric libraries.
pub fn convolve_same(image: &Image, kernel: &Image) -> Image {
    let cx = (kernel.width() - 1) / 2;
    let cy = (kernel.height() - 1) / 2;

    let pixels = (0..image.height())
        .flat_map(|y| (0..image.width()).map(move |x| (x, y)))
        .map(|(x, y)| {
            let mut acc = 0.0;
            for ky in 0..kernel.height() {
                for kx in 0..kernel.width() {
                    let sx = (x + cx) as isize - kx as isize;
                    let sy = (y + cy) as isize - ky as isize;
                    if let Some(v) = image.try_get(sx, sy) {
                        acc += v * kernel.get(kx, ky);
                    }
                }
            }
            acc
        })
        .collect();

    image.with_pixels(pixels)
}
