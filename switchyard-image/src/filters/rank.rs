//! Rank filters.
//!
//! Everything in this module keeps its full path as its public target, e.g.
//! `switchyard_image.filters.rank:median`.

use crate::image::Image;

use super::neighbourhood;

/// Median over the in-bounds pixels within `radius` of each pixel.
///
/// With an even number of neighbours the upper median is taken.
///
/// # Errors
///
/// Only an installed backend that takes the call can fail.
#[switchyard::dispatchable]
pub fn median(image: Image, radius: usize) -> Image {
    let mut window = Vec::with_capacity((2 * radius + 1).pow(2));
    let mut pixels = Vec::with_capacity(image.pixels().len());

    for y in 0..image.height() {
        for x in 0..image.width() {
            window.clear();
            window.extend(neighbourhood(&image, x, y, radius));
            window.sort_by(f64::total_cmp);
            pixels.push(window[window.len() / 2]);
        }
    }
    image.with_pixels(pixels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median_removes_impulse() {
        let img = Image::from_fn(5, 5, |x, y| if (x, y) == (2, 2) { 100.0 } else { 1.0 }).unwrap();
        let out = median(img, 1).unwrap();
        assert!(out.pixels().iter().all(|&v| v == 1.0));
    }

    #[test]
    fn test_median_radius_zero_is_identity() {
        let img = Image::from_fn(3, 2, |x, y| (x + 7 * y) as f64).unwrap();
        assert_eq!(median(img.clone(), 0).unwrap(), img);
    }

    #[test]
    fn test_median_upper_at_corner() {
        // Corner window holds 1, 2, 4, 5.
        let img = Image::from_fn(3, 3, |x, y| (y * 3 + x + 1) as f64).unwrap();
        let out = median(img, 1).unwrap();
        assert_eq!(out.get(0, 0), 4.0);
        assert_eq!(out.get(1, 1), 5.0);
    }
}
