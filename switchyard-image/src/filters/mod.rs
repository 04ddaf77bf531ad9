//! Neighbourhood filters.

pub mod rank;

use crate::image::Image;

/// Visit the in-bounds neighbours of `(x, y)` within `radius`.
pub(crate) fn neighbourhood(
    image: &Image,
    x: usize,
    y: usize,
    radius: usize,
) -> impl Iterator<Item = f64> + '_ {
    let (x, y, r) = (x as isize, y as isize, radius as isize);
    (y - r..=y + r).flat_map(move |sy| (x - r..=x + r).filter_map(move |sx| image.try_get(sx, sy)))
}

/// Mean filter over a `size` x `size` window.
///
/// Pixels outside the image are ignored, so borders average fewer values.
/// A `size` of 0 or 1 returns the image unchanged.
///
/// # Errors
///
/// Only an installed backend that takes the call can fail.
#[switchyard::dispatchable]
pub fn uniform(image: Image, size: usize) -> Image {
    let radius = size / 2;
    let pixels = (0..image.height())
        .flat_map(|y| (0..image.width()).map(move |x| (x, y)))
        .map(|(x, y)| {
            let (sum, count) = neighbourhood(&image, x, y, radius)
                .fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
            sum / count as f64
        })
        .collect();
    image.with_pixels(pixels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_interior_mean() {
        let img = Image::from_fn(3, 3, |x, y| (y * 3 + x) as f64).unwrap();
        let out = uniform(img, 3).unwrap();
        assert_eq!(out.get(1, 1), 4.0);
        // (0 + 1 + 3 + 4) / 4
        assert_eq!(out.get(0, 0), 2.0);
    }

    #[test]
    fn test_uniform_size_one_is_identity() {
        let img = Image::from_fn(4, 2, |x, y| (x * y) as f64).unwrap();
        assert_eq!(uniform(img.clone(), 1).unwrap(), img);
        assert_eq!(uniform(img.clone(), 0).unwrap(), img);
    }

    #[test]
    fn test_neighbourhood_clips_to_bounds() {
        let img = Image::filled(5, 5, 1.0).unwrap();
        assert_eq!(neighbourhood(&img, 0, 0, 1).count(), 4);
        assert_eq!(neighbourhood(&img, 2, 2, 1).count(), 9);
        assert_eq!(neighbourhood(&img, 4, 2, 2).count(), 15);
    }
}
