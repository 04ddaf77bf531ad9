use crate::error::ImageError;

/// A grayscale image of `f64` pixels, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    width: usize,
    height: usize,
    pixels: Vec<f64>,
}

impl Image {
    /// Create an image from a row-major pixel buffer.
    pub fn new(width: usize, height: usize, pixels: Vec<f64>) -> Result<Self, ImageError> {
        let expected = pixel_count(width, height)?;
        if pixels.len() != expected {
            return Err(ImageError::ShapeMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create an image with every pixel set to `value`.
    pub fn filled(width: usize, height: usize, value: f64) -> Result<Self, ImageError> {
        let len = pixel_count(width, height)?;
        Self::new(width, height, vec![value; len])
    }

    /// Create an image from a function of `(x, y)`.
    pub fn from_fn(
        width: usize,
        height: usize,
        f: impl Fn(usize, usize) -> f64,
    ) -> Result<Self, ImageError> {
        pixel_count(width, height)?;
        let pixels = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| f(x, y))
            .collect();
        Self::new(width, height, pixels)
    }

    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major pixel buffer.
    pub fn pixels(&self) -> &[f64] {
        &self.pixels
    }

    /// Pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    pub fn get(&self, x: usize, y: usize) -> f64 {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        self.pixels[y * self.width + x]
    }

    /// Pixel at `(x, y)`, or `None` outside the image.
    pub fn try_get(&self, x: isize, y: isize) -> Option<f64> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        (x < self.width && y < self.height).then(|| self.pixels[y * self.width + x])
    }

    /// Largest pixel value.
    pub fn max(&self) -> f64 {
        self.pixels.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Smallest pixel value.
    pub fn min(&self) -> f64 {
        self.pixels.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Sum of all pixels.
    pub fn sum(&self) -> f64 {
        self.pixels.iter().sum()
    }

    /// Apply `f` to every pixel.
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            width: self.width,
            height: self.height,
            pixels: self.pixels.iter().copied().map(f).collect(),
        }
    }

    /// Combine two images of the same shape pixel by pixel.
    ///
    /// # Panics
    ///
    /// Panics if the shapes differ.
    pub fn zip_map(&self, other: &Image, f: impl Fn(f64, f64) -> f64) -> Self {
        assert_eq!(
            (self.width, self.height),
            (other.width, other.height),
            "image shapes differ"
        );
        Self {
            width: self.width,
            height: self.height,
            pixels: self
                .pixels
                .iter()
                .zip(&other.pixels)
                .map(|(&a, &b)| f(a, b))
                .collect(),
        }
    }

    /// An image of the same shape with new pixels.
    pub(crate) fn with_pixels(&self, pixels: Vec<f64>) -> Self {
        debug_assert_eq!(pixels.len(), self.pixels.len());
        Self {
            width: self.width,
            height: self.height,
            pixels,
        }
    }

    /// The image rotated by 180 degrees.
    pub fn flipped(&self) -> Self {
        let mut pixels = self.pixels.clone();
        pixels.reverse();
        Self {
            width: self.width,
            height: self.height,
            pixels,
        }
    }
}

/// Number of pixels of a `width` x `height` image.
fn pixel_count(width: usize, height: usize) -> Result<usize, ImageError> {
    if width == 0 || height == 0 {
        return Err(ImageError::Empty { width, height });
    }
    width
        .checked_mul(height)
        .ok_or(ImageError::TooLarge { width, height })
}
