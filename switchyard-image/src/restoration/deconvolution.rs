use crate::{image::Image, signal::convolve_same};

/// Guards the division in each Richardson-Lucy update.
const EPS: f64 = 1e-12;

/// Parameters for [`richardson_lucy`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RichardsonLucy {
    /// Number of iterations.
    pub num_iter: usize,
    /// Clip the estimate to `[-1, 1]` after every iteration.
    pub clip: bool,
    /// Treat relative blur values below this threshold as zero.
    pub filter_epsilon: Option<f64>,
}

impl Default for RichardsonLucy {
    fn default() -> Self {
        Self {
            num_iter: 50,
            clip: true,
            filter_epsilon: None,
        }
    }
}

impl RichardsonLucy {
    /// Default options with `num_iter` iterations.
    pub fn iterations(num_iter: usize) -> Self {
        Self {
            num_iter,
            ..Self::default()
        }
    }
}

/// Richardson-Lucy deconvolution of `image` blurred by `psf`.
///
/// Starts from a flat estimate of `0.5` and refines it `options.num_iter`
/// times.
///
/// # Errors
///
/// Only an installed backend that takes the call can fail.
#[switchyard::dispatchable]
pub fn richardson_lucy(image: Image, psf: Image, options: RichardsonLucy) -> Image {
    let mirrored = psf.flipped();
    let mut estimate = image.map(|_| 0.5);

    for _ in 0..options.num_iter {
        let blurred = convolve_same(&estimate, &psf).map(|v| v + EPS);
        let relative = match options.filter_epsilon {
            Some(threshold) => {
                image.zip_map(&blurred, |i, c| if c < threshold { 0.0 } else { i / c })
            }
            None => image.zip_map(&blurred, |i, c| i / c),
        };
        let correction = convolve_same(&relative, &mirrored);
        estimate = estimate.zip_map(&correction, |e, c| e * c);
    }

    if options.clip {
        estimate = estimate.map(|v| v.clamp(-1.0, 1.0));
    }
    estimate
}
