//! Blur a synthetic scene with a 5x5 box PSF and restore it with 30
//! Richardson-Lucy iterations.
//!
//! The blurred input is noise-free: no Poisson noise is added before
//! restoring. It is normalised to a maximum of 1, as float images are
//! expected to lie in `[-1, 1]`.
//!
//! ```text
//! cargo run -p switchyard-image --example deconvolution
//! ```

use switchyard_image::{
    Image,
    restoration::{RichardsonLucy, richardson_lucy},
    signal::convolve_same,
};

fn mean_abs_error(a: &Image, b: &Image) -> f64 {
    a.zip_map(b, |x, y| (x - y).abs()).sum() / a.pixels().len() as f64
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let truth = Image::from_fn(32, 32, |x, y| {
        let ring = ((x as f64 - 16.0).powi(2) + (y as f64 - 16.0).powi(2)).sqrt();
        if (6.0..10.0).contains(&ring) { 0.9 } else { 0.1 }
    })?;
    let psf = Image::filled(5, 5, 1.0 / 25.0)?;
    let blurred = convolve_same(&truth, &psf);
    let peak = blurred.max();
    let blurred = blurred.map(|v| v / peak);
    let truth = truth.map(|v| v / peak);

    let restored = richardson_lucy(blurred.clone(), psf, RichardsonLucy::iterations(30))?;

    println!("blurred  error: {:.4}", mean_abs_error(&blurred, &truth));
    println!("restored error: {:.4}", mean_abs_error(&restored, &truth));
    Ok(())
}
