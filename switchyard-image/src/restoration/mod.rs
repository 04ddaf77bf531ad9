//! Image restoration.

mod deconvolution;

pub use deconvolution::{RichardsonLucy, richardson_lucy};
