//! # switchyard-image
//!
//! A small grayscale image library whose public operations are dispatchable:
//! every call can be taken over by an installed switchyard backend.
//!
//! | Function | Target |
//! |----------|--------|
//! | [`restoration::richardson_lucy`] | `switchyard_image.restoration:richardson_lucy` |
//! | [`filters::uniform`] | `switchyard_image.filters:uniform` |
//! | [`filters::rank::median`] | `switchyard_image.filters.rank:median` |
//!
//! Because they are dispatchable, these functions return
//! `Result<_, switchyard::DispatchError>`; the error only ever comes from a
//! backend.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod image;

pub mod filters;
pub mod restoration;
pub mod signal;

pub use error::ImageError;
pub use image::Image;
