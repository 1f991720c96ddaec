// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The single error type shared by the engine, the renderer, and the
//! image writer.

use failure::Fail;
use std::io;

/// Everything that can go wrong between configuring a viewport and
/// writing the finished raster to disk.  The per-pixel loop itself
/// never fails; all of these are caught at a boundary before or after
/// it runs.
#[derive(Debug, Fail)]
pub enum FractalError {
    /// A zoom factor that is zero, negative, or not a finite number.
    #[fail(display = "zoom must be a positive, finite number (got {})", _0)]
    InvalidZoom(f64),

    /// A pan offset that is not finite, or that would collapse the
    /// visible region.
    #[fail(display = "offset ({}, {}) does not produce a usable viewport", re, im)]
    InvalidOffset {
        /// Requested horizontal offset.
        re: f64,
        /// Requested vertical offset.
        im: f64,
    },

    /// A fixed point with a non-finite coordinate.
    #[fail(display = "fixed point ({}, {}) is not finite", re, im)]
    InvalidFixedPoint {
        /// Requested real part.
        re: f64,
        /// Requested imaginary part.
        im: f64,
    },

    /// Derived plane bounds that are not finite or not strictly ordered.
    #[fail(display = "{}", _0)]
    DegenerateBounds(String),

    /// A raster with no pixels, or one too large to address.
    #[fail(display = "invalid raster dimensions {}x{}", _0, _1)]
    InvalidDimensions(usize, usize),

    /// An iteration cap of zero.
    #[fail(display = "the iteration limit must be at least 1")]
    InvalidIterations,

    /// The raster buffer could not be allocated.
    #[fail(display = "could not allocate a raster of {} bytes", _0)]
    Allocation(usize),

    /// The render pass was cancelled before every row was written.
    #[fail(display = "render cancelled")]
    Cancelled,

    /// A worker thread panicked during the render pass.
    #[fail(display = "a render worker panicked")]
    WorkerPanicked,

    /// The output file extension names no supported image format.
    #[fail(display = "unsupported output format: {}", _0)]
    UnsupportedFormat(String),

    /// Writing the output file failed.
    #[fail(display = "{}", _0)]
    Io(#[fail(cause)] io::Error),
}

impl From<io::Error> for FractalError {
    fn from(err: io::Error) -> Self {
        FractalError::Io(err)
    }
}
