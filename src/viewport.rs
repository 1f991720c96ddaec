// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The viewport decides which piece of the complex plane lands on the
//! raster.  It is three numbers: a zoom factor, a pan offset, and a
//! fixed point.  The fixed point is not part of the geometry at all;
//! it is the iteration seed in Mandelbrot mode and the added constant
//! in Julia mode, and it lives here because the interaction layer
//! moves it around the same way it moves everything else.
//!
//! All geometry starts from a fixed base rectangle with a 16:9 aspect
//! ratio, shifted half a unit left so the Mandelbrot set sits in the
//! middle of the frame.  The visible bounds are
//! `(base + offset) / zoom`: zoom shrinks the rectangle around the
//! origin, and the offset is measured in unzoomed base units.

use crate::error::FractalError;
use crate::planes::{remap, ComplexPlane, IntegralPlane};
use num::Complex;

/// Lower imaginary bound of the base rectangle.
pub const STD_Y_MIN: f64 = -1.13;
/// Upper imaginary bound of the base rectangle.
pub const STD_Y_MAX: f64 = 1.13;
/// Lower real bound of the base rectangle.
pub const STD_X_MIN: f64 = STD_Y_MIN * 16.0 / 9.0 - 0.5;
/// Upper real bound of the base rectangle.
pub const STD_X_MAX: f64 = STD_Y_MAX * 16.0 / 9.0 - 0.5;

/// The unzoomed, unpanned region of the complex plane.
pub fn base_plane() -> ComplexPlane {
    ComplexPlane(
        Complex::new(STD_X_MIN, STD_Y_MIN),
        Complex::new(STD_X_MAX, STD_Y_MAX),
    )
}

/// Zoom, pan and fixed point.  `Viewport` is `Copy`, and every render
/// pass works from its own copy, so nothing a caller does to the
/// engine's viewport can be observed halfway through a frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    zoom: f64,
    offset: Complex<f64>,
    fixed_point: Complex<f64>,
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport::new(Complex::new(0.0, 0.0))
    }
}

impl Viewport {
    /// A viewport at zoom 1 with no pan, seeded with `fixed_point`.
    pub fn new(fixed_point: Complex<f64>) -> Self {
        Viewport {
            zoom: 1.0,
            offset: Complex::new(0.0, 0.0),
            fixed_point,
        }
    }

    /// The current zoom factor.  Always positive and finite.
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// The pan offset, in base-rectangle units.
    pub fn offset(&self) -> Complex<f64> {
        self.offset
    }

    /// The seed (Mandelbrot mode) or constant (Julia mode).
    pub fn fixed_point(&self) -> Complex<f64> {
        self.fixed_point
    }

    /// The visible rectangle of the complex plane.  This does not
    /// validate; see `validated_bounds`.
    pub fn bounds(&self) -> ComplexPlane {
        derive_bounds(self.zoom, self.offset)
    }

    /// The visible rectangle, or an error if it is degenerate.
    pub fn validated_bounds(&self) -> Result<ComplexPlane, FractalError> {
        let bounds = self.bounds();
        bounds.validate()?;
        Ok(bounds)
    }

    /// Replace the zoom factor.  Zero, negative and non-finite values
    /// are refused and the viewport is left as it was.
    pub fn set_zoom(&mut self, zoom: f64) -> Result<(), FractalError> {
        if !(zoom > 0.0) || !zoom.is_finite() {
            return Err(FractalError::InvalidZoom(zoom));
        }
        derive_bounds(zoom, self.offset)
            .validate()
            .map_err(|_| FractalError::InvalidZoom(zoom))?;
        self.zoom = zoom;
        Ok(())
    }

    /// Multiply the zoom by `factor`.  A mouse wheel notch of `delta`
    /// corresponds to a factor of `1 + delta * 0.1`.
    pub fn scale_zoom(&mut self, factor: f64) -> Result<(), FractalError> {
        self.set_zoom(self.zoom * factor)
    }

    /// Replace the pan offset.  Refused if it is not finite or if it
    /// would leave the visible rectangle without width or height.
    pub fn set_offset(&mut self, re: f64, im: f64) -> Result<(), FractalError> {
        let offset = Complex::new(re, im);
        if !(re.is_finite() && im.is_finite())
            || derive_bounds(self.zoom, offset).validate().is_err()
        {
            return Err(FractalError::InvalidOffset { re, im });
        }
        self.offset = offset;
        Ok(())
    }

    /// Shift the view by a drag of `(dx, dy)` pixels on a raster of the
    /// given size.  Dragging right moves the picture right, which moves
    /// the offset left.  Because the offset is in unzoomed units, the
    /// conversion does not depend on the zoom.
    pub fn pan_by_pixels(
        &mut self,
        dx: f64,
        dy: f64,
        raster: IntegralPlane,
    ) -> Result<(), FractalError> {
        let base = base_plane();
        let re = self.offset.re - dx * base.width() / raster.0 as f64;
        let im = self.offset.im - dy * base.height() / raster.1 as f64;
        self.set_offset(re, im)
    }

    /// Replace the fixed point.  Refused if either part is not finite.
    pub fn set_fixed_point(&mut self, re: f64, im: f64) -> Result<(), FractalError> {
        if !(re.is_finite() && im.is_finite()) {
            return Err(FractalError::InvalidFixedPoint { re, im });
        }
        self.fixed_point = Complex::new(re, im);
        Ok(())
    }

    /// The point a user is pointing at when dragging the fixed point
    /// around with the mouse: the pixel is placed on the base
    /// rectangle with the vertical axis pointing up, then shifted by
    /// the pan offset.  Zoom is not applied.
    pub fn fixed_point_under(&self, x: f64, y: f64, raster: IntegralPlane) -> Complex<f64> {
        let re = remap(x, 0.0, raster.0 as f64, STD_X_MIN, STD_X_MAX);
        let im = -remap(y, 0.0, raster.1 as f64, STD_Y_MIN, STD_Y_MAX);
        Complex::new(re + self.offset.re, im + self.offset.im)
    }
}

fn derive_bounds(zoom: f64, offset: Complex<f64>) -> ComplexPlane {
    ComplexPlane(
        Complex::new((STD_X_MIN + offset.re) / zoom, (STD_Y_MIN + offset.im) / zoom),
        Complex::new((STD_X_MAX + offset.re) / zoom, (STD_Y_MAX + offset.im) / zoom),
    )
}
