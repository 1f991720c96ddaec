// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the PlaneMapper struct, which describes a relationship
//! between a rectangle on the integral plane with an origin at 0,0,
//! and a rectangle on the complex plane with an arbitrary pair of
//! corners defining its leftlower and rightupper corners.
//!
//! Every conversion in either direction goes through `remap`, a plain
//! affine rescaling of one interval onto another.
use crate::error::FractalError;
use num::Complex;

/// Rescale `value` from the interval `[src_lo, src_hi]` onto the
/// interval `[dst_lo, dst_hi]`.
///
/// The source interval must not be empty.  That is a contract on the
/// caller, not a runtime condition: every caller in this crate works
/// from bounds that were validated when they were built.
#[inline]
pub fn remap(value: f64, src_lo: f64, src_hi: f64, dst_lo: f64, dst_hi: f64) -> f64 {
    debug_assert!(src_lo != src_hi, "remap called with an empty source interval");
    dst_lo + (dst_hi - dst_lo) * ((value - src_lo) / (src_hi - src_lo))
}

/// Describes the width and height of an integral plane that is assumed to start at
/// 0,0 and all values are assumed to be non-negative integers.  For that reason,
/// the lower-left-hand corner is not included.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IntegralPlane(pub usize, pub usize);

/// Describes the lower-left corner and upper-right corner of the
/// Complex plane, treating the real part of each value as the
/// x-component and the imaginary part of each value as the
/// y-component.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ComplexPlane(pub Complex<f64>, pub Complex<f64>);

impl ComplexPlane {
    /// Width of the rectangle along the real axis.
    pub fn width(&self) -> f64 {
        self.1.re - self.0.re
    }

    /// Height of the rectangle along the imaginary axis.
    pub fn height(&self) -> f64 {
        self.1.im - self.0.im
    }

    /// Succeeds only if every corner is finite and both axes are
    /// strictly ordered, i.e. the rectangle is safe to divide by.
    pub fn validate(&self) -> Result<(), FractalError> {
        let (ll, ru) = (self.0, self.1);
        if !(ll.re.is_finite() && ll.im.is_finite() && ru.re.is_finite() && ru.im.is_finite()) {
            return Err(FractalError::DegenerateBounds(format!(
                "plane bounds {} .. {} are not finite",
                ll, ru
            )));
        }
        if !(ll.re < ru.re) {
            return Err(FractalError::DegenerateBounds(
                "The left lower corner is not to the left of the right upper corner.".to_string(),
            ));
        }
        if !(ll.im < ru.im) {
            return Err(FractalError::DegenerateBounds(
                "The left lower corner is not lower than the right upper corner".to_string(),
            ));
        }
        Ok(())
    }
}

/// Describes the x, y of a point in a region.  Yes, it's the exact
/// same. Names are important.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// Contains the definitions of two planes: an integral cartesian plane,
/// and a complex cartesian plane.  Maps points from one to the other.
/// Row 0 of the integral plane maps to the lowest imaginary value; no
/// axis is flipped.
#[derive(Copy, Clone, Debug)]
pub struct PlaneMapper {
    /// The right-upper hand corner of the integral cartesian plane.
    /// The left-lower is assumed to be at 0,0
    pub integral_plane: IntegralPlane,
    /// The two coordinates defining the complex cartesian plane,
    /// left-lower and right-upper
    pub complex_plane: ComplexPlane,
}

impl PlaneMapper {
    /// Takes the size of the integral plane and the two corners of the
    /// complex plane.  Fails if the pixel grid is empty or the complex
    /// rectangle is degenerate.
    pub fn new(
        width: usize,
        height: usize,
        leftlower: Complex<f64>,
        rightupper: Complex<f64>,
    ) -> Result<PlaneMapper, FractalError> {
        if width == 0 || height == 0 {
            return Err(FractalError::InvalidDimensions(width, height));
        }
        let complex_plane = ComplexPlane(leftlower, rightupper);
        complex_plane.validate()?;
        Ok(PlaneMapper {
            integral_plane: IntegralPlane(width, height),
            complex_plane,
        })
    }

    /// The real coordinate of column `x`.
    #[inline]
    pub fn column_to_re(&self, x: usize) -> f64 {
        remap(
            x as f64,
            0.0,
            self.integral_plane.0 as f64,
            self.complex_plane.0.re,
            self.complex_plane.1.re,
        )
    }

    /// The imaginary coordinate of row `y`.
    #[inline]
    pub fn row_to_im(&self, y: usize) -> f64 {
        remap(
            y as f64,
            0.0,
            self.integral_plane.1 as f64,
            self.complex_plane.0.im,
            self.complex_plane.1.im,
        )
    }

    /// Given a pixel on the integral cartesian plane, return the
    /// complex number at the equivalent location on the complex plane.
    #[inline]
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex<f64> {
        Complex::new(self.column_to_re(pixel.0), self.row_to_im(pixel.1))
    }

    /// Given a complex number, map it as closely as possible to a
    /// pixel on the integral plane.  Points outside the complex
    /// rectangle have no pixel.
    pub fn point_to_pixel(&self, point: &Complex<f64>) -> Option<Pixel> {
        let ComplexPlane(ll, ru) = self.complex_plane;
        let left = remap(point.re, ll.re, ru.re, 0.0, self.integral_plane.0 as f64);
        let top = remap(point.im, ll.im, ru.im, 0.0, self.integral_plane.1 as f64);
        if !(left >= 0.0 && left < self.integral_plane.0 as f64)
            || !(top >= 0.0 && top < self.integral_plane.1 as f64)
        {
            return None;
        }
        Some(Pixel(left as usize, top as usize))
    }
}
