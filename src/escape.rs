// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time iteration.
//!
//! Both the Mandelbrot set and the Julia sets come from the same
//! recurrence, `z ← z² + c`.  The difference is only in which of `z₀`
//! and `c` changes from pixel to pixel.  In Mandelbrot mode every pixel
//! is a different `c` and all of them start from the same `z₀`; in
//! Julia mode every pixel is a different `z₀` and all of them add the
//! same `c`.  A point "escapes" once `|z|` exceeds 2, after which it
//! is guaranteed to run off to infinity.

use crate::palette::Palette;
use image::Rgb;
use num::Complex;

/// The squared escape radius.
pub const ESCAPE_NORM_SQR: f64 = 4.0;

/// The color of points that are never painted from the palette.
pub const BACKGROUND: Rgb<u8> = Rgb([0, 0, 0]);

/// Which operand of the recurrence varies across the raster.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    /// The pixel is `c`; the fixed point is `z₀`.
    Mandelbrot,
    /// The pixel is `z₀`; the fixed point is `c`.
    Julia,
}

impl Mode {
    /// Arrange a pixel's plane coordinate and the viewport's fixed
    /// point into `(z₀, c)`.
    #[inline]
    pub fn seed(
        self,
        point: Complex<f64>,
        fixed_point: Complex<f64>,
    ) -> (Complex<f64>, Complex<f64>) {
        match self {
            Mode::Mandelbrot => (fixed_point, point),
            Mode::Julia => (point, fixed_point),
        }
    }
}

/// The outcome of iterating a single point.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Sample {
    /// Iterations completed before escape, or the cap if the point
    /// never escaped.
    pub iterations: usize,
    /// Whether the orbit left the escape radius.
    pub escaped: bool,
}

/// Iterate `z ← z² + c` from `z0` at most `max_iterations` times,
/// stopping as soon as `|z|² > 4`.  The count excludes the step that
/// escaped, so a point that is already outside after the first step
/// scores zero.  A squared magnitude that is NaN counts as escaped.
#[inline]
pub fn escape_time(z0: Complex<f64>, c: Complex<f64>, max_iterations: usize) -> Sample {
    let mut z = z0;
    let mut n = 0;
    while n < max_iterations {
        z = z * z + c;
        if !(z.norm_sqr() <= ESCAPE_NORM_SQR) {
            return Sample {
                iterations: n,
                escaped: true,
            };
        }
        n += 1;
    }
    Sample {
        iterations: max_iterations,
        escaped: false,
    }
}

/// Color a sample.  Points that escaped after at least one step get
/// the palette entry for their count.  Everything else is background:
/// the points that never escaped, and also the points that escaped on
/// the very first step.
#[inline]
pub fn classify(sample: Sample, max_iterations: usize, palette: &Palette) -> Rgb<u8> {
    if sample.iterations > 0 && sample.iterations < max_iterations {
        palette.color_for(sample.iterations)
    } else {
        BACKGROUND
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin() -> Complex<f64> {
        Complex::new(0.0, 0.0)
    }

    #[test]
    fn origin_never_escapes_the_mandelbrot_set() {
        let (z0, c) = Mode::Mandelbrot.seed(origin(), origin());
        let s = escape_time(z0, c, 50);
        assert_eq!(s, Sample { iterations: 50, escaped: false });
    }

    #[test]
    fn two_plus_two_i_escapes_immediately() {
        let (z0, c) = Mode::Mandelbrot.seed(Complex::new(2.0, 2.0), origin());
        let s = escape_time(z0, c, 256);
        assert_eq!(s, Sample { iterations: 0, escaped: true });
    }

    #[test]
    fn minus_two_is_on_the_boundary_and_stays() {
        // -2 maps to 2, then 2, forever: |z|² == 4 exactly, which is not an escape.
        let s = escape_time(origin(), Complex::new(-2.0, 0.0), 100);
        assert!(!s.escaped);
    }

    #[test]
    fn one_escapes_after_a_few_steps() {
        // 0 -> 1 -> 2 -> 5
        let s = escape_time(origin(), Complex::new(1.0, 0.0), 100);
        assert_eq!(s, Sample { iterations: 2, escaped: true });
    }

    #[test]
    fn julia_mode_swaps_the_operands() {
        let point = Complex::new(0.3, -0.4);
        let fixed = Complex::new(-0.8, 0.156);
        assert_eq!(Mode::Julia.seed(point, fixed), (point, fixed));
        assert_eq!(Mode::Mandelbrot.seed(point, fixed), (fixed, point));
    }

    #[test]
    fn non_finite_orbits_count_as_escaped() {
        let s = escape_time(Complex::new(std::f64::NAN, 0.0), origin(), 10);
        assert_eq!(s, Sample { iterations: 0, escaped: true });
        let s = escape_time(Complex::new(1e200, 1e200), origin(), 10);
        assert_eq!(s, Sample { iterations: 0, escaped: true });
    }

    #[test]
    fn zero_cap_never_iterates() {
        let s = escape_time(Complex::new(5.0, 5.0), origin(), 0);
        assert_eq!(s, Sample { iterations: 0, escaped: false });
    }

    #[test]
    fn classification_paints_only_intermediate_counts() {
        let p = Palette::default();
        let max = 100;
        let paint = |iterations, escaped| classify(Sample { iterations, escaped }, max, &p);
        assert_eq!(paint(0, true), BACKGROUND);
        assert_eq!(paint(max, false), BACKGROUND);
        assert_eq!(paint(1, true), p.color_for(1));
        assert_eq!(paint(37, true), p.color_for(37 % 16));
        assert_eq!(paint(max - 1, true), p.color_for((max - 1) % 16));
    }
}
