// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The Engine is the object a front end holds on to.  It owns the
//! viewport, the palette and the raster, and hands out the raster
//! after each render.
//!
//! A front end runs it in two alternating phases: mutate the viewport
//! (zoom, pan, move the fixed point), then render.  The mutators take
//! `&mut self` and each render copies the viewport before any work
//! starts, so the two phases cannot overlap.

use crate::error::FractalError;
use crate::escape::Mode;
use crate::palette::Palette;
use crate::raster::Raster;
use crate::render::{render_into, RenderOptions, RenderParams};
use crate::viewport::Viewport;
use num::Complex;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::warn;

/// A fractal renderer with a fixed raster size and iteration cap.
#[derive(Debug)]
pub struct Engine {
    viewport: Viewport,
    max_iterations: usize,
    palette: Palette,
    options: RenderOptions,
    raster: Raster,
}

impl Engine {
    /// Requires the fixed point (Mandelbrot seed or Julia constant),
    /// the iteration cap, and the size of the raster.  The raster is
    /// allocated here, once.
    pub fn new(
        fixed_point: Complex<f64>,
        max_iterations: usize,
        width: usize,
        height: usize,
    ) -> Result<Self, FractalError> {
        if max_iterations == 0 {
            return Err(FractalError::InvalidIterations);
        }
        let mut viewport = Viewport::default();
        viewport.set_fixed_point(fixed_point.re, fixed_point.im)?;
        let raster = Raster::new(width, height)?;
        Ok(Engine {
            viewport,
            max_iterations,
            palette: Palette::default(),
            options: RenderOptions::default(),
            raster,
        })
    }

    /// Replace the execution options wholesale.
    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the number of worker threads for subsequent renders.
    pub fn set_threads(&mut self, threads: usize) {
        self.options.threads = threads;
    }

    /// Install a flag that, once set, cancels the render in progress.
    pub fn set_cancel_flag(&mut self, flag: Arc<AtomicBool>) {
        self.options.cancel = Some(flag);
    }

    /// The current viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The iteration cap.
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// The palette used to paint escaping points.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The execution options.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// The raster as the last render left it.  After a render that
    /// failed with `Cancelled` some rows hold the new frame and the
    /// rest the previous one; it is only a whole picture again after
    /// the next successful render.
    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    /// Set the zoom factor.  Zero or negative values are refused and
    /// the viewport is unchanged.
    pub fn set_zoom(&mut self, zoom: f64) -> Result<(), FractalError> {
        self.viewport
            .set_zoom(zoom)
            .map_err(|e| rejected("set_zoom", e))
    }

    /// Multiply the zoom factor, as a mouse wheel would.
    pub fn scale_zoom(&mut self, factor: f64) -> Result<(), FractalError> {
        self.viewport
            .scale_zoom(factor)
            .map_err(|e| rejected("scale_zoom", e))
    }

    /// Set the pan offset, in unzoomed base-rectangle units.
    pub fn set_offset(&mut self, re: f64, im: f64) -> Result<(), FractalError> {
        self.viewport
            .set_offset(re, im)
            .map_err(|e| rejected("set_offset", e))
    }

    /// Pan by a drag of `(dx, dy)` raster pixels.
    pub fn pan_by_pixels(&mut self, dx: f64, dy: f64) -> Result<(), FractalError> {
        let plane = self.raster.integral_plane();
        self.viewport
            .pan_by_pixels(dx, dy, plane)
            .map_err(|e| rejected("pan_by_pixels", e))
    }

    /// Set the fixed point.
    pub fn set_fixed_point(&mut self, re: f64, im: f64) -> Result<(), FractalError> {
        self.viewport
            .set_fixed_point(re, im)
            .map_err(|e| rejected("set_fixed_point", e))
    }

    /// Move the fixed point to whatever lies under raster pixel
    /// `(x, y)`, the way a mouse drag would.
    pub fn set_fixed_point_from_pixel(
        &mut self,
        x: f64,
        y: f64,
    ) -> Result<Complex<f64>, FractalError> {
        let point = self
            .viewport
            .fixed_point_under(x, y, self.raster.integral_plane());
        self.set_fixed_point(point.re, point.im)?;
        Ok(point)
    }

    /// Render the current viewport in `mode`, overwriting the raster.
    /// On error the raster may be partly overwritten; see `raster`.
    pub fn render(&mut self, mode: Mode) -> Result<&Raster, FractalError> {
        let params = RenderParams {
            viewport: self.viewport,
            mode,
            max_iterations: self.max_iterations,
        };
        render_into(&params, &self.palette, &mut self.raster, &self.options)?;
        Ok(&self.raster)
    }

    /// Render the set of `c` whose orbits from the fixed point stay
    /// bounded.
    pub fn render_mandelbrot(&mut self) -> Result<&Raster, FractalError> {
        self.render(Mode::Mandelbrot)
    }

    /// Render the set of `z₀` whose orbits stay bounded when the fixed
    /// point is added at every step.
    pub fn render_julia(&mut self) -> Result<&Raster, FractalError> {
        self.render(Mode::Julia)
    }
}

fn rejected(call: &str, err: FractalError) -> FractalError {
    warn!(call, error = %err, "viewport change rejected");
    err
}
