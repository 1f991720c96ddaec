// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Fills a raster by running the escape-time evaluator on every pixel.
//!
//! Every pixel is independent of every other, so the raster is cut
//! into rows and the rows are handed out, one at a time, to a pool of
//! scoped worker threads.  Each row slice belongs to exactly one
//! worker, which is what lets the workers write without a lock.  The
//! only shared state is the queue of rows still to do and, optionally,
//! a cancellation flag.
//!
//! With a single worker the pass runs on the calling thread and walks
//! the grid pixel by pixel.  Both paths compute each pixel from the
//! same inputs in the same way, so the output is identical byte for
//! byte regardless of how many workers took part.

use crate::error::FractalError;
use crate::escape::{classify, escape_time, Mode};
use crate::palette::Palette;
use crate::planes::{Pixel, PlaneMapper};
use crate::raster::{put, Raster, CHANNELS};
use crate::viewport::Viewport;
use itertools::iproduct;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{debug, trace};

/// Everything a render pass reads.  Taken by value at the start of a
/// pass and never touched again until the pass is over.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RenderParams {
    /// The viewport as it stood when the pass started.
    pub viewport: Viewport,
    /// Which operand varies per pixel.
    pub mode: Mode,
    /// The per-pixel iteration cap.
    pub max_iterations: usize,
}

/// How a pass is executed, as opposed to what it computes.
#[derive(Clone, Debug)]
pub struct RenderOptions {
    /// Number of worker threads.  Zero is treated as one.
    pub threads: usize,
    /// Checked before each row; once set, workers stop picking up rows
    /// and the pass fails with `Cancelled`.
    pub cancel: Option<Arc<AtomicBool>>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            threads: num_cpus::get(),
            cancel: None,
        }
    }
}

impl RenderOptions {
    /// Options with a fixed worker count and no cancellation.
    pub fn with_threads(threads: usize) -> Self {
        RenderOptions {
            threads,
            cancel: None,
        }
    }

    fn cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .map_or(false, |flag| flag.load(Ordering::Relaxed))
    }
}

/// Render `params` into `raster`.  The bounds are checked once, up
/// front; if they are unusable nothing is written.
pub fn render_into(
    params: &RenderParams,
    palette: &Palette,
    raster: &mut Raster,
    options: &RenderOptions,
) -> Result<(), FractalError> {
    let bounds = params.viewport.validated_bounds()?;
    let plane = PlaneMapper::new(raster.width(), raster.height(), bounds.0, bounds.1)?;
    let threads = options.threads.max(1);
    debug!(
        mode = ?params.mode,
        threads,
        max_iterations = params.max_iterations,
        bounds = ?bounds,
        "render pass"
    );

    if threads == 1 {
        render_single(params, palette, &plane, raster, options)
    } else {
        render_threaded(params, palette, &plane, raster, options, threads)
    }
}

#[inline]
fn paint(
    params: &RenderParams,
    palette: &Palette,
    plane: &PlaneMapper,
    pixel: &Pixel,
    cell: &mut [u8],
) {
    let point = plane.pixel_to_point(pixel);
    let (z0, c) = params.mode.seed(point, params.viewport.fixed_point());
    let sample = escape_time(z0, c, params.max_iterations);
    put(cell, classify(sample, params.max_iterations, palette));
}

fn render_single(
    params: &RenderParams,
    palette: &Palette,
    plane: &PlaneMapper,
    raster: &mut Raster,
    options: &RenderOptions,
) -> Result<(), FractalError> {
    let row_len = raster.row_len();
    let pixels = raster.as_bytes_mut();
    let mut current_row = None;
    for (row, column) in iproduct!(0..plane.integral_plane.1, 0..plane.integral_plane.0) {
        if current_row != Some(row) {
            if options.cancelled() {
                return Err(FractalError::Cancelled);
            }
            current_row = Some(row);
        }
        let at = row * row_len + column * CHANNELS;
        paint(
            params,
            palette,
            plane,
            &Pixel(column, row),
            &mut pixels[at..at + CHANNELS],
        );
    }
    Ok(())
}

fn render_row(
    params: &RenderParams,
    palette: &Palette,
    plane: &PlaneMapper,
    row: usize,
    band: &mut [u8],
) {
    for (column, cell) in band.chunks_mut(CHANNELS).enumerate() {
        paint(params, palette, plane, &Pixel(column, row), cell);
    }
}

fn render_threaded(
    params: &RenderParams,
    palette: &Palette,
    plane: &PlaneMapper,
    raster: &mut Raster,
    options: &RenderOptions,
    threads: usize,
) -> Result<(), FractalError> {
    let row_len = raster.row_len();
    let rows = Arc::new(Mutex::new(raster.as_bytes_mut().chunks_mut(row_len).enumerate()));

    crossbeam::scope(|spawner| {
        for worker in 0..threads {
            let rows = rows.clone();
            spawner.spawn(move |_| {
                let mut done = 0;
                loop {
                    if options.cancelled() {
                        break;
                    }
                    let next = { rows.lock().ok().and_then(|mut rows| rows.next()) };
                    match next {
                        Some((row, band)) => {
                            render_row(params, palette, plane, row, band);
                            done += 1;
                        }
                        None => break,
                    }
                }
                trace!(worker, rows = done, "worker finished");
            });
        }
    })
    .map_err(|_| FractalError::WorkerPanicked)?;

    if options.cancelled() {
        return Err(FractalError::Cancelled);
    }
    Ok(())
}
