#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mandelbrot and Julia renderer
//!
//! The Mandelbrot set and the Julia sets are drawn by the same
//! experiment: take a point on the complex plane, repeatedly square it
//! and add a constant, and count how many steps it takes for the
//! result to wander further than 2 from the origin.  Points that never
//! wander off are in the set and are painted black; points that do are
//! painted by how long they took.
//!
//! The two families differ only in what the pixel stands for.  For the
//! Mandelbrot set each pixel is the added constant and every orbit
//! starts from the same seed.  For a Julia set each pixel is the seed
//! and every orbit adds the same constant.  That shared seed or
//! constant is the viewport's "fixed point"; moving it around while
//! looking at the Julia set is most of the fun.
//!
//! The `Engine` owns the state a front end needs between frames.
//! `render::render_into` is the same computation as a plain function
//! of an explicit parameter snapshot.

pub mod engine;
pub mod error;
pub mod escape;
pub mod output;
pub mod palette;
pub mod planes;
pub mod raster;
pub mod render;
pub mod viewport;

pub use engine::Engine;
pub use error::FractalError;
pub use escape::{escape_time, Mode, Sample};
pub use palette::Palette;
pub use planes::{remap, PlaneMapper};
pub use raster::Raster;
pub use render::{render_into, RenderOptions, RenderParams};
pub use viewport::Viewport;
