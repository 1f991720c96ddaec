// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A flat, row-major RGB buffer, eight bits per channel.

use crate::error::FractalError;
use crate::planes::{IntegralPlane, Pixel};
use image::Rgb;

/// Bytes per pixel.
pub const CHANNELS: usize = 3;

/// The output of a render pass.  Its size is fixed when it is built;
/// every pass overwrites every byte.
#[derive(Clone, Debug, PartialEq)]
pub struct Raster {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl Raster {
    /// Allocate a black raster.  Allocation failure is reported rather
    /// than aborting, so an oversized request fails cleanly.
    pub fn new(width: usize, height: usize) -> Result<Raster, FractalError> {
        let len = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(CHANNELS))
            .filter(|&n| n > 0)
            .ok_or(FractalError::InvalidDimensions(width, height))?;
        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(len)
            .map_err(|_| FractalError::Allocation(len))?;
        pixels.resize(len, 0);
        Ok(Raster {
            width,
            height,
            pixels,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The pixel grid this raster covers.
    pub fn integral_plane(&self) -> IntegralPlane {
        IntegralPlane(self.width, self.height)
    }

    /// Bytes in one row.
    pub fn row_len(&self) -> usize {
        self.width * CHANNELS
    }

    /// The raw bytes, row 0 first.
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    pub(crate) fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// The color at `pixel`, or `None` outside the raster.
    pub fn get(&self, pixel: Pixel) -> Option<Rgb<u8>> {
        if pixel.0 >= self.width || pixel.1 >= self.height {
            return None;
        }
        let at = pixel.1 * self.row_len() + pixel.0 * CHANNELS;
        Some(Rgb([self.pixels[at], self.pixels[at + 1], self.pixels[at + 2]]))
    }
}

/// Write one color into a three-byte cell.
#[inline]
pub(crate) fn put(cell: &mut [u8], color: Rgb<u8>) {
    cell.copy_from_slice(&color.0);
}
