// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Writes a finished raster to disk.  The engine never calls this;
//! it exists for front ends that want a file instead of a window.

use crate::error::FractalError;
use crate::raster::Raster;
use image::png::PNGEncoder;
use image::pnm::{PNMEncoder, PNMSubtype, SampleEncoding};
use image::ColorType;
use std::convert::TryFrom;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// The encodings a raster can be written in.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Format {
    /// Lossless PNG.
    Png,
    /// Binary PPM (P6).
    Ppm,
}

impl Format {
    /// Pick a format from the file extension, case-insensitively.
    pub fn from_path(path: &Path) -> Result<Format, FractalError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_ref().map(String::as_str) {
            Some("png") => Ok(Format::Png),
            Some("ppm") | Some("pnm") => Ok(Format::Ppm),
            _ => Err(FractalError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// The image encoders take `u32` sizes; anything larger is refused
/// rather than truncated.
fn encoder_dimensions(width: usize, height: usize) -> Result<(u32, u32), FractalError> {
    match (u32::try_from(width), u32::try_from(height)) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(FractalError::InvalidDimensions(width, height)),
    }
}

/// Encode `raster` into `path`, choosing the format by extension.
pub fn write_raster(path: &Path, raster: &Raster) -> Result<(), FractalError> {
    let format = Format::from_path(path)?;
    let (width, height) = encoder_dimensions(raster.width(), raster.height())?;
    let output = BufWriter::new(File::create(path)?);
    match format {
        Format::Png => {
            PNGEncoder::new(output).encode(raster.as_bytes(), width, height, ColorType::RGB(8))?
        }
        Format::Ppm => {
            let mut encoder =
                PNMEncoder::new(output).with_subtype(PNMSubtype::Pixmap(SampleEncoding::Binary));
            encoder.encode(raster.as_bytes(), width, height, ColorType::RGB(8))?
        }
    }
    Ok(())
}
