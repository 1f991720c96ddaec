// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The sixteen-color ramp used to paint escaping points: a run from
//! dark brown through deep blue to pale yellow and back to brown.

use image::Rgb;

/// Number of entries in every palette.
pub const PALETTE_SIZE: usize = 16;

const DEFAULT_COLORS: [Rgb<u8>; PALETTE_SIZE] = [
    Rgb([66, 30, 15]),
    Rgb([25, 7, 26]),
    Rgb([9, 1, 47]),
    Rgb([4, 4, 73]),
    Rgb([0, 7, 100]),
    Rgb([12, 44, 138]),
    Rgb([24, 82, 177]),
    Rgb([57, 125, 209]),
    Rgb([134, 181, 229]),
    Rgb([211, 236, 248]),
    Rgb([241, 233, 191]),
    Rgb([248, 201, 95]),
    Rgb([255, 170, 0]),
    Rgb([204, 128, 0]),
    Rgb([153, 87, 0]),
    Rgb([106, 52, 3]),
];

/// An immutable, ordered table of colors indexed by iteration count
/// modulo its length.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Palette {
    colors: [Rgb<u8>; PALETTE_SIZE],
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            colors: DEFAULT_COLORS,
        }
    }
}

impl Palette {
    /// The color for a point that escaped after `iterations` steps.
    #[inline]
    pub fn color_for(&self, iterations: usize) -> Rgb<u8> {
        self.colors[iterations % PALETTE_SIZE]
    }

    /// The entries, in order.
    pub fn colors(&self) -> &[Rgb<u8>] {
        &self.colors
    }

    /// Always `PALETTE_SIZE`.
    pub fn len(&self) -> usize {
        self.colors.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_sixteen_entries() {
        let p = Palette::default();
        assert_eq!(p.len(), 16);
        assert_eq!(p.colors()[0], Rgb([66, 30, 15]));
        assert_eq!(p.colors()[15], Rgb([106, 52, 3]));
    }

    #[test]
    fn palette_wraps_around() {
        let p = Palette::default();
        for n in 0..64 {
            assert_eq!(p.color_for(n), p.colors()[n % 16]);
        }
        assert_eq!(p.color_for(17), Rgb([25, 7, 26]));
    }
}
