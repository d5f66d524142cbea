// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The two value types everything else is built from: a pixel and the
//! address of a pixel.

use image::Rgba;

/// An 8-bit ARGB color.
#[derive(Default, Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub struct Pixel {
    pub alpha: u8,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Pixel {
    pub const fn new(alpha: u8, red: u8, green: u8, blue: u8) -> Self {
        Pixel {
            alpha,
            red,
            green,
            blue,
        }
    }

    /// A fully opaque color.
    pub const fn opaque(red: u8, green: u8, blue: u8) -> Self {
        Pixel::new(255, red, green, blue)
    }

    /// A fully opaque gray.
    pub const fn gray(intensity: u8) -> Self {
        Pixel::opaque(intensity, intensity, intensity)
    }

    /// The color channels that participate in the energy calculation.
    /// Alpha is excluded.
    pub fn rgb(&self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }

    /// The photographic negative of this pixel; alpha is untouched.
    pub fn inverted(&self) -> Self {
        Pixel::new(
            self.alpha,
            255 - self.red,
            255 - self.green,
            255 - self.blue,
        )
    }
}

/// The color a seam is painted with in overlays.
pub const SEAM_RED: Pixel = Pixel::opaque(255, 0, 0);

impl From<Rgba<u8>> for Pixel {
    fn from(p: Rgba<u8>) -> Self {
        let [red, green, blue, alpha] = p.0;
        Pixel::new(alpha, red, green, blue)
    }
}

impl From<Pixel> for Rgba<u8> {
    fn from(p: Pixel) -> Self {
        Rgba([p.red, p.green, p.blue, p.alpha])
    }
}

/// A pixel address.  `x` counts columns from the left, `y` rows from
/// the top.
#[derive(Default, Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    pub const fn new(x: u32, y: u32) -> Self {
        Point { x, y }
    }

    /// The same address with the axes swapped.
    pub fn transposed(self) -> Self {
        Point::new(self.y, self.x)
    }
}

impl From<(u32, u32)> for Point {
    fn from((x, y): (u32, u32)) -> Self {
        Point { x, y }
    }
}
