// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The image being carved.
//!
//! A `PixelGrid` is the only long-lived mutable thing in the carver.
//! Its size never changes in place: removing a seam or transposing
//! produces a new grid.

use crate::error::CarveError;
use crate::pixel::{Pixel, Point};
use crate::seamfinder::Seam;
use crate::twodmap::TwoDimensionalMap;
use image::{ImageBuffer, RgbaImage};

#[derive(Debug, Clone, PartialEq)]
pub struct PixelGrid {
    pixels: TwoDimensionalMap<Pixel>,
}

impl PixelGrid {
    /// A grid of transparent black pixels.
    pub fn new(width: u32, height: u32) -> Self {
        PixelGrid {
            pixels: TwoDimensionalMap::new(width, height),
        }
    }

    /// A grid where every pixel is `pixel`.
    pub fn filled(width: u32, height: u32, pixel: Pixel) -> Self {
        PixelGrid {
            pixels: TwoDimensionalMap {
                width,
                height,
                data: vec![pixel; width as usize * height as usize],
            },
        }
    }

    /// Wrap row-major pixel data.  `None` if `pixels` is the wrong
    /// length.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Pixel>) -> Option<Self> {
        TwoDimensionalMap::from_vec(width, height, pixels).map(|pixels| PixelGrid { pixels })
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    pub fn get(&self, x: u32, y: u32) -> Result<Pixel, CarveError> {
        self.pixels.get(x, y)
    }

    pub fn set(&mut self, x: u32, y: u32, pixel: Pixel) -> Result<(), CarveError> {
        self.pixels.set(x, y, pixel)
    }

    pub fn row(&self, y: u32) -> &[Pixel] {
        self.pixels.row(y)
    }

    pub fn pixels(&self) -> &[Pixel] {
        self.pixels.values()
    }

    pub(crate) fn as_map(&self) -> &TwoDimensionalMap<Pixel> {
        &self.pixels
    }

    /// Swap rows and columns.  Carving horizontal seams is carving
    /// vertical seams out of the transposed image.
    pub fn transpose(&self) -> Self {
        PixelGrid {
            pixels: self.pixels.transpose(),
        }
    }

    // Validate the whole seam before copying anything.
    fn check_seam(&self, seam: &Seam) -> Result<(), CarveError> {
        let (width, height) = self.dimensions();
        if width == 0 || height == 0 {
            return Err(CarveError::EmptyGrid);
        }
        if seam.len() != height as usize {
            return Err(CarveError::OutOfBounds {
                x: 0,
                y: seam.len() as u32,
                width,
                height,
            });
        }
        match seam
            .points()
            .iter()
            .enumerate()
            .find(|(y, p)| p.y as usize != *y || p.x >= width)
        {
            Some((_, p)) => Err(CarveError::OutOfBounds {
                x: p.x,
                y: p.y,
                width,
                height,
            }),
            None => Ok(()),
        }
    }

    /// Produce a grid one column narrower with the seam's pixel dropped
    /// from every row.  Pixels left of the seam keep their column;
    /// pixels right of it move one column left.
    pub fn remove_column_at_seam(&self, seam: &Seam) -> Result<Self, CarveError> {
        self.check_seam(seam)?;
        let (width, height) = self.dimensions();
        let mut data = Vec::with_capacity((width as usize - 1) * height as usize);
        for (row, point) in self.pixels.rows().zip(seam.points()) {
            let cut = point.x as usize;
            data.extend_from_slice(&row[..cut]);
            data.extend_from_slice(&row[cut + 1..]);
        }
        Ok(PixelGrid {
            pixels: TwoDimensionalMap {
                width: width - 1,
                height,
                data,
            },
        })
    }

    /// Overwrite every pixel on the seam with `pixel`.
    pub fn paint_seam(&mut self, seam: &Seam, pixel: Pixel) -> Result<(), CarveError> {
        seam.points()
            .iter()
            .try_for_each(|&Point { x, y }| self.set(x, y, pixel))
    }

    /// The photographic negative of the whole grid.
    pub fn negative(&self) -> Self {
        PixelGrid {
            pixels: self.pixels.map(Pixel::inverted),
        }
    }
}

impl From<&RgbaImage> for PixelGrid {
    fn from(image: &RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        PixelGrid {
            pixels: TwoDimensionalMap {
                width,
                height,
                data: image.pixels().map(|p| Pixel::from(*p)).collect(),
            },
        }
    }
}

impl From<&PixelGrid> for RgbaImage {
    fn from(grid: &PixelGrid) -> Self {
        let (width, height) = grid.dimensions();
        ImageBuffer::from_fn(width, height, |x, y| grid.pixels[(x, y)].into())
    }
}
