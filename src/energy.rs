// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! The energy of a pixel is a measure of how much the color changes
//! around it.  This uses the dual-gradient energy function:
//!
//! ```text
//!     Δx(x,y) = (Δr)² + (Δg)² + (Δb)²   between (x−1,y) and (x+1,y)
//!     Δy(x,y) = (Δr)² + (Δg)² + (Δb)²   between (x,y−1) and (x,y+1)
//!     e(x,y)  = √(Δx(x,y) + Δy(x,y))
//! ```
//!
//! Alpha plays no part.  Edge pixels have no neighbour on one side, so
//! they borrow the gradient of the pixel next to them: column 0 is
//! measured as if it were column 1, and the last column as if it were
//! the second-to-last.  Rows are treated the same way.

use crate::cq;
use crate::error::CarveError;
use crate::pixel::{Pixel, Point};
use crate::pixelgrid::PixelGrid;
use crate::twodmap::TwoDimensionalMap;
use itertools::iproduct;
use std::ops::Index;

/// The energy of every pixel of one grid snapshot.  Never patched
/// after it is built; when the grid changes, compute a new one.
#[derive(Debug, Clone, PartialEq)]
pub struct EnergyField {
    energy: TwoDimensionalMap<f64>,
    max_energy: f64,
}

// (Pixel, Pixel) -> squared color distance
//
// Takes the channels (R,G,B) from two pixels and maps the difference
// between each channel, squares it, and sums them up.
#[inline]
fn energy_of_pair(p1: &Pixel, p2: &Pixel) -> f64 {
    p1.rgb()
        .iter()
        .zip(p2.rgb().iter())
        .map(|(c1, c2)| {
            let d = f64::from(*c1) - f64::from(*c2);
            d * d
        })
        .sum()
}

// The two coordinates whose difference measures the gradient at `i`
// along an axis of length `len`.  An axis shorter than three pixels has
// no interior to borrow from, so it simply compares its two ends.
#[inline]
fn sample_pair(i: u32, len: u32) -> (u32, u32) {
    if len < 3 {
        return (0, len - 1);
    }
    let reference = cq!(i == 0, 1, cq!(i == len - 1, len - 2, i));
    (reference - 1, reference + 1)
}

impl EnergyField {
    /// Compute the energy of every pixel in `grid`.
    pub fn compute(grid: &PixelGrid) -> Self {
        let pixels = grid.as_map();
        let (width, height) = grid.dimensions();

        let data = iproduct!(0..height, 0..width)
            .map(|(y, x)| {
                let (left, right) = sample_pair(x, width);
                let (up, down) = sample_pair(y, height);
                let dx = energy_of_pair(&pixels[(left, y)], &pixels[(right, y)]);
                let dy = energy_of_pair(&pixels[(x, up)], &pixels[(x, down)]);
                (dx + dy).sqrt()
            })
            .collect();

        let energy = TwoDimensionalMap {
            width,
            height,
            data,
        };
        let max_energy = max_of(energy.values());
        EnergyField { energy, max_energy }
    }

    /// Build a field from precomputed row-major values.  `None` if the
    /// length is wrong or any value is negative or NaN.
    pub fn from_values(width: u32, height: u32, values: Vec<f64>) -> Option<Self> {
        if values.iter().any(|e| e.is_nan() || *e < 0.0) {
            return None;
        }
        let energy = TwoDimensionalMap::from_vec(width, height, values)?;
        let max_energy = max_of(energy.values());
        Some(EnergyField { energy, max_energy })
    }

    pub fn width(&self) -> u32 {
        self.energy.width()
    }

    pub fn height(&self) -> u32 {
        self.energy.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.energy.dimensions()
    }

    /// The largest energy in the field, or 0 for an empty field.  Only
    /// the visualizer cares about this.
    pub fn max_energy(&self) -> f64 {
        self.max_energy
    }

    pub fn get(&self, x: u32, y: u32) -> Result<f64, CarveError> {
        self.energy.get(x, y)
    }

    pub fn row(&self, y: u32) -> &[f64] {
        self.energy.row(y)
    }

    pub fn values(&self) -> &[f64] {
        self.energy.values()
    }
}

fn max_of(values: &[f64]) -> f64 {
    values.iter().cloned().fold(0.0, f64::max)
}

impl Index<(u32, u32)> for EnergyField {
    type Output = f64;

    fn index(&self, xy: (u32, u32)) -> &f64 {
        &self.energy[xy]
    }
}

impl Index<Point> for EnergyField {
    type Output = f64;

    fn index(&self, p: Point) -> &f64 {
        &self.energy[p]
    }
}
