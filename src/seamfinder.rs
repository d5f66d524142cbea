// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Find the cheapest top-to-bottom seam through an energy field.
//!
//! The cost of reaching a pixel is its own energy plus the cheapest of
//! the three pixels above it that a seam could have come from:
//!
//! ```text
//!                     ⎧ M(x−1,y−1)
//! M(x,y) = e(x,y) + min⎨ M(x,y−1)
//!                     ⎩ M(x+1,y−1)
//!
//! M(x,0) = e(x,0)
//! ```
//!
//! The columns at x = −1 and x = width do not exist; they behave as if
//! their cost were infinite, so a pixel on either edge only ever has two
//! candidate parents.  When candidates tie, the first one in the order
//! left-diagonal, straight, right-diagonal wins.  When bottom-row totals
//! tie, the leftmost wins.  Both rules together make the seam for a
//! given field unique.

use crate::cq;
use crate::energy::EnergyField;
use crate::error::CarveError;
use crate::pixel::Point;
use crate::twodmap::TwoDimensionalMap;
use log::trace;

/// How the carver asks for seams.  Just enough of an interface to let
/// a different search strategy be dropped in.
pub trait SeamFinder {
    /// Find the vertical seam with the least total energy.
    fn find_seam(&self, energy: &EnergyField) -> Result<Seam, CarveError>;
}

/// A connected top-to-bottom path, one point per row, in row order.
/// Neighbouring points are at most one column apart.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Seam {
    points: Vec<Point>,
}

impl Seam {
    /// Build a seam from the column of each row, top row first.
    pub fn from_columns(columns: &[u32]) -> Self {
        Seam {
            points: columns
                .iter()
                .enumerate()
                .map(|(y, x)| Point::new(*x, y as u32))
                .collect(),
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The column of each row, top row first.
    pub fn columns(&self) -> Vec<u32> {
        self.points.iter().map(|p| p.x).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The same path with every point's axes swapped.  A vertical seam
    /// found in a transposed grid is a horizontal seam of the original.
    pub fn transposed(&self) -> Self {
        Seam {
            points: self.points.iter().map(|p| p.transposed()).collect(),
        }
    }

    /// True when the points run one per row from the top and each steps
    /// at most one column sideways.
    pub fn is_connected(&self) -> bool {
        self.points.iter().enumerate().all(|(y, p)| p.y as usize == y)
            && self
                .points
                .windows(2)
                .all(|w| (i64::from(w[0].x) - i64::from(w[1].x)).abs() <= 1)
    }
}

/// Per-pixel state of the cost sweep: the cheapest total energy of any
/// seam from the top border down to this pixel, and which pixel in the
/// row above that seam came through.
#[derive(Default, Debug, Copy, Clone, PartialEq)]
pub struct CostEntry {
    pub cost: f64,
    pub backtrack: Option<Point>,
}

/// The seam finder the carver uses unless told otherwise.  Sweeps the
/// field row by row, each pixel computed exactly once from the three
/// already-finished pixels above it.
#[derive(Debug, Default, Copy, Clone)]
pub struct DynamicSeamFinder;

// The predecessors of column x in row order: left-diagonal, straight,
// right-diagonal.  The sentinel columns are simply absent.
#[inline]
fn candidates(x: u32, width: u32) -> impl Iterator<Item = u32> {
    let left = x.checked_sub(1);
    let right = Some(x + 1).filter(|r| *r < width);
    left.into_iter().chain(Some(x)).chain(right)
}

impl DynamicSeamFinder {
    pub fn new() -> Self {
        DynamicSeamFinder
    }

    /// Fill in the cost table for the whole field.
    pub fn costs(&self, energy: &EnergyField) -> TwoDimensionalMap<CostEntry> {
        let (width, height) = energy.dimensions();
        let mut table: TwoDimensionalMap<CostEntry> = TwoDimensionalMap::new(width, height);
        if height == 0 {
            return table;
        }

        // Populate the first row with their native energies.
        for x in 0..width {
            table[(x, 0)] = CostEntry {
                cost: energy[(x, 0)],
                backtrack: None,
            };
        }

        // Every subsequent row gets its own energy plus the cheapest
        // reachable entry of the row above.  Strict less-than keeps the
        // first of any tied candidates.
        for y in 1..height {
            for x in 0..width {
                let mut best = CostEntry {
                    cost: f64::INFINITY,
                    backtrack: None,
                };
                for px in candidates(x, width) {
                    let above = table[(px, y - 1)].cost;
                    if best.backtrack.is_none() || above < best.cost {
                        best = CostEntry {
                            cost: above,
                            backtrack: Some(Point::new(px, y - 1)),
                        };
                    }
                }
                best.cost += energy[(x, y)];
                table[(x, y)] = best;
            }
        }
        table
    }

    /// Walk the back pointers up from the cheapest bottom-row entry.
    pub fn extract(&self, table: &TwoDimensionalMap<CostEntry>) -> Result<Seam, CarveError> {
        let (width, height) = table.dimensions();
        if width == 0 || height == 0 {
            return Err(CarveError::EmptyGrid);
        }

        // First minimum in column order.
        let bottom = table.row(height - 1);
        let seam_col = (1..width).fold(0, |best, x| {
            cq!(
                bottom[x as usize].cost < bottom[best as usize].cost,
                x,
                best
            )
        });
        trace!(
            "seam ends at column {} with cost {}",
            seam_col,
            bottom[seam_col as usize].cost
        );

        let mut points = Vec::with_capacity(height as usize);
        let mut current = Point::new(seam_col, height - 1);
        points.push(current);
        while current.y > 0 {
            current = table[current]
                .backtrack
                .ok_or(CarveError::BacktrackMissing {
                    x: current.x,
                    y: current.y,
                })?;
            points.push(current);
        }
        points.reverse();
        Ok(Seam { points })
    }
}

impl SeamFinder for DynamicSeamFinder {
    fn find_seam(&self, energy: &EnergyField) -> Result<Seam, CarveError> {
        self.extract(&self.costs(energy))
    }
}
