// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - The main routine
//!
//! Repeatedly find and remove the cheapest seam.  Only vertical seams
//! are ever searched for: reducing the height transposes the image,
//! removes vertical seams from that, and transposes it back.

use crate::energy::EnergyField;
use crate::error::{Carve, CarveError};
use crate::pixelgrid::PixelGrid;
use crate::seamfinder::{DynamicSeamFinder, Seam, SeamFinder};
use log::{debug, info};

// This is absurdly inefficient, as the entire energy map and cost
// table are rebuilt for every seam.  Only the columns either side of
// the removed seam actually change.
fn carve_columns<F: SeamFinder>(
    finder: &F,
    mut grid: PixelGrid,
    count: u32,
    axis: Carve,
) -> Result<PixelGrid, CarveError> {
    for pass in 0..count {
        let energy = EnergyField::compute(&grid);
        let seam = finder.find_seam(&energy)?;
        grid = grid.remove_column_at_seam(&seam)?;
        debug!(
            "{} pass {}/{}: removed seam ending at column {}, now {}x{}",
            axis,
            pass + 1,
            count,
            seam.points().last().map_or(0, |p| p.x),
            grid.width(),
            grid.height()
        );
    }
    Ok(grid)
}

fn check_reduction(axis: Carve, requested: u32, available: u32) -> Result<(), CarveError> {
    if requested >= available && requested > 0 {
        return Err(CarveError::InvalidReduction {
            axis,
            requested,
            available,
        });
    }
    Ok(())
}

/// Holds the image being carved for the whole of a reduction.
pub struct SeamCarver<F: SeamFinder = DynamicSeamFinder> {
    grid: PixelGrid,
    finder: F,
}

impl SeamCarver<DynamicSeamFinder> {
    /// Creates a new SeamCarver with an image to be carved.
    pub fn new(grid: PixelGrid) -> Self {
        SeamCarver::with_finder(grid, DynamicSeamFinder::new())
    }
}

impl<F: SeamFinder> SeamCarver<F> {
    pub fn with_finder(grid: PixelGrid, finder: F) -> Self {
        SeamCarver { grid, finder }
    }

    /// The image as carved so far.
    pub fn grid(&self) -> &PixelGrid {
        &self.grid
    }

    pub fn into_grid(self) -> PixelGrid {
        self.grid
    }

    /// Remove `count` vertical seams.  Asking for the whole width (or
    /// more) is refused and leaves the image as it was.
    pub fn reduce_width(&mut self, count: u32) -> Result<(), CarveError> {
        check_reduction(Carve::Width, count, self.grid.width())?;
        if count == 0 {
            return Ok(());
        }
        // Carve a copy, so a failure part way through leaves the image
        // as it was.
        self.grid = carve_columns(&self.finder, self.grid.clone(), count, Carve::Width)?;
        info!(
            "removed {} vertical seams, image is now {}x{}",
            count,
            self.grid.width(),
            self.grid.height()
        );
        Ok(())
    }

    /// Remove `count` horizontal seams.  Asking for the whole height (or
    /// more) is refused and leaves the image as it was.
    pub fn reduce_height(&mut self, count: u32) -> Result<(), CarveError> {
        check_reduction(Carve::Height, count, self.grid.height())?;
        if count == 0 {
            return Ok(());
        }
        let carved = carve_columns(&self.finder, self.grid.transpose(), count, Carve::Height)?;
        self.grid = carved.transpose();
        info!(
            "removed {} horizontal seams, image is now {}x{}",
            count,
            self.grid.width(),
            self.grid.height()
        );
        Ok(())
    }

    /// Narrow the image by `width_delta` pixels, then shorten it by
    /// `height_delta`.  If the height request is refused the width
    /// reduction stays done.
    pub fn reduce(&mut self, width_delta: u32, height_delta: u32) -> Result<(), CarveError> {
        self.reduce_width(width_delta)?;
        self.reduce_height(height_delta)
    }

    /// The vertical seam the next width reduction would remove.
    pub fn vertical_seam(&self) -> Result<Seam, CarveError> {
        self.finder.find_seam(&EnergyField::compute(&self.grid))
    }

    /// The horizontal seam the next height reduction would remove, in
    /// this image's coordinates: one point per column.
    pub fn horizontal_seam(&self) -> Result<Seam, CarveError> {
        let transposed = self.grid.transpose();
        self.finder
            .find_seam(&EnergyField::compute(&transposed))
            .map(|seam| seam.transposed())
    }
}

/// Carve `width_delta` columns and `height_delta` rows out of `grid`.
///
/// Both deltas are checked against the original dimensions before any
/// carving starts, so an error means nothing was done.
pub fn reduce(
    grid: &PixelGrid,
    width_delta: u32,
    height_delta: u32,
) -> Result<PixelGrid, CarveError> {
    check_reduction(Carve::Width, width_delta, grid.width())?;
    check_reduction(Carve::Height, height_delta, grid.height())?;
    let mut carver = SeamCarver::new(grid.clone());
    carver.reduce(width_delta, height_delta)?;
    Ok(carver.into_grid())
}
