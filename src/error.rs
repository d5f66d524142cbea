// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Everything that can go wrong while carving.

use failure::Fail;
use std::fmt;

/// The axis along which an image is being reduced.  Removing vertical
/// seams narrows the image; removing horizontal seams shortens it.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Carve {
    Width,
    Height,
}

impl fmt::Display for Carve {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Carve::Width => write!(f, "width"),
            Carve::Height => write!(f, "height"),
        }
    }
}

/// The error type for every fallible operation in the crate.
#[derive(Debug, Fail, PartialEq)]
pub enum CarveError {
    /// A coordinate fell outside the grid.  The public reduction path
    /// never produces this; it indicates misuse of the lower-level
    /// grid operations.
    #[fail(
        display = "point ({}, {}) is outside a {}x{} grid",
        x, y, width, height
    )]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// The caller asked to remove as many pixels as the axis has, or
    /// more.
    #[fail(
        display = "cannot remove {} pixels from a {} of {}",
        requested, axis, available
    )]
    InvalidReduction {
        axis: Carve,
        requested: u32,
        available: u32,
    },

    /// The seam search reached a pixel below the top row that records
    /// no predecessor.  This is a bug in the cost sweep.
    #[fail(display = "no backtrack pointer recorded at ({}, {})", x, y)]
    BacktrackMissing { x: u32, y: u32 },

    /// The operation needs at least one pixel.
    #[fail(display = "the grid has no pixels")]
    EmptyGrid,
}
