// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Content-aware image reduction by seam carving.
//!
//! Hand the carver a decoded [`PixelGrid`] and the number of columns and
//! rows to remove.  Each pass computes the dual-gradient energy of the
//! image, finds the connected top-to-bottom path of least total energy,
//! and cuts it out.  Rows are removed by doing the same to the
//! transposed image.
//!
//! ```
//! use seamcarve::{reduce, Pixel, PixelGrid};
//!
//! let grid = PixelGrid::filled(8, 6, Pixel::opaque(40, 90, 200));
//! let smaller = reduce(&grid, 3, 2).unwrap();
//! assert_eq!(smaller.dimensions(), (5, 4));
//! ```

mod ternary;

pub mod energy;
pub mod error;
pub mod pixel;
pub mod pixelgrid;
pub mod seamcarver;
pub mod seamfinder;
pub mod twodmap;
pub mod visualize;

pub use energy::EnergyField;
pub use error::{Carve, CarveError};
pub use pixel::{Pixel, Point, SEAM_RED};
pub use pixelgrid::PixelGrid;
pub use seamcarver::{reduce, SeamCarver};
pub use seamfinder::{CostEntry, DynamicSeamFinder, Seam, SeamFinder};
pub use visualize::render as render_energy;
