// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Render an energy field as a grayscale image.  Diagnostic only; the
//! carver never looks at the result.

use crate::energy::EnergyField;
use crate::pixel::Pixel;
use crate::pixelgrid::PixelGrid;
use num_traits::{clamp, NumCast};

/// Map every energy linearly onto 0..=255, the field's maximum energy
/// becoming white.  A field with no energy at all renders black.
pub fn render(field: &EnergyField) -> PixelGrid {
    let (width, height) = field.dimensions();
    let max_energy = field.max_energy();
    let pixels = field
        .values()
        .iter()
        .map(|e| Pixel::gray(intensity(*e, max_energy)))
        .collect();
    // The field and the pixel vector have the same dimensions.
    PixelGrid::from_pixels(width, height, pixels).unwrap_or_else(|| PixelGrid::new(width, height))
}

fn intensity(energy: f64, max_energy: f64) -> u8 {
    if max_energy <= 0.0 {
        return 0;
    }
    let scaled = clamp((255.0 * energy / max_energy).round(), 0.0, 255.0);
    NumCast::from(scaled).unwrap_or(0)
}
