// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::error::CarveError;
use crate::pixel::Point;
use itertools::iproduct;
use std::ops::{Index, IndexMut};

/// An addressable two-dimensional field.  The content is whatever a
/// stage of the carver needs: pixels for the image, an `f64` for the
/// energy field, or a cost and back pointer for the seam search.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoDimensionalMap<P: Default + Copy> {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) data: Vec<P>,
}

impl<P: Default + Copy> TwoDimensionalMap<P> {
    /// A map of the given size filled with `P::default()`.
    pub fn new(width: u32, height: u32) -> Self {
        TwoDimensionalMap {
            width,
            height,
            data: vec![P::default(); width as usize * height as usize],
        }
    }

    /// Wrap an existing row-major vector.  `None` if the vector is the
    /// wrong length for the dimensions.
    pub fn from_vec(width: u32, height: u32, data: Vec<P>) -> Option<Self> {
        if data.len() != width as usize * height as usize {
            return None;
        }
        Some(TwoDimensionalMap {
            width,
            height,
            data,
        })
    }

    // Keep the index math in one place and never, ever mess with it
    // anywhere else.  Row-major, the same layout `image` uses.
    fn get_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    fn check(&self, x: u32, y: u32) -> Result<usize, CarveError> {
        if self.contains(x, y) {
            Ok(self.get_index(x, y))
        } else {
            Err(CarveError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Bounds-checked read.
    pub fn get(&self, x: u32, y: u32) -> Result<P, CarveError> {
        self.check(x, y).map(|i| self.data[i])
    }

    /// Bounds-checked write.
    pub fn set(&mut self, x: u32, y: u32, value: P) -> Result<(), CarveError> {
        let index = self.check(x, y)?;
        self.data[index] = value;
        Ok(())
    }

    /// One row as a contiguous slice.
    pub fn row(&self, y: u32) -> &[P] {
        let start = self.get_index(0, y);
        &self.data[start..start + self.width as usize]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[P]> {
        // chunks() panics on a zero chunk size.
        self.data.chunks(self.width.max(1) as usize)
    }

    pub fn values(&self) -> &[P] {
        &self.data
    }

    /// A new map with the axes swapped: the value at `(x, y)` of the
    /// result is the value at `(y, x)` of this one.
    pub fn transpose(&self) -> Self {
        let (width, height) = (self.height, self.width);
        let data = iproduct!(0..height, 0..width)
            .map(|(y, x)| self[(y, x)])
            .collect();
        TwoDimensionalMap {
            width,
            height,
            data,
        }
    }

    /// Build a new map of the same size by applying `f` to every value.
    pub fn map<Q, F>(&self, f: F) -> TwoDimensionalMap<Q>
    where
        Q: Default + Copy,
        F: FnMut(&P) -> Q,
    {
        TwoDimensionalMap {
            width: self.width,
            height: self.height,
            data: self.data.iter().map(f).collect(),
        }
    }
}

impl<P: Default + Copy> Index<(u32, u32)> for TwoDimensionalMap<P> {
    type Output = P;

    /// Unchecked addressing for the inner loops, where the coordinates
    /// come from the map's own ranges.
    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.get_index(x, y);
        &self.data[index]
    }
}

impl<P: Default + Copy> IndexMut<(u32, u32)> for TwoDimensionalMap<P> {
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.data[index]
    }
}

impl<P: Default + Copy> Index<Point> for TwoDimensionalMap<P> {
    type Output = P;

    fn index(&self, p: Point) -> &P {
        &self[(p.x, p.y)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATA: [u32; 6] = [1, 2, 3, 4, 5, 6];

    fn sample() -> TwoDimensionalMap<u32> {
        TwoDimensionalMap::from_vec(3, 2, DATA.to_vec()).unwrap()
    }

    #[test]
    fn row_major_addressing() {
        let map = sample();
        assert_eq!(map[(0, 0)], 1);
        assert_eq!(map[(2, 0)], 3);
        assert_eq!(map[(0, 1)], 4);
        assert_eq!(map.row(1), &[4, 5, 6]);
    }

    #[test]
    fn bounds_are_checked() {
        let mut map = sample();
        assert_eq!(map.get(2, 1), Ok(6));
        assert_eq!(
            map.get(3, 0),
            Err(CarveError::OutOfBounds {
                x: 3,
                y: 0,
                width: 3,
                height: 2
            })
        );
        assert!(map.set(0, 2, 9).is_err());
        map.set(1, 1, 9).unwrap();
        assert_eq!(map[(1, 1)], 9);
    }

    #[test]
    fn transpose_swaps_axes() {
        let map = sample();
        let t = map.transpose();
        assert_eq!(t.dimensions(), (2, 3));
        assert_eq!(t.values(), &[1, 4, 2, 5, 3, 6]);
        for (x, y) in iproduct!(0..2, 0..3) {
            assert_eq!(t[(x, y)], map[(y, x)]);
        }
        assert_eq!(t.transpose(), map);
    }

    #[test]
    fn from_vec_rejects_wrong_length() {
        assert!(TwoDimensionalMap::from_vec(4, 2, DATA.to_vec()).is_none());
    }
}
