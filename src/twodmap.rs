// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::coord::Coord;
use itertools::iproduct;
use std::ops::{Index, IndexMut};

/// An addressable two-dimensional field, one cell per pixel of the
/// raster it was built against.  Backs the energy map (an `f64` per
/// pixel), the cost map (an `Option<f64>`, filled in line by line)
/// and the parent map (an `Option<Coord>`).
#[derive(Debug, Clone, PartialEq)]
pub struct TwoDimensionalMap<P: Default + Copy> {
    width: u32,
    height: u32,
    cells: Vec<P>,
}

impl<P: Default + Copy> TwoDimensionalMap<P> {
    /// A map of the given size with every cell at its default.
    pub fn new(width: u32, height: u32) -> Self {
        TwoDimensionalMap {
            width,
            height,
            cells: vec![P::default(); width as usize * height as usize],
        }
    }

    /// A map whose cells are produced, in row-major order, by `f`.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(Coord) -> P,
    {
        TwoDimensionalMap {
            width,
            height,
            cells: iproduct!(0..height, 0..width)
                .map(|(y, x)| f(Coord::new(x, y)))
                .collect(),
        }
    }

    // Absolutely, the number one name of this game is keep the index
    // math in a singular location and never, ever mess with it.
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

    /// Whether `c` addresses a cell of this map.
    pub fn contains(&self, c: Coord) -> bool {
        c.x < self.width && c.y < self.height
    }

    /// The value at `c`, or None if `c` lies outside the map.
    pub fn get(&self, c: Coord) -> Option<P> {
        if self.contains(c) {
            Some(self.cells[self.get_index(c.x, c.y)])
        } else {
            None
        }
    }

    /// Every cell, in row-major order.
    pub fn values(&self) -> impl Iterator<Item = &P> {
        self.cells.iter()
    }
}

impl<P: Default + Copy> Index<Coord> for TwoDimensionalMap<P> {
    type Output = P;

    fn index(&self, c: Coord) -> &P {
        let index = self.get_index(c.x, c.y);
        &self.cells[index]
    }
}

impl<P: Default + Copy> IndexMut<Coord> for TwoDimensionalMap<P> {
    fn index_mut(&mut self, c: Coord) -> &mut P {
        let index = self.get_index(c.x, c.y);
        &mut self.cells[index]
    }
}
