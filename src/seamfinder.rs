// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::coord::Direction;
use crate::digraph::SeamDigraph;
use crate::energy::{calculate_energy, EnergyMap};
use crate::errors::Result;
use crate::seam::Seam;
use image::{GenericImageView, Pixel, Primitive};

/// This trait defines how we will return seams from an image.  It's a
/// primitive interface, just enough to make room for more than one
/// seam finder.
pub trait SeamFinder {
    /// Once a SeamFinder has an image (or whatever it needs to make a
    /// rational decision), request a seam running in `direction`.
    fn find_seam(&self, direction: Direction) -> Result<Seam>;

    /// Request a left-to-right seam.
    fn find_horizontal_seam(&self) -> Result<Seam> {
        self.find_seam(Direction::Horizontal)
    }

    /// Request a top-to-bottom seam.
    fn find_vertical_seam(&self) -> Result<Seam> {
        self.find_seam(Direction::Vertical)
    }
}

/// Given an energy map, return the cheapest top-to-bottom seam.
pub fn energy_to_vertical_seam(energy: &EnergyMap) -> Result<Seam> {
    Seam::extract(&SeamDigraph::solve(energy, Direction::Vertical)?)
}

/// Given an energy map, return the cheapest left-to-right seam.
pub fn energy_to_horizontal_seam(energy: &EnergyMap) -> Result<Seam> {
    Seam::extract(&SeamDigraph::solve(energy, Direction::Horizontal)?)
}

/// The basic seam finder: holds an image and recomputes its
/// dual-gradient energy on every request, so a seam always belongs to
/// the image as it is right now.
pub struct DualGradient<'a, I, P, S>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    image: &'a I,
}

impl<'a, I, P, S> DualGradient<'a, I, P, S>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    /// Takes a reference to an image, and holds onto it.
    pub fn new(image: &'a I) -> Self {
        DualGradient { image }
    }
}

impl<'a, I, P, S> SeamFinder for DualGradient<'a, I, P, S>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    fn find_seam(&self, direction: Direction) -> Result<Seam> {
        let energy = calculate_energy(self.image)?;
        Seam::extract(&SeamDigraph::solve(&energy, direction)?)
    }
}
