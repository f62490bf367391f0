// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! Given an image, calculate the dual-gradient energy of every pixel:
//! the square root of the summed squared RGB differences across the
//! pixel, horizontally and vertically.
//!
//! Pixels on an edge do not have a neighbor on one side, so instead of
//! clamping or reflecting, the comparison window is slid inward until
//! it fits: at x = 0 the pixels compared are x = 0 and x = 2, and at the
//! far edge they are len - 3 and len - 1.  The window is always two
//! pixels wide, which is why an axis needs at least three pixels.

use crate::coord::Coord;
use crate::errors::{Result, SeamError};
use crate::twodmap::TwoDimensionalMap;
use image::{GenericImageView, GrayImage, Luma, Pixel, Primitive};
use num_traits::{clamp, NumCast};

/// The smallest width or height the energy window fits into.
pub const MIN_DIMENSION: u32 = 3;

/// One non-negative energy value per pixel of the raster it was
/// computed against.  Never reuse one across a resize.
pub type EnergyMap = TwoDimensionalMap<f64>;

type Channels = [i64; 3];

fn channels_of<P, S>(p: &P) -> Channels
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let rgb = p.to_rgb();
    let c = rgb.0;
    let cast = |s: S| -> i64 { NumCast::from(s).unwrap_or_default() };
    [cast(c[0]), cast(c[1]), cast(c[2])]
}

// Takes the channels (R,G,B) from two pixels and maps the difference
// between each channel, squares it, and then sums them all up:
//
//        |Δx|² = (Δrx)²+(Δgx)²+(Δbx)²
//        |Δy|² = (Δry)²+(Δgy)²+(Δby)²
//       e(x,y) = √(|Δx|²+|Δy|²)
fn energy_of_pair(p1: &Channels, p2: &Channels) -> u64 {
    p1.iter()
        .zip(p2.iter())
        .map(|(c1, c2)| ((c1 - c2) * (c1 - c2)) as u64)
        .sum()
}

// The two positions compared at `i` on an axis `len` pixels long.
fn gradient_window(i: u32, len: u32) -> (u32, u32) {
    if i == 0 {
        (0, 2)
    } else if i == len - 1 {
        (len - 3, len - 1)
    } else {
        (i - 1, i + 1)
    }
}

/// Compute the energy of every pixel in an image.
///
/// Fails with `SeamError::Validation` if either dimension is shorter
/// than `MIN_DIMENSION`, since the edge window would reach past the
/// image.
pub fn calculate_energy<I, P, S>(image: &I) -> Result<EnergyMap>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    if width < MIN_DIMENSION || height < MIN_DIMENSION {
        return Err(SeamError::Validation(format!(
            "energy needs an image at least {0}x{0}, got {1}x{2}",
            MIN_DIMENSION, width, height
        )));
    }

    // Read the image once; every pixel is consulted four times.
    let pixels = TwoDimensionalMap::from_fn(width, height, |c| {
        channels_of(&image.get_pixel(c.x, c.y))
    });

    Ok(EnergyMap::from_fn(width, height, |c| {
        let (left, right) = gradient_window(c.x, width);
        let (up, down) = gradient_window(c.y, height);
        let dx = energy_of_pair(&pixels[Coord::new(left, c.y)], &pixels[Coord::new(right, c.y)]);
        let dy = energy_of_pair(&pixels[Coord::new(c.x, up)], &pixels[Coord::new(c.x, down)]);
        ((dx + dy) as f64).sqrt()
    }))
}

/// Tone-map an energy map onto a greyscale image, scaled so that the
/// highest energy in the map is white.  A map with no energy at all is
/// entirely black.
pub fn energy_to_image(energy: &EnergyMap) -> GrayImage {
    let (width, height) = energy.dimensions();
    let factor = energy.values().cloned().fold(0.0_f64, f64::max);
    GrayImage::from_fn(width, height, |x, y| {
        if factor == 0.0 {
            return Luma([0]);
        }
        let scaled = energy[Coord::new(x, y)] * 255.0 / factor;
        Luma([clamp(scaled.round(), 0.0, 255.0) as u8])
    })
}
