// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - The main function
//!
//! The main seamcarver routine, with helpers for removing or painting
//! a single seam.  Every removal builds a fresh buffer; the working
//! image is only swapped for it once the removal has succeeded, and
//! the caller's image is never touched at all.

use crate::coord::Direction;
use crate::energy::MIN_DIMENSION;
use crate::errors::{Result, SeamError};
use crate::seam::Seam;
use crate::seamfinder::{DualGradient, SeamFinder};
use image::{GenericImage, GenericImageView, ImageBuffer, Pixel, Primitive, Rgb, RgbImage};
use tracing::{debug, info};

/// The color seams are painted with.
pub const SEAM_MARKER: Rgb<u8> = Rgb([255, 0, 0]);

// A seam is only usable against the image it was found in: one pixel
// per line, every pixel inside the image.
fn check_seam_fits(seam: &Seam, width: u32, height: u32) -> Result<()> {
    let direction = seam.direction();
    let lines = direction.lines(width, height);
    let span = direction.span(width, height);
    if seam.len() != lines as usize || !seam.is_connected() {
        return Err(SeamError::InternalConsistency(format!(
            "{} seam of length {} does not fit a {}x{} image",
            direction,
            seam.len(),
            width,
            height
        )));
    }
    if let Some(stray) = seam.iter().find(|c| direction.position_of(**c) >= span) {
        return Err(SeamError::InternalConsistency(format!(
            "seam pixel {} lies outside a {}x{} image",
            stray, width, height
        )));
    }
    Ok(())
}

// Each row is copied left to right; once the seam's column has been
// passed, every remaining pixel is read from one column further on.
fn remove_vertical_seam<I, P, S>(image: &I, seam: &Seam) -> ImageBuffer<P, Vec<S>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    let mut imgbuf = ImageBuffer::new(width - 1, height);
    for (y, skip) in seam.positions().into_iter().enumerate() {
        let y = y as u32;
        let mut shift = 0;
        for x in 0..width - 1 {
            if x == skip {
                shift = 1;
            }
            imgbuf.put_pixel(x, y, image.get_pixel(x + shift, y));
        }
    }
    imgbuf
}

// The transpose of the above: each column is copied top to bottom,
// skipping the seam's row.
fn remove_horizontal_seam<I, P, S>(image: &I, seam: &Seam) -> ImageBuffer<P, Vec<S>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    let mut imgbuf = ImageBuffer::new(width, height - 1);
    for (x, skip) in seam.positions().into_iter().enumerate() {
        let x = x as u32;
        let mut shift = 0;
        for y in 0..height - 1 {
            if y == skip {
                shift = 1;
            }
            imgbuf.put_pixel(x, y, image.get_pixel(x, y + shift));
        }
    }
    imgbuf
}

/// Build a new image one column (vertical seam) or one row
/// (horizontal seam) smaller, leaving out the pixels of `seam`.  Every
/// other pixel keeps its relative order.
pub fn remove_seam<I, P, S>(image: &I, seam: &Seam) -> Result<ImageBuffer<P, Vec<S>>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    check_seam_fits(seam, width, height)?;
    Ok(match seam.direction() {
        Direction::Vertical => remove_vertical_seam(image, seam),
        Direction::Horizontal => remove_horizontal_seam(image, seam),
    })
}

/// Paint the pixels of `seam` with `SEAM_MARKER`, in place.  The image
/// keeps its size.  Nothing is painted unless the whole seam fits.
pub fn paint_seam<I>(image: &mut I, seam: &Seam) -> Result<()>
where
    I: GenericImage<Pixel = Rgb<u8>>,
{
    let (width, height) = image.dimensions();
    check_seam_fits(seam, width, height)?;
    for c in seam.iter() {
        image.put_pixel(c.x, c.y, SEAM_MARKER);
    }
    Ok(())
}

/// Find the cheapest seam in `direction` and return a copy of `image`
/// with that seam painted in.
pub fn mark_seam(image: &RgbImage, direction: Direction) -> Result<RgbImage> {
    let seam = DualGradient::new(image).find_seam(direction)?;
    let mut marked = image.clone();
    paint_seam(&mut marked, &seam)?;
    debug!(%direction, cost = seam.cost(), "seam marked");
    Ok(marked)
}

fn carve_once<I, P, S>(image: &I, direction: Direction) -> Result<ImageBuffer<P, Vec<S>>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let seam = DualGradient::new(image).find_seam(direction)?;
    let carved = remove_seam(image, &seam)?;
    debug!(
        %direction,
        cost = seam.cost(),
        width = carved.width(),
        height = carved.height(),
        "seam removed"
    );
    Ok(carved)
}

// Every single removal has to find energy in an image at least
// MIN_DIMENSION on each side; check the whole plan before starting.
fn check_plan(width: u32, height: u32, vertical: u32, horizontal: u32) -> Result<()> {
    if vertical >= width {
        return Err(SeamError::Validation(format!(
            "cannot remove {} vertical seams from an image {} pixels wide",
            vertical, width
        )));
    }
    if horizontal >= height {
        return Err(SeamError::Validation(format!(
            "cannot remove {} horizontal seams from an image {} pixels high",
            horizontal, height
        )));
    }
    let narrowest = width - vertical;
    let shortest = height - horizontal;
    if vertical > 0 && (narrowest + 1 < MIN_DIMENSION || height < MIN_DIMENSION) {
        return Err(SeamError::Validation(format!(
            "removing {} vertical seams from a {}x{} image would leave it too small to carve",
            vertical, width, height
        )));
    }
    if horizontal > 0 && (narrowest < MIN_DIMENSION || shortest + 1 < MIN_DIMENSION) {
        return Err(SeamError::Validation(format!(
            "removing {} horizontal seams from a {}x{} image would leave it too small to carve",
            horizontal, narrowest, height
        )));
    }
    Ok(())
}

/// A struct for holding the image to be carved.
pub struct SeamCarver<'a, I, P, S>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    image: &'a I,
}

impl<'a, I, P, S> SeamCarver<'a, I, P, S>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    /// Creates a new SeamCarver with an image to be carved.
    pub fn new(image: &'a I) -> Self {
        Self { image }
    }

    // The entire energy map and seam digraph are recalculated for
    // every seam.  A map from before a removal addresses pixels that
    // have since moved or gone.

    /// Remove `vertical` top-to-bottom seams, then `horizontal`
    /// left-to-right seams, returning the carved copy.
    pub fn carve(&self, vertical: u32, horizontal: u32) -> Result<ImageBuffer<P, Vec<S>>> {
        let (width, height) = self.image.dimensions();
        check_plan(width, height, vertical, horizontal)?;

        let mut scratch = ImageBuffer::<P, Vec<S>>::new(width, height);
        self.image
            .pixels()
            .for_each(|(x, y, p)| scratch.put_pixel(x, y, p));

        for _ in 0..vertical {
            scratch = carve_once(&scratch, Direction::Vertical)?;
        }
        for _ in 0..horizontal {
            scratch = carve_once(&scratch, Direction::Horizontal)?;
        }
        info!(
            from_width = width,
            from_height = height,
            to_width = scratch.width(),
            to_height = scratch.height(),
            "carve complete"
        );
        Ok(scratch)
    }

    /// Given a desired new width and height, carve seams out of the
    /// image until it fits.
    pub fn resize_to(&self, newwidth: u32, newheight: u32) -> Result<ImageBuffer<P, Vec<S>>> {
        let (width, height) = self.image.dimensions();
        if width < newwidth || height < newheight {
            return Err(SeamError::Validation(format!(
                "cannot upscale a {}x{} image to {}x{}",
                width, height, newwidth, newheight
            )));
        }
        self.carve(width - newwidth, height - newheight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Luma, Rgb, RgbImage};

    // A 4x3 image where every pixel's red channel encodes its address.
    fn addressed() -> RgbImage {
        RgbImage::from_fn(4, 3, |x, y| Rgb([(y * 10 + x) as u8, 0, 0]))
    }

    fn reds(image: &RgbImage) -> Vec<u8> {
        image.pixels().map(|p| p[0]).collect()
    }

    #[test]
    fn removing_a_vertical_seam_skips_one_pixel_per_row() {
        let seam = Seam::from_positions(Direction::Vertical, &[0, 1, 2], 0.0);
        let out = remove_seam(&addressed(), &seam).unwrap();
        assert_eq!(out.dimensions(), (3, 3));
        assert_eq!(reds(&out), [1, 2, 3, 10, 12, 13, 20, 21, 23]);
    }

    #[test]
    fn removing_a_horizontal_seam_skips_one_pixel_per_column() {
        let seam = Seam::from_positions(Direction::Horizontal, &[2, 1, 0, 0], 0.0);
        let out = remove_seam(&addressed(), &seam).unwrap();
        assert_eq!(out.dimensions(), (4, 2));
        assert_eq!(reds(&out), [0, 1, 12, 13, 10, 21, 22, 23]);
    }

    #[test]
    fn mismatched_seams_are_refused() {
        let short = Seam::from_positions(Direction::Vertical, &[0, 1], 0.0);
        assert!(remove_seam(&addressed(), &short).is_err());

        let outside = Seam::from_positions(Direction::Vertical, &[3, 4, 4], 0.0);
        match remove_seam(&addressed(), &outside) {
            Err(SeamError::InternalConsistency(_)) => (),
            other => panic!("expected an internal consistency error, got {:?}", other),
        }

        let mut image = addressed();
        assert!(paint_seam(&mut image, &outside).is_err());
        assert_eq!(image, addressed());
    }

    #[test]
    fn painting_marks_the_seam_and_keeps_the_size() {
        let mut image = addressed();
        let seam = Seam::from_positions(Direction::Vertical, &[3, 2, 3], 0.0);
        paint_seam(&mut image, &seam).unwrap();
        assert_eq!(image.dimensions(), (4, 3));
        assert_eq!(image.get_pixel(3, 0), &SEAM_MARKER);
        assert_eq!(image.get_pixel(2, 1), &SEAM_MARKER);
        assert_eq!(image.get_pixel(3, 2), &SEAM_MARKER);
        assert_eq!(image.pixels().filter(|p| **p == SEAM_MARKER).count(), 3);
    }

    #[test]
    fn uniform_image_loses_its_first_column() {
        let image = RgbImage::from_pixel(3, 3, Rgb([100, 100, 100]));
        let carved = SeamCarver::new(&image).carve(1, 0).unwrap();
        assert_eq!(carved.dimensions(), (2, 3));
        for y in 0..3 {
            for x in 0..2 {
                assert_eq!(carved.get_pixel(x, y), image.get_pixel(x + 1, y));
            }
        }
    }

    #[test]
    fn carving_reaches_the_requested_size() {
        let image = RgbImage::from_fn(8, 7, |x, y| {
            Rgb([(x * 31) as u8, (y * 17) as u8, (x * y) as u8])
        });
        let carved = SeamCarver::new(&image).carve(3, 2).unwrap();
        assert_eq!(carved.dimensions(), (5, 5));

        let resized = SeamCarver::new(&image).resize_to(6, 7).unwrap();
        assert_eq!(resized.dimensions(), (6, 7));
    }

    #[test]
    fn carving_keeps_the_pixel_type() {
        let image: ImageBuffer<Luma<u8>, Vec<u8>> =
            ImageBuffer::from_fn(5, 5, |x, y| Luma([(x * 40 + y) as u8]));
        let carved = SeamCarver::new(&image).carve(1, 1).unwrap();
        assert_eq!(carved.dimensions(), (4, 4));
    }

    #[test]
    fn no_seams_is_a_copy() {
        let image = RgbImage::from_pixel(1, 1, Rgb([1, 2, 3]));
        let carved = SeamCarver::new(&image).carve(0, 0).unwrap();
        assert_eq!(carved, image);
    }

    #[test]
    fn impossible_plans_are_refused_up_front() {
        let image = RgbImage::new(5, 4);
        let carver = SeamCarver::new(&image);
        for (vertical, horizontal) in &[(5, 0), (0, 4), (4, 0), (0, 3), (3, 1)] {
            match carver.carve(*vertical, *horizontal) {
                Err(SeamError::Validation(_)) => (),
                other => panic!(
                    "expected ({}, {}) to be refused, got {:?}",
                    vertical, horizontal, other
                ),
            }
        }
        assert!(carver.carve(3, 0).is_ok());
        assert!(carver.carve(2, 0).is_ok());
        assert!(carver.carve(0, 2).is_ok());
        assert!(carver.carve(1, 2).is_ok());
        assert!(carver.resize_to(6, 4).is_err());
    }

    #[test]
    fn marking_a_seam_paints_one_pixel_per_row() {
        let image = RgbImage::from_pixel(4, 5, Rgb([10, 200, 10]));
        let marked = mark_seam(&image, Direction::Vertical).unwrap();
        assert_eq!(marked.dimensions(), (4, 5));
        for y in 0..5 {
            assert_eq!(marked.get_pixel(0, y), &SEAM_MARKER);
        }
        assert_eq!(marked.pixels().filter(|p| **p == SEAM_MARKER).count(), 5);

        let marked = mark_seam(&image, Direction::Horizontal).unwrap();
        for x in 0..4 {
            assert_eq!(marked[(x, 0)], SEAM_MARKER);
        }
        assert_eq!(image.get_pixel(0, 0), &Rgb([10, 200, 10]));
    }
}
