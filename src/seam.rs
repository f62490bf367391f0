// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seams
//!
//! A seam is a connected path of pixels across the image, exactly one
//! per line, extracted from a solved seam digraph by picking the
//! cheapest pixel on the far border and following the parent links
//! back to the starting border.

use crate::coord::{Coord, Direction};
use crate::digraph::SeamDigraph;
use crate::errors::{Result, SeamError};

/// A border-to-border path of pixels, ordered by line: row by row for
/// a vertical seam, column by column for a horizontal one.
#[derive(Debug, Clone, PartialEq)]
pub struct Seam {
    direction: Direction,
    pixels: Vec<Coord>,
    cost: f64,
}

impl Seam {
    /// Pull the cheapest seam out of a solved digraph.
    pub fn extract(graph: &SeamDigraph) -> Result<Seam> {
        let direction = graph.direction();
        let (width, height) = graph.dimensions();
        let lines = direction.lines(width, height);
        let last = lines - 1;

        // Find the cheapest pixel on the far border.  The first one
        // found wins a tie.
        let mut cheapest: Option<(Coord, f64)> = None;
        for position in 0..direction.span(width, height) {
            let here = direction.at(last, position);
            let cost = graph.required_cost(here)?;
            if cheapest.map_or(true, |(_, lowest)| cost < lowest) {
                cheapest = Some((here, cost));
            }
        }
        let (mut current, cost) = cheapest.ok_or_else(|| {
            SeamError::InternalConsistency("the far border has no pixels".to_string())
        })?;

        // Working backwards, follow the parents to the starting border.
        let mut pixels = Vec::with_capacity(lines as usize);
        loop {
            pixels.push(current);
            if pixels.len() > lines as usize {
                return Err(SeamError::InternalConsistency(format!(
                    "parent chain from {} is longer than the {} lines of the map",
                    pixels[0], lines
                )));
            }
            match graph.parent(current) {
                Some(parent) => current = parent,
                None => break,
            }
        }
        pixels.reverse();

        let seam = Seam {
            direction,
            pixels,
            cost,
        };
        if seam.len() != lines as usize || !seam.is_ordered() {
            return Err(SeamError::InternalConsistency(format!(
                "{} seam does not cross all {} lines",
                direction, lines
            )));
        }
        Ok(seam)
    }

    /// Build a seam from a list of positions, one per line.  Used to
    /// pin a seam down by hand; the cost is whatever the caller says.
    pub fn from_positions(direction: Direction, positions: &[u32], cost: f64) -> Seam {
        Seam {
            direction,
            pixels: positions
                .iter()
                .enumerate()
                .map(|(line, position)| direction.at(line as u32, *position))
                .collect(),
            cost,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn pixels(&self) -> &[Coord] {
        &self.pixels
    }

    pub fn iter(&self) -> impl Iterator<Item = &Coord> {
        self.pixels.iter()
    }

    /// The cumulative energy the seam was selected with.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Where the seam crosses `line`.
    pub fn position(&self, line: u32) -> Option<u32> {
        self.pixels
            .get(line as usize)
            .map(|c| self.direction.position_of(*c))
    }

    /// Every position along the seam, in line order.
    pub fn positions(&self) -> Vec<u32> {
        self.pixels
            .iter()
            .map(|c| self.direction.position_of(*c))
            .collect()
    }

    // Pixel n sits on line n.
    fn is_ordered(&self) -> bool {
        self.pixels
            .iter()
            .enumerate()
            .all(|(line, c)| self.direction.line_of(*c) as usize == line)
    }

    /// True when the seam holds one pixel per line and never steps
    /// more than one position between neighboring lines.
    pub fn is_connected(&self) -> bool {
        self.is_ordered()
            && self.pixels.windows(2).all(|pair| {
                let a = self.direction.position_of(pair[0]);
                let b = self.direction.position_of(pair[1]);
                (i64::from(a) - i64::from(b)).abs() <= 1
            })
    }
}
