// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The seam digraph
//!
//! Given an energy map and a direction, sweep the image line by line
//! and record, for every pixel, the cheapest cumulative energy of any
//! connected path from the starting border to that pixel, along with
//! which pixel on the previous line that path came through.
//!
//! For a vertical seam, the starting border is the top row:
//!
//! ```text
//!            ⎧ M(x,y−1)
//! M(x,y)=e + min⎨ M(x−1,y−1)
//!            ⎩ M(x+1,y−1)
//! ```
//!
//! and a horizontal seam is the same thing with x and y exchanged.

use crate::coord::{Coord, Direction};
use crate::energy::EnergyMap;
use crate::errors::{Result, SeamError};
use crate::twodmap::TwoDimensionalMap;

// Candidate predecessors, in order of preference when their costs
// tie: straight back, then toward the origin, then away from it.
const PREDECESSOR_OFFSETS: [i64; 3] = [0, -1, 1];

/// The cost map and parent map produced by one sweep over an energy
/// map.  Both are keyed by exactly the pixels of that energy map.
#[derive(Debug)]
pub struct SeamDigraph {
    direction: Direction,
    cost: TwoDimensionalMap<Option<f64>>,
    parent: TwoDimensionalMap<Option<Coord>>,
}

impl SeamDigraph {
    /// Run the dynamic program over `energy` in the given direction.
    pub fn solve(energy: &EnergyMap, direction: Direction) -> Result<Self> {
        let (width, height) = energy.dimensions();
        if width == 0 || height == 0 {
            return Err(SeamError::Validation(format!(
                "cannot find a seam in an empty {}x{} energy map",
                width, height
            )));
        }

        let lines = direction.lines(width, height);
        let span = direction.span(width, height);
        let mut graph = SeamDigraph {
            direction,
            cost: TwoDimensionalMap::new(width, height),
            parent: TwoDimensionalMap::new(width, height),
        };

        // The starting border costs exactly its own energy.
        for position in 0..span {
            let here = direction.at(0, position);
            graph.cost[here] = Some(energy[here]);
        }

        for line in 1..lines {
            for position in 0..span {
                let here = direction.at(line, position);
                let (parent, parent_cost) = graph.cheapest_predecessor(line, position)?;
                graph.cost[here] = Some(energy[here] + parent_cost);
                graph.parent[here] = Some(parent);
            }
        }
        Ok(graph)
    }

    // The 1-3 pixels on the previous line reachable from `position`,
    // first minimum wins.
    fn cheapest_predecessor(&self, line: u32, position: u32) -> Result<(Coord, f64)> {
        let span = self.direction.span(self.cost.width(), self.cost.height());
        let mut best: Option<(Coord, f64)> = None;
        for offset in PREDECESSOR_OFFSETS.iter() {
            let candidate = i64::from(position) + offset;
            if candidate < 0 || candidate >= i64::from(span) {
                continue;
            }
            let coord = self.direction.at(line - 1, candidate as u32);
            let cost = self.required_cost(coord)?;
            match best {
                Some((_, lowest)) if lowest <= cost => (),
                _ => best = Some((coord, cost)),
            }
        }
        best.ok_or_else(|| {
            SeamError::InternalConsistency(format!(
                "no predecessor for line {} position {}",
                line, position
            ))
        })
    }

    // A cost the sweep has already recorded.  Anything else means the
    // map is being read against the wrong raster.
    pub(crate) fn required_cost(&self, c: Coord) -> Result<f64> {
        match self.cost.get(c) {
            Some(Some(cost)) => Ok(cost),
            _ => Err(SeamError::InternalConsistency(format!(
                "no cost recorded for pixel {} in a {}x{} map",
                c,
                self.cost.width(),
                self.cost.height()
            ))),
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.cost.dimensions()
    }

    /// The minimum cumulative energy of any path from the starting
    /// border to `c`, if `c` is in the map.
    pub fn cost(&self, c: Coord) -> Option<f64> {
        self.cost.get(c).and_then(|cost| cost)
    }

    /// The predecessor of `c` on its cheapest path.  Pixels on the
    /// starting border, and pixels outside the map, have none.
    pub fn parent(&self, c: Coord) -> Option<Coord> {
        self.parent.get(c).and_then(|parent| parent)
    }
}
