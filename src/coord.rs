// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Coordinates and sweep directions
//!
//! Vertical and horizontal seams are the same algorithm with the axes
//! exchanged.  Rather than writing everything twice, the solver and
//! extractor talk in terms of *lines* (the axis being swept: rows for
//! a vertical seam, columns for a horizontal one) and *positions*
//! along each line, and `Direction` maps those back onto (x, y).

use std::fmt;

/// A pixel address.  0-indexed, x across, y down.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: u32,
    pub y: u32,
}

impl Coord {
    pub fn new(x: u32, y: u32) -> Self {
        Coord { x, y }
    }
}

impl From<(u32, u32)> for Coord {
    fn from((x, y): (u32, u32)) -> Self {
        Coord { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Which way a seam runs.  A vertical seam goes top to bottom and
/// removing it makes the image one pixel narrower; a horizontal seam
/// goes left to right and removing it makes the image one pixel
/// shorter.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Vertical,
    Horizontal,
}

impl Direction {
    /// How many lines the seam crosses, which is also its length.
    pub fn lines(self, width: u32, height: u32) -> u32 {
        match self {
            Direction::Vertical => height,
            Direction::Horizontal => width,
        }
    }

    /// How many positions each line holds.
    pub fn span(self, width: u32, height: u32) -> u32 {
        match self {
            Direction::Vertical => width,
            Direction::Horizontal => height,
        }
    }

    /// The pixel at `position` on `line`.
    pub fn at(self, line: u32, position: u32) -> Coord {
        match self {
            Direction::Vertical => Coord::new(position, line),
            Direction::Horizontal => Coord::new(line, position),
        }
    }

    /// Which line a pixel sits on.
    pub fn line_of(self, c: Coord) -> u32 {
        match self {
            Direction::Vertical => c.y,
            Direction::Horizontal => c.x,
        }
    }

    /// Where along its line a pixel sits.
    pub fn position_of(self, c: Coord) -> u32 {
        match self {
            Direction::Vertical => c.x,
            Direction::Horizontal => c.y,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Direction::Vertical => "vertical",
            Direction::Horizontal => "horizontal",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directions_exchange_axes() {
        let c = Direction::Vertical.at(4, 1);
        assert_eq!(c, Coord::new(1, 4));
        assert_eq!(Direction::Vertical.line_of(c), 4);
        assert_eq!(Direction::Vertical.position_of(c), 1);

        let c = Direction::Horizontal.at(4, 1);
        assert_eq!(c, Coord::new(4, 1));
        assert_eq!(Direction::Horizontal.line_of(c), 4);
        assert_eq!(Direction::Horizontal.position_of(c), 1);

        assert_eq!(Direction::Vertical.lines(5, 3), 3);
        assert_eq!(Direction::Horizontal.lines(5, 3), 5);
        assert_eq!(Direction::Vertical.span(5, 3), 5);
        assert_eq!(Direction::Horizontal.span(5, 3), 3);
    }
}
