// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Content-aware image resizing by seam carving.
//!
//! The image's dual-gradient energy is computed, the cheapest
//! connected border-to-border path of pixels (a *seam*) is found by
//! dynamic programming, and that seam is either removed, shrinking the
//! image by one pixel, or painted for inspection.

pub mod coord;
pub use coord::{Coord, Direction};

pub mod errors;
pub use errors::{Result, SeamError};

pub mod twodmap;

pub mod energy;
pub use energy::{calculate_energy, energy_to_image, EnergyMap, MIN_DIMENSION};

pub mod digraph;
pub use digraph::SeamDigraph;

pub mod seam;
pub use seam::Seam;

pub mod seamfinder;
pub use seamfinder::{energy_to_horizontal_seam, energy_to_vertical_seam, DualGradient, SeamFinder};

pub mod seamcarver;
pub use seamcarver::{mark_seam, paint_seam, remove_seam, SeamCarver, SEAM_MARKER};

pub mod imageio;
