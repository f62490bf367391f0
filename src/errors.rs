// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors
//!
//! Every fallible operation in the carver reports one of four kinds
//! of failure.  None of them are recovered from inside the library;
//! they all go straight back to the caller.

use failure::Fail;
use std::fmt::Display;
use std::path::Path;

/// The four ways a carve can go wrong.
#[derive(Debug, Fail, PartialEq)]
pub enum SeamError {
    /// The invocation was missing a parameter, or a parameter could
    /// not be understood.
    #[fail(display = "configuration error: {}", _0)]
    Configuration(String),

    /// The raster could not be read or decoded, or the destination
    /// could not be written.
    #[fail(display = "cannot access image {}: {}", path, reason)]
    Io { path: String, reason: String },

    /// The request cannot be satisfied by this raster: too many
    /// seams, or a raster too small to compute energy over.
    #[fail(display = "invalid request: {}", _0)]
    Validation(String),

    /// A map was consulted for a pixel it was never computed for.
    /// This only happens when a map built against one raster is used
    /// against another.
    #[fail(display = "internal consistency error: {}", _0)]
    InternalConsistency(String),
}

impl SeamError {
    pub(crate) fn io<P: AsRef<Path>, E: Display>(path: P, err: E) -> Self {
        SeamError::Io {
            path: path.as_ref().display().to_string(),
            reason: err.to_string(),
        }
    }
}

/// Shorthand used throughout the crate.
pub type Result<T> = std::result::Result<T, SeamError>;
