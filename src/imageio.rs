// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Loading and storing rasters.  The format is whatever the `image`
//! crate infers from the file; anything it decodes is flattened to
//! 8-bit RGB on the way in.

use crate::errors::{Result, SeamError};
use image::{GrayImage, RgbImage};
use std::path::Path;
use tracing::debug;

/// Read and decode the image at `path` as 8-bit RGB.
pub fn load_rgb<Q: AsRef<Path>>(path: Q) -> Result<RgbImage> {
    let path = path.as_ref();
    let image = image::open(path)
        .map_err(|e| SeamError::io(path, e))?
        .to_rgb8();
    debug!(path = %path.display(), width = image.width(), height = image.height(), "image loaded");
    Ok(image)
}

/// Encode `image` to `path`, in the format its extension names.
pub fn save_rgb<Q: AsRef<Path>>(image: &RgbImage, path: Q) -> Result<()> {
    let path = path.as_ref();
    image.save(path).map_err(|e| SeamError::io(path, e))?;
    debug!(path = %path.display(), "image saved");
    Ok(())
}

/// Encode a greyscale `image` to `path`.
pub fn save_gray<Q: AsRef<Path>>(image: &GrayImage, path: Q) -> Result<()> {
    let path = path.as_ref();
    image.save(path).map_err(|e| SeamError::io(path, e))?;
    debug!(path = %path.display(), "image saved");
    Ok(())
}
