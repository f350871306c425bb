// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Image loading and saving
//!
//! Thin wrappers over the `image` crate that pin the working pixel
//! format to 8-bit RGB and attach the offending path to any failure.
//! Format detection on load and encoding choice on save both follow the
//! file extension; neither is retried, since nothing about a carve
//! changes between attempts.

use crate::error::{CarveError, Result};
use image::RgbImage;
use std::path::Path;

/// Decode the image at `path` into an 8-bit RGB buffer.
pub fn load_image(path: &Path) -> Result<RgbImage> {
    let image = image::open(path).map_err(|source| CarveError::Load {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(image.to_rgb8())
}

/// Encode `image` to `path`, format chosen from the extension.
pub fn save_image(image: &RgbImage, path: &Path) -> Result<()> {
    image.save(path).map_err(|source| CarveError::Save {
        path: path.to_path_buf(),
        source,
    })
}
