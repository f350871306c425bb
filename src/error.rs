// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error types
//!
//! Everything fallible lives at the boundary: loading, saving, and the
//! up-front dimension checks.  The numeric passes (energy, seam search,
//! removal) are pure transformations and have no error paths of their
//! own.

use std::path::PathBuf;
use thiserror::Error;

/// The ways a carve can fail.
#[derive(Error, Debug)]
pub enum CarveError {
    /// A target dimension of zero.  Surfaced before any seam work.
    #[error("invalid target dimensions {width}x{height}: both must be positive")]
    InvalidDimensions { width: u32, height: u32 },

    /// An image with no rows or no columns; neither an energy field
    /// nor a seam exists for it.
    #[error("degenerate {width}x{height} image: nothing to carve")]
    DegenerateGrid { width: u32, height: u32 },

    /// The source could not be decoded into a pixel grid.
    #[error("failed to load image from {}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The carved image could not be written out.
    #[error("failed to save image to {}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Result alias for carve operations.
pub type Result<T> = std::result::Result<T, CarveError>;
