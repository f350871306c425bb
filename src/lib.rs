// #![deny(missing_docs)]

//! Content-aware image resizing.
//!
//! Repeatedly finds the least-important one-pixel-wide path through an
//! image and removes it, shrinking the image toward a target size while
//! leaving the salient content alone.  The pieces are exposed
//! individually (energy map, seam search, seam removal) so that callers
//! can drive the loop themselves; [`SeamCarver`] runs the whole thing.

pub mod carver;
pub mod energy;
pub mod error;
pub mod gridmap;
pub mod io;
pub mod seam;
mod ternary;

pub use carver::{
    mark_seam, remove_horizontal_seam, remove_vertical_seam, SeamCarver, SeamObserver,
};
pub use energy::{compute_energy, EnergyField};
pub use error::{CarveError, Result};
pub use io::{load_image, save_image};
pub use seam::{find_horizontal_seam, find_vertical_seam, Orientation};
