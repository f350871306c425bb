// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! The energy of a pixel is the magnitude of the local color gradient:
//! the per-channel differences between its horizontal neighbors and
//! between its vertical neighbors, squared, summed, and square-rooted.
//! Neighbors are sampled with toroidal wrap-around, so the pixel to the
//! left of column 0 is the last column and the pixel below the last row
//! is row 0.  The wrap is a policy choice: it removes every border
//! special case, at the cost of treating the image as cyclic, and it
//! changes border energies relative to a clamped or mirrored sampling.

use crate::cq;
use crate::gridmap::Grid2D;
use image::{GenericImageView, Pixel, Primitive};
use itertools::iproduct;
use num_traits::NumCast;

/// Per-pixel importance, same dimensions as the image it came from.
/// Recomputed from scratch after every removal, since every coordinate
/// past the seam shifts.
pub type EnergyField = Grid2D<f64>;

// (Pixel, Pixel) -> squared gradient
//
// Takes the channels (R,G,B) from two pixels and maps the difference
// between each channel, squares it, and then sums them all up:
//
//        |Δ|² = (Δr)²+(Δg)²+(Δb)²
#[inline]
fn gradient_squared<P, S>(p1: &P, p2: &P) -> f64
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let c1 = p1.to_rgb();
    let c2 = p2.to_rgb();
    c1.0
        .iter()
        .zip(c2.0.iter())
        .map(|(a, b)| {
            let a: f64 = NumCast::from(*a).unwrap();
            let b: f64 = NumCast::from(*b).unwrap();
            let d = b - a;
            d * d
        })
        .sum()
}

// Image -> Energy Field

/// Compute the energy of every pixel in an image.  Generic on the image
/// type; non-RGB pixels are widened through their RGB conversion so all
/// three channels contribute.
///
/// A zero-sized image is a precondition violation here; the carve loop
/// refuses degenerate grids before this is ever reached.
pub fn compute_energy<I, P, S>(image: &I) -> EnergyField
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    let (mw, mh) = (width - 1, height - 1);

    let mut field = Grid2D::new(width, height);
    for (y, x) in iproduct!(0..height, 0..width) {
        let (leftpixel, rightpixel, uppixel, downpixel) = (
            image.get_pixel(cq!(x == 0, mw, x - 1), y),
            image.get_pixel(cq!(x == mw, 0, x + 1), y),
            image.get_pixel(x, cq!(y == 0, mh, y - 1)),
            image.get_pixel(x, cq!(y == mh, 0, y + 1)),
        );
        field[(x, y)] = (gradient_squared(&leftpixel, &rightpixel)
            + gradient_squared(&uppixel, &downpixel))
        .sqrt();
    }
    field
}
