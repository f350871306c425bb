// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seam removal and the carving loop
//!
//! The removers build each smaller image from scratch rather than
//! shuffling the old buffer in place; the loop replaces its working
//! image wholesale after every removal, so no stage ever sees a
//! half-compacted grid.

use crate::energy::compute_energy;
use crate::error::{CarveError, Result};
use crate::seam::{find_horizontal_seam, find_vertical_seam, Orientation};
use image::{GenericImageView, ImageBuffer, Pixel, Primitive, Rgb, RgbImage};
use log::debug;

/// Remove a vertical seam, producing an image one column narrower.
/// Each row keeps the pixels left of its cut and shifts the rest one
/// step left.
///
/// The seam must hold one column per row, each within the image; seams
/// come from the finder, so this is the producer's contract rather than
/// something checked here.
pub fn remove_vertical_seam<I, P, S>(image: &I, seam: &[u32]) -> ImageBuffer<P, Vec<S>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    let mut imgbuf = ImageBuffer::new(width - 1, height);
    for y in 0..height {
        let cut = seam[y as usize];
        for x in 0..width {
            if x < cut {
                imgbuf.put_pixel(x, y, image.get_pixel(x, y));
            } else if x > cut {
                imgbuf.put_pixel(x - 1, y, image.get_pixel(x, y));
            }
        }
    }
    imgbuf
}

/// Remove a horizontal seam, producing an image one row shorter.  Each
/// column keeps the pixels above its cut and shifts the rest one step
/// up.  Same producer contract as [`remove_vertical_seam`].
pub fn remove_horizontal_seam<I, P, S>(image: &I, seam: &[u32]) -> ImageBuffer<P, Vec<S>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    let mut imgbuf = ImageBuffer::new(width, height - 1);
    for x in 0..width {
        let cut = seam[x as usize];
        for y in 0..height {
            if y < cut {
                imgbuf.put_pixel(x, y, image.get_pixel(x, y));
            } else if y > cut {
                imgbuf.put_pixel(x, y - 1, image.get_pixel(x, y));
            }
        }
    }
    imgbuf
}

const SEAM_COLOR: Rgb<u8> = Rgb([255, 0, 0]);

/// Paint a seam red on an RGB image.  Visualization only: the overlay
/// never feeds back into the energy field or the seam search.
pub fn mark_seam(image: &mut RgbImage, seam: &[u32], orientation: Orientation) {
    match orientation {
        Orientation::Vertical => {
            for (y, &x) in seam.iter().enumerate() {
                image.put_pixel(x, y as u32, SEAM_COLOR);
            }
        }
        Orientation::Horizontal => {
            for (x, &y) in seam.iter().enumerate() {
                image.put_pixel(x as u32, y, SEAM_COLOR);
            }
        }
    }
}

/// Notified with the current image and each seam after it is found and
/// before it is removed.  Any `FnMut(&I, &[u32], Orientation)` closure
/// qualifies.  Observers get a shared reference; they can draw their
/// own copies but never alter what the carver goes on to cut.
pub trait SeamObserver<I> {
    fn seam_computed(&mut self, image: &I, seam: &[u32], orientation: Orientation);
}

impl<I, F> SeamObserver<I> for F
where
    F: FnMut(&I, &[u32], Orientation),
{
    fn seam_computed(&mut self, image: &I, seam: &[u32], orientation: Orientation) {
        self(image, seam, orientation)
    }
}

/// A struct for holding the image to be carved.
pub struct SeamCarver<'a, I, P, S>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    image: &'a I,
}

impl<'a, I, P, S> SeamCarver<'a, I, P, S>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    /// Creates a new SeamCarver with an image to be carved.
    pub fn new(image: &'a I) -> Self {
        Self { image }
    }

    /// Carve down to `new_width` by `new_height` with no observer.
    pub fn carve(&self, new_width: u32, new_height: u32) -> Result<ImageBuffer<P, Vec<S>>> {
        self.carve_with(
            new_width,
            new_height,
            &mut |_: &ImageBuffer<P, Vec<S>>, _: &[u32], _: Orientation| {},
        )
    }

    // The energy map and seam table are recalculated from scratch for
    // every single removal, including between the vertical and
    // horizontal halves of one pass: a removal shifts every coordinate
    // past the seam, so yesterday's field addresses the wrong pixels.

    /// Given a desired new width and height, repeatedly carve seams out
    /// of the image until both dimensions are satisfied.  Each pass
    /// removes a vertical seam while the image is too wide and then a
    /// horizontal seam while it is too tall, so the loop ends after
    /// exactly `(width - new_width) + (height - new_height)` removals.
    ///
    /// A dimension already at or below its target is left alone; this
    /// never upscales.  Fails with [`CarveError::InvalidDimensions`] on
    /// a zero target and [`CarveError::DegenerateGrid`] on an empty
    /// image, before any seam work.
    pub fn carve_with(
        &self,
        new_width: u32,
        new_height: u32,
        observer: &mut dyn SeamObserver<ImageBuffer<P, Vec<S>>>,
    ) -> Result<ImageBuffer<P, Vec<S>>> {
        if new_width == 0 || new_height == 0 {
            return Err(CarveError::InvalidDimensions {
                width: new_width,
                height: new_height,
            });
        }
        let (mut width, mut height) = self.image.dimensions();
        if width == 0 || height == 0 {
            return Err(CarveError::DegenerateGrid { width, height });
        }

        // Initialize the scratch space.  Dimensions only shrink from
        // here, and targets are positive, so the grid stays non-empty.
        let mut scratch = ImageBuffer::<P, Vec<S>>::new(width, height);
        self.image.pixels().for_each(|p| scratch[(p.0, p.1)] = p.2);

        while width > new_width || height > new_height {
            if width > new_width {
                let energy = compute_energy(&scratch);
                let seam = find_vertical_seam(&energy);
                observer.seam_computed(&scratch, &seam, Orientation::Vertical);
                scratch = remove_vertical_seam(&scratch, &seam);
                width -= 1;
            }
            if height > new_height {
                let energy = compute_energy(&scratch);
                let seam = find_horizontal_seam(&energy);
                observer.seam_computed(&scratch, &seam, Orientation::Horizontal);
                scratch = remove_horizontal_seam(&scratch, &seam);
                height -= 1;
            }
            debug!("carved to {}x{}", width, height);
        }
        Ok(scratch)
    }
}
