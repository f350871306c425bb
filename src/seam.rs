// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Minimum-cost seam search
//!
//! A dynamic program over the energy field, one table sweep from the
//! near boundary to the far one and a back-pointer walk home.  Each
//! cell stores the cheapest accumulated energy of any path reaching it
//! plus the coordinate of the predecessor that achieved it, so the two
//! classic tables (cost, choice) live in one co-indexed grid.
//!
//! Tie-breaking is part of the contract, not an accident: a candidate
//! predecessor only replaces the current best when it is *strictly*
//! cheaper.  The straight predecessor is evaluated first and therefore
//! wins all ties, and the smaller-index diagonal wins ties against the
//! larger one.  The endpoint scan uses the same strict comparison, so
//! equal-cost seams resolve to the smallest end index.  For a given
//! energy field the result is fully deterministic.

use crate::energy::EnergyField;
use crate::gridmap::Grid2D;

/// Which way a seam runs: a vertical seam spans top to bottom and costs
/// the image one column; a horizontal seam spans left to right and
/// costs it one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

#[derive(Default, Debug, Copy, Clone)]
struct CostAndBackPointer {
    cost: f64,
    parent: u32,
}

/// Given an energy field, return the list of x-coordinates that, when
/// zipped with the range `(0..height)`, give the XY coordinates for
/// each pixel in the cheapest top-to-bottom seam.
pub fn find_vertical_seam(energy: &EnergyField) -> Vec<u32> {
    let (width, height) = energy.dimensions();
    let mut table: Grid2D<CostAndBackPointer> = Grid2D::new(width, height);

    // The first row reaches itself for free.
    for x in 0..width {
        table[(x, 0)].cost = energy[(x, 0)];
    }

    for y in 1..height {
        for x in 0..width {
            // Straight up is the default; a diagonal only takes over
            // when strictly cheaper, up-left ahead of up-right.
            let mut best = CostAndBackPointer {
                cost: table[(x, y - 1)].cost,
                parent: x,
            };
            if x > 0 && table[(x - 1, y - 1)].cost < best.cost {
                best = CostAndBackPointer {
                    cost: table[(x - 1, y - 1)].cost,
                    parent: x - 1,
                };
            }
            if x < width - 1 && table[(x + 1, y - 1)].cost < best.cost {
                best = CostAndBackPointer {
                    cost: table[(x + 1, y - 1)].cost,
                    parent: x + 1,
                };
            }
            table[(x, y)] = CostAndBackPointer {
                cost: energy[(x, y)] + best.cost,
                parent: best.parent,
            };
        }
    }

    // Find the x coordinate of the bottommost cell with the least
    // accumulated cost; a strict scan keeps the leftmost on ties.
    let mut seam_col = 0;
    for x in 1..width {
        if table[(x, height - 1)].cost < table[(seam_col, height - 1)].cost {
            seam_col = x;
        }
    }

    // Working backwards, generate a vec of x coordinates that map to
    // the seam, reverse and return.
    (0..height)
        .rev()
        .fold(Vec::with_capacity(height as usize), |mut acc, y| {
            acc.push(seam_col);
            seam_col = table[(seam_col, y)].parent;
            acc
        })
        .into_iter()
        .rev()
        .collect()
}

/// Given an energy field, return the list of y-coordinates that, when
/// zipped with the range `(0..width)`, give the XY coordinates for each
/// pixel in the cheapest left-to-right seam.
pub fn find_horizontal_seam(energy: &EnergyField) -> Vec<u32> {
    let (width, height) = energy.dimensions();
    let mut table: Grid2D<CostAndBackPointer> = Grid2D::new(width, height);

    for y in 0..height {
        table[(0, y)].cost = energy[(0, y)];
    }

    for x in 1..width {
        for y in 0..height {
            // Same row is the default; the row above beats the row
            // below on ties, and either beats same-row only when
            // strictly cheaper.
            let mut best = CostAndBackPointer {
                cost: table[(x - 1, y)].cost,
                parent: y,
            };
            if y > 0 && table[(x - 1, y - 1)].cost < best.cost {
                best = CostAndBackPointer {
                    cost: table[(x - 1, y - 1)].cost,
                    parent: y - 1,
                };
            }
            if y < height - 1 && table[(x - 1, y + 1)].cost < best.cost {
                best = CostAndBackPointer {
                    cost: table[(x - 1, y + 1)].cost,
                    parent: y + 1,
                };
            }
            table[(x, y)] = CostAndBackPointer {
                cost: energy[(x, y)] + best.cost,
                parent: best.parent,
            };
        }
    }

    let mut seam_row = 0;
    for y in 1..height {
        if table[(width - 1, y)].cost < table[(width - 1, seam_row)].cost {
            seam_row = y;
        }
    }

    (0..width)
        .rev()
        .fold(Vec::with_capacity(width as usize), |mut acc, x| {
            acc.push(seam_row);
            seam_row = table[(x, seam_row)].parent;
            acc
        })
        .into_iter()
        .rev()
        .collect()
}
