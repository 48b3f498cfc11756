// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! The energy of a pixel is the dual-gradient magnitude of its
//! neighborhood: the central difference across it horizontally and
//! vertically, summed over the red, green and blue channels.  Pixels
//! on the border have no neighbor on one side and get a fixed energy
//! instead.

use crate::errors::{CarveError, Result};
use crate::pixelpairs::gradient_squared;
use crate::twodmap::TwoDimensionalMap;
use image::{GenericImageView, Pixel, Primitive};
use itertools::iproduct;

/// The energy of every pixel on the border of the picture.  Interior
/// energies never exceed sqrt(6 * 255²) ≈ 624.6.
pub const BORDER_ENERGY: f64 = 1000.0;

/// Read-only access to a grid of energies.  The seam graph is built
/// over this, so the same search runs on the field as stored and on
/// its transposition (see `Flipper`).
pub trait EnergyView {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Energy at (x, y).  Callers guarantee the coordinate is in
    /// bounds.
    fn energy(&self, x: u32, y: u32) -> f64;

    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }
}

/// Compute the energy of a single pixel.  Border pixels are assigned
/// `BORDER_ENERGY`; interior pixels get sqrt(|Δx|² + |Δy|²), with the
/// two squared gradients added before the root is taken.
pub fn pixel_energy<I, P, S>(image: &I, x: u32, y: u32) -> f64
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    if x == 0 || y == 0 || x + 1 >= width || y + 1 >= height {
        return BORDER_ENERGY;
    }
    let grad_x = gradient_squared(&image.get_pixel(x + 1, y), &image.get_pixel(x - 1, y));
    let grad_y = gradient_squared(&image.get_pixel(x, y + 1), &image.get_pixel(x, y - 1));
    (grad_x + grad_y).sqrt()
}

/// Compute the energy of every pixel in an image.
pub fn calculate_energy<I, P, S>(image: &I) -> TwoDimensionalMap<f64>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    let mut emap = TwoDimensionalMap::new(width, height);
    for (y, x) in iproduct!(0..height, 0..width) {
        emap[(x, y)] = pixel_energy(image, x, y);
    }
    emap
}

/// The cached energy of every pixel of the picture being carved.
/// Rebuilt wholesale from the picture by `recompute`, which is the
/// only way to change it.
#[derive(Debug, Clone, PartialEq)]
pub struct EnergyField {
    map: TwoDimensionalMap<f64>,
}

impl EnergyField {
    pub fn new<I, P, S>(image: &I) -> Self
    where
        I: GenericImageView<Pixel = P>,
        P: Pixel<Subpixel = S> + 'static,
        S: Primitive + 'static,
    {
        EnergyField {
            map: calculate_energy(image),
        }
    }

    /// Throw away every cached energy and rebuild the field from the
    /// image, adopting the image's dimensions.
    pub fn recompute<I, P, S>(&mut self, image: &I)
    where
        I: GenericImageView<Pixel = P>,
        P: Pixel<Subpixel = S> + 'static,
        S: Primitive + 'static,
    {
        self.map = calculate_energy(image);
    }

    /// The energy of the pixel at column `x`, row `y`.
    pub fn energy_at(&self, x: u32, y: u32) -> Result<f64> {
        self.map.get(x, y).ok_or(CarveError::OutOfRange {
            x,
            y,
            width: self.map.width,
            height: self.map.height,
        })
    }

    /// The largest energy in the field, or zero for an empty one.
    pub fn max_energy(&self) -> f64 {
        self.map.as_slice().iter().cloned().fold(0.0, f64::max)
    }
}

impl EnergyView for EnergyField {
    fn width(&self) -> u32 {
        self.map.width
    }

    fn height(&self) -> u32 {
        self.map.height
    }

    fn energy(&self, x: u32, y: u32) -> f64 {
        self.map[(x, y)]
    }
}

impl EnergyView for TwoDimensionalMap<f64> {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn energy(&self, x: u32, y: u32) -> f64 {
        self[(x, y)]
    }
}
