// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Render an energy field as a greyscale picture, brightest where the
//! energy is highest.  Handy for seeing what the carver will avoid.

use crate::energy::{EnergyField, EnergyView};
use image::{GrayImage, ImageBuffer, Luma};
use num_traits::clamp;

pub fn energy_to_image(energy: &EnergyField) -> GrayImage {
    let (width, height) = energy.dimensions();
    let factor = energy.max_energy();
    ImageBuffer::from_fn(width, height, |x, y| {
        let scaled = if factor > 0.0 {
            energy.energy(x, y) * 255.0 / factor
        } else {
            0.0
        };
        Luma([clamp(scaled.round(), 0.0, 255.0) as u8])
    })
}
