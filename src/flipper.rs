// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Energy dimensional flipper
//!
//! A proxy over an `EnergyView` that maps the width to the original
//! height, and vice versa, as well as every x to y and vice versa.
//!
//! A horizontal seam of a picture is a vertical seam of the picture
//! turned on its side, so by virtually "flipping" the energy field
//! 90° the one layered search serves both orientations, and nothing
//! is copied to do it.

use crate::energy::EnergyView;

pub struct Flipper<'a, V: EnergyView> {
    pub view: &'a V,
}

impl<'a, V: EnergyView> Flipper<'a, V> {
    pub fn new(view: &'a V) -> Self {
        Flipper { view }
    }
}

impl<'a, V: EnergyView> EnergyView for Flipper<'a, V> {
    fn width(&self) -> u32 {
        self.view.height()
    }

    fn height(&self) -> u32 {
        self.view.width()
    }

    fn energy(&self, x: u32, y: u32) -> f64 {
        self.view.energy(y, x)
    }
}
