// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarver - the orchestrator
//!
//! Owns the picture being carved and its energy field, and keeps the
//! two in lockstep: every removal builds the smaller picture first,
//! and only once that has succeeded rebuilds the energies from it.

use crate::energy::EnergyField;
use crate::errors::{CarveError, Result};
use crate::grideditor::remove_seam;
use crate::seamfinder::SeamFinder;
use crate::seamgraph::Orientation;
use crate::seamsearch::find_seam;
use image::RgbImage;
use tracing::{debug, info};

/// A picture being carved, with the energy of every one of its pixels.
#[derive(Debug, Clone)]
pub struct SeamCarver {
    picture: RgbImage,
    energy: EnergyField,
}

impl SeamCarver {
    /// Takes a private copy of the picture; later changes to the
    /// caller's picture do not reach the carver, nor the reverse.
    pub fn new(picture: &RgbImage) -> Result<Self> {
        let (width, height) = picture.dimensions();
        if width == 0 || height == 0 {
            return Err(CarveError::InvalidArgument(format!(
                "cannot carve a {}x{} picture",
                width, height
            )));
        }
        debug!(width, height, "new seam carver");
        Ok(SeamCarver {
            picture: picture.clone(),
            energy: EnergyField::new(picture),
        })
    }

    pub fn width(&self) -> u32 {
        self.picture.width()
    }

    pub fn height(&self) -> u32 {
        self.picture.height()
    }

    /// The energy of the pixel at column `x`, row `y`.
    pub fn energy(&self, x: u32, y: u32) -> Result<f64> {
        self.energy.energy_at(x, y)
    }

    /// Read-only access to the whole energy field.
    pub fn energy_field(&self) -> &EnergyField {
        &self.energy
    }

    /// A copy of the current picture.
    pub fn picture(&self) -> RgbImage {
        self.picture.clone()
    }

    /// Give up the carver and keep its picture.
    pub fn into_picture(self) -> RgbImage {
        self.picture
    }

    /// Remove a vertical seam, one x per row, leaving the picture one
    /// column narrower.
    pub fn remove_vertical_seam(&mut self, seam: &[u32]) -> Result<()> {
        self.remove(seam, Orientation::Vertical)
    }

    /// Remove a horizontal seam, one y per column, leaving the picture
    /// one row shorter.
    pub fn remove_horizontal_seam(&mut self, seam: &[u32]) -> Result<()> {
        self.remove(seam, Orientation::Horizontal)
    }

    fn remove(&mut self, seam: &[u32], orientation: Orientation) -> Result<()> {
        // Nothing below can fail, so picture and energy change together.
        let picture = remove_seam(&self.picture, seam, orientation)?;
        self.energy.recompute(&picture);
        self.picture = picture;
        debug!(
            ?orientation,
            width = self.width(),
            height = self.height(),
            "removed seam"
        );
        Ok(())
    }

    fn carve_once(&mut self, orientation: Orientation) -> Result<()> {
        let seam = find_seam(&self.energy, orientation)?;
        self.remove(&seam, orientation)
    }

    // The whole energy field is rebuilt after every seam.  Only the
    // pixels beside the removed seam actually change.

    /// Repeatedly carve seams until the picture is `new_width` by
    /// `new_height`.  While both dimensions are too large, vertical and
    /// horizontal seams alternate; then the remaining direction is
    /// finished on its own.
    pub fn carve(&mut self, new_width: u32, new_height: u32) -> Result<()> {
        if new_width == 0 || new_height == 0 {
            return Err(CarveError::InvalidArgument(format!(
                "cannot carve down to {}x{}",
                new_width, new_height
            )));
        }
        if self.width() < new_width || self.height() < new_height {
            return Err(CarveError::InvalidArgument(
                "seam carving cannot upscale a picture".to_string(),
            ));
        }

        let mut direction = Orientation::Vertical;
        while self.width() > new_width && self.height() > new_height {
            self.carve_once(direction)?;
            direction = direction.turn();
            info!(width = self.width(), height = self.height(), "both");
        }
        while self.width() > new_width {
            self.carve_once(Orientation::Vertical)?;
            info!(width = self.width(), height = self.height(), "width");
        }
        while self.height() > new_height {
            self.carve_once(Orientation::Horizontal)?;
            info!(width = self.width(), height = self.height(), "height");
        }
        Ok(())
    }
}

impl SeamFinder for SeamCarver {
    fn find_horizontal_seam(&self) -> Result<Vec<u32>> {
        find_seam(&self.energy, Orientation::Horizontal)
    }

    fn find_vertical_seam(&self) -> Result<Vec<u32>> {
        find_seam(&self.energy, Orientation::Vertical)
    }
}
