// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Content-aware image resizing by seam carving.
//!
//! A seam is a connected path of pixels, one per row (vertical) or
//! one per column (horizontal), that drifts at most one pixel per
//! step.  Removing the seam of least energy shrinks a picture by one
//! column or row while sparing its most detailed regions.

pub mod ternary;

pub mod errors;
pub use errors::{CarveError, Result};

pub mod twodmap;
pub use twodmap::TwoDimensionalMap;

pub mod pixelpairs;

pub mod energy;
pub use energy::{EnergyField, EnergyView, BORDER_ENERGY};

pub mod flipper;

pub mod seamgraph;
pub use seamgraph::{Orientation, SeamGraph};

pub mod seamsearch;
pub use seamsearch::{find_seam, shortest_path};

pub mod grideditor;
pub use grideditor::{remove_horizontal_seam, remove_vertical_seam};

pub mod seamfinder;
pub use seamfinder::SeamFinder;

pub mod seamcarver;
pub use seamcarver::SeamCarver;

pub mod dump;
pub use dump::energy_to_image;
