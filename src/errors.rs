// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Everything that can go wrong when carving.  All of these are caller
//! errors: they are detected before any state changes, and the carver
//! is left exactly as it was.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CarveError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("pixel ({x}, {y}) is outside a {width}x{height} picture")]
    OutOfRange {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    #[error("invalid seam: {0}")]
    InvalidSeam(String),

    #[error("no seam exists through a grid with zero area")]
    Disconnected,
}

pub type Result<T> = std::result::Result<T, CarveError>;
