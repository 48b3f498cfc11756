// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seam removal
//!
//! Removing a seam produces a new picture one column (or row) smaller.
//! The seam is checked completely before a single pixel is copied, so
//! a rejected seam never leaves a half-built picture behind.

use crate::errors::{CarveError, Result};
use crate::seamgraph::Orientation;
use image::{GenericImageView, ImageBuffer, Pixel, Primitive};
use itertools::Itertools;

/// Check that `seam` can be removed from a picture of the given
/// dimensions in the given orientation.
pub fn validate_seam(
    seam: &[u32],
    (width, height): (u32, u32),
    orientation: Orientation,
) -> Result<()> {
    let (span, length, across) = match orientation {
        Orientation::Vertical => (width, height, "wide"),
        Orientation::Horizontal => (height, width, "tall"),
    };

    if span <= 1 {
        return Err(CarveError::InvalidSeam(format!(
            "the picture is only {} pixel {}",
            span, across
        )));
    }
    if seam.len() != length as usize {
        return Err(CarveError::InvalidSeam(format!(
            "expected {} entries, got {}",
            length,
            seam.len()
        )));
    }
    if let Some((i, pos)) = seam.iter().find_position(|pos| **pos >= span) {
        return Err(CarveError::InvalidSeam(format!(
            "entry {} is {}, outside 0..{}",
            i, pos, span
        )));
    }
    if let Some((i, (a, b))) = seam
        .iter()
        .tuple_windows()
        .find_position(|(a, b)| (i64::from(**a) - i64::from(**b)).abs() > 1)
    {
        return Err(CarveError::InvalidSeam(format!(
            "entries {} and {} step from {} to {}",
            i,
            i + 1,
            a,
            b
        )));
    }
    Ok(())
}

/// Remove one pixel from every row: the pixel at column `seam[y]`.
/// Pixels to its right shift left by one.
pub fn remove_vertical_seam<I, P, S>(image: &I, seam: &[u32]) -> Result<ImageBuffer<P, Vec<S>>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    validate_seam(seam, (width, height), Orientation::Vertical)?;

    let mut imgbuf = ImageBuffer::new(width - 1, height);
    for y in 0..height {
        let skip = seam[y as usize];
        for x in (0..width).filter(|x| *x != skip) {
            let target = if x < skip { x } else { x - 1 };
            imgbuf.put_pixel(target, y, image.get_pixel(x, y));
        }
    }
    Ok(imgbuf)
}

/// Remove one pixel from every column: the pixel at row `seam[x]`.
/// Pixels below it shift up by one.
pub fn remove_horizontal_seam<I, P, S>(image: &I, seam: &[u32]) -> Result<ImageBuffer<P, Vec<S>>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    validate_seam(seam, (width, height), Orientation::Horizontal)?;

    let mut imgbuf = ImageBuffer::new(width, height - 1);
    for x in 0..width {
        let skip = seam[x as usize];
        for y in (0..height).filter(|y| *y != skip) {
            let target = if y < skip { y } else { y - 1 };
            imgbuf.put_pixel(x, target, image.get_pixel(x, y));
        }
    }
    Ok(imgbuf)
}

/// Remove a seam of either orientation.
pub fn remove_seam<I, P, S>(
    image: &I,
    seam: &[u32],
    orientation: Orientation,
) -> Result<ImageBuffer<P, Vec<S>>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    match orientation {
        Orientation::Vertical => remove_vertical_seam(image, seam),
        Orientation::Horizontal => remove_horizontal_seam(image, seam),
    }
}
