// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of a pixel pair
//!
//! Given two pixels, the energy between them is the squared distance
//! between their colors in RGB space.  Pixels of any type the image
//! crate can convert to RGB are accepted.

use image::{Pixel, Primitive};

// Takes the channels (R,G,B) from two pixels, squares the difference
// of each channel, and sums them:
//
//        |Δ|² = (Δr)² + (Δg)² + (Δb)²

/// (Pixel, Pixel) -> Squared gradient
///
/// The square root is *not* taken here; the energy field adds the
/// horizontal and vertical terms first.
#[inline]
pub fn gradient_squared<P, S>(p1: &P, p2: &P) -> f64
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (c1, c2) = (p1.to_rgb(), p2.to_rgb());
    c1.0.iter()
        .zip(c2.0.iter())
        .map(|(a, b)| {
            let d = channel(*a) - channel(*b);
            d * d
        })
        .sum()
}

// Every Primitive subpixel type is representable as an f64.
#[inline]
fn channel<S: Primitive>(s: S) -> f64 {
    s.to_f64().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Luma, Rgb};

    #[test]
    fn sums_squares_over_channels() {
        let a = Rgb([255u8, 205, 255]);
        let b = Rgb([255u8, 203, 51]);
        assert_eq!(gradient_squared(&a, &b), 4.0 + 204.0 * 204.0);
    }

    #[test]
    fn identical_pixels_have_no_gradient() {
        let a = Rgb([17u8, 42, 99]);
        assert_eq!(gradient_squared(&a, &a), 0.0);
    }

    #[test]
    fn greyscale_counts_once_per_rgb_channel() {
        let a = Luma([10u8]);
        let b = Luma([7u8]);
        assert_eq!(gradient_squared(&a, &b), 27.0);
    }

    #[test]
    fn wide_subpixels_keep_their_range() {
        let a = Rgb([60000u16, 0, 1000]);
        let b = Rgb([0u16, 0, 1003]);
        assert_eq!(gradient_squared(&a, &b), 60000.0 * 60000.0 + 9.0);
        let l = Luma([300u16]);
        let m = Luma([298u16]);
        assert_eq!(gradient_squared(&l, &m), 12.0);
    }
}
