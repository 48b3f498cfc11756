use image::{Rgb, RgbImage};
use proptest::prelude::*;
use seamcarver::{CarveError, SeamCarver, SeamFinder, BORDER_ENERGY};

/// Arbitrary RGB pictures with dimensions in the given ranges.
fn arbitrary_picture(
    widths: std::ops::RangeInclusive<u32>,
    heights: std::ops::RangeInclusive<u32>,
) -> BoxedStrategy<RgbImage> {
    (widths, heights)
        .prop_flat_map(|(w, h)| {
            proptest::collection::vec(any::<u8>(), (w * h * 3) as usize)
                .prop_map(move |v| RgbImage::from_raw(w, h, v).unwrap())
        })
        .boxed()
}

fn is_connected(seam: &[u32], span: u32) -> bool {
    seam.iter().all(|p| *p < span)
        && seam
            .windows(2)
            .all(|w| (i64::from(w[0]) - i64::from(w[1])).abs() <= 1)
}

fn border_is_fixed(carver: &SeamCarver) -> bool {
    let (w, h) = (carver.width(), carver.height());
    (0..w).all(|x| {
        carver.energy(x, 0) == Ok(BORDER_ENERGY) && carver.energy(x, h - 1) == Ok(BORDER_ENERGY)
    }) && (0..h).all(|y| {
        carver.energy(0, y) == Ok(BORDER_ENERGY) && carver.energy(w - 1, y) == Ok(BORDER_ENERGY)
    })
}

proptest! {
    #[test]
    fn border_energy_is_fixed(picture in arbitrary_picture(1..=12, 1..=12)) {
        let carver = SeamCarver::new(&picture).unwrap();
        prop_assert!(border_is_fixed(&carver));
    }

    #[test]
    fn vertical_seams_are_connected(picture in arbitrary_picture(3..=12, 3..=12)) {
        let carver = SeamCarver::new(&picture).unwrap();
        let seam = carver.find_vertical_seam().unwrap();
        prop_assert_eq!(seam.len(), carver.height() as usize);
        prop_assert!(is_connected(&seam, carver.width()));
    }

    #[test]
    fn horizontal_seams_are_connected(picture in arbitrary_picture(3..=12, 3..=12)) {
        let carver = SeamCarver::new(&picture).unwrap();
        let seam = carver.find_horizontal_seam().unwrap();
        prop_assert_eq!(seam.len(), carver.width() as usize);
        prop_assert!(is_connected(&seam, carver.height()));
    }

    #[test]
    fn queries_are_repeatable(picture in arbitrary_picture(1..=8, 1..=8)) {
        let carver = SeamCarver::new(&picture).unwrap();
        prop_assert_eq!(carver.picture(), carver.picture());
        prop_assert_eq!(carver.find_vertical_seam(), carver.find_vertical_seam());
        for (x, y, _) in picture.enumerate_pixels() {
            prop_assert_eq!(carver.energy(x, y), carver.energy(x, y));
        }
    }

    #[test]
    fn removal_shrinks_by_one(picture in arbitrary_picture(2..=10, 2..=10)) {
        let mut carver = SeamCarver::new(&picture).unwrap();
        let (w, h) = (carver.width(), carver.height());

        let seam = carver.find_vertical_seam().unwrap();
        carver.remove_vertical_seam(&seam).unwrap();
        prop_assert_eq!((carver.width(), carver.height()), (w - 1, h));
        prop_assert!(border_is_fixed(&carver));

        let seam = carver.find_horizontal_seam().unwrap();
        carver.remove_horizontal_seam(&seam).unwrap();
        prop_assert_eq!((carver.width(), carver.height()), (w - 1, h - 1));
        prop_assert!(border_is_fixed(&carver));
    }

    #[test]
    fn repeated_shrink_stops_at_one(picture in arbitrary_picture(1..=8, 1..=6)) {
        let mut carver = SeamCarver::new(&picture).unwrap();
        let w = carver.width();
        for n in 1..w {
            let seam = carver.find_vertical_seam().unwrap();
            carver.remove_vertical_seam(&seam).unwrap();
            prop_assert_eq!(carver.width(), w - n);
        }
        let seam = carver.find_vertical_seam().unwrap();
        prop_assert_eq!(&seam, &vec![0; carver.height() as usize]);
        prop_assert!(matches!(
            carver.remove_vertical_seam(&seam),
            Err(CarveError::InvalidSeam(_))
        ));
        prop_assert_eq!(carver.width(), 1);
    }

    #[test]
    fn rejected_seams_leave_the_picture_alone(picture in arbitrary_picture(3..=10, 2..=10)) {
        let mut carver = SeamCarver::new(&picture).unwrap();
        let mut seam = vec![0; carver.height() as usize];
        seam[1] = 2;
        prop_assert!(matches!(
            carver.remove_vertical_seam(&seam),
            Err(CarveError::InvalidSeam(_))
        ));
        prop_assert_eq!(carver.picture(), picture);
    }
}

#[test]
fn reference_grid_round_trip() {
    // 6x6 ramp: red rises with x, green with y, so every interior
    // pixel has the same energy and ties resolve to the lowest column.
    let picture = RgbImage::from_fn(6, 6, |x, y| Rgb([(x * 10) as u8, (y * 10) as u8, 0]));
    let mut carver = SeamCarver::new(&picture).unwrap();
    let seam = carver.find_vertical_seam().unwrap();
    assert_eq!(seam, vec![0, 1, 1, 1, 1, 0]);
    carver.remove_vertical_seam(&seam).unwrap();

    #[rustfmt::skip]
    let reds: [[u8; 5]; 6] = [
        [10, 20, 30, 40, 50],
        [ 0, 20, 30, 40, 50],
        [ 0, 20, 30, 40, 50],
        [ 0, 20, 30, 40, 50],
        [ 0, 20, 30, 40, 50],
        [10, 20, 30, 40, 50],
    ];
    let expected = RgbImage::from_fn(5, 6, |x, y| Rgb([reds[y as usize][x as usize], (y * 10) as u8, 0]));
    assert_eq!(carver.picture(), expected);
}
