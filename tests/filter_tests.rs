use imager::filter::*;
use imager::{Image, Pixel};
use pretty_assertions::assert_eq;

fn gradient(width: usize, height: usize) -> Image {
    let mut pixels = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            pixels.push(Pixel::new(
                ((x * 255) / width.max(1)) as u8,
                ((y * 255) / height.max(1)) as u8,
                128,
            ));
        }
    }
    Image::new(pixels, width).unwrap()
}

#[test_log::test]
fn test_invert_twice_restores() {
    let original = gradient(7, 5);
    let mut image = original.copy();
    invert(&mut image).unwrap();
    assert_eq!(image.pixel(0, 0).unwrap(), Pixel::new(255, 255, 127));
    invert(&mut image).unwrap();
    assert_eq!(image, original);
}

#[test_log::test]
fn test_rotate_left_then_right_restores() {
    let original = gradient(7, 5);
    let mut image = original.copy();
    rotate_left(&mut image).unwrap();
    assert_eq!((image.width(), image.height()), (5, 7));
    rotate_right(&mut image).unwrap();
    assert_eq!(image, original);

    rotate_right(&mut image).unwrap();
    rotate_left(&mut image).unwrap();
    assert_eq!(image, original);
}

#[test_log::test]
fn test_four_right_rotations_restore() {
    let original = gradient(4, 9);
    let mut image = original.copy();
    for _ in 0..4 {
        rotate_right(&mut image).unwrap();
    }
    assert_eq!(image, original);
}

#[test_log::test]
fn test_transpose_twice_restores() {
    let original = gradient(6, 3);
    let mut image = original.copy();
    transpose(&mut image).unwrap();
    assert_eq!((image.width(), image.height()), (3, 6));
    assert_eq!(image.pixel(4, 1).unwrap(), original.pixel(1, 4).unwrap());
    transpose(&mut image).unwrap();
    assert_eq!(image, original);
}

#[test_log::test]
fn test_reflect_twice_restores() {
    let original = gradient(5, 4);
    let mut image = original.copy();
    reflect_horizontal(&mut image).unwrap();
    assert_eq!(image.pixel(2, 0).unwrap(), original.pixel(2, 4).unwrap());
    reflect_horizontal(&mut image).unwrap();
    assert_eq!(image, original);

    reflect_vertical(&mut image).unwrap();
    assert_eq!(image.pixel(0, 3).unwrap(), original.pixel(3, 3).unwrap());
    reflect_vertical(&mut image).unwrap();
    assert_eq!(image, original);
}

#[test_log::test]
fn test_greyscale() {
    let mut image = Image::new(
        vec![Pixel::new(100, 200, 50), Pixel::WHITE, Pixel::BLACK],
        3,
    )
    .unwrap();
    to_monochrome(&mut image, Tone::Greyscale).unwrap();
    // 30 + 120 + 5
    assert_eq!(image.get(0).unwrap(), Pixel::new(155, 155, 155));
    assert_eq!(image.get(1).unwrap(), Pixel::WHITE);
    assert_eq!(image.get(2).unwrap(), Pixel::BLACK);
}

#[test_log::test]
fn test_sepia_white() {
    let mut image = Image::new(vec![Pixel::WHITE], 1).unwrap();
    to_monochrome(&mut image, Tone::Sepia).unwrap();
    assert_eq!(image.get(0).unwrap(), Pixel::new(255, 153, 102));
}

#[test_log::test]
fn test_vignette_keeps_center_and_darkens_corners() {
    let mut image = Image::new(vec![Pixel::new(200, 100, 50); 25], 5).unwrap();
    apply_vignette(&mut image).unwrap();

    assert_eq!(image.pixel(2, 2).unwrap(), Pixel::new(200, 100, 50));

    // corner factor = 1 - 8 / 12.5 = 0.36
    let corner = image.pixel(0, 0).unwrap();
    assert_eq!(corner, Pixel::new(72, 36, 18));
    assert_eq!(image.pixel(4, 4).unwrap(), corner);
    assert_eq!(image.pixel(0, 4).unwrap(), corner);

    let edge = image.pixel(0, 2).unwrap();
    assert!(edge.red < 200 && edge.red > corner.red);
}

#[test_log::test]
fn test_vignette_non_square() {
    let mut image = Image::new(vec![Pixel::WHITE; 21], 7).unwrap();
    apply_vignette(&mut image).unwrap();
    assert_eq!(image.pixel(1, 3).unwrap(), Pixel::WHITE);
    assert!(image.pixel(0, 0).unwrap().red < image.pixel(0, 3).unwrap().red);
}

fn bar_columns(image: &Image, row: usize) -> Vec<usize> {
    (0..image.width())
        .filter(|&col| image.pixel(row, col).unwrap() == Pixel::RED)
        .collect()
}

#[test_log::test]
fn test_bars_small_image_has_only_frame() {
    let mut image = Image::new(vec![Pixel::BLACK; 20 * 10], 20).unwrap();
    draw_bars(&mut image).unwrap();

    for row in [0, 1, 2, 7, 8, 9] {
        assert_eq!(bar_columns(&image, row).len(), 20, "row {row} is a bar");
    }
    assert_eq!(bar_columns(&image, 5), vec![0, 1, 2, 3, 16, 17, 18, 19]);
}

#[test_log::test]
fn test_bars_interior_spacing() {
    // n = (112 - 8) / 50 = 2, space left = 112 - 8 - 8 = 96, distance = 32
    // bars at round(36) = 36 and round(72) = 72
    let mut image = Image::new(vec![Pixel::BLACK; 112 * 8], 112).unwrap();
    draw_bars(&mut image).unwrap();

    let expected: Vec<usize> = (0..4)
        .chain(36..40)
        .chain(72..76)
        .chain(108..112)
        .collect();
    assert_eq!(bar_columns(&image, 4), expected);
}

#[test_log::test]
fn test_bars_with_custom_options() {
    let opts = BarOptions {
        color: Pixel::new(0, 0, 255),
        thickness: 1,
        bar_width: 1,
        spacing: 50,
    };
    let mut image = Image::new(vec![Pixel::BLACK; 9], 3).unwrap();
    draw_bars_with(&mut image, &opts).unwrap();
    assert_eq!(image.pixel(1, 1).unwrap(), Pixel::BLACK);
    assert_eq!(image.pixel(1, 0).unwrap(), Pixel::new(0, 0, 255));
    assert_eq!(image.pixel(2, 1).unwrap(), Pixel::new(0, 0, 255));
}

#[test_log::test]
fn test_edits_replay_in_order() {
    let original = gradient(6, 4);
    let mut image = original.copy();
    let edits = [
        Edit::RotateRight,
        Edit::ReflectHorizontal,
        Edit::ReflectVertical,
        Edit::RotateRight,
    ];
    for edit in &edits {
        edit.apply(&mut image).unwrap();
    }
    // two reflections are a half turn, plus two quarter turns
    assert_eq!(image, original);
}

#[test_log::test]
fn test_filters_on_empty_image() {
    let mut image = Image::new(Vec::new(), 0).unwrap();
    for edit in [
        Edit::Invert,
        Edit::ReflectHorizontal,
        Edit::ReflectVertical,
        Edit::Monochrome(Tone::Sepia),
        Edit::Vignette,
    ] {
        edit.apply(&mut image).unwrap();
    }
    assert!(image.is_empty());
}
