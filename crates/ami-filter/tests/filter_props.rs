//! Algebraic properties of the pointwise filters and the box blur.

use ami_core::{PixelBuffer, Region};
use ami_filter::{box_blur, grayscale, invert};
use rand::Rng;

fn random_buffer(width: u32, height: u32) -> PixelBuffer {
    let mut rng = rand::rng();
    let mut buf = PixelBuffer::new(width, height).unwrap();
    for y in 0..height {
        for x in 0..width {
            buf.set_rgb(x, y, rng.random(), rng.random(), rng.random())
                .unwrap();
        }
    }
    buf
}

#[test]
fn invert_is_an_involution() {
    let original = random_buffer(16, 9);
    let region = Region::new(3, 2, 12, 8).unwrap();

    let mut buf = original.clone();
    invert(&mut buf, region).unwrap();
    assert_ne!(buf, original);
    invert(&mut buf, region).unwrap();
    assert_eq!(buf, original);
}

#[test]
fn invert_leaves_outside_untouched() {
    let original = random_buffer(10, 10);
    let region = Region::new(2, 2, 7, 7).unwrap();

    let mut buf = original.clone();
    invert(&mut buf, region).unwrap();
    for y in 0..10 {
        for x in 0..10 {
            if !region.contains(x, y) {
                assert_eq!(buf.get_rgb(x, y), original.get_rgb(x, y));
            }
        }
    }
}

#[test]
fn grayscale_is_idempotent() {
    let region = Region::new(0, 1, 11, 6).unwrap();

    let mut once = random_buffer(12, 7);
    grayscale(&mut once, region).unwrap();
    let mut twice = once.clone();
    grayscale(&mut twice, region).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn blur_radius_zero_is_identity_on_region() {
    let original = random_buffer(8, 8);
    let mut buf = original.clone();
    box_blur(&mut buf, Region::new(1, 1, 7, 7).unwrap(), 0).unwrap();
    assert_eq!(buf, original);
}

#[test]
fn blur_matches_naive_windowed_average() {
    let original = random_buffer(9, 7);
    let region = Region::new(2, 1, 8, 6).unwrap();
    let radius = 2u32;

    let mut buf = original.clone();
    box_blur(&mut buf, region, radius as i32).unwrap();

    for y in region.ys() {
        for x in region.xs() {
            let mut sums = [0u32; 3];
            let mut count = 0u32;
            for wy in y.saturating_sub(radius)..=y + radius {
                for wx in x.saturating_sub(radius)..=x + radius {
                    if region.contains(wx, wy) {
                        let (r, g, b) = original.get_rgb(wx, wy).unwrap();
                        sums[0] += r as u32;
                        sums[1] += g as u32;
                        sums[2] += b as u32;
                        count += 1;
                    }
                }
            }
            let expected = (
                (sums[0] / count) as u8,
                (sums[1] / count) as u8,
                (sums[2] / count) as u8,
            );
            assert_eq!(buf.get_rgb(x, y), Some(expected), "pixel ({x},{y})");
        }
    }
}

#[test]
fn inverted_black_buffer_is_white() {
    // 4x4 all-black buffer, invert over the full region
    let mut buf = PixelBuffer::new(4, 4).unwrap();
    let region = Region::full(&buf);
    invert(&mut buf, region).unwrap();
    for y in 0..4 {
        for x in 0..4 {
            assert_eq!(buf.get_rgb(x, y), Some((255, 255, 255)));
        }
    }
}
