use image::{Rgb, RgbImage};
use lane_follower::Frame;

/// Road surface: neutral gray, zero saturation.
pub const ROAD: [u8; 3] = [128, 128, 128];
/// Blue tape inside the default HSV range (H≈111, S≈159, V=160).
pub const TAPE: [u8; 3] = [60, 90, 160];

/// Frame filled with a single color.
pub fn uniform_frame(width: u32, height: u32, color: [u8; 3]) -> Frame {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let img = RgbImage::from_pixel(width, height, Rgb(color));
    Frame::from_rgb(img).expect("valid frame")
}

/// Paint a tape stripe whose centre column at row `y` is `center_x(y)`.
pub fn paint_stripe(img: &mut RgbImage, half_width: f64, center_x: impl Fn(f64) -> f64) {
    let (w, h) = img.dimensions();
    for y in 0..h {
        let cx = center_x(y as f64);
        for x in 0..w {
            if (x as f64 - cx).abs() <= half_width {
                img.put_pixel(x, y, Rgb(TAPE));
            }
        }
    }
}

/// Two tape lanes converging towards the top of a 640x480 frame.
///
/// The left stripe runs from x=100 at the bottom to x=280 at mid-height, the
/// right one from x=540 to x=360, so the lane centre at mid-height is x=320.
pub fn two_lane_frame() -> Frame {
    let (w, h) = (640u32, 480u32);
    let mut img = RgbImage::from_pixel(w, h, Rgb(ROAD));
    let bottom = h as f64;
    paint_stripe(&mut img, 5.0, |y| 100.0 + (bottom - y) * 0.75);
    paint_stripe(&mut img, 5.0, |y| 540.0 - (bottom - y) * 0.75);
    Frame::from_rgb(img).expect("valid frame")
}

/// Only the right stripe of [`two_lane_frame`].
pub fn right_lane_frame() -> Frame {
    let (w, h) = (640u32, 480u32);
    let mut img = RgbImage::from_pixel(w, h, Rgb(ROAD));
    let bottom = h as f64;
    paint_stripe(&mut img, 5.0, |y| 540.0 - (bottom - y) * 0.75);
    Frame::from_rgb(img).expect("valid frame")
}

/// Vertical tape band covering the full frame height.
pub fn vertical_band_frame(width: u32, height: u32, x0: u32, x1: u32) -> Frame {
    let mut img = RgbImage::from_pixel(width, height, Rgb(ROAD));
    for y in 0..height {
        for x in x0..x1.min(width) {
            img.put_pixel(x, y, Rgb(TAPE));
        }
    }
    Frame::from_rgb(img).expect("valid frame")
}
