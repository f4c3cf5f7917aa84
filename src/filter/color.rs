//! RGB to HSV conversion and in-range color thresholding.
use crate::image::Frame;
use rayon::prelude::*;

/// Convert one RGB pixel to 8-bit HSV (hue halved into `[0, 180)`).
#[inline]
pub fn rgb_to_hsv(rgb: [u8; 3]) -> [u8; 3] {
    let [r, g, b] = rgb.map(f32::from);
    let v = r.max(g).max(b);
    let min = r.min(g).min(b);
    let diff = v - min;

    let s = if v > 0.0 { diff * 255.0 / v } else { 0.0 };

    let mut h = if diff <= 0.0 {
        0.0
    } else if v == r {
        60.0 * (g - b) / diff
    } else if v == g {
        120.0 + 60.0 * (b - r) / diff
    } else {
        240.0 + 60.0 * (r - g) / diff
    };
    if h < 0.0 {
        h += 360.0;
    }
    let h_half = (h * 0.5).round();
    let h_half = if h_half >= 180.0 { 0.0 } else { h_half };

    [h_half as u8, s.round() as u8, v as u8]
}

#[inline]
fn in_range(hsv: [u8; 3], lower: [u8; 3], upper: [u8; 3]) -> bool {
    hsv.iter()
        .zip(lower.iter().zip(upper.iter()))
        .all(|(&c, (&lo, &hi))| c >= lo && c <= hi)
}

/// Row-parallel HSV threshold; returns 255 where the pixel is inside the range.
pub fn hsv_in_range_mask(frame: &Frame, lower: [u8; 3], upper: [u8; 3]) -> Vec<u8> {
    let w = frame.width() as usize;
    let h = frame.height() as usize;
    let mut mask = vec![0u8; w * h];
    if w == 0 {
        return mask;
    }
    let rgb = frame.as_rgb();
    mask.par_chunks_mut(w).enumerate().for_each(|(y, row)| {
        for (x, out) in row.iter_mut().enumerate() {
            let px = rgb.get_pixel(x as u32, y as u32).0;
            if in_range(rgb_to_hsv(px), lower, upper) {
                *out = 255;
            }
        }
    });
    mask
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_colors_map_to_expected_hues() {
        assert_eq!(rgb_to_hsv([255, 0, 0]), [0, 255, 255]);
        assert_eq!(rgb_to_hsv([0, 255, 0]), [60, 255, 255]);
        assert_eq!(rgb_to_hsv([0, 0, 255]), [120, 255, 255]);
    }

    #[test]
    fn gray_has_no_saturation() {
        assert_eq!(rgb_to_hsv([128, 128, 128]), [0, 0, 128]);
        assert_eq!(rgb_to_hsv([0, 0, 0]), [0, 0, 0]);
    }

    #[test]
    fn muted_blue_is_inside_default_range() {
        let hsv = rgb_to_hsv([60, 90, 160]);
        assert!(in_range(hsv, [60, 40, 40], [150, 190, 190]), "hsv={hsv:?}");
    }

    #[test]
    fn saturated_blue_is_outside_default_range() {
        let hsv = rgb_to_hsv([0, 0, 255]);
        assert!(!in_range(hsv, [60, 40, 40], [150, 190, 190]));
    }
}
