//! Line overlays blended onto copies of a frame.
//!
//! Lines are drawn on a black layer which is then added onto the frame as
//! `0.8 * frame + layer + 1`, saturating per channel. The source frame is
//! never modified.
use crate::angle::{heading_endpoint, heading_origin};
use crate::image::Frame;
use crate::segments::LineSegment;
use image::{Rgb, RgbImage};
use imageproc::drawing::draw_line_segment_mut;
use serde::{Deserialize, Serialize};

const FRAME_WEIGHT: f32 = 0.8;
const LAYER_WEIGHT: f32 = 1.0;
const GAMMA: f32 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineStyle {
    /// RGB color.
    pub color: [u8; 3],
    /// Stroke width in pixels.
    pub width: u32,
}

impl LineStyle {
    pub const LANE: LineStyle = LineStyle {
        color: [0, 255, 0],
        width: 10,
    };
    pub const HEADING: LineStyle = LineStyle {
        color: [255, 0, 0],
        width: 5,
    };
    pub const SEGMENT: LineStyle = LineStyle {
        color: [255, 255, 0],
        width: 2,
    };
}

/// New frame with `lines` blended on top of `frame`.
pub fn draw_lines<I>(frame: &Frame, lines: I, style: LineStyle) -> Frame
where
    I: IntoIterator<Item = LineSegment>,
{
    let (w, h) = (frame.width(), frame.height());
    let mut layer = RgbImage::new(w, h);
    for line in lines {
        draw_thick_segment(&mut layer, &line, style);
    }
    blend(frame, &layer)
}

/// New frame with the heading line for `steering_deg` blended on top.
pub fn draw_heading(frame: &Frame, steering_deg: i32, style: LineStyle) -> Frame {
    let dims = frame.dims();
    let (x1, y1) = heading_origin(dims);
    let (x2, y2) = heading_endpoint(dims, steering_deg);
    draw_lines(frame, [LineSegment::new(x1, y1, x2, y2)], style)
}

fn draw_thick_segment(layer: &mut RgbImage, line: &LineSegment, style: LineStyle) {
    let (x1, y1) = (line.x1 as f32, line.y1 as f32);
    let (x2, y2) = (line.x2 as f32, line.y2 as f32);
    let color = Rgb(style.color);
    let (dx, dy) = (x2 - x1, y2 - y1);
    let len = (dx * dx + dy * dy).sqrt();
    if style.width <= 1 || len < 1e-6 {
        draw_line_segment_mut(layer, (x1, y1), (x2, y2), color);
        return;
    }
    let (nx, ny) = (-dy / len, dx / len);
    let half = (style.width as f32 - 1.0) * 0.5;
    // Half-pixel steps so diagonal strokes have no holes.
    let steps = (style.width - 1) * 2;
    for i in 0..=steps {
        let off = -half + i as f32 * 0.5;
        draw_line_segment_mut(
            layer,
            (x1 + nx * off, y1 + ny * off),
            (x2 + nx * off, y2 + ny * off),
            color,
        );
    }
}

fn blend(frame: &Frame, layer: &RgbImage) -> Frame {
    let mut out = frame.as_rgb().clone();
    for (dst, src) in out.pixels_mut().zip(layer.pixels()) {
        for c in 0..3 {
            let v = f32::from(dst.0[c]) * FRAME_WEIGHT + f32::from(src.0[c]) * LAYER_WEIGHT + GAMMA;
            dst.0[c] = v.round().clamp(0.0, 255.0) as u8;
        }
    }
    Frame::from_rgb(out).unwrap_or_else(|_| frame.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray_frame() -> Frame {
        Frame::from_rgb(RgbImage::from_pixel(64, 48, Rgb([100, 100, 100]))).unwrap()
    }

    #[test]
    fn empty_overlay_only_dims_the_frame() {
        let frame = gray_frame();
        let out = draw_lines(&frame, std::iter::empty(), LineStyle::LANE);
        assert_eq!(out.pixel(10, 10), [81, 81, 81]);
        assert_eq!(frame.pixel(10, 10), [100, 100, 100]);
    }

    #[test]
    fn heading_is_drawn_on_a_copy() {
        let frame = gray_frame();
        let out = draw_heading(&frame, 90, LineStyle::HEADING);
        assert_eq!(out.pixel(32, 40)[0], 255);
        assert_eq!(out.pixel(32, 40)[1], 81);
        assert_eq!(frame.pixel(32, 40), [100, 100, 100]);
        // above the heading line's end nothing is drawn
        assert_eq!(out.pixel(32, 5), [81, 81, 81]);
    }

    #[test]
    fn thick_lines_cover_their_width() {
        let frame = gray_frame();
        let out = draw_lines(
            &frame,
            [LineSegment::new(0, 24, 63, 24)],
            LineStyle::LANE,
        );
        for y in 20..=28 {
            assert_eq!(out.pixel(30, y)[1], 255, "row {y}");
        }
        assert_eq!(out.pixel(30, 10)[1], 81);
    }
}
