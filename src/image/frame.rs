//! Owned three-channel camera frame.
//!
//! Frames are stored as RGB regardless of the layout delivered by the capture
//! device. Pipeline stages only ever borrow a frame; annotation produces a new
//! frame, so the input stays valid for diagnostics after the pipeline ran.
use crate::error::{LaneError, Result};
use image::RgbImage;
use serde::{Deserialize, Serialize};

/// Frame size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrameDims {
    pub width: u32,
    pub height: u32,
}

impl FrameDims {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of pixels in a frame of this size.
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Byte order of interleaved raw pixel data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelOrder {
    Rgb,
    /// Blue-green-red, the usual layout of V4L2/OpenCV capture buffers.
    #[default]
    Bgr,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    image: RgbImage,
}

impl Frame {
    /// Wrap an RGB image, rejecting zero-sized inputs.
    pub fn from_rgb(image: RgbImage) -> Result<Self> {
        let (w, h) = image.dimensions();
        if w == 0 || h == 0 {
            return Err(LaneError::InvalidFrame(format!(
                "zero-sized frame {w}x{h}"
            )));
        }
        Ok(Self { image })
    }

    /// Build a frame from interleaved bytes as delivered by a capture device.
    pub fn from_raw(
        width: u32,
        height: u32,
        channels: usize,
        mut data: Vec<u8>,
        order: ChannelOrder,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(LaneError::InvalidFrame(format!(
                "zero-sized frame {width}x{height}"
            )));
        }
        if channels != 3 {
            return Err(LaneError::InvalidFrame(format!(
                "expected 3 channels, got {channels}"
            )));
        }
        let expected = width as usize * height as usize * 3;
        if data.len() != expected {
            return Err(LaneError::InvalidFrame(format!(
                "buffer holds {} bytes, {width}x{height}x3 needs {expected}",
                data.len()
            )));
        }
        if order == ChannelOrder::Bgr {
            for px in data.chunks_exact_mut(3) {
                px.swap(0, 2);
            }
        }
        let image = RgbImage::from_raw(width, height, data).ok_or_else(|| {
            LaneError::InvalidFrame("buffer does not match frame dimensions".to_string())
        })?;
        Ok(Self { image })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    #[inline]
    pub fn dims(&self) -> FrameDims {
        FrameDims::new(self.image.width(), self.image.height())
    }

    /// RGB triplet at (x, y).
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        self.image.get_pixel(x, y).0
    }

    pub fn as_rgb(&self) -> &RgbImage {
        &self.image
    }

    pub fn into_rgb(self) -> RgbImage {
        self.image
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_wrong_channel_count() {
        let err = Frame::from_raw(4, 4, 1, vec![0; 16], ChannelOrder::Rgb).unwrap_err();
        assert!(matches!(err, LaneError::InvalidFrame(_)));
    }

    #[test]
    fn rejects_zero_dimensions() {
        assert!(Frame::from_raw(0, 4, 3, Vec::new(), ChannelOrder::Rgb).is_err());
        assert!(Frame::from_rgb(RgbImage::new(5, 0)).is_err());
    }

    #[test]
    fn rejects_short_buffer() {
        let err = Frame::from_raw(2, 2, 3, vec![0; 11], ChannelOrder::Bgr).unwrap_err();
        assert!(matches!(err, LaneError::InvalidFrame(_)));
    }

    #[test]
    fn bgr_input_is_swapped_to_rgb() {
        let frame = Frame::from_raw(1, 1, 3, vec![10, 20, 30], ChannelOrder::Bgr).unwrap();
        assert_eq!(frame.pixel(0, 0), [30, 20, 10]);
        let frame = Frame::from_raw(1, 1, 3, vec![10, 20, 30], ChannelOrder::Rgb).unwrap();
        assert_eq!(frame.pixel(0, 0), [10, 20, 30]);
    }
}
