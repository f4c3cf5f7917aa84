//! Lane-marking isolation: color threshold, edge extraction and region of
//! interest.
//!
//! The filter runs three steps on every frame:
//!
//! - Convert to 8-bit HSV and keep pixels inside a dual-bound color range
//!   (`color::hsv_in_range_mask`). Hue is the most stable channel for colored
//!   tape, so the range is wide in saturation/value and narrow in hue.
//! - Run Canny hysteresis edge detection on the binary mask. Because the mask
//!   is 0/255, only the mask outline survives, which gives two parallel edges
//!   per marking.
//! - Zero every pixel outside the region of interest (`roi::RegionOfInterest`),
//!   by default the bottom half of the frame where the road is visible.
//!
//! The output is an [`EdgeMap`] with the same dimensions as the input frame.

pub mod color;
pub mod options;
pub mod roi;

pub use options::FilterParams;
pub use roi::RegionOfInterest;

use crate::error::{LaneError, Result};
use crate::image::{EdgeMap, Frame};
use image::GrayImage;
use log::debug;

/// Intermediate images kept when stage capture is requested.
#[derive(Clone, Debug)]
pub struct FilterStages {
    /// 0/255 color mask before edge detection.
    pub color_mask: GrayImage,
    /// Canny output before the region of interest is applied.
    pub edges: EdgeMap,
    /// Final, region-restricted edge map.
    pub cropped: EdgeMap,
}

#[derive(Clone, Debug, Default)]
pub struct FrameFilter {
    params: FilterParams,
}

impl FrameFilter {
    pub fn new(params: FilterParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &FilterParams {
        &self.params
    }

    /// Produce the region-restricted edge map for `frame`.
    pub fn filter(&self, frame: &Frame) -> Result<EdgeMap> {
        Ok(self.filter_with_stages(frame)?.cropped)
    }

    /// Same as [`FrameFilter::filter`] but also returns the intermediate images.
    pub fn filter_with_stages(&self, frame: &Frame) -> Result<FilterStages> {
        let dims = frame.dims();
        if dims.is_empty() {
            return Err(LaneError::InvalidFrame(format!(
                "zero-sized frame {}x{}",
                dims.width, dims.height
            )));
        }

        let mask = color::hsv_in_range_mask(frame, self.params.lower_hsv, self.params.upper_hsv);
        let color_mask = GrayImage::from_raw(dims.width, dims.height, mask).ok_or_else(|| {
            LaneError::InvalidFrame("color mask does not match frame dimensions".to_string())
        })?;

        let canny = imageproc::edges::canny(
            &color_mask,
            self.params.canny_low,
            self.params.canny_high,
        );
        let (w, h) = (dims.width as usize, dims.height as usize);
        let edges = EdgeMap::from_gray(w, h, canny.as_raw()).ok_or_else(|| {
            LaneError::InvalidFrame("edge image does not match frame dimensions".to_string())
        })?;

        let mut cropped = edges.clone();
        self.params.roi.apply(&mut cropped);
        debug!(
            "FrameFilter::filter w={} h={} edges={} cropped={}",
            w,
            h,
            edges.count(),
            cropped.count()
        );

        Ok(FilterStages {
            color_mask,
            edges,
            cropped,
        })
    }
}
