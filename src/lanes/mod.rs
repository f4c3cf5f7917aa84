//! Aggregation of Hough segments into at most two lane lines.
//!
//! Every non-vertical segment is fitted to `y = slope * x + intercept` and
//! sorted into a side bucket by slope sign and horizontal position (image y
//! grows downwards, so the left boundary has negative slope):
//!
//! - left: `slope < 0` and both endpoints left of `width * (1 - boundary)`;
//! - right: `slope >= 0` and both endpoints right of `width * boundary`.
//!
//! Segments matching neither zone are dropped. Each bucket is averaged
//! independently and projected onto rows `height` and `height / 2`. An empty
//! bucket produces no line for that side.

mod fit;
mod options;
mod types;

pub use fit::{fit_segment, make_lane_line, polyfit_line};
pub use options::LaneFitParams;
pub use types::{FitLine, LaneFits, LaneLine, LaneSide};

use crate::image::FrameDims;
use crate::segments::LineSegment;
use log::debug;

#[derive(Clone, Debug, Default)]
pub struct LaneFitter {
    params: LaneFitParams,
}

impl LaneFitter {
    pub fn new(params: LaneFitParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &LaneFitParams {
        &self.params
    }

    /// Averaged per-side fits.
    pub fn fit_buckets(&self, dims: FrameDims, segments: &[LineSegment]) -> LaneFits {
        if segments.is_empty() {
            return LaneFits::default();
        }
        let width = f64::from(dims.width);
        let left_zone = width * (1.0 - self.params.boundary);
        let right_zone = width * self.params.boundary;

        let mut left = Vec::new();
        let mut right = Vec::new();
        for segment in segments {
            let Some(fit) = fit_segment(segment) else {
                continue;
            };
            let (x1, x2) = (f64::from(segment.x1), f64::from(segment.x2));
            if fit.slope < 0.0 {
                if x1 < left_zone && x2 < left_zone {
                    left.push(fit);
                }
            } else if x1 > right_zone && x2 > right_zone {
                right.push(fit);
            }
        }
        debug!(
            "LaneFitter buckets: left={} right={} of {} segments",
            left.len(),
            right.len(),
            segments.len()
        );

        LaneFits {
            left: FitLine::mean(&left),
            right: FitLine::mean(&right),
        }
    }

    /// Lane lines ordered `[left?, right?]`.
    pub fn fit(&self, dims: FrameDims, segments: &[LineSegment]) -> Vec<LaneLine> {
        let fits = self.fit_buckets(dims, segments);
        self.lane_lines(dims, &fits)
    }

    pub fn lane_lines(&self, dims: FrameDims, fits: &LaneFits) -> Vec<LaneLine> {
        let lines: Vec<LaneLine> = [(fits.left, LaneSide::Left), (fits.right, LaneSide::Right)]
            .into_iter()
            .filter_map(|(fit, side)| {
                fit.map(|f| make_lane_line(dims, &f, side, &self.params))
            })
            .collect();
        debug!("lane lines: {:?}", lines);
        lines
    }
}
