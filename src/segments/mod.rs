//! Probabilistic Hough segment extractor.
//!
//! Lane markings show up in the edge map as long, nearly straight runs of
//! pixels. The extractor finds them with the progressive probabilistic Hough
//! transform:
//!
//! - Edge pixels are visited in random order (seeded, so runs are
//!   reproducible). Each visited pixel votes into a `(theta, rho)`
//!   accumulator.
//! - As soon as a bin reaches the vote threshold, the line through the pixel
//!   at that angle is walked in both directions, bridging gaps of at most
//!   `max_line_gap` pixels.
//! - Walked pixels are removed from further consideration. When the traced
//!   extent is at least `min_line_length` along x or y, their votes are also
//!   withdrawn and the segment is emitted.
//!
//! Finding nothing is a normal outcome (no markings in view) and yields an
//! empty vector.

mod hough;
mod options;
mod segment;

pub use options::HoughParams;
pub use segment::LineSegment;

use crate::image::EdgeMap;
use log::debug;

#[derive(Clone, Debug, Default)]
pub struct SegmentDetector {
    params: HoughParams,
}

impl SegmentDetector {
    pub fn new(params: HoughParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &HoughParams {
        &self.params
    }

    pub fn detect(&self, edges: &EdgeMap) -> Vec<LineSegment> {
        let segments = hough::HoughExtractor::new(edges, &self.params).extract();
        if segments.is_empty() {
            debug!("SegmentDetector::detect no segments");
        }
        for segment in &segments {
            debug!(
                "detected segment {:?} of length {:.1}",
                segment,
                segment.length()
            );
        }
        segments
    }
}
