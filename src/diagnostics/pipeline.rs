use crate::diagnostics::TimingBreakdown;
use crate::image::{EdgeMap, Frame, FrameDims};
use crate::lanes::LaneFits;
use image::GrayImage;
use serde::Serialize;

/// Per-frame trace of what the controller executed.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineTrace {
    pub input: FrameDims,
    pub timings: TimingBreakdown,
    pub edge_pixels: usize,
    pub segment_count: usize,
    pub lane_fits: LaneFits,
    #[serde(skip)]
    pub stages: Option<StageImages>,
}

/// Intermediate images, kept only when stage capture is enabled.
#[derive(Clone, Debug)]
pub struct StageImages {
    pub color_mask: GrayImage,
    pub edges: EdgeMap,
    pub cropped_edges: EdgeMap,
    pub segments: Frame,
    pub lane_lines: Frame,
}
