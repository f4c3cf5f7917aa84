use crate::diagnostics::PipelineTrace;
use crate::image::Frame;
use crate::lanes::LaneLine;
use crate::segments::LineSegment;
use crate::steering::SteeringTarget;
use serde::Serialize;

/// Everything the controller produced for one frame.
#[derive(Clone, Debug)]
pub struct FrameOutcome {
    /// Raw estimator output before stabilization.
    pub target: SteeringTarget,
    /// Commanded angle after this frame (unchanged when nothing was detected).
    pub steering_angle: i32,
    pub segments: Vec<LineSegment>,
    pub lane_lines: Vec<LaneLine>,
    /// Copy of the input with lane and heading overlays; a plain copy when no
    /// lane lines were found.
    pub annotated: Frame,
    pub trace: PipelineTrace,
}

impl FrameOutcome {
    pub fn is_detected(&self) -> bool {
        self.target.is_detected()
    }

    /// Serializable summary without image data.
    pub fn report(&self) -> FrameReport {
        FrameReport {
            target: self.target,
            steering_angle: self.steering_angle,
            segments: self.segments.clone(),
            lane_lines: self.lane_lines.clone(),
            trace: self.trace.clone(),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameReport {
    pub target: SteeringTarget,
    pub steering_angle: i32,
    pub segments: Vec<LineSegment>,
    pub lane_lines: Vec<LaneLine>,
    pub trace: PipelineTrace,
}
