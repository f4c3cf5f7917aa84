//! Parameter types configuring the controller stages.
//!
//! Every stage owns its own parameter struct with defaults tuned for a
//! 640×480 camera looking at blue tape; the controller bundles them so a
//! single JSON document can describe the whole pipeline.

use crate::diagnostics::LineStyle;
use crate::filter::FilterParams;
use crate::lanes::LaneFitParams;
use crate::segments::HoughParams;
use crate::steering::{EstimatorParams, StabilizerParams, STRAIGHT_AHEAD_DEG};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerParams {
    pub filter: FilterParams,
    pub hough: HoughParams,
    pub lanes: LaneFitParams,
    pub estimator: EstimatorParams,
    pub stabilizer: StabilizerParams,
    /// Steering angle before the first frame.
    pub initial_angle: i32,
    /// Keep intermediate images in the per-frame trace.
    pub capture_stages: bool,
    pub lane_style: LineStyle,
    pub heading_style: LineStyle,
}

impl Default for ControllerParams {
    fn default() -> Self {
        Self {
            filter: FilterParams::default(),
            hough: HoughParams::default(),
            lanes: LaneFitParams::default(),
            estimator: EstimatorParams::default(),
            stabilizer: StabilizerParams::default(),
            initial_angle: STRAIGHT_AHEAD_DEG,
            capture_stages: false,
            lane_style: LineStyle::LANE,
            heading_style: LineStyle::HEADING,
        }
    }
}
