use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorParams {
    /// Horizontal camera mounting offset as a fraction of the frame width;
    /// shifts the expected lane centre when both lines are visible.
    pub camera_mid_offset: f64,
}

impl Default for EstimatorParams {
    fn default() -> Self {
        Self {
            camera_mid_offset: -0.035,
        }
    }
}

/// Per-frame steering rate limits in degrees, keyed by how many lane lines
/// backed the target.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StabilizerParams {
    pub max_deviation_two_lines: i32,
    pub max_deviation_one_line: i32,
}

impl Default for StabilizerParams {
    fn default() -> Self {
        Self {
            max_deviation_two_lines: 5,
            max_deviation_one_line: 1,
        }
    }
}
