use serde::{Deserialize, Serialize};

/// Parameters of the probabilistic Hough transform.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoughParams {
    /// Distance resolution of the accumulator in pixels.
    pub rho: f32,
    /// Angle resolution of the accumulator in degrees.
    pub theta_deg: f32,
    /// Minimum accumulator votes before a line is traced.
    pub threshold: u32,
    /// Segments shorter than this (along x or y) are discarded.
    pub min_line_length: i32,
    /// Largest run of missing pixels bridged while tracing a segment.
    pub max_line_gap: i32,
    /// Stop after this many segments.
    pub max_lines: Option<usize>,
    /// Seed for the pixel visiting order.
    pub seed: u64,
}

impl Default for HoughParams {
    fn default() -> Self {
        Self {
            rho: 1.0,
            theta_deg: 1.0,
            threshold: 20,
            min_line_length: 8,
            max_line_gap: 4,
            max_lines: None,
            seed: 0x5eed,
        }
    }
}
