use serde::{Deserialize, Serialize};

/// Segment classification and lane-line projection settings.
///
/// - `boundary`: fraction of the width defining the side zones. Left
///   candidates must lie left of `width * (1 - boundary)`, right candidates
///   right of `width * boundary`.
/// - `x_clamp`: bounds for projected lane-line x, as multiples of the width.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaneFitParams {
    pub boundary: f64,
    pub x_clamp: [f64; 2],
}

impl Default for LaneFitParams {
    fn default() -> Self {
        Self {
            boundary: 1.0 / 3.0,
            x_clamp: [-1.0, 2.0],
        }
    }
}
