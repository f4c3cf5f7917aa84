use super::roi::RegionOfInterest;
use serde::{Deserialize, Serialize};

/// Knobs for the color/edge stage.
///
/// HSV bounds follow the 8-bit convention: hue in `[0, 180)`, saturation and
/// value in `[0, 255]`. Both bounds are inclusive. The defaults isolate blue
/// tape under indoor lighting.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterParams {
    pub lower_hsv: [u8; 3],
    pub upper_hsv: [u8; 3],
    /// Canny hysteresis thresholds on the Sobel gradient magnitude.
    pub canny_low: f32,
    pub canny_high: f32,
    pub roi: RegionOfInterest,
}

impl Default for FilterParams {
    fn default() -> Self {
        Self {
            lower_hsv: [60, 40, 40],
            upper_hsv: [150, 190, 190],
            canny_low: 200.0,
            canny_high: 400.0,
            roi: RegionOfInterest::default(),
        }
    }
}
