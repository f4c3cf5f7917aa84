//! Rate limiting of the commanded steering angle.
use super::{StabilizerParams, SteeringTarget};
use log::debug;

/// Stateless rate limiter: history lives entirely in the caller-supplied
/// previous angle.
#[derive(Clone, Debug, Default)]
pub struct SteeringStabilizer {
    params: StabilizerParams,
}

impl SteeringStabilizer {
    pub fn new(params: StabilizerParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &StabilizerParams {
        &self.params
    }

    /// Largest per-frame change allowed for a target backed by
    /// `lane_line_count` lines.
    pub fn max_deviation(&self, lane_line_count: usize) -> i32 {
        if lane_line_count == 2 {
            self.params.max_deviation_two_lines
        } else {
            self.params.max_deviation_one_line
        }
    }

    /// Move from `previous` toward `target` by at most the allowed deviation.
    pub fn stabilize(&self, previous: i32, target: i32, lane_line_count: usize) -> i32 {
        let max_deviation = self.max_deviation(lane_line_count);
        let deviation = target - previous;
        let stabilized = if deviation.abs() > max_deviation {
            previous + max_deviation * deviation.signum()
        } else {
            target
        };
        debug!("proposed angle: {target}; stabilized angle: {stabilized}");
        stabilized
    }

    /// Like [`SteeringStabilizer::stabilize`], holding `previous` when nothing
    /// was detected.
    pub fn stabilize_target(
        &self,
        previous: i32,
        target: SteeringTarget,
        lane_line_count: usize,
    ) -> i32 {
        match target {
            SteeringTarget::Detected(deg) => self.stabilize(previous, deg, lane_line_count),
            SteeringTarget::NoDetection => previous,
        }
    }
}
