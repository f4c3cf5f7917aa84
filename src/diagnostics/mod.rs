//! Diagnostics produced alongside the steering command.
//!
//! - `overlay`: lane-line, segment and heading overlays drawn onto copies of
//!   the input frame.
//! - `pipeline`: the per-frame [`PipelineTrace`] with stage timings, fitted
//!   lines and optional intermediate images.
//! - `timing`: small timing helpers.

pub mod overlay;
pub mod pipeline;
pub mod timing;

pub use overlay::{draw_heading, draw_lines, LineStyle};
pub use pipeline::{PipelineTrace, StageImages};
pub use timing::{StageTiming, TimingBreakdown};
