//! Steering-angle geometry shared by the controller and the overlays.
use crate::image::FrameDims;

/// Far end of the heading line for `steering_deg`.
///
/// The line starts at the bottom centre of the frame and reaches half the
/// frame height up; `90` points straight up. x is truncated toward zero and
/// clamped into `[-width, 2 * width]` so angles near 0 or 180 stay finite.
pub fn heading_endpoint(dims: FrameDims, steering_deg: i32) -> (i32, i32) {
    let width = f64::from(dims.width);
    let height = f64::from(dims.height);
    let x1 = (width / 2.0).trunc();
    let rad = f64::from(steering_deg).to_radians();
    let x2 = (x1 - height / 2.0 / rad.tan()).trunc();
    let x2 = if x2.is_nan() { x1 } else { x2.clamp(-width, 2.0 * width) };
    (x2 as i32, (height / 2.0) as i32)
}

/// Start of the heading line: bottom centre of the frame.
pub fn heading_origin(dims: FrameDims) -> (i32, i32) {
    ((dims.width / 2) as i32, dims.height as i32)
}
