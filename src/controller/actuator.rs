/// Receives the stabilized steering angle once per frame with detected lanes.
///
/// Only physical angles in `[0, 180]` are ever passed; frames without lane
/// lines do not reach the actuator at all.
pub trait SteeringActuator {
    fn turn(&mut self, angle_deg: i32);
}

/// Actuator that ignores every command, for offline runs.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoActuator;

impl SteeringActuator for NoActuator {
    fn turn(&mut self, _angle_deg: i32) {}
}

impl<A: SteeringActuator + ?Sized> SteeringActuator for &mut A {
    fn turn(&mut self, angle_deg: i32) {
        (**self).turn(angle_deg);
    }
}

impl<A: SteeringActuator + ?Sized> SteeringActuator for Box<A> {
    fn turn(&mut self, angle_deg: i32) {
        (**self).turn(angle_deg);
    }
}
