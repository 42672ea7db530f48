use std::f32::consts::FRAC_PI_2;

use glam::{Mat4, Vec3};
use winit::event::{ElementState, VirtualKeyCode};

const RADIANS_PER_SECOND: f32 = 1.5;

/// Orbits the cube: arrow keys spin it while held.
pub struct CubeCamera {
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,

    /* A scalar that is 1. if the key is down or 0. if the key is not */
    pub left_down: f32,
    pub right_down: f32,
    pub up_down: f32,
    pub down_down: f32,
}

impl CubeCamera {
    /// `side` is the edge length of the cube in world units.
    pub fn new(side: f32) -> Self {
        Self {
            yaw: 0.6,
            pitch: 0.4,
            distance: side * 1.8,
            left_down: 0.,
            right_down: 0.,
            up_down: 0.,
            down_down: 0.,
        }
    }

    /// Returns true if the key steers the camera.
    pub fn key(&mut self, code: VirtualKeyCode, state: ElementState) -> bool {
        use VirtualKeyCode::*;
        let down = match state {
            ElementState::Pressed => 1.,
            ElementState::Released => 0.,
        };
        match code {
            Left => self.left_down = down,
            Right => self.right_down = down,
            Up => self.up_down = down,
            Down => self.down_down = down,
            _ => return false,
        }
        true
    }

    pub fn update(&mut self, elapsed: f32) {
        let step = RADIANS_PER_SECOND * elapsed;
        self.yaw += (self.right_down - self.left_down) * step;
        self.pitch += (self.up_down - self.down_down) * step;
        self.pitch = self.pitch.clamp(-FRAC_PI_2 + 0.01, FRAC_PI_2 - 0.01);
    }

    pub fn model(&self) -> Mat4 {
        Mat4::from_rotation_x(self.pitch) * Mat4::from_rotation_y(self.yaw)
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(Vec3::new(0., 0., self.distance), Vec3::ZERO, Vec3::Y)
    }

    pub fn transform(&self, aspect: f32) -> Mat4 {
        let projection = Mat4::perspective_rh(
            60. * (std::f32::consts::PI / 180.),
            aspect,
            0.1,
            self.distance * 4.,
        );
        projection * self.view() * self.model()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn held_keys_rotate() {
        let mut camera = CubeCamera::new(20.);
        let yaw = camera.yaw;
        assert!(camera.key(VirtualKeyCode::Right, ElementState::Pressed));
        camera.update(1.);
        assert!((camera.yaw - yaw - RADIANS_PER_SECOND).abs() < 1e-5);

        camera.key(VirtualKeyCode::Right, ElementState::Released);
        camera.update(1.);
        assert!((camera.yaw - yaw - RADIANS_PER_SECOND).abs() < 1e-5);
    }

    #[test]
    fn pitch_stays_below_the_poles() {
        let mut camera = CubeCamera::new(20.);
        camera.key(VirtualKeyCode::Up, ElementState::Pressed);
        camera.update(10.);
        assert!(camera.pitch < FRAC_PI_2);
    }

    #[test]
    fn other_keys_are_ignored() {
        let mut camera = CubeCamera::new(20.);
        assert!(!camera.key(VirtualKeyCode::W, ElementState::Pressed));
    }

    #[test]
    fn cube_center_projects_in_front() {
        let camera = CubeCamera::new(20.);
        let center = camera.transform(1.).project_point3(Vec3::ZERO);
        assert!(center.x.abs() < 1e-4 && center.y.abs() < 1e-4);
        assert!(center.z > 0. && center.z < 1.);
    }
}
