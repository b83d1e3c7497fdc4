//! Orbit camera for 3D visualization

use crackvis_core::Bounds3;
use nalgebra::{Matrix4, Perspective3, Point3, Vector3};

/// Maps OpenGL clip-space depth `[-1, 1]` onto wgpu's `[0, 1]`
#[rustfmt::skip]
fn opengl_to_wgpu() -> Matrix4<f32> {
    Matrix4::new(
        1.0, 0.0, 0.0, 0.0,
        0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 0.5, 0.5,
        0.0, 0.0, 0.0, 1.0,
    )
}

const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.01;
const MIN_DISTANCE: f32 = 1e-4;

/// A camera orbiting a target point with a Y-up world
///
/// With zero yaw and pitch the camera sits on the +Z side of the target and
/// looks down -Z, so an (X, Y) plane is seen face on.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    pub target: Point3<f32>,
    pub distance: f32,
    /// Rotation about the world Y axis, radians
    pub yaw: f32,
    /// Elevation above the XZ plane, radians
    pub pitch: f32,
    pub fov: f32,
    pub aspect_ratio: f32,
    pub near: f32,
    pub far: f32,
    home: (Point3<f32>, f32),
    /// Bounding sphere of the viewed data; clip planes are kept around it
    scene_center: Point3<f32>,
    scene_radius: f32,
}

impl OrbitCamera {
    pub fn new(target: Point3<f32>, distance: f32, fov: f32, aspect_ratio: f32) -> Self {
        let distance = distance.max(MIN_DISTANCE);
        let mut camera = Self {
            target,
            distance,
            yaw: 0.0,
            pitch: 0.0,
            fov,
            aspect_ratio,
            near: distance * 0.01,
            far: distance * 100.0,
            home: (target, distance),
            scene_center: target,
            scene_radius: distance * 0.5,
        };
        camera.update_clipping();
        camera
    }

    /// Place the camera so the whole box is in view and remember it as home
    pub fn fit_bounds(&mut self, bounds: &Bounds3) {
        let radius = (bounds.diagonal() * 0.5).max(MIN_DISTANCE);
        self.target = bounds.center();
        self.distance = radius / (self.fov * 0.5).sin();
        self.yaw = 0.0;
        self.pitch = 0.0;
        self.home = (self.target, self.distance);
        self.scene_center = self.target;
        self.scene_radius = radius;
        self.update_clipping();
    }

    /// Return to the last fitted (or initial) view
    pub fn reset(&mut self) {
        let (target, distance) = self.home;
        self.target = target;
        self.distance = distance;
        self.yaw = 0.0;
        self.pitch = 0.0;
        self.update_clipping();
    }

    /// Fit near/far around the scene sphere as seen from the current eye
    ///
    /// `near` never exceeds half the target distance, so the target itself
    /// is always inside the frustum.
    fn update_clipping(&mut self) {
        let eye_to_center = (self.position() - self.scene_center).norm();
        self.near = (eye_to_center - self.scene_radius)
            .clamp(self.distance * 1e-3, self.distance * 0.5);
        self.far = (eye_to_center + self.scene_radius).max(self.distance * 2.0);
    }

    pub fn position(&self) -> Point3<f32> {
        self.target + self.offset_direction() * self.distance
    }

    /// Unit vector from the target towards the camera
    fn offset_direction(&self) -> Vector3<f32> {
        Vector3::new(
            self.pitch.cos() * self.yaw.sin(),
            self.pitch.sin(),
            self.pitch.cos() * self.yaw.cos(),
        )
    }

    /// Get the view matrix
    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(&self.position(), &self.target, &Vector3::y())
    }

    /// Get the projection matrix in wgpu clip space
    pub fn projection_matrix(&self) -> Matrix4<f32> {
        let perspective = Perspective3::new(self.aspect_ratio, self.fov, self.near, self.far);
        opengl_to_wgpu() * perspective.into_inner()
    }

    pub fn view_projection(&self) -> Matrix4<f32> {
        self.projection_matrix() * self.view_matrix()
    }

    /// Rotate the camera around the target
    pub fn orbit(&mut self, horizontal: f32, vertical: f32) {
        self.yaw -= horizontal;
        self.pitch = (self.pitch + vertical).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.update_clipping();
    }

    /// Slide camera and target together in the view plane
    ///
    /// Deltas are fractions of the current distance, so panning feels the
    /// same at every zoom level.
    pub fn pan(&mut self, horizontal: f32, vertical: f32) {
        let forward = -self.offset_direction();
        let right = forward.cross(&Vector3::y()).normalize();
        let up = right.cross(&forward);
        self.target += (-right * horizontal + up * vertical) * self.distance;
        self.update_clipping();
    }

    /// Move towards (positive) or away from (negative) the target
    pub fn zoom(&mut self, amount: f32) {
        self.distance = (self.distance * (-amount).exp()).max(MIN_DISTANCE);
        self.update_clipping();
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect_ratio = width as f32 / height as f32;
        }
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(
            Point3::origin(),
            5.0,
            std::f32::consts::FRAC_PI_6,
            16.0 / 9.0,
        )
    }
}
