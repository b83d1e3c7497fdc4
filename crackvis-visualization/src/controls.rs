//! Mouse and keyboard camera controls

use crate::camera::OrbitCamera;
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton, MouseScrollDelta};

/// What a mouse drag currently does to the camera
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragMode {
    #[default]
    None,
    Orbit,
    Pan,
}

/// Translates raw window input into camera motion
///
/// Left drag orbits, right or middle drag pans, the wheel zooms. Every
/// handler returns `true` when the camera changed and a redraw is due.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraControls {
    pub orbit_speed: f32,
    pub pan_speed: f32,
    pub zoom_speed: f32,
    drag: DragMode,
    last_cursor: Option<PhysicalPosition<f64>>,
}

impl CameraControls {
    pub fn drag_mode(&self) -> DragMode {
        self.drag
    }

    pub fn on_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        let pressed = state == ElementState::Pressed;
        self.drag = match (button, pressed) {
            (MouseButton::Left, true) => DragMode::Orbit,
            (MouseButton::Right | MouseButton::Middle, true) => DragMode::Pan,
            (_, false) => DragMode::None,
            (_, true) => self.drag,
        };
    }

    pub fn on_cursor_moved(
        &mut self,
        position: PhysicalPosition<f64>,
        camera: &mut OrbitCamera,
    ) -> bool {
        let previous = self.last_cursor.replace(position);
        let Some(last) = previous else {
            return false;
        };

        let dx = (position.x - last.x) as f32;
        let dy = (position.y - last.y) as f32;
        match self.drag {
            DragMode::Orbit => {
                camera.orbit(dx * self.orbit_speed, dy * self.orbit_speed);
                true
            }
            DragMode::Pan => {
                camera.pan(dx * self.pan_speed, dy * self.pan_speed);
                true
            }
            DragMode::None => false,
        }
    }

    pub fn on_scroll(&mut self, delta: MouseScrollDelta, camera: &mut OrbitCamera) -> bool {
        let lines = match delta {
            MouseScrollDelta::LineDelta(_, y) => y,
            MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 100.0,
        };
        if lines == 0.0 {
            return false;
        }
        camera.zoom(lines * self.zoom_speed);
        true
    }
}

impl Default for CameraControls {
    fn default() -> Self {
        Self {
            orbit_speed: 0.01,
            pan_speed: 0.002,
            zoom_speed: 0.1,
            drag: DragMode::None,
            last_cursor: None,
        }
    }
}
