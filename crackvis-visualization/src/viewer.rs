//! Interactive point cloud window

use std::sync::Arc;

use crackvis_core::{Error, Renderable, Result};
use serde::{Deserialize, Serialize};
use winit::{
    dpi::LogicalSize,
    event::{ElementState, Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    keyboard::{Key, NamedKey},
    window::WindowBuilder,
};

use crate::camera::OrbitCamera;
use crate::controls::CameraControls;
use crate::renderer::{PointCloudRenderer, RenderConfig};
use crate::SceneViewer;

/// Window configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
    pub render: RenderConfig,
}

impl ViewerConfig {
    /// Default configuration titled after the file being shown
    pub fn for_file(file_name: &str) -> Self {
        Self {
            title: format!("CrackVis: {}", file_name),
            ..Self::default()
        }
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: "CrackVis".to_string(),
            width: 1200.0,
            height: 800.0,
            render: RenderConfig::default(),
        }
    }
}

/// Blocking winit + wgpu window with orbit/pan/zoom camera controls
///
/// Keys: `R` resets the camera, `Escape` closes the window.
pub struct InteractiveViewer {
    config: ViewerConfig,
}

impl InteractiveViewer {
    pub fn new(config: ViewerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }
}

impl Default for InteractiveViewer {
    fn default() -> Self {
        Self::new(ViewerConfig::default())
    }
}

impl SceneViewer for InteractiveViewer {
    fn show(&mut self, renderable: &Renderable) -> Result<()> {
        tracing::info!(
            title = %self.config.title,
            points = renderable.len(),
            "opening viewer window"
        );

        let event_loop = EventLoop::new()
            .map_err(|e| Error::Visualization(format!("Failed to create event loop: {}", e)))?;
        let window = Arc::new(
            WindowBuilder::new()
                .with_title(self.config.title.as_str())
                .with_inner_size(LogicalSize::new(self.config.width, self.config.height))
                .build(&event_loop)
                .map_err(|e| Error::Visualization(format!("Failed to create window: {}", e)))?,
        );

        let mut renderer =
            pollster::block_on(PointCloudRenderer::new(window.clone(), self.config.render.clone()))?;
        renderer.upload(&renderable.vertices);

        let size = renderer.size();
        let mut camera = OrbitCamera::default();
        camera.set_viewport(size.width, size.height);
        if let Some(bounds) = &renderable.bounds {
            camera.fit_bounds(bounds);
        }
        let mut controls = CameraControls::default();
        let mut failure: Option<Error> = None;
        window.request_redraw();

        event_loop
            .run(|event, target| {
                target.set_control_flow(ControlFlow::Wait);

                let Event::WindowEvent { event, .. } = event else {
                    return;
                };

                let changed = match event {
                    WindowEvent::CloseRequested => {
                        target.exit();
                        false
                    }
                    WindowEvent::Resized(new_size) => {
                        renderer.resize(new_size);
                        camera.set_viewport(new_size.width, new_size.height);
                        true
                    }
                    WindowEvent::MouseInput { state, button, .. } => {
                        controls.on_mouse_button(button, state);
                        false
                    }
                    WindowEvent::CursorMoved { position, .. } => {
                        controls.on_cursor_moved(position, &mut camera)
                    }
                    WindowEvent::MouseWheel { delta, .. } => controls.on_scroll(delta, &mut camera),
                    WindowEvent::KeyboardInput { event, .. }
                        if event.state == ElementState::Pressed =>
                    {
                        match &event.logical_key {
                            Key::Named(NamedKey::Escape) => {
                                target.exit();
                                false
                            }
                            Key::Character(c) if c.as_str().eq_ignore_ascii_case("r") => {
                                camera.reset();
                                tracing::debug!("camera reset");
                                true
                            }
                            _ => false,
                        }
                    }
                    WindowEvent::RedrawRequested => {
                        renderer.update_camera(&camera);
                        if let Err(e) = renderer.render() {
                            tracing::error!(error = %e, "render failed");
                            failure = Some(e);
                            target.exit();
                        }
                        false
                    }
                    _ => false,
                };

                if changed {
                    window.request_redraw();
                }
            })
            .map_err(|e| Error::Visualization(format!("Event loop error: {}", e)))?;

        tracing::info!("viewer window closed");
        failure.map_or(Ok(()), Err)
    }
}
