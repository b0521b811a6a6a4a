//! Interactive camera walkthrough
//!
//! Opens a window and drives a free-fly camera from WASD and the mouse,
//! uploading the view and projection matrices through the shader
//! surface once per frame and logging the camera state once a second.
//! No GPU backend is attached; the recording program stands in for one,
//! which keeps the demo runnable anywhere a window can open.
//!
//! Controls: WASD / arrow keys to move, mouse to look, scroll to zoom,
//! Escape to quit.

use freefly::camera::{Camera, ZoomLimits};
use freefly::input::InputState;
use freefly::shader::{ProgramDesc, RecordingBackend, ShaderBackend, ShaderProgram};
use freefly::time::FrameClock;
use freefly::{fly_error, fly_info, FreeflyError, FreeflyResult};
use glam::{Vec2, Vec3};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

const WIDTH: u32 = 640;
const HEIGHT: u32 = 480;

const VERTEX_SHADER: &str = r#"
#version 330 core

layout(location = 0) in vec3 aPos;
layout(location = 1) in vec2 aTexCoord;

out vec2 TexCoord;

uniform mat4 model;
uniform mat4 view;
uniform mat4 projection;

void main() {
    gl_Position = projection * view * model * vec4(aPos, 1.0);
    TexCoord = aTexCoord;
}
"#;

const FRAGMENT_SHADER: &str = r#"
#version 330 core

in vec2 TexCoord;

out vec4 fragmentColor;

uniform sampler2D texture1;
uniform sampler2D texture2;

void main() {
    fragmentColor = mix(texture(texture1, TexCoord), texture(texture2, TexCoord), 0.2);
}
"#;

struct App {
    window: Option<Window>,
    program: Box<dyn ShaderProgram>,
    camera: Camera,
    input: InputState,
    clock: FrameClock,
    aspect: f32,
    log_timer: f32,
}

impl App {
    fn new(program: Box<dyn ShaderProgram>, camera: Camera) -> Self {
        Self {
            window: None,
            program,
            camera,
            input: InputState::new(),
            clock: FrameClock::new(),
            aspect: WIDTH as f32 / HEIGHT as f32,
            log_timer: 0.0,
        }
    }

    /// One frame: drain the input, move the camera, upload the
    /// matrices. Input is always applied before the view matrix is
    /// read.
    fn frame(&mut self) {
        let delta = self.clock.delta_secs();

        for direction in self.input.movement().directions() {
            self.camera.process_keyboard(direction, delta);
        }

        let cursor = self.input.cursor_delta();
        if cursor != Vec2::ZERO {
            self.camera.process_mouse_movement(cursor.x, cursor.y, true);
        }

        let scroll = self.input.scroll_delta();
        if scroll != 0.0 {
            self.camera.process_mouse_scroll(scroll);
        }

        self.input.begin_frame();

        let view = self.camera.view_matrix();
        let projection = self.camera.projection_matrix(self.aspect, 0.1, 100.0);
        if let Err(e) = self.program.set_mat4("view", &view) {
            fly_error!("demo::walkthrough", "view upload failed: {}", e);
        }
        if let Err(e) = self.program.set_mat4("projection", &projection) {
            fly_error!("demo::walkthrough", "projection upload failed: {}", e);
        }

        self.log_timer += delta;
        if self.log_timer >= 1.0 {
            self.log_timer = 0.0;
            let position = self.camera.position();
            fly_info!(
                "demo::walkthrough",
                "position ({:.2}, {:.2}, {:.2}) yaw {:.1} pitch {:.1} zoom {:.1}",
                position.x,
                position.y,
                position.z,
                self.camera.yaw(),
                self.camera.pitch(),
                self.camera.zoom()
            );
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let attributes = Window::default_attributes()
                .with_title("Freefly Walkthrough")
                .with_inner_size(LogicalSize::new(WIDTH, HEIGHT));
            match event_loop.create_window(attributes) {
                Ok(window) => {
                    fly_info!("demo::walkthrough", "window created ({}x{})", WIDTH, HEIGHT);
                    self.window = Some(window);
                    self.clock.reset();
                }
                Err(e) => {
                    fly_error!("demo::walkthrough", "failed to create window: {}", e);
                    event_loop.exit();
                }
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                fly_info!("demo::walkthrough", "close requested, shutting down");
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if size.height > 0 {
                    self.aspect = size.width as f32 / size.height as f32;
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    if key == KeyCode::Escape {
                        event_loop.exit();
                        return;
                    }
                    if event.state.is_pressed() {
                        self.input.on_key_pressed(key);
                    } else {
                        self.input.on_key_released(key);
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.input.on_cursor_moved(position.x as f32, position.y as f32);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let scroll = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
                };
                self.input.on_scroll(scroll);
            }
            WindowEvent::RedrawRequested => {
                self.frame();
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}

fn main() -> FreeflyResult<()> {
    let event_loop = EventLoop::new().map_err(|e| FreeflyError::WindowCreation(e.to_string()))?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut backend = RecordingBackend::new();
    let program = backend.create_program(&ProgramDesc {
        vertex: VERTEX_SHADER,
        fragment: FRAGMENT_SHADER,
    })?;

    // Start three units back looking down -Z, with the scroll zoom
    // clamped so the projection stays usable.
    let camera = Camera::new(Vec3::new(0.0, 0.0, 3.0), Vec3::Y, -90.0, 0.0)
        .with_zoom_limits(ZoomLimits::new(1.0, 45.0)?);

    fly_info!("demo::walkthrough", "starting walkthrough, Escape quits");

    let mut app = App::new(program, camera);
    event_loop
        .run_app(&mut app)
        .map_err(|e| FreeflyError::WindowCreation(e.to_string()))?;

    Ok(())
}
