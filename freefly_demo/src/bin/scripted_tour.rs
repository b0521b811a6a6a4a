//! Scripted camera tour
//!
//! Drives the camera through a fixed command sequence without opening a
//! window and logs the matrices a render loop would upload. Useful for
//! checking the toolkit end to end where no display is available.

use freefly::camera::{Camera, CameraMovement};
use freefly::shader::{RecordingProgram, ShaderProgram, UniformValue};
use freefly::{fly_error, fly_info, FreeflyResult};
use glam::Vec3;

const FRAME_DT: f32 = 1.0 / 60.0;
const ASPECT: f32 = 640.0 / 480.0;

enum Leg {
    /// Hold a movement key for a number of frames
    Move(CameraMovement, u32),
    /// Apply a single pointer delta
    Look(f32, f32),
    /// Apply a scroll delta
    Zoom(f32),
}

fn tour() -> Vec<(&'static str, Leg)> {
    vec![
        ("walk forward one second", Leg::Move(CameraMovement::Forward, 60)),
        ("strafe right half a second", Leg::Move(CameraMovement::Right, 30)),
        ("look left 45 degrees", Leg::Look(-450.0, 0.0)),
        ("look up 30 degrees", Leg::Look(0.0, 300.0)),
        ("zoom in", Leg::Zoom(20.0)),
        ("walk forward again", Leg::Move(CameraMovement::Forward, 60)),
        ("level out", Leg::Look(0.0, -300.0)),
        ("zoom back out", Leg::Zoom(-20.0)),
    ]
}

fn upload(camera: &Camera, program: &mut RecordingProgram) -> FreeflyResult<()> {
    program.set_mat4("view", &camera.view_matrix())?;
    program.set_mat4("projection", &camera.projection_matrix(ASPECT, 0.1, 100.0))?;
    Ok(())
}

fn main() -> FreeflyResult<()> {
    let mut camera = Camera::new(Vec3::new(0.0, 0.0, 3.0), Vec3::Y, -90.0, 0.0);
    let mut program = RecordingProgram::new();

    fly_info!("demo::scripted_tour", "starting tour from ({:.1}, {:.1}, {:.1})",
        camera.position().x, camera.position().y, camera.position().z);

    for (name, leg) in tour() {
        match leg {
            Leg::Move(direction, frames) => {
                for _ in 0..frames {
                    camera.process_keyboard(direction, FRAME_DT);
                    upload(&camera, &mut program)?;
                }
            }
            Leg::Look(x_offset, y_offset) => {
                camera.process_mouse_movement(x_offset, y_offset, true);
                upload(&camera, &mut program)?;
            }
            Leg::Zoom(y_offset) => {
                camera.process_mouse_scroll(y_offset);
                upload(&camera, &mut program)?;
            }
        }

        let position = camera.position();
        fly_info!(
            "demo::scripted_tour",
            "{}: position ({:.2}, {:.2}, {:.2}) yaw {:.1} pitch {:.1} zoom {:.1}",
            name,
            position.x,
            position.y,
            position.z,
            camera.yaw(),
            camera.pitch(),
            camera.zoom()
        );
    }

    match program.last_upload("view") {
        Some(UniformValue::Mat4(view)) => {
            fly_info!("demo::scripted_tour", "final view matrix:");
            for row in 0..4 {
                let r = view.row(row);
                fly_info!(
                    "demo::scripted_tour",
                    "  [{:8.4} {:8.4} {:8.4} {:8.4}]",
                    r.x, r.y, r.z, r.w
                );
            }
        }
        _ => fly_error!("demo::scripted_tour", "no view matrix was uploaded"),
    }

    fly_info!(
        "demo::scripted_tour",
        "tour complete, {} uniform uploads recorded",
        program.uploads().len()
    );

    Ok(())
}
