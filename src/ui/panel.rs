//! Debug control panel for the viewer.

use crate::gfx::{
    camera::{Camera, CameraMode, CameraRig},
    scene::SceneState,
};

/// Draws the "Viewer" window and applies any edits to `scene`.
///
/// Returns `true` when a widget changed the scene this frame.
pub fn viewer_panel(ui: &imgui::Ui, scene: &mut SceneState) -> bool {
    let display_size = ui.io().display_size;
    // Nothing to lay out in a minimized window.
    if display_size[0] <= 0.0 || display_size[1] <= 0.0 {
        return false;
    }

    let mut changed = false;
    ui.window("Viewer")
        .size([280.0, 220.0], imgui::Condition::FirstUseEver)
        .position([20.0, 20.0], imgui::Condition::FirstUseEver)
        .resizable(true)
        .collapsible(true)
        .build(|| {
            changed |= render_object_controls(ui, scene);
            ui.separator();
            changed |= render_camera_controls(ui, scene);
        });
    changed
}

fn render_object_controls(ui: &imgui::Ui, scene: &mut SceneState) -> bool {
    let object = &mut scene.object;
    ui.text("Object");

    let mut changed = ui.checkbox("Auto Rotate Object", &mut object.auto_rotate);
    if imgui::Drag::new("Yaw")
        .range(0.0, 360.0)
        .speed(0.5)
        .display_format("%.1f deg")
        .build(ui, &mut object.yaw)
    {
        object.yaw = object.yaw.rem_euclid(360.0);
        changed = true;
    }
    ui.text(format!(
        "Pitch {:.1}  Roll {:.1}",
        object.pitch, object.roll
    ));
    changed
}

fn render_camera_controls(ui: &imgui::Ui, scene: &mut SceneState) -> bool {
    let mut changed = false;
    ui.text(format!("Camera: {}", scene.camera_mode()));

    let eye = scene.camera.eye();
    ui.text(format!("Eye ({:.2}, {:.2}, {:.2})", eye.x, eye.y, eye.z));

    if let CameraRig::Orbital(orbit) = &mut scene.camera {
        changed |= ui.checkbox("Auto Rotate Camera", &mut orbit.auto_rotate);
    }

    let label = match scene.camera_mode() {
        CameraMode::FreeFly => "Switch to Orbital",
        CameraMode::Orbital => "Switch to Free-Fly",
    };
    if ui.button(label) {
        scene.toggle_camera_mode();
        changed = true;
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ViewerConfig;
    use std::sync::{Mutex, MutexGuard};

    // Dear ImGui allows one active context per process.
    static IMGUI: Mutex<()> = Mutex::new(());

    fn lock_imgui() -> MutexGuard<'static, ()> {
        IMGUI.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn headless_context() -> imgui::Context {
        let mut ctx = imgui::Context::create();
        ctx.set_ini_filename(None);
        ctx.io_mut().display_size = [800.0, 600.0];
        ctx.fonts().build_rgba32_texture();
        ctx
    }

    #[test]
    fn test_panel_without_input_leaves_scene_unchanged() {
        let _guard = lock_imgui();
        let mut ctx = headless_context();
        let mut scene = SceneState::new(&ViewerConfig::default()).unwrap();
        let object_before = scene.object;
        let camera_before = scene.camera.clone();

        for _ in 0..3 {
            let ui = ctx.new_frame();
            assert!(!viewer_panel(ui, &mut scene));
            ctx.render();
        }

        assert_eq!(scene.object, object_before);
        assert_eq!(scene.camera, camera_before);
    }

    #[test]
    fn test_panel_draws_in_orbital_mode() {
        let _guard = lock_imgui();
        let mut ctx = headless_context();
        let config = ViewerConfig::default().with_camera_mode(CameraMode::Orbital);
        let mut scene = SceneState::new(&config).unwrap();

        for _ in 0..2 {
            let ui = ctx.new_frame();
            assert!(!viewer_panel(ui, &mut scene));
            ctx.render();
        }
        assert_eq!(scene.camera_mode(), CameraMode::Orbital);
    }

    #[test]
    fn test_panel_skips_zero_display() {
        let _guard = lock_imgui();
        let mut ctx = headless_context();
        ctx.io_mut().display_size = [0.0, 0.0];
        let mut scene = SceneState::new(&ViewerConfig::default()).unwrap();

        let ui = ctx.new_frame();
        assert!(!viewer_panel(ui, &mut scene));
        ctx.render();
    }
}
