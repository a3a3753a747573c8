//! # User Interface Module
//!
//! Dear ImGui panels drawn on top of the viewer. The panels only read and
//! edit [`SceneState`](crate::gfx::scene::SceneState); hooking imgui into a
//! renderer is left to the host application.
//!
//! ```no_run
//! use orbis::ui::viewer_panel;
//! # fn draw(ui: &imgui::Ui, scene: &mut orbis::gfx::scene::SceneState) {
//! viewer_panel(ui, scene);
//! # }
//! ```

pub mod panel;

pub use panel::viewer_panel;
