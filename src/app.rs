use std::sync::Arc;
use std::time::Duration;

use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalSize},
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};

use crate::{
    config::ViewerConfig,
    error::ViewerError,
    gfx::{
        camera::Viewport,
        scene::{FrameMatrices, MeshData, SceneState},
    },
    input::{FrameClock, InputTracker},
};

/// Receives the matrices of every frame. This is where a renderer plugs in.
pub trait FrameSink {
    /// Called after the viewport changed to a valid size.
    fn resize(&mut self, _viewport: Viewport) {}

    fn submit(&mut self, frame: &FrameMatrices, scene: &SceneState);
}

/// Sink that only logs what it would draw.
#[derive(Debug, Default)]
pub struct LogSink {
    frames: u64,
}

impl LogSink {
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl FrameSink for LogSink {
    fn resize(&mut self, viewport: Viewport) {
        log::info!("Viewport {}x{}", viewport.width(), viewport.height());
    }

    fn submit(&mut self, frame: &FrameMatrices, scene: &SceneState) {
        self.frames += 1;
        log::trace!("frame {}: view {:?}", self.frames, frame.view);
        if self.frames % 120 == 0 {
            log::debug!(
                "frame {}: {} camera, object yaw {:.1}",
                self.frames,
                scene.camera_mode(),
                scene.object.yaw
            );
        }
    }
}

pub struct ViewerApp {
    event_loop: Option<EventLoop<()>>,
    app_state: AppState,
}

struct AppState {
    window: Option<Arc<Window>>,
    title: String,
    window_size: (u32, u32),
    scene: SceneState,
    input: InputTracker,
    clock: FrameClock,
    sink: Box<dyn FrameSink>,
    mesh: Option<MeshData>,
    error: Option<ViewerError>,
}

impl ViewerApp {
    pub fn new(config: ViewerConfig) -> Result<Self, ViewerError> {
        let event_loop = EventLoop::new()?;
        Ok(Self {
            event_loop: Some(event_loop),
            app_state: AppState::new(config)?,
        })
    }

    /// Replaces the default [`LogSink`].
    pub fn with_sink(mut self, sink: impl FrameSink + 'static) -> Self {
        self.app_state.sink = Box::new(sink);
        self
    }

    pub fn load_mesh(&mut self, path: &str) -> Result<&MeshData, ViewerError> {
        let mesh = MeshData::load_obj(path)?;
        Ok(self.app_state.mesh.insert(mesh))
    }

    pub fn mesh(&self) -> Option<&MeshData> {
        self.app_state.mesh.as_ref()
    }

    pub fn scene_mut(&mut self) -> &mut SceneState {
        &mut self.app_state.scene
    }

    /// Runs the event loop until the window closes or Escape is pressed.
    pub fn run(mut self) -> Result<(), ViewerError> {
        let Some(event_loop) = self.event_loop.take() else {
            return Ok(());
        };
        event_loop.set_control_flow(ControlFlow::Poll);
        event_loop.run_app(&mut self.app_state)?;

        match self.app_state.error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl AppState {
    fn new(config: ViewerConfig) -> Result<Self, ViewerError> {
        Ok(Self {
            window: None,
            title: config.title.clone(),
            window_size: config.window_size,
            scene: SceneState::new(&config)?,
            input: InputTracker::new(config.key_bindings.clone()),
            clock: FrameClock::new(),
            sink: Box::new(LogSink::default()),
            mesh: None,
            error: None,
        })
    }

    /// One frame: input snapshot, state update, then hand-off to the sink.
    fn redraw(&mut self, elapsed: Duration) {
        let input = self.input.take_frame(elapsed);
        self.scene.update(&input);

        match self.scene.matrices() {
            Ok(frame) => self.sink.submit(&frame, &self.scene),
            Err(err) => log::error!("Skipping frame: {}", err),
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        if self.scene.resize(width, height).is_ok() {
            self.sink.resize(self.scene.viewport());
        }
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let (width, height) = self.window_size;
        let attributes = WindowAttributes::default()
            .with_title(self.title.clone())
            .with_inner_size(LogicalSize::new(width, height));

        match event_loop.create_window(attributes) {
            Ok(window) => {
                let window = Arc::new(window);
                let PhysicalSize { width, height } = window.inner_size();
                log::info!("Window '{}' created ({}x{})", self.title, width, height);
                self.resize(width, height);
                self.clock = FrameClock::new();
                self.window = Some(window);
            }
            Err(err) => {
                log::error!("Failed to create window: {}", err);
                self.error = Some(err.into());
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        self.input.handle_window_event(&event);
        if self.input.quit_requested() {
            event_loop.exit();
            return;
        }

        match event {
            WindowEvent::Resized(PhysicalSize { width, height }) => {
                self.resize(width, height);
            }
            WindowEvent::CloseRequested => {
                log::info!("Close requested");
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                let elapsed = self.clock.tick();
                self.redraw(elapsed);
            }
            _ => (),
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}
