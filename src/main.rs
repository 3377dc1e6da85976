//! driftplane - A crumpled plane drifting under the stars
//!
//! The surface breathes on its own; hovering it flashes the triangle under
//! the pointer. Enter sends the camera flying off toward the destination URL.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{anyhow, Context};
use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use driftplane::cli::Args;
use driftplane::controls::ControlPanel;
use driftplane::params::RenderConfig;
use driftplane::rendering::RenderSystem;
use driftplane::scene::{ndc_from_cursor, Scene, SceneEvent};

/// Main application state
struct App {
    // Window and rendering
    window: Option<Arc<Window>>,
    render_system: Option<RenderSystem>,

    // Simulation
    scene: Scene,
    controls: ControlPanel,

    // Configuration
    render_config: RenderConfig,

    // Time tracking
    last_frame: Instant,

    /// Error that stopped the event loop, reported from `main`
    fatal: Option<anyhow::Error>,
}

impl App {
    fn new(args: &Args) -> Self {
        let render_config = RenderConfig::default();
        let config = args.scene_config();
        let controls = ControlPanel::new(config.plane);
        let scene = Scene::new(config, render_config.aspect_ratio());

        Self {
            window: None,
            render_system: None,
            scene,
            controls,
            render_config,
            last_frame: Instant::now(),
            fatal: None,
        }
    }

    fn init_graphics(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let window_attributes = Window::default_attributes()
            .with_title(self.render_config.window_title(None))
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.render_config.window_width,
                self.render_config.window_height,
            ));

        let window = Arc::new(
            event_loop
                .create_window(window_attributes)
                .context("Failed to create window")?,
        );

        let size = window.inner_size();
        self.scene.resize(size.width, size.height);

        let render_system = pollster::block_on(RenderSystem::new(
            Arc::clone(&window),
            &self.scene,
            &self.render_config,
        ))
        .context("Failed to initialize renderer")?;

        log::info!("driftplane is running");
        log::info!("Tab selects a plane field, Up/Down edits it, Enter flies away, Esc quits");

        self.window = Some(window);
        self.render_system = Some(render_system);
        self.last_frame = Instant::now();
        Ok(())
    }

    fn handle_key(&mut self, code: KeyCode, event_loop: &ActiveEventLoop) {
        match code {
            KeyCode::Escape => event_loop.exit(),
            KeyCode::Enter | KeyCode::NumpadEnter | KeyCode::Space => {
                if self.scene.begin_fly_away() {
                    self.update_title();
                }
            }
            KeyCode::Tab => {
                self.controls.select_next();
                log::info!("Selected {}", self.controls.describe());
            }
            KeyCode::ArrowUp => self.adjust_plane(1),
            KeyCode::ArrowDown => self.adjust_plane(-1),
            _ => {}
        }
    }

    fn update_title(&self) {
        if let Some(window) = &self.window {
            window.set_title(&self.render_config.window_title(self.scene.leaving_for()));
        }
    }

    fn adjust_plane(&mut self, steps: i32) {
        match self.controls.adjust(steps) {
            Some(params) => {
                log::info!("{}", self.controls.describe());
                self.scene.regenerate(params);
            }
            None => log::debug!("{} is at its limit", self.controls.describe()),
        }
    }

    /// Tick the scene and draw a single frame
    fn render_frame(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        let dt_s = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;

        if let Some(SceneEvent::Navigate(url)) = self.scene.tick(dt_s) {
            log::info!("Fly-away complete, navigating to {}", url);
            event_loop.exit();
            return;
        }

        let Some(render_system) = self.render_system.as_mut() else {
            return;
        };

        render_system.upload(&mut self.scene);

        match render_system.render() {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::debug!("Surface lost or outdated, reconfiguring");
                render_system.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                self.fatal = Some(anyhow!("GPU ran out of memory"));
                event_loop.exit();
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return; // Already initialized
        }

        if let Err(e) = self.init_graphics(event_loop) {
            self.fatal = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(render_system) = self.render_system.as_mut() {
                    render_system.resize(size.width, size.height);
                }
                self.scene.resize(size.width, size.height);
            }
            WindowEvent::CursorMoved { position, .. } => {
                let Some(window) = &self.window else {
                    return;
                };
                let size = window.inner_size();
                if let Some(ndc) = ndc_from_cursor(position.x, position.y, size.width, size.height)
                {
                    self.scene.set_pointer(ndc);
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(code),
                        repeat,
                        ..
                    },
                ..
            } => {
                // Held arrows keep stepping; other keys act once
                if !repeat || matches!(code, KeyCode::ArrowUp | KeyCode::ArrowDown) {
                    self.handle_key(code, event_loop);
                }
            }
            WindowEvent::RedrawRequested => {
                self.render_frame(event_loop);
            }
            _ => {}
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    log::info!("driftplane - a crumpled plane drifting under the stars");

    let mut app = App::new(&args);
    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    event_loop
        .run_app(&mut app)
        .context("Event loop exited with an error")?;

    match app.fatal.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
