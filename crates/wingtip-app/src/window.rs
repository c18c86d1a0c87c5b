//! Window, pixel surface and the per-frame driver.
//!
//! Each redraw runs exactly one frame: measure dt, snapshot the held
//! controls, step the simulation, compose the cockpit, rasterize it into the
//! pixel surface and refresh the title-bar HUD.

use std::path::Path;
use std::sync::Arc;

use pixels::{Pixels, SurfaceTexture};
use tracing::{error, info, instrument, warn};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::KeyCode;
use winit::window::{Window, WindowAttributes, WindowId};
use wingtip_config::Config;
use wingtip_input::{InputMap, KeyboardState};
use wingtip_present::{Frame, FrameView, Rasterizer, Viewport, compose_frame, format_title};
use wingtip_sim::{Simulation, StepOutcome};

use crate::error::AppError;
use crate::frame_clock::FrameClock;

/// Written to the working directory when the snapshot key is pressed.
pub const SNAPSHOT_FILE: &str = "wingtip-snapshot.png";
/// Key that writes [`SNAPSHOT_FILE`].
pub const SNAPSHOT_KEY: KeyCode = KeyCode::F12;

/// Returns [`WindowAttributes`] based on the given configuration.
pub fn window_attributes_from_config(config: &Config) -> WindowAttributes {
    WindowAttributes::default()
        .with_title(config.window.title.clone())
        .with_inner_size(winit::dpi::LogicalSize::new(
            config.window.width as f64,
            config.window.height as f64,
        ))
}

/// The GPU-backed pixel buffer and the canvas painted into it.
struct Surface {
    window: Arc<Window>,
    pixels: Pixels<'static>,
    raster: Rasterizer,
}

impl Surface {
    fn new(window: Arc<Window>) -> Result<Self, AppError> {
        let size = window.inner_size();
        let (width, height) = (size.width.max(1), size.height.max(1));
        let texture = SurfaceTexture::new(width, height, Arc::clone(&window));
        let pixels = Pixels::new(width, height, texture).map_err(AppError::Surface)?;
        let raster = Rasterizer::new(width, height)?;
        info!("Pixel surface initialized: {width}x{height}");
        Ok(Self {
            window,
            pixels,
            raster,
        })
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), AppError> {
        if width == 0 || height == 0 {
            return Ok(());
        }
        self.pixels
            .resize_surface(width, height)
            .map_err(AppError::Resize)?;
        self.pixels
            .resize_buffer(width, height)
            .map_err(AppError::Resize)?;
        self.raster.resize(width, height)?;
        info!("Window resized to {width}x{height}");
        Ok(())
    }

    fn viewport(&self) -> Viewport {
        let (width, height) = self.raster.size();
        Viewport::new(width, height)
    }

    fn present(&mut self, frame: &Frame) -> Result<(), AppError> {
        let rgba = self.raster.draw(frame);
        let target = self.pixels.frame_mut();
        if target.len() == rgba.len() {
            target.copy_from_slice(rgba);
        } else {
            warn!("Pixel buffer size mismatch, skipping frame");
        }
        self.pixels.render().map_err(AppError::Surface)
    }
}

/// Application state driven by the winit event loop.
pub struct FlightApp {
    config: Config,
    input_map: InputMap,
    keyboard: KeyboardState,
    sim: Simulation,
    clock: FrameClock,
    surface: Option<Surface>,
    title: String,
    error: Option<AppError>,
}

impl FlightApp {
    pub fn new(config: Config, input_map: InputMap, sim: Simulation) -> Self {
        let clock = FrameClock::new(config.simulation.max_frame_dt);
        Self {
            config,
            input_map,
            keyboard: KeyboardState::new(),
            sim,
            clock,
            surface: None,
            title: String::new(),
            error: None,
        }
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    pub fn keyboard_mut(&mut self) -> &mut KeyboardState {
        &mut self.keyboard
    }

    /// Step once with the currently held controls and compose the result.
    ///
    /// Clears per-frame key transients, so call it exactly once per frame.
    pub fn advance(&mut self, dt: f64, viewport: Viewport) -> (StepOutcome, Frame) {
        let controls = self.input_map.snapshot(&self.keyboard);
        let outcome = self.sim.step(dt, &controls);
        let frame = compose_frame(&FrameView::from(&self.sim), viewport);

        if self.keyboard.just_pressed(SNAPSHOT_KEY) {
            save_snapshot(&frame, Path::new(SNAPSHOT_FILE));
        }
        self.keyboard.clear_transients();
        (outcome, frame)
    }

    fn redraw(&mut self) -> Result<(), AppError> {
        let Some(viewport) = self.surface.as_ref().map(Surface::viewport) else {
            return Ok(());
        };
        let dt = self.clock.tick();
        let (_, frame) = self.advance(dt, viewport);

        let title = format_title(self.sim.flight(), self.sim.status());
        if let Some(surface) = &mut self.surface {
            surface.present(&frame)?;
            if title != self.title {
                surface.window.set_title(&title);
            }
            surface.window.request_redraw();
        }
        self.title = title;
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: AppError) {
        error!("{err}");
        self.error = Some(err);
        event_loop.exit();
    }
}

fn save_snapshot(frame: &Frame, path: &Path) {
    if let Err(e) = frame.save_png(path) {
        warn!("{e}");
    }
}

impl ApplicationHandler for FlightApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.surface.is_some() {
            return;
        }
        let window = match event_loop.create_window(window_attributes_from_config(&self.config)) {
            Ok(window) => Arc::new(window),
            Err(e) => return self.fail(event_loop, AppError::Window(e)),
        };
        match Surface::new(window) {
            Ok(surface) => {
                surface.window.request_redraw();
                self.surface = Some(surface);
                self.clock.restart();
            }
            Err(e) => self.fail(event_loop, e),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                info!("Close requested, shutting down");
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(surface) = &mut self.surface
                    && let Err(e) = surface.resize(size.width, size.height)
                {
                    self.fail(event_loop, e);
                }
            }
            WindowEvent::Focused(false) => {
                // Release events for keys held during the switch never arrive.
                self.keyboard.release_all();
            }
            WindowEvent::Focused(true) => {
                self.clock.restart();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                self.keyboard.process_event(&event);
            }
            WindowEvent::RedrawRequested => {
                if let Err(e) = self.redraw() {
                    self.fail(event_loop, e);
                }
            }
            _ => {}
        }
    }
}

/// Create the event loop and fly until the window closes.
#[instrument(skip_all)]
pub fn run(config: Config, input_map: InputMap, sim: Simulation) -> Result<(), AppError> {
    let event_loop = EventLoop::new().map_err(AppError::EventLoop)?;
    let mut app = FlightApp::new(config, input_map, sim);
    event_loop.run_app(&mut app).map_err(AppError::EventLoop)?;
    info!(
        frames = app.clock.frame_count(),
        seconds = app.clock.total_time(),
        score = app.sim.flight().score,
        "Session ended"
    );
    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::event::ElementState;
    use winit::keyboard::PhysicalKey;
    use wingtip_input::RawKeyEvent;

    fn app() -> FlightApp {
        FlightApp::new(Config::default(), InputMap::default(), Simulation::default())
    }

    fn key(app: &mut FlightApp, code: KeyCode, state: ElementState) {
        app.keyboard_mut().process_raw(RawKeyEvent {
            key: PhysicalKey::Code(code),
            state,
            repeat: false,
        });
    }

    #[test]
    fn test_clock_uses_configured_cap() {
        let mut config = Config::default();
        config.simulation.max_frame_dt = 0.02;
        let app = FlightApp::new(config, InputMap::default(), Simulation::default());
        assert!((app.clock.max_dt() - 0.02).abs() < 1e-12);
    }

    #[test]
    fn test_advance_applies_held_keys() {
        let mut app = app();
        key(&mut app, KeyCode::ArrowUp, ElementState::Pressed);
        let (outcome, frame) = app.advance(0.05, Viewport::new(640, 480));

        assert_eq!(outcome, StepOutcome::Advanced);
        assert!((app.simulation().flight().throttle - (0.55 + 0.4 * 0.05)).abs() < 1e-9);
        assert!(frame.texts().any(|t| t == "THR 57%"));
    }

    #[test]
    fn test_pitch_keys_follow_default_layout() {
        let mut app = app();
        key(&mut app, KeyCode::KeyS, ElementState::Pressed);
        app.advance(0.05, Viewport::new(640, 480));
        assert!(app.simulation().flight().pitch > 1.0);

        key(&mut app, KeyCode::KeyS, ElementState::Released);
        key(&mut app, KeyCode::KeyW, ElementState::Pressed);
        app.advance(0.05, Viewport::new(640, 480));
        app.advance(0.05, Viewport::new(640, 480));
        assert!(app.simulation().flight().pitch < 1.0);
    }

    #[test]
    fn test_reset_key() {
        let mut app = app();
        key(&mut app, KeyCode::ArrowUp, ElementState::Pressed);
        app.advance(0.05, Viewport::new(640, 480));
        key(&mut app, KeyCode::ArrowUp, ElementState::Released);
        key(&mut app, KeyCode::KeyR, ElementState::Pressed);
        let (outcome, _) = app.advance(0.05, Viewport::new(640, 480));
        assert_eq!(outcome, StepOutcome::Reset);
        assert!((app.simulation().flight().throttle - 0.55).abs() < 1e-12);
    }

    #[test]
    fn test_focus_loss_releases_keys() {
        let mut app = app();
        key(&mut app, KeyCode::ArrowUp, ElementState::Pressed);
        app.keyboard_mut().release_all();
        app.advance(0.05, Viewport::new(640, 480));
        assert!((app.simulation().flight().throttle - 0.55).abs() < 1e-12);
    }

    #[test]
    fn test_save_snapshot_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SNAPSHOT_FILE);
        let mut app = app();
        let (_, frame) = app.advance(0.016, Viewport::new(64, 48));
        save_snapshot(&frame, &path);
        assert!(path.exists());
    }

    #[test]
    fn test_snapshot_failure_is_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join(SNAPSHOT_FILE);
        let mut app = app();
        let (_, frame) = app.advance(0.016, Viewport::new(64, 48));
        save_snapshot(&frame, &path);
        assert!(!path.exists());
    }
}
