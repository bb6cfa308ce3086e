//! Window creation and event handling via winit.
//!
//! [`BackdropApp`] implements winit's [`ApplicationHandler`]: it owns the
//! window, the GPU context, the scene, and the renderer for one
//! mount-to-unmount cycle, and tears them down in a fixed order on close.

use std::sync::Arc;
use std::time::Instant;

use ridgeline_config::Config;
use ridgeline_render::{
    FrameError, RenderContext, SceneRenderer, init_render_context_blocking,
};
use ridgeline_scene::pointer::pointer_to_light;
use ridgeline_scene::scene::SceneState;
use ridgeline_scene::viewport::Viewport;
use tracing::{error, info, warn};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowAttributes, WindowId};

/// Returns [`WindowAttributes`] based on the given configuration.
pub fn window_attributes_from_config(config: &Config) -> WindowAttributes {
    WindowAttributes::default()
        .with_title(config.window.title.clone())
        .with_inner_size(winit::dpi::LogicalSize::new(
            config.window.width as f64,
            config.window.height as f64,
        ))
}

/// The backdrop application: window, GPU context, scene, and renderer.
pub struct BackdropApp {
    config: Config,
    window: Option<Arc<Window>>,
    gpu: Option<RenderContext>,
    scene: Option<SceneState>,
    renderer: Option<SceneRenderer>,
    viewport: Viewport,
    /// Mount time; the animation runs on milliseconds elapsed since this.
    started: Instant,
}

impl BackdropApp {
    pub fn new(config: Config) -> Self {
        let viewport = Viewport::new(config.window.width, config.window.height, 1.0)
            .with_pixel_ratio_cap(config.render.max_pixel_ratio);
        Self {
            config,
            window: None,
            gpu: None,
            scene: None,
            renderer: None,
            viewport,
            started: Instant::now(),
        }
    }

    /// Release everything in reverse dependency order: scheduler first, so
    /// no frame can be produced mid-teardown, then renderer, GPU context,
    /// and window. Safe to call more than once.
    fn teardown(&mut self) {
        if let Some(scene) = &mut self.scene {
            scene.scheduler.stop();
        }
        if self.renderer.take().is_some() {
            info!("renderer released");
        }
        self.scene.take();
        self.gpu.take();
        self.window.take();
    }

    /// Apply a viewport update: camera aspect and surface dimensions.
    ///
    /// The camera follows the logical container aspect; the surface dims
    /// round each axis independently after the pixel-ratio cap and may
    /// differ from it by a sub-pixel.
    fn apply_viewport_update(&mut self, update: ridgeline_scene::ViewportUpdate) {
        if let Some(scene) = &mut self.scene {
            scene.camera.aspect_ratio = update.aspect_ratio;
        }
        if let Some(gpu) = &mut self.gpu {
            gpu.resize(update.surface_width, update.surface_height);
        }
    }
}

impl ApplicationHandler for BackdropApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = window_attributes_from_config(&self.config);
        let window = match event_loop.create_window(attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                error!("window creation failed: {e}");
                event_loop.exit();
                return;
            }
        };

        let scale_factor = window.scale_factor();
        let logical = window.inner_size().to_logical::<u32>(scale_factor);
        self.viewport = Viewport::new(logical.width, logical.height, scale_factor)
            .with_pixel_ratio_cap(self.config.render.max_pixel_ratio);
        info!(
            "viewport {}x{} (scale: {:.2})",
            logical.width, logical.height, scale_factor
        );

        // A zero-area mount yields no scene; the window stays open and idle.
        let Some(scene) = SceneState::build(
            logical.width,
            logical.height,
            self.config.scene.star_seed,
        ) else {
            warn!("window has no area; running without a scene");
            self.window = Some(window);
            return;
        };

        match init_render_context_blocking(window.clone(), self.config.render.vsync) {
            Ok(mut gpu) => {
                let (sw, sh) = self.viewport.surface_size();
                gpu.resize(sw, sh);
                self.renderer = Some(SceneRenderer::new(&gpu, &scene));
                self.gpu = Some(gpu);
            }
            Err(e) => {
                error!("GPU initialization failed: {e}");
                event_loop.exit();
                return;
            }
        }

        self.scene = Some(scene);
        self.started = Instant::now();
        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                info!("close requested, shutting down");
                self.teardown();
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                let logical = new_size.to_logical::<u32>(self.viewport.scale_factor());
                if let Some(update) = self.viewport.handle_resize(logical.width, logical.height) {
                    self.apply_viewport_update(update);
                }
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                if let Some(window) = &self.window {
                    let logical = window.inner_size().to_logical::<u32>(scale_factor);
                    if let Some(update) = self.viewport.handle_scale_factor_changed(
                        scale_factor,
                        logical.width,
                        logical.height,
                    ) {
                        self.apply_viewport_update(update);
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                if let (Some(window), Some(scene)) = (&self.window, &mut self.scene) {
                    let size = window.inner_size();
                    if let Some(light_pos) = pointer_to_light(
                        position.x,
                        position.y,
                        size.width as f64,
                        size.height as f64,
                    ) {
                        scene.set_light_position(light_pos);
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                let elapsed_ms = self.started.elapsed().as_secs_f64() * 1000.0;

                if let Some(scene) = &mut self.scene
                    && let Some(update) = scene.scheduler.advance(elapsed_ms)
                {
                    scene.apply_frame(update);

                    if let (Some(gpu), Some(renderer)) = (&self.gpu, &self.renderer) {
                        renderer.update(&gpu.queue, scene);
                        match renderer.render(gpu) {
                            Ok(()) => {}
                            Err(FrameError::Timeout) => {
                                warn!("frame acquisition timed out, skipping frame");
                            }
                            Err(e) => {
                                error!("rendering failed: {e}");
                                self.teardown();
                                event_loop.exit();
                                return;
                            }
                        }
                    }
                }

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}

/// Create the event loop and run the backdrop until the window closes.
pub fn run(config: Config) -> Result<(), winit::error::EventLoopError> {
    let event_loop = EventLoop::new()?;
    let mut app = BackdropApp::new(config);
    event_loop.run_app(&mut app)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_teardown_is_idempotent_without_resources() {
        let mut app = BackdropApp::new(Config::default());
        app.teardown();
        app.teardown();
        assert!(app.window.is_none());
        assert!(app.scene.is_none());
    }

    #[test]
    fn test_teardown_stops_scheduler_before_release() {
        let mut app = BackdropApp::new(Config::default());
        app.scene = SceneState::build(800, 600, 42);
        assert!(app.scene.as_ref().unwrap().scheduler.is_running());

        app.teardown();
        // Scene is gone; a second teardown finds nothing and does nothing.
        assert!(app.scene.is_none());
        app.teardown();
    }

    #[test]
    fn test_camera_aspect_follows_logical_dimensions() {
        let mut app = BackdropApp::new(Config::default());
        app.scene = SceneState::build(800, 600, 42);

        // Fractional scale on odd dimensions: each surface axis rounds
        // independently, so the surface ratio drifts off the logical 3:1.
        let mut viewport = Viewport::new(333, 111, 1.5);
        let update = viewport.handle_resize(333, 111).unwrap();
        let surface_ratio = update.surface_width as f32 / update.surface_height as f32;
        assert!((surface_ratio - 3.0).abs() > 1e-3);

        app.apply_viewport_update(update);
        let aspect = app.scene.as_ref().unwrap().camera.aspect_ratio;
        assert!((aspect - 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_window_attributes_from_config() {
        let config = Config::default();
        let attrs = window_attributes_from_config(&config);
        assert_eq!(attrs.title, "Ridgeline");
    }
}
