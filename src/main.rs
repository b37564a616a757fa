//! Ball Drop entry point
//!
//! Opens the window, wires winit events into the game and runs the frame loop.

use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Instant;

use anyhow::Context;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use ball_drop::game::FrameStatus;
use ball_drop::platform::{FpsCounter, FrameLimiter, Keyboard};
use ball_drop::renderer::{SpriteRenderState, TextureData};
use ball_drop::{Game, Settings};

/// Everything that exists once the window is up
struct Running {
    window: Arc<Window>,
    renderer: SpriteRenderState,
    game: Game,
    _spawner: JoinHandle<()>,
}

struct App {
    settings: Settings,
    running: Option<Running>,
    keyboard: Keyboard,
    limiter: FrameLimiter,
    fps: FpsCounter,
    /// Startup failure, reported from `main` once the loop exits
    error: Option<anyhow::Error>,
}

impl App {
    fn new(settings: Settings) -> Self {
        let limiter = FrameLimiter::new(settings.frame_rate_limit, Instant::now());
        Self {
            settings,
            running: None,
            keyboard: Keyboard::new(),
            limiter,
            fps: FpsCounter::new(),
            error: None,
        }
    }

    fn start(&self, event_loop: &ActiveEventLoop) -> anyhow::Result<Running> {
        let settings = &self.settings;
        let (width, height) = settings.window_size;

        let attributes = Window::default_attributes()
            .with_title(settings.window_title.as_str())
            .with_inner_size(PhysicalSize::new(width, height))
            .with_resizable(false);
        let window = Arc::new(
            event_loop
                .create_window(attributes)
                .context("failed to create window")?,
        );

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });
        let surface = instance
            .create_surface(window.clone())
            .context("failed to create surface")?;
        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .context("failed to get adapter")?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let size = window.inner_size();
        let mut renderer = pollster::block_on(SpriteRenderState::new(
            surface,
            &adapter,
            size.width,
            size.height,
        ))?;

        let load = |name: &std::path::Path| -> anyhow::Result<TextureData> {
            let path = settings.asset_path(name);
            TextureData::load(&path)
                .with_context(|| format!("failed to load texture {}", path.display()))
        };
        let player_texture = renderer.create_texture(&load(&settings.player_texture)?);
        let ball_texture = renderer.create_texture(&load(&settings.ball_texture)?);

        let game = Game::new(settings, player_texture);
        let spawner = game
            .spawner(settings.spawn_origin, ball_texture, settings.spawn_interval())
            .start()
            .context("failed to start ball spawner")?;

        Ok(Running {
            window,
            renderer,
            game,
            _spawner: spawner,
        })
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.running.is_some() {
            return;
        }
        match self.start(event_loop) {
            Ok(running) => {
                log::info!("Ball Drop running!");
                self.running = Some(running);
            }
            Err(e) => {
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(running) = self.running.as_mut() else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                running.game.close();
                event_loop.exit();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    self.keyboard.handle_key(code, event.state);
                }
            }
            WindowEvent::Focused(false) => self.keyboard.release_all(),
            WindowEvent::Resized(size) => running.renderer.resize(size.width, size.height),
            WindowEvent::RedrawRequested => {
                let now = Instant::now();
                if !self.limiter.try_begin_frame(now) {
                    // Not due yet; `about_to_wait` asks again at the deadline
                    return;
                }

                match running.game.frame(&self.keyboard, &mut running.renderer) {
                    Ok(FrameStatus::Presented) => {}
                    Ok(FrameStatus::Closed) => event_loop.exit(),
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        let (width, height) = running.renderer.size;
                        running.renderer.resize(width, height);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                        event_loop.exit();
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }

                if self.fps.record(now) {
                    log::debug!(
                        "frame {}: {} fps, {} balls",
                        running.game.frame_count(),
                        self.fps.fps(),
                        running.game.balls().read().len()
                    );
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(running) = self.running.as_ref() else {
            return;
        };
        if !running.game.is_open() {
            return;
        }
        if self.limiter.is_due(Instant::now()) {
            running.window.request_redraw();
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.limiter.next_deadline()));
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Ball Drop starting...");

    let settings = Settings::default();
    log::debug!("Settings: {}", serde_json::to_string(&settings)?);

    let event_loop = EventLoop::new().context("failed to create event loop")?;
    let mut app = App::new(settings);
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
