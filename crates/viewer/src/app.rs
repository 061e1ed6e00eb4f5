use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use twin::{FrameError, FrameLoop, LoopEvent, LoopState, Projection, SystemClock};
use winit::application::ApplicationHandler;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::config::ViewerConfig;
use crate::render::Renderer;
use crate::stats::FrameStats;

pub struct App {
    config: ViewerConfig,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    frame_loop: Option<FrameLoop<SystemClock>>,
    stats: FrameStats,
    fatal: Option<anyhow::Error>,
}

impl App {
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            config,
            window: None,
            renderer: None,
            frame_loop: None,
            stats: FrameStats::new(),
            fatal: None,
        }
    }

    /// Consumes the app once the event loop has returned, reporting any
    /// fatal error raised while it ran.
    pub fn finish(self) -> anyhow::Result<()> {
        match self.fatal {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn initialise(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.as_str())
            .with_inner_size(winit::dpi::PhysicalSize::new(
                self.config.width,
                self.config.height,
            ));

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("failed to create window")?,
        );

        let rt = tokio::runtime::Runtime::new()?;
        let renderer = rt
            .block_on(Renderer::new(window.clone(), &self.config))
            .context("failed to initialise graphics context")?;

        let projection = Projection::from_size(renderer.size.width, renderer.size.height);
        self.frame_loop = Some(FrameLoop::new(
            SystemClock::start(),
            projection,
            self.config.frame_interval,
        ));
        self.renderer = Some(renderer);
        self.window = Some(window);

        log::info!(
            "window ready at {}x{}",
            self.config.width,
            self.config.height
        );
        Ok(())
    }

    fn fail(&mut self, err: anyhow::Error, event_loop: &ActiveEventLoop) {
        log::error!("{err:#}");
        self.fatal = Some(err);
        event_loop.exit();
    }

    fn quit(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(frame_loop) = &mut self.frame_loop {
            frame_loop.handle_event(LoopEvent::Quit);
        }
        event_loop.exit();
    }

    fn handle_resize(&mut self, size: winit::dpi::PhysicalSize<u32>) {
        if let Some(renderer) = &mut self.renderer {
            renderer.resize(size);
        }
        if let Some(frame_loop) = &mut self.frame_loop {
            frame_loop.handle_event(LoopEvent::Resized {
                width: size.width,
                height: size.height,
            });
        }
    }

    fn handle_redraw(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(renderer), Some(frame_loop)) = (&mut self.renderer, &mut self.frame_loop) else {
            return;
        };

        match frame_loop.step([], renderer) {
            Ok(LoopState::Running) => self.stats.record_frame(Instant::now()),
            Ok(LoopState::Stopped) => event_loop.exit(),
            Err(FrameError::Present(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated)) => {
                renderer.resize(renderer.size)
            }
            Err(FrameError::Present(wgpu::SurfaceError::OutOfMemory)) => {
                log::error!("out of GPU memory, exiting");
                event_loop.exit();
            }
            Err(FrameError::Present(e)) => log::warn!("surface error: {e}"),
            Err(FrameError::Render(e)) => self.fail(e.into(), event_loop),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(err) = self.initialise(event_loop) {
            self.fail(err, event_loop);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => self.quit(event_loop),
            WindowEvent::Resized(size) => self.handle_resize(size),
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed
                    && event.physical_key == PhysicalKey::Code(KeyCode::Escape)
                {
                    self.quit(event_loop);
                }
            }
            WindowEvent::RedrawRequested => self.handle_redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(window), Some(frame_loop)) = (&self.window, &self.frame_loop) else {
            return;
        };
        if !frame_loop.is_running() {
            return;
        }

        if frame_loop.is_frame_due() {
            window.request_redraw();
        }

        let wake_at = frame_loop
            .clock()
            .instant_at(frame_loop.schedule().next_frame());
        event_loop.set_control_flow(ControlFlow::WaitUntil(wake_at));
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        let frames = self.frame_loop.as_ref().map_or(0, |f| f.frames());
        log::info!("shutting down after {frames} frames");

        self.renderer = None;
        self.window = None;
    }
}
