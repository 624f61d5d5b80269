use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop, EventLoopProxy};
use winit::window::{Window, WindowId};

use crate::device::GpuInit;
use crate::render::{self, ExitSignal, FrameLoopConfig, RenderContext, RenderThread, SetupOptions};

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    /// WGSL source with the `VShader`/`PShader` entry points.
    pub shader_path: PathBuf,
    pub frame_loop: FrameLoopConfig,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "Hello Triangle".to_string(),
            initial_size: LogicalSize::new(400.0, 300.0),
            shader_path: PathBuf::from("triangle.wgsl"),
            frame_loop: FrameLoopConfig::default(),
        }
    }
}

/// Events posted to the event loop from other threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeEvent {
    /// The render loop ended without being asked to.
    RenderStopped,
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the window, runs the render thread until the window closes, then tears down.
    ///
    /// Returns the first setup, frame or teardown error.
    pub fn run(config: RuntimeConfig, gpu_init: GpuInit) -> Result<()> {
        let event_loop = EventLoop::<RuntimeEvent>::with_user_event()
            .build()
            .context("failed to create winit EventLoop")?;
        let proxy = event_loop.create_proxy();

        let mut state = AppState::new(config, gpu_init, proxy);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        state.finish()
    }
}

struct AppState {
    config: RuntimeConfig,
    gpu_init: GpuInit,
    proxy: EventLoopProxy<RuntimeEvent>,

    window: Option<Arc<Window>>,
    render: Option<RenderThread<RenderContext>>,
    started: bool,
    error: Option<anyhow::Error>,
}

impl AppState {
    fn new(config: RuntimeConfig, gpu_init: GpuInit, proxy: EventLoopProxy<RuntimeEvent>) -> Self {
        Self {
            config,
            gpu_init,
            proxy,
            window: None,
            render: None,
            started: false,
            error: None,
        }
    }

    fn record_error(&mut self, err: anyhow::Error) {
        log::error!("{err:#}");
        if self.error.is_none() {
            self.error = Some(err);
        }
    }

    fn start(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size)
            .with_resizable(false);

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("failed to create window")?,
        );
        self.window = Some(window.clone());

        let options = SetupOptions {
            shader_path: self.config.shader_path.clone(),
            gpu: self.gpu_init.clone(),
            ..SetupOptions::default()
        };
        let context = render::setup(window, &options).context("renderer setup failed")?;

        let proxy = self.proxy.clone();
        let thread = RenderThread::spawn(
            context,
            ExitSignal::new(),
            self.config.frame_loop.clone(),
            move || {
                // The event loop may already be gone during shutdown.
                let _ = proxy.send_event(RuntimeEvent::RenderStopped);
            },
        )
        .context("failed to start render thread")?;

        self.render = Some(thread);
        Ok(())
    }

    /// Stops and joins the render thread, then releases the GPU resources.
    fn shutdown(&mut self) {
        if let Some(thread) = self.render.take() {
            match render::teardown(thread) {
                Ok(report) => log::info!(
                    "presented {} frames, released {} resources",
                    report.stats.frames_presented,
                    report.released.len()
                ),
                Err(e) => self.record_error(anyhow!(e).context("render loop failed")),
            }
        }

        // Surface is gone by now; the window may follow.
        self.window = None;
    }

    fn finish(mut self) -> Result<()> {
        self.shutdown();
        match self.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl ApplicationHandler<RuntimeEvent> for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.started {
            return;
        }
        self.started = true;

        event_loop.set_control_flow(ControlFlow::Wait);

        if let Err(e) = self.start(event_loop) {
            self.record_error(e);
            self.shutdown();
            event_loop.exit();
        }
    }

    fn user_event(&mut self, event_loop: &ActiveEventLoop, event: RuntimeEvent) {
        match event {
            RuntimeEvent::RenderStopped => {
                log::debug!("render thread stopped on its own; closing");
                self.shutdown();
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let ours = self.window.as_ref().is_some_and(|w| w.id() == window_id);
        if !ours {
            return;
        }

        // Presentation happens on the render thread; redraw/resize requests are ignored.
        if let WindowEvent::CloseRequested = event {
            log::debug!("close requested");
            self.shutdown();
            event_loop.exit();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_window_is_small_and_titled() {
        let cfg = RuntimeConfig::default();
        assert_eq!(cfg.title, "Hello Triangle");
        assert_eq!(cfg.initial_size, LogicalSize::new(400.0, 300.0));
        assert_eq!(cfg.shader_path, PathBuf::from("triangle.wgsl"));
        assert_eq!(cfg.frame_loop.vertex_count, 3);
    }
}
