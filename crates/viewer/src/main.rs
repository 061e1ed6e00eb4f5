mod app;
mod config;
mod render;
mod stats;

use winit::event_loop::EventLoop;

use config::ViewerConfig;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let event_loop = EventLoop::new()?;
    let mut app = app::App::new(ViewerConfig::default());

    event_loop.run_app(&mut app)?;

    app.finish()
}
