use anyhow::{Context, Result};
use client_gl::logging::init_logging;
use client_gl::App;
use game_core::Config;
use winit::event_loop::{ControlFlow, EventLoop};

fn main() -> Result<()> {
    init_logging();

    let event_loop = EventLoop::new().context("failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(Config::new());
    event_loop
        .run_app(&mut app)
        .context("event loop terminated with error")?;

    app.into_result()
}
