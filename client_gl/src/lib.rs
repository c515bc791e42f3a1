//! Desktop OpenGL client for Simple Pong

pub mod app;
pub mod camera;
pub mod input;
pub mod logging;
pub mod renderer;

pub use app::{App, GameContext};
pub use renderer::{Renderer, RendererError};
