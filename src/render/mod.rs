pub mod common;
mod renderer;

pub use renderer::Renderer;
