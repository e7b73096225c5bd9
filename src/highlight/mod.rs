pub mod terms;
pub mod config;
pub mod error;
pub mod finder;
pub mod span;
pub mod chunk;
pub mod engine;
pub mod render;
pub mod wasm;

pub use terms::*;
pub use config::*;
pub use error::*;
pub use finder::*;
pub use span::*;
pub use chunk::*;
pub use engine::*;
pub use render::*;
pub use wasm::*;

#[cfg(test)]
mod tests;
