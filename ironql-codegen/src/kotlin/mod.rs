//! Kotlin output.

pub mod file;
pub mod render;

pub use file::KotlinFileEmitter;
pub use render::KotlinRenderer;
