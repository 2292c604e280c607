//! Windowed host backed by raylib (cargo feature `raylib`).
//!
//! - [`window`] – window, input sampling, textures and the [`Canvas`](crate::canvas::Canvas) implementation
//! - [`audio`] – audio thread owning the raylib audio device
pub mod audio;
pub mod window;
