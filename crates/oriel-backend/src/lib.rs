//! Backend bridging a retained-mode UI library to a fixed-function
//! handheld: analog pad in, draw lists out.
//!
//! Per frame the host calls [`backend::Backend::begin_frame`] (pad sample +
//! delta time), hands the results to its UI layer, then passes the UI's
//! draw data to [`backend::Backend::render`], which drives a [`gpu::Gpu`]
//! implementation. The font atlas is baked once at startup from the UI
//! layer's exported bitmap.

pub mod atlas;
pub mod backend;
pub mod coords;
pub mod draw;
pub mod gpu;
pub mod input;
pub mod time;

pub mod logging;
pub mod render;

pub use backend::{Backend, BackendConfig, BackendInfo};
