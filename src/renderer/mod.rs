//! Rendering module
//!
//! `scene` builds a GPU-agnostic frame from the world; `pipeline` draws it
//! with WebGPU.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::{Banner, Frame, Hud, build_frame};
