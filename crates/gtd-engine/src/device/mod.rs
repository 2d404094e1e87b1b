//! GPU device + surface management.
//!
//! Creates the wgpu device for one window, keeps the swapchain configured
//! across resizes, and hands out one encoder per acquired frame.

mod gpu;
mod init;
mod surface;

pub use gpu::{Gpu, GpuFrame};
pub use init::GpuInit;
pub use surface::{surface_error_level, SurfaceErrorAction};
