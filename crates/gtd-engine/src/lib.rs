//! gtd engine crate.
//!
//! The retained scene (`scene`) is platform-free. Everything else is the host
//! side that puts a scene on screen: window runtime, GPU device, shape
//! renderer, logging.

pub mod coords;
pub mod core;
pub mod device;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod window;
