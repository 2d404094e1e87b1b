/// Swapchain preferences for the game window.
///
/// Device features and limits stay at wgpu defaults; shapes need nothing more.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Pick an 8-bit sRGB surface when the adapter offers one.
    pub prefer_srgb: bool,
    pub present_mode: wgpu::PresentMode,
    /// Frames the swapchain may queue ahead (a hint).
    pub frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            frame_latency: 2,
        }
    }
}
