use crate::coords::Viewport;

/// What a renderer may touch while recording a frame.
///
/// Built by `Gpu::render_ctx`; lives for one frame.
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    /// Pipelines must target this format.
    pub surface_format: wgpu::TextureFormat,
    pub viewport: Viewport,
}

/// The acquired swapchain image and the encoder recording into it.
///
/// Passes must `Load` so the clear and earlier passes survive.
pub struct RenderTarget<'a> {
    pub encoder: &'a mut wgpu::CommandEncoder,
    pub color_view: &'a wgpu::TextureView,
}
