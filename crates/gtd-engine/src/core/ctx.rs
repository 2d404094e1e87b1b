use winit::window::Window;

use crate::device::{surface_error_level, Gpu, SurfaceErrorAction};
use crate::paint::Color;
use crate::render::{RenderCtx, RenderTarget, ShapeRenderer};
use crate::scene::{DrawList, SceneRenderer};

use super::app::AppControl;

/// The window being drawn this frame.
pub struct WindowCtx<'a> {
    pub window: &'a Window,
}

/// Per-frame context passed to `core::App::on_frame`.
///
/// Lifetimes:
/// - `'a` is the duration of the callback invocation
/// - `'w` is the window-borrow lifetime carried by `Gpu<'w>`
pub struct FrameCtx<'a, 'w> {
    pub window: WindowCtx<'a>,
    pub gpu: &'a mut Gpu<'w>,
    /// Frames rendered in this window before this one.
    pub frame_index: u64,
    pub(crate) draw_list: &'a mut DrawList,
    pub(crate) shapes: &'a mut ShapeRenderer,
}

impl<'a, 'w> FrameCtx<'a, 'w> {
    /// Runs one full frame for `scene`: clear the surface to `clear`, draw every
    /// root in order, present.
    pub fn render_scene(&mut self, clear: Color, scene: &SceneRenderer) -> AppControl {
        let (draw_list, shapes) = (&mut *self.draw_list, &mut *self.shapes);

        render_frame(&self.window, self.gpu, clear, |rctx, target| {
            draw_list.clear();
            scene.draw(draw_list);
            shapes.render(rctx, target, draw_list);
        })
    }

    /// Clears the surface with `clear`, calls `draw` with a ready [`RenderCtx`]
    /// and [`RenderTarget`], then presents the frame.
    pub fn render<F>(&mut self, clear: Color, draw: F) -> AppControl
    where
        F: FnOnce(&RenderCtx<'_>, &mut RenderTarget<'_>),
    {
        render_frame(&self.window, self.gpu, clear, draw)
    }
}

fn render_frame<F>(window: &WindowCtx<'_>, gpu: &mut Gpu<'_>, clear: Color, draw: F) -> AppControl
where
    F: FnOnce(&RenderCtx<'_>, &mut RenderTarget<'_>),
{
    let mut frame = match gpu.begin_frame() {
        Ok(f) => f,
        Err(err) => {
            log::log!(surface_error_level(&err), "surface unavailable: {err}");
            return match gpu.handle_surface_error(err) {
                SurfaceErrorAction::Fatal => AppControl::Exit,
                SurfaceErrorAction::Reconfigured | SurfaceErrorAction::SkipFrame => {
                    AppControl::Continue
                }
            };
        }
    };

    {
        let mut target = frame.target();

        // Clear pass; ends before the draw callback records its own passes.
        drop(target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("gtd clear"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color {
                        r: clear.r as f64,
                        g: clear.g as f64,
                        b: clear.b as f64,
                        a: clear.a as f64,
                    }),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        }));

        let rctx = gpu.render_ctx(window.window.scale_factor());
        draw(&rctx, &mut target);
    }

    window.window.pre_present_notify();
    gpu.submit(frame);

    AppControl::Continue
}
