use bytemuck::{Pod, Zeroable};

use crate::coords::Rect;
use crate::scene::DrawList;

/// One vertex of a filled shape: logical-pixel position + premultiplied color.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct ShapeVertex {
    pub pos: [f32; 2],
    pub color: [f32; 4],
}

impl ShapeVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2, // pos
        1 => Float32x4  // color
    ];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ShapeVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Largest outline a single shape may contribute. Bigger shapes are skipped.
///
/// Keeps one shape far below wgpu's default `max_buffer_size` even after the
/// renderer rounds buffers up to a power of two.
pub const MAX_OUTLINE_POINTS: usize = 1 << 16;

/// Turns a recorded frame into triangle-list geometry.
///
/// Each shape's convex outline becomes a fan around its first point. Output
/// follows `list` order, so the GPU paints later shapes over earlier ones.
/// Skipped: outlines under three points or over [`MAX_OUTLINE_POINTS`],
/// non-finite points, zero-area bounds, invisible fills.
///
/// `vertices` and `indices` are cleared first and reused as scratch buffers.
pub fn tessellate(list: &DrawList, vertices: &mut Vec<ShapeVertex>, indices: &mut Vec<u32>) {
    vertices.clear();
    indices.clear();

    for shape in list.items() {
        let fill = shape.fill();
        if fill.is_invisible() {
            continue;
        }

        let len = shape.outline_len();
        if len > MAX_OUTLINE_POINTS {
            log::warn!("tessellate: skipping shape with {len} outline points (max {MAX_OUTLINE_POINTS})");
            continue;
        }

        let outline = shape.outline();
        if outline.len() < 3 || !outline.iter().all(|p| p.is_finite()) {
            continue;
        }
        if Rect::from_points(&outline).is_none_or(Rect::is_empty) {
            continue;
        }

        let base = vertices.len() as u32;
        let color = fill.to_array();
        vertices.extend(outline.iter().map(|p| ShapeVertex { pos: [p.x, p.y], color }));

        for i in 1..outline.len() as u32 - 1 {
            indices.extend_from_slice(&[base, base + i, base + i + 1]);
        }
    }
}
