//! Shared GPU plumbing for the shape pipeline.

use bytemuck::{Pod, Zeroable};

use crate::coords::Viewport;

// ── blend ─────────────────────────────────────────────────────────────────

/// Blending for premultiplied colors.
pub(super) fn premul_alpha_blend() -> wgpu::BlendState {
    let component = wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
        operation: wgpu::BlendOperation::Add,
    };
    wgpu::BlendState {
        color: component,
        alpha: component,
    }
}

// ── viewport uniform ──────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct ViewportUniform {
    pub viewport: [f32; 2],
    pub _pad: [f32; 2], // 16-byte alignment
}

impl ViewportUniform {
    pub(super) fn from_viewport(viewport: Viewport) -> Self {
        Self {
            viewport: [viewport.width.max(1.0), viewport.height.max(1.0)],
            _pad: [0.0; 2],
        }
    }

    /// Minimum binding size for the uniform buffer.
    pub(super) fn min_binding_size() -> Option<std::num::NonZeroU64> {
        std::num::NonZeroU64::new(std::mem::size_of::<Self>() as u64)
    }
}

// ── buffer growth ─────────────────────────────────────────────────────────

/// Capacity (in elements) to allocate when `required` no longer fits.
pub(super) fn grown_capacity(required: usize) -> usize {
    required.next_power_of_two().max(64)
}

/// Element capacity and byte size for a buffer holding `required` items of `T`.
///
/// Grows to [`grown_capacity`] when that fits under `max_buffer_size`, falls
/// back to the exact size otherwise, and gives `None` when even that is over.
pub(super) fn buffer_allocation<T>(required: usize, max_buffer_size: u64) -> Option<(usize, u64)> {
    let bytes = |cap: usize| (cap as u64).checked_mul(std::mem::size_of::<T>() as u64);

    [grown_capacity(required), required]
        .into_iter()
        .find_map(|cap| bytes(cap).filter(|&b| b <= max_buffer_size).map(|b| (cap, b)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::ShapeVertex;

    fn default_max() -> u64 {
        wgpu::Limits::default().max_buffer_size
    }

    #[test]
    fn grown_capacity_has_a_floor() {
        assert_eq!(grown_capacity(1), 64);
        assert_eq!(grown_capacity(64), 64);
    }

    #[test]
    fn grown_capacity_rounds_to_power_of_two() {
        assert_eq!(grown_capacity(65), 128);
        assert_eq!(grown_capacity(1000), 1024);
    }

    #[test]
    fn viewport_uniform_never_divides_by_zero() {
        let u = ViewportUniform::from_viewport(Viewport::new(0.0, 720.0));
        assert_eq!(u.viewport, [1.0, 720.0]);
    }

    // ── device limits ─────────────────────────────────────────────────────

    #[test]
    fn small_buffers_grow_to_power_of_two() {
        let (cap, bytes) = buffer_allocation::<ShapeVertex>(100, default_max()).unwrap();
        assert_eq!(cap, 128);
        assert_eq!(bytes, 128 * std::mem::size_of::<ShapeVertex>() as u64);
    }

    #[test]
    fn rounding_past_the_limit_falls_back_to_exact_size() {
        // 9M vertices round up to 2^24 (402 MB), over the 256 MiB default.
        let (cap, bytes) = buffer_allocation::<ShapeVertex>(9_000_000, default_max()).unwrap();
        assert_eq!(cap, 9_000_000);
        assert!(bytes <= default_max());
    }

    #[test]
    fn geometry_over_the_limit_is_refused() {
        assert_eq!(buffer_allocation::<ShapeVertex>(12_000_000, default_max()), None);
    }
}
