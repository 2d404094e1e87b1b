use winit::dpi::PhysicalSize;

/// What the frame loop does after a failed surface acquire.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SurfaceErrorAction {
    /// Surface was configured again; try next frame.
    Reconfigured,
    SkipFrame,
    /// The device cannot continue; leave the loop.
    Fatal,
}

/// Log level for a failed acquire.
///
/// `Outdated` and `Timeout` repeat every frame while a window is resized or
/// hidden, so they stay at debug.
pub fn surface_error_level(err: &wgpu::SurfaceError) -> log::Level {
    match err {
        wgpu::SurfaceError::Outdated | wgpu::SurfaceError::Timeout => log::Level::Debug,
        wgpu::SurfaceError::OutOfMemory => log::Level::Error,
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Other => log::Level::Warn,
    }
}

/// Picks the surface format, preferring 8-bit sRGB when asked.
pub(super) fn choose_surface_format(
    formats: &[wgpu::TextureFormat],
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    const SRGB: [wgpu::TextureFormat; 2] = [
        wgpu::TextureFormat::Bgra8UnormSrgb,
        wgpu::TextureFormat::Rgba8UnormSrgb,
    ];

    if prefer_srgb {
        if let Some(f) = SRGB.into_iter().find(|f| formats.contains(f)) {
            return Some(f);
        }
    }
    formats.first().copied()
}

/// Opaque when the surface allows it; the game window never shows through.
pub(super) fn choose_alpha_mode(supported: &[wgpu::CompositeAlphaMode]) -> wgpu::CompositeAlphaMode {
    if supported.contains(&wgpu::CompositeAlphaMode::Opaque) {
        return wgpu::CompositeAlphaMode::Opaque;
    }
    supported.first().copied().unwrap_or(wgpu::CompositeAlphaMode::Auto)
}

/// Applies a new drawable size.
///
/// wgpu rejects 0x0 surfaces, so a zero-sized window only updates `size`;
/// the surface is configured again once the window becomes visible.
pub(super) fn apply_resize(
    surface: &wgpu::Surface,
    device: &wgpu::Device,
    config: &mut wgpu::SurfaceConfiguration,
    size: &mut PhysicalSize<u32>,
    new_size: PhysicalSize<u32>,
) {
    *size = new_size;
    if new_size.width == 0 || new_size.height == 0 {
        log::debug!("gpu: deferring surface configure for zero-sized window");
        return;
    }

    config.width = new_size.width;
    config.height = new_size.height;
    surface.configure(device, config);
}

pub(super) fn map_surface_error(
    surface: &wgpu::Surface,
    device: &wgpu::Device,
    config: &wgpu::SurfaceConfiguration,
    size: PhysicalSize<u32>,
    err: wgpu::SurfaceError,
) -> SurfaceErrorAction {
    match err {
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => {
            if size.width > 0 && size.height > 0 {
                surface.configure(device, config);
            }
            SurfaceErrorAction::Reconfigured
        }
        wgpu::SurfaceError::OutOfMemory => SurfaceErrorAction::Fatal,
        wgpu::SurfaceError::Timeout | wgpu::SurfaceError::Other => SurfaceErrorAction::SkipFrame,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wgpu::{CompositeAlphaMode, SurfaceError, TextureFormat};

    // ── surface format ────────────────────────────────────────────────────

    #[test]
    fn srgb_is_preferred_when_present() {
        let formats = [TextureFormat::Bgra8Unorm, TextureFormat::Rgba8UnormSrgb];
        assert_eq!(choose_surface_format(&formats, true), Some(TextureFormat::Rgba8UnormSrgb));
    }

    #[test]
    fn first_format_without_preference() {
        let formats = [TextureFormat::Bgra8Unorm, TextureFormat::Rgba8UnormSrgb];
        assert_eq!(choose_surface_format(&formats, false), Some(TextureFormat::Bgra8Unorm));
    }

    #[test]
    fn no_formats_is_none() {
        assert_eq!(choose_surface_format(&[], true), None);
    }

    // ── alpha mode ────────────────────────────────────────────────────────

    #[test]
    fn opaque_wins_over_earlier_modes() {
        let supported = [CompositeAlphaMode::PreMultiplied, CompositeAlphaMode::Opaque];
        assert_eq!(choose_alpha_mode(&supported), CompositeAlphaMode::Opaque);
    }

    #[test]
    fn without_opaque_the_first_mode_is_used() {
        let supported = [CompositeAlphaMode::PostMultiplied, CompositeAlphaMode::Inherit];
        assert_eq!(choose_alpha_mode(&supported), CompositeAlphaMode::PostMultiplied);
    }

    #[test]
    fn empty_alpha_list_is_auto() {
        assert_eq!(choose_alpha_mode(&[]), CompositeAlphaMode::Auto);
    }

    // ── acquire errors ────────────────────────────────────────────────────

    #[test]
    fn per_frame_acquire_errors_stay_below_warn() {
        // A minimized window fails every acquire with one of these.
        for err in [SurfaceError::Outdated, SurfaceError::Timeout] {
            assert!(surface_error_level(&err) > log::Level::Warn, "{err:?}");
        }
    }

    #[test]
    fn lost_and_out_of_memory_are_reported() {
        assert_eq!(surface_error_level(&SurfaceError::Lost), log::Level::Warn);
        assert_eq!(surface_error_level(&SurfaceError::OutOfMemory), log::Level::Error);
    }
}
