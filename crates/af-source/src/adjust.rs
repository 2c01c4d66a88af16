use af_core::config::RenderConfig;
use af_core::frame::FrameBuffer;

/// Point neutre du contraste.
const MID_GRAY: f32 = 128.0;

/// Build a per-channel lookup table from a transfer function.
fn build_lut(f: impl Fn(f32) -> f32) -> [u8; 256] {
    let mut lut = [0u8; 256];
    for (i, slot) in lut.iter_mut().enumerate() {
        *slot = f(i as f32).round().clamp(0.0, 255.0) as u8;
    }
    lut
}

fn apply_lut(frame: &mut FrameBuffer, lut: &[u8; 256]) {
    for byte in &mut frame.data {
        *byte = lut[*byte as usize];
    }
}

/// Scale each channel's deviation from mid-gray by `factor`, clamped to [0, 255].
///
/// # Example
/// ```
/// use af_core::color::Rgb;
/// use af_core::frame::FrameBuffer;
/// use af_source::adjust::apply_contrast;
/// let mut fb = FrameBuffer::filled(1, 1, Rgb::new(148, 128, 108));
/// apply_contrast(&mut fb, 2.0);
/// assert_eq!(fb.pixel(0, 0), Rgb::new(168, 128, 88));
/// ```
pub fn apply_contrast(frame: &mut FrameBuffer, factor: f32) {
    let lut = build_lut(|v| (v - MID_GRAY) * factor + MID_GRAY);
    apply_lut(frame, &lut);
}

/// Scale each channel by `factor`, clamped to [0, 255].
///
/// # Example
/// ```
/// use af_core::color::Rgb;
/// use af_core::frame::FrameBuffer;
/// use af_source::adjust::apply_brightness;
/// let mut fb = FrameBuffer::filled(1, 1, Rgb::new(100, 200, 10));
/// apply_brightness(&mut fb, 1.5);
/// assert_eq!(fb.pixel(0, 0), Rgb::new(150, 255, 15));
/// ```
pub fn apply_brightness(frame: &mut FrameBuffer, factor: f32) {
    let lut = build_lut(|v| v * factor);
    apply_lut(frame, &lut);
}

/// Apply the configured adjustments in order: contrast, then brightness.
///
/// Neutral factors (exactly 1.0) are skipped.
#[allow(clippy::float_cmp)]
pub fn apply_adjustments(frame: &mut FrameBuffer, config: &RenderConfig) {
    if config.contrast != 1.0 {
        log::debug!("Contraste ×{}", config.contrast);
        apply_contrast(frame, config.contrast);
    }
    if config.brightness != 1.0 {
        log::debug!("Luminosité ×{}", config.brightness);
        apply_brightness(frame, config.brightness);
    }
}
