use std::path::Path;

use af_core::config::{ASPECT_CORRECTION, RenderConfig};
use af_core::error::CoreError;
use af_core::frame::{FrameBuffer, Grid, PixelCell};

use crate::adjust::apply_adjustments;
use crate::resize::Resizer;

/// Hauteur cible en caractères : `max(1, round(H / W × width × 0.55))`.
///
/// # Errors
/// Returns `CoreError::InvalidImage` when the source has zero width or height.
///
/// # Example
/// ```
/// use af_source::sampler::target_height;
/// assert_eq!(target_height(200, 100, 80).unwrap(), 22);
/// assert_eq!(target_height(1000, 1, 10).unwrap(), 1);
/// assert!(target_height(0, 10, 80).is_err());
/// ```
pub fn target_height(src_width: u32, src_height: u32, width: u32) -> Result<u32, CoreError> {
    if src_width == 0 || src_height == 0 {
        return Err(CoreError::InvalidImage {
            width: src_width,
            height: src_height,
        });
    }
    let ratio = f64::from(src_height) / f64::from(src_width);
    let h = (ratio * f64::from(width) * ASPECT_CORRECTION).round();
    Ok(h.clamp(1.0, f64::from(u32::MAX)) as u32)
}

/// Sample a decoded frame into a character grid.
///
/// Applies contrast then brightness on the full-color frame, resamples to
/// `config.width × target_height`, and pairs each resampled pixel with its luma.
///
/// # Errors
/// `CoreError::InvalidConfig` for an invalid config, `CoreError::InvalidImage`
/// for a zero-sized frame.
///
/// # Example
/// ```
/// use af_core::color::Rgb;
/// use af_core::config::RenderConfig;
/// use af_core::frame::FrameBuffer;
/// use af_source::sampler::sample;
///
/// let frame = FrameBuffer::filled(4, 4, Rgb::WHITE);
/// let config = RenderConfig { width: 4, ..RenderConfig::default() };
/// let grid = sample(&frame, &config).unwrap();
/// assert_eq!((grid.width(), grid.height()), (4, 2));
/// assert!(grid.get(0, 0).luminance >= 254);
/// ```
pub fn sample(frame: &FrameBuffer, config: &RenderConfig) -> Result<Grid, CoreError> {
    config.validate()?;
    let height = target_height(frame.width, frame.height, config.width)?;
    log::debug!(
        "Échantillonnage {}×{} → {}×{height}",
        frame.width,
        frame.height,
        config.width
    );

    let mut adjusted = frame.clone();
    apply_adjustments(&mut adjusted, config);

    let mut resized = FrameBuffer::new(config.width, height);
    Resizer::new().resize_into(&adjusted, &mut resized)?;

    let cells: Vec<PixelCell> = resized
        .data
        .chunks_exact(3)
        .map(|px| PixelCell::from_rgb([px[0], px[1], px[2]].into()))
        .collect();

    Grid::new(config.width, height, cells).ok_or(CoreError::InvalidImage {
        width: config.width,
        height,
    })
}

/// Validate `config`, decode `path`, and sample it.
///
/// The config is checked before the file is touched.
///
/// # Errors
/// Any error of [`RenderConfig::validate`], [`crate::image::load_image`], or [`sample`].
///
/// # Example
/// ```no_run
/// use af_core::config::RenderConfig;
/// use af_source::sampler::sample_path;
/// use std::path::Path;
/// let grid = sample_path(Path::new("photo.jpg"), &RenderConfig::default()).unwrap();
/// ```
pub fn sample_path(path: &Path, config: &RenderConfig) -> Result<Grid, CoreError> {
    config.validate()?;
    let frame = crate::image::load_image(path)?;
    sample(&frame, config)
}
