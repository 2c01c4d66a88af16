use std::path::Path;

use af_ascii::compositor::Compositor;
use af_core::config::RenderConfig;
use af_core::error::CoreError;
use af_core::frame::FrameBuffer;
use af_source::sampler;

/// Convert the image at `path` into the final text artifact.
///
/// The config and ramp are checked before the file is opened.
///
/// # Errors
/// `InvalidConfig`, `Decode`, or `InvalidImage` from the stages involved.
pub fn image_to_ascii(path: &Path, config: &RenderConfig) -> Result<String, CoreError> {
    config.validate()?;
    let compositor = Compositor::new(config)?;
    let grid = sampler::sample_path(path, config)?;
    log::info!(
        "{} → grille {}×{}",
        path.display(),
        grid.width(),
        grid.height()
    );
    Ok(compositor.render(&grid))
}

/// Same as [`image_to_ascii`] for an already decoded frame.
///
/// # Errors
/// `InvalidConfig` or `InvalidImage`.
pub fn frame_to_ascii(frame: &FrameBuffer, config: &RenderConfig) -> Result<String, CoreError> {
    config.validate()?;
    let compositor = Compositor::new(config)?;
    let grid = sampler::sample(frame, config)?;
    Ok(compositor.render(&grid))
}
