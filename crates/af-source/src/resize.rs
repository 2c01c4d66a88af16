use af_core::error::CoreError;
use af_core::frame::FrameBuffer;
use fast_image_resize::images::Image;
use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer as FirResizer};

/// Resizer RGB wrappant fast_image_resize, filtre Lanczos3.
///
/// # Example
/// ```
/// use af_source::resize::Resizer;
/// let r = Resizer::new();
/// ```
pub struct Resizer {
    inner: FirResizer,
    options: ResizeOptions,
    /// Scratch copy of the source (fast_image_resize wants `&mut` on it).
    src_buf: Vec<u8>,
}

impl Resizer {
    /// Create a new resizer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: FirResizer::new(),
            options: ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3)),
            src_buf: Vec::new(),
        }
    }

    /// Resize `src` into `dst`. Dimensions of `dst` determine output size.
    ///
    /// # Errors
    /// Returns `CoreError::InvalidImage` if either buffer has zero or
    /// inconsistent dimensions.
    ///
    /// # Example
    /// ```
    /// use af_source::resize::Resizer;
    /// use af_core::frame::FrameBuffer;
    /// let mut r = Resizer::new();
    /// let src = FrameBuffer::new(100, 100);
    /// let mut dst = FrameBuffer::new(50, 50);
    /// r.resize_into(&src, &mut dst).unwrap();
    /// ```
    pub fn resize_into(&mut self, src: &FrameBuffer, dst: &mut FrameBuffer) -> Result<(), CoreError> {
        if src.width == dst.width && src.height == dst.height && src.data.len() == dst.data.len() {
            dst.data.copy_from_slice(&src.data);
            return Ok(());
        }

        self.src_buf.clear();
        self.src_buf.extend_from_slice(&src.data);

        let src_image =
            Image::from_slice_u8(src.width, src.height, &mut self.src_buf, PixelType::U8x3)
                .map_err(|_| CoreError::InvalidImage {
                    width: src.width,
                    height: src.height,
                })?;

        let (dst_w, dst_h) = (dst.width, dst.height);
        let mut dst_image = Image::from_slice_u8(dst_w, dst_h, &mut dst.data, PixelType::U8x3)
            .map_err(|_| CoreError::InvalidImage {
                width: dst_w,
                height: dst_h,
            })?;

        self.inner
            .resize(&src_image, &mut dst_image, Some(&self.options))
            .map_err(|e| {
                log::warn!("Resize {}×{} → {dst_w}×{dst_h} échoué : {e}", src.width, src.height);
                CoreError::InvalidImage {
                    width: src.width,
                    height: src.height,
                }
            })?;

        Ok(())
    }
}

impl Default for Resizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience for one-shot usage.
///
/// # Errors
/// Returns an error if the resize operation fails.
///
/// # Example
/// ```
/// use af_source::resize::resize_frame;
/// use af_core::frame::FrameBuffer;
/// let src = FrameBuffer::new(100, 100);
/// let dst = resize_frame(&src, 50, 27).unwrap();
/// assert_eq!((dst.width, dst.height), (50, 27));
/// ```
pub fn resize_frame(src: &FrameBuffer, width: u32, height: u32) -> Result<FrameBuffer, CoreError> {
    let mut dst = FrameBuffer::new(width, height);
    let mut resizer = Resizer::new();
    resizer.resize_into(src, &mut dst)?;
    Ok(dst)
}

#[cfg(test)]
mod tests {
    use af_core::color::Rgb;

    use super::*;

    #[test]
    fn solid_color_survives_downscale() {
        let src = FrameBuffer::filled(64, 48, Rgb::new(200, 40, 90));
        let dst = resize_frame(&src, 7, 3).unwrap();
        for y in 0..3 {
            for x in 0..7 {
                let px = dst.pixel(x, y);
                assert!(px.r.abs_diff(200) <= 1, "{px:?}");
                assert!(px.g.abs_diff(40) <= 1 && px.b.abs_diff(90) <= 1, "{px:?}");
            }
        }
    }

    #[test]
    fn upscale_single_pixel() {
        let src = FrameBuffer::filled(1, 1, Rgb::WHITE);
        let dst = resize_frame(&src, 5, 2).unwrap();
        assert!(dst.data.iter().all(|&c| c >= 254));
    }

    #[test]
    fn same_size_is_copy() {
        let mut src = FrameBuffer::new(2, 2);
        src.set_pixel(1, 0, Rgb::new(9, 8, 7));
        let dst = resize_frame(&src, 2, 2).unwrap();
        assert_eq!(dst.data, src.data);
    }

    #[test]
    fn left_right_halves_stay_ordered() {
        let mut src = FrameBuffer::new(40, 10);
        for y in 0..10 {
            for x in 20..40 {
                src.set_pixel(x, y, Rgb::WHITE);
            }
        }
        let dst = resize_frame(&src, 4, 1).unwrap();
        assert!(dst.pixel(0, 0).luminance() < 64);
        assert!(dst.pixel(3, 0).luminance() > 192);
    }
}
