use std::path::Path;

use af_core::error::CoreError;
use af_core::frame::FrameBuffer;

/// Load an image from disk as a 3-channel RGB frame.
///
/// Any alpha channel is dropped, palettes and grayscale are expanded.
///
/// # Errors
/// Returns `CoreError::Decode` if the file is missing, unreadable, or not a
/// supported image, and `CoreError::InvalidImage` if it decodes to zero pixels.
///
/// # Example
/// ```no_run
/// use af_source::image::load_image;
/// use std::path::Path;
/// let frame = load_image(Path::new("photo.png")).unwrap();
/// ```
pub fn load_image(path: &Path) -> Result<FrameBuffer, CoreError> {
    let img = image::open(path).map_err(|e| CoreError::decode(path.display().to_string(), e))?;
    log::debug!(
        "Décodé {} : {}×{} ({:?})",
        path.display(),
        img.width(),
        img.height(),
        img.color()
    );
    into_frame(&img)
}

/// Decode an in-memory encoded image (PNG, JPEG, BMP, GIF).
///
/// # Errors
/// Same as [`load_image`].
///
/// # Example
/// ```
/// use af_source::image::load_image_from_memory;
/// assert!(load_image_from_memory(b"not an image").is_err());
/// ```
pub fn load_image_from_memory(bytes: &[u8]) -> Result<FrameBuffer, CoreError> {
    let img = image::load_from_memory(bytes).map_err(|e| CoreError::decode("<memory>", e))?;
    into_frame(&img)
}

fn into_frame(img: &image::DynamicImage) -> Result<FrameBuffer, CoreError> {
    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();
    if width == 0 || height == 0 {
        return Err(CoreError::InvalidImage { width, height });
    }
    Ok(FrameBuffer {
        data: rgb.into_raw(),
        width,
        height,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use ::image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
    use af_core::color::Rgb;

    use super::*;

    fn png_bytes(img: &DynamicImage) -> Vec<u8> {
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn rgba_is_flattened_to_rgb() {
        let img = RgbaImage::from_pixel(3, 2, Rgba([10, 20, 30, 128]));
        let frame = load_image_from_memory(&png_bytes(&DynamicImage::ImageRgba8(img))).unwrap();
        assert_eq!((frame.width, frame.height), (3, 2));
        assert_eq!(frame.data.len(), 18);
        assert_eq!(frame.pixel(2, 1), Rgb::new(10, 20, 30));
    }

    #[test]
    fn grayscale_is_expanded() {
        let img = DynamicImage::ImageLuma8(::image::GrayImage::from_pixel(1, 1, ::image::Luma([77])));
        let frame = load_image_from_memory(&png_bytes(&img)).unwrap();
        assert_eq!(frame.pixel(0, 0), Rgb::new(77, 77, 77));
    }

    #[test]
    fn garbage_is_decode_error() {
        let err = load_image_from_memory(&[0x89, b'P', b'N', b'G', 0, 0]).unwrap_err();
        assert!(matches!(err, CoreError::Decode { .. }));
    }

    #[test]
    fn missing_file_is_decode_error() {
        let err = load_image(Path::new("/nope/missing.png")).unwrap_err();
        assert!(matches!(err, CoreError::Decode { .. }));
        assert!(err.to_string().contains("missing.png"));
    }

    #[test]
    fn load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("red.png");
        ::image::RgbImage::from_pixel(4, 4, ::image::Rgb([255, 0, 0]))
            .save(&path)
            .unwrap();
        let frame = load_image(&path).unwrap();
        assert_eq!(frame.pixel(3, 3), Rgb::new(255, 0, 0));
    }
}
