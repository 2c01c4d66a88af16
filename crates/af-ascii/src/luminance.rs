use af_core::charset::LuminanceLut;
use af_core::config::RenderConfig;
use af_core::error::CoreError;
use af_core::frame::PixelCell;

use crate::color_map;

pub use af_core::charset::glyph_index;

/// Convertit une cellule (luminance, RGB) en glyphe, coloré ou non.
///
/// Built once per conversion from a validated [`RenderConfig`]; holds no
/// mutable state, so one mapper can be shared across threads.
///
/// # Example
/// ```
/// use af_core::color::Rgb;
/// use af_core::config::RenderConfig;
/// use af_core::frame::PixelCell;
/// use af_ascii::luminance::GlyphMapper;
///
/// let mapper = GlyphMapper::new(&RenderConfig::default()).unwrap();
/// assert_eq!(mapper.map_cell(&PixelCell::from_rgb(Rgb::BLACK)), "@");
/// assert_eq!(mapper.map_cell(&PixelCell::from_rgb(Rgb::WHITE)), " ");
/// ```
#[derive(Clone, Debug)]
pub struct GlyphMapper {
    lut: LuminanceLut,
    color: bool,
}

impl GlyphMapper {
    /// Build a mapper from the ramp, invert, and color settings of `config`.
    ///
    /// # Errors
    /// Returns `CoreError::InvalidConfig` if the ramp is empty.
    pub fn new(config: &RenderConfig) -> Result<Self, CoreError> {
        Ok(Self {
            lut: LuminanceLut::new(&config.ramp, config.invert)?,
            color: config.color_enabled,
        })
    }

    /// Glyph for a luminance value, invert already applied.
    #[inline(always)]
    #[must_use]
    pub fn glyph(&self, luminance: u8) -> char {
        self.lut.map(luminance)
    }

    /// Whether cells are wrapped in color escapes.
    #[must_use]
    pub fn color_enabled(&self) -> bool {
        self.color
    }

    /// Append the rendered cell to `out`.
    #[inline]
    pub fn push_cell(&self, out: &mut String, cell: &PixelCell) {
        let ch = self.glyph(cell.luminance);
        if self.color {
            color_map::push_colored(out, ch, cell.color);
        } else {
            out.push(ch);
        }
    }

    /// Render one cell to its own string.
    #[must_use]
    pub fn map_cell(&self, cell: &PixelCell) -> String {
        let mut out = String::new();
        self.push_cell(&mut out, cell);
        out
    }
}

/// One-shot form of [`GlyphMapper::map_cell`].
///
/// # Errors
/// Returns `CoreError::InvalidConfig` if the ramp is empty.
///
/// # Example
/// ```
/// use af_core::color::Rgb;
/// use af_core::config::RenderConfig;
/// use af_core::frame::PixelCell;
/// use af_ascii::luminance::map_cell;
///
/// let config = RenderConfig { color_enabled: true, ..RenderConfig::default() };
/// let out = map_cell(&PixelCell::from_rgb(Rgb::new(255, 0, 0)), &config).unwrap();
/// assert_eq!(out, "\x1b[38;2;255;0;0m#\x1b[0m");
/// ```
pub fn map_cell(cell: &PixelCell, config: &RenderConfig) -> Result<String, CoreError> {
    Ok(GlyphMapper::new(config)?.map_cell(cell))
}
