use crate::error::CoreError;

/// Rampe par défaut, du plus sombre au plus clair.
pub const DEFAULT_RAMP: &str = "@%#*+=-:. ";

/// 6 caractères — compact, bon contraste.
pub const CHARSET_COMPACT: &str = "@#*:. ";

/// 70 caractères — Paul Bourke, résolution maximale (dense→clair).
pub const CHARSET_STANDARD: &str =
    "$@B%8&WM#*oahkbdpqwmZO0QLCJUYXzcvunxrjft/\\|()1{}[]?-_+~<>i!lI;:,\"^`'. ";

/// Blocs Unicode — pseudo-pixels.
pub const CHARSET_BLOCKS: &str = "█▓▒░ ";

/// Minimal — haut contraste.
pub const CHARSET_MINIMAL: &str = "█▓▒░:. ";

/// Named ramp presets, all ordered dark→light.
pub const PRESETS: &[(&str, &str)] = &[
    ("default", DEFAULT_RAMP),
    ("compact", CHARSET_COMPACT),
    ("standard", CHARSET_STANDARD),
    ("blocks", CHARSET_BLOCKS),
    ("minimal", CHARSET_MINIMAL),
];

/// Look up a preset ramp by name.
///
/// # Errors
/// Returns `CoreError::InvalidConfig` for an unknown name.
///
/// # Example
/// ```
/// use af_core::charset::preset;
/// assert_eq!(preset("blocks").unwrap(), "█▓▒░ ");
/// assert!(preset("nope").is_err());
/// ```
pub fn preset(name: &str) -> Result<&'static str, CoreError> {
    PRESETS
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, ramp)| *ramp)
        .ok_or_else(|| {
            let known: Vec<&str> = PRESETS.iter().map(|(n, _)| *n).collect();
            CoreError::InvalidConfig(format!(
                "unknown ramp preset '{name}' (known: {})",
                known.join(", ")
            ))
        })
}

/// Index de glyphe pour une luminance : `floor(v / 255 × (len − 1))`.
///
/// `invert` replaces `value` by `255 - value` first. The integer form
/// `v × (len − 1) / 255` is the exact floor, so 0 → 0 and 255 → `len − 1`.
///
/// # Example
/// ```
/// use af_core::charset::glyph_index;
/// assert_eq!(glyph_index(0, 10, false), 0);
/// assert_eq!(glyph_index(255, 10, false), 9);
/// assert_eq!(glyph_index(0, 10, true), 9);
/// assert_eq!(glyph_index(200, 1, false), 0);
/// ```
#[inline(always)]
#[must_use]
pub fn glyph_index(value: u8, ramp_len: usize, invert: bool) -> usize {
    if ramp_len == 0 {
        return 0;
    }
    let value = if invert { 255 - value } else { value };
    (usize::from(value) * (ramp_len - 1) / 255).min(ramp_len - 1)
}

/// Lookup table mapping luminance [0..255] → character.
///
/// Pre-computed once per conversion for O(1) per-cell cost. The invert flag
/// is baked into the table.
///
/// # Example
/// ```
/// use af_core::charset::LuminanceLut;
/// let lut = LuminanceLut::new("@%#*+=-:. ", false).unwrap();
/// assert_eq!(lut.map(0), '@');
/// assert_eq!(lut.map(255), ' ');
/// ```
#[derive(Clone, Debug)]
pub struct LuminanceLut {
    lut: [char; 256],
}

impl LuminanceLut {
    /// Build a LUT from a ramp ordered dark→light.
    ///
    /// # Errors
    /// Returns `CoreError::InvalidConfig` if the ramp is empty.
    ///
    /// # Example
    /// ```
    /// use af_core::charset::LuminanceLut;
    /// assert!(LuminanceLut::new("", false).is_err());
    /// let lut = LuminanceLut::new("#", true).unwrap();
    /// assert_eq!(lut.map(17), '#');
    /// ```
    pub fn new(ramp: &str, invert: bool) -> Result<Self, CoreError> {
        let chars: Vec<char> = ramp.chars().collect();
        if chars.is_empty() {
            return Err(CoreError::InvalidConfig("ramp must not be empty".into()));
        }
        let mut lut = [' '; 256];
        for (i, slot) in lut.iter_mut().enumerate() {
            *slot = chars[glyph_index(i as u8, chars.len(), invert)];
        }
        Ok(Self { lut })
    }

    /// Map a luminance value [0..255] to a character.
    ///
    /// # Example
    /// ```
    /// use af_core::charset::LuminanceLut;
    /// let lut = LuminanceLut::new(" .:#@", false).unwrap();
    /// assert_eq!(lut.map(128), ':');
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn map(&self, luminance: u8) -> char {
        self.lut[luminance as usize]
    }
}
