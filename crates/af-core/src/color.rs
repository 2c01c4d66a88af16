use std::fmt::Write;

/// Séquence de reset ANSI (SGR 0).
pub const ANSI_RESET: &str = "\x1b[0m";

/// Pixel RGB 8 bits par canal.
///
/// # Example
/// ```
/// use af_core::color::Rgb;
/// let red = Rgb::new(255, 0, 0);
/// assert_eq!(red.r, 255);
/// assert_eq!(red.luminance(), 76);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Build a color from its three channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Luma ITU-R BT.601, arithmétique entière.
    ///
    /// `(299 R + 587 G + 114 B) / 1000`, exact aux extrêmes (noir → 0, blanc → 255).
    ///
    /// # Example
    /// ```
    /// use af_core::color::Rgb;
    /// assert_eq!(Rgb::BLACK.luminance(), 0);
    /// assert_eq!(Rgb::WHITE.luminance(), 255);
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn luminance(self) -> u8 {
        ((u32::from(self.r) * 299 + u32::from(self.g) * 587 + u32::from(self.b) * 114) / 1000)
            as u8
    }

    /// Append the true-color foreground escape for this color to `out`.
    ///
    /// # Example
    /// ```
    /// use af_core::color::Rgb;
    /// let mut s = String::new();
    /// Rgb::new(255, 0, 0).write_ansi_fg(&mut s);
    /// assert_eq!(s, "\x1b[38;2;255;0;0m");
    /// ```
    pub fn write_ansi_fg(self, out: &mut String) {
        // Writing into a String cannot fail.
        let _ = write!(out, "\x1b[38;2;{};{};{}m", self.r, self.g, self.b);
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}
