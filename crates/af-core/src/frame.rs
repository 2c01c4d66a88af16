use crate::color::Rgb;

/// Buffer de pixels RGB décodé, row-major, 3 bytes par pixel.
///
/// # Example
/// ```
/// use af_core::frame::FrameBuffer;
/// let fb = FrameBuffer::new(10, 10);
/// assert_eq!(fb.data.len(), 300);
/// ```
#[derive(Clone, Debug)]
pub struct FrameBuffer {
    /// Pixels RGB, row-major, 3 bytes par pixel.
    pub data: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl FrameBuffer {
    /// Crée un buffer noir aux dimensions données.
    ///
    /// # Example
    /// ```
    /// use af_core::frame::FrameBuffer;
    /// let fb = FrameBuffer::new(100, 50);
    /// assert_eq!(fb.width, 100);
    /// assert_eq!(fb.height, 50);
    /// assert_eq!(fb.data.len(), 100 * 50 * 3);
    /// ```
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: vec![0u8; width as usize * height as usize * 3],
            width,
            height,
        }
    }

    /// Buffer rempli d'une couleur unie.
    ///
    /// # Example
    /// ```
    /// use af_core::color::Rgb;
    /// use af_core::frame::FrameBuffer;
    /// let fb = FrameBuffer::filled(2, 2, Rgb::WHITE);
    /// assert_eq!(fb.pixel(1, 1), Rgb::WHITE);
    /// ```
    #[must_use]
    pub fn filled(width: u32, height: u32, color: Rgb) -> Self {
        let data = [color.r, color.g, color.b].repeat(width as usize * height as usize);
        Self {
            data,
            width,
            height,
        }
    }

    /// Accès au pixel (x, y).
    ///
    /// Out-of-range coordinates yield black.
    ///
    /// # Example
    /// ```
    /// use af_core::color::Rgb;
    /// use af_core::frame::FrameBuffer;
    /// let fb = FrameBuffer::new(10, 10);
    /// assert_eq!(fb.pixel(0, 0), Rgb::BLACK);
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Rgb {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let idx = (y as usize * self.width as usize + x as usize) * 3;
        match self.data.get(idx..idx + 3) {
            Some(&[r, g, b]) => Rgb::new(r, g, b),
            _ => Rgb::BLACK,
        }
    }

    /// Écrit le pixel (x, y). No-op hors limites.
    #[inline(always)]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgb) {
        let idx = (y as usize * self.width as usize + x as usize) * 3;
        if let Some(px) = self.data.get_mut(idx..idx + 3) {
            px.copy_from_slice(&[color.r, color.g, color.b]);
        }
    }
}

/// Une cellule de sortie : luminance dérivée + couleur post-ajustement.
///
/// # Example
/// ```
/// use af_core::color::Rgb;
/// use af_core::frame::PixelCell;
/// let cell = PixelCell::from_rgb(Rgb::WHITE);
/// assert_eq!(cell.luminance, 255);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PixelCell {
    /// Luminance [0, 255].
    pub luminance: u8,
    /// Couleur RGB échantillonnée.
    pub color: Rgb,
}

impl PixelCell {
    /// Build a cell, deriving luminance from `color`.
    #[inline(always)]
    #[must_use]
    pub fn from_rgb(color: Rgb) -> Self {
        Self {
            luminance: color.luminance(),
            color,
        }
    }
}

/// Grille de cellules, row-major, haut → bas.
///
/// # Example
/// ```
/// use af_core::frame::{Grid, PixelCell};
/// let grid = Grid::new(4, 2, vec![PixelCell::default(); 8]).unwrap();
/// assert_eq!(grid.rows().count(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<PixelCell>,
    width: u32,
    height: u32,
}

impl Grid {
    /// Wrap a row-major cell vector.
    ///
    /// Returns `None` unless both dimensions are ≥ 1 and `cells.len() == width × height`.
    #[must_use]
    pub fn new(width: u32, height: u32, cells: Vec<PixelCell>) -> Option<Self> {
        if width == 0 || height == 0 || cells.len() != width as usize * height as usize {
            return None;
        }
        Some(Self {
            cells,
            width,
            height,
        })
    }

    /// Width in cells.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in cells.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get a cell reference at position (x, y).
    ///
    /// # Example
    /// ```
    /// use af_core::frame::{Grid, PixelCell};
    /// let grid = Grid::new(2, 2, vec![PixelCell::default(); 4]).unwrap();
    /// assert_eq!(grid.get(1, 1).luminance, 0);
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> &PixelCell {
        &self.cells[y as usize * self.width as usize + x as usize]
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> std::slice::Chunks<'_, PixelCell> {
        self.cells.chunks(self.width as usize)
    }

    /// All cells, row-major.
    #[must_use]
    pub fn cells(&self) -> &[PixelCell] {
        &self.cells
    }
}
