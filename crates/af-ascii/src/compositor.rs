use af_core::config::RenderConfig;
use af_core::error::CoreError;
use af_core::frame::Grid;

use crate::color_map;
use crate::luminance::GlyphMapper;

/// Compositor : sérialise une `Grid` en texte, une ligne par rangée.
///
/// Cells in a row are concatenated without separator, rows are joined with a
/// single `\n`, and no trailing newline is appended.
///
/// # Example
/// ```
/// use af_ascii::compositor::Compositor;
/// use af_core::config::RenderConfig;
/// let c = Compositor::new(&RenderConfig::default()).unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct Compositor {
    mapper: GlyphMapper,
}

impl Compositor {
    /// Create a compositor for the given configuration.
    ///
    /// # Errors
    /// Returns `CoreError::InvalidConfig` if the ramp is empty.
    pub fn new(config: &RenderConfig) -> Result<Self, CoreError> {
        Ok(Self {
            mapper: GlyphMapper::new(config)?,
        })
    }

    /// Access the underlying glyph mapper.
    #[must_use]
    pub fn mapper(&self) -> &GlyphMapper {
        &self.mapper
    }

    /// Render the whole grid into the final text artifact.
    ///
    /// # Example
    /// ```
    /// use af_ascii::compositor::Compositor;
    /// use af_core::config::RenderConfig;
    /// use af_core::frame::{Grid, PixelCell};
    ///
    /// let grid = Grid::new(3, 2, vec![PixelCell::default(); 6]).unwrap();
    /// let c = Compositor::new(&RenderConfig::default()).unwrap();
    /// assert_eq!(c.render(&grid), "@@@\n@@@");
    /// ```
    #[must_use]
    pub fn render(&self, grid: &Grid) -> String {
        let mut out = String::with_capacity(self.estimate_len(grid));
        for (y, row) in grid.rows().enumerate() {
            if y > 0 {
                out.push('\n');
            }
            for cell in row {
                self.mapper.push_cell(&mut out, cell);
            }
        }
        log::debug!(
            "Composé {}×{} cellules → {} octets",
            grid.width(),
            grid.height(),
            out.len()
        );
        out
    }

    /// Render each row separately, top to bottom.
    #[must_use]
    pub fn render_lines(&self, grid: &Grid) -> Vec<String> {
        grid.rows()
            .map(|row| {
                let mut line = String::new();
                for cell in row {
                    self.mapper.push_cell(&mut line, cell);
                }
                line
            })
            .collect()
    }

    fn estimate_len(&self, grid: &Grid) -> usize {
        let newlines = grid.height() as usize - 1;
        if self.mapper.color_enabled() {
            grid.cells()
                .iter()
                .map(|c| color_map::colored_cell_len(self.mapper.glyph(c.luminance), c.color))
                .sum::<usize>()
                + newlines
        } else {
            grid.cells()
                .iter()
                .map(|c| self.mapper.glyph(c.luminance).len_utf8())
                .sum::<usize>()
                + newlines
        }
    }
}
