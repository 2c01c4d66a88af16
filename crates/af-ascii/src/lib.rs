pub mod color_map;
pub mod compositor;
/// Glyph Mapper for asciify.
///
/// Maps sampled cells to ramp glyphs and serializes grids to text.
pub mod luminance;
