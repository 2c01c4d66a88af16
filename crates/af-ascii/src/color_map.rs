use af_core::color::{ANSI_RESET, Rgb};

/// Append `ch` wrapped in a true-color foreground escape and a reset.
///
/// Each glyph carries its own color state; nothing bleeds into the next cell.
///
/// # Example
/// ```
/// use af_ascii::color_map::push_colored;
/// use af_core::color::Rgb;
/// let mut out = String::new();
/// push_colored(&mut out, '#', Rgb::new(255, 0, 0));
/// assert_eq!(out, "\x1b[38;2;255;0;0m#\x1b[0m");
/// ```
#[inline]
pub fn push_colored(out: &mut String, ch: char, color: Rgb) {
    color.write_ansi_fg(out);
    out.push(ch);
    out.push_str(ANSI_RESET);
}

/// Longueur en octets d'une cellule colorée, pour pré-allouer.
#[must_use]
pub fn colored_cell_len(ch: char, color: Rgb) -> usize {
    let digits = |c: u8| match c {
        0..=9 => 1,
        10..=99 => 2,
        _ => 3,
    };
    // "\x1b[38;2;" + r;g;b + "m" + ch + "\x1b[0m"
    7 + digits(color.r) + 1 + digits(color.g) + 1 + digits(color.b) + 1 + ch.len_utf8() + ANSI_RESET.len()
}
