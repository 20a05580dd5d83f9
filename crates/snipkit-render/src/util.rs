//! Utility functions for text measurement and color conversion.

use console::measure_text_width;

/// Converts an RGB triplet to the nearest ANSI 256-color palette index.
///
/// # Example
///
/// ```rust
/// use snipkit_render::rgb_to_ansi256;
///
/// // Pure red maps to ANSI 196
/// assert_eq!(rgb_to_ansi256((255, 0, 0)), 196);
///
/// // Pure green maps to ANSI 46
/// assert_eq!(rgb_to_ansi256((0, 255, 0)), 46);
/// ```
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}

/// xterm default values for the 16 ANSI colors.
const ANSI16: [(u8, u8, u8); 16] = [
    (0, 0, 0),
    (205, 0, 0),
    (0, 205, 0),
    (205, 205, 0),
    (0, 0, 238),
    (205, 0, 205),
    (0, 205, 205),
    (229, 229, 229),
    (127, 127, 127),
    (255, 0, 0),
    (0, 255, 0),
    (255, 255, 0),
    (92, 92, 255),
    (255, 0, 255),
    (0, 255, 255),
    (255, 255, 255),
];

/// Converts an RGB triplet to the closest of the 16 ANSI colors (0-15).
///
/// ```rust
/// use snipkit_render::rgb_to_ansi16;
///
/// assert_eq!(rgb_to_ansi16((250, 10, 10)), 9);
/// assert_eq!(rgb_to_ansi16((0, 0, 0)), 0);
/// ```
pub fn rgb_to_ansi16((r, g, b): (u8, u8, u8)) -> u8 {
    let distance = |(pr, pg, pb): (u8, u8, u8)| {
        let dr = r as i32 - pr as i32;
        let dg = g as i32 - pg as i32;
        let db = b as i32 - pb as i32;
        dr * dr + dg * dg + db * db
    };

    ANSI16
        .iter()
        .enumerate()
        .min_by_key(|(_, rgb)| distance(**rgb))
        .map(|(i, _)| i as u8)
        .unwrap_or(0)
}

/// Approximate RGB value of a 256-palette index, used when downsampling.
pub(crate) fn ansi256_to_rgb(index: u8) -> (u8, u8, u8) {
    match index {
        0..=15 => ANSI16[index as usize],
        16..=231 => {
            let i = index - 16;
            let level = |v: u8| if v == 0 { 0 } else { 55 + v * 40 };
            (level(i / 36), level((i / 6) % 6), level(i % 6))
        }
        _ => {
            let v = 8 + (index - 232) * 10;
            (v, v, v)
        }
    }
}

/// Number of lines in a rendered block. An empty string is one line tall.
pub fn text_height(s: &str) -> usize {
    s.split('\n').count()
}

/// Display width of the widest line, ignoring ANSI escape sequences.
pub fn text_width(s: &str) -> usize {
    s.split('\n').map(measure_text_width).max().unwrap_or(0)
}
