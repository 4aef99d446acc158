/// Text sizing for the clock face
///
/// Two strategies:
/// - single line per phrase, font shrunk so the longest phrase fits
/// - phrases wrapped into a near-square block of lines sized from
///   `sqrt(total_chars * aspect_ratio)`
///
/// Each phrase starts on its own line. All divisions that produce pixel
/// sizes are floored and include line spacing so a wrapped block never
/// overflows the surface. Hiragana glyphs are treated as square.

use crate::photo::Surface;

/// Width of one glyph relative to the font size (0.6), in tenths
const GLYPH_WIDTH_TENTHS: u64 = 6;

/// Line spacing relative to the font size
pub const LINE_HEIGHT: f32 = 1.25;

/// Lines to draw and the font size to draw them at
#[derive(Debug, Clone, PartialEq)]
pub struct TextLayout {
    pub lines: Vec<String>,
    pub font_size: f32,
}

/// `floor(min(width, height) / (max_chars * 0.6))`, computed in integers
pub fn single_line_font_size(surface: Surface, max_chars: usize) -> f32 {
    let shortest = u64::from(surface.width.min(surface.height));
    if max_chars == 0 {
        return shortest as f32;
    }
    (shortest * 10 / (max_chars as u64 * GLYPH_WIDTH_TENTHS)) as f32
}

/// Characters per line for a wrapped block: `ceil(sqrt(total * aspect))`,
/// clamped to `1..=total`
pub fn chars_per_line(total_chars: usize, surface: Surface) -> usize {
    if total_chars == 0 {
        return 1;
    }
    let aspect = surface.width as f32 / surface.height.max(1) as f32;
    let per_line = (total_chars as f32 * aspect).sqrt().ceil() as usize;
    per_line.clamp(1, total_chars)
}

/// Split `text` into chunks of at most `per_line` characters
pub fn wrap_text(text: &str, per_line: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(per_line.max(1))
        .map(|chunk| chunk.iter().collect())
        .collect()
}

/// Lay out the clock phrases on `surface`
pub fn layout_phrases(phrases: &[&str], surface: Surface, wrap: bool) -> TextLayout {
    if !wrap {
        let max_chars = phrases.iter().map(|p| p.chars().count()).max().unwrap_or(0);
        return TextLayout {
            lines: phrases.iter().map(|p| p.to_string()).collect(),
            font_size: single_line_font_size(surface, max_chars),
        };
    }

    let total: usize = phrases.iter().map(|p| p.chars().count()).sum();
    let per_line = chars_per_line(total, surface);

    let lines: Vec<String> = phrases
        .iter()
        .flat_map(|phrase| wrap_text(phrase, per_line))
        .collect();

    let by_width = surface.width as f32 / per_line as f32;
    let by_height = surface.height as f32 / (lines.len().max(1) as f32 * LINE_HEIGHT);

    TextLayout {
        lines,
        font_size: by_width.min(by_height).floor(),
    }
}
