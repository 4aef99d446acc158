/// Outlined clock text
///
/// Each glyph is drawn eight times in the border colour, offset to the
/// neighbouring pixels, then once in the text colour on top. This keeps
/// white text readable over bright photos.

use iced::alignment;
use iced::widget::canvas::{self, Program};
use iced::widget::text::Shaping;
use iced::{mouse, Color, Pixels, Point, Rectangle, Renderer, Theme, Vector};

use super::layout::{layout_phrases, TextLayout, LINE_HEIGHT};
use crate::photo::Surface;
use crate::Message;

/// The eight neighbouring offsets, in units of the border width
const NEIGHBOURS: [(f32, f32); 8] = [
    (-1.0, -1.0), (0.0, -1.0), (1.0, -1.0),
    (-1.0, 0.0),               (1.0, 0.0),
    (-1.0, 1.0),  (0.0, 1.0),  (1.0, 1.0),
];

/// Canvas program drawing the clock phrases centred in its bounds.
/// The layout is recomputed from the bounds on every draw, so the text
/// follows the window into and out of fullscreen.
#[derive(Debug, Clone)]
pub struct OutlinedText {
    pub phrases: Vec<String>,
    pub wrap: bool,
    pub color: Color,
    /// None draws plain text
    pub outline: Option<Color>,
}

impl OutlinedText {
    pub fn new(phrases: Vec<String>, wrap: bool, outline: bool) -> Self {
        Self {
            phrases,
            wrap,
            color: Color::WHITE,
            outline: outline.then_some(Color::BLACK),
        }
    }

    fn layout(&self, bounds: Rectangle) -> TextLayout {
        let surface = Surface::new(bounds.width as u32, bounds.height as u32);
        let phrases: Vec<&str> = self.phrases.iter().map(String::as_str).collect();
        layout_phrases(&phrases, surface, self.wrap)
    }
}

/// Border width: a twentieth of the font size, at least one pixel
fn border(font_size: f32) -> f32 {
    (font_size / 20.0).floor().max(1.0)
}

/// Centre point of each line, block centred vertically in `bounds`
fn line_centres(layout: &TextLayout, bounds: Rectangle) -> Vec<Point> {
    let line_height = layout.font_size * LINE_HEIGHT;
    let block = line_height * layout.lines.len() as f32;
    let top = (bounds.height - block) / 2.0;

    (0..layout.lines.len())
        .map(|i| Point::new(bounds.width / 2.0, top + line_height * (i as f32 + 0.5)))
        .collect()
}

fn glyphs(content: &str, position: Point, color: Color, font_size: f32) -> canvas::Text {
    canvas::Text {
        content: content.to_string(),
        position,
        color,
        size: Pixels(font_size),
        horizontal_alignment: alignment::Horizontal::Center,
        vertical_alignment: alignment::Vertical::Center,
        shaping: Shaping::Advanced,
        ..canvas::Text::default()
    }
}

impl Program<Message> for OutlinedText {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let layout = self.layout(bounds);
        let size = layout.font_size;
        let border = border(size);

        for (line, centre) in layout.lines.iter().zip(line_centres(&layout, bounds)) {
            if let Some(outline) = self.outline {
                for (dx, dy) in NEIGHBOURS {
                    let offset = Vector::new(dx * border, dy * border);
                    frame.fill_text(glyphs(line, centre + offset, outline, size));
                }
            }
            frame.fill_text(glyphs(line, centre, self.color, size));
        }

        vec![frame.into_geometry()]
    }
}
