use indexmap::IndexMap;

use crate::render::{Canvas, Color, TextPrimitive};

/// Unbounded canvas that remembers every write.
///
/// Used for headless rendering and tests: later writes to the same pixel
/// replace earlier ones, texts are kept in issue order.
#[derive(Debug, Default, Clone)]
pub struct RecordingCanvas {
    pixels: IndexMap<(i32, i32), Color>,
    texts: Vec<TextPrimitive>,
    pixel_writes: usize,
}

impl RecordingCanvas {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.pixels.get(&(x, y)).copied()
    }

    /// Distinct pixels written so far.
    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    /// Total `set_pixel` calls, including overwrites.
    #[must_use]
    pub fn pixel_writes(&self) -> usize {
        self.pixel_writes
    }

    /// Pixels in first-write order.
    pub fn pixels(&self) -> impl Iterator<Item = ((i32, i32), Color)> + '_ {
        self.pixels.iter().map(|(&position, &color)| (position, color))
    }

    /// Rows of column `x` whose final color is `color`, ascending.
    #[must_use]
    pub fn rows_with_color(&self, x: i32, color: Color) -> Vec<i32> {
        let mut rows: Vec<i32> = self
            .pixels
            .iter()
            .filter(|&(&(px, _), &c)| px == x && c == color)
            .map(|(&(_, y), _)| y)
            .collect();
        rows.sort_unstable();
        rows
    }

    #[must_use]
    pub fn texts(&self) -> &[TextPrimitive] {
        &self.texts
    }

    #[must_use]
    pub fn find_text(&self, text: &str) -> Option<&TextPrimitive> {
        self.texts.iter().find(|label| label.text == text)
    }

    pub fn clear(&mut self) {
        self.pixels.clear();
        self.texts.clear();
        self.pixel_writes = 0;
    }
}

impl Canvas for RecordingCanvas {
    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        self.pixel_writes += 1;
        self.pixels.insert((x, y), color);
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str, color: Color) {
        self.texts.push(TextPrimitive::new(text, x, y, color));
    }
}
