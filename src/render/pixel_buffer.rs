use crate::error::{DrawerError, DrawerResult};
use crate::render::{Canvas, Color, TextPrimitive};

/// Fixed-size RGBA raster.
///
/// Writes outside `width x height` are dropped. Text is not rasterized;
/// labels are kept as primitives for a later glyph pass.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
    texts: Vec<TextPrimitive>,
    clipped_writes: usize,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32, fill: Color) -> DrawerResult<Self> {
        if width == 0 || height == 0 {
            return Err(DrawerError::InvalidData(format!(
                "pixel buffer size must be > 0, got {width}x{height}"
            )));
        }
        let len = usize::try_from(u64::from(width) * u64::from(height)).map_err(|_| {
            DrawerError::InvalidData(format!("pixel buffer {width}x{height} is too large"))
        })?;
        Ok(Self {
            width,
            height,
            pixels: vec![fill; len],
            texts: Vec::new(),
            clipped_writes: 0,
        })
    }

    /// Sizes a buffer from signed canvas dimensions such as a stack measure.
    pub fn with_size(width: i32, height: i32, fill: Color) -> DrawerResult<Self> {
        let width = u32::try_from(width)
            .map_err(|_| DrawerError::InvalidData(format!("negative width {width}")))?;
        let height = u32::try_from(height)
            .map_err(|_| DrawerError::InvalidData(format!("negative height {height}")))?;
        Self::new(width, height, fill)
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index_of(x, y).map(|index| self.pixels[index])
    }

    #[must_use]
    pub fn texts(&self) -> &[TextPrimitive] {
        &self.texts
    }

    /// Writes dropped because they fell outside the raster.
    #[must_use]
    pub fn clipped_writes(&self) -> usize {
        self.clipped_writes
    }

    /// Row-major RGBA bytes, ready for an image encoder.
    #[must_use]
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|color| [color.red, color.green, color.blue, color.alpha])
            .collect()
    }

    fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        let x = u32::try_from(x).ok().filter(|&x| x < self.width)?;
        let y = u32::try_from(y).ok().filter(|&y| y < self.height)?;
        Some(y as usize * self.width as usize + x as usize)
    }
}

impl Canvas for PixelBuffer {
    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        match self.index_of(x, y) {
            Some(index) => self.pixels[index] = color,
            None => self.clipped_writes += 1,
        }
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str, color: Color) {
        self.texts.push(TextPrimitive::new(text, x, y, color));
    }
}
