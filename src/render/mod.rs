mod pixel_buffer;
mod primitives;
mod recording;
mod strokes;

pub use pixel_buffer::PixelBuffer;
pub use primitives::{Color, TextPrimitive};
pub use recording::RecordingCanvas;
pub(crate) use strokes::{fill_rect, stroke_horizontal, stroke_vertical};

/// Pixel surface the widgets draw on.
///
/// Implementations decide what to do with coordinates outside their bounds
/// (clip, ignore or record); the widgets never pre-clip.
pub trait Canvas {
    fn set_pixel(&mut self, x: i32, y: i32, color: Color);

    fn draw_text(&mut self, x: i32, y: i32, text: &str, color: Color);
}

impl<C: Canvas + ?Sized> Canvas for &mut C {
    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        (**self).set_pixel(x, y, color);
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str, color: Color) {
        (**self).draw_text(x, y, text, color);
    }
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoCanvas, CairoCanvasStats};
