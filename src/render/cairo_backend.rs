use std::fs::File;
use std::path::Path;

use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use tracing::{debug, warn};

use crate::error::{DrawerError, DrawerResult};
use crate::render::{Canvas, Color};

const DEFAULT_FONT_SIZE_PX: f64 = 11.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoCanvasStats {
    pub pixels_drawn: usize,
    pub texts_drawn: usize,
    pub failed_operations: usize,
}

/// Cairo image surface exposed as a [`Canvas`], with Pango text.
///
/// `Canvas` calls cannot fail, so backend errors are counted in the stats
/// and logged; `write_png` refuses to export a surface with failed writes.
#[derive(Debug)]
pub struct CairoCanvas {
    surface: ImageSurface,
    context: Context,
    font: FontDescription,
    stats: CairoCanvasStats,
}

impl CairoCanvas {
    pub fn new(width: i32, height: i32) -> DrawerResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(DrawerError::InvalidData(format!(
                "cairo surface size must be > 0, got {width}x{height}"
            )));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        let context = Context::new(&surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        context.set_antialias(cairo::Antialias::None);

        Ok(Self {
            surface,
            context,
            font: FontDescription::from_string(&format!("Sans {DEFAULT_FONT_SIZE_PX}")),
            stats: CairoCanvasStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn stats(&self) -> CairoCanvasStats {
        self.stats
    }

    pub fn set_font_size(&mut self, font_size_px: f64) -> DrawerResult<()> {
        if !font_size_px.is_finite() || font_size_px <= 0.0 {
            return Err(DrawerError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.font = FontDescription::from_string(&format!("Sans {font_size_px}"));
        Ok(())
    }

    /// Flushes pending drawing and encodes the surface as PNG.
    pub fn write_png(&self, path: impl AsRef<Path>) -> DrawerResult<()> {
        let path = path.as_ref();
        if self.stats.failed_operations > 0 {
            return Err(DrawerError::Backend(format!(
                "refusing to export `{}`: {} drawing operations failed",
                path.display(),
                self.stats.failed_operations
            )));
        }

        self.surface.flush();
        let mut file = File::create(path).map_err(|err| {
            DrawerError::Backend(format!("failed to create `{}`: {err}", path.display()))
        })?;
        self.surface.write_to_png(&mut file).map_err(|err| {
            DrawerError::Backend(format!("failed to encode `{}`: {err}", path.display()))
        })?;
        debug!(path = %path.display(), "wrote png");
        Ok(())
    }

    fn record_failure(&mut self, operation: &str, err: cairo::Error) {
        self.stats.failed_operations += 1;
        warn!(operation, error = %err, "cairo operation failed");
    }
}

impl Canvas for CairoCanvas {
    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        apply_color(&self.context, color);
        self.context.rectangle(f64::from(x), f64::from(y), 1.0, 1.0);
        match self.context.fill() {
            Ok(()) => self.stats.pixels_drawn += 1,
            Err(err) => self.record_failure("fill pixel", err),
        }
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str, color: Color) {
        let layout = pangocairo::functions::create_layout(&self.context);
        layout.set_font_description(Some(&self.font));
        layout.set_text(text);

        apply_color(&self.context, color);
        self.context.move_to(f64::from(x), f64::from(y));
        pangocairo::functions::show_layout(&self.context, &layout);
        self.stats.texts_drawn += 1;
    }
}

fn apply_color(context: &Context, color: Color) {
    let [red, green, blue, alpha] = color.to_unit_rgba();
    context.set_source_rgba(red, green, blue, alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> DrawerError {
    DrawerError::Backend(format!("{prefix}: {err}"))
}
