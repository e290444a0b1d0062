use std::fmt;

use serde::{Deserialize, Serialize};

use crate::api::WidgetStyle;
use crate::core::{PlotConfig, ScaleCache};
use crate::render::{Canvas, fill_rect, stroke_horizontal};

/// Canvas-space size of a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WidgetSize {
    pub width: i32,
    pub height: i32,
}

impl WidgetSize {
    #[must_use]
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

impl From<ScaleCache> for WidgetSize {
    fn from(cache: ScaleCache) -> Self {
        Self::new(cache.widget_width, cache.widget_height)
    }
}

/// Capability shared by every plot that can live in a [`WidgetStack`].
///
/// Both calls recompute the scale from the widget's current range, so a
/// range change is always reflected by the next measure or draw.
///
/// [`WidgetStack`]: crate::api::WidgetStack
pub trait PlotWidget: fmt::Debug {
    fn measure(&self) -> WidgetSize;

    /// Draws the widget with its top edge on canvas row `top`.
    ///
    /// A positive `top` means another widget sits above, so a divider row
    /// is drawn on the top edge.
    fn draw_at(&self, canvas: &mut dyn Canvas, top: i32);
}

impl<W: PlotWidget + ?Sized> PlotWidget for Box<W> {
    fn measure(&self) -> WidgetSize {
        (**self).measure()
    }

    fn draw_at(&self, canvas: &mut dyn Canvas, top: i32) {
        (**self).draw_at(canvas, top);
    }
}

/// Background, title and divider, the parts both variants draw the same way.
#[derive(Debug, Clone, Copy)]
pub(crate) struct WidgetChrome<'a> {
    pub(crate) config: &'a PlotConfig,
    pub(crate) style: &'a WidgetStyle,
    pub(crate) size: WidgetSize,
}

impl WidgetChrome<'_> {
    pub(crate) fn fill_background(&self, canvas: &mut dyn Canvas, top: i32) {
        fill_rect(
            canvas,
            0,
            top,
            self.size.width,
            self.size.height,
            self.style.background,
        );
    }

    pub(crate) fn draw_title(&self, canvas: &mut dyn Canvas, title: &str, top: i32) {
        if title.is_empty() {
            return;
        }
        let row = top + 6 * self.config.tick_unit();
        canvas.draw_text(self.config.label_space(), row, title, self.style.title);
    }

    pub(crate) fn draw_divider_if_stacked(&self, canvas: &mut dyn Canvas, top: i32) {
        if top > 0 {
            stroke_horizontal(canvas, top, 0, self.size.width - 1, self.style.divider);
        }
    }
}
