use tracing::{debug, trace};

use crate::api::{PlotWidget, WidgetSize};
use crate::error::DrawerResult;
use crate::render::Canvas;

/// Vertically stacked widgets sharing one canvas.
///
/// Widgets are drawn top to bottom in insertion order and left-aligned;
/// the stack is as wide as its widest widget.
#[derive(Debug, Default)]
pub struct WidgetStack {
    widgets: Vec<Box<dyn PlotWidget>>,
}

impl WidgetStack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_widget(mut self, widget: impl PlotWidget + 'static) -> Self {
        self.add_widget(widget);
        self
    }

    /// Appends a widget below the current ones. Duplicates are allowed.
    pub fn add_widget(&mut self, widget: impl PlotWidget + 'static) {
        self.widgets.push(Box::new(widget));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    pub fn widgets(&self) -> impl Iterator<Item = &dyn PlotWidget> + '_ {
        self.widgets.iter().map(|widget| &**widget)
    }

    /// Sum of the widgets' measured heights, saturating at `i32::MAX`.
    #[must_use]
    pub fn total_height(&self) -> i32 {
        self.widgets
            .iter()
            .map(|widget| widget.measure().height)
            .fold(0, i32::saturating_add)
    }

    /// Widest measured widget.
    #[must_use]
    pub fn total_width(&self) -> i32 {
        self.widgets
            .iter()
            .map(|widget| widget.measure().width)
            .max()
            .unwrap_or(0)
    }

    #[must_use]
    pub fn measure(&self) -> WidgetSize {
        WidgetSize::new(self.total_width(), self.total_height())
    }

    /// Draws every widget at its running vertical offset, starting at row 0.
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        let mut top = 0;
        for widget in &self.widgets {
            trace!(top, "draw stacked widget");
            widget.draw_at(canvas, top);
            top = top.saturating_add(widget.measure().height);
        }
        debug!(widgets = self.widgets.len(), height = top, "drew widget stack");
    }

    /// Creates a canvas sized to the whole stack and draws into it.
    pub fn render_with<C, F>(&self, make_canvas: F) -> DrawerResult<C>
    where
        C: Canvas,
        F: FnOnce(WidgetSize) -> DrawerResult<C>,
    {
        let mut canvas = make_canvas(self.measure())?;
        self.draw(&mut canvas);
        Ok(canvas)
    }
}
