use std::time::Duration;

use tracing::{debug, trace};

use crate::api::axis::AxisPainter;
use crate::api::series_render::draw_series;
use crate::api::widget::WidgetChrome;
use crate::api::{DataSeries, PlotWidget, SideLabel, WidgetSize, WidgetStyle};
use crate::core::{DomainRange, PlotConfig, ScaleMapper, ScaleMode};
use crate::error::DrawerResult;
use crate::render::Canvas;

/// Time-domain waveform plot.
///
/// Sample times are kept in nanoseconds; the displayed range starts as the
/// first and last sample time.
#[derive(Debug, Clone)]
pub struct WaveWidget {
    config: PlotConfig,
    title: String,
    times_ns: Vec<f64>,
    series: Vec<DataSeries>,
    side_labels: Vec<SideLabel>,
    style: WidgetStyle,
    range: DomainRange,
}

impl WaveWidget {
    /// # Panics
    ///
    /// Panics when `times` is empty.
    #[must_use]
    pub fn new(config: PlotConfig, times: &[Duration], title: impl Into<String>) -> Self {
        assert!(!times.is_empty(), "wave widget needs at least one sample time");
        let times_ns: Vec<f64> = times.iter().map(|t| t.as_nanos() as f64).collect();
        let range = DomainRange::seeded(times_ns[0], times_ns[times_ns.len() - 1]);
        let title = title.into();
        debug!(
            title = %title,
            samples = times_ns.len(),
            start_ns = range.start(),
            end_ns = range.end(),
            "create wave widget"
        );
        Self {
            config,
            title,
            times_ns,
            series: Vec::new(),
            side_labels: Vec::new(),
            style: WidgetStyle::default(),
            range,
        }
    }

    pub fn with_series(mut self, series: DataSeries) -> DrawerResult<Self> {
        self.add_series(series)?;
        Ok(self)
    }

    #[must_use]
    pub fn with_style(mut self, style: WidgetStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_side_label(mut self, label: SideLabel) -> Self {
        self.side_labels.push(label);
        self
    }

    /// Adds a channel; it must hold one value per sample time.
    pub fn add_series(&mut self, series: DataSeries) -> DrawerResult<()> {
        series.ensure_matches_axis(self.times_ns.len())?;
        self.series.push(series);
        Ok(())
    }

    pub fn set_style(&mut self, style: WidgetStyle) {
        self.style = style;
    }

    /// Earliest displayed time. Ignored unless before the current end.
    pub fn set_start_time(&mut self, start: Duration) -> bool {
        self.range.set_start(start.as_nanos() as f64)
    }

    /// Latest displayed time. Ignored unless after the current start.
    pub fn set_end_time(&mut self, end: Duration) -> bool {
        self.range.set_end(end.as_nanos() as f64)
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn series(&self) -> &[DataSeries] {
        &self.series
    }

    /// Displayed range in nanoseconds.
    #[must_use]
    pub fn range(&self) -> DomainRange {
        self.range
    }

    #[must_use]
    pub fn style(&self) -> WidgetStyle {
        self.style
    }

    #[must_use]
    pub fn mapper(&self) -> ScaleMapper {
        ScaleMapper::new(
            &self.config,
            self.range,
            ScaleMode::Linear,
            self.times_ns.len(),
        )
    }
}

impl PlotWidget for WaveWidget {
    fn measure(&self) -> WidgetSize {
        self.mapper().cache().into()
    }

    fn draw_at(&self, canvas: &mut dyn Canvas, top: i32) {
        let mapper = self.mapper();
        let chrome = WidgetChrome {
            config: &self.config,
            style: &self.style,
            size: mapper.cache().into(),
        };

        chrome.fill_background(canvas, top);
        chrome.draw_title(canvas, &self.title, top);
        let mut drawn = 0;
        for series in &self.series {
            drawn += draw_series(canvas, &self.config, &mapper, &self.times_ns, series, top);
        }

        let axis = AxisPainter::new(&self.config, &mapper, self.style.axis);
        axis.draw_time_axis(canvas, top);
        axis.draw_vertical_axis(canvas, top, &self.side_labels);
        chrome.draw_divider_if_stacked(canvas, top);

        trace!(
            title = %self.title,
            top,
            samples_drawn = drawn,
            "drew wave widget"
        );
    }
}
