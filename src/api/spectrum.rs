use std::sync::Arc;

use tracing::{debug, trace};

use crate::api::axis::AxisPainter;
use crate::api::series_render::draw_series;
use crate::api::widget::WidgetChrome;
use crate::api::{DataSeries, Mark, PlotWidget, SideLabel, WidgetSize, WidgetStyle};
use crate::core::{
    DomainRange, EqualTemperament, MusicalNote, NoteProvider, PlotConfig, ScaleMapper, ScaleMode,
};
use crate::error::{DrawerError, DrawerResult};
use crate::render::{Canvas, stroke_vertical};

pub const DEFAULT_START_HZ: f64 = 20.0;
pub const DEFAULT_END_HZ: f64 = 20_000.0;

/// Frequency-spectrum plot with a musical-note axis.
///
/// The displayed range defaults to the audible band (20 Hz to 20 kHz).
/// Marks, logarithmic scaling and explicit range control can be combined
/// freely.
#[derive(Debug, Clone)]
pub struct SpectrumWidget {
    config: PlotConfig,
    title: String,
    frequencies: Vec<f64>,
    series: Vec<DataSeries>,
    marks: Vec<Mark>,
    side_labels: Vec<SideLabel>,
    style: WidgetStyle,
    notes: Arc<dyn NoteProvider>,
    range: DomainRange,
    scale_mode: ScaleMode,
}

impl SpectrumWidget {
    /// # Panics
    ///
    /// Panics when `frequencies` is empty.
    #[must_use]
    pub fn new(config: PlotConfig, frequencies: Vec<f64>, title: impl Into<String>) -> Self {
        assert!(
            !frequencies.is_empty(),
            "spectrum widget needs at least one frequency"
        );
        let title = title.into();
        debug!(
            title = %title,
            bins = frequencies.len(),
            "create spectrum widget"
        );
        Self {
            config,
            title,
            frequencies,
            series: Vec::new(),
            marks: Vec::new(),
            side_labels: Vec::new(),
            style: WidgetStyle::default(),
            notes: Arc::new(EqualTemperament::default()),
            range: DomainRange::seeded(DEFAULT_START_HZ, DEFAULT_END_HZ),
            scale_mode: ScaleMode::Linear,
        }
    }

    pub fn with_series(mut self, series: DataSeries) -> DrawerResult<Self> {
        self.add_series(series)?;
        Ok(self)
    }

    pub fn with_mark(mut self, mark: Mark) -> DrawerResult<Self> {
        self.add_mark(mark)?;
        Ok(self)
    }

    #[must_use]
    pub fn with_style(mut self, style: WidgetStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_scale_mode(mut self, scale_mode: ScaleMode) -> Self {
        self.scale_mode = scale_mode;
        self
    }

    #[must_use]
    pub fn with_note_provider(mut self, notes: impl NoteProvider + 'static) -> Self {
        self.notes = Arc::new(notes);
        self
    }

    #[must_use]
    pub fn with_side_label(mut self, label: SideLabel) -> Self {
        self.side_labels.push(label);
        self
    }

    /// Adds a data set; it must hold one value per frequency bin.
    pub fn add_series(&mut self, series: DataSeries) -> DrawerResult<()> {
        series.ensure_matches_axis(self.frequencies.len())?;
        self.series.push(series);
        Ok(())
    }

    pub fn add_mark(&mut self, mark: Mark) -> DrawerResult<()> {
        if !mark.frequency_hz.is_finite() {
            return Err(DrawerError::InvalidData(
                "mark frequency must be finite".to_owned(),
            ));
        }
        self.marks.push(mark);
        Ok(())
    }

    pub fn set_style(&mut self, style: WidgetStyle) {
        self.style = style;
    }

    pub fn set_scale_mode(&mut self, scale_mode: ScaleMode) {
        self.scale_mode = scale_mode;
    }

    pub fn set_note_provider(&mut self, notes: impl NoteProvider + 'static) {
        self.notes = Arc::new(notes);
    }

    /// Lowest displayed frequency. Ignored unless below the current end.
    pub fn set_start_frequency(&mut self, start_hz: f64) -> bool {
        self.range.set_start(start_hz)
    }

    /// Highest displayed frequency. Ignored unless above the current start.
    pub fn set_end_frequency(&mut self, end_hz: f64) -> bool {
        self.range.set_end(end_hz)
    }

    /// Starts the range at the lower edge of `note`'s band.
    pub fn set_start_note(&mut self, note: &MusicalNote) -> bool {
        self.set_start_frequency(note.lower_frequency())
    }

    /// Ends the range at the upper edge of `note`'s band.
    pub fn set_end_note(&mut self, note: &MusicalNote) -> bool {
        self.set_end_frequency(note.upper_frequency())
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    #[must_use]
    pub fn series(&self) -> &[DataSeries] {
        &self.series
    }

    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    #[must_use]
    pub fn range(&self) -> DomainRange {
        self.range
    }

    #[must_use]
    pub fn scale_mode(&self) -> ScaleMode {
        self.scale_mode
    }

    #[must_use]
    pub fn style(&self) -> WidgetStyle {
        self.style
    }

    /// Mapper for the current range and mode.
    #[must_use]
    pub fn mapper(&self) -> ScaleMapper {
        ScaleMapper::new(
            &self.config,
            self.range,
            self.scale_mode,
            self.frequencies.len(),
        )
    }

    fn draw_mark(&self, canvas: &mut dyn Canvas, mapper: &ScaleMapper, mark: &Mark, top: i32) {
        let x = mapper.to_pixel(mark.frequency_hz);
        if !ScaleMapper::is_visible(x) {
            return;
        }
        stroke_vertical(
            canvas,
            x,
            self.config.plot_top(top),
            self.config.plot_bottom(top),
            mark.color,
        );
    }
}

impl PlotWidget for SpectrumWidget {
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
        for mark in &self.marks {
            self.draw_mark(canvas, &mapper, mark, top);
        }
        let mut drawn = 0;
        for series in &self.series {
            drawn += draw_series(canvas, &self.config, &mapper, &self.frequencies, series, top);
        }

        let axis = AxisPainter::new(&self.config, &mapper, self.style.axis);
        axis.draw_frequency_axis(canvas, top, self.notes.as_ref());
        axis.draw_vertical_axis(canvas, top, &self.side_labels);
        chrome.draw_divider_if_stacked(canvas, top);

        trace!(
            title = %self.title,
            top,
            samples_drawn = drawn,
            marks = self.marks.len(),
            "drew spectrum widget"
        );
    }
}
