use tracing::trace;

use crate::api::SideLabel;
use crate::core::{MusicalNote, NoteProvider, Octave, OctaveBand, PlotConfig, ScaleMapper};
use crate::render::{Canvas, Color, stroke_horizontal, stroke_vertical};

/// Horizontal shift of the start-frequency label away from its tick.
pub const START_LABEL_NUDGE_PX: i32 = 5;
/// Leftward shift of the end-frequency label so it stays inside the widget.
///
/// Sized for the fixed six-decimal labels (`20000.000000Hz`).
pub const END_LABEL_NUDGE_PX: i32 = 100;
/// Number of equal intervals on a time axis (six labelled ticks).
pub const TIME_AXIS_INTERVALS: u32 = 5;

const NOTE_LABEL_NUDGE_PX: i32 = 3;
const TEXT_ROW_PAD_PX: i32 = 3;
const SIDE_LABEL_LEFT_PX: i32 = 2;

/// Draws the calibrated axes of one widget.
///
/// Every position goes through the widget's freshly computed mapper; labels
/// are laid out in multiples of the config's tick unit below the plot.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AxisPainter<'a> {
    config: &'a PlotConfig,
    mapper: &'a ScaleMapper,
    color: Color,
}

impl<'a> AxisPainter<'a> {
    pub(crate) fn new(config: &'a PlotConfig, mapper: &'a ScaleMapper, color: Color) -> Self {
        Self {
            config,
            mapper,
            color,
        }
    }

    /// Octave brackets, note ticks and range markers below the plot.
    pub(crate) fn draw_frequency_axis(
        &self,
        canvas: &mut dyn Canvas,
        top: i32,
        notes: &dyn NoteProvider,
    ) {
        let line_top = self.config.plot_bottom(top);
        self.draw_baseline(canvas, line_top);

        for octave in Octave::AXIS_LADDER {
            self.draw_octave(canvas, &notes.octave_band(octave), line_top);
        }
        self.draw_range_markers(canvas, line_top);
    }

    /// Zero line through the middle of the plot and six time ticks below it.
    pub(crate) fn draw_time_axis(&self, canvas: &mut dyn Canvas, top: i32) {
        let zero_row = self.config.plot_top(top) + self.config.plot_height() / 2;
        self.draw_baseline(canvas, zero_row);

        let line_top = self.config.plot_bottom(top);
        let range = self.mapper.range();
        for step in 0..=TIME_AXIS_INTERVALS {
            // the last tick reuses the bound itself so rounding cannot push it off range
            let time_ns = if step == TIME_AXIS_INTERVALS {
                range.end()
            } else {
                range.start() + range.span() * f64::from(step) / f64::from(TIME_AXIS_INTERVALS)
            };
            self.draw_time_tick(canvas, time_ns, line_top);
        }
    }

    /// Amplitude axis along the left margin plus optional side labels.
    pub(crate) fn draw_vertical_axis(
        &self,
        canvas: &mut dyn Canvas,
        top: i32,
        side_labels: &[SideLabel],
    ) {
        let x = self.config.label_space();
        let tick = self.config.tick_unit();
        let plot_top = self.config.plot_top(top);
        stroke_vertical(
            canvas,
            x,
            plot_top,
            self.config.plot_bottom(top) + tick,
            self.color,
        );

        for label in side_labels {
            let y = plot_top + label.offset_px;
            stroke_horizontal(canvas, y, x - tick, x, self.color);
            canvas.draw_text(
                SIDE_LABEL_LEFT_PX,
                y,
                &format!("{} {}", label.value, label.text),
                self.color,
            );
        }
    }

    fn draw_baseline(&self, canvas: &mut dyn Canvas, y: i32) {
        let label_space = self.config.label_space();
        let right = self.mapper.cache().widget_width - label_space;
        stroke_horizontal(
            canvas,
            y,
            label_space - self.config.tick_unit(),
            right,
            self.color,
        );
    }

    fn draw_octave(&self, canvas: &mut dyn Canvas, band: &OctaveBand, line_top: i32) {
        let lower = self.mapper.to_pixel(band.lower_hz);
        if !ScaleMapper::is_visible(lower) {
            return;
        }
        let tick = self.config.tick_unit();
        let bracket_bottom = line_top + 4 * tick;
        stroke_vertical(canvas, lower, line_top, bracket_bottom, self.color);

        let upper = self.mapper.to_pixel(band.upper_hz);
        if ScaleMapper::is_visible(upper) {
            stroke_vertical(canvas, upper, line_top, bracket_bottom, self.color);
        }

        if band.notes.is_empty() {
            canvas.draw_text(
                lower + NOTE_LABEL_NUDGE_PX,
                line_top + 2 * tick + TEXT_ROW_PAD_PX,
                &band.name(),
                self.color,
            );
            return;
        }

        trace!(octave = band.octave.index(), "drawing octave notes");
        for note in &band.notes {
            self.draw_note(canvas, note, line_top);
        }
    }

    fn draw_note(&self, canvas: &mut dyn Canvas, note: &MusicalNote, line_top: i32) {
        let x = self.mapper.to_pixel(note.frequency_hz);
        if !ScaleMapper::is_visible(x) {
            return;
        }
        let tick = self.config.tick_unit();
        let tick_bottom = line_top + tick;
        stroke_vertical(canvas, x, line_top, tick_bottom, self.color);

        if note.is_altered() {
            return;
        }
        let label_x = x + NOTE_LABEL_NUDGE_PX;
        let name_row = tick_bottom + tick + TEXT_ROW_PAD_PX;
        canvas.draw_text(label_x, name_row, &note.name(), self.color);
        let midi_row = name_row + 2 * tick + TEXT_ROW_PAD_PX;
        canvas.draw_text(
            label_x,
            midi_row,
            &note.midi_number.to_string(),
            self.color,
        );
    }

    fn draw_range_markers(&self, canvas: &mut dyn Canvas, line_top: i32) {
        let tick = self.config.tick_unit();
        let range = self.mapper.range();
        let label_row = line_top + 7 * tick;

        for (hz, nudge) in [
            (range.start(), START_LABEL_NUDGE_PX),
            (range.end(), -END_LABEL_NUDGE_PX),
        ] {
            let x = self.mapper.to_pixel(hz);
            if !ScaleMapper::is_visible(x) {
                continue;
            }
            stroke_vertical(canvas, x, line_top, line_top + 5 * tick, self.color);
            canvas.draw_text(x + nudge, label_row, &format!("{hz:.6}Hz"), self.color);
        }
    }

    fn draw_time_tick(&self, canvas: &mut dyn Canvas, time_ns: f64, line_top: i32) {
        let x = self.mapper.to_pixel(time_ns);
        if !ScaleMapper::is_visible(x) {
            return;
        }
        let tick = self.config.tick_unit();
        let tick_bottom = line_top + 3 * tick;
        stroke_vertical(canvas, x, line_top, tick_bottom, self.color);

        let millis = (time_ns / 1_000_000.0).trunc() as i64;
        canvas.draw_text(
            x,
            tick_bottom + 2 * tick,
            &format!("{millis}ms"),
            self.color,
        );
    }
}
