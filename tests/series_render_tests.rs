use std::time::Duration;

use signal_drawer::DrawerError;
use signal_drawer::api::{DataSeries, Mark, PlotWidget, SpectrumWidget, WaveWidget};
use signal_drawer::core::{PlotConfig, ScaleMode};
use signal_drawer::render::{Color, RecordingCanvas};

fn config() -> PlotConfig {
    PlotConfig::builder()
        .with_plot_width(2000)
        .with_plot_height(300)
        .with_label_space(80)
        .build()
        .expect("valid config")
}

fn tenth_second_times() -> Vec<Duration> {
    (0..=10).map(|i| Duration::from_millis(i * 100)).collect()
}

#[test]
fn constant_series_is_drawn_on_the_bottom_row() {
    let config = config();
    let widget = WaveWidget::new(config, &tenth_second_times(), "")
        .with_series(DataSeries::points(vec![0.5; 11], Color::YELLOW))
        .expect("series");

    let mut canvas = RecordingCanvas::new();
    widget.draw_at(&mut canvas, 0);

    let series_pixels: Vec<(i32, i32)> = canvas
        .pixels()
        .filter(|&(_, color)| color == Color::YELLOW)
        .map(|(position, _)| position)
        .collect();

    // the six time ticks overwrite the samples they share a column with
    assert_eq!(series_pixels.len(), 5);
    assert!(
        series_pixels
            .iter()
            .all(|&(_, y)| y == config.plot_bottom(0))
    );
}

#[test]
fn line_series_fills_from_the_plot_bottom() {
    let config = config();
    let widget = SpectrumWidget::new(config, vec![500.0, 1000.0, 1500.0], "")
        .with_series(DataSeries::line(vec![0.0, 2.0, 1.0], Color::GREEN))
        .expect("series");
    let mapper = widget.mapper();

    let mut canvas = RecordingCanvas::new();
    widget.draw_at(&mut canvas, 0);

    let peak_column = mapper.to_pixel(1000.0);
    let half_column = mapper.to_pixel(1500.0);
    // the bottom row itself belongs to the horizontal axis
    assert_eq!(
        canvas.rows_with_color(peak_column, Color::GREEN),
        (80..380).collect::<Vec<_>>()
    );
    assert_eq!(
        canvas.rows_with_color(half_column, Color::GREEN),
        (230..380).collect::<Vec<_>>()
    );
}

#[test]
fn point_series_sets_one_pixel_per_sample() {
    let config = config();
    let widget = SpectrumWidget::new(config, vec![500.0, 1000.0, 1500.0], "")
        .with_series(DataSeries::points(vec![0.0, 2.0, 1.0], Color::GREEN))
        .expect("series");
    let mapper = widget.mapper();

    let mut canvas = RecordingCanvas::new();
    widget.draw_at(&mut canvas, 0);

    assert_eq!(
        canvas.rows_with_color(mapper.to_pixel(1000.0), Color::GREEN),
        vec![80]
    );
    assert_eq!(
        canvas.rows_with_color(mapper.to_pixel(1500.0), Color::GREEN),
        vec![230]
    );
}

#[test]
fn samples_outside_the_range_are_skipped() {
    let mut widget = SpectrumWidget::new(config(), vec![5.0, 10.0, 30_000.0], "")
        .with_series(DataSeries::points(vec![1.0, 2.0, 3.0], Color::GREEN))
        .expect("series");
    assert!(widget.set_start_frequency(100.0));

    let mut canvas = RecordingCanvas::new();
    widget.draw_at(&mut canvas, 0);

    assert!(canvas.pixels().all(|(_, color)| color != Color::GREEN));
}

#[test]
fn series_is_offset_with_the_widget() {
    let config = config();
    let widget = SpectrumWidget::new(config, vec![1000.0, 2000.0], "")
        .with_series(DataSeries::points(vec![0.0, 1.0], Color::GREEN))
        .expect("series");
    let column = widget.mapper().to_pixel(2000.0);

    let mut canvas = RecordingCanvas::new();
    widget.draw_at(&mut canvas, 460);

    assert_eq!(canvas.rows_with_color(column, Color::GREEN), vec![460 + 80]);
}

#[test]
fn marks_draw_full_height_lines() {
    let config = config();
    let widget = SpectrumWidget::new(config, vec![100.0, 200.0], "")
        .with_mark(Mark::new(1234.0, Color::RED))
        .expect("mark")
        .with_mark(Mark::new(25_000.0, Color::BLUE))
        .expect("mark");
    let column = widget.mapper().to_pixel(1234.0);

    let mut canvas = RecordingCanvas::new();
    widget.draw_at(&mut canvas, 0);

    assert_eq!(
        canvas.rows_with_color(column, Color::RED),
        (80..380).collect::<Vec<_>>()
    );
    assert!(canvas.pixels().all(|(_, color)| color != Color::BLUE));
}

#[test]
fn log_spectrum_draws_series_and_marks_through_the_warp() {
    let frequencies: Vec<f64> = (0..4096).map(|i| f64::from(i) * 5.0).collect();
    // only the 1000 Hz bin (index 200) is non-zero
    let values: Vec<f64> = (0..4096).map(|i| if i == 200 { 1.0 } else { 0.0 }).collect();
    let widget = SpectrumWidget::new(config(), frequencies, "")
        .with_scale_mode(ScaleMode::log2())
        .with_series(DataSeries::points(values, Color::GREEN))
        .expect("series")
        .with_mark(Mark::new(440.0, Color::RED))
        .expect("mark");
    let mapper = widget.mapper();
    assert!(mapper.mode().is_logarithmic());

    let mut canvas = RecordingCanvas::new();
    widget.draw_at(&mut canvas, 0);

    let peak_column = mapper.to_pixel(1000.0);
    let mark_column = mapper.to_pixel(440.0);
    assert!(peak_column > mark_column);
    assert_eq!(canvas.rows_with_color(peak_column, Color::GREEN), vec![80]);
    assert_eq!(
        canvas.rows_with_color(mark_column, Color::RED),
        (80..380).collect::<Vec<_>>()
    );
}

#[test]
fn non_finite_mark_is_rejected() {
    let mut widget = SpectrumWidget::new(config(), vec![100.0], "");
    let err = widget
        .add_mark(Mark::new(f64::NAN, Color::RED))
        .expect_err("nan mark");
    assert!(matches!(err, DrawerError::InvalidData(_)));
}

#[test]
fn series_length_must_match_the_axis() {
    let mut widget = SpectrumWidget::new(config(), vec![100.0, 200.0, 300.0], "");
    let err = widget
        .add_series(DataSeries::line(vec![1.0, 2.0], Color::GREEN))
        .expect_err("length mismatch");
    assert!(matches!(err, DrawerError::InvalidData(_)));
    assert!(widget.series().is_empty());
}

#[test]
#[should_panic(expected = "data series must contain at least one value")]
fn empty_series_is_a_programming_error() {
    let _ = DataSeries::points(Vec::new(), Color::GREEN);
}

#[test]
#[should_panic(expected = "spectrum widget needs at least one frequency")]
fn empty_frequency_axis_is_a_programming_error() {
    let _ = SpectrumWidget::new(config(), Vec::new(), "empty");
}

#[test]
#[should_panic(expected = "wave widget needs at least one sample time")]
fn empty_time_axis_is_a_programming_error() {
    let _ = WaveWidget::new(config(), &[], "empty");
}
