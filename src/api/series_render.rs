use ordered_float::OrderedFloat;
use tracing::debug;

use crate::api::{DataSeries, SeriesStyle};
use crate::core::{PlotConfig, ScaleMapper};
use crate::render::{Canvas, stroke_vertical};

/// Vertical auto-fit of one series into the plot height.
///
/// Values are shifted by `-min` so the smallest lands on the plot bottom and
/// scaled so the largest reaches the plot top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct VerticalFit {
    offset: f64,
    factor: f64,
}

impl VerticalFit {
    pub(crate) fn from_values(values: &[f64], plot_height: i32) -> Self {
        let finite = values.iter().copied().filter(|value| value.is_finite());
        let min = finite.clone().map(OrderedFloat).min().map_or(0.0, |v| v.0);
        let max = finite.map(OrderedFloat).max().map_or(0.0, |v| v.0);

        let offset = -min;
        let span = max + offset;
        let factor = if span > 0.0 && span.is_finite() {
            f64::from(plot_height) / span
        } else {
            debug!(min, max, "flat series, drawing on the plot bottom");
            0.0
        };
        Self { offset, factor }
    }

    /// Canvas row of `value` for a plot whose bottom row is `bottom`.
    pub(crate) fn row(self, value: f64, bottom: i32) -> i32 {
        bottom - ((value + self.offset) * self.factor).round() as i32
    }
}

/// Draws `series` against the independent `axis` samples.
///
/// Samples whose column is not visible are skipped, as are non-finite values.
pub(crate) fn draw_series(
    canvas: &mut dyn Canvas,
    config: &PlotConfig,
    mapper: &ScaleMapper,
    axis: &[f64],
    series: &DataSeries,
    top: i32,
) -> usize {
    let fit = VerticalFit::from_values(series.values(), config.plot_height());
    let bottom = config.plot_bottom(top);
    let mut drawn = 0;

    for (&position, &value) in axis.iter().zip(series.values()) {
        let x = mapper.to_pixel(position);
        if !ScaleMapper::is_visible(x) || !value.is_finite() {
            continue;
        }
        let y = fit.row(value, bottom);
        match series.style() {
            SeriesStyle::Line => stroke_vertical(canvas, x, y, bottom, series.color()),
            SeriesStyle::Points => canvas.set_pixel(x, y, series.color()),
        }
        drawn += 1;
    }
    drawn
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_spans_plot_height() {
        let fit = VerticalFit::from_values(&[-1.0, 0.0, 3.0], 200);
        assert_eq!(fit.row(-1.0, 500), 500);
        assert_eq!(fit.row(3.0, 500), 300);
        assert_eq!(fit.row(1.0, 500), 400);
    }

    #[test]
    fn constant_series_sits_on_the_bottom() {
        let fit = VerticalFit::from_values(&[7.5, 7.5, 7.5], 200);
        assert_eq!(fit.row(7.5, 480), 480);

        let zeros = VerticalFit::from_values(&[0.0, 0.0], 200);
        assert_eq!(zeros.row(0.0, 480), 480);
    }

    #[test]
    fn non_finite_values_do_not_poison_the_fit() {
        let fit = VerticalFit::from_values(&[f64::NAN, 0.0, 10.0, f64::INFINITY], 100);
        assert_eq!(fit.row(10.0, 100), 0);
    }
}
