use serde::{Deserialize, Serialize};

use crate::error::{DrawerError, DrawerResult};
use crate::render::Color;

/// How a data series is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SeriesStyle {
    /// Filled bar from the plot bottom up to each value (amplitudes).
    Line,
    /// A single pixel per value (phases, wave samples).
    #[default]
    Points,
}

/// Dependent values sharing the widget's independent axis.
///
/// `values[i]` belongs to the widget's `i`-th frequency or time sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSeries {
    values: Vec<f64>,
    style: SeriesStyle,
    color: Color,
}

impl DataSeries {
    /// # Panics
    ///
    /// Panics when `values` is empty.
    #[must_use]
    pub fn new(values: Vec<f64>, style: SeriesStyle, color: Color) -> Self {
        assert!(
            !values.is_empty(),
            "data series must contain at least one value"
        );
        Self {
            values,
            style,
            color,
        }
    }

    #[must_use]
    pub fn line(values: Vec<f64>, color: Color) -> Self {
        Self::new(values, SeriesStyle::Line, color)
    }

    #[must_use]
    pub fn points(values: Vec<f64>, color: Color) -> Self {
        Self::new(values, SeriesStyle::Points, color)
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn style(&self) -> SeriesStyle {
        self.style
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    pub(crate) fn ensure_matches_axis(&self, axis_len: usize) -> DrawerResult<()> {
        if self.values.len() != axis_len {
            return Err(DrawerError::InvalidData(format!(
                "series has {} values but the axis has {axis_len} samples",
                self.values.len()
            )));
        }
        Ok(())
    }
}

/// Full-height highlight line at one frequency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mark {
    pub frequency_hz: f64,
    pub color: Color,
}

impl Mark {
    #[must_use]
    pub fn new(frequency_hz: f64, color: Color) -> Self {
        Self {
            frequency_hz,
            color,
        }
    }
}

/// Label beside the vertical axis, `offset_px` rows below the plot top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SideLabel {
    pub offset_px: i32,
    pub value: f64,
    pub text: String,
}

impl SideLabel {
    #[must_use]
    pub fn new(offset_px: i32, value: f64, text: impl Into<String>) -> Self {
        Self {
            offset_px,
            value,
            text: text.into(),
        }
    }
}

/// Colors shared by both widget variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetStyle {
    pub background: Color,
    pub axis: Color,
    pub divider: Color,
    pub title: Color,
}

impl Default for WidgetStyle {
    fn default() -> Self {
        Self {
            background: Color::BLACK,
            axis: Color::WHITE,
            divider: Color::GRAY,
            title: Color::WHITE,
        }
    }
}
