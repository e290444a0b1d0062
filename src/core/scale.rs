use serde::{Deserialize, Serialize};

use crate::core::{DomainRange, PlotConfig};

/// Column returned for values outside the visible range.
///
/// It lies far left of any canvas so callers can skip a value with a cheap
/// `column > 0` test.
pub const OFF_CANVAS_COLUMN: i32 = -1000;

/// Calibration of the logarithmic frequency axis.
///
/// A linear column `c` becomes `log2(c) * scale - offset`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogScaleCalibration {
    pub scale: f64,
    pub offset: f64,
}

impl Default for LogScaleCalibration {
    fn default() -> Self {
        Self {
            scale: 600.0,
            offset: 2500.0,
        }
    }
}

impl LogScaleCalibration {
    #[must_use]
    pub fn apply(self, raw: f64) -> f64 {
        raw.log2() * self.scale - self.offset
    }
}

/// Horizontal mapping policy of a widget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum ScaleMode {
    /// Uniform pixels per domain unit.
    #[default]
    Linear,
    /// Linear mapping followed by a calibrated `log2` warp (spectra only).
    Log2(LogScaleCalibration),
}

impl ScaleMode {
    #[must_use]
    pub fn log2() -> Self {
        Self::Log2(LogScaleCalibration::default())
    }

    #[must_use]
    pub fn is_logarithmic(self) -> bool {
        matches!(self, Self::Log2(_))
    }
}

/// Values derived from the current range and layout.
///
/// Never stored across calls: widgets compute a fresh cache for every
/// measure and draw pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleCache {
    pub pixels_per_unit: f64,
    pub widget_width: i32,
    pub widget_height: i32,
}

impl ScaleCache {
    #[must_use]
    pub fn compute(
        config: &PlotConfig,
        range: DomainRange,
        mode: ScaleMode,
        sample_count: usize,
    ) -> Self {
        let pixels_per_unit = f64::from(config.plot_width()) / range.span();
        let widget_width = match mode {
            ScaleMode::Linear => config.widget_width(),
            ScaleMode::Log2(calibration) => {
                let plot = calibration.apply(sample_count.max(1) as f64).max(0.0);
                plot as i32 + 2 * config.label_space()
            }
        };

        Self {
            pixels_per_unit,
            widget_width,
            widget_height: config.widget_height(),
        }
    }
}

/// Maps domain values (Hz, ns) to canvas columns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleMapper {
    range: DomainRange,
    mode: ScaleMode,
    label_space: i32,
    cache: ScaleCache,
}

impl ScaleMapper {
    #[must_use]
    pub fn new(
        config: &PlotConfig,
        range: DomainRange,
        mode: ScaleMode,
        sample_count: usize,
    ) -> Self {
        Self {
            range,
            mode,
            label_space: config.label_space(),
            cache: ScaleCache::compute(config, range, mode, sample_count),
        }
    }

    #[must_use]
    pub fn cache(&self) -> ScaleCache {
        self.cache
    }

    #[must_use]
    pub fn range(&self) -> DomainRange {
        self.range
    }

    #[must_use]
    pub fn mode(&self) -> ScaleMode {
        self.mode
    }

    /// Column of `value`, or [`OFF_CANVAS_COLUMN`] outside `[start, end]`.
    #[must_use]
    pub fn to_pixel(&self, value: f64) -> i32 {
        if !self.range.contains(value) {
            return OFF_CANVAS_COLUMN;
        }

        let raw = (value - self.range.start()) * self.cache.pixels_per_unit
            + f64::from(self.label_space);
        match self.mode {
            ScaleMode::Linear => raw as i32,
            ScaleMode::Log2(calibration) => {
                let column = calibration.apply(raw);
                if column.is_finite() {
                    column as i32
                } else {
                    OFF_CANVAS_COLUMN
                }
            }
        }
    }

    #[must_use]
    pub fn is_visible(column: i32) -> bool {
        column > 0
    }
}
