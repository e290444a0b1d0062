use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::api::{
    DataSeries, Mark, SideLabel, SpectrumWidget, WaveWidget, WidgetStack, WidgetStyle,
};
use crate::core::{DomainRange, EqualTemperament, PlotConfig, ScaleMode};
use crate::error::{DrawerError, DrawerResult};

/// Serializable description of a whole widget stack.
///
/// Unlike the widget constructors, building from a description reports
/// empty axes and series as errors instead of panicking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    #[serde(default)]
    pub config: PlotConfig,
    pub widgets: Vec<WidgetDescription>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WidgetDescription {
    Spectrum(SpectrumDescription),
    Wave(WaveDescription),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpectrumDescription {
    #[serde(default)]
    pub title: String,
    pub frequencies: Vec<f64>,
    #[serde(default)]
    pub series: Vec<DataSeries>,
    #[serde(default)]
    pub marks: Vec<Mark>,
    #[serde(default)]
    pub start_hz: Option<f64>,
    #[serde(default)]
    pub end_hz: Option<f64>,
    #[serde(default)]
    pub scale_mode: ScaleMode,
    #[serde(default)]
    pub a4_hz: Option<f64>,
    #[serde(default)]
    pub style: Option<WidgetStyle>,
    #[serde(default)]
    pub side_labels: Vec<SideLabel>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaveDescription {
    #[serde(default)]
    pub title: String,
    pub times_ns: Vec<u64>,
    #[serde(default)]
    pub series: Vec<DataSeries>,
    #[serde(default)]
    pub start_ns: Option<u64>,
    #[serde(default)]
    pub end_ns: Option<u64>,
    #[serde(default)]
    pub style: Option<WidgetStyle>,
    #[serde(default)]
    pub side_labels: Vec<SideLabel>,
}

impl SceneDescription {
    pub fn from_json(raw: &str) -> DrawerResult<Self> {
        serde_json::from_str(raw).map_err(|err| {
            DrawerError::InvalidData(format!("failed to parse scene json: {err}"))
        })
    }

    pub fn to_json_pretty(&self) -> DrawerResult<String> {
        serde_json::to_string_pretty(self).map_err(|err| {
            DrawerError::InvalidData(format!("failed to encode scene json: {err}"))
        })
    }

    pub fn build(&self) -> DrawerResult<WidgetStack> {
        let mut stack = WidgetStack::new();
        for (index, widget) in self.widgets.iter().enumerate() {
            match widget {
                WidgetDescription::Spectrum(spectrum) => {
                    stack.add_widget(spectrum.build(self.config).map_err(|err| {
                        DrawerError::InvalidData(format!("widget {index}: {err}"))
                    })?);
                }
                WidgetDescription::Wave(wave) => {
                    stack.add_widget(wave.build(self.config).map_err(|err| {
                        DrawerError::InvalidData(format!("widget {index}: {err}"))
                    })?);
                }
            }
        }
        Ok(stack)
    }
}

impl SpectrumDescription {
    pub fn build(&self, config: PlotConfig) -> DrawerResult<SpectrumWidget> {
        if self.frequencies.is_empty() {
            return Err(DrawerError::InvalidData(
                "spectrum needs at least one frequency".to_owned(),
            ));
        }

        let mut widget = SpectrumWidget::new(config, self.frequencies.clone(), &self.title)
            .with_scale_mode(self.scale_mode);
        if let Some(a4_hz) = self.a4_hz {
            widget.set_note_provider(EqualTemperament::new(a4_hz)?);
        }
        if let Some(style) = self.style {
            widget.set_style(style);
        }
        for series in &self.series {
            widget.add_series(series.clone())?;
        }
        for mark in &self.marks {
            widget.add_mark(*mark)?;
        }
        for label in &self.side_labels {
            widget = widget.with_side_label(label.clone());
        }

        // end first, so a start beyond the default end is not rejected
        if let Some(end_hz) = self.end_hz {
            widget.set_end_frequency(end_hz);
        }
        if let Some(start_hz) = self.start_hz {
            widget.set_start_frequency(start_hz);
        }
        if let Some(end_hz) = self.end_hz {
            widget.set_end_frequency(end_hz);
        }
        warn_on_rejected_bounds(&self.title, self.start_hz, self.end_hz, widget.range());
        Ok(widget)
    }
}

impl WaveDescription {
    pub fn build(&self, config: PlotConfig) -> DrawerResult<WaveWidget> {
        if self.times_ns.is_empty() {
            return Err(DrawerError::InvalidData(
                "wave needs at least one sample time".to_owned(),
            ));
        }

        let times: Vec<Duration> = self
            .times_ns
            .iter()
            .copied()
            .map(Duration::from_nanos)
            .collect();
        let mut widget = WaveWidget::new(config, &times, &self.title);
        if let Some(style) = self.style {
            widget.set_style(style);
        }
        for series in &self.series {
            widget.add_series(series.clone())?;
        }
        for label in &self.side_labels {
            widget = widget.with_side_label(label.clone());
        }

        if let Some(end_ns) = self.end_ns {
            widget.set_end_time(Duration::from_nanos(end_ns));
        }
        if let Some(start_ns) = self.start_ns {
            widget.set_start_time(Duration::from_nanos(start_ns));
        }
        if let Some(end_ns) = self.end_ns {
            widget.set_end_time(Duration::from_nanos(end_ns));
        }
        warn_on_rejected_bounds(
            &self.title,
            self.start_ns.map(|ns| ns as f64),
            self.end_ns.map(|ns| ns as f64),
            widget.range(),
        );
        Ok(widget)
    }
}

fn warn_on_rejected_bounds(
    title: &str,
    start: Option<f64>,
    end: Option<f64>,
    range: DomainRange,
) {
    let start_kept = start.is_none_or(|start| start == range.start());
    let end_kept = end.is_none_or(|end| end == range.end());
    if !start_kept || !end_kept {
        warn!(
            title,
            requested_start = ?start,
            requested_end = ?end,
            start = range.start(),
            end = range.end(),
            "scene range rejected, keeping last valid bounds"
        );
    }
}
