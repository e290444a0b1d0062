mod axis;
mod scene;
mod series;
mod series_render;
mod spectrum;
mod stack;
mod wave;
mod widget;

pub use axis::{END_LABEL_NUDGE_PX, START_LABEL_NUDGE_PX, TIME_AXIS_INTERVALS};
pub use scene::{SceneDescription, SpectrumDescription, WaveDescription, WidgetDescription};
pub use series::{DataSeries, Mark, SeriesStyle, SideLabel, WidgetStyle};
pub use spectrum::{DEFAULT_END_HZ, DEFAULT_START_HZ, SpectrumWidget};
pub use stack::WidgetStack;
pub use wave::WaveWidget;
pub use widget::{PlotWidget, WidgetSize};
