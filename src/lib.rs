//! signal-drawer: stacked spectrum and waveform plots on a pixel canvas.
//!
//! `core` holds the layout and coordinate math (scale mapping, ranges,
//! musical notes), `render` the canvas contract and surfaces, and `api` the
//! plot widgets and the stack that composes them.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{PlotWidget, SpectrumWidget, WaveWidget, WidgetStack};
pub use error::{DrawerError, DrawerResult};
