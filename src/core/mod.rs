pub mod config;
pub mod notes;
pub mod range;
pub mod scale;

pub use config::{MAX_WIDGET_EXTENT_PX, PlotConfig, PlotConfigBuilder};
pub use notes::{
    EqualTemperament, MusicalNote, NoteProvider, Octave, OctaveBand, PitchClass,
};
pub use range::DomainRange;
pub use scale::{LogScaleCalibration, OFF_CANVAS_COLUMN, ScaleCache, ScaleMapper, ScaleMode};
