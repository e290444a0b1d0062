//! Musical-note lookup used to label frequency axes.
//!
//! The axis renderer only sees the [`NoteProvider`] trait: an ordered,
//! low-to-high enumeration of octaves, each with its bounds and notes.
//! [`EqualTemperament`] is the bundled twelve-tone implementation.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{DrawerError, DrawerResult};

pub const DEFAULT_A4_HZ: f64 = 440.0;

const A4_MIDI_NUMBER: i32 = 69;
const SEMITONES_PER_OCTAVE: i32 = 12;

/// Octave index in scientific pitch notation (`C4` is middle C).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub struct Octave(i8);

impl Octave {
    pub const MIN: Self = Self(-1);
    pub const MAX: Self = Self(9);

    /// Octaves walked by the frequency axis, lowest first.
    pub const AXIS_LADDER: [Self; 10] = [
        Self(0),
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
        Self(8),
        Self(9),
    ];

    #[must_use]
    pub fn new(index: i8) -> Option<Self> {
        (Self::MIN.0..=Self::MAX.0)
            .contains(&index)
            .then_some(Self(index))
    }

    #[must_use]
    pub fn index(self) -> i8 {
        self.0
    }
}

impl TryFrom<i8> for Octave {
    type Error = DrawerError;

    fn try_from(index: i8) -> DrawerResult<Self> {
        Self::new(index).ok_or_else(|| {
            DrawerError::InvalidData(format!(
                "octave index must be within [{}, {}], got {index}",
                Self::MIN.0,
                Self::MAX.0
            ))
        })
    }
}

impl From<Octave> for i8 {
    fn from(octave: Octave) -> Self {
        octave.0
    }
}

impl fmt::Display for Octave {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Octave {}", self.0)
    }
}

/// The twelve pitch classes, starting at C.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PitchClass {
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

impl PitchClass {
    pub const ALL: [Self; 12] = [
        Self::C,
        Self::CSharp,
        Self::D,
        Self::DSharp,
        Self::E,
        Self::F,
        Self::FSharp,
        Self::G,
        Self::GSharp,
        Self::A,
        Self::ASharp,
        Self::B,
    ];

    #[must_use]
    pub fn semitone(self) -> i32 {
        self as i32
    }

    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::C => "C",
            Self::CSharp => "C#",
            Self::D => "D",
            Self::DSharp => "D#",
            Self::E => "E",
            Self::F => "F",
            Self::FSharp => "F#",
            Self::G => "G",
            Self::GSharp => "G#",
            Self::A => "A",
            Self::ASharp => "A#",
            Self::B => "B",
        }
    }

    /// Sharp/flat pitch classes (the black keys).
    #[must_use]
    pub fn is_altered(self) -> bool {
        matches!(
            self,
            Self::CSharp | Self::DSharp | Self::FSharp | Self::GSharp | Self::ASharp
        )
    }
}

/// One tuned note.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MusicalNote {
    pub pitch_class: PitchClass,
    pub octave: Octave,
    pub frequency_hz: f64,
    pub midi_number: i32,
}

impl MusicalNote {
    /// Display name such as `C4` or `F#2`.
    #[must_use]
    pub fn name(&self) -> String {
        format!("{}{}", self.pitch_class.symbol(), self.octave.index())
    }

    #[must_use]
    pub fn is_altered(&self) -> bool {
        self.pitch_class.is_altered()
    }

    /// Lower edge of the note's band, a quarter tone below the exact pitch.
    #[must_use]
    pub fn lower_frequency(&self) -> f64 {
        self.frequency_hz * quarter_tone_ratio().recip()
    }

    /// Upper edge of the note's band, a quarter tone above the exact pitch.
    #[must_use]
    pub fn upper_frequency(&self) -> f64 {
        self.frequency_hz * quarter_tone_ratio()
    }
}

/// An octave as seen by the frequency axis.
///
/// `lower_hz` is the octave's C and `upper_hz` the next octave's C.
#[derive(Debug, Clone, PartialEq)]
pub struct OctaveBand {
    pub octave: Octave,
    pub lower_hz: f64,
    pub upper_hz: f64,
    pub notes: SmallVec<[MusicalNote; 12]>,
}

impl OctaveBand {
    #[must_use]
    pub fn name(&self) -> String {
        self.octave.to_string()
    }
}

/// Source of tuned notes for axis labels.
pub trait NoteProvider: fmt::Debug + Send + Sync {
    fn note(&self, pitch_class: PitchClass, octave: Octave) -> MusicalNote;

    fn octave_band(&self, octave: Octave) -> OctaveBand;
}

/// Twelve-tone equal temperament anchored at a reference A4.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EqualTemperament {
    a4_hz: f64,
}

impl Default for EqualTemperament {
    fn default() -> Self {
        Self {
            a4_hz: DEFAULT_A4_HZ,
        }
    }
}

impl EqualTemperament {
    pub fn new(a4_hz: f64) -> DrawerResult<Self> {
        if !a4_hz.is_finite() || a4_hz <= 0.0 {
            return Err(DrawerError::InvalidConfig(format!(
                "reference pitch must be finite and > 0, got {a4_hz}"
            )));
        }
        Ok(Self { a4_hz })
    }

    #[must_use]
    pub fn a4_hz(&self) -> f64 {
        self.a4_hz
    }

    fn frequency_of_midi(&self, midi_number: i32) -> f64 {
        let semitones = f64::from(midi_number - A4_MIDI_NUMBER);
        self.a4_hz * (semitones / f64::from(SEMITONES_PER_OCTAVE)).exp2()
    }
}

impl NoteProvider for EqualTemperament {
    fn note(&self, pitch_class: PitchClass, octave: Octave) -> MusicalNote {
        let midi_number =
            SEMITONES_PER_OCTAVE * (i32::from(octave.index()) + 1) + pitch_class.semitone();
        MusicalNote {
            pitch_class,
            octave,
            frequency_hz: self.frequency_of_midi(midi_number),
            midi_number,
        }
    }

    fn octave_band(&self, octave: Octave) -> OctaveBand {
        let notes: SmallVec<[MusicalNote; 12]> = PitchClass::ALL
            .iter()
            .map(|&pitch_class| self.note(pitch_class, octave))
            .collect();
        let lower_hz = notes[0].frequency_hz;
        OctaveBand {
            octave,
            lower_hz,
            upper_hz: lower_hz * 2.0,
            notes,
        }
    }
}

fn quarter_tone_ratio() -> f64 {
    (1.0 / 24.0f64).exp2()
}
