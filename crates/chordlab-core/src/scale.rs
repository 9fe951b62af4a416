//! Scales as ordered semitone offsets from a root pitch class

use serde::{Deserialize, Serialize};

use crate::error::{ChordlabError, Result};

/// The scale catalog used by the pitch-class set experiments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScaleKind {
    Major,
    Minor,
    PentatonicMajor,
    PentatonicMinor,
    HarmonicMinor,
    MelodicMinor,
    Dorian,
    Phrygian,
    Lydian,
    Mixolydian,
    Locrian,
    Altered,
}

impl ScaleKind {
    /// Get scale intervals (semitones from root)
    pub fn intervals(&self) -> &'static [u8] {
        match self {
            Self::Major => &[0, 2, 4, 5, 7, 9, 11],
            Self::Minor => &[0, 2, 3, 5, 7, 8, 10],
            Self::PentatonicMajor => &[0, 2, 4, 7, 9],
            Self::PentatonicMinor => &[0, 3, 5, 7, 10],
            Self::HarmonicMinor => &[0, 2, 3, 5, 7, 8, 11],
            Self::MelodicMinor => &[0, 2, 3, 5, 7, 9, 11],
            Self::Dorian => &[0, 2, 3, 5, 7, 9, 10],
            Self::Phrygian => &[0, 1, 3, 5, 7, 8, 10],
            Self::Lydian => &[0, 2, 4, 6, 7, 9, 11],
            Self::Mixolydian => &[0, 2, 4, 5, 7, 9, 10],
            Self::Locrian => &[0, 1, 3, 5, 6, 8, 10],
            Self::Altered => &[0, 1, 3, 4, 6, 8, 10, 11],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Major => "Major",
            Self::Minor => "Minor",
            Self::PentatonicMajor => "Major Pentatonic",
            Self::PentatonicMinor => "Minor Pentatonic",
            Self::HarmonicMinor => "Harmonic Minor",
            Self::MelodicMinor => "Melodic Minor",
            Self::Dorian => "Dorian",
            Self::Phrygian => "Phrygian",
            Self::Lydian => "Lydian",
            Self::Mixolydian => "Mixolydian",
            Self::Locrian => "Locrian",
            Self::Altered => "Altered",
        }
    }

    /// Every catalog scale, in catalog order
    pub fn all() -> &'static [ScaleKind] {
        &[
            Self::Major,
            Self::Minor,
            Self::PentatonicMajor,
            Self::PentatonicMinor,
            Self::HarmonicMinor,
            Self::MelodicMinor,
            Self::Dorian,
            Self::Phrygian,
            Self::Lydian,
            Self::Mixolydian,
            Self::Locrian,
            Self::Altered,
        ]
    }
}

/// A concrete scale: named, rooted at a pitch class, with ordered degree offsets
///
/// `intervals` holds one octave of semitone offsets from `root`, each in
/// `[0, 11]`. Order defines scale-degree adjacency and is significant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scale {
    pub name: String,
    pub root: i32,
    pub intervals: Vec<u8>,
}

impl Scale {
    pub fn new(name: impl Into<String>, root: i32, intervals: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            root,
            intervals,
        }
    }

    /// Build a scale from the catalog at the given root pitch class
    pub fn from_kind(kind: ScaleKind, root: i32) -> Self {
        Self {
            name: kind.name().to_string(),
            root,
            intervals: kind.intervals().to_vec(),
        }
    }

    /// Number of scale degrees
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// A scale with no degrees cannot be walked
    pub fn validate(&self) -> Result<()> {
        if self.intervals.is_empty() {
            return Err(ChordlabError::EmptyScale);
        }
        Ok(())
    }
}
