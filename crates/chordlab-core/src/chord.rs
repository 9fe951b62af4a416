//! Generated chord records

use serde::{Deserialize, Serialize};

/// One generated chord
///
/// `root` is the absolute pitch of the lowest note (scale root plus the
/// degree offset, never folded mod 12). `intervals[i]` is the semitone
/// distance from the previous note, always in `[0, 11]`. `octave` is the
/// tag from the generator's octave list, carried through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chord {
    pub octave: i32,
    pub root: i32,
    pub intervals: Vec<u8>,
}

impl Chord {
    /// Number of notes, counting the root
    pub fn note_count(&self) -> usize {
        self.intervals.len() + 1
    }
}
