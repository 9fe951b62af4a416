//! Combinatorial chord enumeration over a scale

use serde::{Deserialize, Serialize};

use crate::chord::Chord;
use crate::error::{ChordlabError, Result};
use crate::scale::Scale;

// ============================================================================
// Chord Generator
// ============================================================================

/// Enumerates every chord reachable by walking a scale degree-by-degree
///
/// For each `(octave, scale degree, size)` triple the generator emits one
/// chord per ordered tuple drawn from `steps` (Cartesian product with
/// repetition, last element varying fastest). Each step advances the current
/// degree by that many positions, wrapping around the scale; the emitted
/// interval is the semitone distance covered, folded into one octave.
///
/// # Example
/// ```
/// use chordlab_core::{ChordGenerator, Scale, ScaleKind};
///
/// let scale = Scale::from_kind(ScaleKind::Major, 0);
/// let generator = ChordGenerator::new(vec![5], vec![2], vec![2]);
/// let chords = generator.generate(&scale).unwrap();
/// // One stacked-thirds chord per degree: I major first, vii diminished last
/// assert_eq!(chords.len(), 7);
/// assert_eq!(chords[0].intervals, vec![4, 3]);
/// assert_eq!(chords[6].intervals, vec![3, 3]);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChordGenerator {
    /// Octave tags, copied onto each chord unchanged
    pub octaves: Vec<i32>,
    /// Chord sizes: number of step intervals per chord (notes minus one)
    pub sizes: Vec<usize>,
    /// Allowed step sizes, in scale degrees (negative steps walk downward)
    pub steps: Vec<i32>,
    /// Global cutoff across all octaves/degrees/sizes; `None` is unlimited
    pub max_population: Option<usize>,
}

impl Default for ChordGenerator {
    fn default() -> Self {
        Self {
            octaves: vec![4],
            sizes: vec![2],
            steps: vec![2], // stacked thirds
            max_population: None,
        }
    }
}

impl ChordGenerator {
    pub fn new(octaves: Vec<i32>, sizes: Vec<usize>, steps: Vec<i32>) -> Self {
        Self {
            octaves,
            sizes,
            steps,
            ..Default::default()
        }
    }

    /// Check parameters before generation starts
    pub fn validate(&self, scale: &Scale) -> Result<()> {
        scale.validate()?;
        if self.octaves.is_empty() {
            return Err(ChordlabError::EmptyOctaves);
        }
        if self.sizes.is_empty() {
            return Err(ChordlabError::EmptySizes);
        }
        if self.steps.is_empty() {
            return Err(ChordlabError::EmptySteps);
        }
        Ok(())
    }

    /// Lazily enumerate chords in generation order
    ///
    /// Consumers that need only a prefix never pay for the full Cartesian
    /// product.
    pub fn iter<'a>(&'a self, scale: &'a Scale) -> Result<ChordIter<'a>> {
        self.validate(scale)?;
        Ok(ChordIter {
            scale,
            octaves: &self.octaves,
            sizes: &self.sizes,
            steps: &self.steps,
            max_population: self.max_population,
            emitted: 0,
            oct_idx: 0,
            degree: 0,
            size_idx: 0,
            odometer: vec![0; self.sizes[0]],
        })
    }

    /// Generate the complete chord list
    pub fn generate(&self, scale: &Scale) -> Result<Vec<Chord>> {
        Ok(self.iter(scale)?.collect())
    }

    /// Closed-form count of chords `generate` will return
    ///
    /// `len(octaves) * len(scale) * sum over sizes of len(steps)^size`,
    /// capped by `max_population` when set.
    pub fn population(&self, scale: &Scale) -> usize {
        let per_degree: usize = self
            .sizes
            .iter()
            .map(|&size| self.steps.len().saturating_pow(size as u32))
            .fold(0usize, usize::saturating_add);
        let total = self
            .octaves
            .len()
            .saturating_mul(scale.len())
            .saturating_mul(per_degree);
        match self.max_population {
            Some(max) => total.min(max),
            None => total,
        }
    }
}

// ============================================================================
// Lazy iteration
// ============================================================================

/// Iterator over generated chords, in generation order
///
/// Octaves vary outermost, then scale degrees, then sizes, then step tuples
/// in lexicographic order. Created by [`ChordGenerator::iter`].
pub struct ChordIter<'a> {
    scale: &'a Scale,
    octaves: &'a [i32],
    sizes: &'a [usize],
    steps: &'a [i32],
    max_population: Option<usize>,
    emitted: usize,
    oct_idx: usize,
    degree: usize,
    size_idx: usize,
    /// Indices into `steps`, one digit per chord note above the root
    odometer: Vec<usize>,
}

impl ChordIter<'_> {
    fn build_chord(&self) -> Chord {
        let scale_len = self.scale.intervals.len() as i64;
        let mut pos = self.degree;
        let mut intervals = Vec::with_capacity(self.odometer.len());
        for &step_idx in &self.odometer {
            let step = self.steps[step_idx];
            let next = (pos as i64 + i64::from(step)).rem_euclid(scale_len) as usize;
            let value = (i32::from(self.scale.intervals[next])
                - i32::from(self.scale.intervals[pos]))
            .rem_euclid(12) as u8;
            intervals.push(value);
            pos = next;
        }
        Chord {
            octave: self.octaves[self.oct_idx],
            root: self.scale.root + i32::from(self.scale.intervals[self.degree]),
            intervals,
        }
    }

    /// Advance the step tuple; returns true when the product is exhausted
    fn bump_odometer(&mut self) -> bool {
        for digit in self.odometer.iter_mut().rev() {
            *digit += 1;
            if *digit < self.steps.len() {
                return false;
            }
            *digit = 0;
        }
        true
    }

    fn advance(&mut self) {
        if !self.bump_odometer() {
            return;
        }
        self.size_idx += 1;
        if self.size_idx >= self.sizes.len() {
            self.size_idx = 0;
            self.degree += 1;
            if self.degree >= self.scale.intervals.len() {
                self.degree = 0;
                self.oct_idx += 1;
            }
        }
        self.odometer.clear();
        self.odometer.resize(self.sizes[self.size_idx], 0);
    }
}

impl Iterator for ChordIter<'_> {
    type Item = Chord;

    fn next(&mut self) -> Option<Chord> {
        if let Some(max) = self.max_population {
            if self.emitted >= max {
                return None;
            }
        }
        if self.oct_idx >= self.octaves.len() {
            return None;
        }
        let chord = self.build_chord();
        self.emitted += 1;
        self.advance();
        Some(chord)
    }
}
