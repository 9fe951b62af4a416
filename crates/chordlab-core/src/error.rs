//! Error types for chordlab

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ChordlabError {
    #[error("scale has no intervals")]
    EmptyScale,
    #[error("no octaves given")]
    EmptyOctaves,
    #[error("no chord sizes given")]
    EmptySizes,
    #[error("no step intervals given")]
    EmptySteps,
}

pub type Result<T> = std::result::Result<T, ChordlabError>;
