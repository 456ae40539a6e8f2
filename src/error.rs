//! Error types for tether construction.

use core::fmt;

/// Errors raised when a tether cannot be created.
///
/// Only configuration and attach inputs are checked. Once a tether exists,
/// ticking it never fails.
#[derive(Debug, Clone, PartialEq)]
pub enum TetherError {
    /// Segment length must be positive and finite.
    InvalidSegmentLength,
    /// Maximum length must be positive and finite.
    InvalidMaxLength,
    /// At least one relaxation iteration is required.
    InvalidIterations,
    /// Pull strength must be finite and non-negative.
    InvalidPullStrength,
    /// An anchor or free-end position contained NaN or infinity.
    NonFinitePosition,
}

impl fmt::Display for TetherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TetherError::InvalidSegmentLength => write!(f, "segment length must be positive and finite"),
            TetherError::InvalidMaxLength => write!(f, "max length must be positive and finite"),
            TetherError::InvalidIterations => write!(f, "relax iterations must be at least 1"),
            TetherError::InvalidPullStrength => write!(f, "pull strength must be finite and non-negative"),
            TetherError::NonFinitePosition => write!(f, "anchor and free-end positions must be finite"),
        }
    }
}

impl core::error::Error for TetherError {}
