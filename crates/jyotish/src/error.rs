//! Error types shared by every derivation in the crate.

use crate::ephemeris::EphemerisError;
use thiserror::Error;

/// Errors surfaced by chart derivation.
#[derive(Error, Debug)]
pub enum JyotishError {
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },
    #[error("Invalid harmonic number: {0}. Valid harmonics: 1-12")]
    InvalidHarmonic(u8),
    #[error("Unknown varga label: {0:?}. Valid labels: D1-D12")]
    UnknownVargaLabel(String),
    #[error("Ephemeris unavailable: {0}")]
    EphemerisUnavailable(#[from] EphemerisError),
}

impl JyotishError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// True for every member of the rejected-input family.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput { .. } | Self::InvalidHarmonic(_) | Self::UnknownVargaLabel(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, JyotishError>;
