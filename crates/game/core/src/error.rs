//! Common error infrastructure for effect-core.
//!
//! This module provides the shared severity classification and the error trait
//! implemented by every error enum in the workspace. The engine itself has a
//! single failure mode (constructing an effect with a negative magnitude) plus
//! the validation performed when an effect list is restored from storage.
//!
//! # Design Principles
//!
//! - **Total operations**: `add`, `remove_kind`, `tick` and all queries never fail;
//!   absence is expressed through return values
//! - **Caller bugs surface**: construction errors propagate, they are never clamped away
//! - **Severity Classification**: errors are categorized for recovery strategies

use crate::status::EffectKind;

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry later or with a different choice.
    ///
    /// Examples: opponent-targeted item used outside of battle
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: debuff chance outside [0, 1], unknown kind id in a save file
    Validation,

    /// Internal error - the caller violated a documented precondition.
    ///
    /// Examples: negative magnitude reaching effect construction
    /// These indicate bugs and should be investigated.
    Internal,

    /// Fatal error - persisted state is corrupted, cannot continue.
    ///
    /// Examples: duplicate kinds in a restored effect list
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all combat effect errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait CombatError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Errors raised by effect construction and effect-list restoration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EffectError {
    /// Magnitude must be non-negative; the item layer clamps before constructing.
    #[error("{kind} magnitude must be non-negative, got {magnitude}")]
    NegativeMagnitude { kind: EffectKind, magnitude: i32 },

    /// Wire id that does not map to any effect kind.
    #[error("unknown effect kind id {0}")]
    UnknownKind(u8),

    /// Kind name that does not map to any effect kind.
    #[error("unknown effect kind name '{0}'")]
    UnknownKindName(String),

    /// A restored effect list held two entries of the same kind.
    #[error("duplicate {0} entry in effect list")]
    DuplicateKind(EffectKind),

    /// Binary encoding or decoding failed.
    #[error("effect list encoding failed: {0}")]
    Encoding(String),
}

impl CombatError for EffectError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NegativeMagnitude { .. } => ErrorSeverity::Internal,
            Self::UnknownKind(_) | Self::UnknownKindName(_) => ErrorSeverity::Validation,
            Self::DuplicateKind(_) | Self::Encoding(_) => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NegativeMagnitude { .. } => "EFFECT_NEGATIVE_MAGNITUDE",
            Self::UnknownKind(_) => "EFFECT_UNKNOWN_KIND",
            Self::UnknownKindName(_) => "EFFECT_UNKNOWN_KIND_NAME",
            Self::DuplicateKind(_) => "EFFECT_DUPLICATE_KIND",
            Self::Encoding(_) => "EFFECT_ENCODING",
        }
    }
}
