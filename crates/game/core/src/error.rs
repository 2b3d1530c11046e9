//! Common error infrastructure for combat-core.
//!
//! State transitions in this crate are total: attacking with an empty magazine,
//! re-activating an ability that is cooling down, or reloading a full weapon are
//! all defined behaviour. Errors therefore only appear at the edges:
//!
//! - [`ContentError`]: a definition failed load-time validation
//! - [`crate::LoadoutError`]: a checked loadout operation was refused
//! - [`crate::AudioError`]: the external sound service reported a failure
//!
//! # Design Principles
//!
//! - **Type Safety**: Each seam has its own error type with specific variants
//! - **Severity Classification**: Errors are categorized for recovery strategies
//! - **Stable Codes**: Every variant maps to a static code for logs and tests

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: Temporary conditions that may succeed on a later tick
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Internal**: Unexpected state inconsistencies that require investigation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - retry later or pick an alternative action.
    ///
    /// Examples: ability on cooldown, audio device busy
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: negative effect parameter, duplicate content name
    Validation,

    /// Internal error - unexpected state inconsistency.
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all combat-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Load-time validation failures for content definitions.
///
/// Constructors in this crate never fail; a definition with a nonsensical value
/// (negative heal, zero-round magazine) is representable. Content pipelines call
/// the `validate` methods before a definition is admitted into a catalog.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ContentError {
    /// A definition has an empty name.
    #[error("content definition has an empty name")]
    EmptyName,

    /// An effect parameter is negative.
    #[error("{owner}: effect parameter `{field}` must not be negative (got {value})")]
    NegativeParameter {
        owner: String,
        field: &'static str,
        value: i32,
    },

    /// A weapon was defined with no rounds.
    #[error("{weapon}: magazine capacity must be at least one round")]
    EmptyMagazine { weapon: String },

    /// A weapon timing value is negative, NaN or infinite.
    #[error("{weapon}: `{field}` must be a finite, non-negative number of seconds (got {value})")]
    InvalidTiming {
        weapon: String,
        field: &'static str,
        value: f32,
    },

    /// Two definitions share the same name.
    #[error("duplicate content name `{0}`")]
    DuplicateName(String),

    /// Lookup of an ability that was never registered.
    #[error("unknown ability `{0}`")]
    UnknownAbility(String),

    /// Lookup of a weapon that was never registered.
    #[error("unknown weapon `{0}`")]
    UnknownWeapon(String),
}

impl GameError for ContentError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use ContentError::*;
        match self {
            EmptyName => "CONTENT_EMPTY_NAME",
            NegativeParameter { .. } => "CONTENT_NEGATIVE_PARAMETER",
            EmptyMagazine { .. } => "CONTENT_EMPTY_MAGAZINE",
            InvalidTiming { .. } => "CONTENT_INVALID_TIMING",
            DuplicateName(_) => "CONTENT_DUPLICATE_NAME",
            UnknownAbility(_) => "CONTENT_UNKNOWN_ABILITY",
            UnknownWeapon(_) => "CONTENT_UNKNOWN_WEAPON",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_errors_are_validation() {
        let err = ContentError::DuplicateName("Steroids".into());
        assert_eq!(err.severity(), ErrorSeverity::Validation);
        assert!(!err.severity().is_recoverable());
        assert_eq!(err.error_code(), "CONTENT_DUPLICATE_NAME");
    }

    #[test]
    fn negative_parameter_message_names_owner_and_field() {
        let err = ContentError::NegativeParameter {
            owner: "Steroids".into(),
            field: "amount",
            value: -3,
        };
        assert_eq!(
            err.to_string(),
            "Steroids: effect parameter `amount` must not be negative (got -3)"
        );
    }

    #[test]
    fn severity_strings() {
        assert_eq!(ErrorSeverity::Recoverable.as_str(), "recoverable");
        assert_eq!(ErrorSeverity::Validation.as_str(), "validation");
        assert!(ErrorSeverity::Internal.is_internal());
    }
}
