//! Common error infrastructure for tactics-core.
//!
//! Two families of errors exist in the core:
//!
//! - **Validation failures** ([`ActionFailure`](crate::action::ActionFailure)) describe why an
//!   action is impossible right now. They are data carried inside
//!   [`Action::Impossible`](crate::action::Action) and are never returned as `Err`.
//! - **Invariant violations** ([`GridError`](crate::state::GridError),
//!   [`WorldError`](crate::state::WorldError)) mean the caller broke a world invariant.
//!   They are returned as `Err` and the driver aborts the operation.
//!
//! Both implement [`GameError`] so callers can classify them uniformly.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// Errors are classified by their recoverability and expected handling:
/// - **Recoverable**: Temporary conditions that may succeed later or with alternative actions
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Internal**: Unexpected state inconsistencies that require investigation
/// - **Fatal**: Unrecoverable errors indicating corrupted world state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - may succeed on a later turn.
    ///
    /// Examples: destination blocked, target out of range, out of ammo
    Recoverable,

    /// Validation error - the request itself is malformed.
    ///
    /// Examples: weapon in the armor slot, mismatched item
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// Examples: occupancy desync, entity not at its recorded position
    /// These indicate bugs and should be investigated.
    Internal,

    /// Fatal error - world state corrupted, cannot continue.
    ///
    /// Examples: dangling entity or item handle
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

/// Common trait for all tactics-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    ///
    /// This is used for error handling strategies and logging priorities.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// This is useful for error categorization and testing.
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
