//! Common error infrastructure for arena-core.
//!
//! Domain errors ([`CombatError`], [`RosterError`]) live here next to the
//! shared classification types so callers can match on severity without
//! knowing every variant.

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input; retrying without changes fails again.
    ///
    /// Examples: zero defense, non-positive base power, unknown combatant name
    Validation,

    /// A configured bound was hit while the inputs were valid.
    ///
    /// Example: turn limit reached
    Internal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if the caller's input was at fault.
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation)
    }
}

/// Common trait for all arena-core errors.
pub trait ArenaError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Stat checked before damage is computed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum StatKind {
    Attack,
    Defense,
}

/// Errors raised while running a combat.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatError {
    /// A stat used by the damage formula is zero, negative or not finite.
    #[error("{combatant} has invalid {stat}: {value} (must be a positive number)")]
    InvalidStat {
        combatant: String,
        stat: StatKind,
        value: f64,
    },

    /// A tuning parameter in [`ArenaConfig`](crate::ArenaConfig) is unusable.
    #[error("invalid arena config: {field} = {value} (must be a positive number)")]
    InvalidConfig { field: String, value: f64 },

    /// The combat did not finish within the configured number of turns.
    #[error("combat exceeded the turn limit of {limit}")]
    TurnLimitExceeded { limit: u32 },
}

impl ArenaError for CombatError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidStat { .. } | Self::InvalidConfig { .. } => ErrorSeverity::Validation,
            Self::TurnLimitExceeded { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidStat { .. } => "COMBAT_INVALID_STAT",
            Self::InvalidConfig { .. } => "COMBAT_INVALID_CONFIG",
            Self::TurnLimitExceeded { .. } => "COMBAT_TURN_LIMIT_EXCEEDED",
        }
    }
}

/// Errors raised by [`Roster`](crate::roster::Roster) lookups.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RosterError {
    #[error("no combatant named '{0}' in roster")]
    NotFound(String),

    #[error("'{0}' cannot fight itself")]
    SameCombatant(String),
}

impl ArenaError for RosterError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "ROSTER_NOT_FOUND",
            Self::SameCombatant(_) => "ROSTER_SAME_COMBATANT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_stat_is_a_validation_error() {
        let err = CombatError::InvalidStat {
            combatant: "Magikarp".into(),
            stat: StatKind::Defense,
            value: 0.0,
        };
        assert_eq!(err.severity(), ErrorSeverity::Validation);
        assert!(err.severity().is_validation());
        assert_eq!(err.error_code(), "COMBAT_INVALID_STAT");
        assert_eq!(
            err.to_string(),
            "Magikarp has invalid defense: 0 (must be a positive number)"
        );
    }

    #[test]
    fn turn_limit_is_internal() {
        let err = CombatError::TurnLimitExceeded { limit: 3 };
        assert_eq!(err.severity(), ErrorSeverity::Internal);
        assert!(!err.severity().is_validation());
        assert_eq!(err.severity().as_str(), "internal");
    }
}
