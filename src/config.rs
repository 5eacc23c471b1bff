//! @ai:module:intent Resolve the format mode from external configuration
//! @ai:module:layer infrastructure
//! @ai:module:public_api ENV_VAR, ModeError, resolve, from_env, install, mode
//! @ai:module:depends_on format
//!
//! The process-wide mode is written at most once: either explicitly through
//! [`install`] during startup, or lazily from [`ENV_VAR`] on the first read.

use crate::format::FormatMode;
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;

/// Environment variable holding the integer mode selector (`0..=3`).
pub const ENV_VAR: &str = "ERRTRACE_FORMAT";

static MODE: OnceLock<FormatMode> = OnceLock::new();

/// @ai:intent Errors raised by strict mode parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModeError {
    #[error("format mode {0} is out of range (expected 0..=3)")]
    OutOfRange(i64),

    #[error("unrecognized format mode: {0:?}")]
    Unparseable(String),
}

impl TryFrom<i64> for FormatMode {
    type Error = ModeError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(FormatMode::Gnu),
            1 => Ok(FormatMode::GnuWithTraces),
            2 => Ok(FormatMode::Custom),
            3 => Ok(FormatMode::CustomWithTraces),
            other => Err(ModeError::OutOfRange(other)),
        }
    }
}

impl FromStr for FormatMode {
    type Err = ModeError;

    /// @ai:intent Parse a selector number or a mode name
    /// @ai:example ("2") -> Ok(Custom)
    /// @ai:example ("gnu-with-traces") -> Ok(GnuWithTraces)
    /// @ai:example ("7") -> Err(OutOfRange(7))
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if let Ok(value) = trimmed.parse::<i64>() {
            return FormatMode::try_from(value);
        }

        FormatMode::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ModeError::Unparseable(s.to_string()))
    }
}

/// @ai:intent Leniently resolve a raw selector, falling back to Gnu
/// @ai:post never fails; missing, unparseable and out-of-range values yield Gnu
/// @ai:edge_cases surrounding whitespace makes the value unparseable
/// @ai:effects log
pub fn resolve(raw: Option<&str>) -> FormatMode {
    let Some(raw) = raw else {
        tracing::debug!("{} not set, using {}", ENV_VAR, FormatMode::Gnu);
        return FormatMode::Gnu;
    };

    match raw.parse::<i64>() {
        Ok(value) => FormatMode::try_from(value).unwrap_or_else(|e| {
            tracing::warn!("{}: {}, using {}", ENV_VAR, e, FormatMode::Gnu);
            FormatMode::Gnu
        }),
        Err(_) => {
            tracing::warn!("{}={:?} is not a number, using {}", ENV_VAR, raw, FormatMode::Gnu);
            FormatMode::Gnu
        }
    }
}

/// @ai:intent Resolve the mode from the environment
/// @ai:effects env:read, log
pub fn from_env() -> FormatMode {
    let raw = std::env::var(ENV_VAR).ok();
    resolve(raw.as_deref())
}

/// @ai:intent Set the process-wide mode once, at startup
/// @ai:post returns false (and changes nothing) if the mode was already set or read
pub fn install(mode: FormatMode) -> bool {
    let installed = MODE.set(mode).is_ok();
    if !installed {
        tracing::debug!("format mode already resolved, ignoring {}", mode);
    }
    installed
}

/// @ai:intent Read the process-wide mode, resolving it from the environment on first use
/// @ai:effects env:read
pub fn mode() -> FormatMode {
    *MODE.get_or_init(from_env)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_valid_selectors() {
        assert_eq!(resolve(Some("0")), FormatMode::Gnu);
        assert_eq!(resolve(Some("1")), FormatMode::GnuWithTraces);
        assert_eq!(resolve(Some("2")), FormatMode::Custom);
        assert_eq!(resolve(Some("3")), FormatMode::CustomWithTraces);
    }

    #[test]
    fn test_resolve_invalid_falls_back_to_gnu() {
        for raw in ["-1", "4", "abc", "", "1.5", "99999999999999999999", " 2", "3\n"] {
            assert_eq!(resolve(Some(raw)), FormatMode::Gnu, "raw = {:?}", raw);
        }
        assert_eq!(resolve(None), FormatMode::Gnu);
    }

    #[test]
    fn test_try_from_is_strict() {
        assert_eq!(FormatMode::try_from(2), Ok(FormatMode::Custom));
        assert_eq!(FormatMode::try_from(-1), Err(ModeError::OutOfRange(-1)));
        assert_eq!(FormatMode::try_from(4), Err(ModeError::OutOfRange(4)));
    }

    #[test]
    fn test_from_str_numbers_and_names() {
        assert_eq!("3".parse::<FormatMode>(), Ok(FormatMode::CustomWithTraces));
        assert_eq!("custom".parse::<FormatMode>(), Ok(FormatMode::Custom));
        assert_eq!("GNU-With-Traces".parse::<FormatMode>(), Ok(FormatMode::GnuWithTraces));
        assert_eq!("9".parse::<FormatMode>(), Err(ModeError::OutOfRange(9)));
        assert_eq!(
            "verbose".parse::<FormatMode>(),
            Err(ModeError::Unparseable("verbose".to_string()))
        );
    }

    #[test]
    fn test_install_is_single_writer() {
        let current = mode();

        assert!(!install(FormatMode::CustomWithTraces));
        assert!(!install(FormatMode::Gnu));
        assert_eq!(mode(), current);
    }

    #[test]
    fn test_mode_error_messages() {
        assert_eq!(
            ModeError::OutOfRange(4).to_string(),
            "format mode 4 is out of range (expected 0..=3)"
        );
        assert_eq!(
            ModeError::Unparseable("x".to_string()).to_string(),
            "unrecognized format mode: \"x\""
        );
    }
}
