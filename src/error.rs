//! @ai:module:intent Define the structured error value and its wrap/trace chain
//! @ai:module:layer domain
//! @ai:module:public_api Error, Trace, ResultExt
//! @ai:module:depends_on code, location, builder
//! @ai:module:stateless true

use crate::builder::ErrorBuilder;
use crate::code::Code;
use crate::location::Location;
use serde::{Deserialize, Serialize};

/// @ai:intent Structured error: category code, message, raise site and ancestry
/// @ai:invariant traces[0] is the most recently wrapped error, the last entry the oldest origin
/// @ai:invariant location is the call site of the public constructor, never an internal frame
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Error {
    code: Code,
    message: String,
    #[serde(rename = "position")]
    location: Location,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    traces: Vec<Trace>,
}

/// @ai:intent Snapshot of a wrapped error's message and raise site, without its code
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Trace {
    message: String,
    #[serde(rename = "position")]
    location: Location,
}

impl Error {
    /// @ai:intent Create an error stamped with the caller's location
    /// @ai:post result.location() is the line that called new
    /// @ai:post result.traces() == traces
    /// @ai:example (INTERNAL_ERROR, "stats unavailable", vec![]) -> Error with no traces
    /// @ai:effects pure
    #[track_caller]
    pub fn new(code: Code, message: impl Into<String>, traces: Vec<Trace>) -> Self {
        ErrorBuilder::new()
            .with_code(code)
            .with_message(message)
            .with_location(Location::spawn())
            .with_traces(traces)
            .build()
    }

    /// @ai:intent Create an error whose ancestry is `inner` followed by inner's own ancestry
    /// @ai:post result.traces()[0] == inner.into_trace()
    /// @ai:post result.traces()[1..] == inner.traces()
    /// @ai:effects pure
    #[track_caller]
    pub fn wrap(code: Code, message: impl Into<String>, inner: &Error) -> Self {
        ErrorBuilder::new()
            .with_code(code)
            .with_message(message)
            .with_location(Location::spawn())
            .with_cause(inner)
            .build()
    }

    pub(crate) fn from_parts(
        code: Code,
        message: String,
        location: Location,
        traces: Vec<Trace>,
    ) -> Self {
        Self {
            code,
            message,
            location,
            traces,
        }
    }

    /// @ai:intent Flatten this error into a trace, dropping code and ancestry
    /// @ai:effects pure
    #[allow(clippy::wrong_self_convention)]
    pub fn into_trace(&self) -> Trace {
        Trace {
            message: self.message.clone(),
            location: self.location.clone(),
        }
    }

    pub fn code(&self) -> &Code {
        &self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn traces(&self) -> &[Trace] {
        &self.traces
    }
}

impl std::error::Error for Error {}

impl Trace {
    pub fn new(message: impl Into<String>, location: Location) -> Self {
        Self {
            message: message.into(),
            location,
        }
    }

    /// @ai:intent Rebuild a bare error from this snapshot
    /// @ai:post result.code() is the empty code and result.traces() is empty
    /// @ai:effects pure
    #[allow(clippy::wrong_self_convention)]
    pub fn into_error(&self) -> Error {
        Error {
            message: self.message.clone(),
            location: self.location.clone(),
            ..Default::default()
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn location(&self) -> &Location {
        &self.location
    }
}

/// @ai:intent Wrap the error arm of a Result in place
pub trait ResultExt<T> {
    fn wrap_err(self, code: Code, message: impl Into<String>) -> Result<T, Error>;
}

impl<T> ResultExt<T> for Result<T, Error> {
    /// @ai:intent Wrap the error with the caller of wrap_err as its location
    /// @ai:effects pure
    #[track_caller]
    fn wrap_err(self, code: Code, message: impl Into<String>) -> Result<T, Error> {
        // no map_err: closures drop the caller location
        match self {
            Ok(value) => Ok(value),
            Err(inner) => Err(Error::wrap(code, message, &inner)),
        }
    }
}
