//! @ai:module:intent Assemble errors fluently without requiring every field up front
//! @ai:module:layer domain
//! @ai:module:public_api ErrorBuilder
//! @ai:module:depends_on error, code, location
//! @ai:module:stateless true

use crate::code::{Code, UNKNOWN_ERROR};
use crate::error::{Error, Trace};
use crate::location::Location;

const DEFAULT_MESSAGE: &str = "an unexpected error occurred";

/// @ai:intent Immutable fluent assembler for Error values
/// @ai:invariant every with_* call leaves the receiver untouched, so a partially
///   configured builder is a reusable template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorBuilder {
    code: Code,
    message: String,
    location: Location,
    traces: Vec<Trace>,
}

impl ErrorBuilder {
    /// @ai:intent Create a builder with every field empty
    /// @ai:effects pure
    pub fn new() -> Self {
        Self {
            code: Code::default(),
            message: String::new(),
            location: Location::default(),
            traces: Vec::new(),
        }
    }

    /// @ai:effects pure
    pub fn with_code(&self, code: Code) -> Self {
        Self {
            code,
            ..self.clone()
        }
    }

    /// @ai:effects pure
    pub fn with_message(&self, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..self.clone()
        }
    }

    /// @ai:effects pure
    pub fn with_location(&self, location: Location) -> Self {
        Self {
            location,
            ..self.clone()
        }
    }

    /// @ai:intent Replace the ancestry with the given traces, verbatim
    /// @ai:effects pure
    pub fn with_traces(&self, traces: Vec<Trace>) -> Self {
        Self {
            traces,
            ..self.clone()
        }
    }

    /// @ai:intent Replace the ancestry with the cause's identity followed by the cause's ancestry
    /// @ai:post result.traces[0] == cause.into_trace()
    /// @ai:effects pure
    pub fn with_cause(&self, cause: &Error) -> Self {
        let mut traces = Vec::with_capacity(cause.traces().len() + 1);
        traces.push(cause.into_trace());
        traces.extend_from_slice(cause.traces());

        self.with_traces(traces)
    }

    /// @ai:intent Materialize the accumulated fields into an Error
    /// @ai:post unset fields are empty in the result
    /// @ai:effects pure
    pub fn build(&self) -> Error {
        Error::from_parts(
            self.code.clone(),
            self.message.clone(),
            self.location.clone(),
            self.traces.clone(),
        )
    }
}

impl Default for ErrorBuilder {
    /// @ai:intent Builder preset with the unknown code, a canned message and the caller's location
    #[track_caller]
    fn default() -> Self {
        Self {
            code: UNKNOWN_ERROR,
            message: DEFAULT_MESSAGE.to_string(),
            location: Location::spawn(),
            traces: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::{INTERNAL_ERROR, NETWORK_ERROR};

    #[test]
    fn test_new_builds_empty_error() {
        let err = ErrorBuilder::new().build();

        assert_eq!(err, Error::default());
        assert!(err.location().is_unknown());
    }

    #[test]
    fn test_default_preset() {
        let (builder, line) = (ErrorBuilder::default(), line!());
        let err = builder.build();

        assert_eq!(err.code(), &UNKNOWN_ERROR);
        assert_eq!(err.message(), "an unexpected error occurred");
        assert_eq!(err.location(), &Location::new(file!(), line));
        assert!(err.traces().is_empty());
    }

    #[test]
    fn test_with_message_leaves_receiver_untouched() {
        let b1 = ErrorBuilder::new().with_message("first");
        let snapshot = b1.clone();

        let b2 = b1.with_message("second");

        assert_eq!(b1, snapshot);
        assert_ne!(b1, b2);
        assert_eq!(b1.build().message(), "first");
        assert_eq!(b2.build().message(), "second");
    }

    #[test]
    fn test_template_reuse_does_not_leak() {
        let template = ErrorBuilder::new().with_code(NETWORK_ERROR);

        let first = template
            .with_message("dial failed")
            .with_traces(vec![Trace::new("dns", Location::new("dns.rs", 3))])
            .build();
        let second = template.with_message("read failed").build();

        assert_eq!(first.code(), &NETWORK_ERROR);
        assert_eq!(second.code(), &NETWORK_ERROR);
        assert_eq!(first.traces().len(), 1);
        assert!(second.traces().is_empty());
        assert_eq!(template.build().message(), "");
    }

    #[test]
    fn test_with_cause() {
        let origin = Error::new(INTERNAL_ERROR, "origin", Vec::new());
        let middle = Error::wrap(INTERNAL_ERROR, "middle", &origin);

        let err = ErrorBuilder::new().with_cause(&middle).build();

        assert_eq!(err.traces(), &[middle.into_trace(), origin.into_trace()]);
    }

    #[test]
    fn test_build_is_repeatable() {
        let builder = ErrorBuilder::new()
            .with_code(INTERNAL_ERROR)
            .with_message("twice")
            .with_location(Location::new("twice.rs", 2));

        assert_eq!(builder.build(), builder.build());
    }
}
