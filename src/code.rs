//! @ai:module:intent Define category codes that tag the class of an error
//! @ai:module:layer domain
//! @ai:module:public_api Code, CodeId, defaults, lookup
//! @ai:module:stateless true
//!
//! Hosts extend the taxonomy by declaring their own constants:
//!
//! ```rust
//! use errtrace::{Code, CodeId};
//!
//! const QUOTA_ERROR: Code = Code::new(CodeId(100), "quota exhausted");
//! assert_eq!(QUOTA_ERROR.id(), CodeId(100));
//! ```

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// @ai:intent Numeric kind of a category code
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct CodeId(pub u32);

impl CodeId {
    pub const UNKNOWN: CodeId = CodeId(0);
    pub const IO: CodeId = CodeId(1);
    pub const NETWORK: CodeId = CodeId(2);
    pub const INTERNAL: CodeId = CodeId(3);
    pub const CLIENT: CodeId = CodeId(4);
    pub const UNAUTHORIZED: CodeId = CodeId(5);
    pub const TIMEOUT: CodeId = CodeId(6);
    pub const UNIMPLEMENTED: CodeId = CodeId(7);
}

impl fmt::Display for CodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// @ai:intent Category code: a kind paired with its human description
/// @ai:invariant id and description are fixed at construction
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Code {
    id: CodeId,
    #[serde(default, skip_serializing_if = "is_empty")]
    description: Cow<'static, str>,
}

fn is_empty(description: &Cow<'static, str>) -> bool {
    description.is_empty()
}

impl Code {
    /// @ai:intent Pair a kind with a static description
    /// @ai:effects pure
    pub const fn new(id: CodeId, description: &'static str) -> Self {
        Self {
            id,
            description: Cow::Borrowed(description),
        }
    }

    /// @ai:intent Pair a kind with a description built at runtime
    pub fn with_owned_description(id: CodeId, description: String) -> Self {
        Self {
            id,
            description: Cow::Owned(description),
        }
    }

    pub fn id(&self) -> CodeId {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

pub const UNKNOWN_ERROR: Code = Code::new(CodeId::UNKNOWN, "failed to perform task");
pub const IO_ERROR: Code = Code::new(CodeId::IO, "failed to perform IO task");
pub const NETWORK_ERROR: Code = Code::new(CodeId::NETWORK, "failed to perform network task");
pub const INTERNAL_ERROR: Code = Code::new(CodeId::INTERNAL, "failed to perform application task");
pub const CLIENT_ERROR: Code = Code::new(CodeId::CLIENT, "failed to perform client api task");
pub const UNAUTHORIZED_ERROR: Code =
    Code::new(CodeId::UNAUTHORIZED, "cannot perform unauthorized task");
pub const TIMEOUT_ERROR: Code = Code::new(
    CodeId::TIMEOUT,
    "failed to perform the task, the deadline is exceeded",
);
pub const UNIMPLEMENTED_ERROR: Code = Code::new(CodeId::UNIMPLEMENTED, "unimplemented behavior");

/// @ai:intent List the built-in category codes in id order
/// @ai:effects pure
pub fn defaults() -> [Code; 8] {
    [
        UNKNOWN_ERROR,
        IO_ERROR,
        NETWORK_ERROR,
        INTERNAL_ERROR,
        CLIENT_ERROR,
        UNAUTHORIZED_ERROR,
        TIMEOUT_ERROR,
        UNIMPLEMENTED_ERROR,
    ]
}

/// @ai:intent Find a built-in category code by id
/// @ai:example (CodeId(3)) -> Some(INTERNAL_ERROR)
/// @ai:example (CodeId(42)) -> None
/// @ai:effects pure
pub fn lookup(id: CodeId) -> Option<Code> {
    defaults().into_iter().find(|code| code.id == id)
}
