//! @ai:module:intent Structured errors with category codes, call-site locations and wrap traces
//! @ai:module:layer domain
//! @ai:module:public_api builder, code, config, error, format, load, location
//! @ai:module:stateless true
//!
//! # errtrace
//!
//! Errors carry a category [`Code`], a message, the [`Location`] they were
//! raised at, and the newest-first chain of [`Trace`]s of the errors they wrap.
//!
//! ## Example
//!
//! ```rust
//! use errtrace::{code, Error, FormatMode, Style};
//!
//! let origin = Error::new(code::IO_ERROR, "config.toml not found", Vec::new());
//! let err = Error::wrap(code::INTERNAL_ERROR, "startup failed", &origin);
//!
//! assert_eq!(err.traces()[0], origin.into_trace());
//! println!("{}", err.render(FormatMode::GnuWithTraces));
//! println!("{}", err.format(Style::Custom, false));
//! println!("{}", err.format_json(true));
//! ```

pub mod builder;
pub mod code;
pub mod config;
pub mod error;
pub mod format;
pub mod load;
pub mod location;

pub use builder::ErrorBuilder;
pub use code::{Code, CodeId};
pub use config::ModeError;
pub use error::{Error, ResultExt, Trace};
pub use format::{to_json, FormatMode, Style};
pub use load::{from_json, read_error, LoadError};
pub use location::Location;
