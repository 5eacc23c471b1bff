//! @ai:module:intent Render errors and traces as GNU, custom or JSON text
//! @ai:module:layer infrastructure
//! @ai:module:public_api Style, FormatMode, to_json, format_code_table
//! @ai:module:depends_on error, config
//! @ai:module:stateless true

use crate::code::Code;
use crate::config;
use crate::error::{Error, Trace};
use serde::ser::Error as _;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fmt;

/// @ai:intent Textual layout family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// `file:line: Error: ...`, the layout compilers and editors understand
    Gnu,
    /// Labelled multi-line layout
    Custom,
}

/// @ai:intent Resolved rendering mode; the discriminant is the external selector value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FormatMode {
    #[default]
    Gnu = 0,
    GnuWithTraces = 1,
    Custom = 2,
    CustomWithTraces = 3,
}

impl FormatMode {
    pub const ALL: [FormatMode; 4] = [
        FormatMode::Gnu,
        FormatMode::GnuWithTraces,
        FormatMode::Custom,
        FormatMode::CustomWithTraces,
    ];

    pub fn style(&self) -> Style {
        match self {
            FormatMode::Gnu | FormatMode::GnuWithTraces => Style::Gnu,
            FormatMode::Custom | FormatMode::CustomWithTraces => Style::Custom,
        }
    }

    pub fn with_traces(&self) -> bool {
        matches!(self, FormatMode::GnuWithTraces | FormatMode::CustomWithTraces)
    }

    /// @ai:intent Name accepted on the command line
    pub fn name(&self) -> &'static str {
        match self {
            FormatMode::Gnu => "gnu",
            FormatMode::GnuWithTraces => "gnu-with-traces",
            FormatMode::Custom => "custom",
            FormatMode::CustomWithTraces => "custom-with-traces",
        }
    }
}

impl fmt::Display for FormatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Error {
    /// @ai:intent Render the head line(s) of this error without its traces
    /// @ai:example (Gnu, true) -> "sample.go:50: Error: 0:failed to perform task:sample error"
    /// @ai:example (Gnu, false) -> "Error: 0:failed to perform task:sample error"
    /// @ai:effects pure
    pub fn format(&self, style: Style, with_location: bool) -> String {
        let code = self.code();
        match (style, with_location) {
            (Style::Custom, false) => format!(
                "code id: {}; description: {}\n\terror message: {}",
                code.id(),
                code.description(),
                self.message()
            ),
            (Style::Custom, true) => format!(
                "code id: {}; description: {}\n\terror message: {}; in file: {}; at line: {}",
                code.id(),
                code.description(),
                self.message(),
                self.location().file,
                self.location().line
            ),
            (Style::Gnu, false) => format!(
                "Error: {}:{}:{}",
                code.id(),
                code.description(),
                self.message()
            ),
            (Style::Gnu, true) => format!(
                "{}:{}: Error: {}:{}:{}",
                self.location().file,
                self.location().line,
                code.id(),
                code.description(),
                self.message()
            ),
        }
    }

    /// @ai:intent Render the head line followed by one line per ancestor, newest first
    /// @ai:post the head always carries the location
    /// @ai:effects pure
    pub fn format_with_traces(&self, style: Style) -> String {
        let separator = match style {
            Style::Gnu => "\n",
            Style::Custom => "\n\t\t",
        };

        self.traces()
            .iter()
            .fold(self.format(style, true), |mut output, trace| {
                output.push_str(separator);
                output.push_str(&trace.format(style));
                output
            })
    }

    /// @ai:intent Render as compact or tab-indented JSON
    /// @ai:post result is empty if serialization fails
    /// @ai:effects pure
    pub fn format_json(&self, indent: bool) -> String {
        to_json(self, indent)
    }

    /// @ai:intent Render with an explicitly selected mode
    /// @ai:effects pure
    pub fn render(&self, mode: FormatMode) -> String {
        if mode.with_traces() {
            self.format_with_traces(mode.style())
        } else {
            self.format(mode.style(), true)
        }
    }
}

/// Renders with the process-wide mode, see [`config::mode`].
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(config::mode()))
    }
}

impl Trace {
    /// @ai:intent Render a single ancestor line
    /// @ai:example (Gnu) -> "error_test.go:828: Error: error database"
    /// @ai:effects pure
    pub fn format(&self, style: Style) -> String {
        match style {
            Style::Custom => format!(
                "trace message: {}; in file: {}; at line: {}",
                self.message(),
                self.location().file,
                self.location().line
            ),
            Style::Gnu => format!(
                "{}:{}: Error: {}",
                self.location().file,
                self.location().line,
                self.message()
            ),
        }
    }
}

/// @ai:intent Format any serializable value as JSON, tab-indented when requested
/// @ai:effects pure
pub fn to_json<T: Serialize>(value: &T, indent: bool) -> String {
    let rendered = if indent {
        to_json_tab_indented(value)
    } else {
        serde_json::to_string(value)
    };

    match rendered {
        Ok(json) => json,
        Err(e) => {
            tracing::warn!("JSON serialization failed: {}", e);
            String::new()
        }
    }
}

/// @ai:intent Format category codes as an aligned id/description table
/// @ai:effects pure
pub fn format_code_table(codes: &[Code]) -> String {
    let width = codes
        .iter()
        .map(|code| code.id().to_string().len())
        .max()
        .unwrap_or(0);

    codes
        .iter()
        .map(|code| format!("{:>width$}  {}\n", code.id(), code.description(), width = width))
        .collect()
}

fn to_json_tab_indented<T: Serialize>(value: &T) -> serde_json::Result<String> {
    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"\t"));
    value.serialize(&mut serializer)?;

    String::from_utf8(buffer).map_err(serde_json::Error::custom)
}
