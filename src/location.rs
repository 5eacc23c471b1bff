//! @ai:module:intent Capture the source location of the code that raised an error
//! @ai:module:layer domain
//! @ai:module:public_api Location
//! @ai:module:stateless true

use backtrace::Backtrace;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Symbol fragment identifying the frame of [`Location::capture`] in a resolved backtrace.
const CAPTURE_SYMBOL: &str = "Location::capture";

/// @ai:intent Represents the (file, line) of a call site
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Location {
    pub file: String,
    pub line: u32,
}

impl Location {
    /// @ai:intent Create a Location from explicit parts
    /// @ai:effects pure
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }

    /// @ai:intent Capture the location of the immediate caller
    /// @ai:post result.line > 0
    /// @ai:effects pure
    ///
    /// Every function between a public constructor and this call must carry
    /// `#[track_caller]`, otherwise the reported site is the inner frame.
    #[track_caller]
    pub fn spawn() -> Self {
        let caller = std::panic::Location::caller();
        Self {
            file: caller.file().to_string(),
            line: caller.line(),
        }
    }

    /// @ai:intent Read the calling thread's stack at an explicit depth
    /// @ai:pre skip_frames counts from this function's own frame (0 = capture itself)
    /// @ai:post result is the zero Location when the stack is shallower than requested
    /// @ai:effects pure
    /// @ai:edge_cases unresolvable symbols (stripped binaries) -> zero Location
    ///
    /// `file` is the path recorded in debug info, usually absolute, unlike the
    /// crate-relative path [`Location::spawn`] reports. Compare with
    /// [`Location::file_name`] when mixing the two.
    #[inline(never)]
    pub fn capture(skip_frames: usize) -> Self {
        let backtrace = Backtrace::new();
        let symbols: Vec<_> = backtrace
            .frames()
            .iter()
            .flat_map(|frame| frame.symbols())
            .collect();

        let own_frame = symbols.iter().position(|symbol| {
            symbol
                .name()
                .map(|name| name.to_string().contains(CAPTURE_SYMBOL))
                .unwrap_or(false)
        });

        let Some(own_frame) = own_frame else {
            tracing::debug!("capture frame not found in backtrace");
            return Self::default();
        };

        own_frame
            .checked_add(skip_frames)
            .and_then(|index| symbols.get(index))
            .and_then(|symbol| {
                Some(Self {
                    file: symbol.filename()?.display().to_string(),
                    line: symbol.lineno()?,
                })
            })
            .unwrap_or_default()
    }

    /// @ai:intent Final path component of the file, or the whole file when it has none
    /// @ai:example ("/src/app/main.rs", 4) -> "main.rs"
    /// @ai:effects pure
    pub fn file_name(&self) -> &str {
        Path::new(&self.file)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(&self.file)
    }

    /// @ai:intent Check if this is the zero (unknown) location
    pub fn is_unknown(&self) -> bool {
        self.file.is_empty() && self.line == 0
    }
}
