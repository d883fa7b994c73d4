//! `cfgkill_core` is the engine behind the [cfgkill](https://github.com/claudiu-m/cfgkill)
//! tool. Given a config macro name used to guard blocks of C code at
//! compile time, it removes every conditional-compilation region for that
//! macro from a source file while keeping the remainder compilable.
//! Sources that abuse compile-time config options, many of them nested and
//! most of them disabled, become readable again.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Source file
//!   → Document (ordered lines, terminator-preserving)
//!   → Lexer (classifies each line as #ifdef/#ifndef/#else/#endif or code)
//!   → Parser (scans for the target macro, matches each block's #else/#endif
//!     with a depth counter that skips nested unrelated conditionals)
//!   → Engine (selects deletion ranges per block shape and mode, rebuilds
//!     the document from the surviving lines)
//! ```
//!
//! ## Key Types
//!
//! - [`Document`] — terminator-preserving line sequence; parse and
//!   serialize are lossless.
//! - [`BlockRegion`] / [`BlockShape`] — one matched guard block and its
//!   classification by start kind and `#else` presence.
//! - [`StripRequest`] — target macro name plus [`Mode`]: Exclude resolves
//!   the macro as undefined, Include (`Y` prefix) as defined.
//! - [`StripOutcome`] — the rebuilt document, or `NotFound` when the macro
//!   guards nothing (a no-op, not an error).
//!
//! ## Quick Start
//!
//! ```rust
//! use cfgkill_core::{Document, StripOutcome, StripRequest, strip_document};
//!
//! let document = Document::parse("#ifdef CONFIG_FOO\nfoo();\n#endif\nbar();\n");
//! let request = StripRequest::parse("CONFIG_FOO");
//!
//! match strip_document(&document, &request).unwrap() {
//! 	StripOutcome::Stripped { document, .. } => {
//! 		assert_eq!(document.to_string(), "bar();\n");
//! 	}
//! 	StripOutcome::NotFound => unreachable!(),
//! }
//! ```
//!
//! `#elif` is not supported: the matcher rejects it loudly rather than
//! silently mis-matching around it.

pub use document::*;
pub use engine::*;
pub use error::*;
pub use parser::*;

mod document;
mod engine;
mod error;
pub(crate) mod lexer;
mod parser;

#[cfg(test)]
mod __fixtures;
