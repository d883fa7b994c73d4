use std::fmt::Display;

use crate::CfgkillError;
use crate::CfgkillResult;
use crate::Document;
use crate::lexer::Directive;
use crate::lexer::classify;

/// Which directive opened a guard block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StartKind {
	Ifdef,
	Ifndef,
}

impl StartKind {
	/// The other start directive. Include mode relabels every `#ifdef` as
	/// `#ifndef` and vice versa before the Exclude rules apply.
	pub fn opposite(self) -> Self {
		match self {
			StartKind::Ifdef => StartKind::Ifndef,
			StartKind::Ifndef => StartKind::Ifdef,
		}
	}
}

impl Display for StartKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			StartKind::Ifdef => write!(f, "#ifdef"),
			StartKind::Ifndef => write!(f, "#ifndef"),
		}
	}
}

/// A start directive for the target macro found by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occurrence {
	/// Line index of the start directive.
	pub line: usize,
	pub kind: StartKind,
}

/// The resolved boundaries of one guard block: the start directive line,
/// the top-level `#else` line when the block has one, and the top-level
/// `#endif` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockRegion {
	pub start: usize,
	pub mid: Option<usize>,
	pub end: usize,
}

impl BlockRegion {
	/// Derive the block shape from the start directive kind and the
	/// presence of a top-level `#else`. Exactly one shape holds per region.
	pub fn shape(&self, start_kind: StartKind) -> BlockShape {
		match (start_kind, self.mid) {
			(StartKind::Ifdef, None) => BlockShape::If,
			(StartKind::Ifndef, None) => BlockShape::Notif,
			(StartKind::Ifdef, Some(mid)) => BlockShape::IfElse { mid },
			(StartKind::Ifndef, Some(mid)) => BlockShape::NotifElse { mid },
		}
	}
}

/// The four guard-block shapes, by start directive kind and whether the
/// block carries a top-level `#else` branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockShape {
	/// `#ifdef ... #endif`
	If,
	/// `#ifndef ... #endif`
	Notif,
	/// `#ifdef ... #else ... #endif`
	IfElse { mid: usize },
	/// `#ifndef ... #else ... #endif`
	NotifElse { mid: usize },
}

/// Find every start directive whose argument is exactly `name`, in document
/// order. A single forward pass; nesting is resolved later, per occurrence,
/// by [`match_block`].
pub fn find_occurrences<'a>(
	document: &'a Document,
	name: &'a str,
) -> impl Iterator<Item = Occurrence> + 'a {
	document
		.iter()
		.enumerate()
		.filter_map(move |(line, text)| {
			match classify(text) {
				Some(Directive::Ifdef(Some(argument))) if argument == name => {
					Some(Occurrence {
						line,
						kind: StartKind::Ifdef,
					})
				}
				Some(Directive::Ifndef(Some(argument))) if argument == name => {
					Some(Occurrence {
						line,
						kind: StartKind::Ifndef,
					})
				}
				_ => None,
			}
		})
}

/// Resolve the `#else`/`#endif` boundaries of the block starting at `start`.
///
/// `window_end` is exclusive: the next occurrence's line, or the document
/// length for the last occurrence. The scan tracks a depth counter so the
/// terminators of nested unrelated conditionals are consumed and ignored;
/// the first `#else` or `#endif` at depth 0 is the outer boundary. When the
/// outer boundary is an `#else`, a second depth-tracked scan locates the
/// closing `#endif`.
pub fn match_block(
	document: &Document,
	start: usize,
	window_end: usize,
) -> CfgkillResult<BlockRegion> {
	let unmatched = || CfgkillError::UnmatchedConditional { line: start + 1 };

	match scan_boundary(document, start + 1, window_end, true)? {
		Some(Boundary::Endif(end)) => {
			Ok(BlockRegion {
				start,
				mid: None,
				end,
			})
		}
		Some(Boundary::Else(mid)) => {
			match scan_boundary(document, mid + 1, window_end, false)? {
				Some(Boundary::Endif(end)) => {
					Ok(BlockRegion {
						start,
						mid: Some(mid),
						end,
					})
				}
				_ => Err(unmatched()),
			}
		}
		None => Err(unmatched()),
	}
}

/// A depth-0 boundary event: the first significant `#else` or `#endif`.
enum Boundary {
	Else(usize),
	Endif(usize),
}

/// Forward scan from `from` (exclusive of `window_end`) for the first
/// boundary at depth 0. Start directives push, `#endif` at depth > 0 pops,
/// `#else` at depth > 0 belongs to an inner conditional and is ignored.
/// `#elif` is rejected outright rather than silently mis-matched.
fn scan_boundary(
	document: &Document,
	from: usize,
	window_end: usize,
	accept_else: bool,
) -> CfgkillResult<Option<Boundary>> {
	let mut depth = 0usize;

	for line in from..window_end {
		match classify(&document[line]) {
			Some(Directive::Ifdef(_) | Directive::Ifndef(_)) => depth += 1,
			Some(Directive::Endif) => {
				if depth == 0 {
					return Ok(Some(Boundary::Endif(line)));
				}
				depth -= 1;
			}
			Some(Directive::Else) if depth == 0 && accept_else => {
				return Ok(Some(Boundary::Else(line)));
			}
			Some(Directive::Elif) => {
				return Err(CfgkillError::ElifUnsupported { line: line + 1 });
			}
			_ => {}
		}
	}

	Ok(None)
}

/// One named guard occurrence found while surveying a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardOccurrence {
	pub name: String,
	/// Line index of the start directive.
	pub line: usize,
	pub kind: StartKind,
}

/// Collect every named `#ifdef`/`#ifndef` in the document, in document
/// order. This is what `cfgkill list` reports: which config macros a file
/// guards and where.
pub fn survey(document: &Document) -> Vec<GuardOccurrence> {
	document
		.iter()
		.enumerate()
		.filter_map(|(line, text)| {
			match classify(text) {
				Some(Directive::Ifdef(Some(name))) => {
					Some(GuardOccurrence {
						name,
						line,
						kind: StartKind::Ifdef,
					})
				}
				Some(Directive::Ifndef(Some(name))) => {
					Some(GuardOccurrence {
						name,
						line,
						kind: StartKind::Ifndef,
					})
				}
				_ => None,
			}
		})
		.collect()
}
