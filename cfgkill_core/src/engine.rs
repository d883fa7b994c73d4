use std::fs;
use std::path::Path;
use std::path::PathBuf;

use crate::CfgkillResult;
use crate::DeletionRange;
use crate::Document;
use crate::parser::BlockRegion;
use crate::parser::BlockShape;
use crate::parser::Occurrence;
use crate::parser::StartKind;
use crate::parser::find_occurrences;
use crate::parser::match_block;

/// How the target macro is resolved during stripping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
	/// The macro is treated as undefined: `#ifdef` bodies are deleted,
	/// `#ifndef` bodies survive.
	#[default]
	Exclude,
	/// The macro is treated as defined: the exact mirror image of
	/// [`Mode::Exclude`], deleting `#else` branches instead.
	Include,
}

/// The target macro name together with the resolution mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripRequest {
	pub name: String,
	pub mode: Mode,
}

impl StripRequest {
	pub fn new(name: impl Into<String>, mode: Mode) -> Self {
		Self {
			name: name.into(),
			mode,
		}
	}

	/// Parse the command-line macro argument. A leading literal `Y` (as in
	/// `CONFIG=y`) selects Include mode and is stripped before matching.
	pub fn parse(argument: &str) -> Self {
		match argument.strip_prefix('Y') {
			Some(rest) => Self::new(rest, Mode::Include),
			None => Self::new(argument, Mode::Exclude),
		}
	}
}

/// Which line ranges to delete for one matched block.
///
/// Under Exclude mode: an `#ifdef` block is deleted whole; an `#ifndef`
/// block loses only its directive lines; an `#ifdef...#else` block loses
/// the directives and the defined branch, keeping the else branch; an
/// `#ifndef...#else` block keeps its first branch and loses everything
/// from the `#else` down. Include mode applies the Exclude rule for the
/// opposite start kind.
pub fn select_deletions(
	region: BlockRegion,
	start_kind: StartKind,
	mode: Mode,
) -> Vec<DeletionRange> {
	let effective = match mode {
		Mode::Exclude => start_kind,
		Mode::Include => start_kind.opposite(),
	};

	match region.shape(effective) {
		BlockShape::If => vec![DeletionRange::new(region.start, region.end)],
		BlockShape::Notif => {
			vec![
				DeletionRange::single(region.start),
				DeletionRange::single(region.end),
			]
		}
		BlockShape::IfElse { mid } => {
			vec![
				DeletionRange::new(region.start, mid),
				DeletionRange::single(region.end),
			]
		}
		BlockShape::NotifElse { mid } => {
			vec![
				DeletionRange::single(region.start),
				DeletionRange::new(mid, region.end),
			]
		}
	}
}

/// Outcome of stripping one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StripOutcome {
	/// The target macro guards nothing in this document. A no-op, not an
	/// error.
	NotFound,
	/// The rebuilt document and what was removed from the original.
	Stripped {
		document: Document,
		/// The deleted line ranges, ascending and non-overlapping.
		removed: Vec<DeletionRange>,
		/// How many guard blocks were resolved.
		block_count: usize,
	},
}

/// Strip every guard block for the requested macro from the document.
///
/// The scanner's occurrences split the document into windows: each block's
/// terminator is searched for before the next occurrence of the same macro
/// (or the end of the document), so the ranges produced by successive
/// windows arrive sorted and disjoint.
pub fn strip_document(
	document: &Document,
	request: &StripRequest,
) -> CfgkillResult<StripOutcome> {
	let occurrences: Vec<Occurrence> = find_occurrences(document, &request.name).collect();

	if occurrences.is_empty() {
		return Ok(StripOutcome::NotFound);
	}

	let mut removed = Vec::new();
	for (position, occurrence) in occurrences.iter().enumerate() {
		let window_end = occurrences
			.get(position + 1)
			.map_or(document.len(), |next| next.line);
		let region = match_block(document, occurrence.line, window_end)?;
		removed.extend(select_deletions(region, occurrence.kind, request.mode));
	}

	Ok(StripOutcome::Stripped {
		document: document.without_ranges(&removed),
		removed,
		block_count: occurrences.len(),
	})
}

/// A computed file transform that has not yet been written.
#[derive(Debug)]
pub struct FileStrip {
	pub input: PathBuf,
	/// Where [`write_output`] will persist the result.
	pub output: PathBuf,
	/// The untouched input content, kept for diffing.
	pub original: String,
	pub outcome: StripOutcome,
}

impl FileStrip {
	/// The stripped content, or `None` for a [`StripOutcome::NotFound`].
	pub fn new_content(&self) -> Option<String> {
		match &self.outcome {
			StripOutcome::Stripped { document, .. } => Some(document.to_string()),
			StripOutcome::NotFound => None,
		}
	}
}

/// Read `path` and compute its strip, without writing anything. The output
/// path defaults to `<path>_out`.
pub fn strip_file(path: impl AsRef<Path>, request: &StripRequest) -> CfgkillResult<FileStrip> {
	let path = path.as_ref();
	let original = fs::read_to_string(path)?;
	let outcome = strip_document(&Document::parse(&original), request)?;

	Ok(FileStrip {
		input: path.to_path_buf(),
		output: default_output_path(path),
		original,
		outcome,
	})
}

/// Persist a computed strip to its output path, fully replacing any prior
/// content there. A `NotFound` outcome writes nothing and reports `false`.
pub fn write_output(strip: &FileStrip) -> CfgkillResult<bool> {
	match strip.new_content() {
		Some(content) => {
			fs::write(&strip.output, content)?;
			Ok(true)
		}
		None => Ok(false),
	}
}

/// The input path with `_out` appended, alongside the input file.
pub fn default_output_path(path: &Path) -> PathBuf {
	let mut output = path.as_os_str().to_os_string();
	output.push("_out");
	PathBuf::from(output)
}
