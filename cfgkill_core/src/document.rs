use std::fmt::Display;
use std::fs;
use std::path::Path;

use derive_more::Deref;
use derive_more::DerefMut;

use crate::CfgkillResult;

/// A source file as an ordered sequence of lines.
///
/// Each line retains its original terminator (`\n` or `\r\n`); the final
/// line may be unterminated. [`Display`] reproduces the parsed input
/// byte-for-byte, so a parse/serialize round trip is lossless.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deref, DerefMut)]
pub struct Document(
	#[deref]
	#[deref_mut]
	Vec<String>,
);

impl Document {
	/// Split `content` into terminator-preserving lines.
	pub fn parse(content: impl AsRef<str>) -> Self {
		let lines = content
			.as_ref()
			.split_inclusive('\n')
			.map(String::from)
			.collect();
		Self(lines)
	}

	/// Read and parse a file in one step.
	pub fn read(path: impl AsRef<Path>) -> CfgkillResult<Self> {
		Ok(Self::parse(fs::read_to_string(path)?))
	}

	pub fn from_lines(lines: Vec<String>) -> Self {
		Self(lines)
	}

	/// Rebuild the document with every line covered by `ranges` removed,
	/// preserving the relative order of the survivors.
	///
	/// `ranges` must be sorted by `lo` and non-overlapping.
	pub fn without_ranges(&self, ranges: &[DeletionRange]) -> Self {
		let mut lines = Vec::with_capacity(self.len());
		let mut next = 0;

		for range in ranges {
			lines.extend_from_slice(&self.0[next..range.lo]);
			next = range.hi + 1;
		}
		if next < self.len() {
			lines.extend_from_slice(&self.0[next..]);
		}

		Self(lines)
	}
}

impl Display for Document {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		for line in &self.0 {
			write!(f, "{line}")?;
		}
		Ok(())
	}
}

/// An inclusive range of line indices to remove from a document.
///
/// Multiple ranges for the same document are non-overlapping and applied in
/// ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeletionRange {
	/// First removed line index.
	pub lo: usize,
	/// Last removed line index, `lo <= hi`.
	pub hi: usize,
}

impl DeletionRange {
	pub fn new(lo: usize, hi: usize) -> Self {
		debug_assert!(lo <= hi);
		Self { lo, hi }
	}

	/// A range covering exactly one line.
	pub fn single(index: usize) -> Self {
		Self {
			lo: index,
			hi: index,
		}
	}

	pub fn contains(&self, index: usize) -> bool {
		self.lo <= index && index <= self.hi
	}

	/// Number of lines removed by this range, always at least 1.
	pub fn line_count(&self) -> usize {
		self.hi - self.lo + 1
	}
}
