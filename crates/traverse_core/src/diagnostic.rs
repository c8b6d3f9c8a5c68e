use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::WireInt;
use crate::varint::MAX_VARINT_LEN;

/// One structural defect found while reading a value tree.
///
/// Readers never stop on these; they record the defect, leave the affected
/// destination unchanged, and carry on with the next value.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticKind {
	/// Input ended before an integer's final byte.
	#[error("not enough data to read integer at offset {at}")]
	TruncatedInteger {
		/// Offset of the integer's first byte.
		at: usize,
	},
	/// Every byte of a maximum-length integer had its continuation bit set.
	#[error("integer at offset {at} is longer than {max} bytes", max = MAX_VARINT_LEN)]
	OverlongInteger {
		/// Offset of the integer's first byte.
		at: usize,
	},
	/// Input ended inside a text value or its length prefix.
	#[error("{}", describe_text(.at, .expected, .actual))]
	TruncatedText {
		/// Offset of the length prefix.
		at: usize,
		/// Declared byte length, `None` when the prefix itself was cut off.
		expected: Option<u64>,
		/// Bytes actually available.
		actual: u64,
	},
	/// Text bytes were complete but not UTF-8.
	#[error("text at offset {at} is not valid UTF-8")]
	InvalidUtf8 {
		/// Offset of the length prefix.
		at: usize,
	},
	/// Input ended inside a sequence's element count.
	#[error("not enough data to read sequence count at offset {at}")]
	TruncatedSequenceCount {
		/// Offset of the count's first byte.
		at: usize,
	},
	/// Input ended before a sequence's declared element count was reached.
	#[error("expected {expected} elements in sequence but only found {actual}")]
	TruncatedSequenceElements {
		/// Declared element count.
		expected: u64,
		/// Elements decoded.
		actual: u64,
	},
	/// Bytes left over after a complete top-level value.
	#[error("{remaining} extra bytes in message")]
	ExtraTrailingBytes {
		/// Unread byte count.
		remaining: usize,
	},
	/// Integer did not name any declared enum variant.
	#[error("{value} is not a declared discriminant of {type_name}")]
	InvalidDiscriminant {
		/// Destination type.
		type_name: &'static str,
		/// Decoded integer.
		value: WireInt,
	},
	/// Value tree nested deeper than the configured limit; reading halted.
	#[error("nesting depth exceeded (max={max_depth})")]
	DepthExceeded {
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// JSON node had the wrong type for the destination.
	#[error("expected JSON {expected}; skipping")]
	JsonTypeMismatch {
		/// Expected JSON type name.
		expected: &'static str,
	},
	/// JSON object lacked a schema field.
	#[error("JSON object missing field {field}")]
	JsonMissingField {
		/// Missing field name.
		field: &'static str,
	},
}

fn describe_text(at: &usize, expected: &Option<u64>, actual: &u64) -> String {
	match expected {
		Some(expected) => format!("not enough data to read text at offset {at}: expected {expected} bytes, found {actual}"),
		None => format!("not enough data to read text length at offset {at}"),
	}
}

/// A defect plus the field path where it was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
	/// Dotted field path such as `Polygon.points[2].y`; empty at top level.
	pub path: String,
	/// What went wrong.
	pub kind: DiagnosticKind,
}

impl fmt::Display for Diagnostic {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.path.is_empty() {
			write!(f, "error: {}", self.kind)
		} else {
			write!(f, "error: {}: {}", self.path, self.kind)
		}
	}
}

/// Append-only log of decode defects. Empty means success.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Diagnostics {
	entries: Vec<Diagnostic>,
}

impl Diagnostics {
	/// Create an empty log.
	pub fn new() -> Self {
		Self::default()
	}

	/// Record a defect.
	pub fn push(&mut self, path: String, kind: DiagnosticKind) {
		tracing::debug!(path = %path, kind = %kind, "decode diagnostic");
		self.entries.push(Diagnostic { path, kind });
	}

	/// Whether no defect was recorded.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Number of recorded defects.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Iterate defects in the order they were found.
	pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
		self.entries.iter()
	}

	/// Whether any entry has the given kind.
	pub fn contains(&self, kind: &DiagnosticKind) -> bool {
		self.entries.iter().any(|entry| entry.kind == *kind)
	}

	/// Take the underlying entries.
	pub fn into_vec(self) -> Vec<Diagnostic> {
		self.entries
	}
}

impl<'a> IntoIterator for &'a Diagnostics {
	type Item = &'a Diagnostic;
	type IntoIter = std::slice::Iter<'a, Diagnostic>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.iter()
	}
}

impl fmt::Display for Diagnostics {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for entry in &self.entries {
			writeln!(f, "{entry}")?;
		}
		Ok(())
	}
}

#[derive(Debug, Clone, Copy)]
enum Segment {
	Root(&'static str),
	Field(&'static str),
	Index(u64),
}

/// Location of the value currently being read, for diagnostics.
#[derive(Debug, Clone, Default)]
pub(crate) struct FieldPath {
	segments: Vec<Segment>,
}

impl FieldPath {
	/// Name the top-level aggregate. Returns whether a segment was pushed.
	pub(crate) fn enter_root(&mut self, name: &'static str) -> bool {
		if !self.segments.is_empty() {
			return false;
		}
		self.segments.push(Segment::Root(name));
		true
	}

	pub(crate) fn enter_field(&mut self, name: &'static str) {
		self.segments.push(Segment::Field(name));
	}

	pub(crate) fn enter_index(&mut self, index: u64) {
		self.segments.push(Segment::Index(index));
	}

	pub(crate) fn leave(&mut self) {
		self.segments.pop();
	}

	pub(crate) fn render(&self) -> String {
		let mut out = String::new();
		for segment in &self.segments {
			match segment {
				Segment::Root(name) => out.push_str(name),
				Segment::Field(name) => {
					if !out.is_empty() {
						out.push('.');
					}
					out.push_str(name);
				}
				Segment::Index(index) => {
					out.push('[');
					out.push_str(&index.to_string());
					out.push(']');
				}
			}
		}
		out
	}
}
