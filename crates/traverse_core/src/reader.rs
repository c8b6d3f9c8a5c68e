use crate::diagnostic::FieldPath;
use crate::{Cursor, DiagnosticKind, Diagnostics, FieldVisitorMut, Primitive, Result, TraverseError, TraverseMut, VisitorMut, WireInt, varint};

/// Runtime limits and behavior switches for binary decoding.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
	/// Maximum nesting of sequences and aggregates before reading halts.
	///
	/// Sequences and aggregates each count as one level, so a recursive
	/// struct holding a `Vec` of itself gets about `max_depth / 2` levels.
	pub max_depth: u32,
	/// Block size used when copying text bytes out of the input.
	pub chunk_size: usize,
	/// Report leftover input after the top-level value as a defect.
	pub deny_trailing_bytes: bool,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self {
			max_depth: 128,
			chunk_size: 4096,
			deny_trailing_bytes: false,
		}
	}
}

impl DecodeOptions {
	/// Preset that also treats trailing bytes as a defect.
	pub fn strict() -> Self {
		Self {
			deny_trailing_bytes: true,
			..Self::default()
		}
	}
}

/// Deserializes the binary wire format into caller-owned values.
///
/// Structural defects never abort decoding. Each one is appended to the
/// diagnostics log, the affected destination is left unchanged, and reading
/// continues with the next value. An empty log after [`finish`](Self::finish)
/// is the only success signal.
///
/// Declared lengths and counts are never used as allocation sizes, so work
/// and memory stay proportional to the input length.
#[derive(Debug)]
pub struct BinaryReader<'a> {
	cursor: Cursor<'a>,
	options: DecodeOptions,
	diagnostics: Diagnostics,
	path: FieldPath,
	depth: u32,
	halted: bool,
}

impl<'a> BinaryReader<'a> {
	/// Create a reader with default options.
	pub fn new(bytes: &'a [u8]) -> Self {
		Self::with_options(bytes, DecodeOptions::default())
	}

	/// Create a reader with explicit options.
	pub fn with_options(bytes: &'a [u8], options: DecodeOptions) -> Self {
		Self {
			cursor: Cursor::new(bytes),
			options,
			diagnostics: Diagnostics::new(),
			path: FieldPath::default(),
			depth: 0,
			halted: false,
		}
	}

	/// Decode the next value into `value`.
	pub fn read<T: TraverseMut>(&mut self, value: &mut T) {
		value.traverse_mut(self);
	}

	/// Byte offset of the next read.
	pub fn position(&self) -> usize {
		self.cursor.pos()
	}

	/// Unread byte count.
	pub fn remaining(&self) -> usize {
		self.cursor.remaining()
	}

	/// Defects found so far.
	pub fn diagnostics(&self) -> &Diagnostics {
		&self.diagnostics
	}

	/// Whether no defect has been found so far.
	pub fn is_clean(&self) -> bool {
		self.diagnostics.is_empty()
	}

	/// Record leftover input as [`DiagnosticKind::ExtraTrailingBytes`] and
	/// skip it, so repeated calls report it once.
	pub fn check_trailing(&mut self) {
		let remaining = self.cursor.remaining();
		if remaining > 0 {
			self.diagnostics.push(String::new(), DiagnosticKind::ExtraTrailingBytes { remaining });
			self.cursor.skip_to_end();
		}
	}

	/// Finish reading and return the diagnostics log.
	pub fn finish(mut self) -> Diagnostics {
		if self.options.deny_trailing_bytes {
			self.check_trailing();
		}
		self.diagnostics
	}

	fn report(&mut self, kind: DiagnosticKind) {
		self.diagnostics.push(self.path.render(), kind);
	}

	fn enter_nested(&mut self) -> bool {
		if self.halted {
			return false;
		}
		if self.depth >= self.options.max_depth {
			self.report(DiagnosticKind::DepthExceeded {
				max_depth: self.options.max_depth,
			});
			self.halted = true;
			return false;
		}
		self.depth += 1;
		true
	}

	fn leave_nested(&mut self) {
		self.depth = self.depth.saturating_sub(1);
	}
}

/// Field context of [`BinaryReader`]. Keeps the diagnostic path and nesting
/// depth balanced when dropped.
pub struct BinaryFieldsMut<'r, 'a> {
	reader: &'r mut BinaryReader<'a>,
	active: bool,
	rooted: bool,
}

impl<'a> VisitorMut for BinaryReader<'a> {
	type Fields<'r>
		= BinaryFieldsMut<'r, 'a>
	where
		Self: 'r;

	fn visit_primitive<P: Primitive>(&mut self, value: &mut P) {
		if self.halted {
			return;
		}
		let raw = match varint::read_unsigned(&mut self.cursor) {
			Ok(raw) => raw,
			Err(kind) => return self.report(kind),
		};
		let wire = if P::SIGNED {
			WireInt::Signed(varint::unzigzag(raw))
		} else {
			WireInt::Unsigned(raw)
		};
		match P::from_wire(wire) {
			Some(decoded) => *value = decoded,
			None => self.report(DiagnosticKind::InvalidDiscriminant {
				type_name: std::any::type_name::<P>(),
				value: wire,
			}),
		}
	}

	fn visit_text(&mut self, value: &mut String) {
		if self.halted {
			return;
		}
		let at = self.cursor.pos();
		let expected = match varint::read_unsigned(&mut self.cursor) {
			Ok(len) => len,
			Err(DiagnosticKind::TruncatedInteger { .. }) => {
				return self.report(DiagnosticKind::TruncatedText {
					at,
					expected: None,
					actual: 0,
				});
			}
			Err(kind) => return self.report(kind),
		};

		let chunk_size = self.options.chunk_size.max(1);
		let mut bytes = Vec::new();
		let mut left = expected;
		while left > 0 {
			let want = usize::try_from(left).unwrap_or(usize::MAX).min(chunk_size);
			let chunk = self.cursor.read_up_to(want);
			bytes.extend_from_slice(chunk);
			left -= chunk.len() as u64;
			if chunk.len() < want {
				return self.report(DiagnosticKind::TruncatedText {
					at,
					expected: Some(expected),
					actual: bytes.len() as u64,
				});
			}
		}

		match String::from_utf8(bytes) {
			Ok(text) => *value = text,
			Err(_) => self.report(DiagnosticKind::InvalidUtf8 { at }),
		}
	}

	fn visit_sequence<T: TraverseMut + Default>(&mut self, elements: &mut Vec<T>) {
		if self.halted {
			return;
		}
		let at = self.cursor.pos();
		let expected = match varint::read_unsigned(&mut self.cursor) {
			Ok(count) => count,
			Err(DiagnosticKind::TruncatedInteger { .. }) => return self.report(DiagnosticKind::TruncatedSequenceCount { at }),
			Err(kind) => return self.report(kind),
		};
		if !self.enter_nested() {
			return;
		}

		elements.clear();
		let mut actual = 0_u64;
		while actual < expected && !self.cursor.is_empty() {
			let before = self.cursor.pos();
			let mut element = T::default();
			self.path.enter_index(actual);
			element.traverse_mut(self);
			self.path.leave();
			// An element that consumed nothing cannot be bounded by the input.
			if self.cursor.pos() == before {
				break;
			}
			elements.push(element);
			actual += 1;
		}
		self.leave_nested();

		if actual < expected && !self.halted {
			self.report(DiagnosticKind::TruncatedSequenceElements { expected, actual });
		}
	}

	fn begin_aggregate(&mut self, name: &'static str, _field_count: usize) -> Self::Fields<'_> {
		let active = self.enter_nested();
		let rooted = active && self.path.enter_root(name);
		BinaryFieldsMut { reader: self, active, rooted }
	}
}

impl FieldVisitorMut for BinaryFieldsMut<'_, '_> {
	fn field<T: TraverseMut>(&mut self, name: &'static str, value: &mut T) {
		if !self.active || self.reader.halted {
			return;
		}
		self.reader.path.enter_field(name);
		value.traverse_mut(self.reader);
		self.reader.path.leave();
	}
}

impl Drop for BinaryFieldsMut<'_, '_> {
	fn drop(&mut self) {
		if self.rooted {
			self.reader.path.leave();
		}
		if self.active {
			self.reader.leave_nested();
		}
	}
}

/// Decode `bytes` into `value` with default options and return every defect
/// found. `value` keeps whatever could be decoded.
pub fn decode_into<T: TraverseMut>(bytes: &[u8], value: &mut T) -> Diagnostics {
	let mut reader = BinaryReader::new(bytes);
	reader.read(value);
	reader.finish()
}

/// Decode a fresh `T`, failing if any defect was found.
pub fn from_bytes<T: TraverseMut + Default>(bytes: &[u8]) -> Result<T> {
	from_bytes_with_options(bytes, DecodeOptions::default())
}

/// [`from_bytes`] with explicit options.
pub fn from_bytes_with_options<T: TraverseMut + Default>(bytes: &[u8], options: DecodeOptions) -> Result<T> {
	let mut value = T::default();
	let mut reader = BinaryReader::with_options(bytes, options);
	reader.read(&mut value);
	let diagnostics = reader.finish();
	if diagnostics.is_empty() {
		return Ok(value);
	}
	tracing::warn!(count = diagnostics.len(), len = bytes.len(), "binary decode found defects");
	Err(TraverseError::Decode(diagnostics))
}
