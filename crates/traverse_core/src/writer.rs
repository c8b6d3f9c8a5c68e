use std::io::Write;

use crate::{FieldVisitor, Primitive, Result, Traverse, Visitor, WireInt, varint};

/// Serializes value trees into the binary wire format.
///
/// - primitive: varint, zigzag for signed types
/// - text: varint byte length, then the raw bytes
/// - sequence: varint element count, then each element
/// - aggregate: fields back to back in schema order, no framing
///
/// Writing cannot fail; the buffer grows as needed.
#[derive(Debug, Default)]
pub struct BinaryWriter {
	buf: Vec<u8>,
}

impl BinaryWriter {
	/// Create an empty writer.
	#[must_use]
	pub fn new() -> Self {
		Self::with_capacity(32)
	}

	/// Create an empty writer with room for `capacity` bytes.
	#[must_use]
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			buf: Vec::with_capacity(capacity),
		}
	}

	/// Append the encoding of `value`.
	pub fn write<T: Traverse + ?Sized>(&mut self, value: &T) {
		value.traverse(self);
	}

	/// Append an unsigned varint.
	#[inline]
	pub fn push_unsigned(&mut self, value: u64) {
		varint::write_unsigned(&mut self.buf, value);
	}

	/// Append a zigzag varint.
	#[inline]
	pub fn push_signed(&mut self, value: i64) {
		varint::write_signed(&mut self.buf, value);
	}

	/// Append a length-prefixed byte string.
	#[inline]
	pub fn push_text(&mut self, bytes: &[u8]) {
		self.push_unsigned(bytes.len() as u64);
		self.buf.extend_from_slice(bytes);
	}

	/// Bytes written so far.
	#[inline]
	#[must_use]
	pub fn as_bytes(&self) -> &[u8] {
		&self.buf
	}

	/// Number of bytes written so far.
	#[inline]
	#[must_use]
	pub fn len(&self) -> usize {
		self.buf.len()
	}

	/// Whether nothing has been written.
	#[inline]
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.buf.is_empty()
	}

	/// Take the encoded bytes.
	#[inline]
	#[must_use]
	pub fn finalize(self) -> Vec<u8> {
		self.buf
	}
}

/// Field context of [`BinaryWriter`]. Aggregates carry no framing, so
/// opening and closing write nothing.
pub struct BinaryFields<'w> {
	writer: &'w mut BinaryWriter,
}

impl Visitor for BinaryWriter {
	type Fields<'a>
		= BinaryFields<'a>
	where
		Self: 'a;

	fn visit_primitive<P: Primitive>(&mut self, value: P) {
		match value.to_wire() {
			WireInt::Unsigned(value) => self.push_unsigned(value),
			WireInt::Signed(value) => self.push_signed(value),
		}
	}

	fn visit_text(&mut self, value: &str) {
		self.push_text(value.as_bytes());
	}

	fn visit_sequence<T: Traverse>(&mut self, elements: &[T]) {
		self.push_unsigned(elements.len() as u64);
		for element in elements {
			element.traverse(self);
		}
	}

	fn begin_aggregate(&mut self, _name: &'static str, _field_count: usize) -> Self::Fields<'_> {
		BinaryFields { writer: self }
	}
}

impl FieldVisitor for BinaryFields<'_> {
	fn field<T: Traverse + ?Sized>(&mut self, _name: &'static str, value: &T) {
		value.traverse(self.writer);
	}
}

/// Encode `value` into a new buffer.
pub fn to_bytes<T: Traverse + ?Sized>(value: &T) -> Vec<u8> {
	let mut writer = BinaryWriter::new();
	writer.write(value);
	writer.finalize()
}

/// Encode `value` and write it to `sink`. Only the sink can fail.
pub fn to_writer<T: Traverse + ?Sized, W: Write>(value: &T, mut sink: W) -> Result<()> {
	sink.write_all(&to_bytes(value))?;
	Ok(())
}

#[cfg(test)]
mod tests;
