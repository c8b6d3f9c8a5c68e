/// Simple bounded cursor over an immutable byte slice.
///
/// Reads never fail: short reads return whatever is left and the caller
/// decides whether that is a defect.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
	bytes: &'a [u8],
	pos: usize,
}

impl<'a> Cursor<'a> {
	/// Create a cursor at position 0.
	pub fn new(bytes: &'a [u8]) -> Self {
		Self { bytes, pos: 0 }
	}

	/// Return current byte offset.
	pub fn pos(&self) -> usize {
		self.pos
	}

	/// Return remaining unread bytes.
	pub fn remaining(&self) -> usize {
		self.bytes.len().saturating_sub(self.pos)
	}

	/// Whether every byte has been consumed.
	pub fn is_empty(&self) -> bool {
		self.remaining() == 0
	}

	/// Read one byte, or `None` at end of input.
	pub fn read_byte(&mut self) -> Option<u8> {
		let byte = self.bytes.get(self.pos).copied()?;
		self.pos += 1;
		Some(byte)
	}

	/// Read at most `n` bytes and advance past them.
	pub fn read_up_to(&mut self, n: usize) -> &'a [u8] {
		let take = n.min(self.remaining());
		let start = self.pos;
		self.pos += take;
		&self.bytes[start..self.pos]
	}

	/// Move past every remaining byte.
	pub fn skip_to_end(&mut self) {
		self.pos = self.bytes.len();
	}
}

#[cfg(test)]
mod tests;
