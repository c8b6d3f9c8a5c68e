//! Unsigned integers are written as little-endian groups of 7 bits, the high
//! bit of each byte set while more groups follow. Signed integers go through
//! the zigzag map first so small negative values stay short.

use crate::{Cursor, DiagnosticKind};

/// Longest valid encoding of a 64-bit value.
pub const MAX_VARINT_LEN: usize = 10;

/// Map a signed value onto the unsigned range: `0, -1, 1, -2, ...` become `0, 1, 2, 3, ...`.
#[inline]
pub fn zigzag(value: i64) -> u64 {
	((value << 1) ^ (value >> 63)) as u64
}

/// Inverse of [`zigzag`].
#[inline]
pub fn unzigzag(value: u64) -> i64 {
	((value >> 1) as i64) ^ -((value & 1) as i64)
}

/// Number of bytes [`write_unsigned`] emits for `value`.
pub fn encoded_len(value: u64) -> usize {
	let bits = 64 - value.leading_zeros() as usize;
	bits.div_ceil(7).max(1)
}

/// Append the varint encoding of `value`.
pub fn write_unsigned(out: &mut Vec<u8>, mut value: u64) {
	loop {
		let byte = (value & 0x7f) as u8;
		value >>= 7;
		if value == 0 {
			out.push(byte);
			return;
		}
		out.push(byte | 0x80);
	}
}

/// Append the zigzag varint encoding of `value`.
pub fn write_signed(out: &mut Vec<u8>, value: i64) {
	write_unsigned(out, zigzag(value));
}

/// Decode one unsigned varint.
///
/// Reads at most [`MAX_VARINT_LEN`] bytes. Payload bits past bit 63 in the
/// final byte are dropped.
pub fn read_unsigned(cursor: &mut Cursor<'_>) -> Result<u64, DiagnosticKind> {
	let at = cursor.pos();
	let mut result = 0_u64;
	let mut shift = 0_u32;
	for _ in 0..MAX_VARINT_LEN {
		let Some(byte) = cursor.read_byte() else {
			return Err(DiagnosticKind::TruncatedInteger { at });
		};
		result |= u64::from(byte & 0x7f) << shift;
		if byte & 0x80 == 0 {
			return Ok(result);
		}
		shift += 7;
	}
	Err(DiagnosticKind::OverlongInteger { at })
}

/// Decode one zigzag varint.
pub fn read_signed(cursor: &mut Cursor<'_>) -> Result<i64, DiagnosticKind> {
	read_unsigned(cursor).map(unzigzag)
}
