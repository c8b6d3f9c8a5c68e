use thiserror::Error;

use crate::Diagnostics;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, TraverseError>;

/// Errors surfaced by the strict entry points.
///
/// Visitors themselves never fail; readers collect [`Diagnostics`] instead.
/// This type is what the convenience functions return when the caller asked
/// for all-or-nothing behavior.
#[derive(Debug, Error)]
pub enum TraverseError {
	/// Output sink failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// JSON text could not be parsed or printed.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Decoding found at least one defect.
	#[error("decode found {count} defect(s):\n{0}", count = .0.len())]
	Decode(Diagnostics),
}
