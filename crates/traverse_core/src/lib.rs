//! Declare how to walk a type's fields once, then reuse that declaration for
//! every operation: binary encode/decode, debug printing, and JSON conversion.
//!
//! ```
//! use traverse::{from_bytes, to_bytes, to_debug_string, traverse_struct};
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Point {
//! 	x: i32,
//! 	y: i32,
//! }
//! traverse_struct!(Point { x, y });
//!
//! let bytes = to_bytes(&Point { x: 3, y: -1 });
//! assert_eq!(bytes, [6, 1]);
//! assert_eq!(from_bytes::<Point>(&bytes).expect("clean decode"), Point { x: 3, y: -1 });
//! assert_eq!(to_debug_string(&Point { x: 3, y: -1 }), "Point{x:3, y:-1}");
//! ```

mod cursor;
mod debug;
mod diagnostic;
mod error;
mod json;
mod reader;
mod schema;
mod visit;
mod writer;

/// Variable-length integer and zigzag codec.
pub mod varint;

/// Bounded read cursor used by the binary reader.
pub use cursor::Cursor;
/// Plain-text debug printer.
pub use debug::{DebugWriter, PrintOptions, Show, to_debug_string};
/// Decode diagnostics log.
pub use diagnostic::{Diagnostic, DiagnosticKind, Diagnostics};
/// Error and result aliases.
pub use error::{Result, TraverseError};
/// JSON tree adapter.
pub use json::{JsonReader, JsonWriter, from_json, from_json_str, to_json, to_json_string};
/// Binary decoder and decode entry points.
pub use reader::{BinaryReader, DecodeOptions, decode_into, from_bytes, from_bytes_with_options};
/// Schema declaration types.
pub use schema::{Aggregate, FieldVisitor, FieldVisitorMut, Primitive, WireInt};
/// Traversal dispatch protocol.
pub use visit::{Traverse, TraverseMut, Visitor, VisitorMut, visit_aggregate, visit_aggregate_mut};
/// Binary encoder and encode entry points.
pub use writer::{BinaryWriter, to_bytes, to_writer};
