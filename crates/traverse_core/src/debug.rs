use std::fmt;

use crate::{FieldVisitor, Primitive, Traverse, Visitor, WireInt};

/// Output truncation limits for the debug printer.
#[derive(Debug, Clone, Copy)]
pub struct PrintOptions {
	/// Maximum number of elements printed for a sequence.
	pub max_sequence_items: usize,
	/// Maximum number of Unicode scalar values printed for text.
	pub max_text_len: usize,
}

impl Default for PrintOptions {
	fn default() -> Self {
		Self {
			max_sequence_items: usize::MAX,
			max_text_len: usize::MAX,
		}
	}
}

impl PrintOptions {
	/// Preset for one-line log output.
	pub fn compact() -> Self {
		Self {
			max_sequence_items: 16,
			max_text_len: 200,
		}
	}
}

/// Renders a value tree as one line of text:
/// `Polygon{color:1, name:"UFO", points:[Point{x:3, y:5}]}`.
#[derive(Debug, Default)]
pub struct DebugWriter {
	out: String,
	options: PrintOptions,
}

impl DebugWriter {
	/// Create a printer without truncation.
	pub fn new() -> Self {
		Self::default()
	}

	/// Create a printer with explicit limits.
	pub fn with_options(options: PrintOptions) -> Self {
		Self { out: String::new(), options }
	}

	/// Append the rendering of `value`.
	pub fn write<T: Traverse + ?Sized>(&mut self, value: &T) {
		value.traverse(self);
	}

	/// Take the rendered text.
	pub fn finish(self) -> String {
		self.out
	}
}

/// Field context of [`DebugWriter`]; writes the closing brace when dropped.
pub struct DebugFields<'w> {
	writer: &'w mut DebugWriter,
	first: bool,
}

impl Visitor for DebugWriter {
	type Fields<'a>
		= DebugFields<'a>
	where
		Self: 'a;

	fn visit_primitive<P: Primitive>(&mut self, value: P) {
		match value.to_wire() {
			WireInt::Unsigned(value) => self.out.push_str(&value.to_string()),
			WireInt::Signed(value) => self.out.push_str(&value.to_string()),
		}
	}

	fn visit_text(&mut self, value: &str) {
		if value.chars().count() <= self.options.max_text_len {
			self.out.push_str(&format!("{value:?}"));
			return;
		}
		let head: String = value.chars().take(self.options.max_text_len).collect();
		self.out.push_str(&format!("{head:?}..."));
	}

	fn visit_sequence<T: Traverse>(&mut self, elements: &[T]) {
		self.out.push('[');
		for (index, element) in elements.iter().take(self.options.max_sequence_items).enumerate() {
			if index != 0 {
				self.out.push_str(", ");
			}
			element.traverse(self);
		}
		if elements.len() > self.options.max_sequence_items {
			let more = elements.len() - self.options.max_sequence_items;
			if self.options.max_sequence_items != 0 {
				self.out.push_str(", ");
			}
			self.out.push_str(&format!("... {more} more"));
		}
		self.out.push(']');
	}

	fn begin_aggregate(&mut self, name: &'static str, _field_count: usize) -> Self::Fields<'_> {
		self.out.push_str(name);
		self.out.push('{');
		DebugFields { writer: self, first: true }
	}
}

impl FieldVisitor for DebugFields<'_> {
	fn field<T: Traverse + ?Sized>(&mut self, name: &'static str, value: &T) {
		if !self.first {
			self.writer.out.push_str(", ");
		}
		self.first = false;
		self.writer.out.push_str(name);
		self.writer.out.push(':');
		value.traverse(self.writer);
	}
}

impl Drop for DebugFields<'_> {
	fn drop(&mut self) {
		self.writer.out.push('}');
	}
}

/// Render `value` on one line without truncation.
pub fn to_debug_string<T: Traverse + ?Sized>(value: &T) -> String {
	let mut writer = DebugWriter::new();
	writer.write(value);
	writer.finish()
}

/// Adapter that formats any [`Traverse`] value through [`DebugWriter`].
///
/// ```
/// use traverse::{Show, traverse_struct};
///
/// struct Size {
/// 	w: u32,
/// 	h: u32,
/// }
/// traverse_struct!(Size { w, h });
///
/// assert_eq!(format!("{}", Show(&Size { w: 4, h: 2 })), "Size{w:4, h:2}");
/// ```
pub struct Show<'a, T: ?Sized>(pub &'a T);

impl<T: Traverse + ?Sized> fmt::Display for Show<'_, T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&to_debug_string(self.0))
	}
}
