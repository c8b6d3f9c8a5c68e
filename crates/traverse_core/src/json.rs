//! JSON adapter over [`serde_json::Value`].
//!
//! Aggregates become objects keyed by field name, sequences become arrays,
//! text becomes strings, and every primitive (enums and `bool` included)
//! becomes a number. Object keys come out sorted.

use serde_json::{Map, Value};

use crate::diagnostic::FieldPath;
use crate::{DiagnosticKind, Diagnostics, FieldVisitor, FieldVisitorMut, Primitive, Result, Traverse, TraverseError, TraverseMut, Visitor, VisitorMut, WireInt};

/// Builds a JSON document from a value tree.
#[derive(Debug, Default)]
pub struct JsonWriter {
	out: Value,
}

impl JsonWriter {
	/// Create a writer holding `null`.
	pub fn new() -> Self {
		Self::default()
	}

	/// Replace the held document with the rendering of `value`.
	pub fn write<T: Traverse + ?Sized>(&mut self, value: &T) {
		value.traverse(self);
	}

	/// Take the built document.
	pub fn finish(self) -> Value {
		self.out
	}

	fn render<T: Traverse + ?Sized>(value: &T) -> Value {
		let mut child = Self::new();
		child.write(value);
		child.finish()
	}
}

/// Field context of [`JsonWriter`]; stores the object when dropped.
pub struct JsonFields<'w> {
	writer: &'w mut JsonWriter,
	object: Map<String, Value>,
}

impl Visitor for JsonWriter {
	type Fields<'a>
		= JsonFields<'a>
	where
		Self: 'a;

	fn visit_primitive<P: Primitive>(&mut self, value: P) {
		self.out = match value.to_wire() {
			WireInt::Unsigned(value) => Value::from(value),
			WireInt::Signed(value) => Value::from(value),
		};
	}

	fn visit_text(&mut self, value: &str) {
		self.out = Value::String(value.to_owned());
	}

	fn visit_sequence<T: Traverse>(&mut self, elements: &[T]) {
		self.out = Value::Array(elements.iter().map(Self::render).collect());
	}

	fn begin_aggregate(&mut self, _name: &'static str, _field_count: usize) -> Self::Fields<'_> {
		JsonFields {
			writer: self,
			object: Map::new(),
		}
	}
}

impl FieldVisitor for JsonFields<'_> {
	fn field<T: Traverse + ?Sized>(&mut self, name: &'static str, value: &T) {
		self.object.insert(name.to_owned(), JsonWriter::render(value));
	}
}

impl Drop for JsonFields<'_> {
	fn drop(&mut self) {
		self.writer.out = Value::Object(std::mem::take(&mut self.object));
	}
}

/// Fills a value tree from a JSON document.
///
/// Follows the same contract as the binary reader: a node of the wrong JSON
/// type or a missing object key is logged and the destination keeps its
/// previous contents. Unknown keys are ignored.
#[derive(Debug)]
pub struct JsonReader<'v> {
	node: &'v Value,
	diagnostics: Diagnostics,
	path: FieldPath,
}

impl<'v> JsonReader<'v> {
	/// Create a reader positioned at the document root.
	pub fn new(document: &'v Value) -> Self {
		Self {
			node: document,
			diagnostics: Diagnostics::new(),
			path: FieldPath::default(),
		}
	}

	/// Fill `value` from the document root.
	pub fn read<T: TraverseMut>(&mut self, value: &mut T) {
		value.traverse_mut(self);
	}

	/// Defects recorded so far.
	pub fn diagnostics(&self) -> &Diagnostics {
		&self.diagnostics
	}

	/// Return the diagnostics log.
	pub fn finish(self) -> Diagnostics {
		self.diagnostics
	}

	fn report(&mut self, kind: DiagnosticKind) {
		self.diagnostics.push(self.path.render(), kind);
	}

	fn descend<T: TraverseMut>(&mut self, node: &'v Value, value: &mut T) {
		let parent = std::mem::replace(&mut self.node, node);
		value.traverse_mut(self);
		self.node = parent;
	}
}

/// Field context of [`JsonReader`].
pub struct JsonFieldsMut<'r, 'v> {
	reader: &'r mut JsonReader<'v>,
	object: Option<&'v Map<String, Value>>,
	rooted: bool,
}

impl<'v> VisitorMut for JsonReader<'v> {
	type Fields<'r>
		= JsonFieldsMut<'r, 'v>
	where
		Self: 'r;

	fn visit_primitive<P: Primitive>(&mut self, value: &mut P) {
		let node: &'v Value = self.node;
		let wire = if P::SIGNED {
			node.as_i64().map(WireInt::Signed)
		} else {
			node.as_u64().map(WireInt::Unsigned)
		};
		let Some(wire) = wire else {
			let expected = if P::SIGNED { "integer" } else { "unsigned integer" };
			return self.report(DiagnosticKind::JsonTypeMismatch { expected });
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
		let node: &'v Value = self.node;
		match node.as_str() {
			Some(text) => text.clone_into(value),
			None => self.report(DiagnosticKind::JsonTypeMismatch { expected: "string" }),
		}
	}

	fn visit_sequence<T: TraverseMut + Default>(&mut self, elements: &mut Vec<T>) {
		let node: &'v Value = self.node;
		let Some(items) = node.as_array() else {
			return self.report(DiagnosticKind::JsonTypeMismatch { expected: "array" });
		};
		elements.clear();
		for (index, item) in items.iter().enumerate() {
			let mut element = T::default();
			self.path.enter_index(index as u64);
			self.descend(item, &mut element);
			self.path.leave();
			elements.push(element);
		}
	}

	fn begin_aggregate(&mut self, name: &'static str, _field_count: usize) -> Self::Fields<'_> {
		let node: &'v Value = self.node;
		let object = node.as_object();
		if object.is_none() {
			self.report(DiagnosticKind::JsonTypeMismatch { expected: "object" });
		}
		let rooted = self.path.enter_root(name);
		JsonFieldsMut { reader: self, object, rooted }
	}
}

impl FieldVisitorMut for JsonFieldsMut<'_, '_> {
	fn field<T: TraverseMut>(&mut self, name: &'static str, value: &mut T) {
		let Some(object) = self.object else {
			return;
		};
		match object.get(name) {
			Some(child) => {
				self.reader.path.enter_field(name);
				self.reader.descend(child, value);
				self.reader.path.leave();
			}
			None => self.reader.report(DiagnosticKind::JsonMissingField { field: name }),
		}
	}
}

impl Drop for JsonFieldsMut<'_, '_> {
	fn drop(&mut self) {
		if self.rooted {
			self.reader.path.leave();
		}
	}
}

/// Render `value` as a JSON document.
pub fn to_json<T: Traverse + ?Sized>(value: &T) -> Value {
	JsonWriter::render(value)
}

/// Render `value` as compact JSON text.
pub fn to_json_string<T: Traverse + ?Sized>(value: &T) -> Result<String> {
	Ok(serde_json::to_string(&to_json(value))?)
}

/// Fill `value` from `document` and return every defect found.
pub fn from_json<T: TraverseMut>(document: &Value, value: &mut T) -> Diagnostics {
	let mut reader = JsonReader::new(document);
	reader.read(value);
	reader.finish()
}

/// Parse JSON text into a fresh `T`, failing on any defect.
pub fn from_json_str<T: TraverseMut + Default>(text: &str) -> Result<T> {
	let document: Value = serde_json::from_str(text)?;
	let mut value = T::default();
	let diagnostics = from_json(&document, &mut value);
	if diagnostics.is_empty() {
		return Ok(value);
	}
	tracing::warn!(count = diagnostics.len(), "json decode found defects");
	Err(TraverseError::Decode(diagnostics))
}

#[cfg(test)]
mod tests;
