//! Static dispatch from a value's shape to an operation's handler.
//!
//! A value tree is made of four node kinds: primitives, text, sequences, and
//! aggregates. An operation implements one handler per kind ([`Visitor`] for
//! operations that only read the tree, [`VisitorMut`] for ones that fill it
//! in), and each type picks its kind by implementing [`Traverse`] /
//! [`TraverseMut`]. Leaving out a handler or a type impl is a compile error,
//! never a silent no-op.
//!
//! Recursion depth follows the depth of the value tree. Readers of untrusted
//! input cap it with [`DecodeOptions::max_depth`](crate::DecodeOptions).

use crate::{Aggregate, FieldVisitor, FieldVisitorMut, Primitive};

/// Read-only operation over a borrowed value tree.
pub trait Visitor {
	/// Context that receives an aggregate's fields. Dropping it closes the
	/// aggregate, so it runs on every exit path.
	type Fields<'a>: FieldVisitor
	where
		Self: 'a;

	/// Handle an integer or enum leaf.
	fn visit_primitive<P: Primitive>(&mut self, value: P);

	/// Handle a text leaf.
	fn visit_text(&mut self, value: &str);

	/// Handle a variable-length list; elements are visited with `T`'s own dispatch.
	fn visit_sequence<T: Traverse>(&mut self, elements: &[T]);

	/// Open an aggregate named `name` with `field_count` schema fields.
	fn begin_aggregate(&mut self, name: &'static str, field_count: usize) -> Self::Fields<'_>;
}

/// Operation that writes into a caller-owned value tree, such as a decoder.
pub trait VisitorMut {
	/// Context that receives an aggregate's fields. Dropping it closes the
	/// aggregate, so it runs on every exit path.
	type Fields<'a>: FieldVisitorMut
	where
		Self: 'a;

	/// Fill an integer or enum leaf.
	fn visit_primitive<P: Primitive>(&mut self, value: &mut P);

	/// Fill a text leaf.
	fn visit_text(&mut self, value: &mut String);

	/// Fill a variable-length list, creating elements with `T::default()`.
	fn visit_sequence<T: TraverseMut + Default>(&mut self, elements: &mut Vec<T>);

	/// Open an aggregate named `name` with `field_count` schema fields.
	fn begin_aggregate(&mut self, name: &'static str, field_count: usize) -> Self::Fields<'_>;
}

/// A type that can be walked by any [`Visitor`].
pub trait Traverse {
	/// Route `self` to the handler for its node kind.
	fn traverse<V: Visitor>(&self, visitor: &mut V);
}

/// A type that can be filled in by any [`VisitorMut`].
pub trait TraverseMut {
	/// Route `self` to the handler for its node kind.
	fn traverse_mut<V: VisitorMut>(&mut self, visitor: &mut V);
}

/// Walk an aggregate: open its context, visit every schema field in order,
/// then close the context.
pub fn visit_aggregate<A: Aggregate + ?Sized, V: Visitor>(value: &A, visitor: &mut V) {
	let mut fields = visitor.begin_aggregate(A::NAME, A::FIELDS.len());
	value.walk_fields(&mut fields);
}

/// Mutable counterpart of [`visit_aggregate`].
pub fn visit_aggregate_mut<A: Aggregate + ?Sized, V: VisitorMut>(value: &mut A, visitor: &mut V) {
	let mut fields = visitor.begin_aggregate(A::NAME, A::FIELDS.len());
	value.walk_fields_mut(&mut fields);
}

macro_rules! primitive_traverse {
	($($ty:ty),*) => {$(
		impl Traverse for $ty {
			#[inline]
			fn traverse<V: Visitor>(&self, visitor: &mut V) {
				visitor.visit_primitive(*self);
			}
		}

		impl TraverseMut for $ty {
			#[inline]
			fn traverse_mut<V: VisitorMut>(&mut self, visitor: &mut V) {
				visitor.visit_primitive(self);
			}
		}
	)*};
}

primitive_traverse!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, bool);

impl Traverse for str {
	fn traverse<V: Visitor>(&self, visitor: &mut V) {
		visitor.visit_text(self);
	}
}

impl Traverse for String {
	fn traverse<V: Visitor>(&self, visitor: &mut V) {
		visitor.visit_text(self);
	}
}

impl TraverseMut for String {
	fn traverse_mut<V: VisitorMut>(&mut self, visitor: &mut V) {
		visitor.visit_text(self);
	}
}

impl<T: Traverse> Traverse for Vec<T> {
	fn traverse<V: Visitor>(&self, visitor: &mut V) {
		visitor.visit_sequence(self);
	}
}

impl<T: TraverseMut + Default> TraverseMut for Vec<T> {
	fn traverse_mut<V: VisitorMut>(&mut self, visitor: &mut V) {
		visitor.visit_sequence(self);
	}
}
