use std::fmt;

use serde::Serialize;

use crate::{Traverse, TraverseMut};

/// Width-independent integer as it travels on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum WireInt {
	/// Value of an unsigned primitive, written as a plain varint.
	Unsigned(u64),
	/// Value of a signed primitive, written as a zigzag varint.
	Signed(i64),
}

impl fmt::Display for WireInt {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			WireInt::Unsigned(value) => write!(f, "{value}"),
			WireInt::Signed(value) => write!(f, "{value}"),
		}
	}
}

/// Fixed-width integer leaf of a value tree.
///
/// Conversions out of [`WireInt`] truncate to the destination width
/// (`value mod 2^W`), matching an `as` cast. An unsigned destination keeps
/// the raw zigzag code of a signed source; only the schema on both ends
/// decides how a value is interpreted.
pub trait Primitive: Copy {
	/// Whether values use the zigzag encoding.
	const SIGNED: bool;

	/// Widen to the wire representation.
	fn to_wire(self) -> WireInt;

	/// Narrow from the wire representation. `None` means the integer is not a
	/// valid value of this type (only enumerations reject values).
	fn from_wire(wire: WireInt) -> Option<Self>;
}

macro_rules! unsigned_primitive {
	($($ty:ty),*) => {$(
		impl Primitive for $ty {
			const SIGNED: bool = false;

			#[inline]
			fn to_wire(self) -> WireInt {
				WireInt::Unsigned(self as u64)
			}

			#[inline]
			fn from_wire(wire: WireInt) -> Option<Self> {
				Some(match wire {
					WireInt::Unsigned(value) => value as $ty,
					WireInt::Signed(value) => value as $ty,
				})
			}
		}
	)*};
}

macro_rules! signed_primitive {
	($($ty:ty),*) => {$(
		impl Primitive for $ty {
			const SIGNED: bool = true;

			#[inline]
			fn to_wire(self) -> WireInt {
				WireInt::Signed(self as i64)
			}

			#[inline]
			fn from_wire(wire: WireInt) -> Option<Self> {
				Some(match wire {
					WireInt::Unsigned(value) => value as $ty,
					WireInt::Signed(value) => value as $ty,
				})
			}
		}
	)*};
}

unsigned_primitive!(u8, u16, u32, u64, usize);
signed_primitive!(i8, i16, i32, i64, isize);

impl Primitive for bool {
	const SIGNED: bool = false;

	fn to_wire(self) -> WireInt {
		WireInt::Unsigned(u64::from(self))
	}

	fn from_wire(wire: WireInt) -> Option<Self> {
		Some(match wire {
			WireInt::Unsigned(value) => value != 0,
			WireInt::Signed(value) => value != 0,
		})
	}
}

/// Struct-like node: a fixed, ordered list of named fields.
///
/// The field list is the type's schema. It is declared once, usually with
/// [`traverse_struct!`](crate::traverse_struct), and every operation walks
/// it in the same order. The binary format does not carry names or counts,
/// so both ends must agree on it.
pub trait Aggregate {
	/// Type name shown by printers and diagnostics.
	const NAME: &'static str;
	/// Field names in walk order.
	const FIELDS: &'static [&'static str];

	/// Hand each field to `fields`, in [`Self::FIELDS`] order.
	fn walk_fields<F: FieldVisitor>(&self, fields: &mut F);

	/// Hand each field to `fields` for in-place update, in [`Self::FIELDS`] order.
	fn walk_fields_mut<F: FieldVisitorMut>(&mut self, fields: &mut F);
}

/// Receives an aggregate's fields for a read-only operation.
pub trait FieldVisitor {
	/// Visit one named field.
	fn field<T: Traverse + ?Sized>(&mut self, name: &'static str, value: &T);
}

/// Receives an aggregate's fields for an updating operation.
pub trait FieldVisitorMut {
	/// Visit one named field.
	fn field<T: TraverseMut>(&mut self, name: &'static str, value: &mut T);
}

/// Declare the field schema of a struct.
///
/// Implements [`Aggregate`], [`Traverse`] and [`TraverseMut`]. Invoke it in
/// the module that defines the struct so private fields are reachable.
///
/// A struct with no fields encodes to zero bytes, so a `Vec` of them does
/// not decode: the reader stops a sequence at the first element that
/// consumes no input.
///
/// ```
/// #[derive(Default)]
/// struct Point {
/// 	x: i32,
/// 	y: i32,
/// }
/// traverse::traverse_struct!(Point { x, y });
///
/// assert_eq!(<Point as traverse::Aggregate>::FIELDS, ["x", "y"]);
/// ```
#[macro_export]
macro_rules! traverse_struct {
	($name:ident { $($field:ident),* $(,)? }) => {
		impl $crate::Aggregate for $name {
			const NAME: &'static str = stringify!($name);
			const FIELDS: &'static [&'static str] = &[$(stringify!($field)),*];

			#[allow(unused_variables)]
			fn walk_fields<F: $crate::FieldVisitor>(&self, fields: &mut F) {
				$(fields.field(stringify!($field), &self.$field);)*
			}

			#[allow(unused_variables)]
			fn walk_fields_mut<F: $crate::FieldVisitorMut>(&mut self, fields: &mut F) {
				$(fields.field(stringify!($field), &mut self.$field);)*
			}
		}

		impl $crate::Traverse for $name {
			fn traverse<V: $crate::Visitor>(&self, visitor: &mut V) {
				$crate::visit_aggregate(self, visitor);
			}
		}

		impl $crate::TraverseMut for $name {
			fn traverse_mut<V: $crate::VisitorMut>(&mut self, visitor: &mut V) {
				$crate::visit_aggregate_mut(self, visitor);
			}
		}
	};
}

/// Declare a fieldless enum as a [`Primitive`] of its underlying integer.
///
/// The enum must be `Copy` and castable to `repr`. Decoding an integer that
/// names no listed variant is reported instead of producing a value.
///
/// ```
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// #[repr(u8)]
/// enum Color {
/// 	Red = 0,
/// 	Blue = 1,
/// }
/// traverse::traverse_enum!(Color: u8 { Red, Blue });
///
/// assert_eq!(traverse::to_bytes(&Color::Blue), [1]);
/// ```
#[macro_export]
macro_rules! traverse_enum {
	($name:ident : $repr:ty { $($variant:ident),* $(,)? }) => {
		impl $crate::Primitive for $name {
			const SIGNED: bool = <$repr as $crate::Primitive>::SIGNED;

			fn to_wire(self) -> $crate::WireInt {
				<$repr as $crate::Primitive>::to_wire(self as $repr)
			}

			fn from_wire(wire: $crate::WireInt) -> ::core::option::Option<Self> {
				let raw = <$repr as $crate::Primitive>::from_wire(wire)?;
				$(
					if raw == $name::$variant as $repr {
						return ::core::option::Option::Some($name::$variant);
					}
				)*
				::core::option::Option::None
			}
		}

		impl $crate::Traverse for $name {
			fn traverse<V: $crate::Visitor>(&self, visitor: &mut V) {
				visitor.visit_primitive(*self);
			}
		}

		impl $crate::TraverseMut for $name {
			fn traverse_mut<V: $crate::VisitorMut>(&mut self, visitor: &mut V) {
				visitor.visit_primitive(self);
			}
		}
	};
}
