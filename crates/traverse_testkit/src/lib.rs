//! Shared fixture types and sample values for workspace tests.

use traverse::{traverse_enum, traverse_struct};

/// Two-variant enum fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Color {
	/// Wire value 0.
	#[default]
	Red = 0,
	/// Wire value 1.
	Blue = 1,
}
traverse_enum!(Color: u8 { Red, Blue });

/// Three-variant enum fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Mood {
	/// Wire value 0.
	#[default]
	Happy = 0,
	/// Wire value 1.
	Sad = 1,
	/// Wire value 2.
	HulkSmash = 2,
}
traverse_enum!(Mood: u8 { Happy, Sad, HulkSmash });

/// Signed coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
	/// Horizontal coordinate.
	pub x: i32,
	/// Vertical coordinate.
	pub y: i32,
}
traverse_struct!(Point { x, y });

/// Fixture exercising every node kind.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Polygon {
	/// Enum field.
	pub color: Color,
	/// Enum field.
	pub mood: Mood,
	/// Text field.
	pub name: String,
	/// Sequence of aggregates.
	pub points: Vec<Point>,
}
traverse_struct!(Polygon { color, mood, name, points });

/// Recursive fixture.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tree {
	/// Node label.
	pub label: String,
	/// Child nodes.
	pub children: Vec<Tree>,
}
traverse_struct!(Tree { label, children });

/// The reference polygon used across test suites.
pub fn sample_polygon() -> Polygon {
	Polygon {
		color: Color::Blue,
		mood: Mood::HulkSmash,
		name: "UFO\"1942\"".to_owned(),
		points: vec![Point { x: 3, y: 5 }, Point { x: 4, y: 6 }, Point { x: 5, y: 7 }],
	}
}

/// Wire bytes of [`sample_polygon`].
pub fn sample_polygon_bytes() -> Vec<u8> {
	let mut bytes = vec![1, 2, 9];
	bytes.extend_from_slice(b"UFO\"1942\"");
	bytes.extend_from_slice(&[3, 6, 10, 8, 12, 10, 14]);
	bytes
}

/// Build a complete tree `depth` levels deep where every inner node has
/// `fanout` children. Labels spell the path from the root, e.g. `r.0.1`.
pub fn nested_tree(depth: usize, fanout: usize) -> Tree {
	fn build(label: String, depth: usize, fanout: usize) -> Tree {
		let children = if depth <= 1 {
			Vec::new()
		} else {
			(0..fanout).map(|index| build(format!("{label}.{index}"), depth - 1, fanout)).collect()
		};
		Tree { label, children }
	}
	build("r".to_owned(), depth, fanout)
}

/// Wire bytes of a degenerate tree nested `levels` deep with empty labels.
/// Each level costs two bytes, so small inputs reach large depths.
pub fn deep_tree_bytes(levels: usize) -> Vec<u8> {
	let mut bytes = Vec::with_capacity(levels * 2 + 2);
	for _ in 0..levels {
		bytes.extend_from_slice(&[0, 1]);
	}
	bytes.extend_from_slice(&[0, 0]);
	bytes
}
