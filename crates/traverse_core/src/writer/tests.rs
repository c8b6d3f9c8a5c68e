use super::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[repr(u8)]
enum Shade {
	#[default]
	Light = 0,
	Dark = 1,
}
crate::traverse_enum!(Shade: u8 { Light, Dark });

#[derive(Debug, Default)]
struct Point {
	x: i32,
	y: i32,
}
crate::traverse_struct!(Point { x, y });

#[derive(Debug, Default)]
struct Shape {
	shade: Shade,
	name: String,
	points: Vec<Point>,
}
crate::traverse_struct!(Shape { shade, name, points });

#[test]
fn primitives_use_varints() {
	assert_eq!(to_bytes(&0x7f_u8), [0x7f]);
	assert_eq!(to_bytes(&300_u16), [0xac, 0x02]);
	assert_eq!(to_bytes(&-1_i64), [0x01]);
	assert_eq!(to_bytes(&1_i8), [0x02]);
	assert_eq!(to_bytes(&true), [0x01]);
	assert_eq!(to_bytes(&Shade::Dark), [0x01]);
}

#[test]
fn text_is_length_prefixed_without_terminator() {
	assert_eq!(to_bytes("hi"), [2, b'h', b'i']);
	assert_eq!(to_bytes(&String::new()), [0]);

	let long = "x".repeat(200);
	let bytes = to_bytes(&long);
	assert_eq!(&bytes[..2], [0xc8, 0x01]);
	assert_eq!(bytes.len(), 202);
}

#[test]
fn sequences_are_count_prefixed() {
	assert_eq!(to_bytes(&vec![1_u32, 128, 2]), [3, 1, 0x80, 0x01, 2]);
	assert_eq!(to_bytes(&Vec::<u8>::new()), [0]);
	assert_eq!(to_bytes(&vec![String::from("a"), String::new()]), [2, 1, b'a', 0]);
}

#[test]
fn aggregates_are_unframed_and_positional() {
	let shape = Shape {
		shade: Shade::Dark,
		name: "tri".into(),
		points: vec![Point { x: 1, y: -1 }, Point { x: 0, y: 64 }],
	};
	assert_eq!(to_bytes(&shape), [1, 3, b't', b'r', b'i', 2, 2, 1, 0, 0x80, 0x01]);
}

#[test]
fn writer_appends_across_calls() {
	let mut writer = BinaryWriter::new();
	assert!(writer.is_empty());
	writer.write(&5_u8);
	writer.write("ok");
	writer.push_signed(-2);
	assert_eq!(writer.len(), 5);
	assert_eq!(writer.as_bytes(), [5, 2, b'o', b'k', 3]);
	assert_eq!(writer.finalize(), [5, 2, b'o', b'k', 3]);
}

#[test]
fn to_writer_streams_into_sink() {
	let mut sink = Vec::new();
	to_writer(&Point { x: 2, y: 3 }, &mut sink).expect("vec sink does not fail");
	assert_eq!(sink, [4, 6]);
}
