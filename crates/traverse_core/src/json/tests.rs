use serde_json::json;

use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(u8)]
enum Shade {
	#[default]
	Light = 0,
	Dark = 1,
}
crate::traverse_enum!(Shade: u8 { Light, Dark });

#[derive(Debug, Default, PartialEq)]
struct Point {
	x: i32,
	y: i32,
}
crate::traverse_struct!(Point { x, y });

#[derive(Debug, Default, PartialEq)]
struct Shape {
	shade: Shade,
	visible: bool,
	name: String,
	points: Vec<Point>,
}
crate::traverse_struct!(Shape { shade, visible, name, points });

fn sample() -> Shape {
	Shape {
		shade: Shade::Dark,
		visible: true,
		name: "tri".into(),
		points: vec![Point { x: 1, y: -1 }, Point { x: 0, y: 64 }],
	}
}

#[test]
fn writes_objects_arrays_and_numbers() {
	assert_eq!(
		to_json(&sample()),
		json!({
			"shade": 1,
			"visible": 1,
			"name": "tri",
			"points": [{"x": 1, "y": -1}, {"x": 0, "y": 64}],
		})
	);
}

#[test]
fn text_output_has_sorted_keys() {
	let text = to_json_string(&Point { x: 2, y: 3 }).expect("serialize");
	assert_eq!(text, r#"{"x":2,"y":3}"#);
}

#[test]
fn reads_back_what_it_writes() {
	let document = to_json(&sample());
	let mut decoded = Shape::default();
	let log = from_json(&document, &mut decoded);
	assert!(log.is_empty(), "{log}");
	assert_eq!(decoded, sample());
}

#[test]
fn missing_fields_keep_previous_values() {
	let mut decoded = Point { x: 7, y: 8 };
	let log = from_json(&json!({"y": 1, "extra": true}), &mut decoded);
	assert_eq!(decoded, Point { x: 7, y: 1 });
	assert_eq!(log.len(), 1);
	let entry = log.iter().next().expect("entry");
	assert_eq!(entry.path, "Point");
	assert_eq!(entry.kind, DiagnosticKind::JsonMissingField { field: "x" });
}

#[test]
fn type_mismatches_are_reported_with_paths() {
	let document = json!({
		"shade": "dark",
		"visible": -1,
		"name": 5,
		"points": [{"x": 1, "y": 2}, {"x": 1.5, "y": 3}],
	});
	let mut decoded = Shape::default();
	let log = from_json(&document, &mut decoded);
	let found: Vec<_> = log.iter().map(|entry| (entry.path.as_str(), entry.kind.clone())).collect();
	assert_eq!(
		found,
		[
			("Shape.shade", DiagnosticKind::JsonTypeMismatch { expected: "unsigned integer" }),
			("Shape.visible", DiagnosticKind::JsonTypeMismatch { expected: "unsigned integer" }),
			("Shape.name", DiagnosticKind::JsonTypeMismatch { expected: "string" }),
			("Shape.points[1].x", DiagnosticKind::JsonTypeMismatch { expected: "integer" }),
		]
	);
	assert_eq!(decoded.points, [Point { x: 1, y: 2 }, Point { x: 0, y: 3 }]);
}

#[test]
fn non_object_aggregate_is_skipped() {
	let mut decoded = Point { x: 4, y: 4 };
	let log = from_json(&json!([1, 2]), &mut decoded);
	assert_eq!(decoded, Point { x: 4, y: 4 });
	assert!(log.contains(&DiagnosticKind::JsonTypeMismatch { expected: "object" }));
	assert_eq!(log.len(), 1);
}

#[test]
fn unknown_discriminant_is_rejected() {
	let mut decoded = Shape::default();
	let log = from_json(&json!({"shade": 9, "visible": 0, "name": "", "points": []}), &mut decoded);
	assert_eq!(decoded.shade, Shade::Light);
	assert_eq!(log.len(), 1);
	assert!(matches!(
		log.iter().next().map(|entry| &entry.kind),
		Some(DiagnosticKind::InvalidDiscriminant {
			value: WireInt::Unsigned(9),
			..
		})
	));
}

#[test]
fn strict_parse_surfaces_syntax_and_shape_errors() {
	assert!(matches!(from_json_str::<Point>("{"), Err(TraverseError::Json(_))));
	assert!(matches!(from_json_str::<Point>(r#"{"x": 1}"#), Err(TraverseError::Decode(log)) if log.len() == 1));
	assert_eq!(from_json_str::<Point>(r#"{"x": 1, "y": -2}"#).expect("valid"), Point { x: 1, y: -2 });
}
