#![allow(missing_docs)]

use serde_json::json;
use traverse::{DebugWriter, DiagnosticKind, PrintOptions, Show, from_bytes, from_json, from_json_str, to_bytes, to_debug_string, to_json, to_json_string};
use traverse_testkit::{Color, Polygon, Tree, nested_tree, sample_polygon};

#[test]
fn polygon_debug_line() {
	assert_eq!(
		to_debug_string(&sample_polygon()),
		r#"Polygon{color:1, mood:2, name:"UFO\"1942\"", points:[Point{x:3, y:5}, Point{x:4, y:6}, Point{x:5, y:7}]}"#
	);
	assert_eq!(Show(&sample_polygon()).to_string(), to_debug_string(&sample_polygon()));
}

#[test]
fn compact_debug_of_wide_tree() {
	let tree = nested_tree(2, 40);
	let mut writer = DebugWriter::with_options(PrintOptions::compact());
	writer.write(&tree);
	let text = writer.finish();
	assert!(text.starts_with(r#"Tree{label:"r", children:[Tree{label:"r.0", children:[]}, "#));
	assert!(text.ends_with(", ... 24 more]}"));
}

#[test]
fn polygon_json_document() {
	let document = to_json(&sample_polygon());
	assert_eq!(
		document,
		json!({
			"color": 1,
			"mood": 2,
			"name": "UFO\"1942\"",
			"points": [{"x": 3, "y": 5}, {"x": 4, "y": 6}, {"x": 5, "y": 7}],
		})
	);

	let mut decoded = Polygon::default();
	assert!(from_json(&document, &mut decoded).is_empty());
	assert_eq!(decoded, sample_polygon());
}

#[test]
fn json_text_round_trips_trees() {
	let tree = nested_tree(3, 3);
	let text = to_json_string(&tree).expect("serialize");
	let decoded: Tree = from_json_str(&text).expect("parse");
	assert_eq!(decoded, tree);
}

#[test]
fn binary_and_json_agree() {
	let tree = nested_tree(3, 2);
	let via_binary: Tree = from_bytes(&to_bytes(&tree)).expect("binary");
	let via_json: Tree = from_json_str(&to_json_string(&tree).expect("serialize")).expect("json");
	assert_eq!(via_binary, via_json);
}

#[test]
fn json_defects_match_binary_policy() {
	let mut decoded = sample_polygon();
	let log = from_json(&json!({"color": 7, "mood": 0, "name": null, "points": "none"}), &mut decoded);
	assert_eq!(log.len(), 3, "{log}");
	assert_eq!(decoded.color, Color::Blue);
	assert_eq!(decoded.name, sample_polygon().name);
	assert_eq!(decoded.points, sample_polygon().points);
	assert!(log.contains(&DiagnosticKind::JsonTypeMismatch { expected: "array" }));
}

#[test]
fn diagnostics_serialize_as_tagged_json() {
	let mut decoded = Polygon::default();
	let log = from_json(&json!({"color": 0, "mood": 0, "name": "x"}), &mut decoded);
	assert_eq!(
		serde_json::to_value(&log).expect("serialize"),
		json!([{"path": "Polygon", "kind": {"type": "json_missing_field", "field": "points"}}])
	);
}
