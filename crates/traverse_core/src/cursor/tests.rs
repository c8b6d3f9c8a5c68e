use super::Cursor;

#[test]
fn read_byte_advances_until_end() {
	let mut cursor = Cursor::new(&[7, 8]);
	assert_eq!(cursor.read_byte(), Some(7));
	assert_eq!(cursor.pos(), 1);
	assert_eq!(cursor.read_byte(), Some(8));
	assert_eq!(cursor.read_byte(), None);
	assert_eq!(cursor.pos(), 2);
	assert!(cursor.is_empty());
}

#[test]
fn read_up_to_returns_short_slice_at_end() {
	let mut cursor = Cursor::new(&[1, 2, 3, 4, 5]);
	assert_eq!(cursor.read_up_to(2), &[1, 2]);
	assert_eq!(cursor.remaining(), 3);
	assert_eq!(cursor.read_up_to(10), &[3, 4, 5]);
	assert_eq!(cursor.read_up_to(1), &[] as &[u8]);
	assert_eq!(cursor.pos(), 5);
}

#[test]
fn skip_to_end_consumes_everything_once() {
	let mut cursor = Cursor::new(&[1, 2, 3]);
	assert_eq!(cursor.read_byte(), Some(1));
	cursor.skip_to_end();
	assert!(cursor.is_empty());
	assert_eq!(cursor.pos(), 3);
	cursor.skip_to_end();
	assert_eq!(cursor.pos(), 3);
	assert_eq!(cursor.read_byte(), None);
}
