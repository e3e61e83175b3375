//! Tables loaded from configuration documents.

#![cfg(feature = "serde")]

use cul_bimap::BiMap;

#[test]
fn deserializes_from_a_list_of_pairs() {
	let json = r#"[["ok", 200], ["created", 201], ["not found", 404]]"#;
	let table: BiMap<Vec<(String, u16)>> = serde_json::from_str(json).unwrap();

	assert_eq!(table.len(), 3);
	assert_eq!(table.find_by_first("created"), Some(201));
	assert_eq!(table.find_by_first_ignore_case("NOT FOUND"), Some(404));
	assert_eq!(table.find_by_second(&200), Some(String::from("ok")));
	assert_eq!(table.find("created"), Some(201));
	assert_eq!(table.find(&404_u16), Some(String::from("not found")));
	assert_eq!(table.find_ignore_case("NOT FOUND"), Some(404));
	assert_eq!(table.find_ignore_case("Gone"), None);
	assert_eq!(table.audit().duplicates().lowercase_first().finish(), Ok(()));
}

#[test]
fn serializes_transparently() {
	let table = BiMap::new(vec![(1_u8, "one"), (2, "two")]);
	assert_eq!(serde_json::to_string(&table).unwrap(), r#"[[1,"one"],[2,"two"]]"#);
}

#[test]
fn rejects_malformed_pairs() {
	let result = serde_json::from_str::<BiMap<Vec<(String, u16)>>>(r#"[["ok"]]"#);
	assert!(result.is_err());
}
