use super::*;

fn table() -> AffixTable {
	let mut table = AffixTable::new();
	assert_eq!(table.add_affix("strong", ["t", "-"]), Ok(AffixKind::Prefix));
	assert_eq!(table.add_affix("human", ["-", "g", "u", "d"]), Ok(AffixKind::Suffix));
	table
}

#[test]
fn prefix_attachment() {
	let root = Word::from(vec!["g", "u", "d"]);
	let word = table().attach(&root, "strong").unwrap();
	assert_eq!(word, Word::from(vec!["t", "g", "u", "d"]));
	assert_eq!(word.len(), root.len() + (2 - 1));
}

#[test]
fn suffix_attachment() {
	let root = Word::from(vec!["b", "a"]);
	let word = table().attach(&root, "human").unwrap();
	assert_eq!(word.form(), "bagud");
}

#[test]
fn attaching_does_not_consume_the_affix() {
	let table = table();
	let root = Word::from(vec!["a"]);
	table.attach(&root, "strong").unwrap();
	assert_eq!(table.attach(&root, "strong").unwrap().form(), "ta");
	assert_eq!(table.get("strong").unwrap().letters(), &["t".to_string()]);
}

#[test]
fn unknown_property_is_an_error() {
	let root = Word::from(vec!["a"]);
	assert_eq!(table().attach(&root, "tiny"), Err(AffixError::UnknownProperty("tiny".into())));
}

#[test]
fn marker_validation() {
	let mut table = AffixTable::new();
	assert_eq!(
		table.add_affix("none", ["t", "a"]),
		Err(AffixError::MissingMarker { property: "none".into() })
	);
	assert_eq!(
		table.add_affix("both", ["-", "t", "-"]),
		Err(AffixError::MultipleMarkers { property: "both".into() })
	);
	assert_eq!(
		table.add_affix("infix", ["t", "-", "a"]),
		Err(AffixError::MisplacedMarker { property: "infix".into() })
	);
	assert_eq!(table.add_affix("bare", ["-"]), Err(AffixError::Empty { property: "bare".into() }));
	assert!(table.is_empty());
}

#[test]
fn re_registration_replaces() {
	let mut table = table();
	assert_eq!(table.add_affix("strong", ["-", "o"]), Ok(AffixKind::Suffix));
	assert_eq!(table.len(), 2);
	let order: Vec<&str> = table.iter().map(|(p, _)| p).collect();
	assert_eq!(order, ["strong", "human"]);
}
