use super::*;

#[test]
fn parses_every_tag_by_name() {
	for feature in Feature::all() {
		let parsed: Feature = feature.name().parse().unwrap();
		assert_eq!(parsed, feature);
		assert_eq!(parsed.to_string(), feature.name());
	}
}

#[test]
fn tag_names_are_unique_across_categories() {
	let mut names: Vec<&str> = Feature::all().map(Feature::name).collect();
	let total = names.len();
	names.sort_unstable();
	names.dedup();
	assert_eq!(names.len(), total);
}

#[test]
fn unknown_tag_is_rejected() {
	assert_eq!("breathy".parse::<Feature>(), Err(FeatureError::UnknownTag("breathy".into())));
}

#[test]
fn parse_in_checks_category() {
	assert_eq!(Feature::parse_in(Category::Place, "velar"), Ok(Feature::Place(Place::Velar)));
	assert_eq!(
		Feature::parse_in(Category::Place, "open"),
		Err(FeatureError::WrongCategory {
			expected: Category::Place,
			found: Feature::Height(Height::Open),
		})
	);
}

#[test]
fn matrix_is_order_independent() {
	let a = FeatureMatrix::parse(["voiced", "bilabial", "plosive"]).unwrap();
	let b = FeatureMatrix::parse(["plosive", "voiced", "bilabial"]).unwrap();
	assert_eq!(a, b);
	assert_eq!(a, FeatureMatrix::consonant(Voicing::Voiced, Place::Bilabial, Manner::Plosive));
	assert_eq!(a.to_string(), "voiced,bilabial,plosive");
}

#[test]
fn vowel_tags_come_back_in_rounding_height_backness_order() {
	let m = FeatureMatrix::parse(["front", "close", "unrounded"]).unwrap();
	assert_eq!(m.kind(), PhonemeKind::Vowel);
	assert_eq!(
		m.tags(),
		[
			Feature::Rounding(Rounding::Unrounded),
			Feature::Height(Height::Close),
			Feature::Backness(Backness::Front),
		]
	);
}

#[test]
fn mixed_or_repeated_categories_fail() {
	assert_eq!(FeatureMatrix::parse(["voiced", "open", "plosive"]), Err(FeatureError::MixedKinds));
	assert!(matches!(
		FeatureMatrix::parse(["voiced", "voiceless", "plosive"]),
		Err(FeatureError::DuplicateCategory { .. })
	));
}

#[test]
fn category_kinds() {
	for category in Category::iter() {
		let expected = match category {
			Category::Voicing | Category::Place | Category::Manner => PhonemeKind::Consonant,
			_ => PhonemeKind::Vowel,
		};
		assert_eq!(category.kind(), expected);
	}
}
