use tcg_binder_catalog::filter::type_matches;
use tcg_binder_catalog::{Card, FilterCriteria, filter_by_tag, filter_cards};

fn card(name: &str, card_type: &str) -> Card {
    Card::new(name, card_type)
}

fn names(cards: &[Card]) -> Vec<&str> {
    cards.iter().map(|c| c.name.as_str()).collect()
}

fn sample() -> Vec<Card> {
    let mut cards = vec![
        card("Dark Magician", "Monster (Normal)"),
        card("Number 39: Utopia", "Monster (Effect/XYZ)"),
        card("Number C39: Utopia Ray", "Monster (Effect/CXyz)"),
        card("Pot of Greed", "Spell (Normal)"),
        card("Mirror Force", "Trap (Normal)"),
    ];
    cards[0].rarity = "Ultra Rare".into();
    cards[0].language = "EN".into();
    cards[1].rarity = "Rare".into();
    cards[1].language = "IT".into();
    cards[2].rarity = "Ultra Rare".into();
    cards[2].language = "EN".into();
    cards[3].rarity = "Common".into();
    cards[4].rarity = "Ultra Rare".into();
    cards[4].language = "IT".into();
    cards
}

#[test]
fn type_filter_boundaries() {
    let c = card("X", "Monster (Effect/XYZ)");
    let cases = [
        ("effect", true),
        ("Monster (Effect)", true),
        ("Monster (Effect/XYZ)", true),
        ("Monster (Ritual)", false),
        ("Spell (Effect)", false),
        ("xyz", true),
        ("Monster (XYZ)", true),
    ];
    for (filter, expected) in cases {
        assert_eq!(type_matches(&c, filter), expected, "filter '{}'", filter);
    }
}

#[test]
fn xyz_token_covers_cxyz_variants() {
    let cxyz = card("X", "Monster (Effect/CXyz)");
    assert!(type_matches(&cxyz, "xyz"));
    assert!(type_matches(&cxyz, "Monster (XYZ)"));
    assert!(!type_matches(&card("X", "Monster (Effect)"), "Monster (XYZ)"));
}

#[test]
fn filter_is_idempotent() {
    let criteria_list = [
        FilterCriteria {
            type_filter: Some("effect".into()),
            ..FilterCriteria::default()
        },
        FilterCriteria {
            rarity: Some("ultra rare".into()),
            language: Some("EN".into()),
            ..FilterCriteria::default()
        },
        FilterCriteria {
            name: Some("utopia".into()),
            ..FilterCriteria::default()
        },
    ];
    for criteria in &criteria_list {
        let once = filter_cards(&sample(), criteria, false);
        let twice = filter_cards(&once, criteria, false);
        assert_eq!(once, twice, "criteria {:?}", criteria);
    }
}

#[test]
fn fields_combine_with_and() {
    let criteria = FilterCriteria {
        rarity: Some("Ultra Rare".into()),
        language: Some("it".into()),
        ..FilterCriteria::default()
    };
    assert_eq!(names(&filter_cards(&sample(), &criteria, false)), vec!["Mirror Force"]);
}

#[test]
fn invert_negates_each_field() {
    let criteria = FilterCriteria {
        rarity: Some("Ultra Rare".into()),
        language: Some("IT".into()),
        ..FilterCriteria::default()
    };
    // Neither Ultra Rare nor Italian.
    assert_eq!(names(&filter_cards(&sample(), &criteria, true)), vec!["Pot of Greed"]);
}

#[test]
fn empty_criteria_keep_everything_in_order() {
    let all = filter_cards(&sample(), &FilterCriteria::default(), false);
    assert_eq!(all, sample());
    let inverted = filter_cards(&sample(), &FilterCriteria::default(), true);
    assert_eq!(inverted.len(), sample().len());
}

#[test]
fn tag_filter_accepts_both_bracket_styles() {
    let mut cards = sample();
    cards[0].comments = "[Blue Binder] signed".into();
    cards[3].comments = "{Blue Binder}".into();
    cards[4].comments = "Blue Binder".into();
    assert_eq!(
        names(&filter_by_tag(&cards, "Blue Binder")),
        vec!["Dark Magician", "Pot of Greed"]
    );
}
