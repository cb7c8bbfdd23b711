use tcg_binder_catalog::{
    FilterCriteria, LoadOptions, SortContext, SortKey, cards_from_records, filter_cards,
    parse_records, sort_baseline, sort_cards,
};
use tcg_binder_core::{Game, GameDetector};

const CATALOG: &str = "Name|Type|Rarity
Card A|Monster (Effect)|Rare
Card B|Spell (Quick-Play)|Common
Card C|Monster (XYZ)|Secret Rare";

#[test]
fn load_detect_filter_sort() {
    let opts = LoadOptions::default();
    let records = parse_records(CATALOG, &opts);
    let game = GameDetector::new().detect(records.iter().map(|r| r.get("Type")));
    assert_eq!(game, Some(Game::YuGiOh));

    let mut cards = cards_from_records(&records);
    sort_baseline(&mut cards, &opts.number_word);
    assert_eq!(cards.len(), 3);

    let criteria = FilterCriteria {
        type_filter: Some("effect".into()),
        ..FilterCriteria::default()
    };
    let effect: Vec<String> = filter_cards(&cards, &criteria, false)
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(effect, vec!["Card A"]);

    let mut rest: Vec<_> = cards.into_iter().filter(|c| c.name != "Card A").collect();
    let ctx = SortContext {
        game,
        ..SortContext::default()
    };
    sort_cards(&mut rest, Some(SortKey::Rarity), &ctx);
    let names: Vec<&str> = rest.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Card C", "Card B"]);
}

#[test]
fn detection_ignores_trailing_rows() {
    let detector = GameDetector::new();
    let base = parse_records(CATALOG, &LoadOptions::default());
    let expected = detector.detect(base.iter().map(|r| r.get("Type")));

    for extra in 0..5 {
        let mut text = CATALOG.to_string();
        for i in 0..extra {
            text.push_str(&format!("\nExtra card {i}|Creature (Elf)|Common"));
        }
        let records = parse_records(&text, &LoadOptions::default());
        let detected = detector.detect(records.iter().map(|r| r.get("Type")));
        assert_eq!(detected, expected, "{} extra rows", extra);
        let options = detected.map(|g| g.type_filter_options().len());
        assert_eq!(
            options,
            expected.map(|g| g.type_filter_options().len()),
            "{} extra rows",
            extra
        );
    }
}
