use tcg_binder_catalog::{CardStore, FilterCriteria, LoadOptions};

const FIRST: &str = "Name|Type|Rarity|ID
Dark Magician|Monster (Normal)|Ultra Rare|LOB-005
Dark Magician|Monster (Normal)|Secret Rare|SDY-006
Blue-Eyes White Dragon|Monster (Normal)|Ultra Rare|LOB-001
Dark Magician|Monster (Normal)|Common|LOB-005";

const SECOND: &str = "Name|Type|Rarity|ID
Pikachu Illustrator|Pokémon (Basic)|Promo|PROMO-001";

#[test]
fn load_replaces_previous_cards() {
    let mut store = CardStore::new();
    assert!(store.is_empty());
    store.load(FIRST, &LoadOptions::default());
    assert_eq!(store.len(), 4);
    store.load(SECOND, &LoadOptions::default());
    assert_eq!(store.len(), 1);
    assert!(store.find_by_id("LOB-005").is_none());
}

#[test]
fn ids_are_not_unique() {
    let mut store = CardStore::new();
    store.load(FIRST, &LoadOptions::default());
    let rarities: Vec<&str> = store
        .find_all_by_id("LOB-005")
        .iter()
        .map(|c| c.rarity.as_str())
        .collect();
    assert_eq!(rarities, vec!["Ultra Rare", "Common"]);
    assert_eq!(
        store.find_by_id("LOB-005").map(|c| c.rarity.as_str()),
        Some("Ultra Rare")
    );
}

#[test]
fn variants_by_name_follow_store_order() {
    let mut store = CardStore::new();
    store.load(FIRST, &LoadOptions::default());
    let ids: Vec<&str> = store
        .find_variants("LOB-005", true)
        .iter()
        .map(|c| c.id.as_str())
        .collect();
    assert_eq!(ids, vec!["LOB-005", "SDY-006", "LOB-005"]);
}

#[test]
fn store_filter_delegates_to_engine() {
    let mut store = CardStore::new();
    store.load(FIRST, &LoadOptions::default());
    let criteria = FilterCriteria {
        name: Some("blue".into()),
        ..FilterCriteria::default()
    };
    assert_eq!(store.filter(&criteria, false).len(), 1);
    assert_eq!(store.filter(&criteria, true).len(), 3);
}
