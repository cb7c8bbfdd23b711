use tcg_binder_catalog::{Card, SortContext, SortKey, reverse, sort_cards};
use tcg_binder_core::Game;

fn names(cards: &[Card]) -> Vec<&str> {
    cards.iter().map(|c| c.name.as_str()).collect()
}

fn with_rarity(name: &str, rarity: &str, paid: f64) -> Card {
    let mut card = Card::new(name, "Monster (Normal)").with_prices(paid, "");
    card.rarity = rarity.to_string();
    card
}

fn ygo() -> SortContext {
    SortContext {
        game: Some(Game::YuGiOh),
        ..SortContext::default()
    }
}

#[test]
fn rarity_follows_the_game_table() {
    let mut cards = vec![
        with_rarity("A", "Common", 0.0),
        with_rarity("B", "Secret Rare", 0.0),
        with_rarity("C", "Rare", 0.0),
    ];
    sort_cards(&mut cards, Some(SortKey::Rarity), &ygo());
    let rarities: Vec<&str> = cards.iter().map(|c| c.rarity.as_str()).collect();
    assert_eq!(rarities, vec!["Secret Rare", "Rare", "Common"]);
}

#[test]
fn rarity_ties_break_on_name_then_price() {
    let mut cards = vec![
        with_rarity("Zombie", "Rare", 1.0),
        with_rarity("Alpha", "Rare", 1.0),
        with_rarity("Alpha", "Rare", 9.0),
        with_rarity("Beta", "Mystery Rare", 5.0),
    ];
    sort_cards(&mut cards, Some(SortKey::Rarity), &ygo());
    let seen: Vec<(&str, f64)> = cards.iter().map(|c| (c.name.as_str(), c.price_paid())).collect();
    assert_eq!(
        seen,
        vec![("Alpha", 9.0), ("Alpha", 1.0), ("Zombie", 1.0), ("Beta", 5.0)]
    );
}

#[test]
fn unknown_game_sorts_rarity_by_name() {
    let mut cards = vec![
        with_rarity("B", "Secret Rare", 0.0),
        with_rarity("A", "Common", 0.0),
    ];
    sort_cards(&mut cards, Some(SortKey::Rarity), &SortContext::default());
    assert_eq!(names(&cards), vec!["A", "B"]);
}

#[test]
fn sorting_twice_changes_nothing() {
    let mut cards: Vec<Card> = (0..8)
        .map(|i| {
            let mut c = with_rarity(&format!("Card {i}"), ["Rare", "Common"][i % 2], 0.0);
            c.quality = ["Mint", "Played", "Mint", ""][i % 4].to_string();
            c.location = ["Box 2", "Box 10"][i % 2].to_string();
            c
        })
        .collect();
    for &key in SortKey::all() {
        sort_cards(&mut cards, Some(key), &ygo());
        let once = cards.clone();
        sort_cards(&mut cards, Some(key), &ygo());
        assert_eq!(cards, once, "key {}", key);
    }
}

#[test]
fn condition_ties_keep_input_order() {
    let mut cards: Vec<Card> = ["First", "Second", "Third"]
        .iter()
        .map(|n| {
            let mut c = Card::new(*n, "Spell");
            c.quality = "Near Mint".into();
            c
        })
        .collect();
    let mut mint = Card::new("Mint one", "Spell");
    mint.quality = "Mint".into();
    cards.push(mint);
    sort_cards(&mut cards, Some(SortKey::Condition), &ygo());
    assert_eq!(names(&cards), vec!["Mint one", "First", "Second", "Third"]);
}

#[test]
fn prices_sort_in_opposite_directions() {
    let mut cards = vec![
        Card::new("Cheap", "Spell").with_prices(1.0, "1"),
        Card::new("Dear", "Spell").with_prices(10.0, "10"),
        Card::new("Mid", "Spell").with_prices(5.0, "5"),
    ];
    sort_cards(&mut cards, Some(SortKey::PricePaid), &ygo());
    assert_eq!(names(&cards), vec!["Dear", "Mid", "Cheap"]);
    sort_cards(&mut cards, Some(SortKey::MarketPrice), &ygo());
    assert_eq!(names(&cards), vec!["Cheap", "Mid", "Dear"]);
}

#[test]
fn stonks_puts_paid_cards_first() {
    let mut cards = vec![
        Card::new("Gift", "Spell").with_prices(0.0, "50"),
        Card::new("Small win", "Spell").with_prices(1.0, "2"),
        Card::new("Loss", "Spell").with_prices(10.0, "3"),
        Card::new("Big win", "Spell").with_prices(1.0, "20"),
    ];
    sort_cards(&mut cards, Some(SortKey::Stonks), &ygo());
    assert_eq!(names(&cards), vec!["Big win", "Small win", "Loss", "Gift"]);
}

#[test]
fn dates_and_ids() {
    let mut cards: Vec<Card> = [
        ("A", "01/02/2023", "LOB-100"),
        ("B", "15/01/2023", "LOB-020"),
        ("C", "not a date", "MRD-001"),
        ("D", "31/12/2022", "LOB-EN003"),
    ]
    .iter()
    .map(|(n, d, id)| {
        let mut c = Card::new(*n, "Spell");
        c.date_obtained = d.to_string();
        c.id = id.to_string();
        c
    })
    .collect();
    sort_cards(&mut cards, Some(SortKey::DateObtained), &ygo());
    assert_eq!(names(&cards), vec!["C", "D", "B", "A"]);
    sort_cards(&mut cards, Some(SortKey::Id), &ygo());
    assert_eq!(names(&cards), vec!["B", "A", "D", "C"]);
}

#[test]
fn comments_first_then_the_rest() {
    let mut cards = vec![
        Card::new("None", "Spell"),
        Card::new("Zed", "Spell"),
        Card::new("Ann", "Spell"),
    ];
    cards[1].comments = "zebra".into();
    cards[2].comments = "apple".into();
    sort_cards(&mut cards, Some(SortKey::Comments), &ygo());
    assert_eq!(names(&cards), vec!["Ann", "Zed", "None"]);
}

#[test]
fn unknown_key_is_a_no_op_and_reverse_flips() {
    let mut cards = vec![Card::new("B", "Spell"), Card::new("A", "Spell")];
    sort_cards(&mut cards, SortKey::parse("popularity"), &ygo());
    assert_eq!(names(&cards), vec!["B", "A"]);
    reverse(&mut cards);
    assert_eq!(names(&cards), vec!["A", "B"]);
}

#[test]
fn text_columns_ignore_accents_and_case() {
    let mut cards = vec![
        Card::new("Trainer", "Trainer (Item)"),
        Card::new("Pikachu", "Pokémon (Basic)"),
        Card::new("Energy", "energy (Basic)"),
    ];
    cards[0].location = "zaino".into();
    cards[1].location = "Binder".into();
    cards[2].location = "étagère".into();
    sort_cards(&mut cards, Some(SortKey::Type), &SortContext::default());
    assert_eq!(names(&cards), vec!["Energy", "Pikachu", "Trainer"]);
    sort_cards(&mut cards, Some(SortKey::Location), &SortContext::default());
    assert_eq!(names(&cards), vec!["Pikachu", "Energy", "Trainer"]);
}
