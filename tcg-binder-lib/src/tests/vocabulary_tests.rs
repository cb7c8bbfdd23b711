use super::*;

#[test]
fn base_terms_in_both_languages() {
    let mut vocabulary = Vocabulary::new(Language::English);
    assert_eq!(vocabulary.get("unknown"), Some("Unknown"));
    assert_eq!(vocabulary.get("fake"), Some("FAKE"));
    vocabulary.set_language(Language::Italian);
    assert_eq!(vocabulary.get("unknown"), Some("Boh"));
    assert_eq!(vocabulary.get("fake"), Some("FALSA"));
    assert_eq!(vocabulary.number_word(), "Numero");
}

#[test]
fn missing_keys_fall_back_to_raw_text() {
    let vocabulary = Vocabulary::new(Language::English);
    assert_eq!(vocabulary.get("no-such-key"), None);
    assert_eq!(vocabulary.label_or("no-such-key", "Raw"), "Raw");
    assert_eq!(vocabulary.label_or("none", "Raw"), "Raw");
}

#[test]
fn game_terms_override_base_terms() {
    let vocabulary = Vocabulary::for_game(Some(Game::YuGiOh), Language::English);
    assert_eq!(vocabulary.get("collectionheader"), Some("My Yu-Gi-Oh Card Collection"));
    assert_eq!(vocabulary.get("effect"), Some("— Effect"));
    assert_eq!(vocabulary.game(), Some(Game::YuGiOh));
}

#[test]
fn reset_drops_the_previous_game() {
    let mut vocabulary = Vocabulary::for_game(Some(Game::Pokemon), Language::English);
    assert_eq!(vocabulary.get("grass"), Some("Grass"));
    let base_len = Vocabulary::new(Language::English).len();
    assert!(vocabulary.len() > base_len);

    vocabulary.reset(Some(Game::YuGiOh));
    assert_eq!(vocabulary.get("grass"), None);
    assert_eq!(vocabulary.get("monster"), Some("Monster"));

    vocabulary.reset(None);
    assert_eq!(vocabulary.get("monster"), None);
    assert_eq!(vocabulary.len(), base_len);
    assert_eq!(vocabulary.get("collectionheader"), Some("My Card Collection"));
}
