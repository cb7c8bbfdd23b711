use super::*;
use tcg_binder_core::Language;

fn ygo(language: Language) -> Vocabulary {
    Vocabulary::for_game(Some(Game::YuGiOh), language)
}

#[test]
fn type_display_badges_known_tokens() {
    let vocabulary = ygo(Language::English);
    let renderer = BadgeRenderer::new(&vocabulary, Some(Game::YuGiOh));
    assert_eq!(
        renderer.type_display("Monster (Effect/Tuner)"),
        r#"Monster <span class="badge-type-effect">Effect</span> <span class="badge-type-tuner">Tuner</span>"#
    );
    assert_eq!(
        renderer.type_display("Spell (Quick-Play)"),
        r#"Spell <span class="badge-type-quickplay">Quick-Play</span>"#
    );
    assert_eq!(renderer.type_display("Trap"), "Trap");
}

#[test]
fn type_display_translates_and_drops_unknown_tokens() {
    let vocabulary = ygo(Language::Italian);
    let renderer = BadgeRenderer::new(&vocabulary, Some(Game::YuGiOh));
    assert_eq!(
        renderer.type_display("Monster (Effect/Gemini)"),
        r#"Mostro <span class="badge-type-effect">con Effetto</span>"#
    );
}

#[test]
fn unknown_game_uses_shared_rules_only() {
    let vocabulary = Vocabulary::new(Language::English);
    let renderer = BadgeRenderer::new(&vocabulary, None);
    assert_eq!(
        renderer.type_display("Accessory (Sleeves/Effect/Structure Deck)"),
        r#"Accessory <span class="badge-type-sleeves">Sleeves</span> <span class="badge-type-structuredeck">Structure Deck</span>"#
    );
}

#[test]
fn quality_badges() {
    let cases = [
        (
            "Near Mint",
            r#"<span class="badge badge-cond-near-mint" data-original-title="Near Mint">NM</span>"#,
        ),
        (
            "played",
            r#"<span class="badge badge-cond-played" data-original-title="Played">PL</span>"#,
        ),
        ("Unknown (good)", r#"<span class="badge" data-original-title="UnknownGood">✅</span>"#),
        ("None", ""),
        ("Excellent", "Excellent"),
    ];
    for (quality, expected) in cases {
        assert_eq!(quality_badge(quality), expected, "quality '{}'", quality);
    }
}

#[test]
fn language_badges() {
    assert_eq!(language_badge(" it "), r#"<span data-cell-title="Language">🇮🇹</span>"#);
    assert_eq!(language_badge("es"), r#"<span data-cell-title="Language">ES</span>"#);
}

#[test]
fn edition_badges_respect_strict_mode() {
    assert_eq!(
        edition_badge("First Edition", true),
        r#"<span class="edition-badge edition-badge-1" data-original-title="First Edition">1</span>"#
    );
    assert_eq!(
        edition_badge("Limited Edition", true),
        r#"<span class="edition-badge edition-badge-0" data-original-title="Limited Edition">0</span>"#
    );
    assert_eq!(
        edition_badge("Standard Edition", false),
        r#"<span class="edition-badge edition-badge-2" data-original-title="Standard Edition">2</span>"#
    );
    assert_eq!(
        edition_badge("Standard Edition", true),
        r#"<span class="null" data-original-title="Standard Edition"></span>"#
    );
    assert_eq!(
        edition_badge("Unlimited", false),
        r#"<span class="edition-badge edition-badge-3" data-original-title="Unlimited">3</span>"#
    );
}

#[test]
fn rarity_and_name_cells() {
    let vocabulary = ygo(Language::Italian);
    let renderer = BadgeRenderer::new(&vocabulary, Some(Game::YuGiOh));
    assert_eq!(renderer.rarity_label("Super Rare"), "Super Rara");
    assert_eq!(renderer.rarity_label("Mystery Rare"), "Mystery Rare");
    assert_eq!(
        renderer.rarity_label("Fake"),
        r#"<span class="badge-type-fake">FALSA</span>"#
    );

    let mut card = Card::new("Dark Magician", "Monster (Normal)");
    card.rarity = "FAKE".to_string();
    assert_eq!(renderer.name_cell(&card), "Dark Magician <b>(FALSA)</b>");
}

#[test]
fn rows_follow_display_config() {
    let vocabulary = ygo(Language::English);
    let renderer = BadgeRenderer::new(&vocabulary, Some(Game::YuGiOh));
    let mut card = Card::new("Kuriboh", "Monster (Effect)").with_prices(1.5, "2.00");
    card.id = "MRD-071".to_string();
    card.comments = "binder [Fluffy]".to_string();
    card.wiki_url = "https://example.org/Kuriboh".to_string();

    let plain = renderer.render_rows(std::slice::from_ref(&card), &DisplayConfig::default(), false);
    assert!(plain.starts_with(r#"<tr><td class="nowrap-td">Kuriboh</td>"#));
    assert!(plain.contains(r#"<td class="nowrap-td">1.50</td>"#));
    assert!(plain.contains(r#"<td style="display:none"> </td>"#));
    assert!(plain.contains(r#"<td class="nowrap-td">binder</td>"#));
    assert!(plain.contains(r#"href="https://example.org/Kuriboh""#));
    assert!(!plain.contains("card-image"));

    let config = DisplayConfig {
        allow_newlines: true,
        enable_collections: true,
        show_images: true,
        ..DisplayConfig::default()
    };
    let rich = renderer.render_rows(std::slice::from_ref(&card), &config, false);
    assert!(rich.starts_with(r#"<tr><td><img src="images/cards/MRD-071.png""#));
    assert!(rich.contains(r#"<button class="tag-button" data-value="Fluffy">Fluffy</button>"#));
    assert!(!rich.contains("nowrap-td"));

    let stonks = renderer.render_rows(std::slice::from_ref(&card), &DisplayConfig::default(), true);
    assert!(stonks.contains(r#"<td class="nowrap-td">+0.50</td>"#));
}

#[test]
fn empty_rows_show_nothing_found() {
    let vocabulary = Vocabulary::new(Language::Italian);
    let renderer = BadgeRenderer::new(&vocabulary, None);
    assert_eq!(
        renderer.render_rows(&[], &DisplayConfig::default(), false),
        r#"<tr><td colspan="15">Nessun risultato. Ricontrolla il CSV o i filtri!</td></tr>"#
    );
}

#[test]
fn html_is_escaped() {
    assert_eq!(escape_html(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
}
