//! Badge rules: which sub-type tokens get a decorated label, and with which
//! CSS class.

use crate::Game;

/// Maps a slugified sub-type token to the CSS class of its badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeRule {
    pub key: &'static str,
    pub css_class: &'static str,
}

const fn rule(key: &'static str, css_class: &'static str) -> BadgeRule {
    BadgeRule { key, css_class }
}

/// Rules for accessory rows shared by every game (sleeves, albums, ...).
pub const SHARED_BADGE_RULES: &[BadgeRule] = &[
    rule("sleeves", "badge-type-sleeves"),
    rule("structuredeck", "badge-type-structuredeck"),
    rule("starterdeck", "badge-type-starterdeck"),
    rule("storage", "badge-type-storage"),
    rule("fieldcentercard", "badge-type-fieldcentercard"),
    rule("empty", "badge-type-empty"),
    rule("album", "badge-type-album"),
    rule("separator", "badge-type-separator"),
    rule("deckcase", "badge-type-deckcase"),
    rule("playmat", "badge-type-playmat"),
];

const YUGIOH_RULES: &[BadgeRule] = &[
    rule("normal", "badge-type-normal"),
    rule("cxyz", "badge-type-cxyz"),
    rule("fxyz", "badge-type-cxyz"),
    rule("sxyz", "badge-type-cxyz"),
    rule("xyz", "badge-type-xyz"),
    rule("effect", "badge-type-effect"),
    rule("continuous", "badge-type-continuous"),
    rule("vanilla", "badge-type-vanilla"),
    rule("quickplay", "badge-type-quickplay"),
    rule("equip", "badge-type-equip"),
    rule("terrain", "badge-type-terrain"),
    rule("fusion", "badge-type-fusion"),
    rule("synchro", "badge-type-synchro"),
    rule("counter", "badge-type-counter"),
    rule("ritual", "badge-type-ritual"),
    rule("pendulum", "badge-type-pendulum"),
    rule("link", "badge-type-link"),
    rule("link-1", "badge-type-link"),
    rule("link-2", "badge-type-link"),
    rule("link-3", "badge-type-link"),
    rule("link-4", "badge-type-link"),
    rule("link-5", "badge-type-link"),
    rule("link-6", "badge-type-link"),
    rule("tuner", "badge-type-tuner"),
    rule("toon", "badge-type-toon"),
];

const POKEMON_RULES: &[BadgeRule] = &[
    rule("base", "badge-type-base"),
    rule("stage-1", "badge-type-stage1"),
    rule("stage-2", "badge-type-stage2"),
    rule("mega", "badge-type-mega"),
    rule("energy", "badge-type-energy"),
    rule("special-energy", "badge-type-specialenergy"),
    rule("supporter", "badge-type-supporter"),
    rule("trainer", "badge-type-trainer"),
    rule("item", "badge-type-item"),
    rule("stadium", "badge-type-stadium"),
    rule("none", "badge-type-none"),
    rule("grass", "badge-type-grass"),
    rule("fire", "badge-type-fire"),
    rule("water", "badge-type-water"),
    rule("lightning", "badge-type-lightning"),
    rule("psychic", "badge-type-psychic"),
    rule("fighting", "badge-type-fighting"),
    rule("darkness", "badge-type-darkness"),
    rule("metal", "badge-type-metal"),
    rule("dragon", "badge-type-dragon"),
    rule("colorless", "badge-type-colorless"),
    rule("fairy", "badge-type-fairy"),
];

const VANGUARD_RULES: &[BadgeRule] = &[
    rule("unit", "badge-type-unit"),
    rule("trigger", "badge-type-trigger"),
    rule("g-unit", "badge-type-g-unit"),
    rule("g-guardian", "badge-type-g-guardian"),
    rule("order", "badge-type-order"),
    rule("token", "badge-type-token"),
    rule("human", "badge-race-human"),
    rule("angel", "badge-race-angel"),
    rule("demon", "badge-race-demon"),
    rule("elf", "badge-race-elf"),
    rule("succubus", "badge-race-succubus"),
    rule("vampire", "badge-race-vampire"),
    rule("dragon", "badge-race-dragon"),
    rule("dragoroid", "badge-race-dragoroid"),
    rule("mermaid", "badge-race-mermaid"),
    rule("quintuplet", "badge-race-quintuplet"),
    rule("cyberoid", "badge-race-cyberoid"),
    rule("bioroid", "badge-race-bioroid"),
    rule("warbeast", "badge-race-warBeast"),
    rule("grade-0", "badge-grade-0"),
    rule("grade-1", "badge-grade-1"),
    rule("grade-2", "badge-grade-2"),
    rule("grade-3", "badge-grade-3"),
    rule("grade-4", "badge-grade-4"),
    rule("stride", "badge-stride"),
    rule("imaginary-gift", "badge-imaginary-gift"),
    rule("overdress", "badge-overdress"),
    rule("persona-ride", "badge-persona-ride"),
    rule("dragon-empire", "badge-nation-dragon-empire"),
    rule("dark-states", "badge-nation-dark-states"),
    rule("brandt-gate", "badge-nation-brandt-gate"),
    rule("keter-sanctuary", "badge-nation-keter-sanctuary"),
    rule("stoicheia", "badge-nation-stoicheia"),
    rule("lyrical-monasterio", "badge-nation-lyrical-monasterio"),
    rule("royal-paladin", "badge-clan-royal-paladin"),
    rule("kagero", "badge-clan-kagero"),
    rule("aqua-force", "badge-clan-aqua-force"),
    rule("shadow-paladin", "badge-clan-shadow-paladin"),
    rule("gold-paladin", "badge-clan-gold-paladin"),
    rule("oracle-think-tank", "badge-clan-oracle-think-tank"),
    rule("narukami", "badge-clan-narukami"),
    rule("link-joker", "badge-clan-link-joker"),
];

const DIGIMON_RULES: &[BadgeRule] = &[
    rule("digimon", "badge-type-digimon"),
    rule("digi-egg", "badge-type-digi-egg"),
    rule("tamer", "badge-type-tamer"),
    rule("option", "badge-type-option"),
    rule("token", "badge-type-token"),
    rule("in-training", "badge-form-intraining"),
    rule("rookie", "badge-form-rookie"),
    rule("champion", "badge-form-champion"),
    rule("ultimate", "badge-form-ultimate"),
    rule("mega", "badge-form-mega"),
    rule("red", "badge-color-red"),
    rule("blue", "badge-color-blue"),
    rule("yellow", "badge-color-yellow"),
    rule("green", "badge-color-green"),
    rule("black", "badge-color-black"),
    rule("purple", "badge-color-purple"),
    rule("white", "badge-color-white"),
    rule("common", "badge-rarity-common"),
    rule("uncommon", "badge-rarity-uncommon"),
    rule("rare", "badge-rarity-rare"),
    rule("superrare", "badge-rarity-superrare"),
    rule("secretrare", "badge-rarity-secretrare"),
    rule("promo", "badge-rarity-promo"),
    rule("parallelart", "badge-rarity-parallelart"),
    rule("cs", "badge-trait-cs"),
    rule("accel", "badge-trait-accel"),
];

const MTG_RULES: &[BadgeRule] = &[
    rule("creature", "badge-type-creature"),
    rule("instant", "badge-type-instant"),
    rule("sorcery", "badge-type-sorcery"),
    rule("enchantment", "badge-type-enchantment"),
    rule("aura", "badge-type-aura"),
    rule("artifact", "badge-type-artifact"),
    rule("planeswalker", "badge-type-planeswalker"),
    rule("land", "badge-type-land"),
    rule("legendary", "badge-type-legendary"),
    rule("saga", "badge-type-saga"),
    rule("commander", "badge-type-commander"),
    rule("token", "badge-type-token"),
    rule("none", "badge-type-none"),
    rule("white", "badge-color-white"),
    rule("blue", "badge-color-blue"),
    rule("black", "badge-color-black"),
    rule("red", "badge-color-red"),
    rule("green", "badge-color-green"),
    rule("multicolor", "badge-color-multicolor"),
    rule("colorless", "badge-color-colorless"),
];

const ONE_PIECE_RULES: &[BadgeRule] = &[
    rule("leader", "badge-type-leader"),
    rule("character", "badge-type-character"),
    rule("event", "badge-type-event"),
    rule("stage", "badge-type-stage"),
    rule("don", "badge-type-don"),
    rule("token", "badge-type-token"),
    rule("none", "badge-type-none"),
    rule("red", "badge-color-red"),
    rule("green", "badge-color-green"),
    rule("blue", "badge-color-blue"),
    rule("purple", "badge-color-purple"),
    rule("black", "badge-color-black"),
    rule("yellow", "badge-color-yellow"),
    rule("multicolor", "badge-color-multicolor"),
    rule("slash", "badge-attr-slash"),
    rule("strike", "badge-attr-strike"),
    rule("ranged", "badge-attr-ranged"),
    rule("special", "badge-attr-special"),
    rule("wisdom", "badge-attr-wisdom"),
    rule("straw-hat-crew", "badge-trait-straw-hat-crew"),
    rule("supernovas", "badge-trait-supernovas"),
    rule("navy", "badge-trait-navy"),
    rule("revolutionary-army", "badge-trait-revolutionary-army"),
    rule("whitebeard-pirates", "badge-trait-whitebeard-pirates"),
    rule("heart-pirates", "badge-trait-heart-pirates"),
];

const DBS_RULES: &[BadgeRule] = &[
    rule("leader", "badge-type-leader"),
    rule("battle", "badge-type-battle"),
    rule("extra", "badge-type-extra"),
    rule("unison", "badge-type-unison"),
    rule("z-extra", "badge-type-z-extra"),
    rule("universe-6", "badge-universe-6"),
    rule("universe-7", "badge-universe-7"),
    rule("universe-11", "badge-universe-11"),
    rule("saiyan", "badge-race-saiyan"),
    rule("earthling", "badge-race-earthling"),
    rule("namekian", "badge-race-namekian"),
    rule("frieza-race", "badge-race-frieza-race"),
    rule("android", "badge-race-android"),
    rule("red", "badge-color-red"),
    rule("blue", "badge-color-blue"),
    rule("green", "badge-color-green"),
    rule("yellow", "badge-color-yellow"),
    rule("black", "badge-color-black"),
    rule("common", "badge-rarity-common"),
    rule("uncommon", "badge-rarity-uncommon"),
    rule("rare", "badge-rarity-rare"),
    rule("super-rare", "badge-rarity-super-rare"),
    rule("special-rare", "badge-rarity-special-rare"),
    rule("secret-rare", "badge-rarity-secret-rare"),
    rule("promo", "badge-rarity-promo"),
    rule("pr", "badge-rarity-pr"),
];

impl Game {
    /// Badge rules specific to this game (shared rules not included).
    pub fn badge_rules(&self) -> &'static [BadgeRule] {
        match self {
            Self::YuGiOh => YUGIOH_RULES,
            Self::Pokemon => POKEMON_RULES,
            Self::Vanguard => VANGUARD_RULES,
            Self::Digimon => DIGIMON_RULES,
            Self::Mtg => MTG_RULES,
            Self::OnePiece => ONE_PIECE_RULES,
            Self::DragonBallSuper => DBS_RULES,
        }
    }
}

/// Find the rule for a slug: shared rules first, then the game's own.
pub fn find_badge_rule(game: Option<Game>, slug: &str) -> Option<&'static BadgeRule> {
    SHARED_BADGE_RULES
        .iter()
        .chain(game.map(|g| g.badge_rules()).unwrap_or(&[]).iter())
        .find(|rule| rule.key == slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_rules_apply_without_a_game() {
        let rule = find_badge_rule(None, "sleeves").unwrap();
        assert_eq!(rule.css_class, "badge-type-sleeves");
        assert!(find_badge_rule(None, "effect").is_none());
    }

    #[test]
    fn game_rules_extend_shared_rules() {
        let rule = find_badge_rule(Some(Game::YuGiOh), "fxyz").unwrap();
        assert_eq!(rule.css_class, "badge-type-cxyz");
        assert!(find_badge_rule(Some(Game::Pokemon), "fxyz").is_none());
    }
}
