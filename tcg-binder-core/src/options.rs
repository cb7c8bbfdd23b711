//! Dropdown options for the type and rarity filters, per game.

use crate::Game;

/// One filter dropdown entry.
///
/// `value` is what the filter engine receives when the entry is chosen; `key`
/// is the vocabulary key for its label. A `None` key marks a disabled
/// separator whose `value` is shown verbatim. The first entry of every list
/// has an empty value and means "no filter".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOption {
    pub value: &'static str,
    pub key: Option<&'static str>,
}

impl FilterOption {
    pub fn is_separator(&self) -> bool {
        self.key.is_none()
    }
}

const fn opt(value: &'static str, key: &'static str) -> FilterOption {
    FilterOption {
        value,
        key: Some(key),
    }
}

const fn sep(label: &'static str) -> FilterOption {
    FilterOption {
        value: label,
        key: None,
    }
}

const YUGIOH_TYPES: &[FilterOption] = &[
    opt("", "allTypes"),
    sep("───── MONSTERS ─────"),
    opt("Monster", "monsters"),
    opt("Monster (Vanilla)", "vanilla"),
    opt("Monster (Effect)", "effect"),
    opt("Monster (Ritual)", "ritual"),
    opt("Monster (Fusion)", "fusion"),
    opt("Monster (Synchro)", "synchro"),
    opt("Monster (XYZ)", "xyz"),
    opt("Monster (CXYZ)", "cxyz"),
    opt("Monster (FXYZ)", "fxyz"),
    opt("Monster (SXYZ)", "sxyz"),
    opt("Monster (Pendulum)", "pendulum"),
    opt("Monster (Link)", "link"),
    opt("Monster (Link-1)", "link-1"),
    opt("Monster (Link-2)", "link-2"),
    opt("Monster (Link-3)", "link-3"),
    opt("Monster (Link-4)", "link-4"),
    opt("Monster (Link-5)", "link-5"),
    opt("Monster (Link-6)", "link-6"),
    sep("───── MONSTER SUBTYPES ─────"),
    opt("Monster (Tuner)", "tuner"),
    opt("Monster (Toon)", "toon"),
    sep("───── SPELLS ─────"),
    opt("Spell", "spells"),
    opt("Spell (Normal)", "normal"),
    opt("Spell (Quick-Play)", "quickplay"),
    opt("Spell (Continuous)", "continuous"),
    opt("Spell (Equip)", "equip"),
    opt("Spell (Terrain)", "terrain"),
    opt("Spell (Ritual)", "spell-ritual"),
    sep("───── TRAPS ─────"),
    opt("Trap", "traps"),
    opt("Trap (Normal)", "normal"),
    opt("Trap (Continuous)", "continuous"),
    opt("Trap (Counter)", "counter"),
    sep("───── OTHER ─────"),
    opt("Token", "token"),
];

const YUGIOH_RARITIES: &[FilterOption] = &[
    opt("", "rarityAll"),
    opt("Common", "common"),
    opt("Rare", "rare"),
    opt("Super Rare", "superrare"),
    opt("Ultra Rare", "ultrarare"),
    opt("Secret Rare", "secretrare"),
    opt("Ghost Rare", "ghostrare"),
    opt("Collectors Rare", "collectorsrare"),
    opt("Ultimate Rare", "ultimaterare"),
    opt("Unknown", "unknown"),
    opt("Fake", "fake"),
];

const POKEMON_TYPES: &[FilterOption] = &[
    opt("", "allTypes"),
    opt("Pokémon", "pokemon"),
    sep("───── STAGES ─────"),
    opt("Base", "base"),
    opt("Stage 1", "stage-1"),
    opt("Stage 2", "stage-2"),
    opt("MEGA", "mega"),
    sep("───── TYPES ─────"),
    opt("Grass", "grass"),
    opt("Fire", "fire"),
    opt("Water", "water"),
    opt("Lightning", "lightning"),
    opt("Psychic", "psychic"),
    opt("Fighting", "fighting"),
    opt("Darkness", "darkness"),
    opt("Metal", "metal"),
    opt("Dragon", "dragon"),
    opt("Fairy", "fairy"),
    opt("Colorless", "colorless"),
    sep("───── OTHER CARDS ─────"),
    opt("Energy", "energy"),
    opt("Special Energy", "special-energy"),
    opt("Supporter", "supporter"),
    opt("Trainer", "trainer"),
    opt("Item", "item"),
    opt("Stadium", "stadium"),
    opt("None", "none"),
];

const POKEMON_RARITIES: &[FilterOption] = &[
    opt("", "rarityAll"),
    opt("Common", "common"),
    opt("Uncommon", "uncommon"),
    opt("Rare", "rare"),
    opt("Holo Rare", "holorare"),
    opt("Ultra Rare", "ultrarare"),
    opt("Secret Rare", "secretrare"),
    opt("Unknown", "unknown"),
    opt("Fake", "fake"),
];

const VANGUARD_TYPES: &[FilterOption] = &[
    opt("", "allTypes"),
    sep("───── UNIT TYPES ─────"),
    opt("Unit", "unit"),
    opt("Trigger Unit", "trigger"),
    opt("G-Unit", "g-unit"),
    opt("G-Guardian", "g-guardian"),
    opt("Order", "order"),
    opt("Token", "token"),
    sep("───── RACES ─────"),
    opt("Human", "human"),
    opt("Angel", "angel"),
    opt("Demon", "demon"),
    opt("Elf", "elf"),
    opt("Succubus", "succubus"),
    opt("Vampire", "vampire"),
    opt("Dragoroid", "dragoroid"),
    opt("Mermaid", "mermaid"),
    opt("Quintuplet", "quintuplet"),
    opt("Cyberoid", "cyberoid"),
    opt("Bioroid", "bioroid"),
    opt("Warbeast", "warbeast"),
    sep("───── MECHANICS ─────"),
    opt("Grade 0", "grade-0"),
    opt("Grade 1", "grade-1"),
    opt("Grade 2", "grade-2"),
    opt("Grade 3", "grade-3"),
    opt("Grade 4", "grade-4"),
    opt("Stride", "stride"),
    opt("Imaginary Gift", "imaginary-gift"),
    opt("Overdress", "overdress"),
    opt("Persona Ride", "persona-ride"),
    sep("───── NATIONS ─────"),
    opt("Dragon Empire", "dragon-empire"),
    opt("Dark States", "dark-states"),
    opt("Brandt Gate", "brandt-gate"),
    opt("Keter Sanctuary", "keter-sanctuary"),
    opt("Stoicheia", "stoicheia"),
    opt("Lyrical Monasterio", "lyrical-monasterio"),
    sep("───── CLANS ─────"),
    opt("Royal Paladin", "royal-paladin"),
    opt("Kagero", "kagero"),
    opt("Aqua Force", "aqua-force"),
    opt("Shadow Paladin", "shadow-paladin"),
    opt("Genesis", "genesis"),
    opt("Gold Paladin", "gold-paladin"),
    opt("Oracle Think Tank", "oracle-think-tank"),
    opt("Dark Irregulars", "dark-irregulars"),
    opt("Narukami", "narukami"),
    opt("Bermuda Triangle", "bermuda-triangle"),
    opt("Great Nature", "great-nature"),
    opt("Neo Nectar", "neo-nectar"),
    opt("Megacolony", "megacolony"),
    opt("Granblue", "granblue"),
    opt("Dimension Police", "dimension-police"),
    opt("Spike Brothers", "spike-brothers"),
    opt("Angel Feather", "angel-feather"),
    opt("Nubatama", "nubatama"),
    opt("Link Joker", "link-joker"),
    opt("Tachikaze", "tachikaze"),
];

const VANGUARD_RARITIES: &[FilterOption] = &[
    opt("", "rarityAll"),
    opt("Common", "c"),
    opt("Rare", "r"),
    opt("Double Rare", "rr"),
    opt("Triple Rare", "rrr"),
    opt("Premium Rare", "pr"),
    opt("Generation Rare", "gr"),
    opt("Special Generation Rare", "sgr"),
    opt("Vanguard Rare", "vr"),
    opt("Special Vanguard Rare", "svr"),
    opt("Origin Rare", "or"),
    opt("Image Rare", "imr"),
    opt("Secret Rare", "sec"),
    opt("Reprint", "re"),
    opt("Zeroth Rare", "zr"),
    opt("Wedding SP", "wsp"),
    opt("Promo", "promo"),
];

const DIGIMON_TYPES: &[FilterOption] = &[
    opt("", "allTypes"),
    opt("Digimon", "digimon"),
    opt("Digi-Egg", "digi-egg"),
    opt("Tamer", "tamer"),
    opt("Option", "option"),
    opt("Token", "token"),
    sep("───── FORMS ─────"),
    opt("In-Training", "in-training"),
    opt("Rookie", "rookie"),
    opt("Champion", "champion"),
    opt("Ultimate", "ultimate"),
    opt("Mega", "mega"),
    sep("───── COLORS ─────"),
    opt("Red", "red"),
    opt("Blue", "blue"),
    opt("Yellow", "yellow"),
    opt("Green", "green"),
    opt("Black", "black"),
    opt("Purple", "purple"),
    opt("White", "white"),
    sep("───── TRAITS ─────"),
    opt("CS", "cs"),
    opt("ACCEL", "accel"),
];

const DIGIMON_RARITIES: &[FilterOption] = &[
    opt("", "rarityAll"),
    opt("Common", "common"),
    opt("Uncommon", "uncommon"),
    opt("Rare", "rare"),
    opt("Super Rare", "superrare"),
    opt("Secret Rare", "secretrare"),
    opt("Promo", "promo"),
    opt("Parallel Art", "parallelart"),
];

const MTG_TYPES: &[FilterOption] = &[
    opt("", "allTypes"),
    sep("───── CARD TYPES ─────"),
    opt("Creature", "creature"),
    opt("Instant", "instant"),
    opt("Sorcery", "sorcery"),
    opt("Enchantment", "enchantment"),
    opt("Artifact", "artifact"),
    opt("Aura", "aura"),
    opt("Planeswalker", "planeswalker"),
    opt("Land", "land"),
    opt("Legendary", "legendary"),
    opt("Saga", "saga"),
    opt("Commander", "commander"),
    opt("Token", "token"),
    sep("───── COLOR IDENTITY ─────"),
    opt("White", "white"),
    opt("Blue", "blue"),
    opt("Black", "black"),
    opt("Red", "red"),
    opt("Green", "green"),
    opt("Multicolor", "multicolor"),
    opt("Colorless", "colorless"),
];

const MTG_RARITIES: &[FilterOption] = &[
    opt("", "rarityAll"),
    opt("Common", "common"),
    opt("Uncommon", "uncommon"),
    opt("Rare", "rare"),
    opt("Mythic Rare", "mythicrare"),
    opt("Promo", "promo"),
    opt("Masterpiece", "masterpiece"),
    opt("Special", "special"),
    opt("Timeshifted", "timeshifted"),
    opt("Bonus", "bonus"),
    opt("Token", "token"),
    opt("Unknown", "unknown"),
];

const ONE_PIECE_TYPES: &[FilterOption] = &[
    opt("", "allTypes"),
    sep("───── CARD TYPES ─────"),
    opt("Leader", "leader"),
    opt("Character", "character"),
    opt("Event", "event"),
    opt("Stage", "stage"),
    opt("DON!!", "don"),
    opt("Token", "token"),
    sep("───── COLORS ─────"),
    opt("Red", "red"),
    opt("Green", "green"),
    opt("Blue", "blue"),
    opt("Purple", "purple"),
    opt("Black", "black"),
    opt("Yellow", "yellow"),
    opt("Multicolor", "multicolor"),
    sep("───── ATTRIBUTES ─────"),
    opt("Slash", "slash"),
    opt("Strike", "strike"),
    opt("Ranged", "ranged"),
    opt("Special", "special"),
    opt("Wisdom", "wisdom"),
    sep("───── TRAITS ─────"),
    opt("Straw Hat Crew", "straw-hat-crew"),
    opt("Supernovas", "supernovas"),
    opt("Navy", "navy"),
    opt("Revolutionary Army", "revolutionary-army"),
    opt("Animal Kingdom Pirates", "animal-kingdom-pirates"),
    opt("Big Mom Pirates", "big-mom-pirates"),
    opt("Whitebeard Pirates", "whitebeard-pirates"),
    opt("Red-Hair Pirates", "red-hair-pirates"),
    opt("Donquixote Pirates", "donquixote-pirates"),
    opt("Heart Pirates", "heart-pirates"),
    opt("Kid Pirates", "kid-pirates"),
    opt("Baroque Works", "baroque-works"),
    opt("CP9", "cp9"),
    opt("CP0", "cp0"),
    opt("Seven Warlords of the Sea", "seven-warlords-of-the-sea"),
    opt("Fish-Man", "fish-man"),
    opt("Merfolk", "merfolk"),
    opt("Mink Tribe", "mink-tribe"),
    opt("Skypiea", "skypiea"),
    opt("Wano", "wano"),
    opt("Dressrosa", "dressrosa"),
    opt("Cross Guild", "cross-guild"),
    opt("Buggy's Delivery", "buggys-delivery"),
    opt("Blackbeard Pirates", "blackbeard-pirates"),
    opt("East Blue", "east-blue"),
    opt("Alabasta", "alabasta"),
    opt("Thriller Bark Pirates", "thriller-bark-pirates"),
    opt("Firetank Pirates", "firetank-pirates"),
    opt("Sun Pirates", "sun-pirates"),
    opt("Kuja Pirates", "kuja-pirates"),
    opt("Roger Pirates", "roger-pirates"),
    opt("Spade Pirates", "spade-pirates"),
    opt("Flying Six", "flying-six"),
    opt("Impel Down", "impel-down"),
    opt("World Pirates", "world-pirates"),
    opt("Straw Hat Grand Fleet", "straw-hat-grand-fleet"),
];

const ONE_PIECE_RARITIES: &[FilterOption] = &[
    opt("", "rarityAll"),
    opt("Common", "common"),
    opt("Uncommon", "uncommon"),
    opt("Rare", "rare"),
    opt("Super Rare", "superrare"),
    opt("Secret Rare", "secretrare"),
    opt("Leader (L)", "leader"),
    opt("Promo", "promo"),
    opt("Parallel / Alt Art", "parallel"),
    opt("Special (SP / Manga)", "special"),
    opt("DON!!", "don"),
    opt("Unknown", "unknown"),
];

const DBS_TYPES: &[FilterOption] = &[
    opt("", "allTypes"),
    sep("───── UNIVERSE ─────"),
    opt("Universe 1", "universe-1"),
    opt("Universe 2", "universe-2"),
    opt("Universe 3", "universe-3"),
    opt("Universe 4", "universe-4"),
    opt("Universe 5", "universe-5"),
    opt("Universe 6", "universe-6"),
    opt("Universe 7", "universe-7"),
    opt("Universe 8", "universe-8"),
    opt("Universe 9", "universe-9"),
    opt("Universe 10", "universe-10"),
    opt("Universe 11", "universe-11"),
    opt("Universe 12", "universe-12"),
    sep("───── RACE ─────"),
    opt("Saiyan", "saiyan"),
    opt("Earthling", "earthling"),
    opt("Namekian", "namekian"),
    opt("Frieza Race", "frieza-race"),
    opt("Android", "android"),
    opt("Majin", "majin"),
    opt("God", "god"),
    opt("Angel", "angel"),
    opt("Demon Realm Race", "demon-realm-race"),
    opt("Monster", "monster"),
    opt("Alien", "alien"),
    sep("───── CARD TYPE ─────"),
    opt("Battle", "battle"),
    opt("Extra", "extra"),
    opt("Unison", "unison"),
    opt("Leader", "leader"),
    opt("Z-Leader", "z-leader"),
    opt("Z-Battle", "z-battle"),
    opt("Z-Extra", "z-extra"),
    sep("───── EVENT ─────"),
    opt("Tournament of Power", "tournament-of-power"),
    sep("───── COLOR ─────"),
    opt("Red", "red"),
    opt("Blue", "blue"),
    opt("Green", "green"),
    opt("Yellow", "yellow"),
    opt("Black", "black"),
    opt("Multicolor", "multicolor"),
];

const DBS_RARITIES: &[FilterOption] = &[
    opt("", "rarityAll"),
    opt("Common", "common"),
    opt("Uncommon", "uncommon"),
    opt("Rare", "rare"),
    opt("Super Rare", "super-rare"),
    opt("Special Rare", "special-rare"),
    opt("Secret Rare", "secret-rare"),
    opt("Promo", "promo"),
    opt("PR", "pr"),
];

impl Game {
    /// Entries of the type filter dropdown.
    pub fn type_filter_options(&self) -> &'static [FilterOption] {
        match self {
            Self::YuGiOh => YUGIOH_TYPES,
            Self::Pokemon => POKEMON_TYPES,
            Self::Vanguard => VANGUARD_TYPES,
            Self::Digimon => DIGIMON_TYPES,
            Self::Mtg => MTG_TYPES,
            Self::OnePiece => ONE_PIECE_TYPES,
            Self::DragonBallSuper => DBS_TYPES,
        }
    }

    /// Entries of the rarity filter dropdown.
    pub fn rarity_filter_options(&self) -> &'static [FilterOption] {
        match self {
            Self::YuGiOh => YUGIOH_RARITIES,
            Self::Pokemon => POKEMON_RARITIES,
            Self::Vanguard => VANGUARD_RARITIES,
            Self::Digimon => DIGIMON_RARITIES,
            Self::Mtg => MTG_RARITIES,
            Self::OnePiece => ONE_PIECE_RARITIES,
            Self::DragonBallSuper => DBS_RARITIES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_list_starts_with_the_no_filter_entry() {
        for &game in Game::all() {
            let types = game.type_filter_options();
            assert_eq!(types[0], opt("", "allTypes"), "{:?} types", game);
            let rarities = game.rarity_filter_options();
            assert_eq!(rarities[0], opt("", "rarityAll"), "{:?} rarities", game);
        }
    }

    #[test]
    fn separators_have_no_key() {
        let seps: Vec<_> = Game::YuGiOh
            .type_filter_options()
            .iter()
            .filter(|o| o.is_separator())
            .collect();
        assert_eq!(seps.len(), 5);
        assert!(seps.iter().all(|o| o.value.starts_with('─')));
    }
}
