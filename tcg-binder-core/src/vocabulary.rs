//! Per-game display strings merged into the session vocabulary on detection.

use crate::Game;

/// A vocabulary entry: `(key, english, italian)`.
pub type Term = (&'static str, &'static str, &'static str);

const YUGIOH_TERMS: &[Term] = &[
    ("collectionheader", "My Yu-Gi-Oh Card Collection", "La mia collezione di carte di Yu-Gi-Oh"),
    ("monsters", "Monsters", "Mostri"),
    ("monster", "Monster", "Mostro"),
    ("vanilla", "— Vanilla", "— Vanilla"),
    ("effect", "— Effect", "— con Effetto"),
    ("ritual", "— Ritual", "— Rituale"),
    ("spell-ritual", "— Ritual", "— Rituale"),
    ("fusion", "— Fusion", "— Fusione"),
    ("synchro", "— Synchro", "— Synchro"),
    ("xyz", "— XYZ", "— XYZ"),
    ("cxyz", "— CXYZ", "—— CXYZ"),
    ("fxyz", "— FXYZ", "—— FXYZ"),
    ("sxyz", "— SXYZ", "—— SXYZ"),
    ("pendulum", "— Pendulum", "— Pendulum"),
    ("link", "— Link", "— Link"),
    ("link-1", "—— Link-1", "—— Link-1"),
    ("link-2", "—— Link-2", "—— Link-2"),
    ("link-3", "—— Link-3", "—— Link-3"),
    ("link-4", "—— Link-4", "—— Link-4"),
    ("link-5", "—— Link-5", "—— Link-5"),
    ("link-6", "—— Link-6", "—— Link-6"),
    ("spells", "Spells", "Magie"),
    ("spell", "Spell", "Magia"),
    ("normal", "— Normal", "— Normale"),
    ("quickplay", "— Quick-Play", "— Rapida"),
    ("continuous", "— Continuous", "— Continua"),
    ("equip", "— Equip", "— Equipaggiamento"),
    ("terrain", "— Terrain", "— Terreno"),
    ("traps", "Traps", "Trappole"),
    ("trap", "Trap", "Trappola"),
    ("counter", "— Counter", "— Contro-Trappola"),
    ("tuner", "Tuner", "Tuner"),
    ("toon", "Toon", "Toon"),
    ("superrare", "Super Rare", "Super Rara"),
    ("ultrarare", "Ultra Rare", "Ultra Rara"),
    ("secretrare", "Secret Rare", "Rara Segreta"),
    ("ghostrare", "Ghost Rare", "Rara Ghost"),
    ("collectorsrare", "Collector's Rare", "Rara da Collezione"),
    ("ultimaterare", "Ultimate Rare", "Rara Definitiva"),
    ("starlightrare", "Starlight Rare", "Rara Starlight"),
    ("quartercenturysecretrare", "Quarter Century Secret Rare", "Rara Segreta Quarter Century"),
];

const POKEMON_TERMS: &[Term] = &[
    ("collectionheader", "My Pokémon Card Collection", "La mia collezione di carte Pokémon"),
    ("pokemon", "Pokémon", "Pokémon"),
    ("base", "Base", "Base"),
    ("stage-1", "Stage 1", "Fase 1"),
    ("stage-2", "Stage 2", "Fase 2"),
    ("mega", "MEGA", "MEGA"),
    ("grass", "Grass", "Erba"),
    ("fire", "Fire", "Fuoco"),
    ("water", "Water", "Acqua"),
    ("lightning", "Lightning", "Lampo"),
    ("psychic", "Psychic", "Psico"),
    ("fighting", "Fighting", "Lotta"),
    ("darkness", "Darkness", "Oscurità"),
    ("metal", "Metal", "Metallo"),
    ("dragon", "Dragon", "Drago"),
    ("fairy", "Fairy", "Folletto"),
    ("colorless", "Colorless", "Incolore"),
    ("energy", "Energy", "Energia"),
    ("special-energy", "Special Energy", "Energia Speciale"),
    ("supporter", "Supporter", "Aiuto"),
    ("trainer", "Trainer", "Allenatore"),
    ("item", "Item", "Strumento"),
    ("stadium", "Stadium", "Stadio"),
    ("uncommon", "Uncommon", "Non Comune"),
    ("holorare", "Holo Rare", "Rara Holo"),
    ("ultrarare", "Ultra Rare", "Ultra Rara"),
    ("secretrare", "Secret Rare", "Rara Segreta"),
];

const VANGUARD_TERMS: &[Term] = &[
    ("collectionheader", "My Vanguard Card Collection", "La mia collezione di carte Vanguard"),
    ("unit", "Unit", "Unità"),
    ("trigger", "Trigger Unit", "Unità Trigger"),
    ("g-unit", "G-Unit", "Unità G"),
    ("g-guardian", "G-Guardian", "G-Guardian"),
    ("order", "Order", "Ordine"),
    ("human", "Human", "Umano"),
    ("angel", "Angel", "Angelo"),
    ("demon", "Demon", "Demone"),
    ("elf", "Elf", "Elfo"),
    ("mermaid", "Mermaid", "Sirena"),
    ("grade-0", "Grade 0", "Grado 0"),
    ("grade-1", "Grade 1", "Grado 1"),
    ("grade-2", "Grade 2", "Grado 2"),
    ("grade-3", "Grade 3", "Grado 3"),
    ("grade-4", "Grade 4", "Grado 4"),
    ("c", "Common", "Comune"),
    ("r", "Rare", "Rara"),
    ("rr", "Double Rare", "Doppia Rara"),
    ("rrr", "Triple Rare", "Tripla Rara"),
    ("sec", "Secret Rare", "Rara Segreta"),
    ("re", "Reprint", "Ristampa"),
    ("promo", "Promo", "Promo"),
];

const DIGIMON_TERMS: &[Term] = &[
    ("collectionheader", "My Digimon Card Collection", "La mia collezione di carte Digimon"),
    ("digimon", "Digimon", "Digimon"),
    ("digi-egg", "Digi-Egg", "Digi-Uovo"),
    ("tamer", "Tamer", "Domatore"),
    ("option", "Option", "Opzione"),
    ("in-training", "In-Training", "In Allenamento"),
    ("rookie", "Rookie", "Primo Livello"),
    ("champion", "Champion", "Campione"),
    ("ultimate", "Ultimate", "Evoluto"),
    ("mega", "Mega", "Mega"),
    ("red", "Red", "Rosso"),
    ("blue", "Blue", "Blu"),
    ("yellow", "Yellow", "Giallo"),
    ("green", "Green", "Verde"),
    ("black", "Black", "Nero"),
    ("purple", "Purple", "Viola"),
    ("white", "White", "Bianco"),
    ("uncommon", "Uncommon", "Non Comune"),
    ("superrare", "Super Rare", "Super Rara"),
    ("secretrare", "Secret Rare", "Rara Segreta"),
    ("promo", "Promo", "Promo"),
    ("parallelart", "Parallel Art", "Arte Parallela"),
];

const MTG_TERMS: &[Term] = &[
    ("collectionheader", "My Magic Card Collection", "La mia collezione di carte Magic"),
    ("creature", "Creature", "Creatura"),
    ("instant", "Instant", "Istantaneo"),
    ("sorcery", "Sorcery", "Stregoneria"),
    ("enchantment", "Enchantment", "Incantesimo"),
    ("artifact", "Artifact", "Artefatto"),
    ("aura", "Aura", "Aura"),
    ("planeswalker", "Planeswalker", "Planeswalker"),
    ("land", "Land", "Terra"),
    ("legendary", "Legendary", "Leggendario"),
    ("saga", "Saga", "Saga"),
    ("commander", "Commander", "Comandante"),
    ("white", "White", "Bianco"),
    ("blue", "Blue", "Blu"),
    ("black", "Black", "Nero"),
    ("red", "Red", "Rosso"),
    ("green", "Green", "Verde"),
    ("multicolor", "Multicolor", "Multicolore"),
    ("colorless", "Colorless", "Incolore"),
    ("uncommon", "Uncommon", "Non Comune"),
    ("mythicrare", "Mythic Rare", "Rara Mitica"),
    ("promo", "Promo", "Promo"),
    ("special", "Special", "Speciale"),
];

const ONE_PIECE_TERMS: &[Term] = &[
    ("collectionheader", "My One Piece Card Collection", "La mia collezione di carte One Piece"),
    ("leader", "Leader", "Leader"),
    ("character", "Character", "Personaggio"),
    ("event", "Event", "Evento"),
    ("stage", "Stage", "Terreno"),
    ("don", "DON!!", "DON!!"),
    ("red", "Red", "Rosso"),
    ("green", "Green", "Verde"),
    ("blue", "Blue", "Blu"),
    ("purple", "Purple", "Viola"),
    ("black", "Black", "Nero"),
    ("yellow", "Yellow", "Giallo"),
    ("multicolor", "Multicolor", "Multicolore"),
    ("slash", "Slash", "Taglio"),
    ("strike", "Strike", "Colpo"),
    ("ranged", "Ranged", "Distanza"),
    ("special", "Special", "Speciale"),
    ("wisdom", "Wisdom", "Saggezza"),
    ("navy", "Navy", "Marina"),
    ("uncommon", "Uncommon", "Non Comune"),
    ("superrare", "Super Rare", "Super Rara"),
    ("secretrare", "Secret Rare", "Rara Segreta"),
    ("promo", "Promo", "Promo"),
    ("parallel", "Parallel / Alt Art", "Parallela / Alt Art"),
];

const DBS_TERMS: &[Term] = &[
    (
        "collectionheader",
        "My Dragon Ball Super Card Collection",
        "La mia collezione di carte Dragon Ball Super",
    ),
    ("battle", "Battle", "Battaglia"),
    ("extra", "Extra", "Extra"),
    ("unison", "Unison", "Unison"),
    ("leader", "Leader", "Leader"),
    ("saiyan", "Saiyan", "Saiyan"),
    ("earthling", "Earthling", "Terrestre"),
    ("namekian", "Namekian", "Namecciano"),
    ("android", "Android", "Androide"),
    ("god", "God", "Divinità"),
    ("angel", "Angel", "Angelo"),
    ("tournament-of-power", "Tournament of Power", "Torneo del Potere"),
    ("red", "Red", "Rosso"),
    ("blue", "Blue", "Blu"),
    ("green", "Green", "Verde"),
    ("yellow", "Yellow", "Giallo"),
    ("black", "Black", "Nero"),
    ("multicolor", "Multicolor", "Multicolore"),
    ("uncommon", "Uncommon", "Non Comune"),
    ("super-rare", "Super Rare", "Super Rara"),
    ("special-rare", "Special Rare", "Rara Speciale"),
    ("secret-rare", "Secret Rare", "Rara Segreta"),
    ("promo", "Promo", "Promo"),
];

impl Game {
    /// Display strings specific to this game.
    pub fn vocabulary(&self) -> &'static [Term] {
        match self {
            Self::YuGiOh => YUGIOH_TERMS,
            Self::Pokemon => POKEMON_TERMS,
            Self::Vanguard => VANGUARD_TERMS,
            Self::Digimon => DIGIMON_TERMS,
            Self::Mtg => MTG_TERMS,
            Self::OnePiece => ONE_PIECE_TERMS,
            Self::DragonBallSuper => DBS_TERMS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_game_names_its_collection() {
        for &game in Game::all() {
            let header = game.vocabulary().iter().find(|(k, _, _)| *k == "collectionheader");
            assert!(header.is_some(), "{:?} has no collection header", game);
        }
    }

    #[test]
    fn keys_are_unique_per_game() {
        for &game in Game::all() {
            let terms = game.vocabulary();
            for (i, (key, _, _)) in terms.iter().enumerate() {
                assert!(
                    !terms[i + 1..].iter().any(|(k, _, _)| k == key),
                    "{:?} repeats key '{}'",
                    game,
                    key
                );
            }
        }
    }
}
