//! Встроенный каталог имён для пустой базы и `POST /api/names/testdata`.

use contracts::domain::a001_name::aggregate::NameImportDto;

struct SampleName {
    name: &'static str,
    meaning: &'static str,
    origin: &'static str,
    gender: &'static str,
    category: &'static str,
    subcategory: &'static str,
    popularity: i32,
}

const fn n(
    name: &'static str,
    meaning: &'static str,
    origin: &'static str,
    gender: &'static str,
    category: &'static str,
    subcategory: &'static str,
    popularity: i32,
) -> SampleName {
    SampleName {
        name,
        meaning,
        origin,
        gender,
        category,
        subcategory,
        popularity,
    }
}

const RACES: &str = "Fantasy Races";
const CHARACTERS: &str = "Characters";
const CREATURES: &str = "Creatures";
const MODERN: &str = "Modern";
const MYTHOLOGY: &str = "Mythology";

const CATALOG: &[SampleName] = &[
    n("Aelar", "Noble", "Elvish", "male", RACES, "Elf Names", 87),
    n("Thalion", "Steadfast", "Sindarin", "male", RACES, "Elf Names", 74),
    n("Lirael", "Starlit song", "Elvish", "female", RACES, "Elf Names", 91),
    n("Elowen", "Elm tree", "Cornish", "female", RACES, "Elf Names", 82),
    n("Sylvar", "Of the forest", "Elvish", "unisex", RACES, "Elf Names", 65),
    n("Naeris", "Silver leaf", "Elvish", "unisex", RACES, "Elf Names", 58),
    n("Thorin", "Bold one", "Norse", "male", RACES, "Dwarf Names", 95),
    n("Balgrim", "Stone fist", "Dwarvish", "male", RACES, "Dwarf Names", 61),
    n("Durna", "Iron heart", "Dwarvish", "female", RACES, "Dwarf Names", 54),
    n("Helga Stonebraid", "Holy shield", "Norse", "female", RACES, "Dwarf Names", 47),
    n("Grimbold", "Fierce and bold", "Dwarvish", "male", RACES, "Dwarf Names", 43),
    n("Vyrathex", "Storm wing", "Draconic", "male", RACES, "Dragon Names", 79),
    n("Ignara", "Born of fire", "Draconic", "female", RACES, "Dragon Names", 72),
    n("Kaelthar", "Ancient flame", "Draconic", "unisex", RACES, "Dragon Names", 68),
    n("Szarith", "Black scale", "Draconic", "female", RACES, "Dragon Names", 50),
    n("Vladislav", "Ruler of glory", "Slavic", "male", RACES, "Vampire Names", 77),
    n("Carmilla", "Garden", "Literary", "female", RACES, "Vampire Names", 84),
    n("Nocturne", "Of the night", "French", "unisex", RACES, "Vampire Names", 59),
    n("Morwen", "Dark maiden", "Welsh", "female", RACES, "Vampire Names", 45),
    n("Gruumsh", "One eye", "Orcish", "male", RACES, "Orc Names", 38),
    n("Ulgra", "Tusk mother", "Orcish", "female", RACES, "Orc Names", 33),
    n("Pipwyn", "Little dew", "Sylvan", "female", RACES, "Fairy Names", 56),
    n("Thistle", "Prickly bloom", "English", "unisex", RACES, "Fairy Names", 49),
    n("Merlin", "Sea fortress", "Welsh", "male", CHARACTERS, "Wizard Names", 98),
    n("Morgana", "Sea circle", "Welsh", "female", CHARACTERS, "Wizard Names", 88),
    n("Alaric Ashveil", "Ruler of all", "Gothic", "male", CHARACTERS, "Wizard Names", 66),
    n("Zephyra", "West wind", "Greek", "female", CHARACTERS, "Wizard Names", 57),
    n("Quillon", "Crossguard", "French", "unisex", CHARACTERS, "Wizard Names", 41),
    n("Brannoc", "Raven", "Celtic", "male", CHARACTERS, "Warrior Names", 70),
    n("Valka", "Chooser of the slain", "Norse", "female", CHARACTERS, "Warrior Names", 75),
    n("Ragnar", "Warrior of judgement", "Norse", "male", CHARACTERS, "Warrior Names", 93),
    n("Sable", "Black", "English", "unisex", CHARACTERS, "Warrior Names", 52),
    n("Gawain", "White hawk", "Welsh", "male", CHARACTERS, "Knight Names", 73),
    n("Isolde", "Ice ruler", "Celtic", "female", CHARACTERS, "Knight Names", 69),
    n("Rowan", "Little red one", "Gaelic", "unisex", CHARACTERS, "Ranger Names", 80),
    n("Faelan", "Little wolf", "Irish", "male", CHARACTERS, "Ranger Names", 48),
    n("Pyralis", "Of fire", "Greek", "unisex", CREATURES, "Phoenix Names", 62),
    n("Aurelia", "Golden", "Latin", "female", CREATURES, "Phoenix Names", 71),
    n("Grifflet", "Little griffin", "Arthurian", "male", CREATURES, "Griffin Names", 36),
    n("Stardancer", "Dancer under stars", "English", "female", CREATURES, "Unicorn Names", 64),
    n("Leviathor", "The coiled one", "Hebrew", "male", CREATURES, "Kraken Names", 40),
    n("Unit Seven", "Seventh build", "Industrial", "unisex", MODERN, "Robot Names", 55),
    n("Axiom", "Self-evident truth", "Greek", "unisex", MODERN, "Robot Names", 67),
    n("Cobalt", "Blue metal", "German", "male", MODERN, "Robot Names", 46),
    n("Nova Prime", "New first", "Latin", "female", MODERN, "Robot Names", 60),
    n("Zyx'thar", "Far walker", "Xenolinguistic", "unisex", MODERN, "Alien Names", 53),
    n("Qorra", "Bright moon", "Xenolinguistic", "female", MODERN, "Alien Names", 44),
    n("Serenity", "Peaceful", "English", "unisex", MODERN, "Spaceship Names", 76),
    n("Kronos", "Time", "Greek", "male", MYTHOLOGY, "Titan Names", 78),
    n("Theia", "Divine", "Greek", "female", MYTHOLOGY, "Titan Names", 51),
    n("Selene", "Moon", "Greek", "female", MYTHOLOGY, "Goddess Names", 85),
    n("Freya", "Lady", "Norse", "female", MYTHOLOGY, "Goddess Names", 90),
    n("Tyr", "God", "Norse", "male", MYTHOLOGY, "God Names", 63),
    n("Wraithmere", "Haunted lake", "English", "unisex", MYTHOLOGY, "Ghost Names", 39),
];

/// Каталог как DTO импорта, проходит тот же путь, что и файл импорта
pub fn sample_catalog() -> Vec<NameImportDto> {
    CATALOG
        .iter()
        .map(|s| NameImportDto {
            name: s.name.to_string(),
            meaning: Some(s.meaning.to_string()),
            origin: Some(s.origin.to_string()),
            gender: Some(s.gender.to_string()),
            category: s.category.to_string(),
            subcategory: s.subcategory.to_string(),
            popularity: Some(s.popularity),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_valid() {
        let catalog = sample_catalog();
        assert!(catalog.len() > 40);
        assert!(catalog.iter().all(|dto| dto.validate().is_ok()));
        assert!(catalog.iter().any(|dto| dto.subcategory == "Elf Names"));
    }
}
