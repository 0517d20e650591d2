//! Fixed catalog shown on the browse page.

/// A themed group of category links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowseSection {
    pub title: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub links: &'static [&'static str],
}

pub const BROWSE_SECTIONS: &[BrowseSection] = &[
    BrowseSection {
        title: "Fantasy",
        icon: "🧙",
        description: "Magical beings, mythical creatures, and enchanted items",
        links: &[
            "Elf Names",
            "Dragon Names",
            "Wizard Names",
            "Fairy Names",
            "Angel Names",
            "Demon Names",
            "Vampire Names",
            "Werewolf Names",
        ],
    },
    BrowseSection {
        title: "Characters",
        icon: "⚔️",
        description: "Heroes, villains, warriors, and magic users",
        links: &[
            "Warrior Names",
            "Knight Names",
            "Paladin Names",
            "Ranger Names",
            "Barbarian Names",
            "Samurai Names",
            "Ninja Names",
            "Hero Names",
        ],
    },
    BrowseSection {
        title: "Worlds & Locations",
        icon: "🗺️",
        description: "Kingdoms, cities, and mystical places",
        links: &[
            "Kingdom Names",
            "Empire Names",
            "City Names",
            "Town Names",
            "Village Names",
            "Castle Names",
            "Fortress Names",
            "Temple Names",
        ],
    },
    BrowseSection {
        title: "Creatures & Monsters",
        icon: "🐲",
        description: "Mythical beasts and magical creatures",
        links: &[
            "Dragon Names",
            "Griffin Names",
            "Phoenix Names",
            "Unicorn Names",
            "Pegasus Names",
            "Sphinx Names",
            "Chimera Names",
            "Kraken Names",
        ],
    },
    BrowseSection {
        title: "Modern & Sci-Fi",
        icon: "🚀",
        description: "Futuristic and contemporary names",
        links: &[
            "Robot Names",
            "Alien Names",
            "Cyborg Names",
            "Android Names",
            "Spaceship Names",
            "Planet Names",
            "Superhero Names",
            "Supervillain Names",
        ],
    },
    BrowseSection {
        title: "Mythology & Gods",
        icon: "⚡",
        description: "Divine beings and mythological figures",
        links: &[
            "God Names",
            "Goddess Names",
            "Deity Names",
            "Titan Names",
            "Spirit Names",
            "Ghost Names",
            "Undead Names",
            "Celestial Names",
        ],
    },
];
