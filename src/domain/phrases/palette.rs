/// Named color palettes and their member colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedPalette {
    Earthy,
    Pastel,
    Vivid,
    Coastal,
    Autumn,
}

impl NamedPalette {
    pub const ALL: &'static [NamedPalette] = &[
        NamedPalette::Earthy,
        NamedPalette::Pastel,
        NamedPalette::Vivid,
        NamedPalette::Coastal,
        NamedPalette::Autumn,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            NamedPalette::Earthy => "earthy",
            NamedPalette::Pastel => "pastel",
            NamedPalette::Vivid => "vivid",
            NamedPalette::Coastal => "coastal",
            NamedPalette::Autumn => "autumn",
        }
    }

    pub fn colors(&self) -> &'static [&'static str] {
        match self {
            NamedPalette::Earthy => &["terracotta", "olive", "ochre", "umber", "cream"],
            NamedPalette::Pastel => &["blush pink", "mint", "powder blue", "lavender", "butter yellow"],
            NamedPalette::Vivid => &["tomato red", "cobalt blue", "sunflower yellow", "emerald", "tangerine"],
            NamedPalette::Coastal => &["sea foam", "driftwood grey", "navy", "sand", "coral"],
            NamedPalette::Autumn => &["rust", "mustard", "burgundy", "forest green", "chestnut"],
        }
    }

    pub fn from_id(id: &str) -> Option<NamedPalette> {
        NamedPalette::ALL.iter().copied().find(|palette| palette.id() == id.trim())
    }
}

impl std::fmt::Display for NamedPalette {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}
