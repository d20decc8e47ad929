//! Fixed display palette for project cards and device frames.
//!
//! Every colour is a design-time constant. Cards pick their palette entry by
//! position (`Palette::cycle`), and the light/dark tables are selected as a
//! whole by the active [`crate::app::ColorMode`] — the two are never mixed.

/// One of the eight named card colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Palette {
    Blue,
    Dark,
    Green,
    Orange,
    Pink,
    Purple,
    Silver,
    Yellow,
}

/// All palette entries, in cycling order.
pub const ALL: [Palette; 8] = [
    Palette::Blue,
    Palette::Dark,
    Palette::Green,
    Palette::Orange,
    Palette::Pink,
    Palette::Purple,
    Palette::Silver,
    Palette::Yellow,
];

impl Palette {
    /// Deterministic colour for the card at `index` in the feed.
    pub fn cycle(index: usize) -> Self {
        ALL[index % ALL.len()]
    }

    /// Case-insensitive lookup by name. Unknown names are not an error;
    /// callers fall back to rendering without a palette.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "blue" => Some(Self::Blue),
            "dark" => Some(Self::Dark),
            "green" => Some(Self::Green),
            "orange" => Some(Self::Orange),
            "pink" => Some(Self::Pink),
            "purple" => Some(Self::Purple),
            "silver" => Some(Self::Silver),
            "yellow" => Some(Self::Yellow),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Dark => "dark",
            Self::Green => "green",
            Self::Orange => "orange",
            Self::Pink => "pink",
            Self::Purple => "purple",
            Self::Silver => "silver",
            Self::Yellow => "yellow",
        }
    }

    /// Primary hue, used for title banners and filled buttons.
    pub fn primary(self) -> &'static str {
        match self {
            Self::Blue => "#A9C7E1",
            Self::Dark => "#333333",
            Self::Green => "#B3D1C4",
            Self::Orange => "#FFBDA2",
            Self::Pink => "#ffcfc1",
            Self::Purple => "#AAA5D3",
            Self::Silver => "#C3C6C7",
            Self::Yellow => "#f9ce84",
        }
    }

    /// Fixed companion shade of the primary hue, used for outlined buttons.
    pub fn secondary(self) -> &'static str {
        match self {
            Self::Blue => "#6C9FB8",
            Self::Dark => "#444444",
            Self::Green => "#A1D6A1",
            Self::Orange => "#FF7C4A",
            Self::Pink => "#FFB3B3",
            Self::Purple => "#B78EC6",
            Self::Silver => "#A6B0B0",
            Self::Yellow => "#F4D185",
        }
    }

    /// Path to the bezel artwork for this colour, served from `public/`.
    pub fn bezel_asset(self) -> String {
        format!("/imacs/{}.svg", self.name())
    }
}

/// Background/text table for one colour mode. Selected wholesale by
/// [`crate::app::ColorMode`]; individual entries are never cross-picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModePalette {
    /// Page background.
    pub surface: &'static str,
    /// Card/panel background.
    pub panel: &'static str,
    /// Primary text.
    pub text: &'static str,
    /// Secondary text (descriptions).
    pub muted: &'static str,
}

pub const LIGHT: ModePalette = ModePalette {
    surface: "#ffffff",
    panel: "#f4f4f4",
    text: "#000000",
    muted: "#555555",
};

pub const DARK: ModePalette = ModePalette {
    surface: "#333333",
    panel: "#212121",
    text: "#ffffff",
    muted: "#cccccc",
};

/// The whole table for the active mode.
pub fn for_mode(mode: crate::app::ColorMode) -> ModePalette {
    if mode.is_dark() {
        DARK
    } else {
        LIGHT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_wraps_around_the_palette() {
        assert_eq!(Palette::cycle(0), Palette::Blue);
        assert_eq!(Palette::cycle(7), Palette::Yellow);
        assert_eq!(Palette::cycle(8), Palette::Blue);
        assert_eq!(Palette::cycle(19), Palette::Green);
        for i in 0..ALL.len() {
            assert_eq!(Palette::cycle(i), Palette::cycle(i + ALL.len()));
        }
    }

    #[test]
    fn lookup_by_name_is_case_insensitive() {
        assert_eq!(Palette::from_name("blue"), Some(Palette::Blue));
        assert_eq!(Palette::from_name("Blue"), Some(Palette::Blue));
        assert_eq!(Palette::from_name("YELLOW"), Some(Palette::Yellow));
    }

    #[test]
    fn unknown_name_yields_no_palette() {
        assert_eq!(Palette::from_name("teal"), None);
        assert_eq!(Palette::from_name(""), None);
    }

    #[test]
    fn names_round_trip() {
        for palette in ALL {
            assert_eq!(Palette::from_name(palette.name()), Some(palette));
        }
    }

    #[test]
    fn secondary_is_a_fixed_companion_of_primary() {
        assert_eq!(Palette::Blue.primary(), "#A9C7E1");
        assert_eq!(Palette::Blue.secondary(), "#6C9FB8");
        assert_eq!(Palette::Dark.secondary(), "#444444");
    }

    #[test]
    fn bezel_assets_are_distinct_per_colour() {
        let mut paths: Vec<_> = ALL.iter().map(|p| p.bezel_asset()).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), ALL.len());
        assert_eq!(Palette::Silver.bezel_asset(), "/imacs/silver.svg");
    }

    #[test]
    fn mode_selects_one_table_wholesale() {
        use crate::app::ColorMode;
        assert_eq!(for_mode(ColorMode::Light), LIGHT);
        assert_eq!(for_mode(ColorMode::Dark), DARK);
    }

    #[test]
    fn light_and_dark_tables_do_not_overlap() {
        assert_ne!(LIGHT.surface, DARK.surface);
        assert_ne!(LIGHT.panel, DARK.panel);
        assert_ne!(LIGHT.text, DARK.text);
        assert_ne!(LIGHT.muted, DARK.muted);
    }
}
