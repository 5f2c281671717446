//! The sign table: the twelve tropical signs in canonical zodiacal order.
//!
//! Each sign spans exactly 30 degrees starting at 0° Aries, so the table
//! covers the full 360° ecliptic. Order is fixed and cyclic.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Width of a single sign in degrees.
pub const SIGN_SPAN: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    /// Background fill for wedges of this element.
    pub fn fill_color(self) -> &'static str {
        match self {
            Element::Fire => "#FFEDDB",
            Element::Earth => "#E6FFE6",
            Element::Air => "#E6F2FF",
            Element::Water => "#E6ECFF",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// Static metadata for one sign.
#[derive(Debug)]
struct SignMeta {
    name: &'static str,
    /// Portuguese catalogue name, as found in stored chart records.
    local_name: &'static str,
    glyph: &'static str,
    element: Element,
    ruler: &'static str,
}

const SIGN_TABLE: [SignMeta; 12] = [
    SignMeta {
        name: "Aries",
        local_name: "Áries",
        glyph: "♈",
        element: Element::Fire,
        ruler: "mars",
    },
    SignMeta {
        name: "Taurus",
        local_name: "Touro",
        glyph: "♉",
        element: Element::Earth,
        ruler: "venus",
    },
    SignMeta {
        name: "Gemini",
        local_name: "Gêmeos",
        glyph: "♊",
        element: Element::Air,
        ruler: "mercury",
    },
    SignMeta {
        name: "Cancer",
        local_name: "Câncer",
        glyph: "♋",
        element: Element::Water,
        ruler: "moon",
    },
    SignMeta {
        name: "Leo",
        local_name: "Leão",
        glyph: "♌",
        element: Element::Fire,
        ruler: "sun",
    },
    SignMeta {
        name: "Virgo",
        local_name: "Virgem",
        glyph: "♍",
        element: Element::Earth,
        ruler: "mercury",
    },
    SignMeta {
        name: "Libra",
        local_name: "Libra",
        glyph: "♎",
        element: Element::Air,
        ruler: "venus",
    },
    SignMeta {
        name: "Scorpio",
        local_name: "Escorpião",
        glyph: "♏",
        element: Element::Water,
        ruler: "mars",
    },
    SignMeta {
        name: "Sagittarius",
        local_name: "Sagitário",
        glyph: "♐",
        element: Element::Fire,
        ruler: "jupiter",
    },
    SignMeta {
        name: "Capricorn",
        local_name: "Capricórnio",
        glyph: "♑",
        element: Element::Earth,
        ruler: "saturn",
    },
    SignMeta {
        name: "Aquarius",
        local_name: "Aquário",
        glyph: "♒",
        element: Element::Air,
        ruler: "saturn",
    },
    SignMeta {
        name: "Pisces",
        local_name: "Peixes",
        glyph: "♓",
        element: Element::Water,
        ruler: "jupiter",
    },
];

impl Sign {
    /// All twelve signs in canonical order.
    pub const ALL: [Sign; 12] = [
        Sign::Aries,
        Sign::Taurus,
        Sign::Gemini,
        Sign::Cancer,
        Sign::Leo,
        Sign::Virgo,
        Sign::Libra,
        Sign::Scorpio,
        Sign::Sagittarius,
        Sign::Capricorn,
        Sign::Aquarius,
        Sign::Pisces,
    ];

    /// 0-based position in canonical order (Aries = 0).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Sign at `index`, wrapping modulo 12.
    pub const fn from_index(index: usize) -> Sign {
        Sign::ALL[index % 12]
    }

    /// Ecliptic longitude at which this sign begins.
    pub fn start_longitude(self) -> f64 {
        self.index() as f64 * SIGN_SPAN
    }

    pub fn name(self) -> &'static str {
        SIGN_TABLE[self.index()].name
    }

    pub fn local_name(self) -> &'static str {
        SIGN_TABLE[self.index()].local_name
    }

    pub fn glyph(self) -> &'static str {
        SIGN_TABLE[self.index()].glyph
    }

    pub fn element(self) -> Element {
        SIGN_TABLE[self.index()].element
    }

    /// Traditional ruling planet, lowercase id.
    pub fn ruler(self) -> &'static str {
        SIGN_TABLE[self.index()].ruler
    }

    /// Look a sign up by English or Portuguese name (case-insensitive,
    /// accents required) or by glyph.
    pub fn from_name(name: &str) -> Option<Sign> {
        let trimmed = name.trim();
        let lowered = trimmed.to_lowercase();
        SIGN_TABLE
            .iter()
            .position(|meta| {
                meta.name.to_lowercase() == lowered
                    || meta.local_name.to_lowercase() == lowered
                    || meta.glyph == trimmed
            })
            .map(Sign::from_index)
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSign(pub String);

impl fmt::Display for UnknownSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown zodiac sign: {}", self.0)
    }
}

impl std::error::Error for UnknownSign {}

impl FromStr for Sign {
    type Err = UnknownSign;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sign::from_name(s).ok_or_else(|| UnknownSign(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order_matches_enum() {
        for (i, sign) in Sign::ALL.iter().enumerate() {
            assert_eq!(sign.index(), i);
            assert_eq!(Sign::from_index(i), *sign);
        }
        assert_eq!(Sign::from_index(12), Sign::Aries);
        assert_eq!(Sign::from_index(19), Sign::Scorpio);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Sign::from_name("libra"), Some(Sign::Libra));
        assert_eq!(Sign::from_name(" Sagittarius "), Some(Sign::Sagittarius));
        assert_eq!(Sign::from_name("♓"), Some(Sign::Pisces));
        assert_eq!(Sign::from_name("Ophiuchus"), None);
        assert!("Ophiuchus".parse::<Sign>().is_err());
    }

    #[test]
    fn test_from_local_name() {
        assert_eq!(Sign::from_name("Áries"), Some(Sign::Aries));
        assert_eq!(Sign::from_name("escorpião"), Some(Sign::Scorpio));
        assert_eq!(Sign::from_name("CAPRICÓRNIO"), Some(Sign::Capricorn));
        assert_eq!(Sign::from_name("Peixes"), Some(Sign::Pisces));
        assert_eq!(Sign::Gemini.local_name(), "Gêmeos");
        for sign in Sign::ALL {
            assert_eq!(Sign::from_name(sign.local_name()), Some(sign));
        }
    }

    #[test]
    fn test_metadata() {
        assert_eq!(Sign::Leo.element(), Element::Fire);
        assert_eq!(Sign::Leo.ruler(), "sun");
        assert_eq!(Sign::Leo.element().fill_color(), "#FFEDDB");
        assert_eq!(Sign::Pisces.element().fill_color(), "#E6ECFF");
        assert_eq!(Sign::Capricorn.start_longitude(), 270.0);
        assert_eq!(Sign::Cancer.to_string(), "Cancer");
    }
}
