//! Catalogue of the ten classical bodies a chart tracks.
//!
//! Oracles report bodies by lowercase id (`sun`, `moon`, ...); stored records
//! use the Portuguese names. Both resolve to the same entry.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

#[derive(Debug)]
struct BodyMeta {
    id: &'static str,
    local_name: &'static str,
    symbol: &'static str,
}

const BODY_TABLE: [BodyMeta; 10] = [
    BodyMeta {
        id: "sun",
        local_name: "Sol",
        symbol: "☉",
    },
    BodyMeta {
        id: "moon",
        local_name: "Lua",
        symbol: "☽",
    },
    BodyMeta {
        id: "mercury",
        local_name: "Mercúrio",
        symbol: "☿",
    },
    BodyMeta {
        id: "venus",
        local_name: "Vênus",
        symbol: "♀",
    },
    BodyMeta {
        id: "mars",
        local_name: "Marte",
        symbol: "♂",
    },
    BodyMeta {
        id: "jupiter",
        local_name: "Júpiter",
        symbol: "♃",
    },
    BodyMeta {
        id: "saturn",
        local_name: "Saturno",
        symbol: "♄",
    },
    BodyMeta {
        id: "uranus",
        local_name: "Urano",
        symbol: "♅",
    },
    BodyMeta {
        id: "neptune",
        local_name: "Netuno",
        symbol: "♆",
    },
    BodyMeta {
        id: "pluto",
        local_name: "Plutão",
        symbol: "♇",
    },
];

impl Body {
    pub const ALL: [Body; 10] = [
        Body::Sun,
        Body::Moon,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
        Body::Pluto,
    ];

    fn meta(self) -> &'static BodyMeta {
        &BODY_TABLE[self as usize]
    }

    pub fn id(self) -> &'static str {
        self.meta().id
    }

    pub fn local_name(self) -> &'static str {
        self.meta().local_name
    }

    /// Astronomical glyph drawn on the wheel.
    pub fn symbol(self) -> &'static str {
        self.meta().symbol
    }

    /// Resolve an id or Portuguese name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Body> {
        let lowered = name.trim().to_lowercase();
        Body::ALL.iter().copied().find(|body| {
            body.id() == lowered || body.local_name().to_lowercase() == lowered
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_id_and_local_name() {
        assert_eq!(Body::from_name("sun"), Some(Body::Sun));
        assert_eq!(Body::from_name("Sol"), Some(Body::Sun));
        assert_eq!(Body::from_name("PLUTÃO"), Some(Body::Pluto));
        assert_eq!(Body::from_name("chiron"), None);
    }

    #[test]
    fn test_table_matches_enum() {
        for body in Body::ALL {
            assert_eq!(Body::from_name(body.id()), Some(body));
            assert_eq!(Body::from_name(body.local_name()), Some(body));
        }
        assert_eq!(Body::Venus.symbol(), "♀");
        assert_eq!(Body::Moon.symbol(), "☽");
    }
}
