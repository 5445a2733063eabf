use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Archetype {
    pub number: u32,
    pub name: &'static str,
    pub symbol: &'static str,
    pub keywords: &'static str,
}

const ARCHETYPES: [Archetype; 9] = [
    Archetype {
        number: 1,
        name: "The Individual",
        symbol: "☉",
        keywords: "Leadership, independence, originality",
    },
    Archetype {
        number: 2,
        name: "The Diplomat",
        symbol: "☽",
        keywords: "Harmony, cooperation, sensitivity",
    },
    Archetype {
        number: 3,
        name: "The Communicator",
        symbol: "☿",
        keywords: "Expression, creativity, joy",
    },
    Archetype {
        number: 4,
        name: "The Builder",
        symbol: "♄",
        keywords: "Stability, practicality, organization",
    },
    Archetype {
        number: 5,
        name: "The Freedom Seeker",
        symbol: "♃",
        keywords: "Change, adventure, versatility",
    },
    Archetype {
        number: 6,
        name: "The Nurturer",
        symbol: "♀",
        keywords: "Responsibility, love, harmony",
    },
    Archetype {
        number: 7,
        name: "The Seeker",
        symbol: "☾",
        keywords: "Analysis, wisdom, spirituality",
    },
    Archetype {
        number: 8,
        name: "The Achiever",
        symbol: "♅",
        keywords: "Power, abundance, authority",
    },
    Archetype {
        number: 9,
        name: "The Humanitarian",
        symbol: "♆",
        keywords: "Compassion, completion, selflessness",
    },
];

/// Only 1-9 have an archetype.
pub fn archetype(number: u32) -> Option<&'static Archetype> {
    ARCHETYPES.iter().find(|a| a.number == number)
}
