//! Fixed chart served when the model's reading cannot be parsed.

use super::types::{Element, Palace, QimenReading, Strength, Verdict};

pub const DEITIES: [&str; 8] = [
    "Chief",
    "Serpent",
    "Moon",
    "Six Harmony",
    "Hook",
    "Zhu Que",
    "Nine Earth",
    "Nine Heaven",
];

pub const STARS: [&str; 8] = [
    "Tian Peng",
    "Tian Ren",
    "Tian Chong",
    "Tian Fu",
    "Tian Qin",
    "Tian Xin",
    "Tian Zhu",
    "Tian Ying",
];

pub const DOORS: [&str; 8] = [
    "Open", "Rest", "Life", "Harm", "Delusion", "View", "Death", "Fear",
];

/// Luo Shu layout, read row by row from the south-east corner.
pub const LUO_SHU: [(u8, &str, Element); 9] = [
    (4, "SE", Element::Wood),
    (9, "S", Element::Fire),
    (2, "SW", Element::Earth),
    (3, "E", Element::Wood),
    (5, "Center", Element::Earth),
    (7, "W", Element::Metal),
    (8, "NE", Element::Earth),
    (1, "N", Element::Water),
    (6, "NW", Element::Metal),
];

// Grid slots (not palace numbers) carrying the focal flags.
const ANSWER_SLOT: usize = 4;
const DAY_SLOT: usize = 2;
const HOUR_SLOT: usize = 6;

pub fn fallback_reading() -> QimenReading {
    let palaces = LUO_SHU
        .iter()
        .enumerate()
        .map(|(i, &(position, direction, element))| Palace {
            position,
            direction: direction.to_string(),
            element,
            deity: DEITIES[i % DEITIES.len()].to_string(),
            deity_meaning: "Spiritual guidance awaits".to_string(),
            star: STARS[i % STARS.len()].to_string(),
            star_meaning: "Celestial timing is favorable".to_string(),
            door: DOORS[i % DOORS.len()].to_string(),
            door_meaning: "The path is opening".to_string(),
            is_answer_palace: i == ANSWER_SLOT,
            is_day_palace: i == DAY_SLOT,
            is_hour_palace: i == HOUR_SLOT,
            is_void: false,
            strength: Strength::Balanced,
        })
        .collect();

    QimenReading {
        palaces,
        verdict: Verdict::Favorable,
        verdict_explanation: "The cosmic energies align to support thoughtful action. The Open Door presents itself in a strong position.".to_string(),
        answer_palace_number: 5,
        tactical_advice: "Approach from the Southeast direction. The morning hours (9-11 AM) carry the most auspicious energy.".to_string(),
        best_direction: "SE".to_string(),
        best_hour: "9:00 AM - 11:00 AM".to_string(),
        special_formation: None,
        special_formation_meaning: None,
        deep_insight: "Like water finding its path through stone, persistence combined with flexibility will guide you to success.".to_string(),
    }
}
