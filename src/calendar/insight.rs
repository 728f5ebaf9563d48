//! Day-of-month energy tables and the daily insight card.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

pub const AUSPICIOUS_DAYS: [u32; 6] = [3, 7, 12, 15, 21, 28];
pub const CHALLENGING_DAYS: [u32; 4] = [5, 13, 19, 26];

const ELEMENTS: [&str; 5] = ["Wood", "Fire", "Earth", "Metal", "Water"];
const LUCKY_COLORS: [&str; 5] = [
    "Jade Green",
    "Cosmic Gold",
    "Royal Purple",
    "Ocean Blue",
    "Rose Pink",
];
const LUCKY_DIRECTIONS: [&str; 5] = ["East", "South", "West", "North", "Southeast"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyClass {
    Auspicious,
    Challenging,
    Neutral,
}

impl EnergyClass {
    pub fn of_day(day_of_month: u32) -> Self {
        if AUSPICIOUS_DAYS.contains(&day_of_month) {
            EnergyClass::Auspicious
        } else if CHALLENGING_DAYS.contains(&day_of_month) {
            EnergyClass::Challenging
        } else {
            EnergyClass::Neutral
        }
    }

    pub fn of_date(date: NaiveDate) -> Self {
        Self::of_day(date.day())
    }

    /// Headline shown on the insight card.
    pub fn headline(self) -> &'static str {
        match self {
            EnergyClass::Auspicious => "Highly Favorable",
            EnergyClass::Challenging => "Exercise Caution",
            EnergyClass::Neutral => "Balanced",
        }
    }

    fn summary(self) -> &'static str {
        match self {
            EnergyClass::Auspicious => "The stars align favorably today. This is an excellent day for new beginnings, important meetings, and taking decisive action. The cosmic energy supports growth and manifestation.",
            EnergyClass::Challenging => "The celestial energies call for patience and reflection today. Avoid major decisions and focus on inner work. This is a day for contemplation and preparation.",
            EnergyClass::Neutral => "A day of balanced energies. Routine activities proceed smoothly. Focus on steady progress rather than dramatic changes.",
        }
    }

    fn activities(self) -> [&'static str; 4] {
        match self {
            EnergyClass::Auspicious => [
                "Sign contracts",
                "Start new projects",
                "Make investments",
                "Important meetings",
            ],
            EnergyClass::Challenging => [
                "Meditation",
                "Rest and recovery",
                "Planning",
                "Avoid confrontations",
            ],
            EnergyClass::Neutral => [
                "Daily routines",
                "Light planning",
                "Social activities",
                "Self-care",
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyInsight {
    pub date: NaiveDate,
    pub is_auspicious: bool,
    pub is_challenging: bool,
    pub energy: String,
    pub element: String,
    pub lucky_color: String,
    pub lucky_direction: String,
    pub lucky_number: u32,
    pub summary: String,
    pub activities: Vec<String>,
}

pub fn daily_insight(date: NaiveDate) -> DailyInsight {
    let day = date.day();
    let class = EnergyClass::of_day(day);
    let slot = (day % 5) as usize;

    DailyInsight {
        date,
        is_auspicious: class == EnergyClass::Auspicious,
        is_challenging: class == EnergyClass::Challenging,
        energy: class.headline().to_string(),
        element: ELEMENTS[slot].to_string(),
        lucky_color: LUCKY_COLORS[slot].to_string(),
        lucky_direction: LUCKY_DIRECTIONS[slot].to_string(),
        lucky_number: day % 9 + 1,
        summary: class.summary().to_string(),
        activities: class.activities().iter().map(|a| a.to_string()).collect(),
    }
}
