//! Qimen Dun Jia reading types

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Oracle question mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OracleMode {
    /// Forecasting an outcome
    Divination,
    /// Picking a date or direction
    Selection,
}

impl OracleMode {
    /// Anything other than `divination` is treated as selection.
    pub fn from_wire(raw: Option<&str>) -> Self {
        match raw {
            Some("divination") => OracleMode::Divination,
            _ => OracleMode::Selection,
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            OracleMode::Divination => "Divination (Forecasting)",
            OracleMode::Selection => "Selection (Date/Direction Picking)",
        }
    }
}

/// `POST /functions/v1/qimen-oracle` body. Fields take any JSON value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OracleRequest {
    #[serde(default)]
    pub question: Option<Value>,
    #[serde(default)]
    pub mode: Option<Value>,
    #[serde(default)]
    pub timestamp: Option<Value>,
    #[serde(default)]
    pub location: Option<Value>,
}

impl OracleRequest {
    pub fn mode(&self) -> OracleMode {
        OracleMode::from_wire(self.mode.as_ref().and_then(Value::as_str))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Element {
    Water,
    Fire,
    Wood,
    Metal,
    Earth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    Strong,
    Balanced,
    Weak,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Favorable,
    Challenging,
    Wait,
}

/// One cell of the nine-palace grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Palace {
    /// Luo Shu number, 1-9
    pub position: u8,
    pub direction: String,
    pub element: Element,
    pub deity: String,
    pub deity_meaning: String,
    pub star: String,
    pub star_meaning: String,
    pub door: String,
    pub door_meaning: String,
    pub is_answer_palace: bool,
    pub is_day_palace: bool,
    pub is_hour_palace: bool,
    pub is_void: bool,
    pub strength: Strength,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QimenReading {
    pub palaces: Vec<Palace>,
    pub verdict: Verdict,
    pub verdict_explanation: String,
    pub answer_palace_number: u8,
    pub tactical_advice: String,
    pub best_direction: String,
    pub best_hour: String,
    #[serde(default)]
    pub special_formation: Option<String>,
    #[serde(default)]
    pub special_formation_meaning: Option<String>,
    pub deep_insight: String,
}

impl QimenReading {
    pub fn palace(&self, position: u8) -> Option<&Palace> {
        self.palaces.iter().find(|p| p.position == position)
    }

    pub fn answer_palace(&self) -> Option<&Palace> {
        self.palaces.iter().find(|p| p.is_answer_palace)
    }
}
