//! Compatibility reading types
//!
//! Wire names are camelCase to match what the dashboard sends and renders.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Birth data for one side of the match. Every field is optional and
/// accepts any JSON value; gaps are rendered as `Unknown` in the prompt.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerProfile {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub birth_date: Option<Value>,
    #[serde(default)]
    pub birth_time: Option<Value>,
    #[serde(default)]
    pub birth_location: Option<Value>,
}

/// `POST /functions/v1/cosmic-match` body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRequest {
    #[serde(default)]
    pub user_a: Option<PartnerProfile>,
    #[serde(default)]
    pub user_b: Option<PartnerProfile>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectionType {
    #[serde(rename = "Twin Flame")]
    TwinFlame,
    Soulmate,
    #[serde(rename = "Karmic Teacher")]
    KarmicTeacher,
    #[serde(rename = "Divine Complement")]
    DivineComplement,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementalAlchemy {
    pub user_a_element: String,
    pub user_b_element: String,
    pub alchemy_description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    /// 0-100
    pub resonance_score: u8,
    pub connection_type: ConnectionType,
    pub connection_description: String,
    pub elemental_alchemy: ElementalAlchemy,
    pub the_gift: String,
    pub the_lesson: String,
    pub the_friction: String,
    pub harmony_areas: Vec<String>,
    pub growth_areas: Vec<String>,
}

impl MatchResult {
    /// Reading served when the model's answer cannot be parsed.
    pub fn fallback() -> Self {
        Self {
            resonance_score: 75,
            connection_type: ConnectionType::Soulmate,
            connection_description: "A deep soul connection that transcends time and space."
                .to_string(),
            elemental_alchemy: ElementalAlchemy {
                user_a_element: "Fire".to_string(),
                user_b_element: "Water".to_string(),
                alchemy_description:
                    "Your Fire creates steam with their Water, generating transformative energy."
                        .to_string(),
            },
            the_gift: "Passion and inspiration that ignites their creative spirit.".to_string(),
            the_lesson: "Emotional depth and intuitive wisdom.".to_string(),
            the_friction: "Intensity of emotions may occasionally overwhelm.".to_string(),
            harmony_areas: vec![
                "Communication".to_string(),
                "Shared Values".to_string(),
                "Emotional Connection".to_string(),
            ],
            growth_areas: vec!["Patience".to_string(), "Compromise".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fallback_wire_shape() {
        let value = serde_json::to_value(MatchResult::fallback()).unwrap();
        assert_eq!(
            value,
            json!({
                "resonanceScore": 75,
                "connectionType": "Soulmate",
                "connectionDescription": "A deep soul connection that transcends time and space.",
                "elementalAlchemy": {
                    "userAElement": "Fire",
                    "userBElement": "Water",
                    "alchemyDescription": "Your Fire creates steam with their Water, generating transformative energy."
                },
                "theGift": "Passion and inspiration that ignites their creative spirit.",
                "theLesson": "Emotional depth and intuitive wisdom.",
                "theFriction": "Intensity of emotions may occasionally overwhelm.",
                "harmonyAreas": ["Communication", "Shared Values", "Emotional Connection"],
                "growthAreas": ["Patience", "Compromise"]
            })
        );
    }

    #[test]
    fn test_connection_type_names() {
        let types: Vec<ConnectionType> = serde_json::from_value(json!([
            "Twin Flame",
            "Soulmate",
            "Karmic Teacher",
            "Divine Complement"
        ]))
        .unwrap();
        assert_eq!(
            types,
            vec![
                ConnectionType::TwinFlame,
                ConnectionType::Soulmate,
                ConnectionType::KarmicTeacher,
                ConnectionType::DivineComplement
            ]
        );
    }

    #[test]
    fn test_request_tolerates_missing_fields() {
        let req: MatchRequest =
            serde_json::from_value(json!({"userA": {"name": "You", "birthDate": "1990-01-15"}}))
                .unwrap();
        let a = req.user_a.unwrap();
        assert_eq!(a.name, Some(json!("You")));
        assert!(a.birth_time.is_none());
        assert!(req.user_b.is_none());
    }

    #[test]
    fn test_request_accepts_non_string_fields() {
        let req: MatchRequest = serde_json::from_value(json!({
            "userA": {"name": "You", "birthDate": 19900115, "birthTime": null},
            "userB": {"name": ["Sam"], "birthLocation": {"city": "Oslo"}}
        }))
        .unwrap();
        let a = req.user_a.unwrap();
        assert_eq!(a.birth_date, Some(json!(19900115)));
        // serde maps an explicit null to None
        assert!(a.birth_time.is_none());
        assert_eq!(req.user_b.unwrap().birth_location, Some(json!({"city": "Oslo"})));
    }
}
